//! Hook emitters
//!
//! Turns a named hook plus its contract target into a code fragment and the
//! symbols that fragment needs imported. Typed and untyped output share the
//! same context; only the dialect capabilities differ.

use hookgen_common::{Error, Result};

use super::contract::{Contract, ContractAddress};
use super::dialect::DialectCapabilities;
use super::grouping::OverloadGroup;
use super::imports::{self, ImportSymbol};
use super::parser::{AbiEvent, AbiFunction};
use super::templates::{self, HookContext, HookTemplateManager};

/// One generated hook declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookFragment {
    pub name: String,
    pub code: String,
    pub imports: Vec<ImportSymbol>,
}

/// How generated hooks locate a contract's ABI and address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractTarget<'a> {
    /// Only the ABI is known; callers pass `address`
    Abi { abi_name: &'a str },
    /// ABI and a single deployed address
    Address { abi_name: &'a str, address_name: &'a str },
    /// Per-chain deployments resolved through the aggregate config object
    Deployments { config_name: &'a str },
}

impl<'a> ContractTarget<'a> {
    /// Resolve the target for a contract, rejecting inconsistent metadata
    pub fn resolve(contract: &'a Contract) -> Result<Self> {
        let meta = &contract.meta;
        match (&contract.address, &meta.address_name) {
            (Some(_), None) => {
                return Err(Error::invalid_metadata(
                    &contract.name,
                    "`address` is set but `addressName` is missing",
                ))
            }
            (None, Some(_)) => {
                return Err(Error::invalid_metadata(
                    &contract.name,
                    "`addressName` is set but `address` is missing",
                ))
            }
            _ => {}
        }

        match (&contract.address, &meta.address_name) {
            (Some(ContractAddress::Deployments(_)), Some(_)) => match &meta.config_name {
                Some(config_name) => Ok(ContractTarget::Deployments { config_name }),
                None => Err(Error::invalid_metadata(
                    &contract.name,
                    "multichain `address` requires `configName`",
                )),
            },
            (Some(ContractAddress::Single(_)), Some(address_name)) => Ok(ContractTarget::Address {
                abi_name: &meta.abi_name,
                address_name,
            }),
            _ => Ok(ContractTarget::Abi {
                abi_name: &meta.abi_name,
            }),
        }
    }

    fn abi_ref(&self) -> String {
        match self {
            ContractTarget::Abi { abi_name } | ContractTarget::Address { abi_name, .. } => abi_name.to_string(),
            ContractTarget::Deployments { config_name } => format!("{}.abi", config_name),
        }
    }

    fn has_address(&self) -> bool {
        !matches!(self, ContractTarget::Abi { .. })
    }
}

/// A preset `functionName` or `eventName` and the signatures behind it
struct Member {
    key: &'static str,
    name: String,
    signatures: Vec<String>,
}

impl Member {
    fn function(group: &OverloadGroup<'_, AbiFunction>) -> Self {
        Self {
            key: "functionName",
            name: group.name.to_string(),
            signatures: if group.is_overloaded() {
                group
                    .members
                    .iter()
                    .map(|f| format!("`{}` (`{}`)", f.signature(), f.selector()))
                    .collect()
            } else {
                Vec::new()
            },
        }
    }

    fn event(group: &OverloadGroup<'_, AbiEvent>) -> Self {
        Self {
            key: "eventName",
            name: group.name.to_string(),
            signatures: if group.is_overloaded() {
                group.members.iter().map(|e| format!("`{}`", e.signature())).collect()
            } else {
                Vec::new()
            },
        }
    }

    fn literal(&self) -> String {
        format!("'{}'", self.name)
    }
}

/// Renders hook fragments for one run
pub struct HookEmitter<'t> {
    templates: &'t HookTemplateManager,
    capabilities: DialectCapabilities,
}

impl<'t> HookEmitter<'t> {
    pub fn new(templates: &'t HookTemplateManager, capabilities: DialectCapabilities) -> Self {
        Self {
            templates,
            capabilities,
        }
    }

    /// `use{Contract}`: contract instance
    pub fn emit_contract(&self, hook_name: &str, target: &ContractTarget<'_>) -> Result<HookFragment> {
        let context = self.context(hook_name, target, "useContract", None);
        self.render(
            templates::CONTRACT,
            context,
            target,
            &[imports::USE_CONTRACT, imports::USE_CONTRACT_CONFIG],
        )
    }

    /// `use{Contract}Read` when `group` is `None`, otherwise one pure/view function
    pub fn emit_read(
        &self,
        hook_name: &str,
        target: &ContractTarget<'_>,
        group: Option<&OverloadGroup<'_, AbiFunction>>,
    ) -> Result<HookFragment> {
        let member = group.map(Member::function);
        let mut context = self.context(hook_name, target, "useContractRead", member.as_ref());
        context.member_bound = member.as_ref().map_or_else(|| "string".to_string(), Member::literal);
        self.render(
            templates::READ,
            context,
            target,
            &[
                imports::USE_CONTRACT_READ,
                imports::USE_CONTRACT_READ_CONFIG,
                imports::READ_CONTRACT_RESULT,
            ],
        )
    }

    /// `usePrepare{Contract}Write` when `group` is `None`, otherwise one mutating function
    pub fn emit_prepare_write(
        &self,
        hook_name: &str,
        target: &ContractTarget<'_>,
        group: Option<&OverloadGroup<'_, AbiFunction>>,
    ) -> Result<HookFragment> {
        let member = group.map(Member::function);
        let mut context = self.context(hook_name, target, "usePrepareContractWrite", member.as_ref());
        context.generic_member = member.is_none();
        context.member_type = member.as_ref().map_or_else(|| "TFunctionName".to_string(), Member::literal);
        self.render(
            templates::PREPARE_WRITE,
            context,
            target,
            &[
                imports::USE_PREPARE_CONTRACT_WRITE,
                imports::USE_PREPARE_CONTRACT_WRITE_CONFIG,
            ],
        )
    }

    /// `use{Contract}Write` when `group` is `None`, otherwise one mutating function.
    ///
    /// The hook takes either a prepared config or, in `recklesslyUnprepared`
    /// mode, raw arguments supplied at call time.
    pub fn emit_write(
        &self,
        hook_name: &str,
        target: &ContractTarget<'_>,
        group: Option<&OverloadGroup<'_, AbiFunction>>,
    ) -> Result<HookFragment> {
        let member = group.map(Member::function);
        let mut context = self.context(hook_name, target, "useContractWrite", member.as_ref());
        context.generic_member = member.is_none();
        context.member_type = member.as_ref().map_or_else(|| "TFunctionName".to_string(), Member::literal);

        let mut unprepared = vec!["abi?: never".to_string()];
        if target.has_address() {
            unprepared.push("address?: never".to_string());
        }
        if let Some(member) = &member {
            context.prepared_overrides = format!(" & {{ functionName?: {} }}", member.literal());
            unprepared.push(format!("functionName?: {}", member.literal()));
        }
        context.unprepared_overrides = unprepared.join("; ");

        self.render(
            templates::WRITE,
            context,
            target,
            &[
                imports::USE_CONTRACT_WRITE,
                imports::USE_CONTRACT_WRITE_CONFIG,
                imports::WRITE_CONTRACT_MODE,
                imports::PREPARE_WRITE_CONTRACT_RESULT,
            ],
        )
    }

    /// `use{Contract}Event` when `group` is `None`, otherwise `use{Contract}On{Event}`
    pub fn emit_event(
        &self,
        hook_name: &str,
        target: &ContractTarget<'_>,
        group: Option<&OverloadGroup<'_, AbiEvent>>,
    ) -> Result<HookFragment> {
        let member = group.map(Member::event);
        let mut context = self.context(hook_name, target, "useContractEvent", member.as_ref());
        context.generic_member = member.is_none();
        context.member_type = member.as_ref().map_or_else(|| "TEventName".to_string(), Member::literal);
        self.render(
            templates::EVENT,
            context,
            target,
            &[imports::USE_CONTRACT_EVENT, imports::USE_CONTRACT_EVENT_CONFIG],
        )
    }

    fn context(
        &self,
        hook_name: &str,
        target: &ContractTarget<'_>,
        primitive: &str,
        member: Option<&Member>,
    ) -> HookContext {
        let typescript = self.capabilities.emit_type_annotations;
        let abi_ref = target.abi_ref();

        let mut omit = vec!["'abi'"];
        let mut fields = format!("abi: {}, ", abi_ref);
        let mut config_extra = String::new();
        let mut preamble = String::new();

        match target {
            ContractTarget::Abi { .. } => {}
            ContractTarget::Address { address_name, .. } => {
                omit.push("'address'");
                fields.push_str(&format!("address: {}, ", address_name));
            }
            ContractTarget::Deployments { config_name } => {
                omit.push("'address'");
                if typescript {
                    fields.push_str(&format!(
                        "address: {0}.address[chainId as keyof typeof {0}.address], ",
                        config_name
                    ));
                    config_extra = format!(" & {{ chainId?: keyof typeof {}.address }}", config_name);
                } else {
                    fields.push_str(&format!("address: {}.address[chainId], ", config_name));
                }
                preamble = "  const { chain } = useNetwork()\n  const chainId = config.chainId ?? chain?.id\n"
                    .to_string();
            }
        }

        if let Some(member) = member {
            omit.push(if member.key == "functionName" {
                "'functionName'"
            } else {
                "'eventName'"
            });
            fields.push_str(&format!("{}: {}, ", member.key, member.literal()));
        }

        HookContext {
            typescript,
            doc_comment: doc_comment(primitive, target, member),
            hook_name: hook_name.to_string(),
            abi_type: format!("typeof {}", abi_ref),
            omit: omit.join(" | "),
            fields,
            config_extra,
            preamble,
            ..Default::default()
        }
    }

    fn render(
        &self,
        template: &str,
        context: HookContext,
        target: &ContractTarget<'_>,
        symbols: &[ImportSymbol],
    ) -> Result<HookFragment> {
        let code = self.templates.render(template, &context)?;
        let mut imports = symbols.to_vec();
        if matches!(target, ContractTarget::Deployments { .. }) {
            imports.push(imports::USE_NETWORK);
        }
        Ok(HookFragment {
            name: context.hook_name,
            code,
            imports,
        })
    }
}

fn doc_comment(primitive: &str, target: &ContractTarget<'_>, member: Option<&Member>) -> String {
    let mut presets = Vec::new();
    match target {
        ContractTarget::Abi { abi_name } => presets.push(format!("`abi` set to __{{@link {}}}__", abi_name)),
        ContractTarget::Address { abi_name, address_name } => {
            presets.push(format!("`abi` set to __{{@link {}}}__", abi_name));
            presets.push(format!("`address` set to __{{@link {}}}__", address_name));
        }
        ContractTarget::Deployments { config_name } => {
            presets.push(format!("`abi` and `address` taken from __{{@link {}}}__", config_name))
        }
    }
    if let Some(member) = member {
        presets.push(format!("`{}` set to `\"{}\"`", member.key, member.name));
    }

    let presets = match presets.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    };

    let mut doc = format!("/**\n * Wraps __{{@link {}}}__ with {}.\n", primitive, presets);
    if let Some(member) = member.filter(|m| !m.signatures.is_empty()) {
        doc.push_str(" *\n * Overloads:\n");
        for signature in &member.signatures {
            doc.push_str(&format!(" * - {}\n", signature));
        }
    }
    doc.push_str(" */\n");
    doc
}
