//! Hook module generator
//!
//! Drives one generation run: resolves each contract's target, groups its
//! ABI, claims every hook name in a run-scoped registry, renders fragments and
//! aggregates their imports. The first failure aborts the run.

use hookgen_common::Result;
use tracing::{debug, info};

use super::config::ReactConfig;
use super::contract::Contract;
use super::dialect::Dialect;
use super::emitter::{ContractTarget, HookEmitter, HookFragment};
use super::grouping::{group_abi, HookItem};
use super::imports::ImportAggregator;
use super::naming::{self, HookKind};
use super::plugin::PluginOutput;
use super::registry::HookNameRegistry;
use super::templates::HookTemplateManager;

/// Code generator for react hooks
pub struct ReactHookCodegen {
    config: ReactConfig,
    templates: HookTemplateManager,
}

impl ReactHookCodegen {
    /// Create a new code generator with the given configuration
    pub fn new(config: ReactConfig) -> Result<Self> {
        Ok(Self {
            config,
            templates: HookTemplateManager::new()?,
        })
    }

    /// Generate the hook module for `contracts`, in input order
    pub fn generate(&self, contracts: &[Contract], dialect: Dialect) -> Result<PluginOutput> {
        info!(contracts = contracts.len(), ?dialect, "Generating react hooks");

        let capabilities = dialect.capabilities();
        let mut run = Run {
            config: &self.config,
            emitter: HookEmitter::new(&self.templates, capabilities),
            registry: HookNameRegistry::new(),
            fragments: Vec::new(),
        };
        for contract in contracts {
            run.contract(contract)?;
        }

        let mut imports = ImportAggregator::new(capabilities);
        for fragment in &run.fragments {
            imports.extend(fragment.imports.iter().copied());
        }

        let content = run
            .fragments
            .iter()
            .map(|fragment| fragment.code.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        debug!(
            hooks = run.fragments.len(),
            imports = imports.symbol_count(),
            "Assembled hook module"
        );

        Ok(PluginOutput {
            imports: imports.render(),
            content,
            hooks: run.fragments.into_iter().map(|fragment| fragment.name).collect(),
        })
    }
}

/// State owned by a single generation run
struct Run<'g> {
    config: &'g ReactConfig,
    emitter: HookEmitter<'g>,
    registry: HookNameRegistry,
    fragments: Vec<HookFragment>,
}

impl Run<'_> {
    fn contract(&mut self, contract: &Contract) -> Result<()> {
        let target = ContractTarget::resolve(contract)?;
        let items = group_abi(&contract.abi);
        debug!(contract = %contract.name, items = items.len(), "Generating hooks for contract");

        let has_reads = items.iter().any(|item| matches!(item, HookItem::Read(_)));
        let has_writes = items.iter().any(|item| matches!(item, HookItem::Write(_)));
        let has_events = items.iter().any(|item| matches!(item, HookItem::Event(_)));
        let config = self.config;
        let emitter = &self.emitter;

        let mut hooks = Hooks {
            contract: &contract.name,
            registry: &mut self.registry,
            fragments: &mut self.fragments,
        };

        if config.use_contract {
            hooks.add(HookKind::Contract, |name| emitter.emit_contract(name, &target))?;
        }
        if has_reads && config.use_contract_read {
            hooks.add(HookKind::ContractRead, |name| emitter.emit_read(name, &target, None))?;
        }
        if has_writes && config.use_prepare_contract_write {
            hooks.add(HookKind::PrepareContractWrite, |name| {
                emitter.emit_prepare_write(name, &target, None)
            })?;
        }
        if has_writes && config.use_contract_write {
            hooks.add(HookKind::ContractWrite, |name| emitter.emit_write(name, &target, None))?;
        }
        if has_events && config.use_contract_event {
            hooks.add(HookKind::ContractEvent, |name| emitter.emit_event(name, &target, None))?;
        }

        for item in &items {
            match item {
                HookItem::Read(group) => {
                    if config.use_contract_function_read {
                        hooks.add(HookKind::FunctionRead(group.name), |name| {
                            emitter.emit_read(name, &target, Some(group))
                        })?;
                    }
                }
                HookItem::Write(group) => {
                    if config.use_prepare_contract_function_write {
                        hooks.add(HookKind::PrepareFunctionWrite(group.name), |name| {
                            emitter.emit_prepare_write(name, &target, Some(group))
                        })?;
                    }
                    if config.use_contract_function_write {
                        hooks.add(HookKind::FunctionWrite(group.name), |name| {
                            emitter.emit_write(name, &target, Some(group))
                        })?;
                    }
                }
                HookItem::Event(group) => {
                    if config.use_contract_item_event {
                        hooks.add(HookKind::ItemEvent(group.name), |name| {
                            emitter.emit_event(name, &target, Some(group))
                        })?;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Claims names and collects fragments for one contract
struct Hooks<'r> {
    contract: &'r str,
    registry: &'r mut HookNameRegistry,
    fragments: &'r mut Vec<HookFragment>,
}

impl Hooks<'_> {
    fn add<F>(&mut self, kind: HookKind<'_>, emit: F) -> Result<()>
    where
        F: FnOnce(&str) -> Result<HookFragment>,
    {
        let hook_name = naming::derive(self.contract, kind);
        self.registry.register(&hook_name, self.contract)?;
        debug!(contract = self.contract, hook = %hook_name, "Registered hook");
        self.fragments.push(emit(&hook_name)?);
        Ok(())
    }
}
