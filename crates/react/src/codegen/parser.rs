//! Contract ABI parser
//!
//! Parses contract ABI JSON into an ordered list of items. Item order is kept
//! as declared because generated hooks follow it.

use hookgen_common::{Error, Result};
use serde_json::Value;
use sha3::{Digest, Keccak256};

/// One entry of a contract ABI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiItem {
    Function(AbiFunction),
    Event(AbiEvent),
    Error(AbiError),
    Constructor(AbiFunction),
    Fallback(AbiFunction),
    Receive(AbiFunction),
}

/// State mutability of a function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateMutability {
    Pure,
    View,
    Nonpayable,
    Payable,
}

impl StateMutability {
    /// Whether the function only reads state
    pub fn is_read(&self) -> bool {
        matches!(self, StateMutability::Pure | StateMutability::View)
    }

    fn parse(value: &str) -> Result<Self> {
        match value {
            "pure" => Ok(StateMutability::Pure),
            "view" => Ok(StateMutability::View),
            "nonpayable" => Ok(StateMutability::Nonpayable),
            "payable" => Ok(StateMutability::Payable),
            other => Err(Error::parse(format!("Unknown stateMutability '{}'", other))),
        }
    }
}

/// ABI function definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiFunction {
    /// Function name
    pub name: String,
    /// Function inputs
    pub inputs: Vec<AbiParameter>,
    /// Function outputs
    pub outputs: Vec<AbiParameter>,
    /// State mutability (pure, view, nonpayable, payable)
    pub state_mutability: StateMutability,
}

impl AbiFunction {
    /// Canonical signature, e.g. `transfer(address,uint256)`
    pub fn signature(&self) -> String {
        canonical_signature(&self.name, &self.inputs)
    }

    /// 4-byte function selector as `0x`-prefixed hex
    pub fn selector(&self) -> String {
        let hash = Keccak256::digest(self.signature().as_bytes());
        format!("0x{}", hex::encode(&hash[..4]))
    }
}

/// ABI event definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiEvent {
    /// Event name
    pub name: String,
    /// Event inputs
    pub inputs: Vec<AbiParameter>,
    /// Whether event is anonymous
    pub anonymous: bool,
}

impl AbiEvent {
    /// Canonical signature, e.g. `Transfer(address,address,uint256)`
    pub fn signature(&self) -> String {
        canonical_signature(&self.name, &self.inputs)
    }
}

/// ABI error definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiError {
    /// Error name
    pub name: String,
    /// Error inputs
    pub inputs: Vec<AbiParameter>,
}

/// ABI parameter definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiParameter {
    /// Parameter name
    pub name: String,
    /// Parameter type (e.g., uint256, address, tuple[])
    pub param_type: String,
    /// Internal type (for structs and custom types)
    pub internal_type: Option<String>,
    /// Components (for tuples and structs)
    pub components: Option<Vec<AbiParameter>>,
    /// Whether parameter is indexed (events only)
    pub indexed: bool,
}

impl AbiParameter {
    /// Shorthand for an unnamed, non-indexed parameter of the given type
    pub fn new<S: Into<String>>(param_type: S) -> Self {
        Self {
            name: String::new(),
            param_type: param_type.into(),
            internal_type: None,
            components: None,
            indexed: false,
        }
    }

    /// Canonical type, with tuples expanded into their component types
    pub fn canonical_type(&self) -> String {
        match (&self.components, self.param_type.strip_prefix("tuple")) {
            (Some(components), Some(array_suffix)) => {
                let inner: Vec<String> = components.iter().map(|c| c.canonical_type()).collect();
                format!("({}){}", inner.join(","), array_suffix)
            }
            _ => self.param_type.clone(),
        }
    }
}

fn canonical_signature(name: &str, inputs: &[AbiParameter]) -> String {
    let types: Vec<String> = inputs.iter().map(|p| p.canonical_type()).collect();
    format!("{}({})", name, types.join(","))
}

/// Contract ABI parser
pub struct AbiParser;

impl AbiParser {
    /// Create a new parser instance
    pub fn new() -> Self {
        Self
    }

    /// Parse an ABI file
    pub fn parse_file(&self, file_path: &str) -> Result<Vec<AbiItem>> {
        let content = std::fs::read_to_string(file_path)?;
        self.parse_content(&content)
    }

    /// Parse an ABI from JSON content
    pub fn parse_content(&self, content: &str) -> Result<Vec<AbiItem>> {
        let value: Value = serde_json::from_str(content)?;
        self.parse_value(&value)
    }

    /// Parse an ABI from a JSON value.
    ///
    /// Accepts either a bare ABI array or a compiler artifact with an `abi` field.
    pub fn parse_value(&self, value: &Value) -> Result<Vec<AbiItem>> {
        let abi_array = value
            .as_array()
            .or_else(|| value.get("abi").and_then(|v| v.as_array()))
            .ok_or_else(|| Error::parse("ABI must be an array"))?;

        let mut items = Vec::with_capacity(abi_array.len());
        for item in abi_array {
            let item_type = item.get("type").and_then(|v| v.as_str()).unwrap_or("function");

            match item_type {
                "function" => items.push(AbiItem::Function(self.parse_function(item, "function")?)),
                "event" => items.push(AbiItem::Event(self.parse_event(item)?)),
                "error" => items.push(AbiItem::Error(self.parse_error(item)?)),
                "constructor" => {
                    items.push(AbiItem::Constructor(self.parse_function(item, "constructor")?))
                }
                "fallback" => items.push(AbiItem::Fallback(self.parse_function(item, "fallback")?)),
                "receive" => items.push(AbiItem::Receive(self.parse_function(item, "receive")?)),
                other => {
                    tracing::warn!(item_type = other, "Skipping unknown ABI item type");
                }
            }
        }

        Ok(items)
    }

    fn parse_function(&self, value: &Value, function_type: &str) -> Result<AbiFunction> {
        let name = match value.get("name").and_then(|v| v.as_str()) {
            Some(name) => name.to_string(),
            None if function_type == "function" => {
                return Err(Error::parse("Function must have a name"));
            }
            None => function_type.to_string(),
        };

        let inputs = Self::parse_parameter_list(value, "inputs", false)?;
        let outputs = Self::parse_parameter_list(value, "outputs", false)?;

        let state_mutability = match value.get("stateMutability").and_then(|v| v.as_str()) {
            Some(s) => StateMutability::parse(s)?,
            // Legacy ABIs (pre solc 0.4.16) only carry `constant` / `payable`
            None if value.get("constant").and_then(|v| v.as_bool()).unwrap_or(false) => {
                StateMutability::View
            }
            None if value.get("payable").and_then(|v| v.as_bool()).unwrap_or(false) => {
                StateMutability::Payable
            }
            None => StateMutability::Nonpayable,
        };

        Ok(AbiFunction {
            name,
            inputs,
            outputs,
            state_mutability,
        })
    }

    fn parse_event(&self, value: &Value) -> Result<AbiEvent> {
        let name = value
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::parse("Event must have a name"))?
            .to_string();

        let inputs = Self::parse_parameter_list(value, "inputs", true)?;

        let anonymous = value.get("anonymous").and_then(|v| v.as_bool()).unwrap_or(false);

        Ok(AbiEvent {
            name,
            inputs,
            anonymous,
        })
    }

    fn parse_error(&self, value: &Value) -> Result<AbiError> {
        let name = value
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::parse("Error must have a name"))?
            .to_string();

        let inputs = Self::parse_parameter_list(value, "inputs", false)?;

        Ok(AbiError { name, inputs })
    }

    fn parse_parameter_list(value: &Value, key: &str, with_indexed: bool) -> Result<Vec<AbiParameter>> {
        value
            .get(key)
            .and_then(|v| v.as_array())
            .map(|arr| Self::parse_parameters(arr, with_indexed))
            .transpose()
            .map(Option::unwrap_or_default)
    }

    fn parse_parameters(array: &[Value], with_indexed: bool) -> Result<Vec<AbiParameter>> {
        let mut parameters = Vec::with_capacity(array.len());

        for param in array {
            let name = param.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string();

            let param_type = param
                .get("type")
                .and_then(|v| v.as_str())
                .ok_or_else(|| Error::parse("Parameter must have a type"))?
                .to_string();

            let internal_type = param.get("internalType").and_then(|v| v.as_str()).map(String::from);

            // Tuple components never carry `indexed`
            let components = if param_type.starts_with("tuple") {
                param
                    .get("components")
                    .and_then(|v| v.as_array())
                    .map(|arr| Self::parse_parameters(arr, false))
                    .transpose()?
            } else {
                None
            };

            let indexed = with_indexed && param.get("indexed").and_then(|v| v.as_bool()).unwrap_or(false);

            parameters.push(AbiParameter {
                name,
                param_type,
                internal_type,
                components,
                indexed,
            });
        }

        Ok(parameters)
    }
}

impl Default for AbiParser {
    fn default() -> Self {
        Self::new()
    }
}
