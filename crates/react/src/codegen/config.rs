//! Generator configuration
//!
//! `ReactConfig` switches individual hook families on or off. `ProjectConfig`
//! is the project file read by the command line tool: output location,
//! dialect and the contracts to bind.

use std::path::{Path, PathBuf};

use hookgen_common::{Error, Result};
use serde::{Deserialize, Serialize};

use super::contract::{Contract, ContractAddress, ContractMeta};
use super::dialect::Dialect;
use super::naming;
use super::parser::AbiParser;

/// Which hooks to generate. Everything is on by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactConfig {
    /// `use{Contract}`
    pub use_contract: bool,
    /// `use{Contract}Read`
    pub use_contract_read: bool,
    /// `use{Contract}{Function}` for pure/view functions
    pub use_contract_function_read: bool,
    /// `use{Contract}Write`
    pub use_contract_write: bool,
    /// `use{Contract}{Function}` for nonpayable/payable functions
    pub use_contract_function_write: bool,
    /// `usePrepare{Contract}Write`
    pub use_prepare_contract_write: bool,
    /// `usePrepare{Contract}{Function}`
    pub use_prepare_contract_function_write: bool,
    /// `use{Contract}Event`
    pub use_contract_event: bool,
    /// `use{Contract}On{Event}`
    pub use_contract_item_event: bool,
}

impl Default for ReactConfig {
    fn default() -> Self {
        Self {
            use_contract: true,
            use_contract_read: true,
            use_contract_function_read: true,
            use_contract_write: true,
            use_contract_function_write: true,
            use_prepare_contract_write: true,
            use_prepare_contract_function_write: true,
            use_contract_event: true,
            use_contract_item_event: true,
        }
    }
}

/// A contract entry of the project file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSource {
    pub name: String,
    /// Path to the ABI JSON, relative to the project file
    pub abi: PathBuf,
    #[serde(default)]
    pub address: Option<ContractAddress>,
    /// Defaults to `{camelName}Abi`
    #[serde(default)]
    pub abi_name: Option<String>,
    /// Defaults to `{camelName}Address` when an address is set
    #[serde(default)]
    pub address_name: Option<String>,
    /// Defaults to `{camelName}Config`
    #[serde(default)]
    pub config_name: Option<String>,
}

impl ContractSource {
    /// Constant names, with defaults filled in
    pub fn meta(&self) -> ContractMeta {
        let base = naming::camel(&self.name);
        ContractMeta {
            abi_name: self.abi_name.clone().unwrap_or_else(|| format!("{}Abi", base)),
            address_name: self
                .address_name
                .clone()
                .or_else(|| self.address.as_ref().map(|_| format!("{}Address", base))),
            config_name: Some(self.config_name.clone().unwrap_or_else(|| format!("{}Config", base))),
        }
    }

    /// Read the ABI and build the contract descriptor
    pub fn load(&self, base_dir: &Path) -> Result<Contract> {
        let abi_path = base_dir.join(&self.abi);
        let abi_path = abi_path
            .to_str()
            .ok_or_else(|| Error::config(format!("ABI path is not valid UTF-8: {}", abi_path.display())))?;
        let abi = AbiParser::new()
            .parse_file(abi_path)
            .map_err(|e| Error::config(format!("Failed to load ABI for {} from {}: {}", self.name, abi_path, e)))?;

        Ok(Contract {
            name: self.name.clone(),
            abi,
            address: self.address.clone(),
            meta: self.meta(),
        })
    }
}

fn default_typescript() -> bool {
    true
}

/// Project file consumed by the command line tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Output file, relative to the project file. Defaults to `src/generated.{ts,js}`.
    #[serde(default)]
    pub out: Option<PathBuf>,
    #[serde(default = "default_typescript")]
    pub typescript: bool,
    #[serde(default)]
    pub react: ReactConfig,
    #[serde(default)]
    pub contracts: Vec<ContractSource>,
}

impl ProjectConfig {
    /// Load a project file (`.toml` or `.json`)
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read project file {}: {}", path.display(), e)))?;

        let config: Self = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| Error::config(format!("Failed to parse TOML project file {}: {}", path.display(), e)))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("Failed to parse JSON project file {}: {}", path.display(), e)))?,
            _ => {
                return Err(Error::config(
                    "Unsupported project file format. Supported formats: .toml, .json",
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject project files no run could succeed on
    pub fn validate(&self) -> Result<()> {
        if self.contracts.is_empty() {
            return Err(Error::config("Project file declares no contracts"));
        }
        for contract in &self.contracts {
            if contract.name.trim().is_empty() {
                return Err(Error::config("Contract name cannot be empty"));
            }
            if let Some(ContractAddress::Single(address)) = &contract.address {
                validate_address(&contract.name, address)?;
            }
            if let Some(ContractAddress::Deployments(deployments)) = &contract.address {
                for address in deployments.values() {
                    validate_address(&contract.name, address)?;
                }
            }
        }
        Ok(())
    }

    pub fn dialect(&self) -> Dialect {
        Dialect::from_is_typescript(self.typescript)
    }

    /// Where the generated module is written
    pub fn output_path(&self, base_dir: &Path) -> PathBuf {
        match &self.out {
            Some(out) => base_dir.join(out),
            None => base_dir.join(format!("src/generated.{}", self.dialect().extension())),
        }
    }

    /// Load every contract's ABI, in declaration order
    pub fn load_contracts(&self, base_dir: &Path) -> Result<Vec<Contract>> {
        self.contracts.iter().map(|source| source.load(base_dir)).collect()
    }
}

/// `0x` followed by 40 hex characters
fn validate_address(contract: &str, address: &str) -> Result<()> {
    let valid = address
        .strip_prefix("0x")
        .map(|hex_part| hex_part.len() == 40 && hex::decode(hex_part).is_ok())
        .unwrap_or(false);
    if !valid {
        return Err(Error::config(format!(
            "Contract {} has an invalid address '{}' (expected 0x followed by 40 hex characters)",
            contract, address
        )));
    }
    Ok(())
}
