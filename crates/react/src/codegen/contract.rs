//! Contract descriptors consumed by a generation run

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::parser::AbiItem;

/// Deployed address of a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContractAddress {
    /// One address, valid on every chain the app connects to
    Single(String),
    /// Address per chain id
    Deployments(BTreeMap<u64, String>),
}

// Chain ids arrive as string keys in both JSON and TOML, which untagged
// enums cannot coerce into integers on their own.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawContractAddress {
    Single(String),
    Deployments(BTreeMap<String, String>),
}

impl<'de> Deserialize<'de> for ContractAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawContractAddress::deserialize(deserializer)? {
            RawContractAddress::Single(address) => Ok(ContractAddress::Single(address)),
            RawContractAddress::Deployments(raw) => raw
                .into_iter()
                .map(|(chain_id, address)| {
                    chain_id
                        .parse::<u64>()
                        .map(|id| (id, address))
                        .map_err(|_| D::Error::custom(format!("invalid chain id '{}'", chain_id)))
                })
                .collect::<Result<_, _>>()
                .map(ContractAddress::Deployments),
        }
    }
}

/// Names of the constants generated hooks refer to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractMeta {
    /// Exported ABI constant
    pub abi_name: String,
    /// Exported address constant; required iff the contract has an address
    #[serde(default)]
    pub address_name: Option<String>,
    /// Exported `{ address, abi }` object; required for per-chain deployments
    #[serde(default)]
    pub config_name: Option<String>,
}

/// One contract to bind.
///
/// Built from a project entry by `ContractSource::load`; the ABI always goes
/// through `AbiParser`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    /// Unique within a run
    pub name: String,
    pub abi: Vec<AbiItem>,
    pub address: Option<ContractAddress>,
    pub meta: ContractMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_forms() {
        let single: ContractAddress =
            serde_json::from_str(r#""0xaf0326d92b97df1221759476b072abfd8084f9be""#).unwrap();
        assert!(matches!(single, ContractAddress::Single(_)));

        let deployments: ContractAddress = serde_json::from_str(
            r#"{"1": "0xaf0326d92b97df1221759476b072abfd8084f9be", "5": "0xA0Cf798816D4b9b9866b5330EEa46a18382f251e"}"#,
        )
        .unwrap();
        match deployments {
            ContractAddress::Deployments(map) => assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 5]),
            other => panic!("expected deployments, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_numeric_chain_id() {
        let err = serde_json::from_str::<ContractAddress>(r#"{"mainnet": "0x00"}"#).unwrap_err();
        assert!(err.to_string().contains("mainnet"));
    }

    #[test]
    fn test_meta_camel_case() {
        let meta: ContractMeta =
            serde_json::from_str(r#"{"abiName": "wagmiAbi", "configName": "wagmiConfig"}"#).unwrap();
        assert_eq!(meta.abi_name, "wagmiAbi");
        assert_eq!(meta.address_name, None);
        assert_eq!(meta.config_name.as_deref(), Some("wagmiConfig"));
    }
}
