//! Hook identifier derivation
//!
//! Every identifier is qualified by the contract name so that two contracts
//! declaring the same function never derive the same hook by construction.

use convert_case::{Case, Casing};

/// The kind of hook being named, carrying the ABI base name where one applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind<'a> {
    /// `use{Contract}`
    Contract,
    /// `use{Contract}Read`
    ContractRead,
    /// `use{Contract}Write`
    ContractWrite,
    /// `usePrepare{Contract}Write`
    PrepareContractWrite,
    /// `use{Contract}Event`
    ContractEvent,
    /// `use{Contract}{Function}` for a pure/view function
    FunctionRead(&'a str),
    /// `use{Contract}{Function}` for a nonpayable/payable function
    FunctionWrite(&'a str),
    /// `usePrepare{Contract}{Function}`
    PrepareFunctionWrite(&'a str),
    /// `use{Contract}On{Event}`
    ItemEvent(&'a str),
}

/// Derive the hook identifier for `kind` on `contract_name`
pub fn derive(contract_name: &str, kind: HookKind<'_>) -> String {
    let contract = pascal(contract_name);
    match kind {
        HookKind::Contract => format!("use{}", contract),
        HookKind::ContractRead => format!("use{}Read", contract),
        HookKind::ContractWrite => format!("use{}Write", contract),
        HookKind::PrepareContractWrite => format!("usePrepare{}Write", contract),
        HookKind::ContractEvent => format!("use{}Event", contract),
        HookKind::FunctionRead(name) | HookKind::FunctionWrite(name) => {
            format!("use{}{}", contract, pascal(name))
        }
        HookKind::PrepareFunctionWrite(name) => format!("usePrepare{}{}", contract, pascal(name)),
        HookKind::ItemEvent(name) => format!("use{}On{}", contract, pascal(name)),
    }
}

/// PascalCase a contract or ABI name
pub fn pascal(name: &str) -> String {
    name.to_case(Case::Pascal)
}

/// camelCase a contract name, used for default constant names
pub fn camel(name: &str) -> String {
    name.to_case(Case::Camel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_hooks() {
        assert_eq!(derive("Wagmi", HookKind::FunctionRead("totalSupply")), "useWagmiTotalSupply");
        assert_eq!(derive("Wagmi", HookKind::FunctionWrite("approve")), "useWagmiApprove");
        assert_eq!(
            derive("Wagmi", HookKind::PrepareFunctionWrite("approve")),
            "usePrepareWagmiApprove"
        );
    }

    #[test]
    fn test_event_hook() {
        assert_eq!(derive("Wagmi", HookKind::ItemEvent("Transfer")), "useWagmiOnTransfer");
    }

    #[test]
    fn test_contract_level_hooks() {
        assert_eq!(derive("Wagmi", HookKind::Contract), "useWagmi");
        assert_eq!(derive("Wagmi", HookKind::ContractRead), "useWagmiRead");
        assert_eq!(derive("Wagmi", HookKind::ContractWrite), "useWagmiWrite");
        assert_eq!(derive("Wagmi", HookKind::PrepareContractWrite), "usePrepareWagmiWrite");
        assert_eq!(derive("Wagmi", HookKind::ContractEvent), "useWagmiEvent");
    }

    #[test]
    fn test_contract_name_is_pascal_cased() {
        assert_eq!(derive("ensRegistry", HookKind::FunctionRead("owner")), "useEnsRegistryOwner");
    }

    #[test]
    fn test_distinct_contracts_can_coincide_textually() {
        assert_eq!(
            derive("Inventory", HookKind::FunctionRead("cardsCollection")),
            derive("InventoryCardsCollection", HookKind::Contract)
        );
    }

    #[test]
    fn test_camel() {
        assert_eq!(camel("Wagmi"), "wagmi");
        assert_eq!(camel("InventoryCardsCollection"), "inventoryCardsCollection");
    }
}
