//! Run-scoped hook name registry

use std::collections::HashMap;

use hookgen_common::{Error, Result};
use tracing::debug;

/// Tracks every hook identifier claimed during one generation run.
///
/// Created fresh for each run and dropped with it. The first claimant of an
/// identifier owns it; any later claim fails and names the later contract.
#[derive(Debug, Default)]
pub struct HookNameRegistry {
    owners: HashMap<String, String>,
}

impl HookNameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `hook_name` for `contract_name`
    pub fn register(&mut self, hook_name: &str, contract_name: &str) -> Result<()> {
        if let Some(owner) = self.owners.get(hook_name) {
            debug!(hook_name, owner = %owner, contract = contract_name, "Hook name already claimed");
            return Err(Error::duplicate_hook_name(hook_name, contract_name));
        }
        self.owners.insert(hook_name.to_string(), contract_name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_registration_succeeds() {
        let mut registry = HookNameRegistry::new();
        registry.register("useWagmiRead", "Wagmi").unwrap();
        registry.register("useWagmiWrite", "Wagmi").unwrap();
        assert!(registry.register("useWagmiRead", "Wagmi").is_err());
    }

    #[test]
    fn test_duplicate_names_second_claimant() {
        let mut registry = HookNameRegistry::new();
        registry.register("useInventoryCardsCollection", "Inventory").unwrap();
        let err = registry
            .register("useInventoryCardsCollection", "InventoryCardsCollection")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Hook name \"useInventoryCardsCollection\" must be unique for contract \"InventoryCardsCollection\"."
        );
    }

    #[test]
    fn test_every_later_claimant_is_reported() {
        let mut registry = HookNameRegistry::new();
        registry.register("useA", "First").unwrap();
        for contract in ["Second", "Third"] {
            match registry.register("useA", contract) {
                Err(Error::DuplicateHookName { contract: offender, .. }) => assert_eq!(offender, contract),
                other => panic!("expected duplicate error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_registries_are_independent() {
        let mut first = HookNameRegistry::new();
        let mut second = HookNameRegistry::new();
        first.register("useWagmi", "Wagmi").unwrap();
        second.register("useWagmi", "Wagmi").unwrap();
        assert!(first.register("useWagmi", "Wagmi").is_err());
    }
}
