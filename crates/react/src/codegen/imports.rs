//! Import aggregation
//!
//! Hook emitters request the symbols their fragment references. The
//! aggregator keeps one entry per `(module, symbol)` in first-request order
//! and renders one import statement per module.

use std::collections::HashSet;

use super::dialect::DialectCapabilities;

/// Module exporting the hook primitives
pub const WAGMI: &str = "wagmi";
/// Module exporting action result types
pub const WAGMI_ACTIONS: &str = "wagmi/actions";

/// A symbol referenced by generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImportSymbol {
    pub module: &'static str,
    pub name: &'static str,
    /// Only referenced from type annotations
    pub type_only: bool,
}

impl ImportSymbol {
    pub const fn value(module: &'static str, name: &'static str) -> Self {
        Self {
            module,
            name,
            type_only: false,
        }
    }

    pub const fn type_only(module: &'static str, name: &'static str) -> Self {
        Self {
            module,
            name,
            type_only: true,
        }
    }
}

pub const USE_CONTRACT: ImportSymbol = ImportSymbol::value(WAGMI, "useContract");
pub const USE_CONTRACT_CONFIG: ImportSymbol = ImportSymbol::type_only(WAGMI, "UseContractConfig");
pub const USE_CONTRACT_READ: ImportSymbol = ImportSymbol::value(WAGMI, "useContractRead");
pub const USE_CONTRACT_READ_CONFIG: ImportSymbol = ImportSymbol::type_only(WAGMI, "UseContractReadConfig");
pub const USE_CONTRACT_WRITE: ImportSymbol = ImportSymbol::value(WAGMI, "useContractWrite");
pub const USE_CONTRACT_WRITE_CONFIG: ImportSymbol = ImportSymbol::type_only(WAGMI, "UseContractWriteConfig");
pub const USE_PREPARE_CONTRACT_WRITE: ImportSymbol = ImportSymbol::value(WAGMI, "usePrepareContractWrite");
pub const USE_PREPARE_CONTRACT_WRITE_CONFIG: ImportSymbol =
    ImportSymbol::type_only(WAGMI, "UsePrepareContractWriteConfig");
pub const USE_CONTRACT_EVENT: ImportSymbol = ImportSymbol::value(WAGMI, "useContractEvent");
pub const USE_CONTRACT_EVENT_CONFIG: ImportSymbol = ImportSymbol::type_only(WAGMI, "UseContractEventConfig");
pub const USE_NETWORK: ImportSymbol = ImportSymbol::value(WAGMI, "useNetwork");
pub const READ_CONTRACT_RESULT: ImportSymbol = ImportSymbol::type_only(WAGMI_ACTIONS, "ReadContractResult");
pub const WRITE_CONTRACT_MODE: ImportSymbol = ImportSymbol::type_only(WAGMI_ACTIONS, "WriteContractMode");
pub const PREPARE_WRITE_CONTRACT_RESULT: ImportSymbol =
    ImportSymbol::type_only(WAGMI_ACTIONS, "PrepareWriteContractResult");

/// Collects and renders the imports of one generated module
#[derive(Debug)]
pub struct ImportAggregator {
    capabilities: DialectCapabilities,
    modules: Vec<(&'static str, Vec<&'static str>)>,
    seen: HashSet<(&'static str, &'static str)>,
}

impl ImportAggregator {
    pub fn new(capabilities: DialectCapabilities) -> Self {
        Self {
            capabilities,
            modules: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Record a symbol need. Type-only symbols are dropped when the dialect has no annotations.
    pub fn request(&mut self, symbol: ImportSymbol) {
        if symbol.type_only && !self.capabilities.emit_type_annotations {
            return;
        }
        if !self.seen.insert((symbol.module, symbol.name)) {
            return;
        }
        match self.modules.iter_mut().find(|(module, _)| *module == symbol.module) {
            Some((_, names)) => names.push(symbol.name),
            None => self.modules.push((symbol.module, vec![symbol.name])),
        }
    }

    pub fn extend<I: IntoIterator<Item = ImportSymbol>>(&mut self, symbols: I) {
        for symbol in symbols {
            self.request(symbol);
        }
    }

    /// Number of distinct symbols that will be rendered
    pub fn symbol_count(&self) -> usize {
        self.seen.len()
    }

    /// Render one `import { ... } from '...'` line per module
    pub fn render(&self) -> String {
        self.modules
            .iter()
            .map(|(module, names)| format!("import {{ {} }} from '{}'", names.join(", "), module))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::dialect::Dialect;

    #[test]
    fn test_deduplicates_in_first_request_order() {
        let mut imports = ImportAggregator::new(Dialect::TypeScript.capabilities());
        imports.extend([
            USE_CONTRACT_READ,
            READ_CONTRACT_RESULT,
            USE_CONTRACT,
            USE_CONTRACT_READ,
            READ_CONTRACT_RESULT,
        ]);
        assert_eq!(imports.symbol_count(), 3);
        assert_eq!(
            imports.render(),
            "import { useContractRead, useContract } from 'wagmi'\nimport { ReadContractResult } from 'wagmi/actions'"
        );
    }

    #[test]
    fn test_untyped_dialect_drops_type_symbols() {
        let mut imports = ImportAggregator::new(Dialect::JavaScript.capabilities());
        imports.extend([USE_CONTRACT_WRITE, USE_CONTRACT_WRITE_CONFIG, WRITE_CONTRACT_MODE]);
        assert_eq!(imports.symbol_count(), 1);
        assert_eq!(imports.render(), "import { useContractWrite } from 'wagmi'");
    }

    #[test]
    fn test_empty_render() {
        let imports = ImportAggregator::new(Dialect::TypeScript.capabilities());
        assert_eq!(imports.render(), "");
    }
}
