//! Tests for react hook generation

use super::*;


#[cfg(test)]
mod react_tests {
    use super::*;

    #[test]
    fn test_react_config_default_enables_everything() {
        let config = ReactConfig::default();
        assert!(config.use_contract);
        assert!(config.use_contract_read);
        assert!(config.use_contract_function_read);
        assert!(config.use_contract_write);
        assert!(config.use_contract_function_write);
        assert!(config.use_prepare_contract_write);
        assert!(config.use_prepare_contract_function_write);
        assert!(config.use_contract_event);
        assert!(config.use_contract_item_event);
    }

    #[test]
    fn test_codegen_creation() {
        assert!(ReactHookCodegen::new(ReactConfig::default()).is_ok());
    }

    #[test]
    fn test_dialect_selection() {
        assert_eq!(Dialect::from_is_typescript(true), Dialect::TypeScript);
        assert_eq!(Dialect::from_is_typescript(false), Dialect::JavaScript);
        assert!(Dialect::TypeScript.capabilities().emit_type_annotations);
        assert!(!Dialect::JavaScript.capabilities().emit_type_annotations);
        assert_eq!(Dialect::JavaScript.extension(), "js");
    }

    #[test]
    fn test_contract_without_functions_or_events() {
        let contract = Contract {
            name: "Empty".to_string(),
            abi: AbiParser::new()
                .parse_content(r#"[{"type": "constructor", "inputs": []}, {"type": "error", "name": "Unauthorized", "inputs": []}]"#)
                .unwrap(),
            address: None,
            meta: ContractMeta {
                abi_name: "emptyAbi".to_string(),
                address_name: None,
                config_name: None,
            },
        };
        let output = generate_hooks(&[contract], true).unwrap();
        assert_eq!(output.hooks, vec!["useEmpty"]);
        assert_eq!(output.imports, "import { useContract, UseContractConfig } from 'wagmi'");
    }
}
