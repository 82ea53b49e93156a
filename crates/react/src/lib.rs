/// React hook generation for contract ABIs
pub mod codegen;

pub use codegen::{generate_hooks, Contract, ContractAddress, ContractMeta, Plugin, PluginOutput, ReactPlugin, RunContext};
pub use hookgen_common::{Error, Result};
