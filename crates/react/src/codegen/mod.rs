//! React hook generation for contract ABIs
//!
//! Given parsed contract ABIs and the names of the constants that export
//! them, produces a module with one hook per function and event, in either
//! TypeScript or plain JavaScript.

pub mod config;
pub mod contract;
pub mod dialect;
pub mod emitter;
pub mod generator;
pub mod grouping;
pub mod imports;
pub mod naming;
pub mod parser;
pub mod plugin;
pub mod registry;
pub mod templates;
#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
mod tests;

pub use config::{ProjectConfig, ReactConfig};
pub use contract::{Contract, ContractAddress, ContractMeta};
pub use dialect::Dialect;
pub use generator::ReactHookCodegen;
pub use parser::AbiParser;
pub use plugin::{Plugin, PluginOutput, ReactPlugin, RunContext};

use hookgen_common::Result;

/// Main entry point: generate every hook for `contracts` with the default configuration
pub fn generate_hooks(contracts: &[Contract], is_typescript: bool) -> Result<PluginOutput> {
    ReactPlugin::new(ReactConfig::default())?.run(&RunContext {
        contracts,
        is_typescript,
        outputs: &[],
    })
}
