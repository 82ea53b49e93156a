//! Plugin surface of the hook generator

use hookgen_common::Result;

use super::config::ReactConfig;
use super::contract::Contract;
use super::dialect::Dialect;
use super::generator::ReactHookCodegen;

/// Result of running a plugin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginOutput {
    /// Rendered import section
    pub imports: String,
    /// Rendered hook declarations
    pub content: String,
    /// Identifiers of the generated hooks, in emission order
    pub hooks: Vec<String>,
}

impl PluginOutput {
    /// Imports and content joined into one unformatted module
    pub fn to_module(&self) -> String {
        if self.imports.is_empty() {
            return format!("{}\n", self.content);
        }
        format!("{}\n\n{}\n", self.imports, self.content)
    }
}

/// Input of a plugin run
#[derive(Debug, Clone, Copy)]
pub struct RunContext<'a> {
    pub contracts: &'a [Contract],
    pub is_typescript: bool,
    /// Output of plugins that ran earlier; passed through untouched
    pub outputs: &'a [PluginOutput],
}

/// A code generation stage of the bindings compiler
pub trait Plugin {
    fn name(&self) -> &str;

    fn run(&self, ctx: &RunContext<'_>) -> Result<PluginOutput>;
}

/// Generates react hooks for every function and event of every contract
pub struct ReactPlugin {
    codegen: ReactHookCodegen,
}

impl ReactPlugin {
    pub fn new(config: ReactConfig) -> Result<Self> {
        Ok(Self {
            codegen: ReactHookCodegen::new(config)?,
        })
    }
}

impl Plugin for ReactPlugin {
    fn name(&self) -> &str {
        "React"
    }

    fn run(&self, ctx: &RunContext<'_>) -> Result<PluginOutput> {
        self.codegen
            .generate(ctx.contracts, Dialect::from_is_typescript(ctx.is_typescript))
    }
}
