//! Template system for hook code generation
//!
//! One Handlebars template per hook shape. Each template covers both dialects;
//! the `typescript` flag in the render context switches annotations on or off.

use handlebars::Handlebars;
use hookgen_common::{Error, Result};
use serde::Serialize;

/// Names of the registered hook templates
pub const CONTRACT: &str = "contract";
pub const READ: &str = "read";
pub const PREPARE_WRITE: &str = "prepare_write";
pub const WRITE: &str = "write";
pub const EVENT: &str = "event";

/// Render context shared by every hook template
#[derive(Debug, Clone, Default, Serialize)]
pub struct HookContext {
    pub typescript: bool,
    pub doc_comment: String,
    pub hook_name: String,
    /// `typeof wagmiAbi`
    pub abi_type: String,
    /// Keys removed from the primitive's config, e.g. `'abi' | 'address'`
    pub omit: String,
    /// Preset object fields, each followed by `, `
    pub fields: String,
    /// Intersected onto the config type
    pub config_extra: String,
    /// Statements placed before the `return`
    pub preamble: String,
    /// Whether the function or event name is a generic parameter
    pub generic_member: bool,
    /// Type argument naming the function or event
    pub member_type: String,
    /// Upper bound of `TFunctionName` for read hooks
    pub member_bound: String,
    pub prepared_overrides: String,
    pub unprepared_overrides: String,
}

/// Template manager for hook code generation
pub struct HookTemplateManager {
    handlebars: Handlebars<'static>,
}

impl HookTemplateManager {
    /// Create a new template manager and register all templates
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        Self::register_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_templates(handlebars: &mut Handlebars) -> Result<()> {
        let templates = [
            (CONTRACT, include_str!("contract.hbs")),
            (READ, include_str!("read.hbs")),
            (PREPARE_WRITE, include_str!("prepare_write.hbs")),
            (WRITE, include_str!("write.hbs")),
            (EVENT, include_str!("event.hbs")),
        ];
        for (name, source) in templates {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::template(format!("Failed to register {} template: {}", name, e)))?;
        }
        Ok(())
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &HookContext) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::template(format!("Failed to render template {}: {}", template_name, e)))
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_renders() {
        let manager = HookTemplateManager::new().unwrap();
        for name in [CONTRACT, READ, PREPARE_WRITE, WRITE, EVENT] {
            let code = manager.render(name, &HookContext::default()).unwrap();
            assert!(code.starts_with("export function "), "{}: {}", name, code);
        }
    }

    #[test]
    fn test_render_does_not_escape() {
        let manager = HookTemplateManager::new().unwrap();
        let context = HookContext {
            typescript: true,
            hook_name: "useWagmi".to_string(),
            abi_type: "typeof wagmiAbi".to_string(),
            omit: "'abi'".to_string(),
            fields: "abi: wagmiAbi, ".to_string(),
            ..Default::default()
        };
        let code = manager.render(CONTRACT, &context).unwrap();
        assert_eq!(
            code,
            "export function useWagmi(\n  config: Omit<UseContractConfig<typeof wagmiAbi>, 'abi'> = {} as any,\n) {\n  return useContract({ abi: wagmiAbi, ...config })\n}"
        );
    }

    #[test]
    fn test_render_untyped_contract() {
        let manager = HookTemplateManager::new().unwrap();
        let context = HookContext {
            typescript: false,
            hook_name: "useWagmi".to_string(),
            fields: "abi: wagmiAbi, address: wagmiAddress, ".to_string(),
            ..Default::default()
        };
        let code = manager.render(CONTRACT, &context).unwrap();
        assert_eq!(
            code,
            "export function useWagmi(\n  config = {},\n) {\n  return useContract({ abi: wagmiAbi, address: wagmiAddress, ...config })\n}"
        );
    }

    #[test]
    fn test_unknown_template() {
        let manager = HookTemplateManager::new().unwrap();
        let err = manager.render("missing", &HookContext::default()).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
