//! Output dialects

use serde::{Deserialize, Serialize};

/// Language flavour of the generated module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    TypeScript,
    JavaScript,
}

/// What a dialect is able to express
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialectCapabilities {
    /// Emit generic parameters, parameter types and casts
    pub emit_type_annotations: bool,
}

impl Dialect {
    pub fn from_is_typescript(is_typescript: bool) -> Self {
        if is_typescript {
            Dialect::TypeScript
        } else {
            Dialect::JavaScript
        }
    }

    pub fn capabilities(&self) -> DialectCapabilities {
        match self {
            Dialect::TypeScript => DialectCapabilities {
                emit_type_annotations: true,
            },
            Dialect::JavaScript => DialectCapabilities {
                emit_type_annotations: false,
            },
        }
    }

    /// File extension for the generated module
    pub fn extension(&self) -> &'static str {
        match self {
            Dialect::TypeScript => "ts",
            Dialect::JavaScript => "js",
        }
    }
}
