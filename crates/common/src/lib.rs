/// Common types and utilities for hook generation

/// Error type for hook generation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// ABI could not be parsed
    #[error("Failed to parse ABI: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Contract metadata is inconsistent with the contract descriptor
    #[error("Invalid metadata for contract \"{contract}\": {reason}")]
    InvalidMetadata {
        /// Contract whose metadata was rejected
        contract: String,
        /// What is wrong with it
        reason: String,
    },

    /// Two hooks derived the same identifier within one run
    #[error("Hook name \"{hook_name}\" must be unique for contract \"{contract}\".")]
    DuplicateHookName {
        /// The colliding identifier
        hook_name: String,
        /// The contract whose emission triggered the collision
        contract: String,
    },

    /// Template registration or rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a new parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a new invalid metadata error
    pub fn invalid_metadata<C: Into<String>, R: Into<String>>(contract: C, reason: R) -> Self {
        Error::InvalidMetadata {
            contract: contract.into(),
            reason: reason.into(),
        }
    }

    /// Create a new duplicate hook name error
    pub fn duplicate_hook_name<H: Into<String>, C: Into<String>>(hook_name: H, contract: C) -> Self {
        Error::DuplicateHookName {
            hook_name: hook_name.into(),
            contract: contract.into(),
        }
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Error::Template(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
