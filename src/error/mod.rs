//! Error handling for the registry core.

use crate::validation::Violation;

/// Specialized error type for registry record operations
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A candidate record failed temporal or structural validation
    #[error("Validation error: {0}")]
    Validation(#[from] Violation),

    /// Error converting a record to or from its JSON representation
    #[error("Representation error: {0}")]
    Representation(#[from] serde_json::Error),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
