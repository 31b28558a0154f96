//! Error types for the session and navigation core.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Failures raised by the session controller and tab state.
///
/// Selection errors are recoverable: the operation that produced them has
/// left the prior state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    // =========================================================================
    // Selection Errors
    // =========================================================================

    /// Profile id is not one of the known profiles.
    #[error("Unknown profile: {id}")]
    UnknownProfile {
        /// The id that failed to resolve
        id: String,
    },

    /// Tab key is outside the composer's closed set.
    #[error("Unknown tab '{key}', expected one of: {}", allowed.join(", "))]
    UnknownTab {
        /// The key that failed to resolve
        key: String,
        /// Keys the composer accepts
        allowed: Vec<&'static str>,
    },

    // =========================================================================
    // Boundary Errors
    // =========================================================================

    /// The known profile list was empty.
    #[error("At least one profile is required")]
    NoProfiles,

    /// Two known profiles share an id.
    #[error("Duplicate profile id: {id}")]
    DuplicateProfile { id: String },
}
