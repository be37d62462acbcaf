use thiserror::Error;

/// Errors that may occur when evaluating thermodynamic properties.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PropertyError {
    /// The provided state is invalid or inconsistent.
    ///
    /// For example, a state whose temperature is `NaN` or infinite.
    #[error("invalid state: {context}")]
    InvalidState { context: String },
}
