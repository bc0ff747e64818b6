//! Error types for the currency override extension.

/// Domain-level errors (validation failures).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    #[error("Format template must contain exactly one '#' and one '@': {0:?}")]
    InvalidTemplate(String),
}

/// Store-level errors (failures talking to the host metadata store).
///
/// Read paths in the extension treat these as "no override" with a logged
/// warning; only write paths surface them to the caller.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Backend error: {0}")]
    Backend(String),
}
