#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A raw row handed to the inventory was malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A static table violated a load-time invariant (miscalibrated
    /// geometry, malformed catalogue). Fatal at startup, never per call.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A duplicate-key class error, mirroring DB unique violations.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
