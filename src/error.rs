//! Error types for the resonance network.

use thiserror::Error;

/// Resonance error types.
#[derive(Error, Debug)]
pub enum ArtError {
    /// Input vector length does not match the network's input layer
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Input vector sums to zero, so no match ratio can be formed
    #[error("Zero input: the input vector has no active features")]
    ZeroInput,

    /// Input contains a negative or non-finite entry
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network constructed with an empty layer
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Vigilance outside [0, 1]
    #[error("Invalid vigilance: {0} (must lie in [0, 1])")]
    InvalidVigilance(f64),

    /// Category index that has not been committed yet
    #[error("Category {index} out of range: only {active} categories are active")]
    CategoryOutOfRange { index: usize, active: usize },

    /// Malformed glyph text or prototype reshape
    #[error("Glyph error: {0}")]
    Glyph(String),

    /// TOML configuration parse error
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for resonance operations.
pub type Result<T> = std::result::Result<T, ArtError>;
