//! Error type shared by the gradient generator.

use thiserror::Error;

/// Errors produced while parsing colors, loading config, or copying output.
#[derive(Error, Debug)]
pub enum GradientError {
    /// Hex string is not of the form `#RRGGBB`
    #[error("invalid hex color '{input}'")]
    InvalidHex {
        /// The rejected input
        input: String,
    },

    /// Blend mode name outside the supported set
    #[error("unknown blend mode '{name}'")]
    UnknownBlendMode {
        /// The rejected name
        name: String,
    },

    /// Config JSON could not be parsed
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Host clipboard refused the write
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}
