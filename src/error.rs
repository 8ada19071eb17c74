//! Error types for color conversion operations.

use thiserror::Error;

/// Errors that can occur during color parsing and conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Input string matches neither the hex nor the rgb()/rgba() grammar
    #[error("invalid color format: {input:?}")]
    InvalidFormat {
        /// The string that failed to parse
        input: String,
    },

    /// Hue outside the [0, 360] domain of the sector decomposition
    #[error("hue {hue} out of range [0, 360]")]
    HueOutOfRange {
        /// The offending hue in degrees
        hue: f64,
    },
}
