use std::num::ParseFloatError;

use thiserror::Error;

/// Errors raised by shape construction, parsing, and dispatch
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// An elevation-aware update was attempted on a box that does not track
    /// elevation
    #[error("bounding box does not track elevation")]
    MissingElevation,

    /// Coordinate text did not consist of exactly four comma-separated parts
    #[error("bounding box should have 4 parts but `{input}' has {parts}")]
    InvalidFormat { input: String, parts: usize },

    /// One of the coordinate parts is not a number
    #[error("invalid number in bounding box `{input}'")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    /// A circle radius was negative or not a finite number
    #[error("invalid circle radius: {radius}")]
    InvalidRadius { radius: f64 },

    /// The shape passed to a dispatching operation is neither a bounding box
    /// nor a circle
    #[error("operation not supported for shape `{name}'")]
    UnsupportedShape { name: String },
}
