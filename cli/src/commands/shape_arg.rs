use std::num::ParseFloatError;

use geoshape_core::{distance::DistanceCalc, BoundingBox, Circle, Shape, ShapeError};
use thiserror::Error;

/// An error that happened while parsing a shape given on the command line
#[derive(Error, Debug, PartialEq)]
pub enum ShapeArgError {
    #[error("unknown shape `{0}'. Expected `bbox:min_lon,max_lon,min_lat,max_lat' or `circle:lat,lon,radius'")]
    UnknownKind(String),

    #[error("circle should have 3 parts (lat,lon,radius) but `{input}' has {parts}")]
    CircleFormat { input: String, parts: usize },

    #[error("invalid number in circle `{input}'")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// A shape given on the command line as `bbox:...` or `circle:...`
#[derive(Debug, PartialEq)]
pub enum ShapeArg {
    BoundingBox(BoundingBox),
    Circle(Circle),
}

impl ShapeArg {
    /// Parses a shape. Circles are measured with the given distance
    /// calculation.
    pub fn parse(s: &str, calc: &'static dyn DistanceCalc) -> Result<Self, ShapeArgError> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| ShapeArgError::UnknownKind(s.to_string()))?;
        match kind.trim() {
            "bbox" => Ok(ShapeArg::BoundingBox(BoundingBox::parse_bbox_string(rest)?)),
            "circle" => {
                let parts = rest
                    .split(',')
                    .map(|p| p.trim().parse::<f64>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|source| ShapeArgError::InvalidNumber {
                        input: rest.to_string(),
                        source,
                    })?;
                let [lat, lon, radius] = parts[..] else {
                    return Err(ShapeArgError::CircleFormat {
                        input: rest.to_string(),
                        parts: parts.len(),
                    });
                };
                Ok(ShapeArg::Circle(Circle::with_calc(lat, lon, radius, calc)?))
            }
            _ => Err(ShapeArgError::UnknownKind(kind.to_string())),
        }
    }

    pub fn as_shape(&self) -> &dyn Shape {
        match self {
            ShapeArg::BoundingBox(b) => b,
            ShapeArg::Circle(c) => c,
        }
    }
}
