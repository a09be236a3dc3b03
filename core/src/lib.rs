//! A small algebra of geographic shapes: latitude/longitude(/elevation)
//! bounding boxes and geodesic circles that can be tested against each other
//! for containment and intersection.

pub mod distance;
pub mod error;
pub mod shape;
pub mod util;

pub use self::error::ShapeError;
pub use self::shape::{
    bounding_box::BoundingBox, bounding_box_builder::BoundingBoxBuilder, circle::Circle, Shape,
    ShapeRef,
};
