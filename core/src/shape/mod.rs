use geo::Point;
use tracing::debug;

use crate::error::ShapeError;

use self::{bounding_box::BoundingBox, circle::Circle};

pub mod bounding_box;
pub mod bounding_box_builder;
pub mod circle;

/// A borrowed view of one of the concrete shapes known to this crate.
///
/// Cross-shape operations match on this type, so every variant has to know
/// how to relate to every other. Adding a variant means extending the
/// dispatch of all existing shapes.
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    BoundingBox(&'a BoundingBox),
    Circle(&'a Circle),
}

/// Common operations of all geographic shapes
pub trait Shape {
    /// Returns the smallest box enclosing the shape
    fn bounds(&self) -> BoundingBox;

    /// Returns the center as a point with `x` = longitude and `y` = latitude
    fn center(&self) -> Point;

    /// Returns an estimate of the shape's area in square meters
    fn area(&self) -> f64;

    /// Checks if the given coordinate lies inside the shape
    fn contains_point(&self, lat: f64, lon: f64) -> bool;

    /// Returns the concrete variant of this shape. Shapes implemented outside
    /// of this crate return `None` and cannot take part in
    /// [`intersects`](Self::intersects) or [`contains`](Self::contains).
    fn as_variant(&self) -> Option<ShapeRef<'_>> {
        None
    }

    /// A human-readable name of the shape type used in error messages
    fn shape_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Checks if this shape and the other one overlap.
    ///
    /// # Errors
    /// Returns [`ShapeError::UnsupportedShape`] if `other` is neither a
    /// bounding box nor a circle.
    fn intersects(&self, other: &dyn Shape) -> Result<bool, ShapeError>;

    /// Checks if the other shape lies completely inside this one.
    ///
    /// # Errors
    /// Returns [`ShapeError::UnsupportedShape`] if `other` is neither a
    /// bounding box nor a circle.
    fn contains(&self, other: &dyn Shape) -> Result<bool, ShapeError>;
}

/// Resolves the concrete variant of a shape taking part in a dispatching
/// operation
pub(crate) fn variant_of(shape: &dyn Shape) -> Result<ShapeRef<'_>, ShapeError> {
    shape.as_variant().ok_or_else(|| {
        let name = shape.shape_name();
        debug!(shape = name, "shape does not support dispatch");
        ShapeError::UnsupportedShape {
            name: name.to_string(),
        }
    })
}
