use tracing::trace;

use crate::{error::ShapeError, shape::bounding_box::BoundingBox};

/// A builder to create [`BoundingBox`es](BoundingBox) from a sequence of
/// points.
///
/// The builder is consumed by every call, so a box cannot be observed or
/// shared while points are still being added. It returns `None` if no
/// points have been provided.
///
/// # Examples
///
/// ```rust
/// use geoshape_core::{BoundingBox, BoundingBoxBuilder};
///
/// let bbox = BoundingBoxBuilder::new()
///     .add_point(52.3, 13.1)
///     .add_point(52.6, 13.7)
///     .build();
/// assert_eq!(bbox, Some(BoundingBox::new(13.1, 13.7, 52.3, 52.6)));
///
/// assert_eq!(BoundingBoxBuilder::new().build(), None);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct BoundingBoxBuilder {
    inner: Inner,
    elevation: bool,
}

impl BoundingBoxBuilder {
    /// Creates a builder for a two-dimensional box
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for a box that also tracks elevation
    pub fn with_elevation() -> Self {
        Self {
            inner: Inner::Uninitialized,
            elevation: true,
        }
    }

    /// Returns the box spanning all added points, or `None` if nothing was
    /// added. A box built from a single point, or from points on one line,
    /// has no area and is therefore not [valid](BoundingBox::is_valid).
    pub fn build(self) -> Option<BoundingBox> {
        match self.inner {
            Inner::Accumulating(bbox) => {
                trace!(%bbox, valid = bbox.is_valid(), "built bounding box");
                Some(bbox)
            }
            Inner::Uninitialized => None,
        }
    }

    /// Adds a point. The elevation of a three-dimensional builder is left
    /// untouched, so a box built only from such points has no usable
    /// elevation range and is not [valid](BoundingBox::is_valid).
    #[must_use]
    pub fn add_point(self, lat: f64, lon: f64) -> Self {
        let mut bbox = self.accumulator();
        bbox.update(lat, lon);
        Self {
            inner: Inner::Accumulating(bbox),
            ..self
        }
    }

    /// Adds a point including its elevation.
    ///
    /// # Errors
    /// Returns [`ShapeError::MissingElevation`] if the builder was not
    /// created with [`with_elevation`](Self::with_elevation).
    pub fn add_point_3d(self, lat: f64, lon: f64, ele: f64) -> Result<Self, ShapeError> {
        let mut bbox = self.accumulator();
        bbox.update_3d(lat, lon, ele)?;
        Ok(Self {
            inner: Inner::Accumulating(bbox),
            ..self
        })
    }

    /// Adds all points of another box
    #[must_use]
    pub fn add_bbox(self, other: &BoundingBox) -> Self {
        let mut bbox = self.accumulator();
        bbox.extend(other);
        Self {
            inner: Inner::Accumulating(bbox),
            ..self
        }
    }

    fn accumulator(&self) -> BoundingBox {
        match self.inner {
            Inner::Accumulating(bbox) => bbox,
            Inner::Uninitialized => BoundingBox::inverse(self.elevation),
        }
    }
}

#[derive(Debug, Copy, Clone, Default)]
enum Inner {
    Accumulating(BoundingBox),
    #[default]
    Uninitialized,
}
