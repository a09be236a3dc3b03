use std::{
    f64::consts::PI,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
};

use geo::Point;
use tracing::trace;

use crate::{
    distance::{DistanceCalc, DIST_EARTH},
    error::ShapeError,
    shape::{bounding_box::BoundingBox, variant_of, Shape, ShapeRef},
    util::num::{equals_eps, quantize},
};

/// A disc on the earth's surface with a center and a radius in meters.
///
/// The normalized radius and the enclosing bounding box are computed once on
/// construction. Point tests compare normalized distances so that no square
/// root or inverse trigonometric function is evaluated.
///
/// # Examples
///
/// ```rust
/// use geoshape_core::{BoundingBox, Circle};
///
/// let circle = Circle::new(10.0, 10.0, 120_000.0).unwrap();
/// assert!(circle.contains_point(10.5, 10.5));
/// assert!(circle.intersects_bbox(&BoundingBox::new(9.0, 11.0, 8.0, 9.0)));
/// assert!(!circle.intersects_bbox(&BoundingBox::new(9.0, 11.0, 8.0, 8.9)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    lat: f64,
    lon: f64,
    radius: f64,
    normed_radius: f64,
    bbox: BoundingBox,
    calc: &'static dyn DistanceCalc,
}

impl Circle {
    /// Creates a circle measured with great circle distances
    pub fn new(lat: f64, lon: f64, radius: f64) -> Result<Self, ShapeError> {
        Self::with_calc(lat, lon, radius, &DIST_EARTH)
    }

    /// Creates a circle measured with the given distance calculation.
    ///
    /// # Errors
    /// Returns [`ShapeError::InvalidRadius`] if `radius` is negative or not a
    /// finite number.
    pub fn with_calc(
        lat: f64,
        lon: f64,
        radius: f64,
        calc: &'static dyn DistanceCalc,
    ) -> Result<Self, ShapeError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ShapeError::InvalidRadius { radius });
        }

        let normed_radius = calc.normalize(radius);
        let bbox = calc.create_bbox(lat, lon, radius);
        trace!(lat, lon, radius, %bbox, "created circle");

        Ok(Self {
            lat,
            lon,
            radius,
            normed_radius,
            bbox,
            calc,
        })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// The radius in meters
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The distance calculation this circle was created with
    pub fn calc(&self) -> &'static dyn DistanceCalc {
        self.calc
    }

    /// Returns the precomputed box enclosing the circle
    pub fn bounds(&self) -> BoundingBox {
        self.bbox
    }

    /// Returns the center with `x` = longitude and `y` = latitude
    pub fn center(&self) -> Point {
        Point::new(self.lon, self.lat)
    }

    /// Returns the area of the disc in square meters, treating it as planar
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn normed_dist(&self, lat: f64, lon: f64) -> f64 {
        self.calc.calc_normalized_dist(self.lat, self.lon, lat, lon)
    }

    /// Checks if the point lies inside the circle or on its border
    pub fn contains_point(&self, lat: f64, lon: f64) -> bool {
        self.normed_dist(lat, lon) <= self.normed_radius
    }

    /// Checks if both circles overlap or touch
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        if !self.bbox.touches(&other.bbox) {
            return false;
        }
        self.normed_dist(other.lat, other.lon) <= self.calc.normalize(self.radius + other.radius)
    }

    /// Checks if the circle overlaps the given box.
    ///
    /// If the center lies diagonally outside of the box, the distance to the
    /// nearest corner decides. If it lies beside, above or below the box,
    /// the circle's own bounding box is compared against the box's border
    /// instead of computing the exact arc, which may report an intersection
    /// for very eccentric configurations where there is none.
    pub fn intersects_bbox(&self, b: &BoundingBox) -> bool {
        // above
        if self.lat > b.max_lat {
            if self.lon < b.min_lon {
                return self.normed_dist(b.max_lat, b.min_lon) <= self.normed_radius;
            }
            if self.lon > b.max_lon {
                return self.normed_dist(b.max_lat, b.max_lon) <= self.normed_radius;
            }
            return b.max_lat - self.bbox.min_lat > 0.0;
        }

        // below
        if self.lat < b.min_lat {
            if self.lon < b.min_lon {
                return self.normed_dist(b.min_lat, b.min_lon) <= self.normed_radius;
            }
            if self.lon > b.max_lon {
                return self.normed_dist(b.min_lat, b.max_lon) <= self.normed_radius;
            }
            return self.bbox.max_lat - b.min_lat > 0.0;
        }

        // within the latitude band
        if self.lon < b.min_lon {
            return self.bbox.max_lon - b.min_lon > 0.0;
        }
        if self.lon > b.max_lon {
            return b.max_lon - self.bbox.min_lon > 0.0;
        }

        // center inside
        true
    }

    /// Checks if all four corners of the box lie inside the circle
    pub fn contains_bbox(&self, b: &BoundingBox) -> bool {
        if !self.bbox.contains_bbox(b) {
            return false;
        }
        self.contains_point(b.max_lat, b.min_lon)
            && self.contains_point(b.min_lat, b.min_lon)
            && self.contains_point(b.max_lat, b.max_lon)
            && self.contains_point(b.min_lat, b.max_lon)
    }

    /// Checks if the other circle lies completely inside this one
    pub fn contains_circle(&self, other: &Circle) -> bool {
        let remaining = self.radius - other.radius;
        if remaining < 0.0 {
            return false;
        }
        self.calc.calc_dist(self.lat, self.lon, other.lat, other.lon) <= remaining
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}, radius:{}", self.lat, self.lon, self.radius)
    }
}

/// Circles are equal if their centers and radii differ by less than
/// [`EPSILON`](crate::util::num::EPSILON). The distance calculation is not
/// compared.
impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        equals_eps(self.lat, other.lat)
            && equals_eps(self.lon, other.lon)
            && equals_eps(self.radius, other.radius)
    }
}

/// See the notes on the [`Hash`] implementation of [`BoundingBox`]
impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        quantize(self.lat).hash(state);
        quantize(self.lon).hash(state);
        quantize(self.radius).hash(state);
    }
}

impl Shape for Circle {
    fn bounds(&self) -> BoundingBox {
        self.bbox
    }

    fn center(&self) -> Point {
        Circle::center(self)
    }

    fn area(&self) -> f64 {
        Circle::area(self)
    }

    fn contains_point(&self, lat: f64, lon: f64) -> bool {
        Circle::contains_point(self, lat, lon)
    }

    fn as_variant(&self) -> Option<ShapeRef<'_>> {
        Some(ShapeRef::Circle(self))
    }

    fn intersects(&self, other: &dyn Shape) -> Result<bool, ShapeError> {
        Ok(match variant_of(other)? {
            ShapeRef::BoundingBox(b) => self.intersects_bbox(b),
            ShapeRef::Circle(c) => self.intersects_circle(c),
        })
    }

    fn contains(&self, other: &dyn Shape) -> Result<bool, ShapeError> {
        Ok(match variant_of(other)? {
            ShapeRef::BoundingBox(b) => self.contains_bbox(b),
            ShapeRef::Circle(c) => self.contains_circle(c),
        })
    }
}
