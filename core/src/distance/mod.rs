//! Strategies for measuring distances on the earth's surface

use std::{f64::consts::PI, fmt::Debug};

use geo::Point;

use crate::shape::bounding_box::BoundingBox;

pub use self::earth::DistanceCalcEarth;
pub use self::plane::DistancePlaneProjection;

pub mod earth;
pub mod plane;

/// Mean radius of the earth in meters
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Circumference of the earth along a great circle in meters
pub const EARTH_CIRCUMFERENCE: f64 = 2.0 * PI * EARTH_RADIUS;

/// Shared great circle distance calculation
pub static DIST_EARTH: DistanceCalcEarth = DistanceCalcEarth;

/// Shared planar (equirectangular) distance calculation
pub static DIST_PLANE: DistancePlaneProjection = DistancePlaneProjection;

/// Calculates distances between coordinates given in degrees.
///
/// Besides the real distance in meters, every implementation offers a
/// *normalized* distance: a cheaper value that is monotonic in the real
/// distance. Comparisons such as "is this point within `r` meters" can be
/// done entirely in normalized space by comparing against `normalize(r)`.
pub trait DistanceCalc: Debug + Send + Sync {
    /// Returns the distance between two points in meters
    fn calc_dist(&self, from_lat: f64, from_lon: f64, to_lat: f64, to_lon: f64) -> f64;

    /// Returns the normalized distance between two points. Only meaningful in
    /// comparisons with other normalized distances of the same implementation.
    fn calc_normalized_dist(&self, from_lat: f64, from_lon: f64, to_lat: f64, to_lon: f64)
        -> f64;

    /// Converts a distance in meters into normalized space
    fn normalize(&self, dist: f64) -> f64;

    /// Converts a normalized distance back into meters
    fn denormalize(&self, normed_dist: f64) -> f64;

    /// Returns the point reached when travelling `dist` meters from the given
    /// coordinate along `heading` degrees (0 = north, clockwise)
    fn project_coordinate(&self, lat: f64, lon: f64, dist: f64, heading: f64) -> Point;

    /// Returns the distance between two points in meters taking the
    /// elevation difference into account
    fn calc_dist_3d(
        &self,
        from_lat: f64,
        from_lon: f64,
        from_ele: f64,
        to_lat: f64,
        to_lon: f64,
        to_ele: f64,
    ) -> f64 {
        let dist = self.calc_dist(from_lat, from_lon, to_lat, to_lon);
        let ele_delta = from_ele - to_ele;
        (dist * dist + ele_delta * ele_delta).sqrt()
    }

    /// Returns the length of the parallel at the given latitude in meters
    fn calc_circumference(&self, lat: f64) -> f64 {
        EARTH_CIRCUMFERENCE * lat.to_radians().cos()
    }

    /// Returns the smallest axis-aligned box enclosing a circle with the
    /// given center and radius in meters
    fn create_bbox(&self, lat: f64, lon: f64, radius: f64) -> BoundingBox {
        let d_lon = 360.0 / (self.calc_circumference(lat) / radius);
        let d_lat = 360.0 / (EARTH_CIRCUMFERENCE / radius);
        BoundingBox::new(lon - d_lon, lon + d_lon, lat - d_lat, lat + d_lat)
    }

    /// Checks if a line between the two longitudes probably crosses the
    /// antimeridian
    fn is_cross_boundary(&self, lon1: f64, lon2: f64) -> bool {
        (lon1 - lon2).abs() > 300.0
    }
}
