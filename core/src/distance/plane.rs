use geo::Point;

use super::{DistanceCalc, EARTH_RADIUS};

/// Fast distance approximation that projects both points onto a plane
/// (equirectangular projection around their mean latitude). Good for short
/// distances away from the poles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DistancePlaneProjection;

impl DistanceCalc for DistancePlaneProjection {
    fn calc_dist(&self, from_lat: f64, from_lon: f64, to_lat: f64, to_lon: f64) -> f64 {
        self.denormalize(self.calc_normalized_dist(from_lat, from_lon, to_lat, to_lon))
    }

    fn calc_normalized_dist(
        &self,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
    ) -> f64 {
        let d_lat = (to_lat - from_lat).to_radians();
        let d_lon = (to_lon - from_lon).to_radians();
        let left = ((from_lat + to_lat) / 2.0).to_radians().cos() * d_lon;
        d_lat * d_lat + left * left
    }

    fn normalize(&self, dist: f64) -> f64 {
        let tmp = dist / EARTH_RADIUS;
        tmp * tmp
    }

    fn denormalize(&self, normed_dist: f64) -> f64 {
        EARTH_RADIUS * normed_dist.sqrt()
    }

    fn project_coordinate(&self, lat: f64, lon: f64, dist: f64, heading: f64) -> Point {
        let angular_dist = dist / EARTH_RADIUS;
        let lat_rad = lat.to_radians();
        let heading_rad = heading.to_radians();

        let projected_lat = lat_rad + angular_dist * heading_rad.cos();
        let projected_lon =
            lon.to_radians() + angular_dist * heading_rad.sin() / lat_rad.cos();

        Point::new(projected_lon.to_degrees(), projected_lat.to_degrees())
    }
}
