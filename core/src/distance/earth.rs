use std::f64::consts::PI;

use geo::Point;

use super::{DistanceCalc, EARTH_RADIUS};

/// Great circle distances on a spherical earth using the haversine formula.
///
/// The normalized distance is the haversine term
/// `sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)`, which avoids the square root
/// and the inverse sine of the full formula.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DistanceCalcEarth;

impl DistanceCalc for DistanceCalcEarth {
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
        let sin_delta_lat = ((to_lat - from_lat).to_radians() / 2.0).sin();
        let sin_delta_lon = ((to_lon - from_lon).to_radians() / 2.0).sin();
        sin_delta_lat * sin_delta_lat
            + sin_delta_lon
                * sin_delta_lon
                * from_lat.to_radians().cos()
                * to_lat.to_radians().cos()
    }

    fn normalize(&self, dist: f64) -> f64 {
        let tmp = (dist / 2.0 / EARTH_RADIUS).sin();
        tmp * tmp
    }

    fn denormalize(&self, normed_dist: f64) -> f64 {
        // rounding may push antipodal points slightly above 1
        EARTH_RADIUS * 2.0 * normed_dist.sqrt().min(1.0).asin()
    }

    fn project_coordinate(&self, lat: f64, lon: f64, dist: f64, heading: f64) -> Point {
        let angular_dist = dist / EARTH_RADIUS;
        let lat_rad = lat.to_radians();
        let lon_rad = lon.to_radians();
        let heading_rad = heading.to_radians();

        let projected_lat = (lat_rad.sin() * angular_dist.cos()
            + lat_rad.cos() * angular_dist.sin() * heading_rad.cos())
        .asin();
        let projected_lon = lon_rad
            + (heading_rad.sin() * angular_dist.sin() * lat_rad.cos())
                .atan2(angular_dist.cos() - lat_rad.sin() * projected_lat.sin());

        // wrap into -180..180
        let projected_lon = (projected_lon + 3.0 * PI).rem_euclid(2.0 * PI) - PI;

        Point::new(projected_lon.to_degrees(), projected_lat.to_degrees())
    }
}
