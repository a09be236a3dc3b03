use std::{
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use geo::{coord, Point, Rect};
use tracing::debug;

use crate::{
    distance::{DistanceCalc, DIST_PLANE},
    error::ShapeError,
    shape::{circle::Circle, variant_of, Shape, ShapeRef},
    util::num::{equals_eps, quantize, round2, round6},
};

/// An axis-aligned box in longitude/latitude and, optionally, elevation.
///
/// Intersection between boxes is strict (boxes that only share an edge or a
/// corner do not intersect) while containment is inclusive (a point on the
/// border is contained).
///
/// # Examples
///
/// ```rust
/// use geoshape_core::BoundingBox;
///
/// let mut bb = BoundingBox::inverse(true);
/// assert!(!bb.is_valid());
///
/// bb.update_3d(10.0, 20.0, 5.0).unwrap();
/// bb.update_3d(-10.0, -20.0, -5.0).unwrap();
/// assert!(bb.is_valid());
/// assert_eq!(bb, BoundingBox::new_3d(-20.0, 20.0, -10.0, 10.0, -5.0, 5.0));
///
/// assert!(bb.contains_point(10.0, 20.0));
/// assert!(!bb.intersects_bbox(&BoundingBox::new(20.0, 30.0, 0.0, 5.0)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_ele: f64,
    pub max_ele: f64,
    elevation: bool,
}

impl BoundingBox {
    /// Creates a two-dimensional box with the given extent
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
            min_ele: f64::NAN,
            max_ele: f64::NAN,
            elevation: false,
        }
    }

    /// Creates a box that also tracks elevation
    pub fn new_3d(
        min_lon: f64,
        max_lon: f64,
        min_lat: f64,
        max_lat: f64,
        min_ele: f64,
        max_ele: f64,
    ) -> Self {
        Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
            min_ele,
            max_ele,
            elevation: true,
        }
    }

    /// Creates a box from coordinates ordered `[min_lon, min_lat, max_lon, max_lat]`
    pub fn from_coords(coords: [f64; 4]) -> Self {
        Self::new(coords[0], coords[2], coords[1], coords[3])
    }

    /// Creates the box spanned by two corner points given in any order
    pub fn from_points(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Self {
        Self::new(lon1.min(lon2), lon1.max(lon2), lat1.min(lat2), lat1.max(lat2))
    }

    /// Creates an empty box that does not contain any point yet. Every min
    /// bound is set to `f64::MAX` and every max bound to `-f64::MAX`, so the
    /// first call to [`update`](Self::update) collapses it onto that point.
    /// The returned box is not [valid](Self::is_valid).
    pub fn inverse(elevation: bool) -> Self {
        let mut bbox = Self::new(f64::MAX, -f64::MAX, f64::MAX, -f64::MAX);
        if elevation {
            bbox.min_ele = f64::MAX;
            bbox.max_ele = -f64::MAX;
            bbox.elevation = true;
        }
        bbox
    }

    /// Parses text of the form `lat1,lon1,lat2,lon2`. The two points may be
    /// given in any order: min and max are swapped per axis if necessary.
    pub fn parse_two_points(s: &str) -> Result<Self, ShapeError> {
        let [lat1, lon1, lat2, lon2] = parse_parts(s)?;
        Ok(Self::from_points(lat1, lon1, lat2, lon2))
    }

    /// Parses text of the form `min_lon,max_lon,min_lat,max_lat` verbatim,
    /// without any reordering
    pub fn parse_bbox_string(s: &str) -> Result<Self, ShapeError> {
        let [min_lon, max_lon, min_lat, max_lat] = parse_parts(s)?;
        Ok(Self::new(min_lon, max_lon, min_lat, max_lat))
    }

    /// Returns `true` if this box tracks elevation
    pub fn has_elevation(&self) -> bool {
        self.elevation
    }

    /// Checks if the box spans a non-empty area and none of its bounds is one
    /// of the sentinels of an [inverse](Self::inverse) box. Elevation bounds
    /// may be equal.
    pub fn is_valid(&self) -> bool {
        if self.min_lon >= self.max_lon || self.min_lat >= self.max_lat {
            return false;
        }

        if self.elevation
            && (self.min_ele > self.max_ele
                || self.max_ele == -f64::MAX
                || self.min_ele == f64::MAX)
        {
            return false;
        }

        self.max_lat != -f64::MAX
            && self.min_lat != f64::MAX
            && self.max_lon != -f64::MAX
            && self.min_lon != f64::MAX
    }

    /// Widens the box so it contains the given point
    pub fn update(&mut self, lat: f64, lon: f64) {
        if lat > self.max_lat {
            self.max_lat = lat;
        }
        if lat < self.min_lat {
            self.min_lat = lat;
        }
        if lon > self.max_lon {
            self.max_lon = lon;
        }
        if lon < self.min_lon {
            self.min_lon = lon;
        }
    }

    /// Widens the box so it contains the given point including its elevation.
    ///
    /// # Errors
    /// Returns [`ShapeError::MissingElevation`] without modifying the box if
    /// it was not created with elevation.
    pub fn update_3d(&mut self, lat: f64, lon: f64, ele: f64) -> Result<(), ShapeError> {
        if !self.elevation {
            return Err(ShapeError::MissingElevation);
        }
        if ele > self.max_ele {
            self.max_ele = ele;
        }
        if ele < self.min_ele {
            self.min_ele = ele;
        }
        self.update(lat, lon);
        Ok(())
    }

    /// Widens the box so it contains the other box. Elevation is only merged
    /// if both boxes track it.
    pub fn extend(&mut self, other: &BoundingBox) {
        self.min_lon = self.min_lon.min(other.min_lon);
        self.max_lon = self.max_lon.max(other.max_lon);
        self.min_lat = self.min_lat.min(other.min_lat);
        self.max_lat = self.max_lat.max(other.max_lat);
        if self.elevation && other.elevation {
            self.min_ele = self.min_ele.min(other.min_ele);
            self.max_ele = self.max_ele.max(other.max_ele);
        }
    }

    /// Checks if both boxes overlap. Boxes that only touch at an edge or a
    /// corner do not intersect.
    pub fn intersects_bbox(&self, other: &BoundingBox) -> bool {
        self.min_lon < other.max_lon
            && self.min_lat < other.max_lat
            && other.min_lon < self.max_lon
            && other.min_lat < self.max_lat
    }

    /// Like [`intersects_bbox`](Self::intersects_bbox) but boxes sharing an
    /// edge, a corner, or a degenerate extent count as overlapping
    pub(crate) fn touches(&self, other: &BoundingBox) -> bool {
        self.min_lon <= other.max_lon
            && self.min_lat <= other.max_lat
            && other.min_lon <= self.max_lon
            && other.min_lat <= self.max_lat
    }

    /// Checks if the box intersects the given circle
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        circle.intersects_bbox(self)
    }

    /// Returns the overlap of both boxes, or `None` if they do not
    /// [intersect](Self::intersects_bbox). The overlap test only looks at
    /// longitude and latitude. The result keeps the common elevation range if
    /// both boxes track elevation and is two-dimensional otherwise.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if !self.intersects_bbox(other) {
            return None;
        }

        let mut result = BoundingBox::new(
            self.min_lon.max(other.min_lon),
            self.max_lon.min(other.max_lon),
            self.min_lat.max(other.min_lat),
            self.max_lat.min(other.max_lat),
        );
        if self.elevation && other.elevation {
            result.min_ele = self.min_ele.max(other.min_ele);
            result.max_ele = self.max_ele.min(other.max_ele);
            result.elevation = true;
        }
        Some(result)
    }

    /// Checks if the point lies inside the box or on its border
    pub fn contains_point(&self, lat: f64, lon: f64) -> bool {
        lat <= self.max_lat && lat >= self.min_lat && lon <= self.max_lon && lon >= self.min_lon
    }

    /// Checks if the other box lies completely inside this one. Shared
    /// borders are allowed.
    pub fn contains_bbox(&self, other: &BoundingBox) -> bool {
        self.max_lat >= other.max_lat
            && self.min_lat <= other.min_lat
            && self.max_lon >= other.max_lon
            && self.min_lon <= other.min_lon
    }

    /// Checks if the circle's bounding box lies inside this box.
    ///
    /// This is stricter than geometric containment: near the box's corners
    /// the circle's bounding box may stick out although the circle itself
    /// does not.
    pub fn contains_circle(&self, circle: &Circle) -> bool {
        self.contains_bbox(&circle.bounds())
    }

    /// Returns the center of the box
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Estimates the area of the box in square meters as the product of its
    /// width at the mean latitude and its height. Only accurate for small
    /// boxes.
    pub fn area(&self) -> f64 {
        let mid_lat = (self.min_lat + self.max_lat) / 2.0;
        let width = DIST_PLANE.calc_dist(mid_lat, self.min_lon, mid_lat, self.max_lon);
        let height = DIST_PLANE.calc_dist(self.min_lat, self.min_lon, self.max_lat, self.min_lon);
        width * height
    }

    /// Returns the box as a GeoJSON `bbox` member:
    /// `[min_lon, min_lat, (min_ele), max_lon, max_lat, (max_ele)]`.
    /// Coordinates are rounded to 6 decimal places, elevations to 2.
    /// Elevation is left out while it still holds the sentinels of an
    /// [inverse](Self::inverse) box, e.g. after only 2-D points were added.
    pub fn to_geo_json(&self) -> Vec<f64> {
        let elevation = self.elevation && self.min_ele != f64::MAX && self.max_ele != -f64::MAX;
        let mut result = Vec::with_capacity(6);
        result.push(round6(self.min_lon));
        result.push(round6(self.min_lat));
        if elevation {
            result.push(round2(self.min_ele));
        }
        result.push(round6(self.max_lon));
        result.push(round6(self.max_lat));
        if elevation {
            result.push(round2(self.max_ele));
        }
        result
    }

    /// Same as the [`Display`] representation but every value goes through
    /// `f32` first
    pub fn to_less_precision_string(&self) -> String {
        let mut s = format!(
            "{},{},{},{}",
            self.min_lon as f32, self.max_lon as f32, self.min_lat as f32, self.max_lat as f32
        );
        if self.elevation {
            s.push_str(&format!(",{},{}", self.min_ele as f32, self.max_ele as f32));
        }
        s
    }
}

fn parse_parts(s: &str) -> Result<[f64; 4], ShapeError> {
    let parts = s.split(',').collect::<Vec<_>>();
    if parts.len() != 4 {
        debug!(input = s, parts = parts.len(), "rejecting bounding box text");
        return Err(ShapeError::InvalidFormat {
            input: s.to_string(),
            parts: parts.len(),
        });
    }

    let mut result = [0.0; 4];
    for (r, p) in result.iter_mut().zip(parts) {
        *r = p.trim().parse().map_err(|source| {
            debug!(input = s, part = p, "invalid number in bounding box text");
            ShapeError::InvalidNumber {
                input: s.to_string(),
                source,
            }
        })?;
    }
    Ok(result)
}

/// Renders `min_lon,max_lon,min_lat,max_lat[,min_ele,max_ele]`
impl Display for BoundingBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_lon, self.max_lon, self.min_lat, self.max_lat
        )?;
        if self.elevation {
            write!(f, ",{},{}", self.min_ele, self.max_ele)?;
        }
        Ok(())
    }
}

/// Parses `min_lon,max_lon,min_lat,max_lat` (see
/// [`BoundingBox::parse_bbox_string`])
impl FromStr for BoundingBox {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_bbox_string(s)
    }
}

/// Boxes are equal if they agree on whether they track elevation and all
/// relevant bounds differ by less than [`EPSILON`](crate::util::num::EPSILON)
impl PartialEq for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        if self.elevation != other.elevation {
            return false;
        }
        if self.elevation
            && !(equals_eps(self.min_ele, other.min_ele) && equals_eps(self.max_ele, other.max_ele))
        {
            return false;
        }
        equals_eps(self.min_lon, other.min_lon)
            && equals_eps(self.max_lon, other.max_lon)
            && equals_eps(self.min_lat, other.min_lat)
            && equals_eps(self.max_lat, other.max_lat)
    }
}

/// Hashes the bounds snapped to the epsilon grid. Boxes that are equal but
/// whose bounds fall on different sides of a grid line still hash
/// differently, so hash-based collections may keep both.
impl Hash for BoundingBox {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elevation.hash(state);
        quantize(self.min_lon).hash(state);
        quantize(self.max_lon).hash(state);
        quantize(self.min_lat).hash(state);
        quantize(self.max_lat).hash(state);
        if self.elevation {
            quantize(self.min_ele).hash(state);
            quantize(self.max_ele).hash(state);
        }
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        Rect::new(
            coord! { x: bbox.min_lon, y: bbox.min_lat },
            coord! { x: bbox.max_lon, y: bbox.max_lat },
        )
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        BoundingBox::new(rect.min().x, rect.max().x, rect.min().y, rect.max().y)
    }
}

impl Shape for BoundingBox {
    fn bounds(&self) -> BoundingBox {
        *self
    }

    fn center(&self) -> Point {
        BoundingBox::center(self)
    }

    fn area(&self) -> f64 {
        BoundingBox::area(self)
    }

    fn contains_point(&self, lat: f64, lon: f64) -> bool {
        BoundingBox::contains_point(self, lat, lon)
    }

    fn as_variant(&self) -> Option<ShapeRef<'_>> {
        Some(ShapeRef::BoundingBox(self))
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

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    use approx::assert_relative_eq;
    use geo::{coord, Rect};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::BoundingBox;
    use crate::{distance::EARTH_CIRCUMFERENCE, error::ShapeError, shape::circle::Circle};

    fn hash_of(bbox: &BoundingBox) -> u64 {
        let mut hasher = DefaultHasher::new();
        bbox.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn validity() {
        assert!(BoundingBox::new(0.0, 1.0, 0.0, 1.0).is_valid());
        assert!(!BoundingBox::new(1.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!BoundingBox::new(0.0, 1.0, 1.0, 0.0).is_valid());
        assert!(!BoundingBox::new(0.0, 0.0, 0.0, 1.0).is_valid());

        assert!(BoundingBox::new_3d(0.0, 1.0, 0.0, 1.0, 5.0, 5.0).is_valid());
        assert!(!BoundingBox::new_3d(0.0, 1.0, 0.0, 1.0, 6.0, 5.0).is_valid());
        assert!(!BoundingBox::new_3d(0.0, 1.0, 0.0, 1.0, f64::MAX, f64::MAX).is_valid());

        assert!(!BoundingBox::new(f64::MAX, f64::MAX, 0.0, 1.0).is_valid());
        assert!(!BoundingBox::new(0.0, 1.0, -f64::MAX, -f64::MAX).is_valid());
    }

    #[test]
    fn inverse_accumulates_points() {
        let mut bb = BoundingBox::inverse(true);
        assert!(!bb.is_valid());

        bb.update_3d(10.0, 20.0, 5.0).unwrap();
        bb.update_3d(-10.0, -20.0, -5.0).unwrap();

        assert_eq!(bb.min_lat, -10.0);
        assert_eq!(bb.max_lat, 10.0);
        assert_eq!(bb.min_lon, -20.0);
        assert_eq!(bb.max_lon, 20.0);
        assert_eq!(bb.min_ele, -5.0);
        assert_eq!(bb.max_ele, 5.0);
        assert!(bb.is_valid());
    }

    #[test]
    fn update_is_noop_inside() {
        let mut bb = BoundingBox::new(0.0, 10.0, 0.0, 10.0);
        bb.update(5.0, 5.0);
        assert_eq!(bb, BoundingBox::new(0.0, 10.0, 0.0, 10.0));
        bb.update(12.0, -1.0);
        assert_eq!(bb, BoundingBox::new(-1.0, 10.0, 0.0, 12.0));
    }

    #[test]
    fn update_3d_requires_elevation() {
        let mut bb = BoundingBox::inverse(false);
        assert_eq!(bb.update_3d(1.0, 2.0, 3.0), Err(ShapeError::MissingElevation));
        assert_eq!(bb, BoundingBox::inverse(false));
    }

    #[test]
    fn extend() {
        let mut bb1 = BoundingBox::new_3d(1.0, 4.0, 2.0, 5.0, 3.0, 6.0);
        let bb2 = BoundingBox::new_3d(40.0, 70.0, 50.0, 80.0, 60.0, 90.0);
        bb1.extend(&bb2);
        assert_eq!(bb1, BoundingBox::new_3d(1.0, 70.0, 2.0, 80.0, 3.0, 90.0));

        let mut bb3 = BoundingBox::inverse(false);
        bb3.extend(&BoundingBox::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(bb3, BoundingBox::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn intersection_is_strict() {
        let a = BoundingBox::new(0.0, 1.0, 0.0, 1.0);
        let corner = BoundingBox::new(1.0, 2.0, 1.0, 2.0);
        let edge = BoundingBox::new(1.0, 2.0, 0.0, 1.0);
        let overlapping = BoundingBox::new(0.5, 1.5, 0.5, 1.5);

        assert!(!a.intersects_bbox(&corner));
        assert!(!a.intersects_bbox(&edge));
        assert!(a.intersects_bbox(&overlapping));
        assert!(overlapping.intersects_bbox(&a));

        assert_eq!(a.intersection(&corner), None);
        assert_eq!(
            a.intersection(&overlapping),
            Some(BoundingBox::new(0.5, 1.0, 0.5, 1.0))
        );
    }

    #[test]
    fn intersection() {
        let a = BoundingBox::new(0.0, 2.0, 0.0, 1.0);
        assert_eq!(a.intersection(&a), Some(a));

        let far = BoundingBox::new(10.0, 12.0, 10.0, 11.0);
        assert_eq!(a.intersection(&far), None);

        // elevation is dropped unless both boxes track it
        let a3 = BoundingBox::new_3d(0.0, 2.0, 0.0, 1.0, 0.0, 10.0);
        let inner = BoundingBox::new(1.0, 3.0, 0.5, 4.0);
        assert_eq!(
            a3.intersection(&inner),
            Some(BoundingBox::new(1.0, 2.0, 0.5, 1.0))
        );
    }

    #[test]
    fn intersection_3d() {
        let a3 = BoundingBox::new_3d(0.0, 2.0, 0.0, 1.0, 0.0, 10.0);
        assert_eq!(a3.intersection(&a3), Some(a3));

        let b3 = BoundingBox::new_3d(1.0, 3.0, 0.5, 4.0, 5.0, 20.0);
        let overlap = a3.intersection(&b3).unwrap();
        assert!(overlap.has_elevation());
        assert_eq!(overlap, BoundingBox::new_3d(1.0, 2.0, 0.5, 1.0, 5.0, 10.0));
        assert_eq!(b3.intersection(&a3), Some(overlap));
    }

    #[test]
    fn contains_point_is_inclusive() {
        let bb = BoundingBox::new(0.0, 10.0, 0.0, 10.0);
        assert!(bb.contains_point(0.0, 0.0));
        assert!(bb.contains_point(10.0, 10.0));
        assert!(bb.contains_point(5.0, 10.0));
        assert!(!bb.contains_point(10.000001, 5.0));
        assert!(!bb.contains_point(5.0, -0.000001));
    }

    #[test]
    fn contains_bbox() {
        let bb = BoundingBox::new(0.0, 10.0, 0.0, 10.0);
        assert!(bb.contains_bbox(&bb));
        assert!(bb.contains_bbox(&BoundingBox::new(1.0, 2.0, 3.0, 4.0)));
        assert!(bb.contains_bbox(&BoundingBox::new(0.0, 10.0, 5.0, 10.0)));
        assert!(!bb.contains_bbox(&BoundingBox::new(-1.0, 2.0, 3.0, 4.0)));
        assert!(!bb.contains_bbox(&BoundingBox::new(5.0, 15.0, 5.0, 15.0)));
    }

    #[test]
    fn contains_circle_uses_circle_bounds() {
        let bb = BoundingBox::new(9.0, 11.0, 9.0, 11.0);
        assert!(bb.contains_circle(&Circle::new(10.0, 10.0, 50_000.0).unwrap()));
        assert!(!bb.contains_circle(&Circle::new(10.0, 10.0, 150_000.0).unwrap()));
    }

    #[test]
    fn center() {
        let c = BoundingBox::new(-10.0, 20.0, 4.0, 6.0).center();
        assert_eq!(c.x(), 5.0);
        assert_eq!(c.y(), 5.0);
    }

    #[test]
    fn area() {
        let bb = BoundingBox::new(0.0, 1.0, 0.0, 1.0);
        let one_degree = EARTH_CIRCUMFERENCE / 360.0;
        let expected = one_degree * one_degree * 0.5f64.to_radians().cos();
        assert_relative_eq!(bb.area(), expected, max_relative = 1e-9);

        assert_eq!(BoundingBox::new(3.0, 3.0, 1.0, 2.0).area(), 0.0);
    }

    #[test]
    fn from_coords_index_mapping() {
        let bb = BoundingBox::from_coords([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(bb.min_lon, 1.0);
        assert_eq!(bb.min_lat, 2.0);
        assert_eq!(bb.max_lon, 3.0);
        assert_eq!(bb.max_lat, 4.0);
    }

    #[test]
    fn parse_formats_agree() {
        let expected = BoundingBox::new(0.0, 10.0, 0.0, 10.0);
        assert_eq!(BoundingBox::parse_two_points("0,0,10,10"), Ok(expected));
        assert_eq!(BoundingBox::parse_bbox_string("0,10,0,10"), Ok(expected));
        assert_eq!(BoundingBox::parse_two_points("10,10,0,0"), Ok(expected));
    }

    #[test]
    fn parse_two_points_swaps() {
        let bb = BoundingBox::parse_two_points("52.6, 13.1, 52.3, 13.7").unwrap();
        assert_eq!(bb, BoundingBox::new(13.1, 13.7, 52.3, 52.6));
    }

    #[test]
    fn parse_bbox_string_is_verbatim() {
        let bb = BoundingBox::parse_bbox_string("10,0,10,0").unwrap();
        assert_eq!(bb.min_lon, 10.0);
        assert_eq!(bb.max_lon, 0.0);
        assert!(!bb.is_valid());

        let bb: BoundingBox = "1.5,2,-3,4".parse().unwrap();
        assert_eq!(bb, BoundingBox::new(1.5, 2.0, -3.0, 4.0));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            BoundingBox::parse_two_points("1,2,3"),
            Err(ShapeError::InvalidFormat {
                input: "1,2,3".to_string(),
                parts: 3
            })
        );
        assert!(matches!(
            BoundingBox::parse_bbox_string("1,2,3,4,5"),
            Err(ShapeError::InvalidFormat { parts: 5, .. })
        ));
        assert!(matches!(
            BoundingBox::parse_bbox_string("1,2,x,4"),
            Err(ShapeError::InvalidNumber { .. })
        ));
        assert!(matches!(
            BoundingBox::parse_two_points(""),
            Err(ShapeError::InvalidFormat { parts: 1, .. })
        ));
    }

    #[test]
    fn display() {
        let bb = BoundingBox::new(1.5, 2.0, -3.25, 4.0);
        assert_eq!(bb.to_string(), "1.5,2,-3.25,4");
        assert_eq!(bb.to_string().parse::<BoundingBox>(), Ok(bb));

        let bb = BoundingBox::new_3d(1.5, 2.0, -3.25, 4.0, 0.5, 10.0);
        assert_eq!(bb.to_string(), "1.5,2,-3.25,4,0.5,10");
    }

    #[test]
    fn less_precision_string() {
        let bb = BoundingBox::new(0.1 + 0.2, 1.0, 2.0, 3.0);
        assert_eq!(bb.to_string(), "0.30000000000000004,1,2,3");
        assert_eq!(bb.to_less_precision_string(), "0.3,1,2,3");

        let bb = BoundingBox::new_3d(0.0, 1.0, 2.0, 3.0, 0.1 + 0.2, 4.0);
        assert_eq!(bb.to_less_precision_string(), "0,1,2,3,0.3,4");
    }

    #[test]
    fn geo_json() {
        let bb = BoundingBox::new(1.12345678, 2.0, 3.0, 4.0);
        assert_eq!(bb.to_geo_json(), vec![1.123457, 3.0, 2.0, 4.0]);

        let bb = BoundingBox::new_3d(1.0, 2.0, 3.0, 4.0, 100.123, 200.0);
        assert_eq!(bb.to_geo_json(), vec![1.0, 3.0, 100.12, 2.0, 4.0, 200.0]);
    }

    #[test]
    fn geo_json_without_elevation_points() {
        let mut bb = BoundingBox::inverse(true);
        bb.update(3.0, 1.0);
        bb.update(4.0, 2.0);
        assert!(bb.has_elevation());
        assert_eq!(bb.to_geo_json(), vec![1.0, 3.0, 2.0, 4.0]);
        assert!(bb.to_geo_json().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn epsilon_equality() {
        let bb = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        let close = BoundingBox::new(1.0 + 1e-12, 2.0 + 1e-12, 3.0 + 1e-12, 4.0 + 1e-12);
        let far = BoundingBox::new(1.001, 2.001, 3.001, 4.001);
        assert_eq!(bb, close);
        assert_ne!(bb, far);
        assert_eq!(hash_of(&bb), hash_of(&close));

        // elevation must match
        assert_ne!(bb, BoundingBox::new_3d(1.0, 2.0, 3.0, 4.0, 0.0, 0.0));
        assert_ne!(
            BoundingBox::new_3d(1.0, 2.0, 3.0, 4.0, 0.0, 0.0),
            BoundingBox::new_3d(1.0, 2.0, 3.0, 4.0, 0.0, 1.0)
        );
    }

    #[test]
    fn clone_is_independent() {
        let mut a = BoundingBox::new(0.0, 1.0, 0.0, 1.0);
        let b = a;
        a.update(5.0, 5.0);
        assert_eq!(b, BoundingBox::new(0.0, 1.0, 0.0, 1.0));
        assert_ne!(a, b);
    }

    #[test]
    fn update_matches_extent_of_random_points() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = (0..100)
            .map(|_| (rng.gen_range(-90.0..90.0), rng.gen_range(-180.0..180.0)))
            .collect::<Vec<(f64, f64)>>();

        let mut bb = BoundingBox::inverse(false);
        for &(lat, lon) in &points {
            bb.update(lat, lon);
        }

        for &(lat, lon) in &points {
            assert!(bb.contains_point(lat, lon));
        }
        let min_lat = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let max_lon = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(bb.min_lat, min_lat);
        assert_eq!(bb.max_lon, max_lon);
    }

    #[test]
    fn rect_conversion() {
        let rect: Rect = BoundingBox::new(1.0, 2.0, 3.0, 4.0).into();
        assert_eq!(rect.min(), coord! { x: 1.0, y: 3.0 });
        assert_eq!(rect.max(), coord! { x: 2.0, y: 4.0 });
        assert_eq!(BoundingBox::from(rect), BoundingBox::new(1.0, 2.0, 3.0, 4.0));
    }
}
