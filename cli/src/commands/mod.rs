use clap::ValueEnum;
use geoshape_core::distance::{DistanceCalc, DIST_EARTH, DIST_PLANE};

pub mod bbox;
pub mod circle;
pub mod relate;
pub mod shape_arg;

/// How distances are measured
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Distance {
    /// Great circle distance on a spherical earth
    #[default]
    Earth,

    /// Faster planar approximation for short distances
    Plane,
}

impl Distance {
    pub fn calc(self) -> &'static dyn DistanceCalc {
        match self {
            Distance::Earth => &DIST_EARTH,
            Distance::Plane => &DIST_PLANE,
        }
    }
}
