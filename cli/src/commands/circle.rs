use anyhow::Result;
use clap::Args;
use geoshape_core::Circle;

use super::Distance;

/// Create a circle and print its properties
#[derive(Args, Debug)]
pub struct CircleArgs {
    /// Latitude of the center
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of the center
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Radius in meters
    #[arg(long)]
    pub radius: f64,

    /// How distances are measured
    #[arg(long, value_enum, default_value_t)]
    pub distance: Distance,
}

/// Run the `circle` command
pub fn run_circle(args: CircleArgs) -> Result<()> {
    let circle = Circle::with_calc(args.lat, args.lon, args.radius, args.distance.calc())?;
    print!("{}", describe_circle(&circle)?);
    Ok(())
}

/// Renders the properties of a circle, one per line
pub fn describe_circle(circle: &Circle) -> Result<String> {
    let bounds = circle.bounds();
    Ok(format!(
        "circle:  {}\nbounds:  {}\narea:    {:.1} m²\ngeojson: {}\n",
        circle,
        bounds,
        circle.area(),
        serde_json::to_string(&bounds.to_geo_json())?
    ))
}
