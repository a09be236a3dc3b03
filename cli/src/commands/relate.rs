use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use super::{shape_arg::ShapeArg, Distance};

/// Check how two shapes relate to each other
#[derive(Args, Debug)]
pub struct RelateArgs {
    /// The first shape: `bbox:min_lon,max_lon,min_lat,max_lat` or
    /// `circle:lat,lon,radius`
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// The second shape
    #[arg(allow_hyphen_values = true)]
    pub b: String,

    /// How distances of circles are measured
    #[arg(long, value_enum, default_value_t)]
    pub distance: Distance,
}

/// Run the `relate` command
pub fn run_relate(args: RelateArgs) -> Result<()> {
    let calc = args.distance.calc();
    let a = ShapeArg::parse(&args.a, calc)
        .with_context(|| format!("Unable to parse first shape `{}'", args.a))?;
    let b = ShapeArg::parse(&args.b, calc)
        .with_context(|| format!("Unable to parse second shape `{}'", args.b))?;
    debug!(?a, ?b, "relating shapes");

    print!("{}", relate(&a, &b)?);
    Ok(())
}

/// Renders intersection and containment in both directions
pub fn relate(a: &ShapeArg, b: &ShapeArg) -> Result<String> {
    let (a, b) = (a.as_shape(), b.as_shape());
    Ok(format!(
        "intersects: {}\na contains b: {}\nb contains a: {}\n",
        a.intersects(b)?,
        a.contains(b)?,
        b.contains(a)?
    ))
}
