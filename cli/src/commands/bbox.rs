use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use geoshape_core::BoundingBox;

/// Parse a bounding box and print its properties
#[derive(Args, Debug)]
pub struct BBoxArgs {
    /// Four comma-separated numbers
    #[arg(allow_hyphen_values = true)]
    pub bbox: String,

    /// How to interpret the numbers
    #[arg(long, value_enum, default_value_t = BBoxFormat::Bbox)]
    pub format: BBoxFormat,
}

/// Text formats accepted for bounding boxes
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BBoxFormat {
    /// `min_lon,max_lon,min_lat,max_lat`, taken verbatim
    Bbox,

    /// `lat1,lon1,lat2,lon2` with the two corners in any order
    TwoPoints,
}

/// Run the `bbox` command
pub fn run_bbox(args: BBoxArgs) -> Result<()> {
    let bbox = match args.format {
        BBoxFormat::Bbox => BoundingBox::parse_bbox_string(&args.bbox),
        BBoxFormat::TwoPoints => BoundingBox::parse_two_points(&args.bbox),
    }
    .with_context(|| format!("Unable to parse bounding box `{}'", args.bbox))?;

    print!("{}", describe_bbox(&bbox)?);
    Ok(())
}

/// Renders the properties of a box, one per line
pub fn describe_bbox(bbox: &BoundingBox) -> Result<String> {
    let center = bbox.center();
    Ok(format!(
        "bbox:    {}\nvalid:   {}\ncenter:  {},{}\narea:    {:.1} m²\ngeojson: {}\n",
        bbox,
        bbox.is_valid(),
        center.y(),
        center.x(),
        bbox.area(),
        serde_json::to_string(&bbox.to_geo_json())?
    ))
}
