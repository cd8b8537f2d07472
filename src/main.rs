use clap::Parser;
use log::info;
use mapmeasure::{AreaMethod, GeoPoint, LineType, MeasureConfig};

#[derive(Parser)]
#[command(name = "mapmeasure", about = "Path length or enclosed area of map points")]
struct Cli {
    /// Point as "lat,lon" in degrees; repeat in tap order
    #[arg(
        short,
        long = "point",
        required = true,
        allow_hyphen_values = true,
        value_parser = GeoPoint::parse_unchecked
    )]
    points: Vec<GeoPoint>,

    /// What to measure: polyline (distance) or polygon (area)
    #[arg(short, long, default_value = "polyline")]
    mode: LineType,

    /// Polygon area formula: spherical, planar or geodesic
    #[arg(short, long, default_value = "spherical")]
    area_method: AreaMethod,

    /// Sphere radius in kilometres
    #[arg(long)]
    radius_km: Option<f64>,

    /// Decimal places in the report
    #[arg(short, long, default_value = "2")]
    decimals: usize,

    /// Measure out-of-range coordinates instead of rejecting them
    #[arg(long)]
    lenient: bool,
}

impl Cli {
    fn config(&self) -> MeasureConfig {
        let mut config = MeasureConfig {
            area_method: self.area_method,
            decimals: self.decimals,
            strict: !self.lenient,
            ..MeasureConfig::default()
        };
        if let Some(r) = self.radius_km {
            config.earth_radius_km = r;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.config();

    let listed: Vec<String> = cli.points.iter().map(ToString::to_string).collect();
    info!("{} over {}", cli.mode, listed.join(" "));

    // Range checks happen here, so errors name the offending point index.
    let measurement = mapmeasure::measure(&cli.points, cli.mode, &config)?;
    println!("{}", measurement);

    Ok(())
}
