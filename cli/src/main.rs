use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    bbox::{run_bbox, BBoxArgs},
    circle::{run_circle, CircleArgs},
    relate::{run_relate, RelateArgs},
};
use tracing_subscriber::EnvFilter;
use yansi::{Condition, Paint};

mod commands;

/// Environment variable holding the default log filter
const LOG_ENV: &str = "GEOSHAPE_LOG";

#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    /// Log filter such as `debug` or `geoshape_core=trace`. Takes precedence
    /// over the GEOSHAPE_LOG environment variable.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(name = "bbox")]
    BBox(BBoxArgs),
    Circle(CircleArgs),
    Relate(RelateArgs),
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_env(LOG_ENV).ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::BBox(args) => run_bbox(args),
        Commands::Circle(args) => run_circle(args),
        Commands::Relate(args) => run_relate(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let msg = format!("error: {err:#}");
            eprintln!(
                "{}",
                msg.red().bold().whenever(Condition::from(|| {
                    Condition::stderr_is_tty() && Condition::clicolor() && Condition::no_color()
                }))
            );
            ExitCode::FAILURE
        }
    }
}
