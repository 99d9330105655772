use anyhow::Result;
use clap::{Parser, ValueEnum};
use covermap::config::ScenarioConfig;
use covermap::export::{self, MetadataFormat};
use covermap::Scenario;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum MetadataArg {
    Json,
    Csv,
}

impl From<MetadataArg> for MetadataFormat {
    fn from(arg: MetadataArg) -> Self {
        match arg {
            MetadataArg::Json => MetadataFormat::Json,
            MetadataArg::Csv => MetadataFormat::Csv,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "covermap",
    about = "Build the UE/satellite coverage tensor for a scenario and export it"
)]
struct Args {
    /// Scenario config JSON; the reference scenario when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the tensor and metadata files
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Override the placement seed
    #[arg(long)]
    seed: Option<u32>,

    /// Do not append the always-covered fallback channel
    #[arg(long)]
    no_feasible: bool,

    /// Fill the tensor on all cores
    #[arg(long)]
    parallel: bool,

    /// Entity metadata format
    #[arg(long, value_enum, default_value_t = MetadataArg::Json)]
    metadata_format: MetadataArg,

    /// Debug output; otherwise RUST_LOG, defaulting to info
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => ScenarioConfig::from_json_file(path)?,
        None => ScenarioConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.no_feasible {
        config.feasible = false;
    }
    if args.parallel {
        config.parallel = true;
    }

    let scenario = Scenario::assemble(config)?;

    let start = Instant::now();
    let tensor = scenario.coverage()?;
    info!(
        "Time taken: {} milliseconds ({} of {} cells covered)",
        start.elapsed().as_millis(),
        tensor.count_covered(),
        tensor.as_slice().len()
    );

    let start = Instant::now();
    let written = export::export_run(
        &args.output_dir,
        &scenario.ues,
        &scenario.satellites,
        &tensor,
        scenario.config.total_duration,
        args.metadata_format.into(),
    )?;
    info!(
        "Time taken to save: {} milliseconds",
        start.elapsed().as_millis()
    );
    for path in written {
        info!("  {}", path.display());
    }

    Ok(())
}
