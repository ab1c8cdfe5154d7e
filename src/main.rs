use std::{fs::File, io::BufWriter, process::ExitCode};

use camino::Utf8PathBuf;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mpcorb::{
    export::write_csv,
    pipeline::{params::PipelineParams, process_catalog_file},
    time::parse_epoch,
    MpcorbError,
};

#[derive(Parser, Debug)]
#[command(name = "mpcorb")]
#[command(version, about = "Classify and epoch-adjust the MPCORB minor planet catalog", long_about = None)]
struct Cli {
    /// Path to an uncompressed MPCORB.DAT file
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    input: Option<Utf8PathBuf>,

    /// Target epoch, e.g. "2025-01-01T00:00:00 UTC" (default: start of the current UTC day)
    #[arg(short = 'e', long = "epoch", value_name = "EPOCH")]
    epoch: Option<String>,

    /// Non-blank header lines preceding the first orbit
    #[arg(long = "header-lines", default_value_t = mpcorb::constants::MPCORB_HEADER_LINES)]
    header_lines: usize,

    /// Highest accepted uncertainty parameter U (0-9)
    #[arg(long = "max-uncertainty", default_value_t = 0)]
    max_uncertainty: u8,

    /// Keep orbits whose uncertainty column is blank
    #[arg(long = "keep-blank-uncertainty")]
    keep_blank_uncertainty: bool,

    /// Write the classified orbits to this CSV file
    #[arg(long = "csv", value_name = "PATH")]
    csv: Option<Utf8PathBuf>,

    /// Fetch MPCORB.DAT from the Minor Planet Center when no input is given
    #[cfg(feature = "download")]
    #[arg(long = "download")]
    download: bool,

    /// Download again even if a cached catalog exists
    #[cfg(feature = "download")]
    #[arg(long = "force", requires = "download")]
    force: bool,

    /// Cache directory for downloaded catalogs
    #[cfg(feature = "download")]
    #[arg(long = "cache-dir", value_name = "DIR", requires = "download")]
    cache_dir: Option<Utf8PathBuf>,

    /// Log every skipped orbit
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) -> Result<(), MpcorbError> {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("mpcorb={level}")))
        .map_err(|e| {
            MpcorbError::InvalidPipelineParameter(format!("failed to create log filter: {e}"))
        })?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn catalog_path(cli: &Cli) -> Result<Utf8PathBuf, MpcorbError> {
    if let Some(path) = &cli.input {
        return Ok(path.clone());
    }

    #[cfg(feature = "download")]
    {
        if cli.download {
            return mpcorb::catalog::download::fetch_catalog(cli.cache_dir.as_deref(), cli.force);
        }
    }

    Err(MpcorbError::InvalidPipelineParameter(
        "no input catalog given (use --input)".into(),
    ))
}

fn run(cli: &Cli) -> Result<(), MpcorbError> {
    let mut builder = PipelineParams::builder()
        .header_lines(cli.header_lines)
        .max_uncertainty(cli.max_uncertainty)
        .keep_blank_uncertainty(cli.keep_blank_uncertainty);
    if let Some(epoch) = &cli.epoch {
        builder = builder.target_epoch(parse_epoch(epoch)?);
    }
    let params = builder.build()?;
    info!(%params, "pipeline parameters");

    let path = catalog_path(cli)?;
    info!(%path, "reading catalog");
    let payload = process_catalog_file(&path, &params)?;

    for group in &payload.groups {
        info!(orbit_type = %group.orbit_type, count = group.len(), "group");
    }
    println!("{:#}", payload.stats);

    if let Some(csv_path) = &cli.csv {
        let file = File::create(csv_path)?;
        write_csv(&payload, BufWriter::new(file))?;
        info!(path = %csv_path, records = payload.total_records(), "CSV written");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
