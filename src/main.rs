//! CLI entry point for the cyber security awareness rater.
//!
//! Provides subcommands for scoring a respondent table end-to-end and for
//! validating an input file's shape against the column schema.

use anyhow::Result;
use clap::{Parser, Subcommand};
use csa_rater::analyzers::analyzer::{analyze, check};
use csa_rater::ingest::ColumnSchema;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "csa_rater")]
#[command(about = "A tool to score cyber security awareness surveys", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a respondent CSV and write the results table plus report
    Score {
        /// Path to the respondent CSV
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// CSV file to write per-respondent results to
        #[arg(short, long, default_value = "results.csv")]
        output: String,

        /// JSON file to write the population report to
        #[arg(short, long, default_value = "report.json")]
        report: String,

        /// Optional JSON file overriding the default column schema
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },
    /// Validate a respondent CSV's shape without scoring it
    Check {
        /// Path to the respondent CSV
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Optional JSON file overriding the default column schema
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/csa_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("csa_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            input,
            output,
            report,
            schema,
        } => {
            let schema = load_schema(schema.as_deref())?;
            let summary = analyze(&input, &output, &report, &schema)?;

            let dist = &summary.population.distribution;
            info!(
                sangat_baik = dist.sangat_baik,
                baik = dist.baik,
                kurang_baik = dist.kurang_baik,
                buruk = dist.buruk,
                "Category distribution"
            );
            info!(
                respondents = summary.respondents,
                nkkst = summary.population.technical.mean,
                nkkss = summary.population.social.mean,
                nki = summary.population.overall.mean,
                category = %summary.population.overall.category,
                "Scoring complete"
            );
        }
        Commands::Check { input, schema } => {
            let schema = load_schema(schema.as_deref())?;
            let rows = check(&input, &schema)?;
            info!(rows, "File is well-formed");
        }
    }

    Ok(())
}

fn load_schema(path: Option<&Path>) -> Result<ColumnSchema> {
    Ok(match path {
        Some(path) => ColumnSchema::from_file(path)?,
        None => ColumnSchema::default(),
    })
}
