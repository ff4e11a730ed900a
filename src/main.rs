//! CLI entry point for the bikeshare statistics tool.
//!
//! Provides a one-shot `stats` query and an interactive `explore` loop over
//! the city trip sources.

use anyhow::{Context, Result};
use bikeshare_stats::analyzers::report::TripReport;
use bikeshare_stats::config::AppConfig;
use bikeshare_stats::error::SelectorError;
use bikeshare_stats::output::{write_json, write_pretty, write_text};
use bikeshare_stats::selector::{City, DayFilter, MonthFilter, Selector};
use bikeshare_stats::{filter, loader};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Descriptive statistics over bikeshare trip data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report statistics for one city, optionally narrowed to a month and weekday
    Stats {
        /// City to analyze: chicago, "new york city" or washington
        #[arg(value_name = "CITY")]
        city: City,

        /// Month to keep (january..june), or all
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// Weekday to keep (monday..sunday), or all
        #[arg(short, long, default_value = "all")]
        day: DayFilter,

        /// Directory containing the city CSV files (overrides BIKESHARE_DATA_DIR)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Run the aggregators as parallel tasks
        #[arg(long, default_value_t = false)]
        concurrent: bool,
    },
    /// Interactively choose city, month and day, and repeat on request
    Explore {
        /// Directory containing the city CSV files (overrides BIKESHARE_DATA_DIR)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Debug,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let config = AppConfig::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = config.log_file.parent().unwrap_or(Path::new("logs"));
    let log_file_name = config
        .log_file
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats {
            city,
            month,
            day,
            data_dir,
            format,
            concurrent,
        } => {
            let config = config.with_data_dir(data_dir);
            let selector = Selector::new(month, day);
            run_query(&config, city, selector, format, concurrent).await?;
        }
        Commands::Explore { data_dir } => {
            let config = config.with_data_dir(data_dir);
            explore(&config).await?;
        }
    }

    Ok(())
}

/// Loads, filters and reports on one city for one selector.
#[tracing::instrument(skip(config), fields(data_dir = %config.data_dir.display()))]
async fn run_query(
    config: &AppConfig,
    city: City,
    selector: Selector,
    format: Format,
    concurrent: bool,
) -> Result<()> {
    let dataset = loader::load_city(&config.data_dir, city)
        .with_context(|| format!("Failed to load trip data for {city}"))?;
    let filtered = filter::apply(&dataset, &selector);
    drop(dataset);

    info!(
        matching = filtered.len(),
        month = %selector.month,
        day = %selector.day,
        "Trips selected"
    );

    let report = if concurrent {
        TripReport::build_concurrent(Arc::new(filtered)).await?
    } else {
        TripReport::build(&filtered)
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Text => write_text(&mut out, city, &selector, &report)?,
        Format::Json => write_json(&mut out, &report)?,
        Format::Debug => write_pretty(&mut out, &report)?,
    }
    out.flush()?;

    Ok(())
}

/// Prompt loop: collects a city, month and day, reports, and asks to restart.
async fn explore(config: &AppConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    println!("Hello! Let's explore some US bikeshare data!");
    loop {
        let Some(city) = ask::<City, _>(
            &mut input,
            "Enter the city you want to investigate (Chicago / New York City / Washington):",
        )?
        else {
            break;
        };
        let Some(month) = ask::<MonthFilter, _>(
            &mut input,
            "Enter the month to study (January - June), or all for no month filter:",
        )?
        else {
            break;
        };
        let Some(day) = ask::<DayFilter, _>(
            &mut input,
            "Enter the day to study (Monday - Sunday), or all for no day filter:",
        )?
        else {
            break;
        };

        if let Err(e) = run_query(config, city, Selector::new(month, day), Format::Text, false).await
        {
            warn!(error = %e, "Query failed");
            println!("Could not compute statistics: {e:#}");
        }

        print!("\nWould you like to restart? Enter yes or no.\n");
        std::io::stdout().flush()?;
        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 || !answer.trim().eq_ignore_ascii_case("yes") {
            break;
        }
    }

    Ok(())
}

/// Asks until the answer parses. `None` when input ends.
fn ask<T, R>(input: &mut R, question: &str) -> Result<Option<T>>
where
    T: FromStr<Err = SelectorError>,
    R: BufRead,
{
    print!("{question} ");
    std::io::stdout().flush()?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                warn!(error = %e, "Invalid selection");
                print!("Oops, {e}. Try again? ");
                std::io::stdout().flush()?;
            }
        }
    }
}
