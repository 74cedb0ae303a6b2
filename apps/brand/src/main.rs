use anyhow::Context;
use clap::Parser;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use site_logger::{LevelFilter, Logger};
use std::io::{self, Write};
use std::path::PathBuf;

/// Print the site branding record as JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Minimum level for diagnostics on stderr.
    #[arg(long, default_value = "warn", value_parser = level_parser())]
    log_level: LevelFilter,

    /// Also write rolling log files to this directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn level_parser() -> impl TypedValueParser<Value = LevelFilter> {
    PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]).map(|level| {
        match level.as_str() {
            "error" => LevelFilter::ERROR,
            "warn" => LevelFilter::WARN,
            "info" => LevelFilter::INFO,
            "debug" => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(cli.log_level);
    let _logger = match &cli.log_dir {
        Some(dir) => builder.path(dir).init(),
        None => builder.init(),
    }
    .context("Failed to initialize logging")?;

    let brand = site_content::config();
    tracing::info!(company = brand.company_name, url = brand.url, "Emitting branding record");

    let json = if cli.pretty {
        serde_json::to_string_pretty(brand)
    } else {
        serde_json::to_string(brand)
    }
    .context("Failed to encode branding record")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
