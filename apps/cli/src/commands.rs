//! CLI argument definitions, tracing setup, and the conversion run.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// html2ipynb — recover a notebook from its rendered HTML export.
#[derive(Parser)]
#[command(
    name = "html2ipynb",
    version,
    about = "Convert a rendered notebook HTML export back into an .ipynb notebook.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Input HTML file.
    pub input: PathBuf,

    /// Output notebook file.
    #[arg(short, long, default_value = "output.ipynb")]
    pub output: PathBuf,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", env = "HTML2IPYNB_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "html2ipynb=info",
        1 => "html2ipynb=debug",
        _ => "html2ipynb=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Conversion run
// ---------------------------------------------------------------------------

/// Read the input export, convert it, and write the notebook.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let html = fs::read_to_string(&cli.input)
        .wrap_err_with(|| format!("failed to read {}", cli.input.display()))?;

    info!(input = %cli.input.display(), bytes = html.len(), "converting HTML export");

    let notebook = html2ipynb_convert::convert(&html)?;
    let json = html2ipynb_convert::to_json(&notebook)?;

    fs::write(&cli.output, &json)
        .wrap_err_with(|| format!("failed to write {}", cli.output.display()))?;

    info!(
        cells = notebook.cells.len(),
        output = %cli.output.display(),
        "conversion complete"
    );
    println!(
        "Conversion complete. Notebook saved as {}",
        cli.output.display()
    );

    Ok(())
}
