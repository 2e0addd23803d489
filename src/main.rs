// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::debug;
use netgrid::{render_file, DisplayConfig};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "netgrid",
    version,
    about = "Print a routed net as a text grid picture"
)]
struct Cli {
    /// Net XML to visualise
    input: PathBuf,

    /// Each symbol is printed twice so cells look square; this turns it off
    #[arg(short = 'd', long = "no_duplication", alias = "no-duplication")]
    no_duplication: bool,

    /// Print only text output, without color codes
    #[arg(short = 'c', long = "no_colors", alias = "no-colors")]
    no_colors: bool,

    /// JSON display configuration (glyphs, colors, defaults)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Config file (or defaults) with the command-line flags applied on top.
    fn display_config(&self) -> anyhow::Result<DisplayConfig> {
        let mut config = match &self.config {
            Some(path) => DisplayConfig::load(path)?,
            None => DisplayConfig::default(),
        };
        if self.no_duplication {
            config.duplicate_width = false;
        }
        if self.no_colors {
            config.use_color = false;
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.display_config()?;
    debug!("Display config: {:?}", config);

    // Built in full before anything reaches stdout.
    let output = render_file(&cli.input, &config)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write picture to stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr; default filter is "warn" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("netgrid: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
