//! `devorient` command-line replay of device-orientation traces.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use devorient::options::ControlsOptions;
use devorient::replay::replay_trace;
use devorient::DevorientError;

/// Replay a device-orientation trace and print the resulting orientations.
#[derive(Parser)]
#[command(name = "devorient", version)]
struct Cli {
    /// JSON-lines trace file.
    trace: PathBuf,

    /// TOML options file.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Print frames recorded while disconnected too.
    #[arg(long)]
    all: bool,
}

fn run(cli: &Cli) -> Result<(), DevorientError> {
    let options = cli
        .options
        .as_deref()
        .map_or_else(|| Ok(ControlsOptions::default()), ControlsOptions::load)?;
    log::info!("Replaying {} with {options:?}", cli.trace.display());

    let text = std::fs::read_to_string(&cli.trace)?;
    for frame in replay_trace(&text, options, cli.all)? {
        let line =
            serde_json::to_string(&frame).map_err(std::io::Error::from)?;
        println!("{line}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
