use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod pipeline;
pub mod watch;

use cli::Command;

fn main() -> Result<ExitCode> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    // 3. Dispatcher la sous-commande
    let ok = match cli.command {
        Command::Build {
            source,
            emit,
            save_snapshot,
        } => pipeline::run_build(&source, &emit, save_snapshot.as_deref(), &mut stdout)?,
        Command::Validate { source } => pipeline::run_validate(&source, &mut stdout)?,
        Command::Lookup { source, names } => {
            let missing =
                pipeline::run_lookup(&source, &names, &mut stdout, &mut std::io::stderr())?;
            missing == 0
        }
        Command::Watch { source, emit } => {
            watch::run_watch(source, emit)?;
            true
        }
    };
    stdout.flush()?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
