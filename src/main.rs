use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use xcowsay::cli::{self, Cli};
use xcowsay::display::ConsoleCow;
use xcowsay::settings::{Settings, defaults};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    // Defaults go in before any argument can override them.
    let mut settings = Settings::new();
    defaults::register(&mut settings);

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help wins over everything else on the command line.
            err.print()?;
            return Ok(if err.kind() == ErrorKind::DisplayHelp {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
    };

    let invocation = cli::plan(&args, &mut settings)?;
    debug!("dispatching {:?}", invocation);

    // Seeded once, before dispatch; the backend draws on it for variety.
    let mut cow = ConsoleCow::new(StdRng::from_entropy());
    cli::dispatch(invocation, &settings, &mut cow, io::stdin().lock())?;
    Ok(ExitCode::SUCCESS)
}
