//! Command-line front-end
//!
//! Translates argv into registry state and a single dispatch decision:
//! usage, daemon mode, or one-shot display with the message taken from an
//! argument or from standard input.

use std::io::Read;

use anyhow::{Result, anyhow};
use clap::Parser;
use log::warn;

use crate::display::Cowsay;
use crate::settings::Settings;
use crate::settings::defaults::{DISPLAY_TIME, FONT};

/// Maximum number of bytes read from standard input.
pub const MAX_STDIN: usize = 4096;

#[derive(Parser, Debug)]
#[command(name = "xcowsay")]
#[command(about = "Display a cow on your desktop with MESSAGE or standard input.")]
pub struct Cli {
    /// Display message for SECONDS seconds.
    #[arg(short = 't', long = "time", value_name = "SECONDS")]
    pub time: Option<String>,

    /// Set message font (Pango format).
    #[arg(short = 'f', long = "font", value_name = "FONT")]
    pub font: Option<String>,

    /// Run xcowsay in daemon mode.
    #[arg(short = 'd', long = "daemon")]
    pub daemon: bool,

    /// Keep daemon attached to terminal.
    #[arg(long = "debug")]
    pub debug: bool,

    /// Message to display.
    #[arg(value_name = "MESSAGE")]
    pub message: Vec<String>,
}

/// What the process should do after parsing. Exactly one outcome per run.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// Hand off to the daemon; it owns the rest of the process lifetime.
    Daemon { debug: bool },
    /// One-shot display of the given message.
    ShowMessage(String),
    /// One-shot display, message read from standard input.
    ShowFromStdin,
    /// More than one positional argument. Reported as an error, but the
    /// process still exits successfully without displaying anything.
    TooManyArguments,
}

/// Apply value-bearing flags to the registry and decide the invocation.
///
/// User input is validated here, before it reaches the registry, so the
/// registry's fail-fast setters only ever see well-formed values.
pub fn plan(cli: &Cli, settings: &mut Settings) -> Result<Invocation> {
    if let Some(raw) = &cli.time {
        let seconds = parse_int_arg(raw)?;
        settings.set_int(DISPLAY_TIME, seconds.saturating_mul(1000));
    }
    if let Some(font) = &cli.font {
        settings.set_string(FONT, font);
    }

    if cli.daemon {
        return Ok(Invocation::Daemon { debug: cli.debug });
    }
    match cli.message.len() {
        0 => Ok(Invocation::ShowFromStdin),
        1 => Ok(Invocation::ShowMessage(cli.message[0].clone())),
        _ => Ok(Invocation::TooManyArguments),
    }
}

/// Run the chosen invocation against a display backend.
///
/// `input` stands in for standard input so the stdin path stays testable.
pub fn dispatch<R: Read>(
    invocation: Invocation,
    settings: &Settings,
    cow: &mut dyn Cowsay,
    input: R,
) -> Result<()> {
    match invocation {
        Invocation::Daemon { debug } => cow.run_daemon(settings, debug),
        Invocation::ShowMessage(message) => {
            cow.init()?;
            cow.display_cow(settings, &message)
        }
        Invocation::ShowFromStdin => {
            cow.init()?;
            let (message, truncated) = read_message(input)?;
            if truncated {
                eprintln!("Warning: Excess input truncated");
                warn!("standard input exceeded {MAX_STDIN} bytes");
            }
            cow.display_cow(settings, &message)
        }
        Invocation::TooManyArguments => {
            eprintln!("Error: Too many arguments");
            Ok(())
        }
    }
}

/// Parse a flag argument as a complete base-10 integer. Trailing garbage
/// is an error, not ignored.
pub fn parse_int_arg(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| anyhow!("'{raw}' is not a valid integer"))
}

/// Read the message from standard input, bounded at [`MAX_STDIN`] bytes.
/// Returns the message and whether it was truncated to fit. When input
/// meets the bound the message is capped one byte below it.
pub fn read_message<R: Read>(input: R) -> Result<(String, bool)> {
    let mut data = Vec::with_capacity(MAX_STDIN);
    input.take(MAX_STDIN as u64).read_to_end(&mut data)?;
    let truncated = data.len() == MAX_STDIN;
    if truncated {
        data.truncate(MAX_STDIN - 1);
    }
    Ok((String::from_utf8_lossy(&data).into_owned(), truncated))
}
