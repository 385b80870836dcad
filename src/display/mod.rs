//! Cow rendering and daemon collaborators
//!
//! The front-end only ever talks to the [`Cowsay`] trait. The shipped
//! backend is a terminal fallback: it draws the message in a speech bubble
//! above an ASCII cow and sleeps through the configured display dwell. A
//! proper animated desktop backend would implement the same trait.

use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;

use crate::settings::Settings;
use crate::settings::defaults::{DISPLAY_TIME, FONT, LEAD_IN_TIME, LEAD_OUT_TIME};

/// Longest line inside the speech bubble before wrapping.
const BUBBLE_WIDTH: usize = 40;

/// The rendering and daemon boundary.
pub trait Cowsay {
    /// One-time toolkit initialization, called before one-shot display.
    fn init(&mut self) -> Result<()>;

    /// Show a single message, honoring the timing and font options.
    fn display_cow(&mut self, settings: &Settings, message: &str) -> Result<()>;

    /// Enter daemon mode. Owns the rest of the process lifetime; returns
    /// only when the message stream ends.
    fn run_daemon(&mut self, settings: &Settings, debug: bool) -> Result<()>;
}

/// Terminal backend: prints the cow instead of animating it.
pub struct ConsoleCow {
    rng: StdRng,
}

impl ConsoleCow {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Cowsay for ConsoleCow {
    fn init(&mut self) -> Result<()> {
        // Nothing to bring up for a plain terminal.
        Ok(())
    }

    fn display_cow(&mut self, settings: &Settings, message: &str) -> Result<()> {
        let lead_in = settings.get_int(LEAD_IN_TIME);
        let display = settings.get_int(DISPLAY_TIME);
        let lead_out = settings.get_int(LEAD_OUT_TIME);
        debug!(
            "displaying for {}ms (lead in {}ms, lead out {}ms) with font '{}'",
            display,
            lead_in,
            lead_out,
            settings.get_string(FONT)
        );

        sleep_ms(lead_in);
        let eyes = *["oo", "OO", "@@", "..", "^^"]
            .get(self.rng.gen_range(0..5))
            .unwrap_or(&"oo");
        println!("{}", render_cow(message, eyes));
        // Hold the cow on screen for the configured dwell.
        sleep_ms(display);
        sleep_ms(lead_out);
        Ok(())
    }

    fn run_daemon(&mut self, settings: &Settings, debug: bool) -> Result<()> {
        if !debug {
            info!("terminal backend cannot detach; staying attached");
        }
        info!("daemon mode: reading messages from standard input");
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            self.display_cow(settings, &line)?;
        }
        Ok(())
    }
}

fn sleep_ms(millis: i64) {
    if millis > 0 {
        thread::sleep(Duration::from_millis(millis as u64));
    }
}

/// Lay the message out in a speech bubble with the cow underneath.
pub fn render_cow(message: &str, eyes: &str) -> String {
    let lines = wrap_message(message, BUBBLE_WIDTH);
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(" {} \n", "_".repeat(width + 2)));
    match lines.len() {
        0 | 1 => {
            let line = lines.first().map(String::as_str).unwrap_or("");
            out.push_str(&format!("< {:<width$} >\n", line));
        }
        n => {
            for (i, line) in lines.iter().enumerate() {
                let (open, close) = match i {
                    0 => ('/', '\\'),
                    i if i == n - 1 => ('\\', '/'),
                    _ => ('|', '|'),
                };
                out.push_str(&format!("{open} {line:<width$} {close}\n"));
            }
        }
    }
    out.push_str(&format!(" {} \n", "-".repeat(width + 2)));
    out.push_str(&format!(
        "        \\   ^__^\n         \\  ({eyes})\\_______\n            (__)\\       )\\/\\\n                ||----w |\n                ||     ||\n"
    ));
    out
}

/// Greedy word wrap. Words longer than the limit get a line of their own.
fn wrap_message(message: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in message.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
