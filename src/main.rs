//! Ring Shot entry point
//!
//! Parses the command line, prepares the terminal and runs the game loop.

use std::io::{BufWriter, Write, stdout};
use std::process::ExitCode;

use clap::Parser;
use crossterm::{ExecutableCommand, cursor, terminal};

use ring_shot::app::App;
use ring_shot::{Error, Settings};

#[derive(Parser)]
#[command(name = "ring-shot")]
#[command(about = "Shoot through rotating rings of obstacles")]
struct Args {
    /// Ticks per second
    #[arg(long, value_name = "FPS")]
    framerate: Option<String>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let result = Settings::from_raw(args.framerate.as_deref(), args.seed).and_then(run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(settings: Settings) -> Result<(), Error> {
    terminal::enable_raw_mode()?;
    // Declared before `out` so the buffer is flushed before the terminal is restored
    let _guard = TerminalGuard;

    let mut out = BufWriter::new(stdout());
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    App::new(settings, &mut out).run()
}

/// Restores the terminal when dropped, on early returns and panics alike
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(&mut stdout());
    }
}

fn restore_terminal<W: Write>(out: &mut W) {
    if let Err(err) = out.execute(cursor::Show) {
        log::warn!("Failed to show cursor: {}", err);
    }
    if let Err(err) = out.execute(terminal::LeaveAlternateScreen) {
        log::warn!("Failed to leave alternate screen: {}", err);
    }
    if let Err(err) = terminal::disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_shows_cursor_and_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore_terminal(&mut out);
        let written = String::from_utf8(out).unwrap();
        let show = written.find("\x1b[?25h").expect("cursor shown");
        let leave = written.find("\x1b[?1049l").expect("alternate screen left");
        assert!(show < leave);
    }
}
