//! trepick: pick a file or folder from an inline terminal prompt.
//!
//! The prompt is drawn on stderr in an inline viewport so stdout carries only
//! the chosen path, e.g. `vim "$(trepick -e .rs)"`. Exit status is 0 with an
//! answer, 130 when aborted and 1 on error.

mod app;
mod cli;
mod input;
mod paginator;
mod render;
mod ui;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::panic;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Paragraph, Widget},
    Terminal, TerminalOptions, Viewport,
};
use tracing_subscriber::EnvFilter;

use crate::app::{App, Outcome, RenderPhase};
use crate::cli::Cli;
use crate::input::{handle_key, InputAction};
use crate::render::{render, viewport_height};
use crate::ui::header::answered_line;

type Tui = Terminal<CrosstermBackend<io::Stderr>>;

const EXIT_ABORTED: u8 = 130;

fn setup_terminal(page_size: usize) -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, Hide)?;
    let terminal = Terminal::with_options(
        CrosstermBackend::new(stderr),
        TerminalOptions {
            viewport: Viewport::Inline(viewport_height(page_size)),
        },
    )?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), Show)?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), Show);
        original_hook(panic_info);
    }));
}

/// Sends tracing output to `$TREPICK_LOG`, or `trepick.log` in the temp dir,
/// so log lines never land on the prompt. `RUST_LOG` overrides the `info` level.
fn init_logging() -> anyhow::Result<()> {
    let path = std::env::var_os("TREPICK_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("trepick.log"));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging() {
        eprintln!("trepick: logging disabled: {e}");
    }

    match run(&cli) {
        Ok(Outcome::Answered(path)) => match print_answer(&path, cli.print0) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        Ok(_) => ExitCode::from(EXIT_ABORTED),
        Err(e) => {
            tracing::error!(error = %e, "session failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let config = cli.to_config()?;
    let keymap = cli.to_keymap()?;
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let app = App::new(&config, keymap, &cwd)?;
    tracing::info!(dir = %app.state().current_dir().display(), "prompt started");

    install_panic_hook();
    let mut terminal =
        setup_terminal(app.page_size()).context("failed to set up the terminal")?;

    let result = run_app(&mut terminal, app);
    finish(&mut terminal, result.as_ref().ok())?;

    Ok(result?.outcome().clone())
}

fn run_app(terminal: &mut Tui, mut app: App) -> anyhow::Result<App> {
    loop {
        if app.phase() == RenderPhase::NotYetRendered {
            terminal.draw(|f| render(f, &app))?;
            app = app.with_rendered();
        }
        if app.is_finished() {
            return Ok(app);
        }

        match event::read()? {
            Event::Key(key) => match handle_key(key, app.keymap()) {
                InputAction::Action(action) => {
                    app = app.handle_action(action)?;
                    terminal.draw(|f| render(f, &app))?;
                }
                InputAction::Abort => app = app.with_aborted(),
                InputAction::None => {}
            },
            Event::Resize(_, _) => {
                terminal.draw(|f| render(f, &app))?;
            }
            _ => {}
        }
    }
}

/// Leaves the answered line in the scrollback, wipes the viewport and hands
/// the terminal back.
fn finish(terminal: &mut Tui, app: Option<&App>) -> anyhow::Result<()> {
    if let Some(app) = app {
        if let Outcome::Answered(path) = app.outcome() {
            let line = answered_line(app.message(), path, app.theme());
            terminal.insert_before(1, |buf| {
                let area = buf.area;
                Paragraph::new(line).render(area, buf);
            })?;
        }
    }
    let cleared = terminal.clear();
    restore_terminal(terminal)?;
    Ok(cleared?)
}

fn print_answer(path: &Path, print0: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(path.as_os_str().as_encoded_bytes())?;
    stdout.write_all(if print0 { b"\0" } else { b"\n" })?;
    stdout.flush()
}
