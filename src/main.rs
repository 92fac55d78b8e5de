//! Terminal frontend and entry point.
//!
//! This binary is the thin integration layer between the pictriage library
//! and the terminal: it parses arguments, loads configuration, initializes
//! tracing, then runs a raw-mode key loop that maps keypresses to library
//! events and executes the returned actions.
//!
//! # Key Mapping
//!
//! - `0`–`9` → `Event::Assign(digit)` (digits without a configured category
//!   are ignored by the core)
//! - `u` → `Event::Undo`
//! - `q` / Esc → `Event::Quit`
//! - anything else is dropped before reaching the core
//!
//! The "display collaborator" here is a line printed per cursor change:
//! the absolute path of the current image plus progress counters. Pixel
//! rendering is left to whatever image viewer the user points at the path.

use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use pictriage::{
    handle_event, initialize, observability, Action, Config, DisplayTarget, Event, Result,
    TriageError, TriageSession, TriageView,
};
use std::io::Write;
use std::path::PathBuf;

const USAGE: &str = "usage: pictriage <directory> [--config <file>]";

fn main() {
    if let Err(err) = run() {
        eprintln!("pictriage: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let (root, config_path) = parse_args()?;

    let config = match config_path {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    observability::init_tracing(&config);

    let mut session = initialize(&root, &config)?;

    enable_raw_mode()?;
    let outcome = event_loop(&mut session);
    disable_raw_mode()?;
    outcome
}

fn parse_args() -> Result<(PathBuf, Option<PathBuf>)> {
    let mut root = None;
    let mut config_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| TriageError::Config("--config requires a path".to_string()))?;
                config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            path if root.is_none() => root = Some(PathBuf::from(path)),
            other => {
                return Err(TriageError::Config(format!(
                    "unexpected argument {other:?}\n{USAGE}"
                )));
            }
        }
    }

    let root = root.ok_or_else(|| TriageError::Config(USAGE.to_string()))?;
    Ok((root, config_path))
}

/// Reads keys, dispatches events, renders, and executes actions until quit.
fn event_loop(session: &mut TriageSession) -> Result<()> {
    render(&session.compute_view())?;

    loop {
        let TermEvent::Key(key) = crossterm::event::read()? else {
            continue;
        };
        let Some(event) = map_key(&key) else {
            continue;
        };

        let (needs_render, actions) = handle_event(session, &event);
        if needs_render {
            render(&session.compute_view())?;
        }
        for action in actions {
            match action {
                Action::Notify(message) => notify(&message)?,
                Action::Quit => return Ok(()),
            }
        }
    }
}

/// Translates a terminal key event into a triage event, if it maps to one.
fn map_key(key: &KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => Some(Event::Assign(c)),
        KeyCode::Char('u') => Some(Event::Undo),
        KeyCode::Char('q') | KeyCode::Esc => Some(Event::Quit),
        _ => None,
    }
}

/// Prints the current display target and progress counters.
///
/// Raw mode is active, so lines end with an explicit `\r\n`.
fn render(view: &TriageView) -> Result<()> {
    let mut out = std::io::stdout();
    match &view.target {
        DisplayTarget::Image(path) => {
            write!(
                out,
                "[{}/{}] {}  (0-9 assign, u undo, q quit)\r\n",
                view.reviewed + 1,
                view.reviewed + view.remaining,
                path.display()
            )?;
        }
        DisplayTarget::Exhausted => {
            write!(out, "No more images to organize!  (u undo, q quit)\r\n")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn notify(message: &str) -> Result<()> {
    let mut out = std::io::stdout();
    write!(out, "{message}\r\n")?;
    out.flush()?;
    Ok(())
}
