//! Terminal front-end for the Ceyland catalog.
//!
//! A thin shim over the library: it parses `key=value` arguments into a
//! [`Config`], then reads one command per line from stdin, turns it into
//! events, feeds them to [`handle_event`] and executes the resulting actions.
//!
//! ```text
//! stdin line → parse_command → Event(s) → handle_event → Actions → stdout
//!                                              ↓
//!                                        render (if needed)
//! ```
//!
//! Type `help` at the prompt for the command list.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use ceyland::input::{parse_command, Command, HELP};
use ceyland::ui::{render, render_notification};
use ceyland::{handle_event, Action, AppState, Config, Event, Theme};

/// Runtime wrapper around the library's `AppState`.
struct Runtime {
    app: AppState,
    theme: Theme,
}

/// What the read loop should do after a line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

impl Runtime {
    fn redraw(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render(&self.app, self.theme))
    }

    fn execute_action(&self, action: &Action, out: &mut impl Write) -> io::Result<Flow> {
        match action {
            Action::Notify(notification) => {
                tracing::debug!(level = ?notification.level, "notify");
                writeln!(out, "{}", render_notification(notification, self.theme))?;
                Ok(Flow::Continue)
            }
            Action::Quit => {
                tracing::debug!("quit requested");
                Ok(Flow::Quit)
            }
        }
    }

    /// Runs one event. Errors are reported to the user, not propagated.
    fn dispatch(&mut self, event: &Event, out: &mut impl Write) -> io::Result<(bool, Flow)> {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    if self.execute_action(action, out)? == Flow::Quit {
                        return Ok((false, Flow::Quit));
                    }
                }
                Ok((should_render, Flow::Continue))
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                writeln!(out, "{e}")?;
                Ok((false, Flow::Continue))
            }
        }
    }

    fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let _span = tracing::debug_span!("handle_line", line = %line).entered();

        let events = match parse_command(line) {
            Ok(Command::Empty) => return Ok(Flow::Continue),
            Ok(Command::Help) => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Ok(Command::Events(events)) => events,
            Err(e) => {
                writeln!(out, "{e} (type 'help' for commands)")?;
                return Ok(Flow::Continue);
            }
        };

        let mut needs_render = false;
        for event in &events {
            let (should_render, flow) = self.dispatch(event, out)?;
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
            needs_render |= should_render;
        }

        if needs_render {
            self.redraw(out)?;
        }
        Ok(Flow::Continue)
    }
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<BTreeMap<String, String>, String> {
    args.map(|arg| {
        arg.split_once('=')
            .map(|(k, v)| (k.trim().to_string(), v.to_string()))
            .ok_or_else(|| format!("expected key=value, got '{arg}'"))
    })
    .collect()
}

fn run(config: &Config) -> io::Result<()> {
    let mut runtime = Runtime {
        app: ceyland::initialize(config),
        theme: Theme::detect(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runtime.redraw(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if runtime.handle_line(&line, &mut out)? == Flow::Quit {
            break;
        }
        out.flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = parse_args(std::env::args().skip(1))
        .map_err(ceyland::CeylandError::Config)
        .and_then(|map| Config::from_map(&map));
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ceyland: {e}");
            return ExitCode::from(2);
        }
    };

    ceyland::observability::init_tracing(&config);
    let _span = tracing::debug_span!("ceyland_main").entered();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ceyland: {e}");
            ExitCode::FAILURE
        }
    }
}
