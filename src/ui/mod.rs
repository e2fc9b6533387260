//! Terminal user interface.
//!
//! The only module that knows about ratatui and crossterm: it owns the raw
//! terminal, translates key events into calculator actions, and redraws the
//! screen after every event. Strictly single-threaded; each action is
//! handled to completion before the next key is read.

pub mod keymap;
mod screen;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use crate::calculator::{Action, InputController, copy_to_clipboard};
use crate::config::Config;
use keymap::KeyCommand;

/// Run the interactive event loop until the user quits.
///
/// The terminal is restored on every exit path, including errors.
pub fn run(controller: &mut InputController, config: &Config) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, controller, config);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    controller: &mut InputController,
    config: &Config,
) -> Result<()> {
    // Transient one-line feedback, cleared by the next calculator action.
    let mut status = String::new();

    loop {
        let display = controller.display();
        terminal.draw(|frame| screen::draw(frame, &display, &status))?;

        let Event::Key(key) = event::read()? else {
            // Resize and similar events just trigger a redraw.
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match keymap::map_key(key) {
            Some(KeyCommand::Input(action)) => {
                status.clear();
                let accepting = matches!(action, Action::Equals) && controller.state().is_ready();
                controller.apply(action);
                if accepting && config.copy_on_equals {
                    copy_result(controller, &mut status);
                }
            }
            Some(KeyCommand::Copy) => copy_result(controller, &mut status),
            Some(KeyCommand::Quit) => {
                info!("quit requested");
                return Ok(());
            }
            None => {}
        }
    }
}

fn copy_result(controller: &InputController, status: &mut String) {
    let Some(text) = controller.clipboard_text() else {
        return;
    };
    match copy_to_clipboard(&text) {
        Ok(()) => *status = format!("Copied {text}"),
        Err(err) => {
            warn!(%err, "clipboard copy failed");
            *status = "Clipboard unavailable".to_string();
        }
    }
}
