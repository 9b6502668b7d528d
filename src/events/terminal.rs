use crate::state::{Focus, FormField, State, View};
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    if key.kind != KeyEventKind::Release {
                        tx_clone.send(Event::Input(key)).unwrap();
                    }
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    debug!("Processing exit terminal event '{:?}'...", key);
                    return Ok(false);
                }
                if state.is_debug_mode() {
                    Self::handle_debug_key(state, key);
                    return Ok(true);
                }
                let view = state.current_view().clone();
                match view {
                    View::NewIssue => Self::handle_form_key(state, key),
                    _ => return Self::handle_browse_key(state, key),
                }
            }
            Event::Tick => {
                state.advance_spinner_index();
                state.tick_notices();
            }
        }
        Ok(true)
    }

    /// Handle a key press while the debug log overlay is shown.
    ///
    fn handle_debug_key(state: &mut State, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('d') | KeyCode::Char('q')
        ) {
            debug!("Processing exit debug mode event '{:?}'...", key);
            state.exit_debug_mode();
        }
    }

    /// Handle a key press in the create-issue form. Character input is
    /// routed to the focused field; everything that edits a field clears
    /// that field's stale validation error as a side effect.
    ///
    fn handle_form_key(state: &mut State, key: KeyEvent) {
        match key {
            KeyEvent {
                code: KeyCode::Esc, ..
            } => {
                // Cancel skips validation entirely. An in-flight request
                // is abandoned, not cancelled.
                state.cancel_new_issue();
            }
            KeyEvent {
                code: KeyCode::Char('s'),
                modifiers,
                ..
            } if modifiers.contains(KeyModifiers::CONTROL) => {
                debug!("Processing submit intent event '{:?}'...", key);
                state.submit_intent();
            }
            KeyEvent {
                code: KeyCode::Tab, ..
            }
            | KeyEvent {
                code: KeyCode::BackTab,
                ..
            } => {
                state.cycle_form_focus();
            }
            _ => match state.form_focus() {
                FormField::Title => Self::handle_title_key(state, key),
                FormField::Description => {
                    state.edit_description(key);
                }
            },
        }
    }

    /// Handle a key press while the title field is focused.
    ///
    fn handle_title_key(state: &mut State, key: KeyEvent) {
        match key {
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers,
                ..
            } if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT => {
                state.add_form_title_char(c);
            }
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => {
                state.remove_form_title_char();
            }
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => {
                // The title is a single line; Enter moves on to the
                // description editor.
                state.cycle_form_focus();
            }
            _ => {}
        }
    }

    /// Handle a key press in the dashboard and issues views. Returns false
    /// if exit was requested.
    ///
    fn handle_browse_key(state: &mut State, key: KeyEvent) -> Result<bool> {
        match key {
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            } => {
                debug!("Processing exit terminal event '{:?}'...", key);
                return Ok(false);
            }
            KeyEvent {
                code: KeyCode::Tab, ..
            } => {
                let focus = *state.current_focus();
                match focus {
                    Focus::NavBar => state.focus_view(),
                    Focus::View => state.focus_nav(),
                };
            }
            KeyEvent {
                code: KeyCode::Esc, ..
            } => {
                state.focus_nav();
            }
            KeyEvent {
                code: KeyCode::Char('h'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Left,
                ..
            } => {
                if *state.current_focus() == Focus::NavBar {
                    state.previous_nav_link();
                }
            }
            KeyEvent {
                code: KeyCode::Char('l'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Right,
                ..
            } => {
                if *state.current_focus() == Focus::NavBar {
                    state.next_nav_link();
                }
            }
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => {
                if *state.current_focus() == Focus::NavBar {
                    debug!("Processing select navigation link event '{:?}'...", key);
                    state.activate_nav_link();
                }
            }
            KeyEvent {
                code: KeyCode::Char('j'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Down,
                ..
            } => {
                if *state.current_view() == View::Issues {
                    state.next_issue_index();
                }
            }
            KeyEvent {
                code: KeyCode::Char('k'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Up, ..
            } => {
                if *state.current_view() == View::Issues {
                    state.previous_issue_index();
                }
            }
            KeyEvent {
                code: KeyCode::Char('n'),
                ..
            } => {
                if *state.current_view() == View::Issues {
                    debug!("Processing enter create issue view event '{:?}'...", key);
                    state.enter_new_issue_view();
                }
            }
            KeyEvent {
                code: KeyCode::Char('r'),
                ..
            } => {
                if *state.current_view() == View::Issues {
                    debug!("Processing refresh issues event '{:?}'...", key);
                    state.refresh_issues();
                }
            }
            KeyEvent {
                code: KeyCode::Char('y'),
                ..
            } => {
                if *state.current_view() == View::Issues {
                    Self::copy_selected_issue_title(state);
                }
            }
            KeyEvent {
                code: KeyCode::Char('d'),
                ..
            } => {
                debug!("Processing enter debug mode event '{:?}'...", key);
                state.enter_debug_mode();
            }
            _ => {}
        }
        Ok(true)
    }

    /// Copy the selected issue's title to the system clipboard.
    ///
    fn copy_selected_issue_title(state: &State) {
        let title = match state.selected_issue() {
            Some(issue) => issue.title.clone(),
            None => return,
        };
        match ClipboardContext::new() {
            Ok(mut context) => {
                if let Err(e) = context.set_contents(title) {
                    warn!("Failed to copy issue title to clipboard: {}", e);
                }
            }
            Err(e) => warn!("Failed to access clipboard: {}", e),
        }
    }
}
