use super::Frame;
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the full application frame: navigation bar, active view,
/// footer, and the debug log overlay when enabled.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation bar
            Constraint::Min(1),    // Active view
            Constraint::Length(2), // Footer
        ])
        .split(size);

    super::navbar::navbar(frame, chunks[0], state);

    let view = state.current_view().clone();
    match view {
        View::Dashboard => super::dashboard::dashboard(frame, chunks[1], state),
        View::Issues => super::issues::issues(frame, chunks[1], state),
        View::NewIssue => super::new_issue::new_issue(frame, chunks[1], state),
    }

    super::footer::footer(frame, chunks[2], state);

    if state.is_debug_mode() {
        super::log::log(frame, size, state);
    }
}
