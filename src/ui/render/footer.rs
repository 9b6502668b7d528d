use super::Frame;
use crate::state::{NoticeKind, State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

/// Render the footer: the current transient notice (if any) above a line
/// of hotkey hints for the active view.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(size);

    if let Some(notice) = state.current_notice() {
        let style = match notice.kind {
            NoticeKind::Success => Style::default().fg(theme.success.to_color()),
            NoticeKind::Error => Style::default().fg(theme.error.to_color()),
            NoticeKind::Info => Style::default().fg(theme.info.to_color()),
        };
        let prefix = match notice.kind {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "✗",
            NoticeKind::Info => "•",
        };
        let paragraph = Paragraph::new(format!(" {} {}", prefix, notice.text)).style(style);
        frame.render_widget(paragraph, chunks[0]);
    }

    let hints = match state.current_view() {
        View::Dashboard => " Tab: switch focus  h l: choose link  Enter: open  d: logs  q: quit",
        View::Issues => {
            " j k: select  n: new issue  r: refresh  y: copy title  Tab: focus nav  d: logs  q: quit"
        }
        View::NewIssue => " Tab: switch field  Ctrl+S: submit  Esc: cancel",
    };
    let paragraph = Paragraph::new(hints).style(styling::muted_text_style(&theme));
    frame.render_widget(paragraph, chunks[1]);
}
