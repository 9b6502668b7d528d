use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear},
};
use tui_logger::TuiLoggerWidget;

/// Render the debug log overlay over the current view.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let area = centered_rect(80, 70, size);

    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Logs (Esc to close)")
                .border_style(styling::active_block_border_style(&theme)),
        )
        .style_error(Style::default().fg(theme.error.to_color()))
        .style_warn(Style::default().fg(theme.warning.to_color()))
        .style_info(Style::default().fg(theme.info.to_color()))
        .style_debug(styling::secondary_text_style(&theme))
        .style_trace(styling::muted_text_style(&theme));

    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

/// Return a rectangle centered in the given area with the given
/// percentage dimensions.
///
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
