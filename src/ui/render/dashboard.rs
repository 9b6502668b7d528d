use super::Frame;
use crate::api::IssueStatus;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

pub const BANNER: &str = "
  _                           _          _
 (_) ___  ___  _   _   ___   | |_  _   _(_)
 | |/ __|/ __|| | | | / _ \\  | __|| | | | |
 | |\\__ \\\\__ \\| |_| ||  __/  | |_ | |_| | |
 |_||___/|___/ \\__,_| \\___|   \\__| \\__,_|_|
";

/// Render the dashboard view: banner plus a summary of the loaded issues
/// by status.
///
pub fn dashboard(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Dashboard")
        .border_style(styling::normal_block_border_style(&theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)].as_ref())
        .margin(2)
        .split(size);

    let banner = Text::from(BANNER).patch_style(styling::banner_style(&theme));
    let banner_widget = Paragraph::new(banner);
    frame.render_widget(banner_widget, rows[0]);

    let issues = state.get_issues();
    let open = issues
        .iter()
        .filter(|i| i.status == IssueStatus::Open)
        .count();
    let in_progress = issues
        .iter()
        .filter(|i| i.status == IssueStatus::InProgress)
        .count();
    let closed = issues
        .iter()
        .filter(|i| i.status == IssueStatus::Closed)
        .count();

    let summary = format!(
        "\n Issues: {} total\n\n   ○ Open         {}\n   ◐ In Progress  {}\n   ● Closed       {}\n\n\n Select \"Issues\" in the navigation bar to browse them.",
        issues.len(),
        open,
        in_progress,
        closed,
    );
    let content = Text::from(summary).patch_style(styling::normal_text_style(&theme));
    let content_widget = Paragraph::new(content);
    frame.render_widget(content_widget, rows[1]);
}
