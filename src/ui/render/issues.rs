use super::Frame;
use crate::api::{Issue, IssueStatus};
use crate::state::{Focus, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::{spinner, styling};
use chrono::DateTime;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the issues list view.
///
pub fn issues(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let focused = *state.current_focus() == Focus::View;

    let border_style = if focused {
        styling::active_block_border_style(&theme)
    } else {
        styling::normal_block_border_style(&theme)
    };
    let title = if state.is_issues_loading() {
        format!("Issues {}", spinner::frame(state.spinner_index()))
    } else {
        format!("Issues ({})", state.get_issues().len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style);

    let issues = state.get_issues().to_vec();
    if issues.is_empty() {
        let message = if state.is_issues_loading() {
            "Loading issues..."
        } else {
            "No issues yet. Press n to create one."
        };
        let paragraph = Paragraph::new(message)
            .style(styling::muted_text_style(&theme))
            .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    let items: Vec<ListItem> = issues
        .iter()
        .map(|issue| ListItem::new(issue_line(issue, &theme)))
        .collect();
    let list = List::new(items)
        .block(block)
        .style(styling::normal_text_style(&theme))
        .highlight_style(styling::current_list_item_style(&theme));
    frame.render_stateful_widget(list, size, state.issues_list_state());
}

/// Build the one-line list entry for an issue.
///
fn issue_line<'a>(issue: &'a Issue, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(status_glyph(issue.status), status_style(issue.status, theme)),
        Span::raw(" "),
        Span::raw(issue.title.as_str()),
        Span::styled(
            format!("  {}", issue.status.label()),
            styling::muted_text_style(theme),
        ),
    ];
    if let Some(date) = format_date(issue.created_at.as_deref()) {
        spans.push(Span::styled(
            format!("  {}", date),
            styling::muted_text_style(theme),
        ));
    }
    Line::from(spans)
}

/// Return the marker glyph for a status.
///
fn status_glyph(status: IssueStatus) -> &'static str {
    match status {
        IssueStatus::Open => "○",
        IssueStatus::InProgress => "◐",
        IssueStatus::Closed => "●",
    }
}

/// Return the marker style for a status.
///
fn status_style(status: IssueStatus, theme: &Theme) -> Style {
    let color = match status {
        IssueStatus::Open => theme.warning.to_color(),
        IssueStatus::InProgress => theme.info.to_color(),
        IssueStatus::Closed => theme.success.to_color(),
    };
    Style::default().fg(color)
}

/// Format an RFC 3339 creation timestamp as a short date.
///
fn format_date(created_at: Option<&str>) -> Option<String> {
    created_at
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|timestamp| timestamp.format("%Y-%m-%d").to_string())
}
