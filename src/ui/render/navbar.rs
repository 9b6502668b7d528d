use super::Frame;
use crate::state::{nav_links, Focus, State, View};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the navigation bar: a bug mark, one link per top-level view,
/// and a spinner while any request is outstanding. The link matching the
/// current view is emphasized; the highlighted link follows the
/// navigation cursor when the bar has focus.
///
pub fn navbar(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();
    let nav_focused = *state.current_focus() == Focus::NavBar;
    let current_view = state.current_view().clone();

    let mut spans = vec![
        Span::styled(" 🐞 ", styling::banner_style(&theme)),
        Span::raw("  "),
    ];
    for (index, link) in nav_links().iter().enumerate() {
        let active = link.view() == current_view
            || (link.view() == View::Issues && current_view == View::NewIssue);
        let mut style = if active {
            styling::normal_text_style(&theme)
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD)
        } else {
            styling::secondary_text_style(&theme)
        };
        if nav_focused && index == state.nav_index() {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(link.label(), style));
        spans.push(Span::raw("  "));
    }

    if state.is_issues_loading() || state.submission().is_in_flight() {
        spans.push(Span::styled(
            spinner::frame(state.spinner_index()),
            styling::secondary_text_style(&theme),
        ));
    }

    let border_style = if nav_focused {
        styling::active_block_border_style(&theme)
    } else {
        styling::normal_block_border_style(&theme)
    };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style);
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, size);
}
