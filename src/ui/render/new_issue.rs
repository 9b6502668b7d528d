use super::Frame;
use crate::state::{FormField, State, SubmissionStatus};
use crate::ui::theme::Theme;
use crate::ui::widgets::{spinner, styling};
use crate::utils::markdown::{self, LineKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the create-issue form: title field, markdown description editor
/// with a live preview, per-field validation errors, and the submit row.
///
pub fn new_issue(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.theme().clone();

    // Mount the description editor lazily. Until the terminal is
    // confirmed interactive a placeholder is shown in its place.
    state.ensure_description_editor();

    let form_focus = state.form_focus();
    let errors = state.field_errors().clone();
    let submission = state.submission().clone();
    let title_value = state.form_title().to_string();
    let description = state.form_description();
    let spinner_frame = spinner::frame(state.spinner_index());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Length(3), // Title field
            Constraint::Length(1), // Title error
            Constraint::Min(5),    // Description editor and preview
            Constraint::Length(1), // Description error
            Constraint::Length(3), // Submit row
        ])
        .split(size);

    let heading_block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));
    let heading = Paragraph::new("Create New Issue")
        .style(styling::normal_text_style(&theme).add_modifier(Modifier::BOLD))
        .block(heading_block)
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    render_title_field(
        frame,
        chunks[1],
        &title_value,
        form_focus == FormField::Title,
        errors.get(FormField::Title).is_some(),
        &theme,
    );
    render_field_error(frame, chunks[2], errors.get(FormField::Title), &theme);

    // The preview pane only fits comfortably on wider terminals.
    let show_preview = state.terminal_size().width >= 100;
    let editor_area = if show_preview {
        let editor_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[3]);
        render_preview(frame, editor_chunks[1], &description, &theme);
        editor_chunks[0]
    } else {
        chunks[3]
    };
    render_description_editor(
        frame,
        editor_area,
        state,
        form_focus == FormField::Description,
        errors.get(FormField::Description).is_some(),
        &theme,
    );
    render_field_error(frame, chunks[4], errors.get(FormField::Description), &theme);

    render_submit_row(frame, chunks[5], &submission, spinner_frame, &theme);
}

/// Render the single-line title input.
///
fn render_title_field(
    frame: &mut Frame,
    area: Rect,
    value: &str,
    focused: bool,
    has_error: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} *", FormField::Title.label()))
        .border_style(field_border_style(focused, has_error, theme));

    let paragraph = if value.is_empty() && !focused {
        Paragraph::new("Enter issue title").style(styling::muted_text_style(theme))
    } else {
        let mut spans = vec![Span::styled(
            value.to_string(),
            styling::normal_text_style(theme),
        )];
        if focused {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(theme.primary.to_color()),
            ));
        }
        Paragraph::new(Line::from(spans))
    };
    frame.render_widget(paragraph.block(block), area);
}

/// Render the markdown description editor, or its placeholder while the
/// widget is not yet mounted.
///
fn render_description_editor(
    frame: &mut Frame,
    area: Rect,
    state: &mut State,
    focused: bool,
    has_error: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} *", FormField::Description.label()))
        .border_style(field_border_style(focused, has_error, theme));

    match state.description_editor_mut() {
        Some(editor) => {
            editor.set_block(block);
            frame.render_widget(editor.widget(), area);
        }
        None => {
            let placeholder = Paragraph::new("Loading editor...")
                .style(styling::muted_text_style(theme))
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, area);
        }
    }
}

/// Render the styled preview of the markdown description.
///
fn render_preview(frame: &mut Frame, area: Rect, description: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Preview")
        .border_style(styling::normal_block_border_style(theme));

    let lines: Vec<Line> = description
        .lines()
        .map(|line| Line::styled(line.to_string(), preview_line_style(line, theme)))
        .collect();
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Return the style for a preview line based on its markdown kind.
///
fn preview_line_style(line: &str, theme: &Theme) -> Style {
    match markdown::classify_line(line) {
        LineKind::Heading(_) => Style::default()
            .fg(theme.primary.to_color())
            .add_modifier(Modifier::BOLD),
        LineKind::Bullet | LineKind::Ordered => Style::default().fg(theme.secondary.to_color()),
        LineKind::Quote => styling::muted_text_style(theme).add_modifier(Modifier::ITALIC),
        LineKind::CodeFence => Style::default().fg(theme.info.to_color()),
        LineKind::Text => styling::normal_text_style(theme),
    }
}

/// Render a one-line field error below its input, mirroring the error
/// text under each form field.
///
fn render_field_error(frame: &mut Frame, area: Rect, message: Option<&str>, theme: &Theme) {
    if let Some(message) = message {
        let paragraph = Paragraph::new(format!(" ✗ {}", message))
            .style(styling::field_error_style(theme));
        frame.render_widget(paragraph, area);
    }
}

/// Render the submit row: hints while idle, a spinner while the request
/// is in flight, and the failure message after a failed attempt.
///
fn render_submit_row(
    frame: &mut Frame,
    area: Rect,
    submission: &SubmissionStatus,
    spinner_frame: &str,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let line = match submission {
        SubmissionStatus::InFlight => Line::from(vec![
            Span::styled(
                format!("{} Creating Issue...", spinner_frame),
                styling::secondary_text_style(theme),
            ),
            Span::styled(
                "  (edits are kept but not sent with this request)",
                styling::muted_text_style(theme),
            ),
        ]),
        SubmissionStatus::Failed(message) => Line::from(vec![
            Span::styled(format!("✗ {}", message), styling::field_error_style(theme)),
            Span::styled(
                "  Ctrl+S: retry  Esc: cancel",
                styling::muted_text_style(theme),
            ),
        ]),
        _ => Line::from(vec![
            Span::styled("Ctrl+S: Create Issue", styling::secondary_text_style(theme)),
            Span::styled(
                "  Tab: switch field  Esc: cancel",
                styling::muted_text_style(theme),
            ),
        ]),
    };
    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Return the border style for a form field: validation errors win over
/// focus, focus wins over the resting style.
///
fn field_border_style(focused: bool, has_error: bool, theme: &Theme) -> Style {
    if has_error {
        styling::error_block_border_style(theme)
    } else if focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    }
}
