use super::form::{self, FieldErrors, FormField, IssueForm, SubmissionStatus};
use super::navigation::{nav_links, Focus, View};
use super::notice::{Notice, NoticeKind};
use crate::api::Issue;
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::ListState;
use std::collections::VecDeque;
use tui_textarea::TextArea;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    terminal_size: Rect,
    spinner_index: usize,
    interactive: bool,
    current_focus: Focus,
    nav_index: usize,
    view_stack: Vec<View>,
    issues: Vec<Issue>,
    issues_loading: bool,
    issues_list_state: ListState,
    debug_mode: bool,
    notices: VecDeque<Notice>,
    theme: Theme,
    // Form session: exclusively owned by the active create-issue view and
    // reset whenever that view is entered or left.
    form_title: String,
    description_editor: Option<TextArea<'static>>,
    form_focus: FormField,
    field_errors: FieldErrors,
    submission: SubmissionStatus,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            terminal_size: Rect::default(),
            spinner_index: 0,
            interactive: false,
            current_focus: Focus::NavBar,
            nav_index: 0,
            view_stack: vec![View::Dashboard],
            issues: vec![],
            issues_loading: false,
            issues_list_state: ListState::default(),
            debug_mode: false,
            notices: VecDeque::new(),
            theme: Theme::default(),
            form_title: String::new(),
            description_editor: None,
            form_focus: FormField::Title,
            field_errors: FieldErrors::default(),
            submission: SubmissionStatus::Idle,
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender) -> Self {
        State {
            net_sender: Some(net_sender),
            ..State::default()
        }
    }

    /// Send a network event for asynchronous processing.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        if let Some(sender) = &self.net_sender {
            if let Err(e) = sender.send(event) {
                error!("Failed to dispatch network event: {}", e);
            }
        }
    }

    /// Returns the size of the terminal.
    ///
    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Updates the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    /// Returns the current spinner frame index.
    ///
    pub fn spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Advance the spinner to its next frame.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self
    }

    /// Returns true once the terminal is confirmed interactive.
    ///
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Mark the terminal as interactive. Set once at startup after the
    /// alternate screen and raw mode have been entered.
    ///
    pub fn set_interactive(&mut self, interactive: bool) -> &mut Self {
        self.interactive = interactive;
        self
    }

    /// Returns the active theme.
    ///
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Set the active theme.
    ///
    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = theme;
        self
    }

    /// Returns the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    /// Focus the navigation bar.
    ///
    pub fn focus_nav(&mut self) -> &mut Self {
        self.current_focus = Focus::NavBar;
        self
    }

    /// Focus the active view.
    ///
    pub fn focus_view(&mut self) -> &mut Self {
        self.current_focus = Focus::View;
        self
    }

    /// Returns the index of the highlighted navigation link.
    ///
    pub fn nav_index(&self) -> usize {
        self.nav_index
    }

    /// Highlight the next navigation link.
    ///
    pub fn next_nav_link(&mut self) -> &mut Self {
        self.nav_index = (self.nav_index + 1) % nav_links().len();
        self
    }

    /// Highlight the previous navigation link.
    ///
    pub fn previous_nav_link(&mut self) -> &mut Self {
        let count = nav_links().len();
        self.nav_index = (self.nav_index + count - 1) % count;
        self
    }

    /// Navigate to the view behind the highlighted navigation link.
    ///
    pub fn activate_nav_link(&mut self) -> &mut Self {
        let link = nav_links()[self.nav_index];
        debug!("Activating navigation link '{}'...", link.label());
        self.navigate_to(link.view());
        self
    }

    /// Replace the view stack with the given top-level view, refreshing
    /// its data where needed.
    ///
    pub fn navigate_to(&mut self, view: View) -> &mut Self {
        if view == View::Issues {
            self.refresh_issues();
        }
        if let Some(index) = nav_links().iter().position(|l| l.view() == view) {
            self.nav_index = index;
        }
        self.view_stack = vec![view];
        self.focus_view();
        self
    }

    /// Returns the current view.
    ///
    pub fn current_view(&self) -> &View {
        self.view_stack.last().unwrap_or(&View::Dashboard)
    }

    /// Push a view onto the view stack.
    ///
    pub fn push_view(&mut self, view: View) -> &mut Self {
        self.view_stack.push(view);
        self
    }

    /// Returns the loaded issues.
    ///
    pub fn get_issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Update state with issues fetched from the tracker.
    ///
    pub fn set_issues(&mut self, issues: Vec<Issue>) -> &mut Self {
        self.issues_loading = false;
        if self.issues_list_state.selected().is_none() && !issues.is_empty() {
            self.issues_list_state.select(Some(0));
        }
        if let Some(selected) = self.issues_list_state.selected() {
            if selected >= issues.len() {
                self.issues_list_state
                    .select(if issues.is_empty() { None } else { Some(0) });
            }
        }
        self.issues = issues;
        self
    }

    /// Returns true while an issue list request is outstanding.
    ///
    pub fn is_issues_loading(&self) -> bool {
        self.issues_loading
    }

    /// Mark the issue list as loading.
    ///
    pub fn set_issues_loading(&mut self, loading: bool) -> &mut Self {
        self.issues_loading = loading;
        self
    }

    /// Request a fresh issue list from the tracker.
    ///
    pub fn refresh_issues(&mut self) -> &mut Self {
        self.issues_loading = true;
        self.dispatch(NetworkEvent::ListIssues);
        self
    }

    /// Returns the list widget state for the issues view.
    ///
    pub fn issues_list_state(&mut self) -> &mut ListState {
        &mut self.issues_list_state
    }

    /// Select the next issue in the list.
    ///
    pub fn next_issue_index(&mut self) -> &mut Self {
        if !self.issues.is_empty() {
            let next = match self.issues_list_state.selected() {
                Some(index) => (index + 1) % self.issues.len(),
                None => 0,
            };
            self.issues_list_state.select(Some(next));
        }
        self
    }

    /// Select the previous issue in the list.
    ///
    pub fn previous_issue_index(&mut self) -> &mut Self {
        if !self.issues.is_empty() {
            let previous = match self.issues_list_state.selected() {
                Some(0) | None => self.issues.len() - 1,
                Some(index) => index - 1,
            };
            self.issues_list_state.select(Some(previous));
        }
        self
    }

    /// Returns the currently selected issue, if any.
    ///
    pub fn selected_issue(&self) -> Option<&Issue> {
        self.issues_list_state
            .selected()
            .and_then(|index| self.issues.get(index))
    }

    /// Returns true while the debug log overlay is shown.
    ///
    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Show the debug log overlay.
    ///
    pub fn enter_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = true;
        self
    }

    /// Hide the debug log overlay.
    ///
    pub fn exit_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = false;
        self
    }

    /// Queue a transient notice for display in the footer.
    ///
    pub fn push_notice(&mut self, kind: NoticeKind, text: impl Into<String>) -> &mut Self {
        self.notices.push_back(Notice::new(kind, text));
        self
    }

    /// Returns the notice currently eligible for display.
    ///
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Age queued notices by one terminal tick, dropping expired ones.
    ///
    pub fn tick_notices(&mut self) -> &mut Self {
        let expired = match self.notices.front_mut() {
            Some(notice) => {
                notice.ticks_remaining = notice.ticks_remaining.saturating_sub(1);
                notice.ticks_remaining == 0
            }
            None => false,
        };
        if expired {
            self.notices.pop_front();
        }
        self
    }

    /// Enter the create-issue view with a fresh form session.
    ///
    pub fn enter_new_issue_view(&mut self) -> &mut Self {
        self.reset_form();
        self.push_view(View::NewIssue);
        self.focus_view();
        self
    }

    /// Leave the create-issue view without validating, navigating straight
    /// to the issues view. An in-flight request is abandoned, not
    /// cancelled; its completion will no longer touch the form session.
    ///
    pub fn cancel_new_issue(&mut self) -> &mut Self {
        debug!("Cancelling issue form...");
        self.navigate_to(View::Issues);
        self.reset_form();
        self
    }

    /// Discard the form session: values, errors, editor, and submission
    /// status.
    ///
    pub fn reset_form(&mut self) -> &mut Self {
        self.form_title.clear();
        self.description_editor = None;
        self.form_focus = FormField::Title;
        self.field_errors = FieldErrors::default();
        self.submission = SubmissionStatus::Idle;
        self
    }

    /// Returns the form title text.
    ///
    pub fn form_title(&self) -> &str {
        &self.form_title
    }

    /// Add a character to the form title, clearing any stale title error.
    ///
    pub fn add_form_title_char(&mut self, c: char) -> &mut Self {
        self.form_title.push(c);
        self.field_errors.clear(FormField::Title);
        self
    }

    /// Remove the last character from the form title, clearing any stale
    /// title error.
    ///
    pub fn remove_form_title_char(&mut self) -> &mut Self {
        self.form_title.pop();
        self.field_errors.clear(FormField::Title);
        self
    }

    /// Mount the description editor if the terminal is interactive and it
    /// is not already mounted. Until this succeeds the view shows a
    /// placeholder instead of the editor widget.
    ///
    pub fn ensure_description_editor(&mut self) -> &mut Self {
        if self.interactive && self.description_editor.is_none() {
            debug!("Mounting markdown description editor...");
            let mut editor = TextArea::default();
            editor.set_placeholder_text("Describe the issue in detail...");
            editor.set_cursor_line_style(Style::default());
            self.description_editor = Some(editor);
        }
        self
    }

    /// Returns the mounted description editor, if any.
    ///
    pub fn description_editor_mut(&mut self) -> Option<&mut TextArea<'static>> {
        self.description_editor.as_mut()
    }

    /// Route an input event into the description editor. Edits that change
    /// the text clear any stale description error.
    ///
    pub fn edit_description(&mut self, input: impl Into<tui_textarea::Input>) -> &mut Self {
        if let Some(editor) = self.description_editor.as_mut() {
            if editor.input(input) {
                self.field_errors.clear(FormField::Description);
            }
        }
        self
    }

    /// Returns the description text currently in the editor.
    ///
    pub fn form_description(&self) -> String {
        match &self.description_editor {
            Some(editor) => editor.lines().join("\n"),
            None => String::new(),
        }
    }

    /// Returns a snapshot of the current form values.
    ///
    pub fn form(&self) -> IssueForm {
        IssueForm {
            title: self.form_title.clone(),
            description: self.form_description(),
        }
    }

    /// Returns the focused form field.
    ///
    pub fn form_focus(&self) -> FormField {
        self.form_focus
    }

    /// Move focus to the other form field.
    ///
    pub fn cycle_form_focus(&mut self) -> &mut Self {
        self.form_focus = match self.form_focus {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Title,
        };
        self
    }

    /// Returns the validation errors currently on display.
    ///
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Returns the submission status of the form session.
    ///
    pub fn submission(&self) -> &SubmissionStatus {
        &self.submission
    }

    /// Handle a submit intent: validate the current form and either
    /// surface the errors or dispatch exactly one create request. A
    /// submit while a request is outstanding is a no-op.
    ///
    pub fn submit_intent(&mut self) -> &mut Self {
        if self.submission.is_in_flight() {
            debug!("Ignoring submit intent while a request is in flight.");
            return self;
        }

        let form = self.form();
        let errors = form::validate(&form);
        if !errors.is_empty() {
            info!("Issue form failed validation with {} error(s).", errors.len());
            self.field_errors = errors;
            self.push_notice(NoticeKind::Error, "Please fix the errors below");
            return self;
        }

        self.field_errors = FieldErrors::default();
        self.submission = SubmissionStatus::InFlight;
        self.dispatch(NetworkEvent::CreateIssue {
            title: form.title,
            description: form.description,
        });
        self
    }

    /// Record the outcome of a create request. On success the form session
    /// ends: notice, navigation to the issues view, and a list refresh. On
    /// failure the form stays editable with its values intact so the user
    /// can retry.
    ///
    pub fn complete_submission(&mut self, result: Result<(), String>) -> &mut Self {
        match result {
            Ok(()) => {
                self.submission = SubmissionStatus::Succeeded;
                self.push_notice(NoticeKind::Success, "Issue created successfully!");
                self.navigate_to(View::Issues);
                self.reset_form();
            }
            Err(message) => {
                warn!("Issue submission failed: {}", message);
                self.push_notice(NoticeKind::Error, message.clone());
                self.submission = SubmissionStatus::Failed(message);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::IssueStatus;
    use std::sync::mpsc;

    fn state_with_channel() -> (State, mpsc::Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel();
        (State::new(tx), rx)
    }

    fn fill_valid_form(state: &mut State) {
        state.set_interactive(true);
        state.ensure_description_editor();
        for c in "Bug".chars() {
            state.add_form_title_char(c);
        }
        state
            .description_editor_mut()
            .unwrap()
            .insert_str("Something is broken");
    }

    #[test]
    fn test_valid_submit_dispatches_exactly_one_create_event() {
        let (mut state, rx) = state_with_channel();
        fill_valid_form(&mut state);

        state.submit_intent();

        assert!(state.submission().is_in_flight());
        assert!(state.field_errors().is_empty());
        match rx.try_recv() {
            Ok(NetworkEvent::CreateIssue { title, description }) => {
                assert_eq!(title, "Bug");
                assert_eq!(description, "Something is broken");
            }
            other => panic!("Expected a create event, got {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_invalid_submit_stays_editable_with_zero_dispatches() {
        let (mut state, rx) = state_with_channel();
        state.set_interactive(true);
        state.ensure_description_editor();

        state.submit_intent();

        assert_eq!(*state.submission(), SubmissionStatus::Idle);
        assert_eq!(state.field_errors().len(), 2);
        assert!(rx.try_recv().is_err());
        let notice = state.current_notice().expect("Expected an error notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Please fix the errors below");
    }

    #[test]
    fn test_second_submit_while_in_flight_is_a_no_op() {
        let (mut state, rx) = state_with_channel();
        fill_valid_form(&mut state);

        state.submit_intent();
        state.submit_intent();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_failed_submission_retains_form_and_clears_in_flight() {
        let (mut state, _rx) = state_with_channel();
        state.enter_new_issue_view();
        fill_valid_form(&mut state);
        state.submit_intent();

        state.complete_submission(Err("DB down".to_string()));

        assert!(!state.submission().is_in_flight());
        assert_eq!(
            *state.submission(),
            SubmissionStatus::Failed("DB down".to_string())
        );
        assert_eq!(state.form().title, "Bug");
        assert_eq!(state.form().description, "Something is broken");
        assert_eq!(*state.current_view(), View::NewIssue);
        let notice = state.current_notice().expect("Expected an error notice");
        assert_eq!(notice.text, "DB down");
    }

    #[test]
    fn test_successful_submission_navigates_and_resets_the_session() {
        let (mut state, rx) = state_with_channel();
        state.navigate_to(View::Issues);
        rx.try_recv().ok(); // Drop the refresh triggered by navigation.
        state.enter_new_issue_view();
        fill_valid_form(&mut state);
        state.submit_intent();
        rx.try_recv().ok(); // Drop the create event.

        state.complete_submission(Ok(()));

        assert_eq!(*state.current_view(), View::Issues);
        assert_eq!(state.form().title, "");
        assert_eq!(*state.submission(), SubmissionStatus::Idle);
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::ListIssues)));
        let notice = state.current_notice().expect("Expected a success notice");
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_editing_title_clears_only_its_own_error() {
        let (mut state, _rx) = state_with_channel();
        state.set_interactive(true);
        state.ensure_description_editor();
        state.submit_intent();
        assert_eq!(state.field_errors().len(), 2);

        state.add_form_title_char('B');

        assert!(state.field_errors().get(FormField::Title).is_none());
        assert!(state.field_errors().get(FormField::Description).is_some());
    }

    #[test]
    fn test_edits_while_in_flight_do_not_retrigger_validation() {
        let (mut state, _rx) = state_with_channel();
        fill_valid_form(&mut state);
        state.submit_intent();

        state.remove_form_title_char();
        state.remove_form_title_char();

        // Still in flight and no errors surfaced until the next submit.
        assert!(state.submission().is_in_flight());
        assert!(state.field_errors().is_empty());
    }

    #[test]
    fn test_cursor_movement_does_not_clear_description_error() {
        let (mut state, _rx) = state_with_channel();
        state.set_interactive(true);
        state.ensure_description_editor();
        state.submit_intent();
        assert!(state.field_errors().get(FormField::Description).is_some());

        state.edit_description(tui_textarea::Input {
            key: tui_textarea::Key::Left,
            ..Default::default()
        });
        assert!(state.field_errors().get(FormField::Description).is_some());

        state.edit_description(tui_textarea::Input {
            key: tui_textarea::Key::Char('x'),
            ..Default::default()
        });
        assert!(state.field_errors().get(FormField::Description).is_none());
    }

    #[test]
    fn test_cancel_navigates_to_issues_without_validation() {
        let (mut state, rx) = state_with_channel();
        state.enter_new_issue_view();
        state.add_form_title_char('B');

        state.cancel_new_issue();

        assert_eq!(*state.current_view(), View::Issues);
        assert!(state.field_errors().is_empty());
        assert_eq!(state.form().title, "");
        // The only dispatch is the issues refresh, never a create.
        assert!(matches!(rx.try_recv(), Ok(NetworkEvent::ListIssues)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_editor_is_not_mounted_before_terminal_is_interactive() {
        let (mut state, _rx) = state_with_channel();
        assert!(!state.is_interactive());
        state.ensure_description_editor();
        assert!(state.description_editor_mut().is_none());

        state.set_interactive(true);
        state.ensure_description_editor();
        assert!(state.description_editor_mut().is_some());
    }

    #[test]
    fn test_notices_expire_after_their_lifetime() {
        let (mut state, _rx) = state_with_channel();
        state.push_notice(NoticeKind::Info, "Loading issues...");
        for _ in 0..super::super::notice::NOTICE_TICKS {
            state.tick_notices();
        }
        assert!(state.current_notice().is_none());
    }

    #[test]
    fn test_nav_link_cycling_wraps() {
        let (mut state, _rx) = state_with_channel();
        assert_eq!(state.nav_index(), 0);
        state.next_nav_link();
        assert_eq!(state.nav_index(), 1);
        state.next_nav_link();
        assert_eq!(state.nav_index(), 0);
        state.previous_nav_link();
        assert_eq!(state.nav_index(), 1);
    }

    #[test]
    fn test_issue_selection_wraps() {
        let (mut state, _rx) = state_with_channel();
        state.set_issues(vec![
            Issue {
                id: 1,
                title: "First".to_string(),
                description: "One issue".to_string(),
                status: IssueStatus::Open,
                created_at: None,
            },
            Issue {
                id: 2,
                title: "Second".to_string(),
                description: "Another issue".to_string(),
                status: IssueStatus::Closed,
                created_at: None,
            },
        ]);
        assert_eq!(state.selected_issue().unwrap().id, 1);
        state.next_issue_index();
        assert_eq!(state.selected_issue().unwrap().id, 2);
        state.next_issue_index();
        assert_eq!(state.selected_issue().unwrap().id, 1);
        state.previous_issue_index();
        assert_eq!(state.selected_issue().unwrap().id, 2);
    }
}
