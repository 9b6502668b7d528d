use crate::api::Tracker;
use crate::state::{NoticeKind, State};
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    ListIssues,
    CreateIssue { title: String, description: String },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    tracker: &'a Tracker,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, tracker: &'a Tracker) -> Self {
        Handler { state, tracker }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::ListIssues => self.list_issues().await?,
            Event::CreateIssue { title, description } => {
                self.create_issue(title, description).await?
            }
        }
        Ok(())
    }

    /// Update state with the issues known to the tracker. A fetch failure
    /// is surfaced as a notice; the previously loaded list is kept.
    ///
    async fn list_issues(&mut self) -> Result<()> {
        info!("Fetching issues from tracker...");
        match self.tracker.issues().await {
            Ok(issues) => {
                info!("Received {} issues.", issues.len());
                let mut state = self.state.lock().await;
                state.set_issues(issues);
            }
            Err(e) => {
                error!("Failed to fetch issues: {}", e);
                let mut state = self.state.lock().await;
                state.set_issues_loading(false);
                state.push_notice(NoticeKind::Error, "Failed to load issues");
            }
        }
        Ok(())
    }

    /// Submit a new issue and record the outcome on the form session. The
    /// completion always runs after the response is known, so the
    /// success/failure notice and any navigation follow it strictly.
    ///
    async fn create_issue(&mut self, title: String, description: String) -> Result<()> {
        info!("Creating new issue '{}'...", title);
        match self.tracker.create_issue(&title, &description).await {
            Ok(()) => {
                info!("Issue '{}' created successfully.", title);
                let mut state = self.state.lock().await;
                state.complete_submission(Ok(()));
            }
            Err(e) => {
                error!("Failed to create issue '{}': {}", title, e);
                let message = e.user_message();
                let mut state = self.state.lock().await;
                state.complete_submission(Err(message));
            }
        }
        Ok(())
    }
}
