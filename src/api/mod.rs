mod client;
mod error;
mod resource;

pub use error::{ApiError, CREATE_ISSUE_FALLBACK_MESSAGE};
pub use resource::*;

use client::Client;
use log::*;
use serde_json::json;

/// Endpoint path for the issue collection.
///
const ISSUES_PATH: &str = "api/issues";

/// Responsible for asynchronous interaction with the issue tracker
/// backend including transformation of response data into
/// explicitly-defined types.
///
pub struct Tracker {
    client: Client,
}

impl Tracker {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Tracker {
        debug!("Initializing tracker client for base URL {}...", base_url);
        Tracker {
            client: Client::new(base_url),
        }
    }

    /// Returns the issues known to the tracker, newest first as the
    /// backend orders them.
    ///
    pub async fn issues(&self) -> Result<Vec<Issue>, ApiError> {
        debug!("Requesting issue list...");
        let issues: Vec<Issue> = self.client.get(ISSUES_PATH).await?.json().await?;
        debug!("Retrieved {} issues.", issues.len());
        Ok(issues)
    }

    /// Create a new issue with the given title and description. Any 2xx
    /// response counts as success; the body is ignored beyond presence.
    ///
    pub async fn create_issue(&self, title: &str, description: &str) -> Result<(), ApiError> {
        debug!("Creating issue '{}'...", title);
        self.client
            .post_json(
                ISSUES_PATH,
                json!({
                    "title": title,
                    "description": description,
                }),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use httpmock::MockServer;

    #[tokio::test]
    async fn issues_success() -> Result<(), ApiError> {
        let issues: [Issue; 2] = [Faker.fake(), Faker.fake()];

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/issues");
                then.status(200).json_body_obj(&issues.to_vec());
            })
            .await;

        let tracker = Tracker::new(&server.base_url());
        let fetched = tracker.issues().await?;
        assert_eq!(fetched.len(), 2);
        assert_eq!(fetched[0], issues[0]);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn issues_server_error() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/issues");
                then.status(500);
            })
            .await;

        let tracker = Tracker::new(&server.base_url());
        let result = tracker.issues().await;
        assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_issue_success() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/api/issues")
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "title": "Bug",
                        "description": "Something is broken",
                    }));
                then.status(201).json_body(serde_json::json!({
                    "id": 1,
                    "title": "Bug",
                    "description": "Something is broken",
                    "status": "OPEN",
                }));
            })
            .await;

        let tracker = Tracker::new(&server.base_url());
        tracker.create_issue("Bug", "Something is broken").await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn create_issue_failure_surfaces_server_message() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/api/issues");
                then.status(500)
                    .json_body(serde_json::json!({ "error": "DB down" }));
            })
            .await;

        let tracker = Tracker::new(&server.base_url());
        let error = tracker
            .create_issue("Bug", "Something is broken")
            .await
            .expect_err("Expected the create to fail");
        assert_eq!(error.user_message(), "DB down");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_issue_failure_with_unparsable_body_uses_fallback() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/api/issues");
                then.status(502).body("<html>bad gateway</html>");
            })
            .await;

        let tracker = Tracker::new(&server.base_url());
        let error = tracker
            .create_issue("Bug", "Something is broken")
            .await
            .expect_err("Expected the create to fail");
        assert_eq!(error.user_message(), CREATE_ISSUE_FALLBACK_MESSAGE);
        mock.assert_async().await;
    }
}
