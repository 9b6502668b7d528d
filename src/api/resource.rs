use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines the workflow status of an issue.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    Open,
    InProgress,
    Closed,
}

impl IssueStatus {
    /// Return the display label for the status.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Closed => "Closed",
        }
    }
}

/// Defines issue data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default = "default_status")]
    pub status: IssueStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

fn default_status() -> IssueStatus {
    IssueStatus::Open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_status_labels() {
        assert_eq!(IssueStatus::Open.label(), "Open");
        assert_eq!(IssueStatus::InProgress.label(), "In Progress");
        assert_eq!(IssueStatus::Closed.label(), "Closed");
    }

    #[test]
    fn test_issue_status_wire_format() {
        let status: IssueStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(status, IssueStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&IssueStatus::Open).unwrap(),
            "\"OPEN\""
        );
    }

    #[test]
    fn test_issue_deserializes_with_missing_optional_fields() {
        let issue: Issue = serde_json::from_str(
            r#"{"id": 7, "title": "Bug", "description": "Something is broken"}"#,
        )
        .unwrap();
        assert_eq!(issue.id, 7);
        assert_eq!(issue.status, IssueStatus::Open);
        assert!(issue.created_at.is_none());
    }
}
