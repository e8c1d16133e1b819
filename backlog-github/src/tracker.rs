//! Tracker abstraction over the remote issue API
//!
//! The sync orchestrator works through this trait so that it can be
//! exercised against an in-memory tracker in tests.

use async_trait::async_trait;

use crate::{GitHubClient, Result};

/// Remote issue-tracker operations needed by the sync orchestrator
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Ensure a label exists, creating it with the given color if absent
    async fn ensure_label(&self, name: &str, color: &str) -> Result<()>;

    /// Ensure a milestone with the given title exists, returning its number
    async fn ensure_milestone(&self, title: &str) -> Result<u64>;

    /// Create an issue and return its assigned number
    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
        milestone: Option<u64>,
    ) -> Result<u64>;
}

#[async_trait]
impl IssueTracker for GitHubClient {
    async fn ensure_label(&self, name: &str, color: &str) -> Result<()> {
        GitHubClient::ensure_label(self, name, color).await
    }

    async fn ensure_milestone(&self, title: &str) -> Result<u64> {
        GitHubClient::ensure_milestone(self, title).await
    }

    async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
        milestone: Option<u64>,
    ) -> Result<u64> {
        let issue = GitHubClient::create_issue(self, title, body, labels, milestone).await?;
        Ok(issue.number)
    }
}
