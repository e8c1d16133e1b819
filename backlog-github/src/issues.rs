//! Issue creation

use octocrab::models::issues::Issue as OctocrabIssue;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{GitHubClient, Result};

/// A created tracker issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number assigned by GitHub
    pub number: u64,
    /// Issue title
    pub title: String,
    /// Issue body text
    pub body: String,
    /// Label names attached to the issue
    pub labels: Vec<String>,
}

impl From<OctocrabIssue> for Issue {
    fn from(issue: OctocrabIssue) -> Self {
        Issue {
            number: issue.number,
            title: issue.title,
            body: issue.body.unwrap_or_default(),
            labels: issue.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

impl GitHubClient {
    /// Create a single issue with optional labels and milestone.
    ///
    /// Any non-success response propagates immediately; there is no retry
    /// and no rollback of issues already created earlier in the run.
    pub async fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &[String],
        milestone: Option<u64>,
    ) -> Result<Issue> {
        debug!(title, "Creating issue");

        let handler = self.client().issues(self.owner(), self.repo());
        let mut builder = handler.create(title).body(body);

        if !labels.is_empty() {
            builder = builder.labels(labels.to_vec());
        }
        if let Some(milestone) = milestone {
            builder = builder.milestone(milestone);
        }

        let issue = builder.send().await?;

        info!(title, number = issue.number, "Created issue");
        Ok(issue.into())
    }
}
