//! Milestone listing and ensuring

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::{GitHubClient, Result};

/// A repository milestone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone number (the identifier used when filing issues)
    pub number: u64,
    /// Milestone title (e.g. "Sprint 3")
    pub title: String,
}

impl GitHubClient {
    /// List all milestones in any state
    pub async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        let route = format!("/repos/{}/{}/milestones", self.owner(), self.repo());
        let milestones: Vec<Milestone> = self
            .client()
            .get(&route, Some(&[("state", "all"), ("per_page", "100")]))
            .await?;

        debug!(count = milestones.len(), "Fetched milestones");
        Ok(milestones)
    }

    /// Ensure a milestone with the given title exists, returning its number.
    ///
    /// Existing milestones are matched by title in any state; a creation
    /// failure propagates and aborts the run.
    pub async fn ensure_milestone(&self, title: &str) -> Result<u64> {
        let existing = self.list_milestones().await?;
        if let Some(milestone) = existing.iter().find(|m| m.title == title) {
            debug!(title, number = milestone.number, "Milestone already exists");
            return Ok(milestone.number);
        }

        let route = format!("/repos/{}/{}/milestones", self.owner(), self.repo());
        let milestone: Milestone = self
            .client()
            .post(&route, Some(&json!({ "title": title })))
            .await?;

        info!(title, number = milestone.number, "Created milestone");
        Ok(milestone.number)
    }
}
