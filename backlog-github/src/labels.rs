//! Idempotent label ensuring

use serde::Deserialize;
use tracing::{debug, info};

use crate::{Error, GitHubClient, Result};

/// Minimal label payload returned by the labels endpoint
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Label {
    name: String,
    color: String,
}

impl GitHubClient {
    /// Ensure a label exists on the repository.
    ///
    /// A "Not Found" response to the existence check triggers creation with
    /// the given color; any other response is treated as "already exists"
    /// and creation is skipped. Safe to call repeatedly.
    pub async fn ensure_label(&self, name: &str, color: &str) -> Result<()> {
        let route = format!(
            "/repos/{}/{}/labels/{}",
            self.owner(),
            self.repo(),
            name.replace(' ', "%20")
        );

        match self.client().get::<Label, _, ()>(&route, None).await {
            Ok(_) => {
                debug!(label = name, "Label already exists");
                Ok(())
            }
            Err(e) if Error::is_not_found(&e) => {
                self.client()
                    .issues(self.owner(), self.repo())
                    .create_label(name, color, "")
                    .await?;

                info!(label = name, color, "Created label");
                Ok(())
            }
            Err(e) => {
                // Anything other than a clean 404 is treated as existing
                debug!(label = name, error = %e, "Label check inconclusive, skipping creation");
                Ok(())
            }
        }
    }
}
