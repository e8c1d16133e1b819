//! Sync orchestrator: backlog tree → tracker issues
//!
//! Walks the parsed hierarchy top-down, one remote call at a time, so each
//! issue's parent number is always known before its body is rendered.

use std::collections::HashMap;

use backlog_core::{build_checklist, Backlog, DEFAULT_LABELS};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{IssueTracker, Result};

/// Result of syncing a backlog to the tracker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncOutcome {
    /// Mapping of initiative names to issue numbers
    pub initiatives: HashMap<String, u64>,
    /// Mapping of epic names to issue numbers
    pub epics: HashMap<String, u64>,
    /// Mapping of sprint indexes to milestone numbers
    pub milestones: HashMap<u32, u64>,
    /// Number of issues created
    pub issues_created: usize,
}

/// Sync the parsed backlog to the tracker.
///
/// Ensures the default label set and the sprint milestones first, then
/// creates one issue per initiative, epic and story in parse order. Any
/// tracker error aborts the run; issues already created stay behind, so
/// re-running duplicates them.
pub async fn sync_backlog<T: IssueTracker + ?Sized>(
    tracker: &T,
    backlog: &Backlog,
    criteria: &[String],
    sprint_count: u32,
) -> Result<SyncOutcome> {
    let mut outcome = SyncOutcome::default();

    for spec in DEFAULT_LABELS {
        tracker.ensure_label(spec.name, spec.color).await?;
    }

    for sprint in 0..sprint_count {
        let title = format!("Sprint {}", sprint);
        let number = tracker.ensure_milestone(&title).await?;
        outcome.milestones.insert(sprint, number);
    }

    // Shared verbatim across every story in the run
    let checklist = build_checklist(criteria);

    for initiative in &backlog.initiatives {
        let body = build_initiative_body(&initiative.name);
        let labels = vec!["initiative".to_string()];
        let initiative_number = tracker
            .create_issue(&initiative.name, &body, &labels, None)
            .await?;
        info!(title = %initiative.name, number = initiative_number, "Created initiative issue");
        outcome
            .initiatives
            .insert(initiative.name.clone(), initiative_number);
        outcome.issues_created += 1;

        for epic in &initiative.epics {
            let tech_labels = epic.tech_labels();

            let mut labels = vec!["epic".to_string()];
            labels.extend(tech_labels.iter().map(|l| l.to_string()));

            let body = build_epic_body(initiative_number);
            let epic_number = tracker.create_issue(&epic.name, &body, &labels, None).await?;
            info!(title = %epic.name, number = epic_number, "Created epic issue");
            outcome.epics.insert(epic.name.clone(), epic_number);
            outcome.issues_created += 1;

            for story in &epic.stories {
                let mut labels = vec!["user story".to_string()];
                labels.extend(tech_labels.iter().map(|l| l.to_string()));

                let milestone = outcome.milestones.get(&story.sprint).copied();
                let title = format!("US {}", story.code);
                let body = build_story_body(&story.description, epic_number, &checklist);

                let story_number = tracker
                    .create_issue(&title, &body, &labels, milestone)
                    .await?;
                info!(title = %title, number = story_number, "Created story issue");
                outcome.issues_created += 1;
            }
        }
    }

    Ok(outcome)
}

fn build_initiative_body(name: &str) -> String {
    format!("This issue tracks **{}**.", name)
}

fn build_epic_body(initiative_number: u64) -> String {
    format!("Parent Initiative: #{}", initiative_number)
}

fn build_story_body(description: &str, epic_number: u64, checklist: &str) -> String {
    format!(
        "{}\n\nParent Epic: #{}\n\n### Acceptance Criteria\n{}",
        description, epic_number, checklist
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use backlog_core::parse_overview;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    struct CreatedIssue {
        title: String,
        body: String,
        labels: Vec<String>,
        milestone: Option<u64>,
    }

    /// In-memory tracker implementing the same idempotence contract as the
    /// remote API: labels checked by name before creation, milestones
    /// matched by title.
    #[derive(Default)]
    struct MockTracker {
        known_labels: Mutex<HashSet<String>>,
        label_creations: Mutex<Vec<String>>,
        milestones: Mutex<Vec<String>>,
        issues: Mutex<Vec<CreatedIssue>>,
    }

    #[async_trait]
    impl IssueTracker for MockTracker {
        async fn ensure_label(&self, name: &str, _color: &str) -> Result<()> {
            if self.known_labels.lock().unwrap().insert(name.to_string()) {
                self.label_creations.lock().unwrap().push(name.to_string());
            }
            Ok(())
        }

        async fn ensure_milestone(&self, title: &str) -> Result<u64> {
            let mut milestones = self.milestones.lock().unwrap();
            if let Some(pos) = milestones.iter().position(|t| t == title) {
                return Ok(100 + pos as u64);
            }
            milestones.push(title.to_string());
            Ok(100 + milestones.len() as u64 - 1)
        }

        async fn create_issue(
            &self,
            title: &str,
            body: &str,
            labels: &[String],
            milestone: Option<u64>,
        ) -> Result<u64> {
            let mut issues = self.issues.lock().unwrap();
            issues.push(CreatedIssue {
                title: title.to_string(),
                body: body.to_string(),
                labels: labels.to_vec(),
                milestone,
            });
            Ok(issues.len() as u64)
        }
    }

    const SAMPLE_OVERVIEW: &str = r#"## Initiative 1: Platform

- **Epic 1.1: Backend API work**
  - US 1.1: Build login endpoint (_Sprint 2_)
"#;

    fn criteria() -> Vec<String> {
        vec!["A".to_string(), "B".to_string()]
    }

    #[tokio::test]
    async fn test_sync_creates_issues_in_order() {
        let tracker = MockTracker::default();
        let backlog = parse_overview(SAMPLE_OVERVIEW);

        let outcome = sync_backlog(&tracker, &backlog, &criteria(), 10)
            .await
            .unwrap();

        let issues = tracker.issues.lock().unwrap();
        assert_eq!(issues.len(), 3);
        assert_eq!(outcome.issues_created, 3);

        assert_eq!(issues[0].title, "Initiative 1: Platform");
        assert_eq!(issues[1].title, "Epic 1.1: Backend API work");
        assert_eq!(issues[2].title, "US 1.1");
    }

    #[tokio::test]
    async fn test_parent_references_use_assigned_numbers() {
        let tracker = MockTracker::default();
        let backlog = parse_overview(SAMPLE_OVERVIEW);

        let outcome = sync_backlog(&tracker, &backlog, &criteria(), 10)
            .await
            .unwrap();

        let issues = tracker.issues.lock().unwrap();

        let initiative_number = outcome.initiatives["Initiative 1: Platform"];
        let epic_number = outcome.epics["Epic 1.1: Backend API work"];

        assert_eq!(
            issues[1].body,
            format!("Parent Initiative: #{}", initiative_number)
        );
        assert!(issues[2]
            .body
            .contains(&format!("Parent Epic: #{}", epic_number)));
    }

    #[tokio::test]
    async fn test_story_body_carries_description_and_checklist() {
        let tracker = MockTracker::default();
        let backlog = parse_overview(SAMPLE_OVERVIEW);

        sync_backlog(&tracker, &backlog, &criteria(), 10)
            .await
            .unwrap();

        let issues = tracker.issues.lock().unwrap();
        let story = &issues[2];
        assert!(story.body.starts_with("Build login endpoint"));
        assert!(story.body.contains("### Acceptance Criteria"));
        assert!(story.body.contains("- [ ] A\n- [ ] B"));
    }

    #[tokio::test]
    async fn test_story_labels_and_milestone() {
        let tracker = MockTracker::default();
        let backlog = parse_overview(SAMPLE_OVERVIEW);

        let outcome = sync_backlog(&tracker, &backlog, &criteria(), 10)
            .await
            .unwrap();

        let issues = tracker.issues.lock().unwrap();

        // Epic carries the generic tag plus tech labels
        assert_eq!(issues[1].labels, vec!["epic", "backend"]);

        // Story swaps the generic tag for "user story", keeps tech labels
        let story = &issues[2];
        assert_eq!(story.labels, vec!["user story", "backend"]);
        assert_eq!(story.milestone, Some(outcome.milestones[&2]));
    }

    #[tokio::test]
    async fn test_story_with_unknown_sprint_gets_no_milestone() {
        let tracker = MockTracker::default();
        let overview = "## Initiative 1: One\n\n- **Epic 1.1: Work**\n  - US 1.1: Late story (_Sprint 42_)\n";
        let backlog = parse_overview(overview);

        sync_backlog(&tracker, &backlog, &[], 10).await.unwrap();

        let issues = tracker.issues.lock().unwrap();
        assert_eq!(issues[2].milestone, None);
    }

    #[tokio::test]
    async fn test_sprint_milestones_ensured() {
        let tracker = MockTracker::default();

        let outcome = sync_backlog(&tracker, &Backlog::default(), &[], 3)
            .await
            .unwrap();

        let milestones = tracker.milestones.lock().unwrap();
        assert_eq!(*milestones, vec!["Sprint 0", "Sprint 1", "Sprint 2"]);
        assert_eq!(outcome.milestones.len(), 3);
    }

    #[tokio::test]
    async fn test_default_labels_ensured_once() {
        let tracker = MockTracker::default();

        sync_backlog(&tracker, &Backlog::default(), &[], 0)
            .await
            .unwrap();

        let creations = tracker.label_creations.lock().unwrap();
        assert_eq!(creations.len(), DEFAULT_LABELS.len());
        assert!(creations.contains(&"initiative".to_string()));
    }

    #[tokio::test]
    async fn test_ensure_label_twice_creates_once() {
        let tracker = MockTracker::default();

        tracker.ensure_label("backend", "8c564b").await.unwrap();
        tracker.ensure_label("backend", "8c564b").await.unwrap();

        assert_eq!(tracker.label_creations.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_body_builders() {
        assert_eq!(
            build_initiative_body("Initiative 1: Platform"),
            "This issue tracks **Initiative 1: Platform**."
        );
        assert_eq!(build_epic_body(7), "Parent Initiative: #7");

        let body = build_story_body("Do the thing", 9, "- [ ] A");
        assert_eq!(
            body,
            "Do the thing\n\nParent Epic: #9\n\n### Acceptance Criteria\n- [ ] A"
        );
    }
}
