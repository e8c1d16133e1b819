//! Planning-document parsing
//!
//! This module handles parsing of the overview document that describes the
//! initiative/epic/story hierarchy and of the requirements document that
//! carries the acceptance-criteria checklist.

mod parser;

use serde::{Deserialize, Serialize};

pub use parser::{build_checklist, parse_acceptance_criteria, parse_overview};

/// The full parsed planning hierarchy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Backlog {
    /// Top-level initiatives in document order
    pub initiatives: Vec<Initiative>,
}

impl Backlog {
    /// Total number of epics across all initiatives
    pub fn epic_count(&self) -> usize {
        self.initiatives.iter().map(|i| i.epics.len()).sum()
    }

    /// Total number of stories across all epics
    pub fn story_count(&self) -> usize {
        self.initiatives
            .iter()
            .flat_map(|i| &i.epics)
            .map(|e| e.stories.len())
            .sum()
    }
}

/// A top-level grouping of epics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Initiative {
    /// Display name (trimmed heading text)
    pub name: String,
    /// Epics in document order
    pub epics: Vec<Epic>,
}

/// A grouping of related user stories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Epic {
    /// Display name (bullet text with bold markers stripped)
    pub name: String,
    /// Stories in document order
    pub stories: Vec<Story>,
}

impl Epic {
    /// Derive technology-classification labels from the epic name.
    ///
    /// Matching is a case-insensitive substring check, so "Backend API"
    /// yields `backend` and a name containing "maintain" yields `ai`.
    pub fn tech_labels(&self) -> Vec<&'static str> {
        let name = self.name.to_lowercase();
        let mut labels = Vec::new();

        if name.contains("backend") || name.contains("api") || name.contains("database") {
            labels.push("backend");
        }
        if name.contains("frontend") || name.contains("interface") || name.contains("desktop") {
            labels.push("frontend");
        }
        if name.contains("ci/cd") || name.contains("deployment") || name.contains("workflow") {
            labels.push("devops");
        }
        if name.contains("ai") {
            labels.push("ai");
        }

        labels
    }
}

/// The smallest planning unit, tagged to a sprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Story code (e.g. "1.2")
    pub code: String,
    /// One-line description
    pub description: String,
    /// Sprint index the story is planned for
    pub sprint: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epic(name: &str) -> Epic {
        Epic {
            name: name.to_string(),
            stories: vec![],
        }
    }

    #[test]
    fn test_tech_labels_backend() {
        assert_eq!(epic("Backend API work").tech_labels(), vec!["backend"]);
        assert_eq!(epic("Database schema").tech_labels(), vec!["backend"]);
    }

    #[test]
    fn test_tech_labels_frontend_and_ai() {
        let labels = epic("Frontend AI assistant").tech_labels();
        assert_eq!(labels.len(), 2);
        assert!(labels.contains(&"frontend"));
        assert!(labels.contains(&"ai"));
    }

    #[test]
    fn test_tech_labels_devops() {
        assert_eq!(epic("CI/CD pipeline").tech_labels(), vec!["devops"]);
        assert_eq!(epic("Deployment workflow").tech_labels(), vec!["devops"]);
    }

    #[test]
    fn test_tech_labels_none() {
        assert!(epic("Documentation polish").tech_labels().is_empty());
    }

    #[test]
    fn test_tech_labels_case_insensitive() {
        assert_eq!(epic("DESKTOP interface").tech_labels(), vec!["frontend"]);
    }

    #[test]
    fn test_counts() {
        let backlog = Backlog {
            initiatives: vec![Initiative {
                name: "Initiative 1".to_string(),
                epics: vec![Epic {
                    name: "Epic 1.1".to_string(),
                    stories: vec![Story {
                        code: "1.1".to_string(),
                        description: "Do the thing".to_string(),
                        sprint: 0,
                    }],
                }],
            }],
        };
        assert_eq!(backlog.epic_count(), 1);
        assert_eq!(backlog.story_count(), 1);
    }
}
