//! Backlog GitHub - GitHub integration for backlog-sync
//!
//! This crate provides GitHub API access for ensuring labels and sprint
//! milestones and for creating the initiative/epic/story issue hierarchy.

mod client;
mod error;
mod issues;
mod labels;
mod milestones;
mod sync;
mod tracker;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use issues::Issue;
pub use milestones::Milestone;
pub use sync::{sync_backlog, SyncOutcome};
pub use tracker::IssueTracker;
