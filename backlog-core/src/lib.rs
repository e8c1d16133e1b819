//! Backlog Core - Core library for backlog-sync
//!
//! This crate parses planning documents (initiative/epic/story hierarchies
//! and acceptance-criteria checklists) and provides configuration and
//! secrets handling for the sync tooling.

pub mod config;
pub mod error;
pub mod labels;
pub mod plan;
pub mod secrets;

pub use config::Config;
pub use error::{Error, Result};
pub use labels::{LabelSpec, DEFAULT_LABELS};
pub use plan::{
    build_checklist, parse_acceptance_criteria, parse_overview, Backlog, Epic, Initiative, Story,
};
pub use secrets::Secrets;
