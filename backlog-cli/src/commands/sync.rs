//! Sync command - parse planning documents and file tracker issues

use std::path::PathBuf;

use backlog_core::{parse_acceptance_criteria, parse_overview, Backlog, Config, Secrets};
use backlog_github::{sync_backlog, GitHubClient};
use clap::Args;

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Path to the requirements document (acceptance criteria)
    #[arg(long, default_value = "docs/PRD.md")]
    pub prd: PathBuf,

    /// Path to the overview document (initiatives, epics, stories)
    #[arg(long, default_value = "docs/ISSUE_OVERVIEW.md")]
    pub overview: PathBuf,

    /// Repository (owner/repo format or GitHub URL)
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Number of sprint milestones to ensure
    #[arg(long)]
    pub sprints: Option<u32>,

    /// Actually create issues (dry-run by default)
    #[arg(long)]
    pub execute: bool,
}

impl SyncArgs {
    /// Execute the sync command
    pub async fn execute(&self, verbose: bool) -> anyhow::Result<()> {
        // Resolve configuration and credentials before touching any file
        let config = Config::load_with_overrides(self.repo.clone(), self.sprints)?;
        let repository = config.require_repository()?.to_string();

        let secrets = Secrets::load()?;
        let token = secrets.github_token().ok_or_else(|| {
            anyhow::anyhow!(
                "GitHub token not found. Set GITHUB_TOKEN or run `backlog init` \
                 and fill in the secrets file"
            )
        })?;

        let prd_text = std::fs::read_to_string(&self.prd)?;
        let overview_text = std::fs::read_to_string(&self.overview)?;

        let criteria = parse_acceptance_criteria(&prd_text);
        let backlog = parse_overview(&overview_text);

        println!(
            "Parsed {}: {} initiatives, {} epics, {} stories",
            self.overview.display(),
            backlog.initiatives.len(),
            backlog.epic_count(),
            backlog.story_count()
        );
        println!(
            "Parsed {}: {} acceptance criteria",
            self.prd.display(),
            criteria.len()
        );
        println!();

        if verbose {
            tracing::info!(
                repository = %repository,
                sprints = config.sprint_count,
                "Sync configuration resolved"
            );
        }

        if !self.execute {
            print_dry_run(&backlog);
            println!("Run with --execute to create issues.");
            return Ok(());
        }

        let client = GitHubClient::from_repository(token, &repository)?;
        client.test_connection().await?;

        println!("Creating issues in {}/{}...", client.owner(), client.repo());
        println!();

        let outcome = sync_backlog(&client, &backlog, &criteria, config.sprint_count).await?;

        println!("Created {} issue(s):", outcome.issues_created);
        for initiative in &backlog.initiatives {
            if let Some(&num) = outcome.initiatives.get(&initiative.name) {
                println!("  ✅ #{} {}", num, initiative.name);
            }
            for epic in &initiative.epics {
                if let Some(&num) = outcome.epics.get(&epic.name) {
                    println!("    ✅ #{} {}", num, epic.name);
                }
            }
        }

        println!();
        println!(
            "Summary: {} issues, {} sprint milestones",
            outcome.issues_created,
            outcome.milestones.len()
        );

        Ok(())
    }
}

fn print_dry_run(backlog: &Backlog) {
    println!("Would create:");
    println!();

    for initiative in &backlog.initiatives {
        println!("  📁 Initiative: {}", initiative.name);

        for epic in &initiative.epics {
            let tech = epic.tech_labels();
            if tech.is_empty() {
                println!("    📂 Epic: {}", epic.name);
            } else {
                println!("    📂 Epic: {} [{}]", epic.name, tech.join(", "));
            }

            for story in &epic.stories {
                println!(
                    "      📝 US {}: {} (Sprint {})",
                    story.code, story.description, story.sprint
                );
            }
        }
        println!();
    }
}
