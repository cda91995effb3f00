use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use crate::auth::Token;
use crate::category;
use crate::providers::github::{ClassificationMode, GitHubProvider};
use crate::window;

#[derive(Parser)]
#[command(name = "runlens")]
#[command(author, version, about = "GitHub Actions Run History Tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output file path for the retained run records
    #[arg(short, long, global = true, default_value = "runs.json")]
    output: PathBuf,

    /// Pretty print JSON output
    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report workflow run history from GitHub Actions
    Github {
        /// GitHub API token (optional, required for private repositories)
        #[arg(short, long, env = "GITHUB_TOKEN")]
        token: Option<String>,

        /// GitHub API base URL
        #[arg(short, long, default_value = "https://api.github.com")]
        url: String,

        /// Repository in owner/name form (e.g. "rust-lang/rust")
        #[arg(short, long)]
        repo: String,

        /// Workflow file name or numeric ID (e.g. "ci.yml")
        #[arg(short, long)]
        workflow: String,

        /// How far back to report, as "<amount><unit>" (e.g. "7d", "2w", "1m")
        #[arg(short, long, default_value = "1w")]
        since: String,

        /// Outcome categories to leave out of the report (repeatable)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Classify runs from per-job and per-step detail (one extra request per run)
        #[arg(short, long, default_value_t = false)]
        jobs: bool,
    },
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Github {
                token,
                url,
                repo,
                workflow,
                since,
                exclude,
                jobs,
            } => {
                // A bad duration token must abort before any network call.
                let window = window::resolve(since, Utc::now())?;
                let exclude = category::parse_exclusions(exclude);
                let mode = if *jobs {
                    ClassificationMode::JobAware
                } else {
                    ClassificationMode::RunLevel
                };

                info!("Reporting {since} of run history for {repo}/{workflow}");

                let token_value = token.as_deref().map(Token::from);
                let provider =
                    GitHubProvider::new(url, repo.clone(), workflow.clone(), token_value)?;
                let history = provider.collect_history(&window, mode, &exclude).await;

                // Serialize the retained records
                let json_output = if self.pretty {
                    serde_json::to_string_pretty(&history.records)?
                } else {
                    serde_json::to_string(&history.records)?
                };

                std::fs::write(&self.output, json_output)?;
                info!("Run records written to: {}", self.output.display());

                for line in history.summary.lines() {
                    println!("{line}");
                }

                Ok(())
            }
        }
    }
}
