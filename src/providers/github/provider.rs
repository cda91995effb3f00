use std::collections::HashSet;

use log::{info, warn};

use crate::auth::Token;
use crate::category::OutcomeCategory;
use crate::error::Result;
use crate::models::RunSummary;
use crate::window::DateWindow;

use super::aggregate::aggregate;
use super::classify::ClassificationMode;
use super::client::{GitHubClient, RunPage};
use super::types::{WorkflowJob, WorkflowRun};

/// The outcome of one collection: the printed summary and the records
/// that get persisted, in provider listing order.
#[derive(Debug)]
pub struct RunHistory {
    pub summary: RunSummary,
    pub records: Vec<WorkflowRun>,
}

pub struct GitHubProvider {
    client: GitHubClient,
    repo: String,
    workflow: String,
}

impl GitHubProvider {
    pub fn new(
        base_url: &str,
        repo: String,
        workflow: String,
        token: Option<Token>,
    ) -> Result<Self> {
        let client = GitHubClient::new(base_url, token)?;

        Ok(Self {
            client,
            repo,
            workflow,
        })
    }

    /// Fetch every run created inside the window, page by page.
    ///
    /// A failed page ends the walk early: whatever accumulated up to that
    /// point is returned rather than thrown away, and no retry is made.
    pub async fn list_runs(&self, window: &DateWindow) -> Vec<WorkflowRun> {
        let mut runs: Vec<WorkflowRun> = Vec::new();
        let mut page = 1;

        loop {
            let fetched = self
                .client
                .fetch_run_page(&self.repo, &self.workflow, window, page)
                .await;

            let RunPage {
                runs: page_runs,
                has_next,
            } = match fetched {
                Ok(fetched) => fetched,
                Err(e) => {
                    warn!(
                        "Failed to fetch runs page {page}: {e}; keeping the {} runs fetched so far",
                        runs.len()
                    );
                    break;
                }
            };

            if page_runs.is_empty() {
                break;
            }

            runs.extend(page_runs.into_iter().map(WorkflowRun::from));
            info!("Page {page}: {} runs accumulated", runs.len());

            if !has_next {
                break;
            }

            page += 1;
        }

        runs
    }

    /// Fetch a run's jobs, falling back to an empty list on failure so
    /// classification can degrade instead of aborting the report.
    pub async fn fetch_jobs(&self, run_id: u64) -> Vec<WorkflowJob> {
        info!("Fetching jobs for run {run_id}");

        match self.client.fetch_run_jobs(&self.repo, run_id).await {
            Ok(jobs) => jobs.into_iter().map(WorkflowJob::from).collect(),
            Err(e) => {
                warn!("Failed to fetch jobs for run {run_id}: {e}; treating job list as empty");
                Vec::new()
            }
        }
    }

    /// Collect the full history report: runs in the window, classified,
    /// filtered and tallied. Job detail is fetched sequentially, one run
    /// at a time in listing order, and only in job-aware mode.
    pub async fn collect_history(
        &self,
        window: &DateWindow,
        mode: ClassificationMode,
        exclude: &HashSet<OutcomeCategory>,
    ) -> RunHistory {
        info!(
            "Collecting run history for workflow {} in {}",
            self.workflow, self.repo
        );

        let mut runs = self.list_runs(window).await;

        if runs.is_empty() {
            warn!(
                "No runs found for workflow {} in the requested window",
                self.workflow
            );
        }

        if mode == ClassificationMode::JobAware {
            for run in &mut runs {
                run.jobs = Some(self.fetch_jobs(run.id).await);
            }
        }

        let (summary, records) = aggregate(runs, mode, exclude);

        RunHistory { summary, records }
    }
}
