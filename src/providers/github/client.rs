use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, LINK};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::auth::Token;
use crate::error::{Result, RunLensError};
use crate::window::DateWindow;

const PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    api_url: Url,
    token: Option<Token>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkflowRunDto {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkflowJobDto {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default)]
    pub steps: Vec<WorkflowStepDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkflowStepDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub conclusion: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RunListPageDto {
    #[serde(default)]
    workflow_runs: Vec<WorkflowRunDto>,
}

#[derive(Debug, Default, Deserialize)]
struct JobListDto {
    #[serde(default)]
    jobs: Vec<WorkflowJobDto>,
}

/// One page of the run listing plus whether the provider advertises a
/// further page.
pub struct RunPage {
    pub runs: Vec<WorkflowRunDto>,
    pub has_next: bool,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: Option<Token>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .user_agent("RunLens/0.1.0")
            .default_headers(headers)
            .build()
            .map_err(|e| RunLensError::Config(format!("Failed to create HTTP client: {e}")))?;

        let api_url = Url::parse(base_url)
            .map_err(|e| RunLensError::Config(format!("Invalid base URL: {e}")))?;

        Ok(Self {
            client,
            api_url,
            token,
        })
    }

    /// Helper to build authenticated requests
    fn auth_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = &self.token {
            request.bearer_auth(token.as_str())
        } else {
            request
        }
    }

    /// Construct the run listing URL for a workflow
    fn runs_url(&self, repo: &str, workflow: &str) -> Result<Url> {
        self.api_url
            .join(&format!("repos/{repo}/actions/workflows/{workflow}/runs"))
            .map_err(|e| RunLensError::Config(format!("Invalid runs URL: {e}")))
    }

    /// Construct the job listing URL for a run
    fn jobs_url(&self, repo: &str, run_id: u64) -> Result<Url> {
        self.api_url
            .join(&format!("repos/{repo}/actions/runs/{run_id}/jobs"))
            .map_err(|e| RunLensError::Config(format!("Invalid jobs URL: {e}")))
    }

    /// Fetch one page of workflow runs created inside the window
    pub async fn fetch_run_page(
        &self,
        repo: &str,
        workflow: &str,
        window: &DateWindow,
        page: u32,
    ) -> Result<RunPage> {
        let url = self.runs_url(repo, workflow)?;
        let created = format!(
            "{}..{}",
            window.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            window.end.to_rfc3339_opts(SecondsFormat::Secs, true)
        );

        let request = self.client.get(url).query(&[
            ("created", created),
            ("page", page.to_string()),
            ("per_page", PER_PAGE.to_string()),
        ]);
        let request = self.auth_request(request);

        let response = request.send().await?.error_for_status()?;
        let has_next = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .map_or(false, link_has_next);
        let body = response.json::<RunListPageDto>().await?;

        Ok(RunPage {
            runs: body.workflow_runs,
            has_next,
        })
    }

    /// Fetch the jobs of a single run
    pub async fn fetch_run_jobs(&self, repo: &str, run_id: u64) -> Result<Vec<WorkflowJobDto>> {
        let url = self.jobs_url(repo, run_id)?;
        let request = self
            .client
            .get(url)
            .query(&[("per_page", PER_PAGE.to_string())]);
        let request = self.auth_request(request);

        let response = request.send().await?.error_for_status()?;
        let body = response.json::<JobListDto>().await?;
        Ok(body.jobs)
    }
}

/// A `Link` header advertises a further page via a `rel="next"` relation.
fn link_has_next(link: &str) -> bool {
    link.split(',').any(|relation| relation.contains("rel=\"next\""))
}
