mod aggregate;
mod classify;
mod client;
mod provider;
mod types;

pub use classify::ClassificationMode;
pub use provider::{GitHubProvider, RunHistory};
pub use types::{WorkflowJob, WorkflowRun, WorkflowStep};
