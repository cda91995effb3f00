use crate::category::OutcomeCategory;

use super::types::{WorkflowJob, WorkflowRun};

/// How much detail the classifier consults. One mode is picked per
/// invocation; job-aware mode costs one extra request per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationMode {
    RunLevel,
    JobAware,
}

/// Classify a run from its own status/conclusion fields, first match wins.
pub fn classify_run(run: &WorkflowRun) -> OutcomeCategory {
    if run.conclusion == "failure" {
        OutcomeCategory::Failure
    } else if run.status == "in_progress" {
        OutcomeCategory::InProgress
    } else if run.conclusion == "cancelled" {
        OutcomeCategory::Cancelled
    } else if run.status == "queued" {
        OutcomeCategory::Queued
    } else if run.status == "waiting" {
        OutcomeCategory::Waiting
    } else if run.conclusion == "success" {
        OutcomeCategory::Success
    } else {
        OutcomeCategory::Unknown
    }
}

/// Classify a run from its jobs and their steps.
///
/// An empty job set means the run never dispatched any work and counts as
/// a failure. Otherwise the worst signal wins: a failed job or step beats
/// in-flight work, which beats cancellation, which beats success. Steps
/// are inspected regardless of their job's own conclusion.
pub fn classify_jobs(jobs: &[WorkflowJob]) -> OutcomeCategory {
    if jobs.is_empty() {
        return OutcomeCategory::Failure;
    }

    let any_failed = jobs.iter().any(|job| {
        job.conclusion == "failure" || job.steps.iter().any(|step| step.conclusion == "failure")
    });
    let any_in_flight = jobs
        .iter()
        .any(|job| job.status == "in_progress" || job.status == "queued");
    let any_cancelled = jobs.iter().any(|job| job.conclusion == "cancelled");

    if any_failed {
        OutcomeCategory::Failure
    } else if any_in_flight {
        OutcomeCategory::InProgress
    } else if any_cancelled {
        OutcomeCategory::Cancelled
    } else {
        OutcomeCategory::Success
    }
}
