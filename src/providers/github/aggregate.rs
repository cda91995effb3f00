use std::collections::HashSet;

use crate::category::OutcomeCategory;
use crate::models::RunSummary;

use super::classify::{classify_jobs, classify_run, ClassificationMode};
use super::types::WorkflowRun;

/// Classify every run, drop the excluded categories and tally the rest.
///
/// Exclusion is decided on the classified category, never on the raw
/// status/conclusion fields, so the counts always agree with the filter.
/// A skipped run contributes to neither the counts nor the records.
pub fn aggregate(
    runs: Vec<WorkflowRun>,
    mode: ClassificationMode,
    exclude: &HashSet<OutcomeCategory>,
) -> (RunSummary, Vec<WorkflowRun>) {
    let mut summary = RunSummary::new(exclude);
    let mut records = Vec::new();

    for run in runs {
        let category = match mode {
            ClassificationMode::RunLevel => classify_run(&run),
            ClassificationMode::JobAware => classify_jobs(run.jobs.as_deref().unwrap_or_default()),
        };

        if exclude.contains(&category) {
            continue;
        }

        summary.record(category);
        records.push(run);
    }

    (summary, records)
}
