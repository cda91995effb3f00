use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::category::{OutcomeCategory, REPORT_ORDER};

/// Per-category tallies over the retained runs.
///
/// The counts keep the fixed report order and carry every non-excluded
/// category from the start, so zero counts still show up in the summary.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub counts: IndexMap<OutcomeCategory, usize>,
    pub total_runs: usize,
}

impl RunSummary {
    pub fn new(exclude: &HashSet<OutcomeCategory>) -> Self {
        let counts = REPORT_ORDER
            .iter()
            .copied()
            .filter(|category| !exclude.contains(category))
            .map(|category| (category, 0))
            .collect();

        Self {
            counts,
            total_runs: 0,
        }
    }

    /// Record one retained run under its classified category.
    pub fn record(&mut self, category: OutcomeCategory) {
        *self.counts.entry(category).or_insert(0) += 1;
        self.total_runs += 1;
    }

    /// Human-readable summary lines in the fixed report order.
    ///
    /// The waiting and unknown lines only show up once a run actually
    /// landed there; the terminal categories always print.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .counts
            .iter()
            .filter(|(category, count)| match category {
                OutcomeCategory::Waiting | OutcomeCategory::Unknown => **count > 0,
                _ => true,
            })
            .map(|(category, count)| format!("{category}: {count}"))
            .collect();

        lines.push(format!("total_runs: {}", self.total_runs));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_covers_all_categories_with_zero_counts() {
        let summary = RunSummary::new(&HashSet::new());

        assert_eq!(summary.counts.len(), REPORT_ORDER.len());
        assert!(summary.counts.values().all(|&count| count == 0));
        assert_eq!(summary.total_runs, 0);
    }

    #[test]
    fn test_new_summary_omits_excluded_categories() {
        let exclude = HashSet::from([OutcomeCategory::Success]);

        let summary = RunSummary::new(&exclude);

        assert!(!summary.counts.contains_key(&OutcomeCategory::Success));
        assert!(summary.counts.contains_key(&OutcomeCategory::Failure));
    }

    #[test]
    fn test_record_updates_count_and_total() {
        let mut summary = RunSummary::new(&HashSet::new());

        summary.record(OutcomeCategory::Failure);
        summary.record(OutcomeCategory::Failure);
        summary.record(OutcomeCategory::Success);

        assert_eq!(summary.counts[&OutcomeCategory::Failure], 2);
        assert_eq!(summary.counts[&OutcomeCategory::Success], 1);
        assert_eq!(summary.total_runs, 3);
    }

    #[test]
    fn test_lines_follow_report_order_and_hide_empty_tail_categories() {
        let mut summary = RunSummary::new(&HashSet::new());
        summary.record(OutcomeCategory::Success);
        summary.record(OutcomeCategory::Failure);

        let lines = summary.lines();

        assert_eq!(
            lines,
            vec![
                "success: 1",
                "failure: 1",
                "in_progress: 0",
                "cancelled: 0",
                "queued: 0",
                "total_runs: 2",
            ]
        );
    }

    #[test]
    fn test_lines_show_waiting_and_unknown_once_populated() {
        let mut summary = RunSummary::new(&HashSet::new());
        summary.record(OutcomeCategory::Waiting);
        summary.record(OutcomeCategory::Unknown);

        let lines = summary.lines();

        assert!(lines.contains(&"waiting: 1".to_string()));
        assert!(lines.contains(&"unknown: 1".to_string()));
    }

    #[test]
    fn test_lines_omit_excluded_categories_but_keep_total() {
        let exclude = HashSet::from([OutcomeCategory::Success]);
        let mut summary = RunSummary::new(&exclude);
        summary.record(OutcomeCategory::Failure);

        let lines = summary.lines();

        assert!(!lines.iter().any(|line| line.starts_with("success")));
        assert!(lines.contains(&"failure: 1".to_string()));
        assert_eq!(lines.last().unwrap(), "total_runs: 1");
    }
}
