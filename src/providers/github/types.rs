use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{WorkflowJobDto, WorkflowRunDto, WorkflowStepDto};

/// A single execution of the workflow, as delivered by the run listing.
///
/// `conclusion` is only meaningful once the run reached a terminal state
/// and is empty otherwise. `jobs` stays `None` unless job detail was
/// fetched for classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRun {
    pub id: u64,
    pub status: String,
    pub conclusion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<WorkflowJob>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowJob {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub conclusion: String,
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub name: String,
    pub conclusion: String,
}

// Status and conclusion strings are lowercased once here; everything
// downstream compares against the lowercase literals only.

impl From<WorkflowRunDto> for WorkflowRun {
    fn from(dto: WorkflowRunDto) -> Self {
        Self {
            id: dto.id,
            status: dto.status.unwrap_or_default().to_lowercase(),
            conclusion: dto.conclusion.unwrap_or_default().to_lowercase(),
            created_at: dto.created_at,
            jobs: None,
        }
    }
}

impl From<WorkflowJobDto> for WorkflowJob {
    fn from(dto: WorkflowJobDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            status: dto.status.unwrap_or_default().to_lowercase(),
            conclusion: dto.conclusion.unwrap_or_default().to_lowercase(),
            steps: dto.steps.into_iter().map(WorkflowStep::from).collect(),
        }
    }
}

impl From<WorkflowStepDto> for WorkflowStep {
    fn from(dto: WorkflowStepDto) -> Self {
        Self {
            name: dto.name,
            conclusion: dto.conclusion.unwrap_or_default().to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_transform_defaults_absent_fields() {
        let run = WorkflowRun::from(WorkflowRunDto {
            id: 9,
            status: None,
            conclusion: None,
            created_at: None,
        });

        assert_eq!(run.id, 9);
        assert_eq!(run.status, "");
        assert_eq!(run.conclusion, "");
        assert!(run.jobs.is_none());
    }

    #[test]
    fn test_run_transform_lowercases_status_fields() {
        let run = WorkflowRun::from(WorkflowRunDto {
            id: 1,
            status: Some("Completed".to_string()),
            conclusion: Some("Cancelled".to_string()),
            created_at: None,
        });

        assert_eq!(run.status, "completed");
        assert_eq!(run.conclusion, "cancelled");
    }

    #[test]
    fn test_job_transform_carries_steps() {
        let job = WorkflowJob::from(WorkflowJobDto {
            id: 3,
            name: "build".to_string(),
            status: Some("completed".to_string()),
            conclusion: Some("FAILURE".to_string()),
            steps: vec![WorkflowStepDto {
                name: "compile".to_string(),
                conclusion: Some("Failure".to_string()),
            }],
        });

        assert_eq!(job.conclusion, "failure");
        assert_eq!(job.steps.len(), 1);
        assert_eq!(job.steps[0].conclusion, "failure");
    }

    #[test]
    fn test_serialized_run_omits_unfetched_jobs() {
        let run = WorkflowRun::from(WorkflowRunDto {
            id: 5,
            status: Some("completed".to_string()),
            conclusion: Some("success".to_string()),
            created_at: None,
        });

        let json = serde_json::to_value(&run).unwrap();

        assert!(json.get("jobs").is_none());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["id"], 5);
    }
}
