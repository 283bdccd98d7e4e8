//! Job category heuristic based on Pegasus job naming conventions.

use serde::{Deserialize, Serialize};

const AUXILIARY_MARKERS: [&str; 3] = ["create_dir", "cleanup_", "register_"];
const TRANSFER_MARKERS: [&str; 2] = ["stage_in", "stage_out"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Auxiliary,
    Transfer,
    Compute,
}

impl JobType {
    pub fn as_str(self) -> &'static str {
        match self {
            JobType::Auxiliary => "auxiliary",
            JobType::Transfer => "transfer",
            JobType::Compute => "compute",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a job by name. Auxiliary markers take precedence over transfer
/// markers; anything else is a compute job.
pub fn classify(job_name: &str) -> JobType {
    if AUXILIARY_MARKERS.iter().any(|m| job_name.contains(m)) {
        JobType::Auxiliary
    } else if TRANSFER_MARKERS.iter().any(|m| job_name.contains(m)) {
        JobType::Transfer
    } else {
        JobType::Compute
    }
}
