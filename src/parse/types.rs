//! Workflow trace document produced by the parse phase.
//!
//! Field order of these structs is the key order of the emitted JSON.

use serde::{Deserialize, Serialize};

use crate::classify::JobType;

/// Placeholder identifier written into every trace.
pub const WORKFLOW_ID_PLACEHOLDER: &str = "TO_BE_PROVIDED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub workflow_id: String,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub submit_file: String,
    pub parents: Vec<String>,
}

impl Workflow {
    pub fn new() -> Self {
        Workflow {
            workflow_id: WORKFLOW_ID_PLACEHOLDER.to_string(),
            jobs: Vec::new(),
        }
    }

    /// First job declared under `name`.
    pub fn job(&self, name: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.name == name)
    }

    pub fn edge_count(&self) -> usize {
        self.jobs.iter().map(|j| j.parents.len()).sum()
    }

    /// Parent names that no declared job carries, in first-seen order.
    pub fn dangling_parents(&self) -> Vec<&str> {
        let mut dangling: Vec<&str> = Vec::new();
        for parent in self.jobs.iter().flat_map(|j| &j.parents) {
            if self.job(parent).is_none() && !dangling.contains(&parent.as_str()) {
                dangling.push(parent);
            }
        }
        dangling
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

impl Job {
    pub fn new(name: &str, submit_file: &str) -> Self {
        Job {
            name: name.to_string(),
            job_type: crate::classify::classify(name),
            submit_file: submit_file.to_string(),
            parents: Vec::new(),
        }
    }
}
