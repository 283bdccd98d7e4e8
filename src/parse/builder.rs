//! Single-pass assembly of the job graph from DAG records.

use std::collections::HashMap;

use super::record::Record;
use super::types::{Job, Workflow};
use crate::diagnostics::Diagnostics;
use crate::error::DagError;

/// What to do with a `JOB`/`PARENT` line that has too few fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Collect an error per bad line and reject the whole document.
    #[default]
    Reject,
    /// Drop the line with a warning.
    Skip,
}

/// What to do with a job name that was already declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep every declaration; edges attach to the first one.
    #[default]
    FirstWins,
    /// Collect an error per redeclaration.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub malformed: MalformedPolicy,
    pub duplicates: DuplicatePolicy,
}

pub struct GraphBuilder {
    options: ParseOptions,
    workflow: Workflow,
    /// name → (position in `workflow.jobs`, declaring line)
    index: HashMap<String, (usize, usize)>,
    /// Edges whose child has not been declared yet, in file order.
    pending: Vec<(String, String)>,
    line_no: usize,
    job_count: usize,
    errors: Vec<DagError>,
}

impl GraphBuilder {
    pub fn new(options: ParseOptions) -> Self {
        GraphBuilder {
            options,
            workflow: Workflow::new(),
            index: HashMap::new(),
            pending: Vec::new(),
            line_no: 0,
            job_count: 0,
            errors: Vec::new(),
        }
    }

    /// Feed the next line of the document.
    pub fn push_line(&mut self, line: &str, diag: &mut dyn Diagnostics) {
        self.line_no += 1;

        match Record::recognize(line) {
            Ok(Record::Job { name, submit_file }) => self.declare_job(name, submit_file, diag),
            Ok(Record::Parent { parent, child }) => self.attach_parent(parent, child),
            Ok(Record::Ignored) => {}
            Err(truncated) => {
                let err = DagError::malformed(self.line_no, truncated.kind, truncated.found);
                match self.options.malformed {
                    MalformedPolicy::Reject => self.errors.push(err),
                    MalformedPolicy::Skip => diag.warn(&format!("skipping {err}")),
                }
            }
        }
    }

    /// End the pass and hand over the finished workflow.
    pub fn finish(mut self, diag: &mut dyn Diagnostics) -> Result<Workflow, Vec<DagError>> {
        self.resolve_pending();

        if !self.errors.is_empty() {
            return Err(self.errors);
        }

        diag.debug(&format!("Found {} jobs.", self.job_count));
        Ok(self.workflow)
    }

    fn declare_job(&mut self, name: &str, submit_file: &str, diag: &mut dyn Diagnostics) {
        if let Some(&(_, first_line)) = self.index.get(name) {
            match self.options.duplicates {
                DuplicatePolicy::Reject => {
                    self.errors.push(DagError::DuplicateJob {
                        line: self.line_no,
                        name: name.to_string(),
                        first_line,
                    });
                    return;
                }
                DuplicatePolicy::FirstWins => diag.warn(&format!(
                    "line {}: job '{}' redeclared (first declared on line {}); edges attach to the first",
                    self.line_no, name, first_line
                )),
            }
        } else {
            self.index
                .insert(name.to_string(), (self.workflow.jobs.len(), self.line_no));
        }

        self.job_count += 1;
        self.workflow.jobs.push(Job::new(name, submit_file));
    }

    fn attach_parent(&mut self, parent: &str, child: &str) {
        match self.index.get(child) {
            Some(&(pos, _)) if self.pending.is_empty() => {
                self.workflow.jobs[pos].parents.push(parent.to_string());
            }
            _ => self.pending.push((parent.to_string(), child.to_string())),
        }
    }

    /// Attach edges that arrived before their child, keeping file order per child.
    /// Children that were never declared drop their edges.
    fn resolve_pending(&mut self) {
        for (parent, child) in self.pending.drain(..) {
            if let Some(&(pos, _)) = self.index.get(&child) {
                self.workflow.jobs[pos].parents.push(parent);
            }
        }
    }
}
