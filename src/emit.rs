//! Emit phase: `Workflow` → pretty-printed JSON trace.
//!
//! serde_json's pretty formatter indents with two spaces and separates keys
//! with `": "`, which is the layout downstream tooling compares against.

use std::io::Write;

use crate::parse::types::Workflow;

pub fn to_json(workflow: &Workflow) -> serde_json::Result<String> {
    serde_json::to_string_pretty(workflow)
}

/// Write the trace to `writer` without a trailing newline.
pub fn write_json<W: Write>(workflow: &Workflow, mut writer: W) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, workflow)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::types::Job;

    #[test]
    fn empty_workflow() {
        let json = to_json(&Workflow::new()).unwrap();
        assert_eq!(json, "{\n  \"workflow_id\": \"TO_BE_PROVIDED\",\n  \"jobs\": []\n}");
    }

    #[test]
    fn job_keys_in_fixed_order() {
        let mut wf = Workflow::new();
        let mut job = Job::new("cleanup_0", "cleanup_0.sub");
        job.parents = vec!["b".into(), "a".into()];
        wf.jobs.push(job);

        let expected = r#"{
  "workflow_id": "TO_BE_PROVIDED",
  "jobs": [
    {
      "name": "cleanup_0",
      "type": "auxiliary",
      "submit_file": "cleanup_0.sub",
      "parents": [
        "b",
        "a"
      ]
    }
  ]
}"#;
        assert_eq!(to_json(&wf).unwrap(), expected);
    }

    #[test]
    fn writer_matches_string_form() {
        let mut wf = Workflow::new();
        wf.jobs.push(Job::new("a", "a.sub"));

        let mut buf = Vec::new();
        write_json(&wf, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), to_json(&wf).unwrap());
    }
}
