//! The emitted trace must be byte-identical to what existing tooling consumes.

use dag_parser::emit;
use dag_parser::parse::{self, Workflow};

#[test]
fn simple_matches_reference_trace() {
    let workflow = parse::parse(include_str!("fixtures/simple.dag")).unwrap();
    let json = emit::to_json(&workflow).unwrap();
    assert_eq!(json, include_str!("fixtures/simple.json").trim_end());
}

#[test]
fn blackdiamond_matches_reference_trace() {
    let workflow = parse::parse(include_str!("fixtures/blackdiamond.dag")).unwrap();
    let json = emit::to_json(&workflow).unwrap();
    assert_eq!(json, include_str!("fixtures/blackdiamond.json").trim_end());
}

#[test]
fn simple_snapshot() {
    let workflow = parse::parse(include_str!("fixtures/simple.dag")).unwrap();
    insta::assert_snapshot!(emit::to_json(&workflow).unwrap(), @r#"
    {
      "workflow_id": "TO_BE_PROVIDED",
      "jobs": [
        {
          "name": "create_dir_A",
          "type": "auxiliary",
          "submit_file": "create_dir_A.sub",
          "parents": []
        },
        {
          "name": "stage_in_B",
          "type": "transfer",
          "submit_file": "stage_in_B.sub",
          "parents": []
        },
        {
          "name": "compute_C",
          "type": "compute",
          "submit_file": "compute_C.sub",
          "parents": [
            "create_dir_A",
            "stage_in_B"
          ]
        }
      ]
    }
    "#);
}

#[test]
fn trace_reads_back() {
    let workflow = parse::parse(include_str!("fixtures/blackdiamond.dag")).unwrap();
    let json = emit::to_json(&workflow).unwrap();
    let back: Workflow = serde_json::from_str(&json).unwrap();
    assert_eq!(back, workflow);
}
