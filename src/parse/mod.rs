//! Parse phase: DAG text → `Workflow`.

pub mod builder;
pub mod record;
pub mod types;

pub use builder::{DuplicatePolicy, GraphBuilder, MalformedPolicy, ParseOptions};
pub use types::*;

use crate::diagnostics::{Diagnostics, Silent};
use crate::error::DagError;

/// Parse a DAG document with default options and no diagnostics.
pub fn parse(input: &str) -> Result<Workflow, Vec<DagError>> {
    parse_with(input, &ParseOptions::default(), &mut Silent)
}

/// Parse a DAG document, reporting through `diag`.
pub fn parse_with(
    input: &str,
    options: &ParseOptions,
    diag: &mut dyn Diagnostics,
) -> Result<Workflow, Vec<DagError>> {
    let mut builder = GraphBuilder::new(*options);
    for line in input.lines() {
        builder.push_line(line, diag);
    }
    builder.finish(diag)
}
