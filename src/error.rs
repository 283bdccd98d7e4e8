//! Error type shared by the parse phase and its entry points.

use thiserror::Error;

use crate::parse::record::RecordKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DagError {
    /// A `JOB` or `PARENT` line carries fewer fields than the record needs.
    #[error("[D001] line {line}: {kind} record needs at least {expected} fields, found {found}")]
    MalformedRecord {
        line: usize,
        kind: RecordKind,
        expected: usize,
        found: usize,
    },

    /// A job name was declared more than once and duplicates are rejected.
    #[error("[D002] line {line}: job '{name}' was already declared on line {first_line}")]
    DuplicateJob {
        line: usize,
        name: String,
        first_line: usize,
    },
}

impl DagError {
    pub fn code(&self) -> &'static str {
        match self {
            DagError::MalformedRecord { .. } => "D001",
            DagError::DuplicateJob { .. } => "D002",
        }
    }

    /// 1-based line number of the offending record.
    pub fn line(&self) -> usize {
        match self {
            DagError::MalformedRecord { line, .. } | DagError::DuplicateJob { line, .. } => *line,
        }
    }

    pub fn malformed(line: usize, kind: RecordKind, found: usize) -> Self {
        DagError::MalformedRecord {
            line,
            kind,
            expected: kind.min_fields(),
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_names_line_and_counts() {
        let err = DagError::malformed(7, RecordKind::Parent, 2);
        assert_eq!(err.code(), "D001");
        assert_eq!(err.line(), 7);
        assert_eq!(
            err.to_string(),
            "[D001] line 7: PARENT record needs at least 4 fields, found 2"
        );
    }

    #[test]
    fn duplicate_display() {
        let err = DagError::DuplicateJob {
            line: 9,
            name: "ID0001".into(),
            first_line: 3,
        };
        assert_eq!(err.code(), "D002");
        assert_eq!(
            err.to_string(),
            "[D002] line 9: job 'ID0001' was already declared on line 3"
        );
    }
}
