//! Line-level record recognition for the DAGMan job-control grammar.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Job,
    Parent,
}

impl RecordKind {
    pub fn keyword(self) -> &'static str {
        match self {
            RecordKind::Job => "JOB",
            RecordKind::Parent => "PARENT",
        }
    }

    /// Fields (keyword included) the record must carry.
    pub fn min_fields(self) -> usize {
        match self {
            RecordKind::Job => 3,
            RecordKind::Parent => 4,
        }
    }

    fn from_keyword(token: &str) -> Option<Self> {
        match token {
            "JOB" => Some(RecordKind::Job),
            "PARENT" => Some(RecordKind::Parent),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// `JOB <name> <submit-file> ...`
    Job { name: &'a str, submit_file: &'a str },
    /// `PARENT <parent> <separator> <child> ...`
    Parent { parent: &'a str, child: &'a str },
    /// Comments, blank lines and every other DAGMan keyword.
    Ignored,
}

/// A recognized record with too few fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncated {
    pub kind: RecordKind,
    pub found: usize,
}

impl<'a> Record<'a> {
    pub fn recognize(line: &'a str) -> Result<Record<'a>, Truncated> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some(kind) = fields.first().and_then(|t| RecordKind::from_keyword(t)) else {
            return Ok(Record::Ignored);
        };

        if fields.len() < kind.min_fields() {
            return Err(Truncated {
                kind,
                found: fields.len(),
            });
        }

        Ok(match kind {
            RecordKind::Job => Record::Job {
                name: fields[1],
                submit_file: fields[2],
            },
            // fields[2] is the CHILD separator and is not checked.
            RecordKind::Parent => Record::Parent {
                parent: fields[1],
                child: fields[3],
            },
        })
    }
}
