use crate::{RecordType, ZoneTag};
use std::fmt;

/// What the nameserver actually answered, as shown in a mismatch line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observed {
    /// Every answer of the queried type, rendered as `['a', 'b']`.
    Set(Vec<String>),
    /// A single answer, rendered as-is.
    Record(String),
}

impl fmt::Display for Observed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observed::Set(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{}'", value)?;
                }
                f.write_str("]")
            }
            Observed::Record(value) => f.write_str(value),
        }
    }
}

/// One line of the check report.
///
/// `Display` yields the exact text printed for the finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckFinding {
    UnknownType {
        line: String,
    },
    Malformed {
        tag: ZoneTag,
        line: String,
    },
    /// Any resolver error. Timeouts, NXDOMAIN and SERVFAIL all end up here.
    QueryFailed {
        check: RecordType,
        name: String,
    },
    Mismatch {
        check: RecordType,
        subject: String,
        expected: String,
        observed: Observed,
    },
}

impl CheckFinding {
    pub fn query_failed(check: RecordType, name: impl Into<String>) -> Self {
        CheckFinding::QueryFailed {
            check,
            name: name.into(),
        }
    }

    pub fn mismatch(
        check: RecordType,
        subject: impl Into<String>,
        expected: impl Into<String>,
        observed: Observed,
    ) -> Self {
        CheckFinding::Mismatch {
            check,
            subject: subject.into(),
            expected: expected.into(),
            observed,
        }
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, CheckFinding::Mismatch { .. })
    }

    pub fn is_query_failure(&self) -> bool {
        matches!(self, CheckFinding::QueryFailed { .. })
    }
}

impl fmt::Display for CheckFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckFinding::UnknownType { line } => write!(f, "Unknown Type: {}", line),
            CheckFinding::Malformed { tag, line } => {
                write!(
                    f,
                    "Malformed line: {} (tag '{}' needs {} fields)",
                    line,
                    tag,
                    tag.required_fields()
                )
            }
            CheckFinding::QueryFailed { check, name } => {
                write!(f, "{} check for {} failed.", check, name)
            }
            CheckFinding::Mismatch {
                check,
                subject,
                expected,
                observed,
            } => write!(
                f,
                "{}: '{}' should be '{}' but is '{}'",
                check, subject, expected, observed
            ),
        }
    }
}
