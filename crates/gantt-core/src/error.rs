// File: crates/gantt-core/src/error.rs
// Summary: Error taxonomy for the planning pipeline.

use chrono::NaiveDate;
use thiserror::Error;

/// Result alias used across the core crate.
pub type GanttResult<T> = Result<T, GanttError>;

/// Which cell of an input row an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    WorkPackage,
    Activity,
    Start,
    End,
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Column::WorkPackage => "work_package",
            Column::Activity => "activity",
            Column::Start => "start",
            Column::End => "end",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GanttError {
    /// No row could be interpreted under the declared time mode.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A single cell could not be parsed although other rows could.
    #[error("row {row}: cannot parse {column} value '{value}'")]
    InvalidDate { row: usize, column: Column, value: String },

    /// A required text cell is blank.
    #[error("row {row}: {column} is empty")]
    MissingField { row: usize, column: Column },

    /// Normalized start falls after the normalized end.
    #[error("'{label}' starts {start} after it ends {end}")]
    InvertedSpan { label: String, start: NaiveDate, end: NaiveDate },

    /// Internal construction bug (e.g. a work package without activities).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Annotation points at an activity that is not drawn.
    #[error("annotation references unknown activity '{label}'")]
    UnmatchedReference { label: String },

    /// Layout or mode configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
