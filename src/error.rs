#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use thiserror::Error;

/// Errors raised while building a grade scale, collecting subject records,
/// or asking the engine for a CGPA that does not exist.
#[derive(Debug, Error)]
pub enum CgpaError {
    /// No credits were entered, so there is no CGPA to report.
    #[error("No credits entered.")]
    EmptyCredits,
    /// A grade symbol that is not part of the active grade scale.
    #[error("Subject {index} has grade `{grade}`, which is not on the grade scale.")]
    UnknownGrade {
        /// 1-based position of the subject.
        index: usize,
        /// The unrecognized symbol as entered.
        grade: String,
    },
    /// Credits were not a whole number of at least 1.
    #[error("Invalid credits in `{entry}`: {reason}")]
    InvalidCredits {
        /// The offending entry.
        entry:  String,
        /// Why it was rejected.
        reason: String,
    },
    /// An entry that does not look like `GRADE:CREDITS`.
    #[error("Could not read `{0}` as GRADE:CREDITS (for example `A+:4`).")]
    MalformedEntry(String),
    /// A grade scale value outside of 0..=10.
    #[error("Grade `{grade}` maps to {point}, grade points must be between 0 and 10.")]
    GradePointOutOfRange {
        /// Symbol being defined.
        grade: String,
        /// The rejected value.
        point: i64,
    },
    /// The same grade symbol was defined twice.
    #[error("Grade `{0}` is defined more than once.")]
    DuplicateGrade(String),
    /// A grade scale with an empty symbol or no symbols at all.
    #[error("A grade scale needs at least one non-empty grade symbol.")]
    EmptyScale,
    /// Input ended before every subject was entered.
    #[error("Input ended before all subjects were entered.")]
    InputClosed,
    /// Reading or writing the terminal failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A grade scale file could not be (de)serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
