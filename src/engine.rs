#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The CGPA engine: a single pass over subject records producing a
//! per-subject breakdown and the aggregate.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{error::CgpaError, scale::GradeScale};

#[derive(Serialize, Deserialize, TypedBuilder, Clone, Debug, PartialEq, Eq)]
/// One subject as entered: a letter grade and its credit hours
pub struct SubjectRecord {
    /// * `grade`: letter grade symbol
    #[builder(setter(into))]
    pub grade:   String,
    /// * `credits`: credit hours, at least 1 once past the input boundary
    pub credits: u32,
}

impl SubjectRecord {
    /// Creates a new record.
    pub fn new(grade: impl Into<String>, credits: u32) -> Self {
        Self {
            grade: grade.into(),
            credits,
        }
    }
}

/// What to do with a grade symbol that is not on the scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownGradePolicy {
    /// Score it as grade point 0 and flag the subject.
    #[default]
    ScoreZero,
    /// Fail with [`CgpaError::UnknownGrade`].
    Reject,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A subject after grading
pub struct SubjectResult {
    /// 1-based position in the input
    pub index:       usize,
    /// Grade symbol as entered
    pub grade:       String,
    /// Credit hours
    pub credits:     u32,
    /// Grade point looked up from the scale
    pub grade_point: u8,
    /// `grade_point * credits`
    pub points:      u64,
    /// False when the grade was not on the scale and was scored as zero
    pub recognized:  bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Totals over all subjects
pub struct AggregateResult {
    /// Sum of credits
    pub total_credits: u64,
    /// Sum of points
    pub total_points:  u64,
    /// `total_points / total_credits`, unrounded; `None` when no credits were
    /// entered
    pub cgpa:          Option<f64>,
}

impl AggregateResult {
    /// Builds the aggregate from exact totals.
    fn from_totals(total_credits: u64, total_points: u64) -> Self {
        let cgpa = if total_credits == 0 {
            None
        } else {
            Some(total_points as f64 / total_credits as f64)
        };

        Self {
            total_credits,
            total_points,
            cgpa,
        }
    }

    /// Returns the CGPA, or [`CgpaError::EmptyCredits`] when it is undefined.
    pub fn require_cgpa(&self) -> Result<f64, CgpaError> {
        self.cgpa.ok_or(CgpaError::EmptyCredits)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Per-subject results in input order, plus the aggregate
pub struct Breakdown {
    /// One entry per input record
    pub subjects:  Vec<SubjectResult>,
    /// Totals and CGPA
    pub aggregate: AggregateResult,
}

impl Breakdown {
    /// Shorthand for `self.aggregate.cgpa`.
    pub fn cgpa(&self) -> Option<f64> {
        self.aggregate.cgpa
    }

    /// Subjects whose grade was not on the scale.
    pub fn unrecognized(&self) -> impl Iterator<Item = &SubjectResult> {
        self.subjects.iter().filter(|s| !s.recognized)
    }
}

/// Computes the breakdown, scoring grades missing from `scale` as zero.
pub fn compute_breakdown(records: &[SubjectRecord], scale: &GradeScale) -> Breakdown {
    let mut subjects = Vec::with_capacity(records.len());
    let mut total_credits: u64 = 0;
    let mut total_points: u64 = 0;

    for (i, record) in records.iter().enumerate() {
        let index = i + 1;
        let found = scale.point(&record.grade);
        if found.is_none() {
            tracing::warn!(
                "Subject {index}: grade `{}` is not on the grade scale, scoring it as 0",
                record.grade
            );
        }

        let grade_point = found.unwrap_or(0);
        let points = u64::from(grade_point) * u64::from(record.credits);

        total_credits += u64::from(record.credits);
        total_points += points;

        subjects.push(SubjectResult {
            index,
            grade: record.grade.clone(),
            credits: record.credits,
            grade_point,
            points,
            recognized: found.is_some(),
        });
    }

    let aggregate = AggregateResult::from_totals(total_credits, total_points);
    tracing::debug!(
        "{} subjects: {total_points} points over {total_credits} credits",
        subjects.len()
    );

    Breakdown {
        subjects,
        aggregate,
    }
}

/// Computes the breakdown with an explicit unknown-grade policy.
pub fn compute_breakdown_with(
    records: &[SubjectRecord],
    scale: &GradeScale,
    policy: UnknownGradePolicy,
) -> Result<Breakdown, CgpaError> {
    if policy == UnknownGradePolicy::Reject {
        scale.check_known(records)?;
    }

    Ok(compute_breakdown(records, scale))
}
