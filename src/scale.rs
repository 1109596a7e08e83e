#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, path::Path};

use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{constants::MAX_GRADE_POINT, engine::SubjectRecord, error::CgpaError};

/// Grade symbols and points used when no scale file is configured.
pub const DEFAULT_SCALE: [(&str, u8); 8] = [
    ("O", 10),
    ("A+", 9),
    ("A", 8),
    ("B+", 7),
    ("B", 6),
    ("C", 5),
    ("P", 4),
    ("F", 0),
];

#[derive(Tabled, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One letter grade and the grade point it is worth
pub struct GradeEntry {
    /// * `grade`: the letter grade symbol
    #[tabled(rename = "Grade")]
    grade: String,
    /// * `point`: grade point, 0..=10
    #[tabled(rename = "Grade Point")]
    point: u8,
}

impl GradeEntry {
    /// Returns the grade symbol.
    pub fn grade(&self) -> &str {
        &self.grade
    }

    /// Returns the grade point.
    pub fn point(&self) -> u8 {
        self.point
    }
}

/// Shape of a scale file entry before validation.
#[derive(Deserialize)]
struct RawGradeEntry {
    /// Grade symbol as written in the file.
    grade: String,
    /// Unchecked grade point.
    point: i64,
}

/// Mapping from letter grade symbols to grade points.
///
/// Symbols keep the order they were defined in, which is the order they are
/// listed and offered in. A scale is immutable once built.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct GradeScale {
    /// Entries in definition order
    entries: Vec<GradeEntry>,
}

impl Default for GradeScale {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SCALE
                .iter()
                .map(|(grade, point)| GradeEntry {
                    grade: (*grade).to_string(),
                    point: *point,
                })
                .collect(),
        }
    }
}

impl GradeScale {
    /// Builds a scale from `(symbol, point)` pairs.
    ///
    /// Symbols are trimmed. Fails on empty symbols, duplicates, points above
    /// ten, or when no pairs are given.
    pub fn new<I, S>(pairs: I) -> Result<Self, CgpaError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut entries: Vec<GradeEntry> = Vec::new();

        for (grade, point) in pairs {
            let grade = grade.into().trim().to_string();
            if grade.is_empty() {
                return Err(CgpaError::EmptyScale);
            }
            if !(0..=i64::from(MAX_GRADE_POINT)).contains(&point) {
                return Err(CgpaError::GradePointOutOfRange { grade, point });
            }
            if entries.iter().any(|e| e.grade == grade) {
                return Err(CgpaError::DuplicateGrade(grade));
            }
            entries.push(GradeEntry {
                grade,
                point: point as u8,
            });
        }

        if entries.is_empty() {
            return Err(CgpaError::EmptyScale);
        }

        Ok(Self { entries })
    }

    /// Parses a scale from JSON: `[{"grade": "O", "point": 10}, ...]`
    pub fn from_json(json: &str) -> Result<Self, CgpaError> {
        let raw: Vec<RawGradeEntry> = serde_json::from_str(json)?;
        Self::new(raw.into_iter().map(|r| (r.grade, r.point)))
    }

    /// Reads a JSON scale file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read grade scale file {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Invalid grade scale in {}", path.display()))
    }

    /// Returns the grade point for `grade`, if the symbol is on the scale.
    pub fn point(&self, grade: &str) -> Option<u8> {
        let grade = grade.trim();
        self.entries
            .iter()
            .find(|e| e.grade == grade)
            .map(|e| e.point)
    }

    /// Returns the grade point for `grade`, scoring unknown symbols as zero.
    pub fn point_or_zero(&self, grade: &str) -> u8 {
        self.point(grade).unwrap_or(0)
    }

    /// Whether `grade` is on the scale.
    pub fn contains(&self, grade: &str) -> bool {
        self.point(grade).is_some()
    }

    /// Fails with [`CgpaError::UnknownGrade`] for the first record whose
    /// grade is not on the scale.
    pub fn check_known(&self, records: &[SubjectRecord]) -> Result<(), CgpaError> {
        match records
            .iter()
            .enumerate()
            .find(|(_, r)| !self.contains(&r.grade))
        {
            Some((i, record)) => Err(CgpaError::UnknownGrade {
                index: i + 1,
                grade: record.grade.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Grade symbols in definition order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(GradeEntry::grade)
    }

    /// All entries in definition order.
    pub fn entries(&self) -> &[GradeEntry] {
        &self.entries
    }
}

impl Display for GradeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.entries
                .iter()
                .map(|e| format!("{}={}", e.grade, e.point))
                .join(", ")
        )
    }
}
