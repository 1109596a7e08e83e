#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Rendering a [`Breakdown`] for people (tables and a summary) and for
//! machines (JSON).

use std::fmt::Write;

use anyhow::Result;
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{
    band::Band,
    constants::{CALCULATION_NOTE, MAX_GRADE_POINT, PROGRESS_BAR_WIDTH},
    engine::{Breakdown, SubjectResult},
    scale::GradeScale,
};

#[derive(Tabled)]
/// A table row for one subject
struct SubjectRow {
    /// * `index`: 1-based subject number
    #[tabled(rename = "Subject")]
    index:       usize,
    /// * `grade`: grade as entered
    #[tabled(rename = "Grade")]
    grade:       String,
    /// * `credits`: credit hours
    #[tabled(rename = "Credits")]
    credits:     u32,
    /// * `grade_point`: looked up grade point, `?` marks a grade not on the
    ///   scale
    #[tabled(rename = "Grade Point")]
    grade_point: String,
    /// * `points`: grade point times credits
    #[tabled(rename = "Points")]
    points:      u64,
}

impl From<&SubjectResult> for SubjectRow {
    fn from(s: &SubjectResult) -> Self {
        Self {
            index:       s.index,
            grade:       s.grade.clone(),
            credits:     s.credits,
            grade_point: if s.recognized {
                s.grade_point.to_string()
            } else {
                format!("{} ?", s.grade_point)
            },
            points:      s.points,
        }
    }
}

/// Fraction of the progress bar to fill, `min(cgpa / 10, 1.0)`.
pub fn progress_fraction(cgpa: f64) -> f64 {
    (cgpa / f64::from(MAX_GRADE_POINT)).clamp(0.0, 1.0)
}

/// A text progress bar of [`PROGRESS_BAR_WIDTH`] cells.
pub fn progress_bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(PROGRESS_BAR_WIDTH - filled))
}

/// The per-subject table.
pub fn render_table(breakdown: &Breakdown) -> String {
    let rows: Vec<SubjectRow> = breakdown.subjects.iter().map(SubjectRow::from).collect();

    Table::new(rows)
        .with(Panel::header("Calculation Details"))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Modify::new(Rows::new(1..)).with(Alignment::center()))
        .with(Style::modern())
        .to_string()
}

/// Totals, the CGPA with its progress bar and band message, and how it was
/// calculated.
pub fn render_summary(breakdown: &Breakdown) -> String {
    let aggregate = &breakdown.aggregate;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{} {}", "Total Credits:".cyan().bold(), aggregate.total_credits);
    let _ = writeln!(out, "{} {}", "Total Points:".cyan().bold(), aggregate.total_points);

    let unrecognized = breakdown
        .unrecognized()
        .map(|s| format!("subject {} (`{}`)", s.index, s.grade))
        .join(", ");
    if !unrecognized.is_empty() {
        let _ = writeln!(
            out,
            "{} {unrecognized}",
            "Grades not on the scale were scored as 0:".yellow()
        );
    }

    let Some(cgpa) = aggregate.cgpa else {
        let _ = writeln!(out, "{}", "No credits entered.".yellow().bold());
        return out;
    };

    let band = Band::classify(cgpa);
    let _ = writeln!(out);
    let _ = writeln!(out, "{} {}", "Your CGPA is:".cyan().bold(), format!("{cgpa:.2}").bold());
    let _ = writeln!(
        out,
        "{} CGPA Progress: {cgpa:.2}/{MAX_GRADE_POINT}",
        progress_bar(progress_fraction(cgpa))
    );
    let _ = writeln!(out);
    let message = match band {
        Band::NeedsImprovement => band.message().yellow(),
        Band::Good => band.message().cyan(),
        Band::Excellent => band.message().green(),
    };
    let _ = writeln!(out, "{} {message}", band.icon());
    let _ = writeln!(out);
    let _ = writeln!(out, "{CALCULATION_NOTE}");

    out
}

/// Table followed by the summary.
pub fn render_report(breakdown: &Breakdown) -> String {
    format!("{}\n\n{}", render_table(breakdown), render_summary(breakdown))
}

/// JSON shape of a report
#[derive(Serialize)]
struct JsonReport<'a> {
    /// Subjects and aggregate
    #[serde(flatten)]
    breakdown: &'a Breakdown,
    /// Band of the CGPA, absent when there is no CGPA
    band:      Option<Band>,
}

/// The breakdown and its band as pretty printed JSON.
pub fn render_json(breakdown: &Breakdown) -> Result<String> {
    let report = JsonReport {
        breakdown,
        band: breakdown.cgpa().map(Band::classify),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// The grade scale as a table.
pub fn render_scale(scale: &GradeScale) -> String {
    Table::new(scale.entries())
        .with(Panel::header("Grade Scale"))
        .with(Modify::new(Rows::new(0..)).with(Alignment::center()))
        .with(Style::modern())
        .to_string()
}
