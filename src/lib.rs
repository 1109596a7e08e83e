//! # cgpa
//!
//! Computes a Cumulative Grade Point Average from letter grades and credit
//! hours, and renders the per-subject breakdown.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Classifying a CGPA into bands
pub mod band;
/// Environment and command line settings
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// The CGPA computation itself
pub mod engine;
/// Typed errors
pub mod error;
/// Collecting subject records
pub mod input;
/// Tables, summaries and JSON output
pub mod report;
/// Grade symbol to grade point mapping
pub mod scale;

pub use band::Band;
pub use config::Config;
pub use engine::{
    AggregateResult, Breakdown, SubjectRecord, SubjectResult, UnknownGradePolicy,
    compute_breakdown, compute_breakdown_with,
};
pub use error::CgpaError;
pub use scale::GradeScale;
