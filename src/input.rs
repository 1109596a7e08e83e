#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Collecting subject records from the command line, from files, and from an
//! interactive prompt. Credits below 1 never get past this module.

use std::{
    io::{BufRead, Write},
    path::Path,
};

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::{engine::SubjectRecord, error::CgpaError, scale::GradeScale};

/// Characters accepted between a grade and its credits.
const SEPARATORS: [char; 3] = [':', ',', '='];

/// Parses credits, which must be a whole number of at least 1.
fn parse_credits(entry: &str, credits: &str) -> Result<u32, CgpaError> {
    let credits: u32 = credits.trim().parse().map_err(|_| CgpaError::InvalidCredits {
        entry:  entry.to_string(),
        reason: format!("`{}` is not a whole number", credits.trim()),
    })?;

    if credits < 1 {
        return Err(CgpaError::InvalidCredits {
            entry:  entry.to_string(),
            reason: "credits must be at least 1".to_string(),
        });
    }

    Ok(credits)
}

/// Parses one `GRADE:CREDITS` entry, eg. `B+:3`, `A,4` or `O=2`.
pub fn parse_entry(entry: &str) -> Result<SubjectRecord, CgpaError> {
    let (grade, credits) = entry
        .split_once(SEPARATORS)
        .ok_or_else(|| CgpaError::MalformedEntry(entry.to_string()))?;

    let grade = grade.trim();
    if grade.is_empty() {
        return Err(CgpaError::MalformedEntry(entry.to_string()));
    }

    Ok(SubjectRecord::new(grade, parse_credits(entry, credits)?))
}

/// Parses every entry, in order.
///
/// * `strict`: reject grades that are not on `scale` here instead of letting
///   the engine score them as zero
pub fn collect_records<I, S>(
    entries: I,
    scale: &GradeScale,
    strict: bool,
) -> Result<Vec<SubjectRecord>, CgpaError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records: Vec<SubjectRecord> = entries
        .into_iter()
        .map(|e| parse_entry(e.as_ref()))
        .collect::<Result<_, _>>()?;

    if strict {
        scale.check_known(&records)?;
    }

    Ok(records)
}

/// Parses records from text, one entry per line. Blank lines and lines
/// starting with `#` are skipped.
pub fn parse_records(text: &str) -> Result<Vec<SubjectRecord>> {
    text.lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| parse_entry(line).with_context(|| format!("On line {n}")))
        .collect()
}

/// Reads a records file, see [`parse_records`].
pub fn read_records_file(path: &Path) -> Result<Vec<SubjectRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read records file {}", path.display()))?;
    parse_records(&text).with_context(|| format!("Invalid records in {}", path.display()))
}

/// Writes `prompt` and reads one trimmed line of the answer.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, CgpaError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CgpaError::InputClosed);
    }
    Ok(line.trim().to_string())
}

/// Asks until the answer is a whole number of at least 1.
fn ask_positive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<u32, CgpaError> {
    loop {
        let answer = ask(input, output, prompt)?;
        match answer.parse::<u32>() {
            Ok(n) if n >= 1 => return Ok(n),
            _ => {
                tracing::debug!("Rejected `{answer}` for `{prompt}`");
                writeln!(output, "Please enter a whole number of at least 1.")?;
            }
        }
    }
}

/// Interactive form: asks for the number of subjects, then a letter grade
/// and credits for each one. Invalid answers are asked again.
pub fn prompt_records<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    scale: &GradeScale,
) -> Result<Vec<SubjectRecord>, CgpaError> {
    let options = scale.symbols().join("/");
    let count = ask_positive(input, output, "Enter number of subjects: ")?;

    writeln!(output, "Enter details for each subject:")?;
    let mut records = Vec::new();

    for i in 1..=count {
        let grade = loop {
            let prompt = format!("Letter grade for subject {i} [{options}]: ");
            let grade = ask(input, output, &prompt)?;
            if scale.contains(&grade) {
                break grade;
            }
            writeln!(output, "`{grade}` is not one of {options}.")?;
        };
        let credits = ask_positive(input, output, &format!("Credits for subject {i}: "))?;

        records.push(SubjectRecord::new(grade, credits));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn parses_all_separators() {
        assert_eq!(parse_entry("B+:3").unwrap(), SubjectRecord::new("B+", 3));
        assert_eq!(parse_entry(" A , 4 ").unwrap(), SubjectRecord::new("A", 4));
        assert_eq!(parse_entry("O=2").unwrap(), SubjectRecord::new("O", 2));
    }

    #[test]
    fn rejects_credits_below_one() {
        assert!(matches!(parse_entry("A:0").unwrap_err(), CgpaError::InvalidCredits { .. }));
        assert!(matches!(parse_entry("A:-2").unwrap_err(), CgpaError::InvalidCredits { .. }));
        assert!(matches!(parse_entry("A:two").unwrap_err(), CgpaError::InvalidCredits { .. }));
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(matches!(parse_entry("A4").unwrap_err(), CgpaError::MalformedEntry(_)));
        assert!(matches!(parse_entry(":4").unwrap_err(), CgpaError::MalformedEntry(_)));
    }

    #[test]
    fn strict_collection_rejects_unknown_grades() {
        let scale = GradeScale::default();
        let lenient = collect_records(["A:3", "Q:2"], &scale, false).expect("lenient");
        assert_eq!(lenient.len(), 2);

        let err = collect_records(["A:3", "Q:2"], &scale, true).unwrap_err();
        assert!(matches!(err, CgpaError::UnknownGrade { index: 2, .. }));
    }

    #[test]
    fn records_text_skips_comments_and_reports_line_numbers() {
        let records = parse_records("# semester 1\nO:4\n\nA:3\n").expect("parse");
        assert_eq!(records, [SubjectRecord::new("O", 4), SubjectRecord::new("A", 3)]);

        let err = parse_records("O:4\nA:zero\n").unwrap_err();
        assert!(format!("{err:#}").contains("On line 2"));
    }

    #[test]
    fn prompt_asks_again_on_bad_answers() {
        let mut input = Cursor::new("0\n2\nZ\nO\n4\nB+\nnope\n2\n");
        let mut output = Vec::new();

        let records =
            prompt_records(&mut input, &mut output, &GradeScale::default()).expect("prompt");
        assert_eq!(records, [SubjectRecord::new("O", 4), SubjectRecord::new("B+", 2)]);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Please enter a whole number of at least 1.").count(), 2);
        assert!(output.contains("`Z` is not one of O/A+/A/B+/B/C/P/F."));
        assert!(output.contains("Credits for subject 2: "));
    }

    #[test]
    fn huge_subject_count_does_not_reserve_up_front() {
        let mut input = Cursor::new("4000000000\n");
        let mut output = Vec::new();
        let err = prompt_records(&mut input, &mut output, &GradeScale::default()).unwrap_err();
        assert!(matches!(err, CgpaError::InputClosed));
    }

    #[test]
    fn prompt_fails_when_input_ends_early() {
        let mut input = Cursor::new("2\nO\n4\n");
        let mut output = Vec::new();
        let err = prompt_records(&mut input, &mut output, &GradeScale::default()).unwrap_err();
        assert!(matches!(err, CgpaError::InputClosed));
    }
}
