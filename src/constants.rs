#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Highest grade point any grade symbol may be worth
pub const MAX_GRADE_POINT: u8 = 10;

/// CGPA at or above which a result is no longer "needs improvement"
pub const GOOD_THRESHOLD: f64 = 7.5;

/// CGPA at or above which a result is "excellent"
pub const EXCELLENT_THRESHOLD: f64 = 9.0;

/// Number of cells in the text progress bar
pub const PROGRESS_BAR_WIDTH: usize = 30;

/// Environment variable pointing at a JSON grade scale file.
pub const SCALE_FILE_ENV: &str = "CGPA_SCALE_FILE";

/// Environment variable that switches unknown grades from zero to an error.
pub const STRICT_GRADES_ENV: &str = "CGPA_STRICT_GRADES";

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "CGPA_LOG";

/// How the CGPA is worked out, shown under every result
pub const CALCULATION_NOTE: &str = "How CGPA is calculated:
- CGPA = Total Points / Total Credits
- Total Points = Sum of (Grade Point x Credits) for all subjects
- Total Credits = Sum of credits for all subjects
- Grade Point is assigned based on the letter grade you entered.";
