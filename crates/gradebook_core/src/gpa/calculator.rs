//! Credit-weighted GPA calculator.
//!
//! # Responsibility
//! - Overall GPA: `sum(score * credits) / sum(credits)`.
//! - Single-semester GPA by exact, case-sensitive label match.
//! - All-semester view grouped by first appearance of each label.
//!
//! # Invariants
//! - Record order never changes a result.
//! - Inputs are assumed store-validated (`credits > 0`), so a non-empty
//!   input always has a positive denominator.

use crate::model::course::CourseRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Decimal places kept in every reported GPA.
pub const GPA_DECIMALS: i32 = 2;

// Absorbs binary representation error so decimal halves round up.
const ROUNDING_NUDGE: f64 = 1e-9;

/// GPA computation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpaError {
    /// No course matched. `semester` is set for semester-scoped requests.
    NoData { semester: Option<String> },
}

impl Display for GpaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData { semester: None } => write!(f, "no courses to compute GPA"),
            Self::NoData {
                semester: Some(semester),
            } => write!(f, "no courses found for semester '{semester}'"),
        }
    }
}

impl Error for GpaError {}

pub type GpaResult<T> = Result<T, GpaError>;

/// Overall GPA with the totals it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct GpaSummary {
    pub gpa: f64,
    pub total_credits: u64,
    pub course_count: usize,
}

/// GPA of one semester group.
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterGpa {
    pub semester: String,
    pub gpa: f64,
    pub total_credits: u64,
    pub course_count: usize,
}

/// Rounds to [`GPA_DECIMALS`] places, half-up.
pub fn round_gpa(value: f64) -> f64 {
    let factor = 10_f64.powi(GPA_DECIMALS);
    ((value * factor) + ROUNDING_NUDGE).round() / factor
}

/// Weighted GPA of all given records.
///
/// # Errors
/// - `NoData { semester: None }` when `records` is empty.
pub fn weighted_gpa<'a, I>(records: I) -> GpaResult<f64>
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    summarize(records).map(|summary| summary.gpa)
}

/// Weighted GPA plus credit and course totals.
pub fn summarize<'a, I>(records: I) -> GpaResult<GpaSummary>
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let totals = records
        .into_iter()
        .fold(Totals::default(), |totals, record| totals.with(record));
    totals
        .summary()
        .ok_or(GpaError::NoData { semester: None })
}

/// Weighted GPA of the records whose semester equals `semester` exactly.
///
/// Matching is case-sensitive: `"Fall 2024"` does not match `"fall 2024"`.
///
/// # Errors
/// - `NoData { semester: Some(..) }` when no record matches.
pub fn semester_gpa<'a, I>(records: I, semester: &str) -> GpaResult<f64>
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let totals = records
        .into_iter()
        .filter(|record| record.semester == semester)
        .fold(Totals::default(), |totals, record| totals.with(record));
    totals
        .summary()
        .map(|summary| summary.gpa)
        .ok_or_else(|| GpaError::NoData {
            semester: Some(semester.to_string()),
        })
}

/// GPA of every semester, ordered by first appearance of the label.
///
/// Returns an empty vector for empty input.
pub fn all_semester_gpas<'a, I>(records: I) -> Vec<SemesterGpa>
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    let mut groups: Vec<(&str, Totals)> = Vec::new();
    for record in records {
        match groups
            .iter_mut()
            .find(|(semester, _)| *semester == record.semester)
        {
            Some((_, totals)) => *totals = totals.with(record),
            None => groups.push((record.semester.as_str(), Totals::default().with(record))),
        }
    }

    groups
        .into_iter()
        .filter_map(|(semester, totals)| {
            totals.summary().map(|summary| SemesterGpa {
                semester: semester.to_string(),
                gpa: summary.gpa,
                total_credits: summary.total_credits,
                course_count: summary.course_count,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    weighted: f64,
    credits: u64,
    count: usize,
}

impl Totals {
    fn with(self, record: &CourseRecord) -> Self {
        Self {
            weighted: self.weighted + record.weighted_score(),
            credits: self.credits + u64::from(record.credits),
            count: self.count + 1,
        }
    }

    fn summary(self) -> Option<GpaSummary> {
        if self.count == 0 || self.credits == 0 {
            return None;
        }
        Some(GpaSummary {
            gpa: round_gpa(self.weighted / self.credits as f64),
            total_credits: self.credits,
            course_count: self.count,
        })
    }
}
