//! Course record domain model.
//!
//! # Responsibility
//! - Define the canonical graded-course record and its partial-update shape.
//! - Own field-level validation shared by store writes and persistence reads.
//!
//! # Invariants
//! - `code`, `name` and `semester` are non-empty after trimming.
//! - `credits > 0`.
//! - `score` is finite and within `0..=10`.
//! - Validation never rewrites field values.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest accepted score on the fixed grading scale.
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted score on the fixed grading scale.
pub const MAX_SCORE: f64 = 10.0;

/// Field names used when reporting validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Code,
    Name,
    Credits,
    Semester,
    Score,
}

impl CourseField {
    /// Stable lowercase field name, matching the serialized key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Name => "name",
            Self::Credits => "credits",
            Self::Semester => "semester",
            Self::Score => "score",
        }
    }
}

impl Display for CourseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for course record invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseValidationError {
    /// A text field is empty or whitespace-only.
    Blank { field: CourseField },
    /// Credits must be strictly positive.
    NonPositiveCredits { credits: u32 },
    /// Score is NaN, infinite, or outside `0..=10`.
    ScoreOutOfRange { score: f64 },
}

impl CourseValidationError {
    /// Returns the field that violated its constraint.
    pub fn field(&self) -> CourseField {
        match self {
            Self::Blank { field } => *field,
            Self::NonPositiveCredits { .. } => CourseField::Credits,
            Self::ScoreOutOfRange { .. } => CourseField::Score,
        }
    }
}

impl Display for CourseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank { field } => write!(f, "{field} must not be empty"),
            Self::NonPositiveCredits { credits } => {
                write!(f, "credits must be a positive integer, got {credits}")
            }
            Self::ScoreOutOfRange { score } => write!(
                f,
                "score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
            ),
        }
    }
}

impl Error for CourseValidationError {}

/// One graded course.
///
/// Deserialization runs [`CourseRecord::validate`], so persisted data can
/// never produce a record that the store would refuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CourseRecordWire")]
pub struct CourseRecord {
    /// Unique course code, the store primary key.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Credit-hours used as the GPA weight.
    pub credits: u32,
    /// Semester label used for grouping.
    pub semester: String,
    /// Grade on the 0-10 scale.
    pub score: f64,
}

/// Serialized input shape. Accepts the legacy `course_code`/`course_name`
/// keys written by earlier gradebook files.
#[derive(Deserialize)]
struct CourseRecordWire {
    #[serde(alias = "course_code")]
    code: String,
    #[serde(alias = "course_name")]
    name: String,
    credits: u32,
    semester: String,
    score: f64,
}

impl TryFrom<CourseRecordWire> for CourseRecord {
    type Error = CourseValidationError;

    fn try_from(wire: CourseRecordWire) -> Result<Self, Self::Error> {
        let record = Self {
            code: wire.code,
            name: wire.name,
            credits: wire.credits,
            semester: wire.semester,
            score: wire.score,
        };
        record.validate()?;
        Ok(record)
    }
}

impl CourseRecord {
    /// Builds a record without validating it.
    ///
    /// Store writes validate; use [`CourseRecord::validate`] directly when a
    /// check is needed outside the store.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        credits: u32,
        semester: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits,
            semester: semester.into(),
            score,
        }
    }

    /// Checks every field invariant, reporting the first violation in field
    /// declaration order.
    pub fn validate(&self) -> Result<(), CourseValidationError> {
        require_text(&self.code, CourseField::Code)?;
        require_text(&self.name, CourseField::Name)?;
        if self.credits == 0 {
            return Err(CourseValidationError::NonPositiveCredits {
                credits: self.credits,
            });
        }
        require_text(&self.semester, CourseField::Semester)?;
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.score) {
            return Err(CourseValidationError::ScoreOutOfRange { score: self.score });
        }
        Ok(())
    }

    /// Weighted contribution of this course (`score * credits`).
    pub fn weighted_score(&self) -> f64 {
        self.score * f64::from(self.credits)
    }
}

/// Partial update for an existing course. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseChanges {
    pub code: Option<String>,
    pub name: Option<String>,
    pub credits: Option<u32>,
    pub semester: Option<String>,
    pub score: Option<f64>,
}

impl CourseChanges {
    /// Returns whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.name.is_none()
            && self.credits.is_none()
            && self.semester.is_none()
            && self.score.is_none()
    }

    /// Produces the merged record without touching `current`.
    pub fn apply_to(&self, current: &CourseRecord) -> CourseRecord {
        CourseRecord {
            code: self.code.clone().unwrap_or_else(|| current.code.clone()),
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            credits: self.credits.unwrap_or(current.credits),
            semester: self
                .semester
                .clone()
                .unwrap_or_else(|| current.semester.clone()),
            score: self.score.unwrap_or(current.score),
        }
    }
}

fn require_text(value: &str, field: CourseField) -> Result<(), CourseValidationError> {
    if value.trim().is_empty() {
        return Err(CourseValidationError::Blank { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CourseChanges, CourseField, CourseRecord, CourseValidationError};

    #[test]
    fn apply_to_keeps_unset_fields() {
        let current = CourseRecord::new("CS101", "Intro", 3, "S1", 8.0);
        let changes = CourseChanges {
            score: Some(9.5),
            ..CourseChanges::default()
        };

        let merged = changes.apply_to(&current);
        assert_eq!(merged.code, "CS101");
        assert_eq!(merged.credits, 3);
        assert_eq!(merged.score, 9.5);
    }

    #[test]
    fn validate_reports_first_failing_field() {
        let record = CourseRecord::new(" ", "", 0, "S1", 11.0);
        assert_eq!(
            record.validate().unwrap_err(),
            CourseValidationError::Blank {
                field: CourseField::Code
            }
        );
    }

    #[test]
    fn nan_score_is_out_of_range() {
        let record = CourseRecord::new("CS101", "Intro", 3, "S1", f64::NAN);
        let err = record.validate().unwrap_err();
        assert_eq!(err.field(), CourseField::Score);
    }
}
