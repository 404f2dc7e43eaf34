//! Text rendering for gradebook views and errors.

use gradebook_core::{CourseRecord, GpaError, SemesterGpa, ServiceError, ServiceErrorKind};

/// Renders courses as a fixed-width table, or a notice when empty.
pub fn course_table(courses: &[CourseRecord]) -> String {
    if courses.is_empty() {
        return "No courses found.\n".to_string();
    }

    let header = format!(
        "{:<10} {:<30} {:<8} {:<10} {:<6}",
        "Code", "Name", "Credits", "Semester", "Score"
    );
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');
    for course in courses {
        out.push_str(&format!(
            "{:<10} {:<30} {:<8} {:<10} {:<6.2}\n",
            course.code, course.name, course.credits, course.semester, course.score
        ));
    }
    out
}

/// Semester lines sorted by label.
pub fn semester_lines(gpas: &[SemesterGpa]) -> String {
    if gpas.is_empty() {
        return "No semester data to compute GPA.\n".to_string();
    }

    let mut sorted: Vec<&SemesterGpa> = gpas.iter().collect();
    sorted.sort_by(|a, b| a.semester.cmp(&b.semester));
    sorted
        .into_iter()
        .map(|entry| {
            format!(
                "Semester {}: {:.2} ({} credits)\n",
                entry.semester, entry.gpa, entry.total_credits
            )
        })
        .collect()
}

/// One-line user message for a service error.
pub fn error_line(err: &ServiceError) -> String {
    match err.kind() {
        ServiceErrorKind::Validation => format!("Validation error: {err}."),
        ServiceErrorKind::DuplicateCode | ServiceErrorKind::NotFound => format!("Error: {err}."),
        ServiceErrorKind::NoData => match err {
            ServiceError::Gpa(GpaError::NoData { semester: None }) => {
                "No courses or total credits to compute GPA.".to_string()
            }
            _ => format!("{err}."),
        },
        ServiceErrorKind::Persistence => format!("Storage error: {err}"),
    }
}
