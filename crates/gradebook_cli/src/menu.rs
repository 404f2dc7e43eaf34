//! Interactive menu loop.
//!
//! # Responsibility
//! - Prompt for menu choices and course fields, parse typed values.
//! - Map every service error to one line and keep the loop running.
//!
//! # Invariants
//! - End of input exits the loop cleanly.
//! - Numeric prompts re-ask until the value parses.

use crate::render::{course_table, error_line, semester_lines};
use gradebook_core::{
    CourseChanges, CourseRecord, CourseRepository, GradebookService, ServiceError, StoreError,
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "
===== Student Gradebook Menu =====
1. Add a course
2. Update a course
3. Delete a course
4. View gradebook
5. Calculate overall GPA
6. Calculate GPA by semester
7. Calculate GPA for one semester
0. Exit
==================================
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Returns the trimmed answer, or `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            let Some(raw) = self.ask(prompt)? else {
                return Ok(None);
            };
            match raw.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Invalid number. Please try again.")?,
            }
        }
    }
}

/// Runs the menu until the user exits or input ends.
pub fn run_menu<R, I, O>(service: &mut GradebookService<R>, input: I, output: O) -> io::Result<()>
where
    R: CourseRepository,
    I: BufRead,
    O: Write,
{
    let mut console = Console { input, output };
    loop {
        write!(console.output, "{MENU}")?;
        let Some(choice) = console.ask("Select an option: ")? else {
            return Ok(());
        };

        let step = match choice.as_str() {
            "1" => add_course(service, &mut console)?,
            "2" => update_course(service, &mut console)?,
            "3" => delete_course(service, &mut console)?,
            "4" => {
                console.say("\n--- Gradebook ---")?;
                write!(console.output, "{}", course_table(service.list()))?;
                Step::Continue
            }
            "5" => overall_gpa(service, &mut console)?,
            "6" => {
                console.say("\n--- GPA by Semester ---")?;
                let gpas = service.compute_all_semester_gpas();
                write!(console.output, "{}", semester_lines(&gpas))?;
                Step::Continue
            }
            "7" => one_semester_gpa(service, &mut console)?,
            "0" => {
                console.say("Exit!")?;
                Step::Quit
            }
            _ => {
                console.say("Invalid option. Please select a valid menu item.")?;
                Step::Continue
            }
        };

        if step == Step::Quit {
            return Ok(());
        }
    }
}

fn add_course<R: CourseRepository, I: BufRead, O: Write>(
    service: &mut GradebookService<R>,
    console: &mut Console<I, O>,
) -> io::Result<Step> {
    console.say("\n--- Add Course ---")?;
    let Some(code) = console.ask("Course code: ")? else {
        return Ok(Step::Quit);
    };
    let Some(name) = console.ask("Course name: ")? else {
        return Ok(Step::Quit);
    };
    let Some(credits) = console.ask_number::<u32>("Number of credits: ")? else {
        return Ok(Step::Quit);
    };
    let Some(semester) = console.ask("Semester: ")? else {
        return Ok(Step::Quit);
    };
    let Some(score) = console.ask_number::<f64>("Score (0-10): ")? else {
        return Ok(Step::Quit);
    };

    match service.add(CourseRecord::new(code, name, credits, semester, score)) {
        Ok(_) => console.say("Course added successfully.")?,
        Err(err) => console.say(&error_line(&err))?,
    }
    Ok(Step::Continue)
}

fn update_course<R: CourseRepository, I: BufRead, O: Write>(
    service: &mut GradebookService<R>,
    console: &mut Console<I, O>,
) -> io::Result<Step> {
    console.say("\n--- Update Course ---")?;
    let Some(code) = console.ask("Course code to update: ")? else {
        return Ok(Step::Quit);
    };
    let Some(current) = service.get(&code).cloned() else {
        let err = ServiceError::Store(StoreError::NotFound(code));
        console.say(&error_line(&err))?;
        return Ok(Step::Continue);
    };

    console.say("Leave a field empty to keep the current value.")?;
    let mut changes = CourseChanges::default();

    let Some(raw) = console.ask(&format!("New course code [{}]: ", current.code))? else {
        return Ok(Step::Quit);
    };
    changes.code = non_empty(raw);

    let Some(raw) = console.ask(&format!("New course name [{}]: ", current.name))? else {
        return Ok(Step::Quit);
    };
    changes.name = non_empty(raw);

    let Some(raw) = console.ask(&format!("New number of credits [{}]: ", current.credits))? else {
        return Ok(Step::Quit);
    };
    match parse_optional::<u32>(raw) {
        Ok(credits) => changes.credits = credits,
        Err(()) => {
            console.say("Invalid credits value. Update cancelled.")?;
            return Ok(Step::Continue);
        }
    }

    let Some(raw) = console.ask(&format!("New semester [{}]: ", current.semester))? else {
        return Ok(Step::Quit);
    };
    changes.semester = non_empty(raw);

    let Some(raw) = console.ask(&format!("New score [{}]: ", current.score))? else {
        return Ok(Step::Quit);
    };
    match parse_optional::<f64>(raw) {
        Ok(score) => changes.score = score,
        Err(()) => {
            console.say("Invalid score value. Update cancelled.")?;
            return Ok(Step::Continue);
        }
    }

    if changes.is_empty() {
        console.say("Nothing to update.")?;
        return Ok(Step::Continue);
    }

    match service.update(&current.code, &changes) {
        Ok(_) => console.say("Course updated successfully.")?,
        Err(err) => console.say(&error_line(&err))?,
    }
    Ok(Step::Continue)
}

fn delete_course<R: CourseRepository, I: BufRead, O: Write>(
    service: &mut GradebookService<R>,
    console: &mut Console<I, O>,
) -> io::Result<Step> {
    console.say("\n--- Delete Course ---")?;
    let Some(code) = console.ask("Course code to delete: ")? else {
        return Ok(Step::Quit);
    };
    match service.delete(&code) {
        Ok(_) => console.say("Course deleted successfully.")?,
        Err(err) => console.say(&error_line(&err))?,
    }
    Ok(Step::Continue)
}

fn overall_gpa<R: CourseRepository, I: BufRead, O: Write>(
    service: &GradebookService<R>,
    console: &mut Console<I, O>,
) -> io::Result<Step> {
    console.say("\n--- Overall GPA ---")?;
    match service.summary() {
        Ok(summary) => console.say(&format!(
            "Overall GPA (0-10 scale): {:.2} ({} credits, {} courses)",
            summary.gpa, summary.total_credits, summary.course_count
        ))?,
        Err(err) => console.say(&error_line(&err))?,
    }
    Ok(Step::Continue)
}

fn one_semester_gpa<R: CourseRepository, I: BufRead, O: Write>(
    service: &GradebookService<R>,
    console: &mut Console<I, O>,
) -> io::Result<Step> {
    console.say("\n--- Semester GPA ---")?;
    let Some(semester) = console.ask("Semester: ")? else {
        return Ok(Step::Quit);
    };
    match service.compute_semester_gpa(&semester) {
        Ok(gpa) => console.say(&format!("Semester {semester}: {gpa:.2}"))?,
        Err(err) => console.say(&error_line(&err))?,
    }
    Ok(Step::Continue)
}

fn non_empty(raw: String) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

fn parse_optional<T: FromStr>(raw: String) -> Result<Option<T>, ()> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>().map(Some).map_err(|_| ())
}
