//! Display implementations for domain models.
//!
//! Markdown formatting for standalone model output (pending lists,
//! last-completed lookups, insert confirmations). The full history report
//! with language selection lives in [`super::report`]; these impls share
//! its table helpers and render in English.

use std::fmt;

use super::datetime::DayMonthYear;
use super::report::{completion_glyph, exercise_row, table_header, Language};
use crate::models::{Exercise, Occurrence, Plan, Workout};

fn exercise_table(f: &mut fmt::Formatter<'_>, exercises: &[Exercise]) -> fmt::Result {
    writeln!(f, "{}", table_header(Language::En))?;
    for exercise in exercises {
        writeln!(f, "{}", exercise_row(exercise))?;
    }
    Ok(())
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} {}",
            DayMonthYear(&self.date),
            completion_glyph(self.completed)
        )?;
        writeln!(f)?;
        exercise_table(f, &self.exercises)?;

        if let Some(comments) = &self.post_workout_comments {
            writeln!(f)?;
            writeln!(f, "{comments}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} {}",
            DayMonthYear(&self.date),
            completion_glyph(self.completed)
        )?;
        writeln!(f)?;
        exercise_table(f, &self.exercises)?;

        if let Some(comments) = &self.post_workout_comments {
            writeln!(f)?;
            writeln!(f, "{comments}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Plan starting {}", DayMonthYear(&self.date))?;
        writeln!(f)?;

        if let Some(instructions) = &self.general_instructions {
            writeln!(f, "{instructions}")?;
            writeln!(f)?;
        }

        for day in &self.plan {
            writeln!(f, "### Day {} {}", day.day, completion_glyph(day.completed))?;
            writeln!(f)?;
            exercise_table(f, &day.exercises)?;
            writeln!(f)?;
        }

        if let Some(comments) = &self.post_plan_comments {
            writeln!(f, "{comments}")?;
        }

        Ok(())
    }
}
