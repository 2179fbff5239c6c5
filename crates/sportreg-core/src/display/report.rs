//! History report rendering.
//!
//! Produces the markdown report consumed by the CLI (and originally served
//! as a downloadable document): one heading block per occurrence with the
//! date and a completion glyph, followed by a table with one row per
//! exercise. Missing optional fields render as a fixed placeholder token.

use std::fmt;
use std::str::FromStr;

use super::datetime::DayMonthYear;
use crate::error::TrackerError;
use crate::models::{Exercise, Occurrence};

/// Placeholder rendered for missing optional fields.
pub(crate) const PLACEHOLDER: &str = "N/A";

/// Report output language, selected by a two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Spanish (`es`), the default
    #[default]
    Es,
    /// English (`en`)
    En,
}

impl FromStr for Language {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            _ => Err(TrackerError::invalid_input(
                "lang",
                format!("Invalid language '{s}'. Use 'es' or 'en'"),
            )),
        }
    }
}

impl Language {
    /// The two-letter code for the language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    fn title(self, username: &str) -> String {
        match self {
            Language::Es => format!("# Entrenamientos de {username}"),
            Language::En => format!("# Workouts for {username}"),
        }
    }
}

/// Markdown glyph for an occurrence's completion state.
pub(crate) fn completion_glyph(completed: bool) -> &'static str {
    if completed {
        ":heavy_check_mark:"
    } else {
        ":clock1:"
    }
}

/// The two header lines of the per-occurrence exercise table.
pub(crate) fn table_header(language: Language) -> &'static str {
    match language {
        Language::Es => {
            "| Ejercicio | Instrumentos | Series | Repeticiones | Descanso | Instrucción | Comentarios |\n\
             |-----------|--------------|--------|--------------|----------|-------------|-------------|"
        }
        Language::En => {
            "| Exercise | Instruments | Sets | Reps | Rest | Instruction | Comments |\n\
             |----------|-------------|------|------|------|-------------|----------|"
        }
    }
}

/// Comma-joined equipment summary: `name (weight kg, detail)` with absent
/// parts omitted from the parenthetical.
pub(crate) fn instruments_summary(exercise: &Exercise) -> String {
    let instruments = match &exercise.instruments {
        Some(instruments) if !instruments.is_empty() => instruments,
        _ => return PLACEHOLDER.to_string(),
    };

    instruments
        .iter()
        .map(|instrument| {
            let mut parts = Vec::new();
            if let Some(weight) = instrument.weight {
                parts.push(format!("{weight} kg"));
            }
            if let Some(detail) = &instrument.detail {
                parts.push(detail.clone());
            }
            if parts.is_empty() {
                instrument.name.clone()
            } else {
                format!("{} ({})", instrument.name, parts.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// One table row for an exercise prescription.
pub(crate) fn exercise_row(exercise: &Exercise) -> String {
    format!(
        "| {} | {} | {} | {} | {}m | {} | {} |",
        exercise.name,
        instruments_summary(exercise),
        exercise.sets,
        exercise.reps,
        exercise.rest_minutes,
        exercise.instruction.as_deref().unwrap_or(PLACEHOLDER),
        exercise.comments.as_deref().unwrap_or(PLACEHOLDER),
    )
}

/// A user's rendered workout history.
///
/// Holds the already-normalized occurrence list (plans flattened, newest
/// first) and formats it as a markdown document via `Display`.
#[derive(Debug)]
pub struct Report {
    username: String,
    language: Language,
    occurrences: Vec<Occurrence>,
}

impl Report {
    /// Create a report over a normalized, newest-first occurrence list.
    pub fn new(username: String, language: Language, occurrences: Vec<Occurrence>) -> Self {
        Self {
            username,
            language,
            occurrences,
        }
    }

    /// The occurrences backing the report.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.language.title(&self.username))?;
        writeln!(f)?;

        for occurrence in &self.occurrences {
            writeln!(
                f,
                "## {} {}",
                DayMonthYear(&occurrence.date),
                completion_glyph(occurrence.completed)
            )?;
            writeln!(f)?;
            writeln!(f, "{}", table_header(self.language))?;
            for exercise in &occurrence.exercises {
                writeln!(f, "{}", exercise_row(exercise))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
