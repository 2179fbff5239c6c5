//! Exercise prescription model: instruments, rep schemes, and exercises.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TrackerError};

/// A piece of equipment used by an exercise.
///
/// Instruments have no identity of their own; two instruments with the same
/// fields are the same instrument.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instrument {
    /// Equipment name
    pub name: String,

    /// Load in kilograms, when the equipment is weighted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Free-text detail (band color, grip, machine setting)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Unit of a duration-based rep scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    /// Minutes (`m`)
    Minutes,
    /// Seconds (`s`)
    Seconds,
}

impl DurationUnit {
    /// The single-character suffix used in the stored token.
    pub fn as_char(self) -> char {
        match self {
            DurationUnit::Minutes => 'm',
            DurationUnit::Seconds => 's',
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A repetition prescription: either a plain count or a timed hold.
///
/// Stored as a JSON number (`12`) or a token string (`"30s"`, `"5m"`), and
/// round-trips through serialization unchanged. Anything else is rejected
/// when the value enters the system; downstream code carries the parsed
/// value opaquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reps {
    /// A non-negative repetition count
    Count(u32),
    /// A duration, e.g. `30s` or `5m`
    Duration { amount: u32, unit: DurationUnit },
}

impl Reps {
    /// Parse a duration token of the form `<digits><m|s>`.
    pub fn parse_token(token: &str) -> Result<Self> {
        let reject = || {
            TrackerError::invalid_input(
                "reps",
                format!("'{token}' is not a number followed by 'm' or 's'"),
            )
        };

        let (digits, unit) = match token.chars().last() {
            Some('m') => (&token[..token.len() - 1], DurationUnit::Minutes),
            Some('s') => (&token[..token.len() - 1], DurationUnit::Seconds),
            _ => return Err(reject()),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(reject());
        }

        let amount = digits.parse::<u32>().map_err(|_| reject())?;
        Ok(Reps::Duration { amount, unit })
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Count(n) => write!(f, "{n}"),
            Reps::Duration { amount, unit } => write!(f, "{amount}{unit}"),
        }
    }
}

impl Serialize for Reps {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Reps::Count(n) => serializer.serialize_u32(*n),
            Reps::Duration { amount, unit } => {
                serializer.serialize_str(&format!("{amount}{unit}"))
            }
        }
    }
}

struct RepsVisitor;

impl Visitor<'_> for RepsVisitor {
    type Value = Reps;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or a string like \"30s\" or \"5m\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Reps, E> {
        u32::try_from(v)
            .map(Reps::Count)
            .map_err(|_| E::custom(format!("rep count {v} is out of range")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Reps, E> {
        if v < 0 {
            return Err(E::custom(format!(
                "rep count {v} is invalid: the number of reps must be 0 or greater"
            )));
        }
        self.visit_u64(v as u64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Reps, E> {
        Reps::parse_token(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Reps {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RepsVisitor)
    }
}

/// One exercise prescription within a workout or plan day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Exercise name
    pub name: String,

    /// Number of sets
    pub sets: u32,

    /// Repetition prescription per set
    pub reps: Reps,

    /// Equipment needed; absent means none required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruments: Option<Vec<Instrument>>,

    /// Rest between sets, in minutes. Stored as a string by schema
    /// convention and round-tripped untouched.
    pub rest_minutes: String,

    /// How to perform the exercise (added in a later schema revision,
    /// distinct from `comments`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,

    /// Free-text remarks from a past session; stripped when the exercise
    /// is cloned for re-scheduling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl Exercise {
    /// Validate the parts of the prescription the type system cannot
    /// enforce. Rep tokens and counts are already checked at
    /// deserialization time.
    pub fn validate(&self) -> Result<()> {
        if let Some(instruments) = &self.instruments {
            for instrument in instruments {
                if let Some(weight) = instrument.weight {
                    if weight < 0.0 {
                        return Err(TrackerError::invalid_input(
                            "weight",
                            format!(
                                "instrument '{}' has negative weight {weight}",
                                instrument.name
                            ),
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}
