// src/draft.rs
use chrono::{Duration, NaiveDate, SecondsFormat, TimeZone, Utc};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

use crate::api::NewActivityPayload;

/// Fixed message shown when a required field is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Type, duration and calories are required.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Type, duration and calories are required.")]
    MissingRequired,
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ActivityType {
    Running,
    Cycling,
    Swimming,
    Walking,
    Yoga,
    #[strum(serialize = "Weight Training")]
    WeightTraining,
    #[strum(serialize = "HIIT")]
    Hiit,
    Other,
}

impl ActivityType {
    pub fn next(self) -> Self {
        let variants: Vec<Self> = Self::iter().collect();
        let idx = variants.iter().position(|v| *v == self).unwrap_or(0);
        variants[(idx + 1) % variants.len()]
    }

    pub fn previous(self) -> Self {
        let variants: Vec<Self> = Self::iter().collect();
        let idx = variants.iter().position(|v| *v == self).unwrap_or(0);
        variants[(idx + variants.len() - 1) % variants.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum DurationUnit {
    #[default]
    #[strum(serialize = "minutes")]
    Minutes,
    #[strum(serialize = "hours")]
    Hours,
}

impl DurationUnit {
    pub fn toggled(self) -> Self {
        match self {
            Self::Minutes => Self::Hours,
            Self::Hours => Self::Minutes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum DistanceUnit {
    #[default]
    #[strum(serialize = "km")]
    Km,
    #[strum(serialize = "mi")]
    Mi,
    #[strum(serialize = "m")]
    M,
}

impl DistanceUnit {
    pub fn next(self) -> Self {
        match self {
            Self::Km => Self::Mi,
            Self::Mi => Self::M,
            Self::M => Self::Km,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Km => Self::M,
            Self::Mi => Self::Km,
            Self::M => Self::Mi,
        }
    }
}

/// In-memory activity record being edited in the Add Activity modal.
///
/// All numeric fields are kept as the raw text the user typed; parsing and
/// validation happen in `build_payload`, which returns a tagged error
/// instead of letting invalid numbers through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDraft {
    pub activity_type: Option<ActivityType>,
    pub duration_input: String,
    pub duration_unit: DurationUnit,
    pub distance_input: String,
    pub distance_unit: DistanceUnit,
    pub calories_input: String,
    pub date_input: String,
}

impl ActivityDraft {
    /// A fresh draft with all defaults and the date set to today.
    pub fn new() -> Self {
        Self::for_date(Utc::now().date_naive())
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            activity_type: None,
            duration_input: String::new(),
            duration_unit: DurationUnit::default(),
            distance_input: String::new(),
            distance_unit: DistanceUnit::default(),
            calories_input: String::new(),
            date_input: date.format("%Y-%m-%d").to_string(),
        }
    }

    /// True iff the three required fields are filled in. No range checks;
    /// the date is not gating because it always has a value.
    pub fn can_submit(&self) -> bool {
        self.activity_type.is_some()
            && !self.duration_input.trim().is_empty()
            && !self.calories_input.trim().is_empty()
    }

    /// Builds the request payload from the current field values.
    ///
    /// Duration and distance are serialized as `"<value> <unit>"` with the
    /// raw input value; an empty distance becomes `None`. The date is
    /// serialized as midnight UTC in ISO-8601 with millisecond precision.
    pub fn build_payload(&self) -> Result<NewActivityPayload, DraftError> {
        let activity_type = self.activity_type.ok_or(DraftError::MissingRequired)?;

        let duration_value = parse_numeric_input(&self.duration_input)?
            .ok_or(DraftError::MissingRequired)?;
        let calories = parse_calories_input(&self.calories_input)?;

        let distance = match parse_numeric_input(&self.distance_input)? {
            Some(value) => Some(format!("{} {}", value, self.distance_unit)),
            None => None,
        };

        let date = parse_draft_date(&self.date_input)?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| DraftError::InvalidDate(self.date_input.clone()))?;
        let timestamp = Utc.from_utc_datetime(&midnight);

        Ok(NewActivityPayload {
            activity_type: activity_type.to_string(),
            duration: format!("{} {}", duration_value, self.duration_unit),
            distance,
            calories,
            date: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

impl Default for ActivityDraft {
    fn default() -> Self {
        Self::new()
    }
}

// --- Parsing Helpers ---

/// Returns the trimmed input if it parses as a number, `None` if empty.
fn parse_numeric_input(input: &str) -> Result<Option<&str>, DraftError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(|_| Some(trimmed))
        .map_err(|_| DraftError::InvalidNumber(trimmed.to_string()))
}

fn parse_calories_input(input: &str) -> Result<i64, DraftError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingRequired);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| DraftError::InvalidNumber(trimmed.to_string()))
}

pub fn parse_draft_date(date_str: &str) -> Result<NaiveDate, DraftError> {
    let trimmed = date_str.trim().to_lowercase();
    match trimmed.as_str() {
        "today" => Ok(Utc::now().date_naive()),
        "yesterday" => Ok(Utc::now().date_naive() - Duration::days(1)),
        _ => NaiveDate::parse_from_str(&trimmed, "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDate(date_str.to_string())),
    }
}
