// Free-form show time parsing.
//
// Purpose
// - Turn text typed or picked in a form ("19:00", "8:30 PM", "11:30 A.M") into a time-of-day.
//
// Responsibilities
// - Accept 24-hour "HH:MM" and "HH:MM:SS".
// - Accept 12-hour forms with an AM/PM marker, after normalizing dots and spacing.
// - Never fail: unparsable or empty text falls back to noon, and the result says so.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

const TWENTY_FOUR_HOUR_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];
const TWELVE_HOUR_FORMATS: [&str; 2] = ["%I:%M%p", "%I:%M:%S%p"];

/// Time-of-day used when the text cannot be parsed.
pub fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
}

/// Outcome of parsing a show time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeParse {
    Parsed(NaiveTime),
    Defaulted,
}

impl TimeParse {
    /// Effective time-of-day, noon when the input was not understood.
    pub fn time(&self) -> NaiveTime {
        match self {
            TimeParse::Parsed(time) => *time,
            TimeParse::Defaulted => default_time(),
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, TimeParse::Defaulted)
    }
}

pub fn parse_time_of_day(input: &str) -> TimeParse {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return TimeParse::Defaulted;
    }
    if normalized.contains(char::is_whitespace) {
        tracing::debug!(input, "show time with inner spacing, falling back to 12:00");
        return TimeParse::Defaulted;
    }

    let formats: &[&str] = if normalized.ends_with("AM") || normalized.ends_with("PM") {
        &TWELVE_HOUR_FORMATS
    } else {
        &TWENTY_FOUR_HOUR_FORMATS
    };

    match formats
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&normalized, format).ok())
    {
        Some(time) => TimeParse::Parsed(time),
        None => {
            tracing::debug!(input, "unparsable show time, falling back to 12:00");
            TimeParse::Defaulted
        }
    }
}

// "8:30 p.m." -> "8:30PM", "11:30 A.M" -> "11:30AM". Other whitespace is kept so
// "1 9:00" stays unparsable.
fn normalize(input: &str) -> String {
    let upper = input.trim().replace('.', "").to_uppercase();
    match upper.strip_suffix("AM").or_else(|| upper.strip_suffix("PM")) {
        Some(clock) => format!("{}{}", clock.trim_end(), &upper[clock.len()..]),
        None => upper,
    }
}

/// Show time as entered, together with its parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ShowTime {
    text: String,
    parsed: TimeParse,
}

impl ShowTime {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let parsed = parse_time_of_day(&text);
        Self { text, parsed }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parsed(&self) -> TimeParse {
        self.parsed
    }

    pub fn time(&self) -> NaiveTime {
        self.parsed.time()
    }
}

impl From<String> for ShowTime {
    fn from(text: String) -> Self {
        ShowTime::new(text)
    }
}

impl From<ShowTime> for String {
    fn from(show_time: ShowTime) -> Self {
        show_time.text
    }
}
