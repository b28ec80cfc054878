use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a booking came from. The upstream data uses the labels
/// "Reservation" and "Walk-in"; anything else is kept verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    Reservation,
    WalkIn,
    Other(String),
}

impl Source {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "reservation" => Source::Reservation,
            "walk-in" | "walkin" => Source::WalkIn,
            _ => Source::Other(label.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Source::Reservation => "Reservation",
            Source::WalkIn => "Walk-in",
            Source::Other(s) => s,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One reservation or walk-in record, as handed over by the ingestion
/// layer. Rows with unparseable dates or party sizes are filtered out
/// before they get here, so no field is optional except the time slot.
///
/// The time slot is irrelevant to the calendar grid; it only feeds the
/// time-of-day aggregations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    /// Party size ("Pax" in the raw data). One cover == one guest.
    pub covers: u32,
    pub source: Source,
}

impl Booking {
    pub fn new(date: NaiveDate, covers: u32, source: Source) -> Self {
        Self {
            date,
            time: None,
            covers,
            source,
        }
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_label() {
        assert_eq!(Source::from_label("Reservation"), Source::Reservation);
        assert_eq!(Source::from_label("reservation"), Source::Reservation);
        assert_eq!(Source::from_label("Walk-in"), Source::WalkIn);
        assert_eq!(Source::from_label("walkin"), Source::WalkIn);
        assert_eq!(Source::from_label(" Walk-In "), Source::WalkIn);
        assert_eq!(
            Source::from_label("Phone"),
            Source::Other("Phone".to_string())
        );
    }

    #[test]
    fn test_source_label_roundtrip() {
        for label in ["Reservation", "Walk-in", "Event"] {
            assert_eq!(Source::from_label(label).label(), label);
        }
    }
}
