use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::club::Club;
use super::ids::Id;
use crate::error::PortalError;
use crate::validation::DISPLAY_DATE_FORMAT;

/// Kind of event, used by the category chips on the events page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Technical,
    Cultural,
    Workshop,
    Seminar,
    Other,
}

impl EventCategory {
    pub const ALL: &'static [EventCategory] = &[
        EventCategory::Technical,
        EventCategory::Cultural,
        EventCategory::Workshop,
        EventCategory::Seminar,
        EventCategory::Other,
    ];

    /// Categories offered as filter chips (after "All").
    pub const FILTERABLE: &'static [EventCategory] = &[
        EventCategory::Technical,
        EventCategory::Cultural,
        EventCategory::Workshop,
        EventCategory::Seminar,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            EventCategory::Technical => "Technical",
            EventCategory::Cultural => "Cultural",
            EventCategory::Workshop => "Workshop",
            EventCategory::Seminar => "Seminar",
            EventCategory::Other => "Other",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EventCategory {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        EventCategory::ALL
            .iter()
            .copied()
            .find(|c| c.display_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PortalError::UnknownCategory(trimmed.to_string()))
    }
}

/// Category selection on the events page: everything, or one exact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EventCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: EventCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.display_name(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// A scheduled event, either club-run or college-wide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Id<Event>,
    pub title: String,
    /// Free text, e.g. "Nov 12, 2023".
    pub date: String,
    /// Free text, e.g. "09:00 AM".
    pub time: String,
    pub location: String,
    pub club_id: Id<Club>,
    pub club_name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category: EventCategory,
}

impl Event {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DISPLAY_DATE_FORMAT).ok()
    }

    /// Month and day shown on the schedule badge, e.g. ("NOV", "12").
    /// Falls back to splitting the free text when it is not a known format.
    pub fn date_badge(&self) -> (String, String) {
        if let Some(d) = self.parsed_date() {
            return (
                d.format("%b").to_string().to_uppercase(),
                d.format("%d").to_string(),
            );
        }
        let mut parts = self.date.split_whitespace();
        let month = parts.next().unwrap_or("").to_uppercase();
        let day = parts.next().unwrap_or("").trim_end_matches(',').to_string();
        (month, day)
    }
}
