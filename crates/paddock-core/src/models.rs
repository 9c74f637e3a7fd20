use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Powertrain of a single team's car, read from the total-score tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarKind {
    Electric,
    Combustion,
    Other,
}

impl CarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarKind::Electric => "ELECTRIC",
            CarKind::Combustion => "COMBUSTION",
            CarKind::Other => "OTHER",
        }
    }
}

impl fmt::Display for CarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CarKind {
    type Err = AppError;

    /// Parses the tooltip value. Case-sensitive: the site only emits lower case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electric" => Ok(CarKind::Electric),
            "combustion" => Ok(CarKind::Combustion),
            "other" => Ok(CarKind::Other),
            _ => Err(AppError::UnknownCarKind(s.to_string())),
        }
    }
}

/// Which world-ranking classes an event counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Electric,
    Combustion,
    Mixed,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Electric => "ELECTRIC",
            EventKind::Combustion => "COMBUSTION",
            EventKind::Mixed => "MIXED",
        }
    }

    /// Classify an event from the free text printed under its title.
    ///
    /// Matching is case-insensitive and checked in order: mixed, electric,
    /// combustion. Returns `None` when nothing matches.
    pub fn classify(description: &str) -> Option<Self> {
        let description = description.to_lowercase();
        if description.contains("mixed event") {
            Some(EventKind::Mixed)
        } else if description.contains("pure electric") {
            Some(EventKind::Electric)
        } else if description.contains("pure combustion") {
            Some(EventKind::Combustion)
        } else {
            None
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rank and score of a team in one discipline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// 1-based rank.
    pub place: u32,
    pub score: f64,
}

/// One row of an event's results table.
///
/// Disciplines a team did not take part in are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub country: String,
    pub kind: CarKind,
    /// Overall rank in the event.
    pub place: u32,
    pub cost: Option<Placement>,
    pub business_plan: Option<Placement>,
    pub engineering_design: Option<Placement>,
    pub acceleration: Option<Placement>,
    pub skid_pad: Option<Placement>,
    pub autocross: Option<Placement>,
    pub endurance: Option<Placement>,
    pub efficiency: Option<Placement>,
    pub penalty: f64,
    pub total: f64,
}

/// A single competition and its full results table.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Site-wide event id, shared by every series that lists the event.
    pub id: u32,
    pub kind: EventKind,
    pub name: String,
    /// Teams in on-page order.
    pub results: Vec<Team>,
}

impl Event {
    pub fn team_count(&self) -> usize {
        self.results.len()
    }
}

/// A world-ranking list to scrape: a short label used for output file
/// names and the landing page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub label: String,
    pub url: String,
}

impl Series {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Detail page URL for one event of this series.
    pub fn event_url(&self, event_id: u32) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), event_id)
    }
}
