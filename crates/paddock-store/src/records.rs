//! Flat CSV row types.

use paddock_core::models::{CarKind, Event, EventKind, Placement, Team};
use serde::{Deserialize, Serialize};

/// Header of a per-event file, in [`TeamRecord`] field order.
pub const EVENT_COLUMNS: [&str; 22] = [
    "name",
    "country",
    "kind",
    "place",
    "cost_place",
    "cost_score",
    "bp_place",
    "bp_score",
    "ed_place",
    "ed_score",
    "acc_place",
    "acc_score",
    "sp_place",
    "sp_score",
    "autox_place",
    "autox_score",
    "endu_place",
    "endu_score",
    "eff_place",
    "eff_score",
    "pen",
    "total",
];

/// Header of a series summary file, in [`SummaryRecord`] field order.
pub const SUMMARY_COLUMNS: [&str; 4] = ["id", "kind", "name", "teams"];

/// One team row of a per-event file. Unscored disciplines are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub country: String,
    pub kind: CarKind,
    pub place: u32,
    pub cost_place: Option<u32>,
    pub cost_score: Option<f64>,
    pub bp_place: Option<u32>,
    pub bp_score: Option<f64>,
    pub ed_place: Option<u32>,
    pub ed_score: Option<f64>,
    pub acc_place: Option<u32>,
    pub acc_score: Option<f64>,
    pub sp_place: Option<u32>,
    pub sp_score: Option<f64>,
    pub autox_place: Option<u32>,
    pub autox_score: Option<f64>,
    pub endu_place: Option<u32>,
    pub endu_score: Option<f64>,
    pub eff_place: Option<u32>,
    pub eff_score: Option<f64>,
    pub pen: f64,
    pub total: f64,
}

fn split(placement: Option<Placement>) -> (Option<u32>, Option<f64>) {
    match placement {
        Some(p) => (Some(p.place), Some(p.score)),
        None => (None, None),
    }
}

impl From<&Team> for TeamRecord {
    fn from(team: &Team) -> Self {
        let (cost_place, cost_score) = split(team.cost);
        let (bp_place, bp_score) = split(team.business_plan);
        let (ed_place, ed_score) = split(team.engineering_design);
        let (acc_place, acc_score) = split(team.acceleration);
        let (sp_place, sp_score) = split(team.skid_pad);
        let (autox_place, autox_score) = split(team.autocross);
        let (endu_place, endu_score) = split(team.endurance);
        let (eff_place, eff_score) = split(team.efficiency);

        Self {
            name: team.name.clone(),
            country: team.country.clone(),
            kind: team.kind,
            place: team.place,
            cost_place,
            cost_score,
            bp_place,
            bp_score,
            ed_place,
            ed_score,
            acc_place,
            acc_score,
            sp_place,
            sp_score,
            autox_place,
            autox_score,
            endu_place,
            endu_score,
            eff_place,
            eff_score,
            pen: team.penalty,
            total: team.total,
        }
    }
}

/// One event row of a series summary file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: u32,
    pub kind: EventKind,
    pub name: String,
    pub teams: usize,
}

impl From<&Event> for SummaryRecord {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            kind: event.kind,
            name: event.name.clone(),
            teams: event.team_count(),
        }
    }
}
