//! Results page parser.
//!
//! Landing pages carry a `<select id="WorldEvents">` listing event ids.
//! Event pages carry a single `<h4>` title followed by a description, and a
//! `wrl_table` after the `results` anchor with one 12-cell row per team:
//!
//! | 0 | 1 | 2..=9 | 10 | 11 |
//! |---|---|---|---|---|
//! | `title="Country \| Name"` | place | disciplines | penalty | total, `title=<car kind>` |

use paddock_core::error::AppError;
use paddock_core::models::{CarKind, Event, EventKind, Placement, Team};
use paddock_core::traits::ResultsParser;

use crate::document::{Document, Element};

const EVENT_SELECT_ID: &str = "WorldEvents";
const RESULTS_ANCHOR_ID: &str = "results";
const RESULTS_TABLE_CLASS: &str = "wrl_table";
const COLUMN_COUNT: usize = 12;
const TEAM_DELIMITER: &str = " | ";

/// Discipline columns 2..=9, by output column prefix.
const DISCIPLINES: [&str; 8] = ["cost", "bp", "ed", "acc", "sp", "autox", "endu", "eff"];

/// [`ResultsParser`] for the world-ranking HTML pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlResultsParser;

impl HtmlResultsParser {
    pub fn new() -> Self {
        Self
    }
}

impl ResultsParser for HtmlResultsParser {
    fn parse_event_ids(&self, html: &str) -> Result<Vec<u32>, AppError> {
        parse_event_ids(&Document::parse(html))
    }

    fn parse_event(&self, event_id: u32, html: &str) -> Result<Event, AppError> {
        parse_event(event_id, &Document::parse(html))
    }
}

/// Event ids offered by the `WorldEvents` selector, in page order.
pub fn parse_event_ids(doc: &Document) -> Result<Vec<u32>, AppError> {
    let select = doc.by_id(EVENT_SELECT_ID).ok_or_else(|| {
        AppError::StructureError(format!("No element with id '{EVENT_SELECT_ID}'"))
    })?;

    select
        .select("option")?
        .iter()
        .map(|option| {
            let value = option.attribute("value").ok_or_else(|| {
                AppError::StructureError(format!(
                    "Event option {:?} has no value",
                    option.text().trim()
                ))
            })?;
            value.trim().parse::<u32>().map_err(|_| {
                AppError::ValueError(format!("Event id {value:?} is not an integer"))
            })
        })
        .collect()
}

/// Title, kind and results table of one event page.
pub fn parse_event(event_id: u32, doc: &Document) -> Result<Event, AppError> {
    let headings = doc.select("h4")?;
    let heading = match headings.as_slice() {
        [heading] => *heading,
        other => {
            return Err(AppError::StructureError(format!(
                "Event {event_id}: expected exactly one h4 heading, found {}",
                other.len()
            )));
        }
    };
    let name = heading.text().trim().to_string();

    let description = heading.next_sibling_text().ok_or_else(|| {
        AppError::StructureError(format!("Event {event_id}: no description after heading"))
    })?;
    let kind = EventKind::classify(&description)
        .ok_or_else(|| AppError::UnknownEventKind(description.clone()))?;

    let table = doc
        .by_id(RESULTS_ANCHOR_ID)
        .and_then(|anchor| {
            anchor.next_sibling_element(|e| e.name() == "table" && e.has_class(RESULTS_TABLE_CLASS))
        })
        .ok_or_else(|| {
            AppError::StructureError(format!(
                "Event {event_id}: no '{RESULTS_TABLE_CLASS}' table after '#{RESULTS_ANCHOR_ID}'"
            ))
        })?;

    let mut results = Vec::new();
    for (i, row) in table.select("tr")?.iter().enumerate() {
        if row.find(|e| e.name() == "th").is_some() {
            continue;
        }
        let team = decode_row(&row.select("td")?)
            .map_err(|e| in_context(e, &format!("Event {event_id}, row {}", i + 1)))?;
        results.push(team);
    }

    tracing::debug!(event_id, teams = results.len(), "Parsed event");
    Ok(Event {
        id: event_id,
        kind,
        name,
        results,
    })
}

/// Decode the cells of one team row.
pub fn decode_row(cells: &[Element<'_>]) -> Result<Team, AppError> {
    if cells.len() != COLUMN_COUNT {
        return Err(AppError::StructureError(format!(
            "expected {COLUMN_COUNT} cells, found {}",
            cells.len()
        )));
    }

    let (country, name) = decode_team_title(&cells[0])?;
    let place = parse_place(&cells[1].text()).map_err(|e| in_context(e, "place"))?;

    let mut placements = [None; 8];
    for (i, slot) in placements.iter_mut().enumerate() {
        *slot = decode_discipline(&cells[2 + i]).map_err(|e| in_context(e, DISCIPLINES[i]))?;
    }
    let [
        cost,
        business_plan,
        engineering_design,
        acceleration,
        skid_pad,
        autocross,
        endurance,
        efficiency,
    ] = placements;

    let penalty = parse_score(&cells[10].text()).map_err(|e| in_context(e, "pen"))?;
    let total = parse_score(&cells[11].text()).map_err(|e| in_context(e, "total"))?;
    let kind = decode_car_kind(&cells[11])?;

    Ok(Team {
        name,
        country,
        kind,
        place,
        cost,
        business_plan,
        engineering_design,
        acceleration,
        skid_pad,
        autocross,
        endurance,
        efficiency,
        penalty,
        total,
    })
}

/// `-` (optionally followed by dots) means not scored. Otherwise the cell
/// text is the place and a descendant's `title` holds the score.
pub fn decode_discipline(cell: &Element<'_>) -> Result<Option<Placement>, AppError> {
    let text = cell.text();
    let text = text.trim().trim_end_matches('.');
    if text == "-" {
        return Ok(None);
    }

    let place = parse_place(text)?;
    let title = cell
        .find(|e| e.attribute("title").is_some())
        .and_then(|e| e.attribute("title"))
        .ok_or_else(|| {
            AppError::StructureError(format!("placed cell {text:?} has no score tooltip"))
        })?;
    let score = parse_score(title)?;

    Ok(Some(Placement { place, score }))
}

/// Split the rank cell's `"Country | Name"` tooltip on the first delimiter.
pub fn decode_team_title(cell: &Element<'_>) -> Result<(String, String), AppError> {
    let title = cell
        .attribute("title")
        .ok_or_else(|| AppError::StructureError("team cell has no title".into()))?;
    let (country, name) = title.split_once(TEAM_DELIMITER).ok_or_else(|| {
        AppError::ValueError(format!(
            "team title {title:?} is not of the form 'Country{TEAM_DELIMITER}Name'"
        ))
    })?;
    Ok((country.to_string(), name.to_string()))
}

/// Car kind from the total cell's `title`.
pub fn decode_car_kind(cell: &Element<'_>) -> Result<CarKind, AppError> {
    cell.attribute("title")
        .ok_or_else(|| AppError::StructureError("total cell has no car kind title".into()))?
        .parse()
}

fn parse_place(text: &str) -> Result<u32, AppError> {
    let digits = text.trim().trim_end_matches('.');
    match digits.parse::<u32>() {
        Ok(place) if place > 0 => Ok(place),
        _ => Err(AppError::ValueError(format!(
            "{text:?} is not a positive place"
        ))),
    }
}

fn parse_score(text: &str) -> Result<f64, AppError> {
    match text.trim().parse::<f64>() {
        Ok(score) if score.is_finite() => Ok(score),
        _ => Err(AppError::ValueError(format!("{text:?} is not a score"))),
    }
}

/// Prefix structural and value errors with where they happened.
fn in_context(error: AppError, context: &str) -> AppError {
    match error {
        AppError::StructureError(msg) => AppError::StructureError(format!("{context}: {msg}")),
        AppError::ValueError(msg) => AppError::ValueError(format!("{context}: {msg}")),
        other => other,
    }
}
