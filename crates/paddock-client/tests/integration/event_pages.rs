use paddock_client::HtmlResultsParser;
use paddock_core::error::AppError;
use paddock_core::models::{CarKind, EventKind, Placement};
use paddock_core::traits::ResultsParser;

use crate::integration::common::*;

fn no_disciplines() -> Vec<String> {
    (0..8).map(|_| unscored()).collect()
}

#[test]
fn landing_page_lists_event_ids() -> anyhow::Result<()> {
    let ids = HtmlResultsParser::new().parse_event_ids(&landing_page(&[101, 102]))?;
    assert_eq!(ids, vec![101, 102]);
    Ok(())
}

#[test]
fn single_unscored_team() -> anyhow::Result<()> {
    let row = team_row("USA", "Team Alpha", "1.", &no_disciplines(), "0", "350", "electric");
    let html = event_page("FS Alpha 2024", "Pure Electric event", &[row]);

    let event = HtmlResultsParser::new().parse_event(101, &html)?;

    assert_eq!(event.id, 101);
    assert_eq!(event.name, "FS Alpha 2024");
    assert_eq!(event.results.len(), 1);
    let team = &event.results[0];
    assert_eq!(team.name, "Team Alpha");
    assert_eq!(team.country, "USA");
    assert_eq!(team.kind, CarKind::Electric);
    assert_eq!(team.place, 1);
    for placement in [
        team.cost,
        team.business_plan,
        team.engineering_design,
        team.acceleration,
        team.skid_pad,
        team.autocross,
        team.endurance,
        team.efficiency,
    ] {
        assert_eq!(placement, None);
    }
    assert_eq!(team.penalty, 0.0);
    assert_eq!(team.total, 350.0);
    Ok(())
}

#[test]
fn event_kind_ignores_case() -> anyhow::Result<()> {
    let parser = HtmlResultsParser::new();
    for (description, kind) in [
        ("Pure Electric", EventKind::Electric),
        ("PURE ELECTRIC event 2023", EventKind::Electric),
        ("pure combustion", EventKind::Combustion),
        ("Mixed Event: pure electric and pure combustion", EventKind::Mixed),
    ] {
        let event = parser.parse_event(1, &event_page("FS", description, &[]))?;
        assert_eq!(event.kind, kind, "{description}");
    }
    Ok(())
}

#[test]
fn full_table_keeps_page_order() -> anyhow::Result<()> {
    let disciplines = vec![
        scored(1, 98.5),
        scored(2, 71.0),
        scored(1, 150.0),
        scored(3, 70.2),
        scored(2, 72.25),
        scored(1, 100.0),
        scored(4, 250.5),
        scored(2, 88.0),
    ];
    let rows = vec![
        team_row("Germany", "Racing | Team", "1.", &disciplines, "0", "901.1", "electric"),
        team_row("Austria", "TU Graz", "2.", &no_disciplines(), "-10", "50", "combustion"),
        team_row("Japan", "Kyoto", "3.", &no_disciplines(), "0", "0", "other"),
    ];
    let html = event_page("Formula Student Germany", "Mixed event", &rows);

    let event = HtmlResultsParser::new().parse_event(205, &html)?;

    assert_eq!(event.kind, EventKind::Mixed);
    let names: Vec<&str> = event.results.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Racing | Team", "TU Graz", "Kyoto"]);

    let winner = &event.results[0];
    assert_eq!(winner.country, "Germany");
    assert_eq!(
        winner.skid_pad,
        Some(Placement {
            place: 2,
            score: 72.25
        })
    );
    assert_eq!(
        winner.endurance,
        Some(Placement {
            place: 4,
            score: 250.5
        })
    );
    assert_eq!(event.results[1].penalty, -10.0);
    assert_eq!(event.results[2].kind, CarKind::Other);
    Ok(())
}

#[test]
fn placed_cell_without_tooltip_is_fatal() {
    let mut disciplines = no_disciplines();
    disciplines[2] = "<td>3.</td>".to_string();
    let row = team_row("USA", "Team Alpha", "1.", &disciplines, "0", "350", "electric");
    let html = event_page("FS", "pure electric", &[row]);

    let err = HtmlResultsParser::new().parse_event(1, &html).unwrap_err();
    assert!(matches!(err, AppError::StructureError(_)), "{err}");
}

#[test]
fn unknown_car_kind_is_fatal() {
    let row = team_row("USA", "Team Alpha", "1.", &no_disciplines(), "0", "350", "hybrid");
    let html = event_page("FS", "pure electric", &[row]);

    let err = HtmlResultsParser::new().parse_event(1, &html).unwrap_err();
    assert!(matches!(err, AppError::UnknownCarKind(ref k) if k == "hybrid"));
}

#[test]
fn short_row_is_fatal() {
    let html = event_page(
        "FS",
        "pure electric",
        &[r#"<td title="USA | Team Alpha">x</td><td>1.</td>"#.to_string()],
    );

    let err = HtmlResultsParser::new().parse_event(1, &html).unwrap_err();
    assert!(err.to_string().contains("expected 12 cells"), "{err}");
}
