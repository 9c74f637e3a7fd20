use std::collections::BTreeSet;

use paddock_client::HtmlResultsParser;
use paddock_core::config::SummaryScope;
use paddock_core::models::{CarKind, EventKind};
use paddock_core::scrape::SeriesRunner;
use paddock_core::testutil::MockFetcher;
use paddock_store::{CsvStore, SummaryRecord, read_event_rows, read_summary_rows};

use crate::integration::common::*;

#[tokio::test]
async fn single_event_writes_empty_discipline_columns() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::open(dir.path()).unwrap();
    let fetcher = MockFetcher::with_pages([
        (FSE_URL.to_string(), landing_page(&[101])),
        (
            format!("{FSE_URL}/101"),
            event_page(
                "FS Alpha",
                "Pure Electric",
                &[unscored_row("USA", "Team Alpha", 1, "350", "electric")],
            ),
        ),
    ]);
    let mut runner = SeriesRunner::new(fetcher, HtmlResultsParser::new(), store.clone());

    runner.run(&series()[..1]).await.unwrap();

    let content = std::fs::read_to_string(store.event_path(101)).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        "Team Alpha,USA,ELECTRIC,1,,,,,,,,,,,,,,,,,0.0,350.0"
    );

    let event = runner.registry().get(101).unwrap();
    assert_eq!(event.kind, EventKind::Electric);
    assert_eq!(event.results[0].kind, CarKind::Electric);
}

#[tokio::test]
async fn mixed_event_is_scraped_once_across_series() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::open(dir.path()).unwrap();
    let fetcher = mixed_fetcher();
    let mut runner = SeriesRunner::new(fetcher.clone(), HtmlResultsParser::new(), store.clone());

    let summary = runner.run(&series()).await.unwrap();

    assert_eq!(summary.scraped, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(
        fetcher.requested(),
        vec![
            FSE_URL.to_string(),
            format!("{FSE_URL}/101"),
            format!("{FSE_URL}/205"),
            FSC_URL.to_string(),
            format!("{FSC_URL}/301"),
        ]
    );
    assert_eq!(runner.registry().len(), 3);

    let fse = read_summary_rows(store.summary_path("FSE")).unwrap();
    let fsc = read_summary_rows(store.summary_path("FSC")).unwrap();
    let mixed = SummaryRecord {
        id: 205,
        kind: EventKind::Mixed,
        name: "FS Mixed".into(),
        teams: 3,
    };
    assert!(fse.contains(&mixed));
    assert!(fsc.contains(&mixed));

    // Accumulated scope: the later summary also lists the earlier series' events.
    let fsc_ids: Vec<u32> = fsc.iter().map(|r| r.id).collect();
    assert_eq!(fsc_ids, vec![101, 205, 301]);
}

#[tokio::test]
async fn series_scope_limits_summary_to_listed_events() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::open(dir.path()).unwrap();
    let mut runner = SeriesRunner::new(mixed_fetcher(), HtmlResultsParser::new(), store.clone())
        .with_summary_scope(SummaryScope::Series);

    runner.run(&series()).await.unwrap();

    let ids = |label: &str| -> Vec<u32> {
        read_summary_rows(store.summary_path(label))
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect()
    };
    assert_eq!(ids("FSE"), vec![101, 205]);
    assert_eq!(ids("FSC"), vec![205, 301]);
}

#[tokio::test]
async fn event_files_round_trip_team_tuples() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::open(dir.path()).unwrap();
    let mut runner = SeriesRunner::new(mixed_fetcher(), HtmlResultsParser::new(), store.clone());

    runner.run(&series()).await.unwrap();

    for event in runner.into_registry().into_events() {
        let written: BTreeSet<(String, String, String, u32, String)> =
            read_event_rows(store.event_path(event.id))
                .unwrap()
                .into_iter()
                .map(|r| (r.name, r.country, r.kind.to_string(), r.place, r.total.to_string()))
                .collect();
        let expected: BTreeSet<(String, String, String, u32, String)> = event
            .results
            .iter()
            .map(|t| {
                (
                    t.name.clone(),
                    t.country.clone(),
                    t.kind.to_string(),
                    t.place,
                    t.total.to_string(),
                )
            })
            .collect();
        assert_eq!(written, expected, "event {}", event.id);
        assert_eq!(written.len(), event.team_count());
    }
}

#[tokio::test]
async fn bad_event_page_aborts_after_earlier_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvStore::open(dir.path()).unwrap();
    let fetcher = MockFetcher::with_pages([
        (FSE_URL.to_string(), landing_page(&[101, 102])),
        (
            format!("{FSE_URL}/101"),
            event_page(
                "FS Alpha",
                "Pure electric",
                &[unscored_row("USA", "Team Alpha", 1, "350", "electric")],
            ),
        ),
        (
            format!("{FSE_URL}/102"),
            event_page(
                "FS Beta",
                "Pure electric",
                &[unscored_row("USA", "Team Beta", 1, "350", "hybrid")],
            ),
        ),
    ]);
    let mut runner = SeriesRunner::new(fetcher, HtmlResultsParser::new(), store.clone());

    let err = runner.run(&series()).await.unwrap_err();

    assert_eq!(err.category(), "value");
    assert!(store.event_path(101).exists());
    assert!(!store.event_path(102).exists());
    assert!(!store.summary_path("FSE").exists());
}
