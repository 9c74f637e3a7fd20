use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Reader, Writer, WriterBuilder};
use paddock_core::error::AppError;
use paddock_core::models::Event;
use paddock_core::traits::ResultStore;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::records::{EVENT_COLUMNS, SUMMARY_COLUMNS, SummaryRecord, TeamRecord};

/// Directory below the output root holding one file per event.
pub const EVENTS_DIR: &str = "events";

/// [`ResultStore`] writing CSV files.
///
/// Layout:
/// - `<root>/<series>.csv`: one row per event
/// - `<root>/events/<id>.csv`: one row per team
///
/// Files are overwritten, never appended to.
#[derive(Debug, Clone)]
pub struct CsvStore {
    root: PathBuf,
}

impl CsvStore {
    /// Use `root` as output directory, creating it and `events/` if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        let events_dir = root.join(EVENTS_DIR);
        std::fs::create_dir_all(&events_dir).map_err(|e| {
            AppError::OutputError(format!(
                "Failed to create directory {}: {e}",
                events_dir.display()
            ))
        })?;
        tracing::info!("Saving data to {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn event_path(&self, event_id: u32) -> PathBuf {
        self.root.join(EVENTS_DIR).join(format!("{event_id}.csv"))
    }

    pub fn summary_path(&self, series_label: &str) -> PathBuf {
        self.root.join(format!("{series_label}.csv"))
    }
}

impl ResultStore for CsvStore {
    fn save_event(&self, event: &Event) -> Result<(), AppError> {
        let path = self.event_path(event.id);
        let records = event.results.iter().map(TeamRecord::from);
        write_records(&path, &EVENT_COLUMNS, records)?;
        tracing::debug!(path = %path.display(), teams = event.team_count(), "Wrote event file");
        Ok(())
    }

    fn save_summary(&self, series_label: &str, events: &[&Event]) -> Result<(), AppError> {
        let path = self.summary_path(series_label);
        let records = events.iter().map(|&e| SummaryRecord::from(e));
        write_records(&path, &SUMMARY_COLUMNS, records)?;
        tracing::debug!(path = %path.display(), events = events.len(), "Wrote summary file");
        Ok(())
    }
}

/// Write the header, then every record. The header is written even when
/// there are no records.
fn write_records<T, I>(path: &Path, header: &[&str], records: I) -> Result<(), AppError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer: Writer<File> = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| output_error(path, e))?;

    writer
        .write_record(header)
        .map_err(|e| output_error(path, e))?;
    for record in records {
        writer.serialize(record).map_err(|e| output_error(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::OutputError(format!("Failed to flush {}: {e}", path.display())))
}

fn output_error(path: &Path, error: csv::Error) -> AppError {
    AppError::OutputError(format!("Failed to write {}: {error}", path.display()))
}

/// Read back the team rows of a per-event file.
pub fn read_event_rows(path: impl AsRef<Path>) -> Result<Vec<TeamRecord>, AppError> {
    read_records(path.as_ref())
}

/// Read back the rows of a series summary file.
pub fn read_summary_rows(path: impl AsRef<Path>) -> Result<Vec<SummaryRecord>, AppError> {
    read_records(path.as_ref())
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AppError> {
    let read_error =
        |e: csv::Error| AppError::OutputError(format!("Failed to read {}: {e}", path.display()));

    let mut reader = Reader::from_path(path).map_err(read_error)?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(read_error)
}
