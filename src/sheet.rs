//! Survey responses exported from a spreadsheet service.
//!
//! Authentication and transport belong to the [`SheetService`]
//! implementation. [`CsvExportService`] reads CSV exports from disk.

use crate::config::SheetConfig;
use crate::error::{CorpusError, Result};
use crate::table::string_values;
use chrono::NaiveDateTime;
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// A source of spreadsheet rows.
pub trait SheetService {
    /// Fetches the first worksheet of `spreadsheet` as a frame, one column
    /// per header cell.
    fn fetch_sheet(&self, spreadsheet: &str) -> Result<DataFrame>;
}

/// Reads `<dir>/<spreadsheet>.csv` exports.
#[derive(Debug, Clone)]
pub struct CsvExportService {
    dir: PathBuf,
}

impl CsvExportService {
    /// Serves exports stored in `dir`.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn export_path(&self, spreadsheet: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", spreadsheet))
    }
}

impl SheetService for CsvExportService {
    fn fetch_sheet(&self, spreadsheet: &str) -> Result<DataFrame> {
        let path = self.export_path(spreadsheet);
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.clone()))
            .and_then(|reader| reader.finish())
            .map_err(|e| CorpusError::Sheet(format!("cannot read {}: {}", path.display(), e)))?;

        log::info!("Fetched {} rows from {}", frame.height(), path.display());
        Ok(frame)
    }
}

/// Loads a survey, renames its columns and parses its timestamps.
pub fn load_survey(
    service: &dyn SheetService,
    spreadsheet: &str,
    config: &SheetConfig,
) -> Result<DataFrame> {
    let mut frame = service.fetch_sheet(spreadsheet)?;

    for (from, to) in &config.column_renames {
        if frame.column(from).is_ok() {
            frame.rename(from, to)?;
        }
    }

    let column = frame.column(&config.timestamp_column).map_err(|_| {
        CorpusError::Validation(format!("no column named `{}`", config.timestamp_column))
    })?;
    if !matches!(column.dtype(), DataType::Datetime(_, _)) {
        let parsed = parse_timestamps(column, &config.timestamp_formats)?;
        frame.with_column(parsed)?;
    }
    Ok(frame)
}

/// Coerces a column to date-times; empty and null cells become null.
fn parse_timestamps(column: &Series, formats: &[String]) -> Result<Series> {
    let parsed = string_values(column)?
        .iter()
        .map(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(None);
            }
            formats
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(Some)
                .ok_or_else(|| CorpusError::Validation(format!("unrecognized timestamp `{}`", raw)))
        })
        .collect::<Result<Vec<Option<NaiveDateTime>>>>()?;

    Ok(Series::new(column.name(), parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct Canned(DataFrame);

    impl SheetService for Canned {
        fn fetch_sheet(&self, _spreadsheet: &str) -> Result<DataFrame> {
            Ok(self.0.clone())
        }
    }

    /// Epoch offset of `ts` in the frame's time unit.
    fn epoch(ts: NaiveDateTime, unit: TimeUnit) -> i64 {
        let utc = ts.and_utc();
        match unit {
            TimeUnit::Nanoseconds => utc.timestamp_nanos_opt().unwrap(),
            TimeUnit::Microseconds => utc.timestamp_micros(),
            TimeUnit::Milliseconds => utc.timestamp_millis(),
        }
    }

    #[test]
    fn test_load_survey_renames_and_parses() {
        let service = Canned(
            df!(
                "Timestamp" => ["6/19/2015 14:30:05", ""],
                "do you want to help" => ["Yes", "No"],
                "years" => [3i64, 1]
            )
            .unwrap(),
        );

        let frame = load_survey(&service, "survey", &SheetConfig::default()).unwrap();
        assert_eq!(frame.get_column_names(), &["timestamp", "help", "years"]);

        let expected = NaiveDate::from_ymd_opt(2015, 6, 19)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap();
        let timestamps = frame.column("timestamp").unwrap().datetime().unwrap();
        assert_eq!(timestamps.get(0), Some(epoch(expected, timestamps.time_unit())));
        assert_eq!(timestamps.get(1), None);
    }

    #[test]
    fn test_bad_timestamp() {
        let service = Canned(df!("Timestamp" => ["yesterday"]).unwrap());
        let err = load_survey(&service, "survey", &SheetConfig::default()).unwrap_err();
        assert!(matches!(err, CorpusError::Validation(_)));
    }

    #[test]
    fn test_missing_timestamp_column() {
        let service = Canned(df!("answer" => ["x"]).unwrap());
        assert!(matches!(
            load_survey(&service, "survey", &SheetConfig::default()),
            Err(CorpusError::Validation(_))
        ));
    }

    #[test]
    fn test_csv_export() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("responses.csv"),
            "Timestamp,score,comment\n2015-06-19 14:30:05,4,great talk\n",
        )
        .unwrap();

        let service = CsvExportService::new(dir.path());
        let frame = service.fetch_sheet("responses").unwrap();
        assert_eq!(frame.height(), 1);
        assert_eq!(frame.column("score").unwrap().i64().unwrap().get(0), Some(4));
        assert_eq!(
            frame.column("comment").unwrap().str().unwrap().get(0),
            Some("great talk")
        );

        assert!(matches!(
            service.fetch_sheet("absent"),
            Err(CorpusError::Sheet(_))
        ));
    }
}
