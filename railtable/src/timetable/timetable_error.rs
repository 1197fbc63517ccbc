use std::path::PathBuf;

use chrono::NaiveDate;
use itertools::Itertools;

use crate::timetable::{date::date_codec::gtfs::GTFS_DATE_FORMAT, Direction};

#[derive(thiserror::Error, Debug)]
pub enum TimetableError {
    #[error("Route {0:?} not found: use the 'list' operation to see available routes")]
    UnknownRoute(String),
    #[error("Stop {0:?} not found: use the 'list' operation to see available stops")]
    UnknownStop(String),
    #[error("GTFS feed is malformed: {0}")]
    MalformedFeed(String),
    #[error("Missing both arrival and departure times: {0}")]
    MissingAllStopTimes(String),
    #[error(
        "reference date ({}) is outside dates in calendar.txt ({} to {}), the feed needs a refresh",
        .reference.format(GTFS_DATE_FORMAT),
        .start.format(GTFS_DATE_FORMAT),
        .end.format(GTFS_DATE_FORMAT)
    )]
    StaleFeed {
        reference: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },
    #[error("virtual stop {0:?} cannot have a zero minute offset from its anchor stop")]
    ZeroOffsetVirtualStop(String),
    #[error("no {0} trip was found that serves all desired stops")]
    NoTemplateTrip(Direction),
    #[error("found trip with inverted directionality: {0}")]
    InvertedDirectionality(String),
    #[error("row for trip {0} does not match the column layout of its table")]
    InconsistentRow(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("error due to dataset contents: {0}")]
    InvalidData(String),
    #[error("Error reading from '{path}': {message}")]
    FeedRead { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    Write { path: PathBuf, message: String },
}

/// collapses a list of errors into a single configuration error, used when
/// several user inputs fail validation at once.
pub fn configuration_errors(errors: &[TimetableError]) -> TimetableError {
    let concatenated = errors.iter().map(|e| e.to_string()).join("\n  ");
    TimetableError::InvalidConfiguration(format!("[\n  {concatenated}\n]"))
}
