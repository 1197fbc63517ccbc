use std::collections::HashMap;

use serde::Serialize;

use crate::{
    feed::FeedTables,
    timetable::{Direction, DirectionOrdering, StopAlias, TimetableError, TripProjection},
};

/// cell text for a stop the trip does not serve
pub const ABSENT_TIME: &str = "X";
pub const TIME_FORMAT: &str = "%H:%M";

/// resolves the text shown for a stop: the user's alias when one was given,
/// otherwise the feed's name.
#[derive(Clone, Debug, Default)]
pub struct StopNameResolver {
    names_by_id: HashMap<String, String>,
    aliases: HashMap<String, String>,
}

impl StopNameResolver {
    pub fn new(feed: &FeedTables, aliases: &[StopAlias]) -> Result<StopNameResolver, TimetableError> {
        let mut alias_map = HashMap::new();
        for StopAlias { stop, alias } in aliases {
            let (stop, alias) = (stop.trim(), alias.trim());
            let _ = feed.stop_ids_by_name(stop)?;
            if !alias.is_empty() {
                alias_map.insert(stop.to_string(), alias.to_string());
            }
        }
        Ok(StopNameResolver {
            names_by_id: feed.stop_names_by_id(),
            aliases: alias_map,
        })
    }

    /// header text of a timetable column, which is keyed by stop name
    pub fn column_name<'a>(&'a self, column: &'a str) -> &'a str {
        self.aliases.get(column).map(|a| a.as_str()).unwrap_or(column)
    }

    /// text for a feed stop id, used for trip origins and destinations
    pub fn stop_name<'a>(&'a self, stop_id: &'a str) -> &'a str {
        let name = self
            .names_by_id
            .get(stop_id)
            .map(|n| n.as_str())
            .unwrap_or(stop_id);
        self.column_name(name)
    }
}

/// the finished timetable of one direction: a header row and one row per
/// trip listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputTable {
    pub direction: Direction,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl OutputTable {
    /// header followed by the data rows
    pub fn records(&self) -> impl Iterator<Item = &Vec<String>> + '_ {
        std::iter::once(&self.header).chain(self.rows.iter())
    }
}

/// renders sorted, reconciled projections as rows under a header built from
/// the canonical stop order. when `max_rows` is set and non-zero, rows past
/// the cap are dropped with a warning.
pub fn assemble_table(
    ordering: &DirectionOrdering,
    projections: &[TripProjection],
    names: &StopNameResolver,
    trip_id_column: bool,
    max_rows: Option<usize>,
) -> Result<OutputTable, TimetableError> {
    let mut header = vec![];
    if trip_id_column {
        header.push(String::from("Trip ID"));
    }
    header.push(String::from("Days"));
    header.push(String::from("Origin"));
    header.extend(ordering.stops.iter().map(|s| names.column_name(s).to_string()));
    header.push(String::from("Destination"));

    let cap = max_rows.filter(|m| *m > 0);
    let mut rows = Vec::with_capacity(projections.len());
    for projection in projections {
        if let Some(cap) = cap {
            if rows.len() >= cap {
                log::warn!(
                    "{} trips count was capped at {cap}, but there were more",
                    ordering.direction
                );
                break;
            }
        }
        let consistent = projection.stops.len() == ordering.len()
            && projection.stop_names().eq(ordering.stops.iter().map(|s| s.as_str()));
        if !consistent {
            return Err(TimetableError::InconsistentRow(projection.trip_id.clone()));
        }
        let mut row = Vec::with_capacity(header.len());
        if trip_id_column {
            row.push(projection.trip_id.clone());
        }
        row.push(projection.weekday_class.label().to_string());
        row.push(names.stop_name(&projection.origin.stop_id).to_string());
        row.extend(projection.times().map(|t| match t {
            Some(time) => time.format(TIME_FORMAT).to_string(),
            None => String::from(ABSENT_TIME),
        }));
        row.push(names.stop_name(&projection.destination.stop_id).to_string());
        rows.push(row);
    }
    Ok(OutputTable {
        direction: ordering.direction,
        header,
        rows,
    })
}
