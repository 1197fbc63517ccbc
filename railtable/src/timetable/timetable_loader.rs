use std::collections::HashMap;

use chrono::NaiveTime;
use indexmap::IndexMap;

use crate::{
    feed::StopTimeRow,
    timetable::{TimetableError, TripTag},
};

/// one stop of a trip, as a time of day
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledStop {
    pub stop_sequence: u32,
    pub stop_id: String,
    pub time: NaiveTime,
}

/// parses a GTFS `H:MM:SS` time into a time of day. hours past 23 mark
/// trips continuing after midnight and wrap modulo 24; the date is not
/// advanced. seconds are validated but dropped, as timetables show minutes.
pub fn parse_stop_time(text: &str) -> Result<NaiveTime, TimetableError> {
    let malformed = || TimetableError::MalformedFeed(format!("invalid stop time {text:?}"));
    let (hour, minute, second) = match text.trim().split(':').collect::<Vec<_>>()[..] {
        [h, m, s] => (h, m, s),
        _ => return Err(malformed()),
    };
    let hour: u32 = hour.parse().map_err(|_| malformed())?;
    let minute: u32 = minute.parse().map_err(|_| malformed())?;
    let _: u32 = second.parse().map_err(|_| malformed())?;
    NaiveTime::from_hms_opt(hour % 24, minute, 0).ok_or_else(malformed)
}

/// builds the ordered stop list of every selected trip, sorted by the
/// explicit stop_sequence. sequences need not be contiguous or start at zero.
/// an empty arrival time falls back to the departure time.
pub fn load_timetables(
    trips: &IndexMap<String, TripTag>,
    stop_times: &[StopTimeRow],
) -> Result<HashMap<String, Vec<ScheduledStop>>, TimetableError> {
    let mut result: HashMap<String, Vec<ScheduledStop>> = HashMap::new();
    for row in stop_times.iter().filter(|r| trips.contains_key(&r.trip_id)) {
        let time_text = if row.arrival_time.is_empty() {
            &row.departure_time
        } else {
            &row.arrival_time
        };
        if time_text.is_empty() {
            let msg = format!("trip {} at stop {}", row.trip_id, row.stop_id);
            return Err(TimetableError::MissingAllStopTimes(msg));
        }
        let stop = ScheduledStop {
            stop_sequence: row.stop_sequence,
            stop_id: row.stop_id.clone(),
            time: parse_stop_time(time_text)?,
        };
        result.entry(row.trip_id.clone()).or_default().push(stop);
    }
    for stops in result.values_mut() {
        stops.sort_by_key(|s| s.stop_sequence);
    }
    log::debug!("loaded stop times for {} trips", result.len());
    Ok(result)
}
