use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timetable::date::date_codec::gtfs::{deserialize_flag, deserialize_naive_date};

/// a row of routes.txt
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RouteRow {
    pub route_id: String,
    #[serde(default)]
    pub route_short_name: String,
    #[serde(default)]
    pub route_long_name: String,
}

impl RouteRow {
    /// the name users know this route by: the long name, or the short name
    /// when the feed leaves the long name empty.
    pub fn display_name(&self) -> &str {
        if self.route_long_name.is_empty() {
            &self.route_short_name
        } else {
            &self.route_long_name
        }
    }
}

/// a row of stops.txt
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct StopRow {
    pub stop_id: String,
    pub stop_name: String,
}

/// a row of trips.txt. direction_id is kept raw, the trip filter validates it.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TripRow {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    #[serde(default)]
    pub direction_id: Option<u8>,
}

/// a row of stop_times.txt. times are kept as text since GTFS allows hours
/// past 23 for trips that continue after midnight.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct StopTimeRow {
    pub trip_id: String,
    #[serde(default)]
    pub arrival_time: String,
    #[serde(default)]
    pub departure_time: String,
    pub stop_id: String,
    pub stop_sequence: u32,
}

/// a row of calendar.txt
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CalendarRow {
    pub service_id: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub monday: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub tuesday: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub wednesday: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub thursday: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub friday: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub saturday: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub sunday: bool,
    #[serde(deserialize_with = "deserialize_naive_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_naive_date")]
    pub end_date: NaiveDate,
}

/// a row of calendar_dates.txt. the exception code stays numeric here so the
/// calendar resolver can reject codes other than 1 (added) and 2 (removed).
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CalendarDateRow {
    pub service_id: String,
    #[serde(deserialize_with = "deserialize_naive_date")]
    pub date: NaiveDate,
    pub exception_type: i32,
}
