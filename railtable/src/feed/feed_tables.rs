use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use itertools::Itertools;

use super::{read_rows, CalendarDateRow, CalendarRow, RouteRow, StopRow, StopTimeRow, TripRow};
use crate::timetable::TimetableError;

/// the in-memory tables of one static feed.
#[derive(Clone, Debug, Default)]
pub struct FeedTables {
    pub routes: Vec<RouteRow>,
    pub stops: Vec<StopRow>,
    pub trips: Vec<TripRow>,
    pub stop_times: Vec<StopTimeRow>,
    pub calendar: Vec<CalendarRow>,
    pub calendar_dates: Vec<CalendarDateRow>,
}

impl FeedTables {
    /// reads the feed stored as text files in a directory. calendar_dates.txt
    /// is optional, every other file is required.
    pub fn read(directory: &Path) -> Result<FeedTables, TimetableError> {
        log::info!("Loading GTFS feed from {directory:?}");
        let tables = FeedTables {
            routes: read_rows(directory, "routes.txt", true)?,
            stops: read_rows(directory, "stops.txt", true)?,
            trips: read_rows(directory, "trips.txt", true)?,
            stop_times: read_rows(directory, "stop_times.txt", true)?,
            calendar: read_rows(directory, "calendar.txt", true)?,
            calendar_dates: read_rows(directory, "calendar_dates.txt", false)?,
        };
        log::info!(
            "feed has {} routes, {} stops, {} trips, {} stop times",
            tables.routes.len(),
            tables.stops.len(),
            tables.trips.len(),
            tables.stop_times.len()
        );
        Ok(tables)
    }

    /// all route ids whose display name equals the given name.
    pub fn route_ids_by_name(&self, name: &str) -> Result<HashSet<String>, TimetableError> {
        let ids: HashSet<String> = self
            .routes
            .iter()
            .filter(|r| r.display_name() == name)
            .map(|r| r.route_id.clone())
            .collect();
        if ids.is_empty() {
            return Err(TimetableError::UnknownRoute(name.to_string()));
        }
        Ok(ids)
    }

    /// all stop ids with the given name. one station is often listed under
    /// several ids, such as one per platform.
    pub fn stop_ids_by_name(&self, name: &str) -> Result<HashSet<String>, TimetableError> {
        let ids: HashSet<String> = self
            .stops
            .iter()
            .filter(|s| s.stop_name == name)
            .map(|s| s.stop_id.clone())
            .collect();
        if ids.is_empty() {
            return Err(TimetableError::UnknownStop(name.to_string()));
        }
        Ok(ids)
    }

    /// lookup from stop id to the feed's name for it
    pub fn stop_names_by_id(&self) -> HashMap<String, String> {
        self.stops
            .iter()
            .map(|s| (s.stop_id.clone(), s.stop_name.clone()))
            .collect()
    }

    /// sorted, de-duplicated route display names
    pub fn route_names(&self) -> Vec<&str> {
        self.routes
            .iter()
            .map(|r| r.display_name())
            .sorted()
            .dedup()
            .collect_vec()
    }

    /// sorted, de-duplicated stop names
    pub fn stop_names(&self) -> Vec<&str> {
        self.stops
            .iter()
            .map(|s| s.stop_name.as_str())
            .sorted()
            .dedup()
            .collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_directory() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join("dart")
    }

    #[test]
    fn test_read_fixture_feed() {
        let feed = FeedTables::read(&fixture_directory()).expect("fixture feed should load");
        assert_eq!(feed.routes.len(), 2);
        assert_eq!(feed.calendar.len(), 3);
        assert!(!feed.stop_times.is_empty());
        let weekday = feed
            .calendar
            .iter()
            .find(|c| c.service_id == "WEEKDAY")
            .expect("WEEKDAY service in fixture");
        assert!(weekday.monday && weekday.friday && !weekday.saturday);
        assert!(feed
            .calendar_dates
            .iter()
            .any(|cd| cd.service_id == "WEEKDAY" && cd.exception_type == 2));
    }

    #[test]
    fn test_read_missing_directory_fails() {
        let result = FeedTables::read(&fixture_directory().join("does_not_exist"));
        assert!(matches!(result, Err(TimetableError::FeedRead { .. })));
    }

    #[test]
    fn test_name_lookups() {
        let feed = FeedTables::read(&fixture_directory()).expect("fixture feed should load");
        let dart = feed.route_ids_by_name("DART").unwrap();
        assert_eq!(dart, HashSet::from([String::from("DART1")]));
        let tara = feed.stop_ids_by_name("Tara St").unwrap();
        assert_eq!(tara.len(), 2);
        assert!(matches!(
            feed.route_ids_by_name("Luas"),
            Err(TimetableError::UnknownRoute(_))
        ));
        assert!(matches!(
            feed.stop_ids_by_name("Nowhere"),
            Err(TimetableError::UnknownStop(_))
        ));
    }

    #[test]
    fn test_sorted_unique_names() {
        let feed = FeedTables::read(&fixture_directory()).expect("fixture feed should load");
        let stops = feed.stop_names();
        assert!(stops.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(stops.iter().filter(|n| **n == "Tara St").count(), 1);
        assert_eq!(feed.route_names(), vec!["Commuter", "DART"]);
    }
}
