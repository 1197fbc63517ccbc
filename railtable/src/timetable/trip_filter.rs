use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{
    feed::TripRow,
    timetable::{Direction, ResolvedCalendar, TimetableError},
};

/// what the timetable needs to know about a trip besides its stops
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripTag {
    pub service_id: String,
    pub direction: Direction,
}

/// selects the trips of the given routes whose service was not excluded by
/// the calendar resolver, keyed by trip id in feed order.
pub fn filter_trips(
    trips: &[TripRow],
    route_ids: &HashSet<String>,
    calendar: &ResolvedCalendar,
) -> Result<IndexMap<String, TripTag>, TimetableError> {
    let mut result = IndexMap::new();
    for trip in trips {
        if !route_ids.contains(&trip.route_id) || calendar.is_excluded(&trip.service_id) {
            continue;
        }
        let direction = Direction::from_direction_id(trip.direction_id, &trip.trip_id)?;
        let tag = TripTag {
            service_id: trip.service_id.clone(),
            direction,
        };
        result.insert(trip.trip_id.clone(), tag);
    }
    log::info!(
        "found {} trips for route ids {:?}",
        result.len(),
        route_ids
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn trip(route_id: &str, service_id: &str, trip_id: &str, direction_id: Option<u8>) -> TripRow {
        TripRow {
            route_id: route_id.to_string(),
            service_id: service_id.to_string(),
            trip_id: trip_id.to_string(),
            direction_id,
        }
    }

    fn calendar_excluding(excluded: &[&str]) -> ResolvedCalendar {
        ResolvedCalendar {
            reference_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            services: HashMap::new(),
            excluded: excluded.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_filters_by_route_and_exclusion() {
        let trips = vec![
            trip("R1", "S1", "t1", Some(0)),
            trip("R2", "S1", "t2", Some(0)),
            trip("R1", "GONE", "t3", Some(1)),
            trip("R1", "S2", "t4", Some(1)),
        ];
        let routes = HashSet::from([String::from("R1")]);
        let result = filter_trips(&trips, &routes, &calendar_excluding(&["GONE"])).unwrap();
        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["t1", "t4"]);
        assert_eq!(result["t1"].direction, Direction::North);
        assert_eq!(result["t4"].direction, Direction::South);
        assert_eq!(result["t4"].service_id, "S2");
    }

    #[test]
    fn test_bad_direction_only_fails_for_selected_trips() {
        let trips = vec![
            trip("R1", "S1", "t1", Some(0)),
            trip("R2", "S1", "t2", Some(7)),
        ];
        let routes = HashSet::from([String::from("R1")]);
        assert!(filter_trips(&trips, &routes, &calendar_excluding(&[])).is_ok());
        let routes = HashSet::from([String::from("R2")]);
        assert!(matches!(
            filter_trips(&trips, &routes, &calendar_excluding(&[])),
            Err(TimetableError::MalformedFeed(_))
        ));
    }
}
