use chrono::NaiveTime;

use crate::timetable::{Direction, ScheduledStop, WeekdayClass};

/// one column entry of a trip: a desired stop (or virtual stop) name, and the
/// time the trip reaches it. the time is absent when the trip skips the stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectedStop {
    pub stop: String,
    pub time: Option<NaiveTime>,
}

impl ProjectedStop {
    pub fn served(stop: &str, time: NaiveTime) -> ProjectedStop {
        ProjectedStop {
            stop: stop.to_string(),
            time: Some(time),
        }
    }

    pub fn absent(stop: &str) -> ProjectedStop {
        ProjectedStop {
            stop: stop.to_string(),
            time: None,
        }
    }
}

/// a trip as it appears in one weekday class listing of a timetable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripProjection {
    pub trip_id: String,
    pub weekday_class: WeekdayClass,
    pub direction: Direction,
    /// first stop of the full trip, before filtering to the desired stops
    pub origin: ScheduledStop,
    /// last stop of the full trip, before filtering to the desired stops
    pub destination: ScheduledStop,
    pub stops: Vec<ProjectedStop>,
}

impl TripProjection {
    pub fn times(&self) -> impl Iterator<Item = Option<NaiveTime>> + '_ {
        self.stops.iter().map(|s| s.time)
    }

    pub fn stop_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.stops.iter().map(|s| s.stop.as_str())
    }
}
