use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    feed::FeedTables,
    timetable::{
        Direction, ProjectedStop, ResolvedCalendar, ScheduledStop, ServiceClassification,
        TimetableError, TripProjection, TripTag, VirtualStop, VirtualStopConfig,
        VirtualStopPlacement, WeekdayClass,
    },
};

/// the stops a timetable is built for. each desired stop name becomes one
/// column, shared by every feed stop id carrying that name. virtual stops
/// add one column each.
#[derive(Clone, Debug)]
pub struct DesiredStops {
    names: Vec<String>,
    column_by_stop_id: HashMap<String, String>,
    virtual_stops: Vec<VirtualStop>,
}

impl DesiredStops {
    /// resolves desired stop names and virtual stop anchors against the feed.
    ///
    /// # Errors
    ///
    /// [`TimetableError::UnknownStop`] for a name not in the feed,
    /// [`TimetableError::ZeroOffsetVirtualStop`] for a virtual stop without an
    /// offset, and [`TimetableError::InvalidConfiguration`] when a virtual
    /// stop's name is already taken or its anchor is not a desired stop.
    pub fn new(
        feed: &FeedTables,
        stop_names: &[String],
        virtual_stops: &[VirtualStopConfig],
    ) -> Result<DesiredStops, TimetableError> {
        let names = stop_names
            .iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unique()
            .collect_vec();
        let mut column_by_stop_id = HashMap::new();
        for name in names.iter() {
            for stop_id in feed.stop_ids_by_name(name)? {
                column_by_stop_id.insert(stop_id, name.clone());
            }
        }

        let mut taken: HashSet<&str> = names.iter().map(|n| n.as_str()).collect();
        let mut resolved = Vec::with_capacity(virtual_stops.len());
        for conf in virtual_stops {
            let virtual_stop = VirtualStop::try_from(conf)?;
            let _ = feed.stop_ids_by_name(&virtual_stop.anchor)?;
            if !names.contains(&virtual_stop.anchor) {
                let msg = format!(
                    "virtual stop {:?} is anchored on {:?}, which is not one of the desired stops",
                    virtual_stop.name, virtual_stop.anchor
                );
                return Err(TimetableError::InvalidConfiguration(msg));
            }
            resolved.push(virtual_stop);
        }
        for virtual_stop in resolved.iter() {
            if !taken.insert(virtual_stop.name.as_str()) {
                let msg = format!(
                    "virtual stop name {:?} is already used by another stop",
                    virtual_stop.name
                );
                return Err(TimetableError::InvalidConfiguration(msg));
            }
        }

        Ok(DesiredStops {
            names,
            column_by_stop_id,
            virtual_stops: resolved,
        })
    }

    /// number of columns every trip of a timetable is laid out on: desired
    /// real stop names plus virtual stops.
    pub fn column_count(&self) -> usize {
        self.names.len() + self.virtual_stops.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn virtual_stops(&self) -> &[VirtualStop] {
        &self.virtual_stops
    }

    /// the column a feed stop id belongs to, if it is a desired stop
    pub fn column_for(&self, stop_id: &str) -> Option<&str> {
        self.column_by_stop_id.get(stop_id).map(|s| s.as_str())
    }

    fn virtual_stops_at<'a>(&'a self, anchor: &'a str) -> impl Iterator<Item = &'a VirtualStop> {
        self.virtual_stops.iter().filter(move |v| v.anchor == anchor)
    }
}

/// reduces trips to the desired stops, weaving in virtual stops.
pub struct StopProjector<'a> {
    desired: &'a DesiredStops,
    allow_irregular: bool,
}

impl<'a> StopProjector<'a> {
    pub fn new(desired: &'a DesiredStops, allow_irregular: bool) -> StopProjector<'a> {
        StopProjector {
            desired,
            allow_irregular,
        }
    }

    /// filters a full, ordered stop list down to the desired stops and adds
    /// the virtual stops anchored on them. returns None when fewer than two
    /// desired stops are served, as such a trip says nothing about travel
    /// between them.
    pub fn project_stops(
        &self,
        direction: Direction,
        stops: &[ScheduledStop],
    ) -> Option<Vec<ProjectedStop>> {
        let retained = stops
            .iter()
            .filter_map(|s| self.desired.column_for(&s.stop_id).map(|c| (c, s)))
            .collect_vec();
        if retained.len() < 2 {
            return None;
        }
        let mut result = Vec::with_capacity(self.desired.column_count());
        for (column, stop) in retained {
            let mut before = vec![];
            let mut after = vec![];
            for virtual_stop in self.desired.virtual_stops_at(column) {
                let projected = ProjectedStop::served(
                    &virtual_stop.name,
                    virtual_stop.time_from_anchor(direction, stop.time),
                );
                match virtual_stop.placement(direction) {
                    VirtualStopPlacement::BeforeAnchor => before.push(projected),
                    VirtualStopPlacement::AfterAnchor => after.push(projected),
                }
            }
            before.sort_by_key(|p| p.time);
            after.sort_by_key(|p| p.time);
            result.extend(before);
            result.push(ProjectedStop::served(column, stop.time));
            result.extend(after);
        }
        Some(result)
    }

    /// builds every projection of one direction. projections come out grouped
    /// by weekday class, and within a class ordered by the time the full trip
    /// starts, then by trip id.
    pub fn project_direction(
        &self,
        direction: Direction,
        trips: &IndexMap<String, TripTag>,
        timetables: &HashMap<String, Vec<ScheduledStop>>,
        calendar: &ResolvedCalendar,
    ) -> Vec<TripProjection> {
        let candidates = trips
            .iter()
            .filter(|(_, tag)| tag.direction == direction)
            .filter_map(|(trip_id, tag)| self.candidate(trip_id, tag, timetables, calendar))
            .sorted_by(|a, b| (a.origin.time, a.trip_id).cmp(&(b.origin.time, b.trip_id)))
            .collect_vec();

        let mut result = vec![];
        for weekday_class in WeekdayClass::ALL {
            for candidate in candidates.iter() {
                if !candidate
                    .classification
                    .is_eligible(weekday_class, self.allow_irregular)
                {
                    continue;
                }
                if let Some(projected) = candidate.projected.as_ref() {
                    result.push(TripProjection {
                        trip_id: candidate.trip_id.to_string(),
                        weekday_class,
                        direction,
                        origin: candidate.origin.clone(),
                        destination: candidate.destination.clone(),
                        stops: projected.clone(),
                    });
                }
            }
        }
        log::info!(
            "{direction} has {} trip listings across {} trips",
            result.len(),
            candidates.len()
        );
        result
    }

    fn candidate<'b>(
        &self,
        trip_id: &'b str,
        tag: &'b TripTag,
        timetables: &'b HashMap<String, Vec<ScheduledStop>>,
        calendar: &'b ResolvedCalendar,
    ) -> Option<Candidate<'b>> {
        let stops = timetables.get(trip_id).map(|s| s.as_slice()).unwrap_or_default();
        let (Some(origin), Some(destination)) = (stops.first(), stops.last()) else {
            log::debug!("skipping trip {trip_id} because it has no stop times");
            return None;
        };
        let Some(classification) = calendar.classification(&tag.service_id) else {
            log::debug!(
                "skipping trip {trip_id} because service {:?} is not in calendar.txt",
                tag.service_id
            );
            return None;
        };
        if classification.is_irregular && !self.allow_irregular {
            log::debug!("skipping trip {trip_id} because it has an irregular schedule");
            return None;
        }
        Some(Candidate {
            trip_id,
            classification,
            origin,
            destination,
            projected: self.project_stops(tag.direction, stops),
        })
    }
}

struct Candidate<'a> {
    trip_id: &'a str,
    classification: &'a ServiceClassification,
    origin: &'a ScheduledStop,
    destination: &'a ScheduledStop,
    projected: Option<Vec<ProjectedStop>>,
}
