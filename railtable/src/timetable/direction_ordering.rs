use itertools::Itertools;

use crate::timetable::{Direction, ProjectedStop, TimetableError, TripProjection};

/// the canonical column order of one direction's timetable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionOrdering {
    pub direction: Direction,
    pub stops: Vec<String>,
}

impl DirectionOrdering {
    /// takes the stop order of the first projection that already serves all
    /// `column_count` columns.
    pub fn from_template(
        direction: Direction,
        projections: &[TripProjection],
        column_count: usize,
    ) -> Result<DirectionOrdering, TimetableError> {
        let template = projections
            .iter()
            .find(|p| p.stops.len() == column_count)
            .ok_or(TimetableError::NoTemplateTrip(direction))?;
        log::debug!(
            "{direction} stop order taken from trip {}: {}",
            template.trip_id,
            template.stop_names().join(", ")
        );
        Ok(DirectionOrdering {
            direction,
            stops: template.stop_names().map(String::from).collect_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// lays a projection out on the canonical columns, filling skipped stops
    /// with absent entries.
    ///
    /// # Errors
    ///
    /// [`TimetableError::InvertedDirectionality`] when the projection serves
    /// its stops in an order the canonical columns cannot hold.
    pub fn reconcile(&self, projection: TripProjection) -> Result<TripProjection, TimetableError> {
        let stops = reconcile_stops(&self.stops, projection.stops);
        if stops.len() > self.len() {
            return Err(TimetableError::InvertedDirectionality(projection.trip_id));
        }
        Ok(TripProjection {
            stops,
            ..projection
        })
    }
}

/// merges an actual stop list into a canonical one. walking the canonical
/// stops left to right, a matching actual stop is taken and both cursors
/// advance; otherwise an absent entry is emitted and only the canonical
/// cursor advances. actual stops left over at the end are appended, so a
/// result longer than the canonical list means the orders disagree.
pub fn reconcile_stops(canonical: &[String], actual: Vec<ProjectedStop>) -> Vec<ProjectedStop> {
    let mut result = Vec::with_capacity(canonical.len());
    let mut remaining = actual.into_iter().peekable();
    for expected in canonical {
        match remaining.next_if(|s| &s.stop == expected) {
            Some(served) => result.push(served),
            None => result.push(ProjectedStop::absent(expected)),
        }
    }
    result.extend(remaining);
    result
}
