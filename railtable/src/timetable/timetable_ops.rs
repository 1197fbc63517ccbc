use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::{
    feed::FeedTables,
    timetable::{
        direction_ordering::DirectionOrdering,
        table_assembler::{self, OutputTable, StopNameResolver},
        time_comparator, timetable_loader, trip_filter, DesiredStops, Direction,
        ResolvedCalendar, ScheduledStop, StopProjector, TimetableConfig, TimetableError, TripTag,
    },
};

/// the timetables of one run, one per direction
#[derive(Clone, Debug)]
pub struct Timetables {
    pub routes: Vec<String>,
    pub reference_date: NaiveDate,
    pub tables: BTreeMap<Direction, OutputTable>,
}

/// runs the whole projection pipeline for a feed: resolves the calendar,
/// selects and loads the trips of the configured routes, projects them on
/// the desired stops and assembles one table per direction.
///
/// # Errors
///
/// any fatal condition along the way aborts the run, see [`TimetableError`].
pub fn build_timetables(
    feed: &FeedTables,
    config: &TimetableConfig,
) -> Result<Timetables, TimetableError> {
    config.validate()?;
    let routes = config.route_names();
    let reference_date = config.reference_date_or_today();
    log::info!(
        "building timetables for routes {routes:?} on {reference_date}, stops {:?}",
        config.stop_names()
    );

    let mut route_ids = HashSet::new();
    for route in routes.iter() {
        route_ids.extend(feed.route_ids_by_name(route)?);
    }
    let desired = DesiredStops::new(feed, &config.stop_names(), &config.virtual_stops)?;
    let names = StopNameResolver::new(feed, &config.aliases)?;

    let calendar = ResolvedCalendar::resolve(
        &feed.calendar,
        &feed.calendar_dates,
        reference_date,
        config.look_ahead_days,
    )?;
    let trips = trip_filter::filter_trips(&feed.trips, &route_ids, &calendar)?;
    let timetables = timetable_loader::load_timetables(&trips, &feed.stop_times)?;

    let projector = StopProjector::new(&desired, config.allow_irregular);
    let mut tables = BTreeMap::new();
    for direction in Direction::ALL {
        let inputs = DirectionInputs {
            trips: &trips,
            timetables: &timetables,
            calendar: &calendar,
        };
        let table = build_direction(direction, &projector, &desired, &names, inputs, config)?;
        tables.insert(direction, table);
    }
    Ok(Timetables {
        routes,
        reference_date,
        tables,
    })
}

struct DirectionInputs<'a> {
    trips: &'a IndexMap<String, TripTag>,
    timetables: &'a HashMap<String, Vec<ScheduledStop>>,
    calendar: &'a ResolvedCalendar,
}

fn build_direction(
    direction: Direction,
    projector: &StopProjector,
    desired: &DesiredStops,
    names: &StopNameResolver,
    inputs: DirectionInputs,
    config: &TimetableConfig,
) -> Result<OutputTable, TimetableError> {
    let projections =
        projector.project_direction(direction, inputs.trips, inputs.timetables, inputs.calendar);
    let ordering = DirectionOrdering::from_template(direction, &projections, desired.column_count())?;
    let mut reconciled = projections
        .into_iter()
        .map(|p| ordering.reconcile(p))
        .collect::<Result<Vec<_>, _>>()?;
    time_comparator::stable_insertion_sort_by(&mut reconciled, time_comparator::compare_projections);
    table_assembler::assemble_table(
        &ordering,
        &reconciled,
        names,
        config.trip_id_column,
        config.max_rows,
    )
}
