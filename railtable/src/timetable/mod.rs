//! the timetable projection engine. turns the tables of a static feed into
//! one rectangular timetable per direction for a route and a chosen set of
//! stops.
pub mod calendar_resolver;
pub mod date;
pub mod direction;
pub mod direction_ordering;
pub mod service_classification;
pub mod stop_projector;
pub mod table_assembler;
pub mod time_comparator;
pub mod timetable_config;
pub mod timetable_error;
pub mod timetable_loader;
pub mod timetable_ops;
pub mod trip_filter;
pub mod trip_projection;
pub mod virtual_stop;
pub mod weekday_class;

pub use calendar_resolver::ResolvedCalendar;
pub use direction::Direction;
pub use direction_ordering::DirectionOrdering;
pub use service_classification::ServiceClassification;
pub use stop_projector::{DesiredStops, StopProjector};
pub use table_assembler::{OutputTable, StopNameResolver};
pub use timetable_config::{StopAlias, TimetableConfig, VirtualStopConfig};
pub use timetable_error::TimetableError;
pub use timetable_loader::ScheduledStop;
pub use timetable_ops::{build_timetables, Timetables};
pub use trip_filter::TripTag;
pub use trip_projection::{ProjectedStop, TripProjection};
pub use virtual_stop::{VirtualStop, VirtualStopPlacement};
pub use weekday_class::WeekdayClass;
