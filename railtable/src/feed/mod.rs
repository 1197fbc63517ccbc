//! reading of the static GTFS text files that feed the timetable engine.
mod feed_ops;
mod feed_rows;
mod feed_tables;

pub use feed_ops::read_rows;
pub use feed_rows::{CalendarDateRow, CalendarRow, RouteRow, StopRow, StopTimeRow, TripRow};
pub use feed_tables::FeedTables;
