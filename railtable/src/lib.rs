//! builds printable rail timetables for a route and a chosen set of stops
//! from a static GTFS feed.
pub mod app;
pub mod feed;
pub mod output;
pub mod timetable;
