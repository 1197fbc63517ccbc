use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// the schedule buckets a timetable groups its rows by. the declaration
/// order is the order rows are listed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekdayClass {
    /// monday through friday
    WeekdayBlock,
    Saturday,
    Sunday,
}

impl WeekdayClass {
    pub const ALL: [WeekdayClass; 3] = [
        WeekdayClass::WeekdayBlock,
        WeekdayClass::Saturday,
        WeekdayClass::Sunday,
    ];

    /// text shown in the "Days" column of a timetable
    pub fn label(&self) -> &'static str {
        match self {
            WeekdayClass::WeekdayBlock => "Mon-Fri",
            WeekdayClass::Saturday => "Saturday",
            WeekdayClass::Sunday => "Sunday",
        }
    }
}

impl Display for WeekdayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
