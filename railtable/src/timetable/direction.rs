use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::timetable::TimetableError;

/// one of the two directions of travel along a route. GTFS direction_id 0
/// is read as north and 1 as south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::North, Direction::South];

    /// reads the direction_id column of a trip
    pub fn from_direction_id(
        direction_id: Option<u8>,
        trip_id: &str,
    ) -> Result<Direction, TimetableError> {
        match direction_id {
            Some(0) => Ok(Direction::North),
            Some(1) => Ok(Direction::South),
            Some(other) => Err(TimetableError::MalformedFeed(format!(
                "trip {trip_id} has direction_id {other}, expected 0 or 1"
            ))),
            None => Err(TimetableError::MalformedFeed(format!(
                "trip {trip_id} has no direction_id"
            ))),
        }
    }

    pub fn is_south(&self) -> bool {
        matches!(self, Direction::South)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_direction_id() {
        assert_eq!(
            Direction::from_direction_id(Some(0), "t").unwrap(),
            Direction::North
        );
        assert_eq!(
            Direction::from_direction_id(Some(1), "t").unwrap(),
            Direction::South
        );
        assert!(matches!(
            Direction::from_direction_id(Some(2), "t"),
            Err(TimetableError::MalformedFeed(_))
        ));
        assert!(matches!(
            Direction::from_direction_id(None, "t"),
            Err(TimetableError::MalformedFeed(_))
        ));
    }

    #[test]
    fn test_north_sorts_first() {
        assert!(Direction::North < Direction::South);
        assert_eq!(Direction::South.to_string(), "SOUTH");
    }
}
