use chrono::{NaiveTime, TimeDelta};

use crate::timetable::{Direction, TimetableError, VirtualStopConfig};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// which side of its anchor a virtual stop is listed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VirtualStopPlacement {
    BeforeAnchor,
    AfterAnchor,
}

/// a synthetic stop that is not in the feed, placed at a fixed number of
/// minutes from a real anchor stop. the name doubles as its identifier.
///
/// the offset is signed relative to the south direction: a positive offset
/// is listed before its anchor on south trips and after it on north trips,
/// so the virtual stop stays on the same side of the anchor along the line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualStop {
    pub name: String,
    /// name of the real stop this one is placed relative to
    pub anchor: String,
    pub offset_minutes: i64,
    delta: TimeDelta,
}

impl VirtualStop {
    pub fn new(
        name: &str,
        anchor: &str,
        offset_minutes: i64,
    ) -> Result<VirtualStop, TimetableError> {
        if offset_minutes == 0 {
            return Err(TimetableError::ZeroOffsetVirtualStop(name.to_string()));
        }
        if offset_minutes.abs() >= MINUTES_PER_DAY {
            let msg = format!(
                "virtual stop {name:?} has offset {offset_minutes}, which must be less than one day"
            );
            return Err(TimetableError::InvalidConfiguration(msg));
        }
        let delta = TimeDelta::try_minutes(offset_minutes.abs()).ok_or_else(|| {
            let msg = format!("virtual stop {name:?} has out of range offset {offset_minutes}");
            TimetableError::InvalidConfiguration(msg)
        })?;
        Ok(VirtualStop {
            name: name.to_string(),
            anchor: anchor.to_string(),
            offset_minutes,
            delta,
        })
    }

    pub fn placement(&self, direction: Direction) -> VirtualStopPlacement {
        if direction.is_south() == (self.offset_minutes > 0) {
            VirtualStopPlacement::BeforeAnchor
        } else {
            VirtualStopPlacement::AfterAnchor
        }
    }

    /// time at the virtual stop for a trip reaching the anchor at
    /// `anchor_time`. wraps around midnight without changing the day.
    pub fn time_from_anchor(&self, direction: Direction, anchor_time: NaiveTime) -> NaiveTime {
        match self.placement(direction) {
            VirtualStopPlacement::BeforeAnchor => anchor_time - self.delta,
            VirtualStopPlacement::AfterAnchor => anchor_time + self.delta,
        }
    }
}

impl TryFrom<&VirtualStopConfig> for VirtualStop {
    type Error = TimetableError;

    fn try_from(value: &VirtualStopConfig) -> Result<Self, Self::Error> {
        VirtualStop::new(value.name.trim(), value.anchor.trim(), value.offset_minutes)
    }
}
