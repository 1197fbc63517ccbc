use chrono::{Days, NaiveDate};

use crate::timetable::{
    date::{date_codec::app::APP_DATE_FORMAT, DateIterator},
    TimetableError,
};

/// adds (or when step is negative, subtracts) days from a date.
pub fn step_date(date: NaiveDate, step: i64) -> Result<NaiveDate, TimetableError> {
    if step == 0 {
        return Ok(date);
    }
    let step_days = Days::new(step.unsigned_abs());
    let stepped = if step < 0 {
        date.checked_sub_days(step_days)
    } else {
        date.checked_add_days(step_days)
    };
    stepped.ok_or_else(|| {
        let op = if step < 0 { "subtracting" } else { "adding" };
        let msg = format!(
            "failure {} {} days to date {} due to bounds error",
            op,
            step.unsigned_abs(),
            date.format(APP_DATE_FORMAT)
        );
        TimetableError::InvalidData(msg)
    })
}

/// tests that a date falls within the inclusive range [start, end].
pub fn within_range(target: &NaiveDate, start: &NaiveDate, end: &NaiveDate) -> bool {
    start <= target && target <= end
}

/// the look-ahead window used to check near-term service coverage:
/// every day in [reference_date, reference_date + horizon_days], inclusive.
pub fn look_ahead_window(
    reference_date: NaiveDate,
    horizon_days: u64,
) -> Result<DateIterator, TimetableError> {
    let horizon = i64::try_from(horizon_days).map_err(|_| {
        TimetableError::InvalidData(format!("look-ahead of {horizon_days} days is too large"))
    })?;
    let end = step_date(reference_date, horizon)?;
    Ok(DateIterator::new(reference_date, Some(end)))
}
