use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use itertools::Itertools;

use crate::{
    feed::{CalendarDateRow, CalendarRow},
    timetable::{
        date::{date_ops, DateIterator},
        ServiceClassification, TimetableError,
    },
};

/// calendar_dates.txt exception_type for a date where service is added
pub const SERVICE_ADDED: i32 = 1;
/// calendar_dates.txt exception_type for a date where service is removed
pub const SERVICE_REMOVED: i32 = 2;

/// the exception dates of every service, split by exception type.
#[derive(Clone, Debug, Default)]
pub struct ServiceExceptions {
    pub inclusions: HashMap<String, HashSet<NaiveDate>>,
    pub exclusions: HashMap<String, HashSet<NaiveDate>>,
}

impl ServiceExceptions {
    pub fn from_rows(rows: &[CalendarDateRow]) -> Result<ServiceExceptions, TimetableError> {
        let mut result = ServiceExceptions::default();
        for row in rows {
            let target = match row.exception_type {
                SERVICE_ADDED => &mut result.inclusions,
                SERVICE_REMOVED => &mut result.exclusions,
                other => {
                    let msg = format!(
                        "unexpected exception_type {other} in calendar_dates.txt for service {}",
                        row.service_id
                    );
                    return Err(TimetableError::MalformedFeed(msg));
                }
            };
            target
                .entry(row.service_id.clone())
                .or_default()
                .insert(row.date);
        }
        Ok(result)
    }

    /// every date a service actually runs on: its nominal calendar range plus
    /// added dates, minus removed dates. a removal wins over an addition of
    /// the same date.
    pub fn active_dates(&self, row: &CalendarRow) -> HashSet<NaiveDate> {
        let mut dates: HashSet<NaiveDate> =
            DateIterator::new(row.start_date, Some(row.end_date)).collect();
        if let Some(added) = self.inclusions.get(&row.service_id) {
            dates.extend(added.iter().copied());
        }
        if let Some(removed) = self.exclusions.get(&row.service_id) {
            dates.retain(|d| !removed.contains(d));
        }
        dates
    }
}

/// the outcome of resolving the feed calendar against a reference date.
#[derive(Clone, Debug)]
pub struct ResolvedCalendar {
    pub reference_date: NaiveDate,
    /// weekday classification of every service listed in calendar.txt
    pub services: HashMap<String, ServiceClassification>,
    /// services whose calendar does not cover every day of the look-ahead
    /// window. their trips take no further part in the timetable.
    pub excluded: HashSet<String>,
}

impl ResolvedCalendar {
    /// classifies every service of the feed for the reference date.
    ///
    /// # Errors
    ///
    /// fails with [`TimetableError::StaleFeed`] when the reference date falls
    /// outside any service's nominal date range, and with
    /// [`TimetableError::MalformedFeed`] on an unknown exception type.
    pub fn resolve(
        calendar: &[CalendarRow],
        calendar_dates: &[CalendarDateRow],
        reference_date: NaiveDate,
        look_ahead_days: u64,
    ) -> Result<ResolvedCalendar, TimetableError> {
        let exceptions = ServiceExceptions::from_rows(calendar_dates)?;
        let window = date_ops::look_ahead_window(reference_date, look_ahead_days)?.collect_vec();

        let mut services = HashMap::new();
        let mut excluded = HashSet::new();
        for row in calendar {
            if !date_ops::within_range(&reference_date, &row.start_date, &row.end_date) {
                return Err(TimetableError::StaleFeed {
                    reference: reference_date,
                    start: row.start_date,
                    end: row.end_date,
                });
            }
            let active = exceptions.active_dates(row);
            if let Some(missing) = window.iter().find(|d| !active.contains(*d)) {
                log::warn!(
                    "removing service_id {:?} because it does not run on {missing} within the next {look_ahead_days} days",
                    row.service_id
                );
                excluded.insert(row.service_id.clone());
            }
            services.insert(
                row.service_id.clone(),
                ServiceClassification::from_calendar(row),
            );
        }
        log::info!(
            "resolved {} services for {reference_date}, {} excluded by the look-ahead check",
            services.len(),
            excluded.len()
        );
        Ok(ResolvedCalendar {
            reference_date,
            services,
            excluded,
        })
    }

    pub fn classification(&self, service_id: &str) -> Option<&ServiceClassification> {
        self.services.get(service_id)
    }

    pub fn is_excluded(&self, service_id: &str) -> bool {
        self.excluded.contains(service_id)
    }
}
