use serde::{Deserialize, Serialize};

use crate::{feed::CalendarRow, timetable::WeekdayClass};

/// which weekday classes a service runs on, derived from its calendar.txt
/// weekday flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceClassification {
    pub serves_weekday_block: bool,
    pub serves_saturday: bool,
    pub serves_sunday: bool,
    /// the weekday pattern does not fit the weekday classes: either no class
    /// at all, or some but not all of monday through friday.
    pub is_irregular: bool,
}

impl ServiceClassification {
    pub fn from_calendar(row: &CalendarRow) -> ServiceClassification {
        let weekdays = [row.monday, row.tuesday, row.wednesday, row.thursday, row.friday];
        let serves_weekday_block = weekdays.iter().all(|d| *d);
        let is_irregular = (!serves_weekday_block && !row.saturday && !row.sunday)
            || (!serves_weekday_block && weekdays.iter().any(|d| *d));
        ServiceClassification {
            serves_weekday_block,
            serves_saturday: row.saturday,
            serves_sunday: row.sunday,
            is_irregular,
        }
    }

    pub fn serves(&self, class: WeekdayClass) -> bool {
        match class {
            WeekdayClass::WeekdayBlock => self.serves_weekday_block,
            WeekdayClass::Saturday => self.serves_saturday,
            WeekdayClass::Sunday => self.serves_sunday,
        }
    }

    /// a trip of this service is listed under a weekday class when the
    /// service runs on that class and is regular, unless irregular services
    /// are allowed.
    pub fn is_eligible(&self, class: WeekdayClass, allow_irregular: bool) -> bool {
        self.serves(class) && (!self.is_irregular || allow_irregular)
    }

    pub fn weekday_classes(&self) -> impl Iterator<Item = WeekdayClass> + '_ {
        WeekdayClass::ALL.into_iter().filter(move |c| self.serves(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// builds a calendar row from a "MTWTFSS" style mask, where any character
    /// other than '-' marks the day as served.
    fn calendar(mask: &str) -> CalendarRow {
        let days: Vec<bool> = mask.chars().map(|c| c != '-').collect();
        CalendarRow {
            service_id: String::from("svc"),
            monday: days[0],
            tuesday: days[1],
            wednesday: days[2],
            thursday: days[3],
            friday: days[4],
            saturday: days[5],
            sunday: days[6],
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        }
    }

    #[test]
    fn test_full_weekday_block_is_regular() {
        let c = ServiceClassification::from_calendar(&calendar("MTWTF--"));
        assert!(c.serves_weekday_block);
        assert!(!c.serves_saturday && !c.serves_sunday);
        assert!(!c.is_irregular);
    }

    #[test]
    fn test_single_weekend_day_is_regular() {
        let saturday = ServiceClassification::from_calendar(&calendar("-----S-"));
        assert!(!saturday.is_irregular);
        let sunday = ServiceClassification::from_calendar(&calendar("------S"));
        assert!(!sunday.is_irregular);
    }

    #[test]
    fn test_partial_weekdays_are_irregular() {
        let c = ServiceClassification::from_calendar(&calendar("M----S-"));
        assert!(c.is_irregular);
        assert!(c.serves_saturday);
        assert!(!c.serves_weekday_block);
        assert!(!c.is_eligible(WeekdayClass::Saturday, false));
        assert!(c.is_eligible(WeekdayClass::Saturday, true));
        assert!(!c.is_eligible(WeekdayClass::WeekdayBlock, true));
    }

    #[test]
    fn test_no_days_is_irregular() {
        let c = ServiceClassification::from_calendar(&calendar("-------"));
        assert!(c.is_irregular);
        assert_eq!(c.weekday_classes().count(), 0);
    }

    #[test]
    fn test_weekend_service_spans_two_classes() {
        let c = ServiceClassification::from_calendar(&calendar("-----SS"));
        let classes: Vec<WeekdayClass> = c.weekday_classes().collect();
        assert_eq!(classes, vec![WeekdayClass::Saturday, WeekdayClass::Sunday]);
    }
}
