use chrono::NaiveDate;

/// iterates every day in [start, end], inclusive. when no end is given, only
/// the start date is produced.
pub struct DateIterator {
    current: Option<NaiveDate>,
    end_inclusive: NaiveDate,
}

impl DateIterator {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> DateIterator {
        DateIterator {
            current: Some(start),
            end_inclusive: end.unwrap_or(start),
        }
    }
}

impl Iterator for DateIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if current > self.end_inclusive {
            return None; // prevent unbounded iteration with faulty arguments
        }
        self.current = current.succ_opt();
        Some(current)
    }
}
