// Date handling for stays. Every range is half-open: a stay occupies the
// nights [check_in, check_out), so the check-out day itself is free for the
// next guest.

use chrono::{NaiveDate, Utc};

use crate::error::BookingError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Parse a YYYY-MM-DD date string from the wire.
pub fn parse_date(input: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| BookingError::InvalidDateFormat(input.to_string()))
}

// Source of "today" for past-check-in validation, injectable so tests can
// pin the calendar.
pub trait Clock: Send + Sync + 'static {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

// A validated stay. Cannot be constructed unless check_in < check_out, so a
// range in hand always covers at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    // Build from pre-parsed dates.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, BookingError> {
        if check_in >= check_out {
            return Err(BookingError::InvalidDateRange);
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    // Build from wire strings; dates cross the API boundary as YYYY-MM-DD.
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, BookingError> {
        Self::new(parse_date(check_in)?, parse_date(check_out)?)
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    // Number of nights; construction guarantees at least 1.
    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days() as u32
    }

    // Two half-open ranges share a night iff each one starts before the
    // other ends. Touching ranges (one guest checks out the day the next
    // checks in) do not overlap.
    pub fn overlaps(&self, other: &StayRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}
