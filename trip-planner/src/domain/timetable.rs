//! Periodic departure timetables.
//!
//! Every connection runs on a daily schedule: departures at `first`,
//! `first + period`, `first + 2 * period`, ... up to (and not past) `last`,
//! repeated every day. Times are plain minute counts; there is no calendar.

use std::fmt;

use super::DomainError;

/// An absolute time in minutes since the start of day zero.
///
/// Not bounded to a single day: a trip that waits overnight simply has a
/// departure time of 1440 or more.
pub type Time = u64;

/// Minutes in one day.
pub const DAY_MINUTES: Time = 1440;

/// A daily periodic departure schedule.
///
/// `first` and `last` are times of day (minutes, `0..1440`); `period` is the
/// gap between consecutive departures. Validated at construction so that
/// [`Timetable::next_departure`] can never loop or underflow.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::Timetable;
///
/// // Hourly departures from 08:00 to 20:00.
/// let timetable = Timetable::new(480, 1200, 60).unwrap();
/// assert_eq!(timetable.next_departure(0), 480);
/// assert_eq!(timetable.next_departure(481), 540);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timetable {
    first: Time,
    last: Time,
    period: Time,
}

impl Timetable {
    /// Build a timetable, rejecting degenerate schedules.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `period == 0`, `first > last`, or `last` is not a
    /// time of day.
    pub fn new(first: Time, last: Time, period: Time) -> Result<Self, DomainError> {
        if period == 0 {
            return Err(DomainError::InvalidTimetable("period must be at least 1"));
        }
        if first > last {
            return Err(DomainError::InvalidTimetable(
                "first departure is after the last",
            ));
        }
        if last >= DAY_MINUTES {
            return Err(DomainError::InvalidTimetable(
                "last departure is not a time of day",
            ));
        }
        Ok(Self {
            first,
            last,
            period,
        })
    }

    /// Time of day of the first daily departure.
    pub fn first(&self) -> Time {
        self.first
    }

    /// Time of day past which no departure runs.
    pub fn last(&self) -> Time {
        self.last
    }

    /// Minutes between consecutive departures.
    pub fn period(&self) -> Time {
        self.period
    }

    /// The earliest absolute departure time at or after `arrival`.
    ///
    /// Looks up the departure grid of `arrival`'s day; when the day's last
    /// departure has already gone, rolls over to the first departure of the
    /// next day. Total overnight waits therefore show up in the caller's
    /// cumulative time.
    pub fn next_departure(&self, arrival: Time) -> Time {
        let day = arrival % DAY_MINUTES;
        let base = arrival - day;

        if day <= self.first {
            return base + self.first;
        }

        // Last departure actually run today: `last` rounded down to the grid.
        let last_run = self.last - (self.last - self.first) % self.period;
        if day > last_run {
            return base + DAY_MINUTES + self.first;
        }

        base + self.first + (day - self.first).div_ceil(self.period) * self.period
    }
}

impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}/{}", self.first, self.last, self.period)
    }
}
