//! Scheduled connections between cities.

use super::{Time, Timetable};

/// A city identifier.
///
/// Cities are opaque positive integers; the map declares a contiguous
/// universe `1..=n` and has no further per-city data.
pub type City = u64;

/// A monetary cost, in whatever unit the map file uses.
pub type Cost = u64;

/// A scheduled transport link between two cities.
///
/// The endpoint order carries no direction: a trip may traverse the
/// connection from either side. Departures follow the attached
/// [`Timetable`] regardless of direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// The two endpoints.
    pub endpoints: [City; 2],
    /// Transport mode label ("bus", "comboio", ...).
    pub transport: String,
    /// Minutes spent on board.
    pub duration: Time,
    /// Ticket price.
    pub cost: Cost,
    /// Daily departure schedule.
    pub timetable: Timetable,
}

impl Connection {
    pub fn new(
        a: City,
        b: City,
        transport: impl Into<String>,
        duration: Time,
        cost: Cost,
        timetable: Timetable,
    ) -> Self {
        Self {
            endpoints: [a, b],
            transport: transport.into(),
            duration,
            cost,
            timetable,
        }
    }

    /// The endpoint on the far side of the connection from `city`.
    ///
    /// Mirrors the traversal direction: expanding from one endpoint always
    /// lands on the other.
    pub fn adjacent(&self, city: City) -> City {
        if self.endpoints[0] == city {
            self.endpoints[1]
        } else {
            self.endpoints[0]
        }
    }

    /// Whether `city` is one of the two endpoints.
    pub fn touches(&self, city: City) -> bool {
        self.endpoints.contains(&city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection() -> Connection {
        Connection::new(3, 7, "bus", 30, 10, Timetable::new(0, 1439, 60).unwrap())
    }

    #[test]
    fn adjacent_works_both_ways() {
        let c = connection();
        assert_eq!(c.adjacent(3), 7);
        assert_eq!(c.adjacent(7), 3);
    }

    #[test]
    fn touches_only_endpoints() {
        let c = connection();
        assert!(c.touches(3));
        assert!(c.touches(7));
        assert!(!c.touches(4));
    }
}
