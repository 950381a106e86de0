//! The reconstructed result of a search.

use std::fmt;

use crate::domain::{City, Cost, Time};

/// One step of an itinerary: board `transport`, get off at `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub transport: String,
    pub to: City,
}

/// A complete route from a client's origin to their goal.
///
/// `Display` renders the solution-line body: the origin, then each leg's
/// transport mode and destination city, then the elapsed time and total
/// fare. A trip whose origin is its goal has no legs and zero totals.
///
/// ```
/// use trip_planner::planner::{Itinerary, Leg};
///
/// let itinerary = Itinerary {
///     origin: 1,
///     legs: vec![Leg { transport: "bus".into(), to: 2 }],
///     total_time: 30,
///     total_cost: 10,
/// };
/// assert_eq!(itinerary.to_string(), "1 bus 2 30 10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub origin: City,
    pub legs: Vec<Leg>,
    /// Minutes from the client's start time to arrival, waiting included.
    pub total_time: Time,
    pub total_cost: Cost,
}

impl Itinerary {
    /// The final city of the trip.
    pub fn destination(&self) -> City {
        self.legs.last().map(|leg| leg.to).unwrap_or(self.origin)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origin)?;
        for leg in &self.legs {
            write!(f, " {} {}", leg.transport, leg.to)?;
        }
        write!(f, " {} {}", self.total_time, self.total_cost)
    }
}

/// Marker written on the solution line when no route exists.
pub const NO_ROUTE: &str = "-1";

/// Format one solution-file line for a client.
pub fn solution_line(client_id: u64, itinerary: Option<&Itinerary>) -> String {
    match itinerary {
        Some(itinerary) => format!("{client_id} {itinerary}"),
        None => format!("{client_id} {NO_ROUTE}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_multi_leg_trips() {
        let itinerary = Itinerary {
            origin: 1,
            legs: vec![
                Leg {
                    transport: "bus".into(),
                    to: 2,
                },
                Leg {
                    transport: "comboio".into(),
                    to: 5,
                },
            ],
            total_time: 75,
            total_cost: 30,
        };
        assert_eq!(itinerary.to_string(), "1 bus 2 comboio 5 75 30");
        assert_eq!(itinerary.destination(), 5);
    }

    #[test]
    fn renders_trip_to_the_origin() {
        let itinerary = Itinerary {
            origin: 9,
            legs: vec![],
            total_time: 0,
            total_cost: 0,
        };
        assert_eq!(itinerary.to_string(), "9 0 0");
        assert_eq!(itinerary.destination(), 9);
    }

    #[test]
    fn solution_line_marks_missing_routes() {
        let found = Itinerary {
            origin: 1,
            legs: vec![Leg {
                transport: "bus".into(),
                to: 2,
            }],
            total_time: 30,
            total_cost: 10,
        };
        assert_eq!(solution_line(7, Some(&found)), "7 1 bus 2 30 10");
        assert_eq!(solution_line(7, None), "7 -1");
    }
}
