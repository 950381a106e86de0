//! Per-client admissibility constraints.
//!
//! A client may restrict which connections their route can use, either
//! per leg (mode, leg time, leg cost) or cumulatively (total time, total
//! cost). Constraints compose by conjunction: a connection is usable only
//! if every constraint allows it.

use super::{Connection, Cost, DomainError, Time};

/// One admissibility rule from a client request.
///
/// Built from the client file's short codes via [`Constraint::from_code`]:
/// `A1` → [`Constraint::AvoidTransport`], `A2` → [`Constraint::MaxLegTime`],
/// `A3` → [`Constraint::MaxLegCost`], `B1` → [`Constraint::MaxTotalTime`],
/// `B2` → [`Constraint::MaxTotalCost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Never board the given transport mode.
    AvoidTransport(String),
    /// No single leg may take longer than this.
    MaxLegTime(Time),
    /// No single leg may cost more than this.
    MaxLegCost(Cost),
    /// Taking the leg may not push the clock past this.
    ///
    /// The bound is checked against `leg duration + cumulative clock`, so
    /// the client's start time and any waiting at stops count towards it.
    MaxTotalTime(Time),
    /// Taking the leg may not push the total fare past this.
    MaxTotalCost(Cost),
}

impl Constraint {
    /// Decode a `(code, parameter)` pair from a client record.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an unknown code, or for a numeric constraint
    /// whose parameter does not parse as a non-negative integer.
    pub fn from_code(code: &str, param: &str) -> Result<Self, DomainError> {
        let numeric = |code: &'static str| {
            param
                .parse::<u64>()
                .map_err(|_| DomainError::InvalidConstraintParameter {
                    code,
                    param: param.to_string(),
                })
        };
        match code {
            "A1" => Ok(Self::AvoidTransport(param.to_string())),
            "A2" => Ok(Self::MaxLegTime(numeric("A2")?)),
            "A3" => Ok(Self::MaxLegCost(numeric("A3")?)),
            "B1" => Ok(Self::MaxTotalTime(numeric("B1")?)),
            "B2" => Ok(Self::MaxTotalCost(numeric("B2")?)),
            _ => Err(DomainError::UnknownConstraint(code.to_string())),
        }
    }

    /// Whether this constraint lets a route at (`cost_so_far`,
    /// `time_so_far`) take `connection` as its next leg.
    pub fn allows(&self, connection: &Connection, cost_so_far: Cost, time_so_far: Time) -> bool {
        match self {
            Self::AvoidTransport(mode) => connection.transport != *mode,
            Self::MaxLegTime(limit) => connection.duration <= *limit,
            Self::MaxLegCost(limit) => connection.cost <= *limit,
            Self::MaxTotalTime(limit) => connection.duration + time_so_far <= *limit,
            Self::MaxTotalCost(limit) => connection.cost + cost_so_far <= *limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timetable;

    fn bus() -> Connection {
        Connection::new(1, 2, "bus", 30, 10, Timetable::new(0, 1439, 60).unwrap())
    }

    #[test]
    fn avoid_transport_matches_exact_mode() {
        let c = bus();
        assert!(!Constraint::AvoidTransport("bus".into()).allows(&c, 0, 0));
        assert!(Constraint::AvoidTransport("comboio".into()).allows(&c, 0, 0));
    }

    #[test]
    fn leg_limits_are_inclusive() {
        let c = bus();
        assert!(Constraint::MaxLegTime(30).allows(&c, 0, 0));
        assert!(!Constraint::MaxLegTime(29).allows(&c, 0, 0));
        assert!(Constraint::MaxLegCost(10).allows(&c, 0, 0));
        assert!(!Constraint::MaxLegCost(9).allows(&c, 0, 0));
    }

    #[test]
    fn total_limits_add_the_candidate_leg() {
        let c = bus();
        assert!(Constraint::MaxTotalTime(100).allows(&c, 0, 70));
        assert!(!Constraint::MaxTotalTime(99).allows(&c, 0, 70));
        assert!(Constraint::MaxTotalCost(25).allows(&c, 15, 0));
        assert!(!Constraint::MaxTotalCost(24).allows(&c, 15, 0));
    }

    #[test]
    fn decodes_all_short_codes() {
        assert_eq!(
            Constraint::from_code("A1", "metro").unwrap(),
            Constraint::AvoidTransport("metro".into())
        );
        assert_eq!(
            Constraint::from_code("A2", "45").unwrap(),
            Constraint::MaxLegTime(45)
        );
        assert_eq!(
            Constraint::from_code("A3", "12").unwrap(),
            Constraint::MaxLegCost(12)
        );
        assert_eq!(
            Constraint::from_code("B1", "600").unwrap(),
            Constraint::MaxTotalTime(600)
        );
        assert_eq!(
            Constraint::from_code("B2", "99").unwrap(),
            Constraint::MaxTotalCost(99)
        );
    }

    #[test]
    fn rejects_unknown_code() {
        assert!(matches!(
            Constraint::from_code("C7", "1"),
            Err(DomainError::UnknownConstraint(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_parameter() {
        assert!(matches!(
            Constraint::from_code("B1", "soon"),
            Err(DomainError::InvalidConstraintParameter { code: "B1", .. })
        ));
    }
}
