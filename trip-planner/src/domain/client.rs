//! Client routing requests.

use std::fmt;

use super::{City, Constraint, DomainError, Time};

/// What a client wants minimized.
///
/// The chosen metric is the *primary* one during search; the other metric
/// is *secondary* and only consulted for tie-breaking when secondary
/// optimization is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Minimize total elapsed time (keyword `tempo`).
    Time,
    /// Minimize total fare (keyword `custo`).
    Cost,
}

impl Objective {
    /// Decode the client-file keyword.
    pub fn from_keyword(keyword: &str) -> Result<Self, DomainError> {
        match keyword {
            "tempo" => Ok(Self::Time),
            "custo" => Ok(Self::Cost),
            _ => Err(DomainError::UnknownObjective(keyword.to_string())),
        }
    }

    /// The tie-breaking counterpart of this objective.
    pub fn secondary(self) -> Self {
        match self {
            Self::Time => Self::Cost,
            Self::Cost => Self::Time,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => write!(f, "tempo"),
            Self::Cost => write!(f, "custo"),
        }
    }
}

/// One traveler's routing request.
///
/// Clients are routed independently: each gets its own search over the
/// shared read-only network.
#[derive(Debug, Clone)]
pub struct Client {
    /// Identifier echoed on the solution line.
    pub id: u64,
    /// Where the trip starts.
    pub origin: City,
    /// Where the trip must end.
    pub goal: City,
    /// Earliest minute the client is willing to depart.
    pub start_time: Time,
    /// Which metric to minimize.
    pub objective: Objective,
    /// Admissibility constraints, all of which must hold.
    pub constraints: Vec<Constraint>,
}
