//! Domain error types.
//!
//! These errors cover validation failures when building domain values.
//! They are distinct from the file-parsing errors in [`crate::input`],
//! which wrap them together with a line number.

use super::City;

/// Validation failures in the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Degenerate periodic schedule (zero period, inverted window, ...)
    #[error("invalid timetable: {0}")]
    InvalidTimetable(&'static str),

    /// Constraint short code not among A1, A2, A3, B1, B2
    #[error("unknown constraint code: {0}")]
    UnknownConstraint(String),

    /// Constraint parameter that should be a number but is not
    #[error("invalid parameter for constraint {code}: {param}")]
    InvalidConstraintParameter { code: &'static str, param: String },

    /// Optimization keyword other than "tempo" or "custo"
    #[error("unknown optimization objective: {0}")]
    UnknownObjective(String),

    /// City identifier outside the map's declared range
    #[error("city {0} is not on the map")]
    UnknownCity(City),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidTimetable("period must be at least 1");
        assert_eq!(err.to_string(), "invalid timetable: period must be at least 1");

        let err = DomainError::UnknownConstraint("Z9".into());
        assert_eq!(err.to_string(), "unknown constraint code: Z9");

        let err = DomainError::InvalidConstraintParameter {
            code: "A2",
            param: "fast".into(),
        };
        assert_eq!(err.to_string(), "invalid parameter for constraint A2: fast");

        let err = DomainError::UnknownObjective("distance".into());
        assert_eq!(err.to_string(), "unknown optimization objective: distance");

        let err = DomainError::UnknownCity(42);
        assert_eq!(err.to_string(), "city 42 is not on the map");
    }
}
