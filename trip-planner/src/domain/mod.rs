//! Domain types for the trip planner.
//!
//! This module holds the validated building blocks of a routing problem:
//! periodic timetables, connections between cities, client requests and
//! their constraints. Invariants (non-degenerate schedules, known
//! constraint codes) are enforced at construction time, so the search
//! core can trust every value it receives.

mod client;
mod connection;
mod constraint;
mod error;
mod timetable;

pub use client::{Client, Objective};
pub use connection::{City, Connection, Cost};
pub use constraint::Constraint;
pub use error::DomainError;
pub use timetable::{DAY_MINUTES, Time, Timetable};
