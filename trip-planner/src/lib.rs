//! Trip planner for scheduled transport networks.
//!
//! Computes, for each of a batch of independent clients, a best route
//! through a map of cities linked by periodically scheduled connections,
//! subject to per-client constraints and a chosen optimization objective
//! (total time or total cost, optionally tie-broken on the other).
//!
//! The interesting part lives in [`planner`]: a generic open-list search
//! engine with pluggable selection strategies (depth-first, breadth-first,
//! greedy best-first), a per-city dominance test, and the periodic
//! timetable arithmetic in [`domain`]. The rest is text-file parsing
//! ([`input`]) and an optional Graphviz rendering of the map ([`render`]).

pub mod domain;
pub mod input;
pub mod network;
pub mod planner;
pub mod render;
