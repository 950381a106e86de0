//! Route search for individual clients.
//!
//! The engine in [`search`] is generic over a [`SelectionStrategy`]; the
//! three provided strategies give depth-first, breadth-first and greedy
//! best-first traversal over the same expansion and dominance mechanics.

mod itinerary;
mod options;
mod search;
mod strategy;
mod tree;

pub use itinerary::{Itinerary, Leg, NO_ROUTE, solution_line};
pub use options::SearchOptions;
pub use search::{Search, plan_route};
pub use strategy::{BreadthFirst, DepthFirst, GreedyBest, SelectionStrategy};
pub use tree::{NodeId, RouteNode, RouteTree};
