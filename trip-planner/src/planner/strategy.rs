//! Open-list selection strategies.
//!
//! The expansion loop is generic over *which* frontier city to expand
//! next; everything else (expansion, dominance, reconstruction) is shared.
//! Three orders are provided: depth-first, breadth-first and greedy
//! best-first on the client's primary metric.

use crate::domain::{City, Objective};

use super::tree::RouteTree;

/// Picks the next open city to expand.
///
/// `open` holds the frontier in insertion order; implementations must
/// remove the city they return. `tree` and `objective` are available for
/// informed orders.
pub trait SelectionStrategy {
    fn select(
        &self,
        open: &mut Vec<City>,
        tree: &RouteTree,
        objective: Objective,
    ) -> Option<City>;
}

/// Expand the most recently opened city first.
///
/// Complete but not optimal on its own; useful when any feasible route
/// will do, or to study uninformed traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl SelectionStrategy for DepthFirst {
    fn select(&self, open: &mut Vec<City>, _: &RouteTree, _: Objective) -> Option<City> {
        open.pop()
    }
}

/// Expand the oldest open city first.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl SelectionStrategy for BreadthFirst {
    fn select(&self, open: &mut Vec<City>, _: &RouteTree, _: Objective) -> Option<City> {
        if open.is_empty() {
            return None;
        }
        Some(open.remove(0))
    }
}

/// Expand the open city whose tree entry has the smallest primary metric.
///
/// Sorts the whole open list descending and pops the tail. O(n log n) per
/// selection where a heap would be O(log n); kept because open lists stay
/// small at this problem's scale and the stable sort keeps ties in
/// insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyBest;

impl SelectionStrategy for GreedyBest {
    fn select(&self, open: &mut Vec<City>, tree: &RouteTree, objective: Objective) -> Option<City> {
        open.sort_by(|a, b| {
            let ka = tree.best(*a).map(|n| n.metric(objective));
            let kb = tree.best(*b).map(|n| n.metric(objective));
            kb.cmp(&ka)
        });
        open.pop()
    }
}
