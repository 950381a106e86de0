//! The search tree: best-known path prefixes, one per visited city.
//!
//! Nodes live in an append-only arena and refer to their parent by arena
//! index, so replacing a city's best entry never invalidates the parent
//! chains of nodes discovered earlier. A separate map tracks which arena
//! node is currently the best for each city.

use std::collections::HashMap;

use crate::domain::{City, Cost, Objective, Time};
use crate::network::ConnectionId;

/// Index of a node in the route tree's arena.
pub type NodeId = usize;

/// One discovered path prefix, ending at `city`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    /// The city this prefix ends at.
    pub city: City,
    /// Arena index of the previous node; `None` only for the start node.
    pub parent: Option<NodeId>,
    /// Connection taken to get here; `None` only for the start node.
    pub arrived_by: Option<ConnectionId>,
    /// Total fare from the start.
    pub cost: Cost,
    /// Clock on arrival — an absolute minute count, not an elapsed
    /// duration, so overnight waits are included.
    pub time: Time,
}

impl RouteNode {
    /// The root of a search: no parent, no connection, zero fare, clock at
    /// the client's start time.
    pub fn start(city: City, start_time: Time) -> Self {
        Self {
            city,
            parent: None,
            arrived_by: None,
            cost: 0,
            time: start_time,
        }
    }

    /// This node's value of the given metric.
    pub fn metric(&self, objective: Objective) -> u64 {
        match objective {
            Objective::Time => self.time,
            Objective::Cost => self.cost,
        }
    }
}

/// Per-search store of discovered nodes.
#[derive(Debug, Default)]
pub struct RouteTree {
    arena: Vec<RouteNode>,
    best: HashMap<City, NodeId>,
}

impl RouteTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node` and make it the best entry for its city, superseding
    /// any previous entry. The superseded node stays in the arena so that
    /// children discovered through it keep a valid parent chain.
    pub fn insert(&mut self, node: RouteNode) -> NodeId {
        let id = self.arena.len();
        self.best.insert(node.city, id);
        self.arena.push(node);
        id
    }

    /// The current best node for `city`, if the city has been reached.
    pub fn best(&self, city: City) -> Option<&RouteNode> {
        self.best_id(city).map(|id| &self.arena[id])
    }

    /// Arena id of the current best node for `city`.
    pub fn best_id(&self, city: City) -> Option<NodeId> {
        self.best.get(&city).copied()
    }

    /// Whether `city` has any entry.
    pub fn contains(&self, city: City) -> bool {
        self.best.contains_key(&city)
    }

    /// Look up a node by arena id.
    pub fn node(&self, id: NodeId) -> &RouteNode {
        &self.arena[id]
    }

    /// Number of nodes ever stored (including superseded ones).
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
