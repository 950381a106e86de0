//! The state-space search engine.
//!
//! One `Search` instance routes one client: it keeps an open list of
//! frontier cities and a [`RouteTree`] of best-known path prefixes,
//! repeatedly selects a frontier city via the injected
//! [`SelectionStrategy`], expands it through the constraint-filtered
//! network, and admits successors through the dominance test. When the
//! open list drains, the tree holds the best discovered route to every
//! reachable, non-dominated city and the goal entry (if any) is unwound
//! into an [`Itinerary`].

use tracing::trace;

use crate::domain::{City, Client};
use crate::network::Network;

use super::itinerary::{Itinerary, Leg};
use super::options::SearchOptions;
use super::strategy::SelectionStrategy;
use super::tree::{RouteNode, RouteTree};

/// A single client's route search over a shared read-only network.
pub struct Search<'a, S: SelectionStrategy> {
    network: &'a Network,
    client: &'a Client,
    strategy: S,
    options: SearchOptions,
    tree: RouteTree,
    open: Vec<City>,
}

impl<'a, S: SelectionStrategy> Search<'a, S> {
    /// Set up a search with the client's start city opened.
    pub fn new(
        network: &'a Network,
        client: &'a Client,
        strategy: S,
        options: SearchOptions,
    ) -> Self {
        let mut search = Self {
            network,
            client,
            strategy,
            options,
            tree: RouteTree::new(),
            open: Vec::new(),
        };
        search.open_node(RouteNode::start(client.origin, client.start_time));
        search
    }

    /// Run the expansion loop to exhaustion and reconstruct the route.
    ///
    /// Returns `None` when the goal was never reached.
    pub fn run(mut self) -> Option<Itinerary> {
        while let Some(city) =
            self.strategy
                .select(&mut self.open, &self.tree, self.client.objective)
        {
            self.expand(city);
        }
        self.reconstruct()
    }

    /// Open all admissible successors of `city`'s current best node.
    fn expand(&mut self, city: City) {
        // The open-list invariant: an open city always has a tree entry.
        let Some(node_id) = self.tree.best_id(city) else {
            return;
        };
        let (cost, time) = {
            let node = self.tree.node(node_id);
            (node.cost, node.time)
        };

        let valid =
            self.network
                .valid_connections(city, &self.client.constraints, cost, time);
        trace!(city, open = self.open.len(), candidates = valid.len(), "expanding");

        for connection_id in valid {
            let connection = self.network.connection(connection_id);
            let candidate = RouteNode {
                city: connection.adjacent(city),
                parent: Some(node_id),
                arrived_by: Some(connection_id),
                cost: cost + connection.cost,
                time: connection.timetable.next_departure(time) + connection.duration,
            };
            if self.admits(&candidate) {
                self.open_node(candidate);
            }
        }
    }

    /// The dominance test: should `candidate` supersede the best-known
    /// entry for its city?
    ///
    /// A city never reached is admitted unconditionally. Otherwise the
    /// candidate must strictly improve the primary metric, or (with
    /// secondary optimization) tie it and strictly improve the secondary.
    /// A candidate whose primary metric is already worse than the best
    /// route to the goal is rejected outright: no extension of it can
    /// beat that route. The goal bound compares primary metrics only,
    /// even when secondary optimization is on.
    fn admits(&self, candidate: &RouteNode) -> bool {
        let Some(existing) = self.tree.best(candidate.city) else {
            return true;
        };

        let primary = self.client.objective;
        if let Some(goal) = self.tree.best(self.client.goal) {
            if candidate.metric(primary) > goal.metric(primary) {
                return false;
            }
        }

        if candidate.metric(primary) < existing.metric(primary) {
            return true;
        }
        self.options.secondary_optimization
            && candidate.metric(primary) == existing.metric(primary)
            && candidate.metric(primary.secondary()) < existing.metric(primary.secondary())
    }

    /// Record `node` as its city's best entry and put the city on the
    /// frontier (unless it is already waiting there).
    fn open_node(&mut self, node: RouteNode) {
        let city = node.city;
        self.tree.insert(node);
        if !self.open.contains(&city) {
            self.open.push(city);
        }
    }

    /// Backtrack parent references from the goal to the start.
    fn reconstruct(&self) -> Option<Itinerary> {
        let goal = self.tree.best(self.client.goal)?;

        let mut legs = Vec::new();
        let mut current = goal;
        while let (Some(parent), Some(connection_id)) = (current.parent, current.arrived_by) {
            legs.push(Leg {
                transport: self.network.connection(connection_id).transport.clone(),
                to: current.city,
            });
            current = self.tree.node(parent);
        }
        legs.reverse();

        Some(Itinerary {
            origin: current.city,
            legs,
            total_time: goal.time - self.client.start_time,
            total_cost: goal.cost,
        })
    }
}

/// Build a [`Search`] for one client and run it to completion.
pub fn plan_route<S: SelectionStrategy>(
    network: &Network,
    client: &Client,
    strategy: S,
    options: SearchOptions,
) -> Option<Itinerary> {
    Search::new(network, client, strategy, options).run()
}
