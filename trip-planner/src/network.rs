//! The route map: cities and their scheduled connections.

use crate::domain::{City, Connection, Constraint, Cost, DomainError, Time};

/// Index of a connection in the network's arena.
///
/// Search nodes refer to connections by id rather than by reference, so
/// a search borrows the network immutably and owns nothing of it.
pub type ConnectionId = usize;

/// An immutable map of cities and the connections between them.
///
/// Cities are the contiguous range `1..=city_count`. Every connection is
/// stored once and indexed from the incidence list of *both* endpoints;
/// incidence lists keep insertion order, which fixes the tie-breaking
/// order of depth- and breadth-first traversal.
#[derive(Debug, Clone)]
pub struct Network {
    city_count: City,
    connections: Vec<Connection>,
    /// Incident connection ids per city; slot 0 is unused.
    incident: Vec<Vec<ConnectionId>>,
}

impl Network {
    /// Create a network over cities `1..=city_count` with no connections.
    pub fn new(city_count: City) -> Self {
        Self {
            city_count,
            connections: Vec::new(),
            incident: vec![Vec::new(); city_count as usize + 1],
        }
    }

    /// Add a connection, wiring it into both endpoints' incidence lists.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either endpoint lies outside `1..=city_count`.
    pub fn add_connection(&mut self, connection: Connection) -> Result<ConnectionId, DomainError> {
        for city in connection.endpoints {
            if city == 0 || city > self.city_count {
                return Err(DomainError::UnknownCity(city));
            }
        }
        let id = self.connections.len();
        for city in connection.endpoints {
            self.incident[city as usize].push(id);
        }
        self.connections.push(connection);
        Ok(id)
    }

    /// Number of cities on the map.
    pub fn city_count(&self) -> City {
        self.city_count
    }

    /// All city identifiers, in order.
    pub fn cities(&self) -> impl Iterator<Item = City> + '_ {
        1..=self.city_count
    }

    /// All connections, in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Look up a connection by id.
    pub fn connection(&self, id: ConnectionId) -> &Connection {
        &self.connections[id]
    }

    /// Ids of every connection incident to `city`, in insertion order.
    ///
    /// A city off the map has no connections.
    pub fn incident(&self, city: City) -> &[ConnectionId] {
        self.incident
            .get(city as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The connections a route at (`cost_so_far`, `time_so_far`) may take
    /// out of `city`, i.e. those every constraint allows.
    ///
    /// An empty constraint list short-circuits to the full incidence list.
    /// Order is preserved either way.
    pub fn valid_connections(
        &self,
        city: City,
        constraints: &[Constraint],
        cost_so_far: Cost,
        time_so_far: Time,
    ) -> Vec<ConnectionId> {
        let incident = self.incident(city);
        if constraints.is_empty() {
            return incident.to_vec();
        }
        incident
            .iter()
            .copied()
            .filter(|id| {
                let connection = &self.connections[*id];
                constraints
                    .iter()
                    .all(|c| c.allows(connection, cost_so_far, time_so_far))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timetable;

    fn all_day() -> Timetable {
        Timetable::new(0, 1439, 60).unwrap()
    }

    fn network() -> Network {
        let mut network = Network::new(3);
        network
            .add_connection(Connection::new(1, 2, "bus", 30, 10, all_day()))
            .unwrap();
        network
            .add_connection(Connection::new(2, 3, "comboio", 45, 20, all_day()))
            .unwrap();
        network
            .add_connection(Connection::new(1, 2, "aviao", 10, 100, all_day()))
            .unwrap();
        network
    }

    #[test]
    fn connections_are_incident_to_both_endpoints() {
        let network = network();
        assert_eq!(network.incident(1), &[0, 2]);
        assert_eq!(network.incident(2), &[0, 1, 2]);
        assert_eq!(network.incident(3), &[1]);
    }

    #[test]
    fn rejects_endpoints_off_the_map() {
        let mut network = Network::new(2);
        let err = network
            .add_connection(Connection::new(1, 5, "bus", 30, 10, all_day()))
            .unwrap_err();
        assert_eq!(err, DomainError::UnknownCity(5));
        assert!(
            network
                .add_connection(Connection::new(0, 1, "bus", 30, 10, all_day()))
                .is_err()
        );
    }

    #[test]
    fn no_constraints_returns_everything_in_order() {
        let network = network();
        assert_eq!(network.valid_connections(2, &[], 0, 0), vec![0, 1, 2]);
    }

    #[test]
    fn constraints_are_conjunctive() {
        let network = network();
        let expensive = Constraint::MaxLegCost(50); // drops aviao
        let no_bus = Constraint::AvoidTransport("bus".into()); // drops bus

        let both = [expensive.clone(), no_bus.clone()];
        assert_eq!(network.valid_connections(2, &both, 0, 0), vec![1]);

        // Removing a rejecting constraint re-admits what it rejected.
        assert_eq!(
            network.valid_connections(2, &[expensive], 0, 0),
            vec![0, 1]
        );
        assert_eq!(network.valid_connections(2, &[no_bus], 0, 0), vec![1, 2]);
    }

    #[test]
    fn cumulative_limits_see_the_running_totals() {
        let network = network();
        let cap = [Constraint::MaxTotalCost(25)];
        // At cost 0 both cheap legs fit; at cost 10 the comboio no longer does.
        assert_eq!(network.valid_connections(2, &cap, 0, 0), vec![0, 1]);
        assert_eq!(network.valid_connections(2, &cap, 10, 0), vec![0]);
    }
}
