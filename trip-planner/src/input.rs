//! Parsers for the whitespace-delimited map and client files.
//!
//! Both formats start with a header line of counts followed by one record
//! per line. Parsing validates everything the search core assumes:
//! endpoints on the map, non-degenerate timetables, known constraint
//! codes and objective keywords. Errors carry the 1-based line number of
//! the offending record.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::domain::{Client, Connection, Constraint, DomainError, Objective, Timetable};
use crate::network::Network;

/// Failure while reading or decoding an input file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A structurally broken record (wrong field count, non-numeric field)
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// A well-formed record carrying an invalid domain value
    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: DomainError,
    },
}

impl ParseError {
    fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

/// Pull the next whitespace token off a record, parsed as `T`.
fn field<T: FromStr>(
    tokens: &mut dyn Iterator<Item = &str>,
    line: usize,
    name: &str,
) -> Result<T, ParseError> {
    let token = tokens
        .next()
        .ok_or_else(|| ParseError::malformed(line, format!("missing {name}")))?;
    token
        .parse()
        .map_err(|_| ParseError::malformed(line, format!("invalid {name}: {token}")))
}

/// Read a map file from disk.
///
/// First line: `<n_cities> <n_connections>`. Each further non-empty line
/// is one connection: `a b transport duration cost ti tf period`.
pub fn read_network(path: &Path) -> Result<Network, ParseError> {
    parse_network(BufReader::new(File::open(path)?))
}

/// Parse a map from any line-oriented reader.
pub fn parse_network(reader: impl BufRead) -> Result<Network, ParseError> {
    let mut lines = numbered_lines(reader);

    let (line, header) = lines
        .next()
        .transpose()?
        .ok_or_else(|| ParseError::malformed(1, "empty map file"))?;
    let mut tokens = header.split_whitespace();
    let city_count = field(&mut tokens, line, "city count")?;
    let _declared_connections: usize = field(&mut tokens, line, "connection count")?;

    let mut network = Network::new(city_count);
    for item in lines {
        let (line, record) = item?;
        let mut tokens = record.split_whitespace();
        let a = field(&mut tokens, line, "endpoint")?;
        let b = field(&mut tokens, line, "endpoint")?;
        let transport: String = field(&mut tokens, line, "transport mode")?;
        let duration = field(&mut tokens, line, "duration")?;
        let cost = field(&mut tokens, line, "cost")?;
        let first = field(&mut tokens, line, "first departure")?;
        let last = field(&mut tokens, line, "last departure")?;
        let period = field(&mut tokens, line, "period")?;

        let timetable = Timetable::new(first, last, period)
            .map_err(|source| ParseError::Invalid { line, source })?;
        network
            .add_connection(Connection::new(a, b, transport, duration, cost, timetable))
            .map_err(|source| ParseError::Invalid { line, source })?;
    }
    Ok(network)
}

/// Read a client-request file from disk.
///
/// First line: `<n_clients>`. Each further non-empty line is one request:
/// `id origin goal ti objective k (code param){k}`.
pub fn read_clients(path: &Path) -> Result<Vec<Client>, ParseError> {
    parse_clients(BufReader::new(File::open(path)?))
}

/// Parse client requests from any line-oriented reader.
pub fn parse_clients(reader: impl BufRead) -> Result<Vec<Client>, ParseError> {
    let mut lines = numbered_lines(reader);

    let (line, header) = lines
        .next()
        .transpose()?
        .ok_or_else(|| ParseError::malformed(1, "empty client file"))?;
    let _declared_clients: usize = field(&mut header.split_whitespace(), line, "client count")?;

    let mut clients = Vec::new();
    for item in lines {
        let (line, record) = item?;
        let mut tokens = record.split_whitespace();
        let id = field(&mut tokens, line, "client id")?;
        let origin = field(&mut tokens, line, "origin city")?;
        let goal = field(&mut tokens, line, "goal city")?;
        let start_time = field(&mut tokens, line, "start time")?;
        let keyword: String = field(&mut tokens, line, "objective")?;
        let objective = Objective::from_keyword(&keyword)
            .map_err(|source| ParseError::Invalid { line, source })?;

        let constraint_count: usize = field(&mut tokens, line, "constraint count")?;
        let mut constraints = Vec::with_capacity(constraint_count);
        for _ in 0..constraint_count {
            let code: String = field(&mut tokens, line, "constraint code")?;
            let param: String = field(&mut tokens, line, "constraint parameter")?;
            constraints.push(
                Constraint::from_code(&code, &param)
                    .map_err(|source| ParseError::Invalid { line, source })?,
            );
        }

        clients.push(Client {
            id,
            origin,
            goal,
            start_time,
            objective,
            constraints,
        });
    }
    Ok(clients)
}

/// Iterate non-empty lines together with their 1-based line numbers.
fn numbered_lines(
    reader: impl BufRead,
) -> impl Iterator<Item = Result<(usize, String), std::io::Error>> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)))
        .filter(|item| match item {
            Ok((_, line)) => !line.trim().is_empty(),
            Err(_) => true,
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const MAP: &str = "\
2 1
1 2 bus 30 10 0 1439 60
";

    const CLIENTS: &str = "\
2
1 1 2 0 tempo 0
2 1 2 0 custo 2 A3 5 B1 600
";

    #[test]
    fn parses_the_map() {
        let network = parse_network(MAP.as_bytes()).unwrap();
        assert_eq!(network.city_count(), 2);
        assert_eq!(network.connections().len(), 1);

        let connection = network.connection(0);
        assert_eq!(connection.endpoints, [1, 2]);
        assert_eq!(connection.transport, "bus");
        assert_eq!(connection.duration, 30);
        assert_eq!(connection.cost, 10);
        assert_eq!(connection.timetable.first(), 0);
        assert_eq!(connection.timetable.last(), 1439);
        assert_eq!(connection.timetable.period(), 60);
    }

    #[test]
    fn parses_clients_and_constraints() {
        let clients = parse_clients(CLIENTS.as_bytes()).unwrap();
        assert_eq!(clients.len(), 2);

        assert_eq!(clients[0].id, 1);
        assert_eq!(clients[0].objective, Objective::Time);
        assert!(clients[0].constraints.is_empty());

        assert_eq!(clients[1].objective, Objective::Cost);
        assert_eq!(
            clients[1].constraints,
            vec![Constraint::MaxLegCost(5), Constraint::MaxTotalTime(600)]
        );
    }

    #[test]
    fn skips_blank_lines() {
        let text = "1 1 2 0 tempo 0\n\n";
        let clients = parse_clients(format!("1\n{text}").as_bytes()).unwrap();
        assert_eq!(clients.len(), 1);
    }

    #[test]
    fn reports_the_offending_line() {
        let err = parse_network("2 1\n1 2 bus 30 10 0 1439\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 2, .. }));
        assert!(err.to_string().contains("line 2"));

        let err = parse_network("2 1\n1 2 bus thirty 10 0 1439 60\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid duration: thirty"));
    }

    #[test]
    fn rejects_degenerate_timetables() {
        let err = parse_network("2 1\n1 2 bus 30 10 0 1439 0\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Invalid {
                line: 2,
                source: DomainError::InvalidTimetable(_)
            }
        ));
    }

    #[test]
    fn rejects_endpoints_off_the_map() {
        let err = parse_network("2 1\n1 9 bus 30 10 0 1439 60\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Invalid {
                line: 2,
                source: DomainError::UnknownCity(9)
            }
        ));
    }

    #[test]
    fn rejects_unknown_constraint_codes() {
        let err = parse_clients("1\n1 1 2 0 tempo 1 Z9 4\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Invalid {
                line: 2,
                source: DomainError::UnknownConstraint(_)
            }
        ));
    }

    #[test]
    fn reads_files_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let map_path = dir.path().join("small.map");
        let mut file = File::create(&map_path).unwrap();
        file.write_all(MAP.as_bytes()).unwrap();

        let network = read_network(&map_path).unwrap();
        assert_eq!(network.city_count(), 2);
        assert_eq!(network.connection(0).duration, 30);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_network(Path::new("/nonexistent/routes.map")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
