//! Graphviz rendering of the route map.
//!
//! Emits DOT source for an undirected graph (with the `fdp` layout hint
//! in a header comment): one node per city and one edge per connection,
//! labelled with the first two characters of the transport mode. Turning
//! the `.gv` file into an image is left to Graphviz itself.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::network::Network;

/// Write DOT source for `network` to `writer`.
pub fn write_dot(network: &Network, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "// route map; lay out with: fdp")?;
    writeln!(writer, "graph routemap {{")?;
    for city in network.cities() {
        writeln!(writer, "    {city};")?;
    }
    for connection in network.connections() {
        let label: String = connection.transport.chars().take(2).collect();
        writeln!(
            writer,
            "    {} -- {} [label=\"{}\"];",
            connection.endpoints[0], connection.endpoints[1], label
        )?;
    }
    writeln!(writer, "}}")
}

/// Render the map next to its source file, as `<stem>.gv`.
///
/// Returns the path written.
pub fn render_to_gv(network: &Network, map_path: &Path) -> io::Result<std::path::PathBuf> {
    let gv_path = map_path.with_extension("gv");
    let mut writer = BufWriter::new(File::create(&gv_path)?);
    write_dot(network, &mut writer)?;
    writer.flush()?;
    Ok(gv_path)
}
