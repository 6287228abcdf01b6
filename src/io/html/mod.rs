//! Standalone Leaflet page export.

mod script;
mod writer;

use std::io::{self, Write};

use crate::map::MapArtifact;

/// Render the map as a self-contained HTML page.
pub fn render_html<W: Write>(writer: &mut W, artifact: &MapArtifact) -> io::Result<()> {
    writer::write_html_header(writer, artifact)?;
    writer::write_legend(writer, &artifact.legend)?;
    script::write_map_script(writer, artifact)?;
    writer::write_html_footer(writer)
}

/// Render the map page into a string.
pub fn to_html_string(artifact: &MapArtifact) -> io::Result<String> {
    let mut buffer = Vec::new();
    render_html(&mut buffer, artifact)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
