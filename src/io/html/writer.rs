//! HTML page writing operations.

use std::io::{self, Write};

use crate::map::{escape_html, Legend, MapArtifact};

/// Leaflet release loaded by the page.
pub(crate) const LEAFLET_VERSION: &str = "1.9.4";

/// Write the document head, page title and map container.
pub(crate) fn write_html_header<W: Write>(writer: &mut W, artifact: &MapArtifact) -> io::Result<()> {
    let title = escape_html(&artifact.title);
    writeln!(writer, r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
<title>{title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.js"></script>"#)?;
    write_html_styles(writer, artifact.height)?;
    writeln!(writer, r#"</head>
<body>
<h1>{title}</h1>
<div id="map"></div>"#)?;
    Ok(())
}

/// Write page styles.
pub(crate) fn write_html_styles<W: Write>(writer: &mut W, height: u32) -> io::Result<()> {
    writeln!(writer, r#"<style>
    html, body {{ margin: 0; padding: 0; font-family: sans-serif; }}
    h1 {{ font-size: 20px; margin: 12px 16px; }}
    #map {{ width: 100%; height: {height}px; }}
    .risk-legend {{ position: fixed; bottom: 30px; left: 30px; z-index: 9999; background: white;
                   padding: 10px; border: 1px solid #ccc; border-radius: 8px; font-size: 12px; }}
    .risk-legend .swatch {{ display: inline-block; width: 12px; height: 12px; margin-right: 6px; }}
</style>"#)?;
    Ok(())
}

/// Write the fixed legend overlay.
pub(crate) fn write_legend<W: Write>(writer: &mut W, legend: &Legend) -> io::Result<()> {
    writeln!(writer, r#"<div class="risk-legend">"#)?;
    writeln!(writer, "  <b>{}</b><br>", escape_html(legend.title))?;
    writeln!(writer, r#"  <div style="margin-top:6px;">"#)?;
    for entry in &legend.entries {
        writeln!(writer, r#"    <div><span class="swatch" style="background:{};"></span>{}</div>"#,
            entry.color, escape_html(entry.label))?;
    }
    writeln!(writer, "  </div>\n</div>")?;
    Ok(())
}

/// Write the closing tags.
pub(crate) fn write_html_footer<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "</body>\n</html>")?;
    Ok(())
}
