use std::io::{self, Write};

use serde_json::{json, Value};

use crate::map::MapArtifact;

/// Data handed to the page script: everything Leaflet needs, nothing else.
pub(crate) fn map_spec(artifact: &MapArtifact) -> Value {
    let layers: Vec<Value> = artifact.layers.iter()
        .map(|layer| json!({
            "name": layer.name,
            "data": layer.to_geojson(),
            "highlight": layer.highlight,
            "tooltip": layer.tooltip,
        }))
        .collect();

    json!({
        "center": artifact.viewport.center,
        "bounds": artifact.viewport.bounds,
        "zoom": artifact.zoom_start,
        "padding": artifact.fit_padding,
        "tiles": {
            "url": artifact.tiles.url(),
            "attribution": artifact.tiles.attribution(),
            "maxZoom": artifact.tiles.max_zoom(),
        },
        "layers": layers,
        "collapsed": artifact.layer_control.collapsed,
    })
}

/// Serialize JSON for embedding inside a `<script>` element.
pub(crate) fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Write the script that builds the Leaflet map.
///
/// A single layer is added as a checkbox overlay. Several layers are added as
/// mutually exclusive choices with the first one shown.
pub(crate) fn write_map_script<W: Write>(writer: &mut W, artifact: &MapArtifact) -> io::Result<()> {
    writeln!(writer, "<script>")?;
    writeln!(writer, "const spec = {};", script_json(&map_spec(artifact)))?;
    writeln!(writer, r#"const map = L.map("map", {{ center: spec.center, zoom: spec.zoom }});
L.tileLayer(spec.tiles.url, {{
    attribution: spec.tiles.attribution,
    maxZoom: spec.tiles.maxZoom,
    subdomains: "abcd",
}}).addTo(map);

const choices = {{}};
spec.layers.forEach((layerSpec, i) => {{
    const layer = L.geoJSON(layerSpec.data, {{
        style: (feature) => feature.style,
        onEachFeature: (feature, path) => {{
            const text = feature.properties && feature.properties[layerSpec.tooltip.field];
            if (text) {{ path.bindTooltip(text, {{ sticky: layerSpec.tooltip.sticky }}); }}
            path.on("mouseover", () => path.setStyle(layerSpec.highlight));
            path.on("mouseout", () => layer.resetStyle(path));
        }},
    }});
    if (i === 0) {{ layer.addTo(map); }}
    choices[layerSpec.name] = layer;
}});

if (spec.layers.length > 1) {{
    L.control.layers(choices, null, {{ collapsed: spec.collapsed }}).addTo(map);
}} else {{
    L.control.layers(null, choices, {{ collapsed: spec.collapsed }}).addTo(map);
}}

map.fitBounds(spec.bounds, {{ padding: spec.padding }});"#)?;
    writeln!(writer, "</script>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_tags_are_escaped() {
        let value = json!({ "t": "</script><script>alert(1)</script>" });
        let out = script_json(&value);
        assert!(!out.contains("</"));
        assert_eq!(serde_json::from_str::<Value>(&out).unwrap(), value);
    }
}
