//! Standalone page that draws the document with Leaflet from its CDN.

use crate::{core::map::QuakeMap, Result};

const LEAFLET_VERSION: &str = "1.9.4";

const PAGE_STYLE: &str = "html, body, #map { height: 100%; margin: 0; }
.info { padding: 6px 8px; background: rgba(255,255,255,0.8); box-shadow: 0 0 15px rgba(0,0,0,0.2); border-radius: 5px; }
.legend { line-height: 18px; color: #555; }
.legend i { width: 18px; height: 18px; float: left; margin-right: 8px; opacity: 0.7; }";

const PAGE_SCRIPT: &str = r#"const doc = JSON.parse(document.getElementById("quakemap-doc").textContent);
const baseMaps = {};
doc.layers.base_layers.forEach((layer) => {
  baseMaps[layer.name] = L.tileLayer(layer.url, layer.options);
});
const overlayMaps = {};
const shown = [Object.values(baseMaps)[doc.layers.active_base]];
doc.layers.overlays.forEach((overlay) => {
  const group = L.layerGroup(overlay.markers.map((m) => {
    const marker = L.circleMarker([m.position.lat, m.position.lng], m.style);
    if (m.popup) { marker.bindPopup(m.popup); }
    return marker;
  }));
  overlayMaps[overlay.name] = group;
  if (overlay.visible) { shown.push(group); }
});
const map = L.map("map", { center: [doc.center.lat, doc.center.lng], zoom: doc.zoom, layers: shown });
L.control.layers(baseMaps, overlayMaps, { collapsed: doc.layers.collapsed }).addTo(map);
const legend = L.control({ position: doc.legend_position });
legend.onAdd = () => {
  const div = document.createElement("div");
  div.innerHTML = doc.legend_html;
  return div.firstChild;
};
legend.addTo(map);"#;

/// Renders a self-contained HTML page for the document
pub fn render_page(map: &QuakeMap) -> Result<String> {
    // `</` inside the embedded JSON would close the script element early.
    let doc = serde_json::to_string(map)?.replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Earthquakes</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css">
<style>
{style}
</style>
</head>
<body>
<div id="map"></div>
<script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"></script>
<script id="quakemap-doc" type="application/json">{doc}</script>
<script>
{script}
</script>
</body>
</html>
"#,
        version = LEAFLET_VERSION,
        style = PAGE_STYLE,
        doc = doc,
        script = PAGE_SCRIPT,
    ))
}
