//! Heatmap artefact rendering.
//!
//! Each overlay is written twice: a raw JSON point list for downstream
//! consumers and a self-contained Leaflet page for direct viewing. Both
//! use the leaflet.heat point shape `[latitude, longitude, weight]`.

use camino::{Utf8Path, Utf8PathBuf};
use heatwalk_core::Site;
use heatwalk_scorer::Analysis;

use crate::CliError;

/// Leaflet heat-layer options for one overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeatmapStyle {
    pub(crate) radius: u32,
    pub(crate) blur: u32,
    pub(crate) max_zoom: u32,
}

/// Broad halo so a handful of sites still reads as a surface.
pub(crate) const INTEREST_STYLE: HeatmapStyle = HeatmapStyle {
    radius: 60,
    blur: 40,
    max_zoom: 18,
};

/// Tight halo that keeps individual trace clusters visible.
pub(crate) const DENSITY_STYLE: HeatmapStyle = HeatmapStyle {
    radius: 25,
    blur: 15,
    max_zoom: 18,
};

const MAP_CENTER_LAT: f64 = 28.2282;
const MAP_CENTER_LON: f64 = 112.9389;
const MAP_ZOOM: u32 = 14;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script src="https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js"></script>
<style>
html, body, #map { height: 100%; margin: 0; }
#legend {
    position: absolute; bottom: 12px; left: 12px; z-index: 1000;
    background: rgba(255, 255, 255, 0.85); padding: 6px 10px;
    font: 12px sans-serif; border-radius: 4px;
}
#legend .ramp {
    height: 8px; width: 160px; margin-bottom: 4px;
    background: linear-gradient(to right,
        #0000FF, #00FFFF, #00FF00, #FFFF00, #FF8C00, #FF4500, #8B0000);
}
</style>
</head>
<body>
<div id="map"></div>
<div id="legend"><div class="ramp"></div><span>__TITLE__ (0.0 &ndash; 1.0)</span></div>
<script>
var map = L.map("map").setView([__CENTER_LAT__, __CENTER_LON__], __ZOOM__);
L.tileLayer("https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png", {
    attribution: "&copy; OpenStreetMap contributors &copy; CARTO",
    maxZoom: 20
}).addTo(map);
L.heatLayer(__POINTS__, {
    radius: __RADIUS__,
    blur: __BLUR__,
    maxZoom: __MAX_ZOOM__
}).addTo(map);
</script>
</body>
</html>
"#;

/// Fill the page template for one overlay.
///
/// `points_json` must already be serialized; an empty list renders an
/// empty overlay rather than failing.
pub(crate) fn render_page(title: &str, points_json: &str, style: HeatmapStyle) -> String {
    PAGE_TEMPLATE
        .replace("__TITLE__", title)
        .replace("__CENTER_LAT__", &MAP_CENTER_LAT.to_string())
        .replace("__CENTER_LON__", &MAP_CENTER_LON.to_string())
        .replace("__ZOOM__", &MAP_ZOOM.to_string())
        .replace("__POINTS__", points_json)
        .replace("__RADIUS__", &style.radius.to_string())
        .replace("__BLUR__", &style.blur.to_string())
        .replace("__MAX_ZOOM__", &style.max_zoom.to_string())
}

/// Weighted `[lat, lon, score]` points for sites with a positive
/// predicted score.
pub(crate) fn interest_points(analysis: &Analysis, sites: &[Site]) -> Vec<[f64; 3]> {
    sites
        .iter()
        .filter_map(|site| {
            let score = analysis.interest.get(&site.name)?;
            (score > 0.0).then(|| [site.location.y, site.location.x, score])
        })
        .collect()
}

/// Write the four artefacts for one analysis run into `out_dir`.
pub(crate) fn write_artefacts(
    out_dir: &Utf8Path,
    analysis: &Analysis,
    sites: &[Site],
) -> Result<(), CliError> {
    let interest = interest_points(analysis, sites);
    let density: Vec<[f64; 3]> = analysis
        .density
        .iter()
        .map(|point| [point.latitude, point.longitude, point.weight])
        .collect();

    let interest_json = encode("interest points", &interest)?;
    let density_json = encode("density points", &density)?;

    write(out_dir.join("interest_points.json"), &interest_json)?;
    write(out_dir.join("density_points.json"), &density_json)?;
    write(
        out_dir.join("attraction_interest_heatmap.html"),
        &render_page("Attraction interest", &interest_json, INTEREST_STYLE),
    )?;
    write(
        out_dir.join("visitor_density_heatmap.html"),
        &render_page("Visitor density", &density_json, DENSITY_STYLE),
    )?;
    log::info!(
        "wrote artefacts for {} interest and {} density points to {out_dir}",
        interest.len(),
        density.len()
    );
    Ok(())
}

fn encode(artefact: &'static str, points: &[[f64; 3]]) -> Result<String, CliError> {
    serde_json::to_string(points).map_err(|source| CliError::SerializeArtefact { artefact, source })
}

fn write(path: Utf8PathBuf, contents: &str) -> Result<(), CliError> {
    heatwalk_fs::write_string(&path, contents)
        .map_err(|source| CliError::WriteArtefact { path, source })
}
