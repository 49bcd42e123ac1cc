use crate::{
    core::geo::LatLng,
    encoding::{legend::Legend, EarthquakeOverlay},
    layers::{base::LayerTrait, control::LayerControl},
};
use serde::Serialize;

/// Corner of the map a control is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl LegendPosition {
    /// Position name as web map widgets spell it
    pub fn as_str(&self) -> &'static str {
        match self {
            LegendPosition::TopLeft => "topleft",
            LegendPosition::TopRight => "topright",
            LegendPosition::BottomLeft => "bottomleft",
            LegendPosition::BottomRight => "bottomright",
        }
    }
}

/// Everything the map widget needs for one render: initial view, base
/// layers, the earthquake overlay and the legend.
#[derive(Debug, Clone, Serialize)]
pub struct QuakeMap {
    pub center: LatLng,
    pub zoom: f64,
    pub layers: LayerControl,
    pub legend: Legend,
    pub legend_position: LegendPosition,
    /// Pre-rendered legend markup
    pub legend_html: String,
}

impl QuakeMap {
    pub fn overlay(&self) -> Option<&EarthquakeOverlay> {
        self.layers.overlays.first()
    }

    pub fn marker_count(&self) -> usize {
        self.layers.overlays.iter().map(|o| o.len()).sum()
    }

    /// Layer ids shown when the map first loads: the active base layer
    /// followed by the visible overlays.
    pub fn initial_layers(&self) -> Vec<&str> {
        let mut ids = vec![self.layers.active_base().id()];
        ids.extend(
            self.layers
                .overlays
                .iter()
                .filter(|o| o.is_visible())
                .map(|o| o.id()),
        );
        ids
    }
}
