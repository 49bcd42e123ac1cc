//! Visual encoding engine
//!
//! Pure, deterministic mapping from earthquake features to circle markers
//! (position, style, popup text) and to the depth legend. Nothing here is
//! cached; every call recomputes from its inputs.

pub mod depth;
pub mod legend;
pub mod popup;
pub mod style;

use crate::{
    core::{config::QuakeMapConfig, geo::LatLngBounds},
    data::ingest::EarthquakeFeature,
    layers::{
        base::{LayerProperties, LayerTrait},
        marker::CircleMarker,
    },
};
use depth::{BoundaryPolicy, Color, DepthScale};
use legend::Legend;
use log::debug;
use popup::{PopupTemplate, TimeFormat};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use style::MarkerStyle;

/// Encoder settings bundled with the depth table they apply to
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisualEncoder {
    scale: DepthScale,
    popup: PopupTemplate,
    time_format: TimeFormat,
}

impl VisualEncoder {
    pub fn new(policy: BoundaryPolicy) -> Self {
        Self {
            scale: DepthScale::new(policy),
            ..Self::default()
        }
    }

    pub fn from_config(config: &QuakeMapConfig) -> Self {
        Self {
            scale: DepthScale::new(config.boundary_policy),
            popup: config.popup.clone(),
            time_format: config.time_format.clone(),
        }
    }

    pub fn with_popup(mut self, popup: PopupTemplate) -> Self {
        self.popup = popup;
        self
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    pub fn scale(&self) -> &DepthScale {
        &self.scale
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.scale.policy()
    }

    pub fn classify_depth(&self, depth_km: f64) -> Color {
        self.scale.classify(depth_km)
    }

    pub fn style_for(&self, feature: &EarthquakeFeature) -> MarkerStyle {
        style::style_for(feature, &self.scale)
    }

    pub fn describe(&self, feature: &EarthquakeFeature) -> String {
        popup::describe(feature, &self.popup, &self.time_format)
    }

    pub fn build_legend(&self) -> Legend {
        Legend::build(&self.scale)
    }

    /// Marker for one feature; `index` is its position in the feed and
    /// only used when the feed supplied no id.
    pub fn encode_feature(&self, index: usize, feature: &EarthquakeFeature) -> CircleMarker {
        let id = feature
            .id
            .clone()
            .unwrap_or_else(|| format!("quake-{}", index));
        CircleMarker::new(id, feature.position, self.style_for(feature))
            .with_popup(self.describe(feature))
    }

    /// Encodes the whole collection, preserving feed order.
    pub fn encode(&self, features: &[EarthquakeFeature]) -> EarthquakeOverlay {
        let markers: Vec<CircleMarker> = features
            .iter()
            .enumerate()
            .map(|(i, f)| self.encode_feature(i, f))
            .collect();
        debug!(
            "encoded {} markers with {:?} boundary policy",
            markers.len(),
            self.policy()
        );
        EarthquakeOverlay::new(markers)
    }
}

/// The earthquake overlay: every marker of one render, in feed order
#[derive(Debug, Clone)]
pub struct EarthquakeOverlay {
    properties: LayerProperties,
    pub markers: Vec<CircleMarker>,
    pub bounds: Option<LatLngBounds>,
}

impl EarthquakeOverlay {
    pub const NAME: &'static str = "Earthquakes";

    fn overlay_properties() -> LayerProperties {
        LayerProperties::new("earthquakes".to_string(), Self::NAME.to_string())
    }

    pub fn new(markers: Vec<CircleMarker>) -> Self {
        let bounds = LatLngBounds::from_points(markers.iter().map(|m| &m.position));
        Self {
            properties: Self::overlay_properties(),
            markers,
            bounds,
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Serialize for EarthquakeOverlay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EarthquakeOverlay", 4)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("visible", &self.is_visible())?;
        state.serialize_field("markers", &self.markers)?;
        state.serialize_field("bounds", &self.bounds)?;
        state.end()
    }
}

impl LayerTrait for EarthquakeOverlay {
    crate::impl_layer_trait!(EarthquakeOverlay, properties);
}
