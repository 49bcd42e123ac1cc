use crate::{
    core::constants::RADIUS_PER_MAGNITUDE,
    data::ingest::EarthquakeFeature,
    encoding::depth::{Color, DepthScale},
};
use serde::{Deserialize, Serialize};

/// Circle marker options for one earthquake.
///
/// Field names follow the circle-marker options of web map widgets
/// (`fillColor`, `fillOpacity`, ...) so the serialized form can be handed over
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Pixel radius, `4 × magnitude`. Not clamped: zero or negative
    /// magnitudes give a zero or negative radius.
    pub radius: f64,
    pub fill_color: Color,
    /// Stroke color
    pub color: Color,
    /// Stroke width
    pub weight: f64,
    /// Stroke opacity
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    /// Style with the fixed stroke and the given radius and fill
    pub fn new(radius: f64, fill_color: Color) -> Self {
        Self {
            radius,
            fill_color,
            color: Color::BLACK,
            weight: 1.0,
            opacity: 1.0,
            fill_opacity: 0.8,
        }
    }
}

/// Derives the marker style of a feature. Recomputed on every call.
pub fn style_for(feature: &EarthquakeFeature, scale: &DepthScale) -> MarkerStyle {
    MarkerStyle::new(
        RADIUS_PER_MAGNITUDE * feature.magnitude,
        scale.classify(feature.depth_km),
    )
}
