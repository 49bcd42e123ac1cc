//! Conversion of raw feed features into validated earthquake records.
//!
//! Malformed records are skipped and logged instead of failing the render.

use crate::{
    core::geo::LatLng,
    data::geojson::{FeatureCollection, GeoJsonFeature},
    Error, Result,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// One earthquake as read from the feed. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeFeature {
    pub id: Option<String>,
    pub place: String,
    pub magnitude: f64,
    /// Event time in epoch milliseconds
    pub time: i64,
    /// Third coordinate of the epicenter position
    pub depth_km: f64,
    pub position: LatLng,
}

impl EarthquakeFeature {
    pub fn new(
        place: impl Into<String>,
        magnitude: f64,
        time: i64,
        position: LatLng,
        depth_km: f64,
    ) -> Self {
        Self {
            id: None,
            place: place.into(),
            magnitude,
            time,
            depth_km,
            position,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Validates and converts a GeoJSON feature.
    pub fn from_geojson(feature: &GeoJsonFeature) -> Result<Self> {
        let coordinates: Vec<f64> = feature
            .point_coordinates()
            .ok_or_else(|| Error::InvalidFeature("missing point geometry".to_string()))?
            .iter()
            .map(|value| value.as_f64())
            .collect::<Option<_>>()
            .ok_or_else(|| Error::InvalidFeature("non-numeric coordinate".to_string()))?;
        let (position, depth_km) = match (LatLng::from_position(&coordinates), coordinates.get(2)) {
            (Some(position), Some(depth)) => (position, *depth),
            _ => {
                return Err(Error::InvalidFeature(format!(
                    "expected [lng, lat, depth], got {} coordinates",
                    coordinates.len()
                )))
            }
        };
        let place = feature
            .property_str("place")
            .ok_or_else(|| Error::InvalidFeature("missing place".to_string()))?;
        let magnitude = feature
            .property_f64("mag")
            .ok_or_else(|| Error::InvalidFeature("missing magnitude".to_string()))?;
        let time = feature
            .property_i64("time")
            .ok_or_else(|| Error::InvalidFeature("missing time".to_string()))?;

        Ok(Self {
            id: feature.id_string(),
            place: place.to_string(),
            magnitude,
            time,
            depth_km,
            position,
        })
    }
}

/// A feed record that was left out of the render
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFeature {
    /// Position in the feed
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

/// Result of ingesting a whole feed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    /// Valid features in feed order
    pub features: Vec<EarthquakeFeature>,
    pub skipped: Vec<SkippedFeature>,
}

impl IngestReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Converts every feature of a collection, skipping malformed records.
pub fn ingest(collection: &FeatureCollection) -> IngestReport {
    let mut report = IngestReport::default();

    for (index, feature) in collection.features.iter().enumerate() {
        match EarthquakeFeature::from_geojson(feature) {
            Ok(quake) => report.features.push(quake),
            Err(e) => {
                let id = feature.id_string();
                warn!(
                    "skipping feature #{} ({}): {}",
                    index,
                    id.as_deref().unwrap_or("no id"),
                    e
                );
                report.skipped.push(SkippedFeature {
                    index,
                    id,
                    reason: e.to_string(),
                });
            }
        }
    }

    debug!(
        "ingested {} features, skipped {}",
        report.features.len(),
        report.skipped.len()
    );
    report
}
