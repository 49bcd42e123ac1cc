//! Configuration for one fetch-and-render run
//!
//! Every setting has a default, so a config file only needs the keys it
//! changes. The access token is an explicit field: nothing in the library
//! reads it from the environment.

use crate::{
    core::{
        constants::{DEFAULT_CENTER, DEFAULT_FEED_URL, DEFAULT_ZOOM},
        geo::LatLng,
    },
    encoding::{
        depth::BoundaryPolicy,
        popup::{PopupTemplate, TimeFormat},
    },
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuakeMapConfig {
    pub feed_url: String,
    /// Mapbox token for the Street/Outdoors/Satellite base layers; without
    /// one only OpenStreetMap is offered.
    pub access_token: Option<String>,
    pub boundary_policy: BoundaryPolicy,
    pub popup: PopupTemplate,
    pub time_format: TimeFormat,
    pub center: LatLng,
    pub zoom: f64,
    /// Suffix for bounded legend rows, e.g. `km`
    pub legend_unit: String,
    /// Base layer shown on load; the last base layer when unset
    pub initial_base: Option<String>,
}

impl Default for QuakeMapConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            access_token: None,
            boundary_policy: BoundaryPolicy::default(),
            popup: PopupTemplate::default(),
            time_format: TimeFormat::default(),
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
            legend_unit: "km".to_string(),
            initial_base: None,
        }
    }
}

impl QuakeMapConfig {
    /// Loads a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.feed_url.trim().is_empty() {
            return Err(Error::Config("feed_url must not be empty".to_string()));
        }
        if !self.center.is_valid() {
            return Err(Error::Config(format!(
                "center out of range: {}, {}",
                self.center.lat, self.center.lng
            )));
        }
        if !(0.0..=f64::from(crate::constants::MAX_TILE_ZOOM)).contains(&self.zoom) {
            return Err(Error::Config(format!("zoom out of range: {}", self.zoom)));
        }
        if matches!(self.access_token.as_deref(), Some(token) if token.trim().is_empty()) {
            return Err(Error::Config("access_token is set but empty".to_string()));
        }
        Ok(())
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}
