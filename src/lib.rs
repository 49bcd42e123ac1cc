//! # Quakemap
//!
//! Turns an earthquake GeoJSON feed into a map document: depth-colored,
//! magnitude-sized circle markers with popups, a choropleth depth legend and
//! a set of togglable base layers.
//!
//! The drawing itself is left to an external web map widget; this crate
//! produces everything that widget needs, either as JSON or as a standalone
//! Leaflet page.

pub mod core;
pub mod data;
pub mod encoding;
pub mod layers;
pub mod prelude;
pub mod render;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    builder::MapBuilder,
    config::QuakeMapConfig,
    geo::{LatLng, LatLngBounds},
    map::QuakeMap,
};

pub use data::{
    feed::{FeedSource, HttpFeed, StaticFeed},
    geojson::{FeatureCollection, GeoJsonFeature},
    ingest::{ingest, EarthquakeFeature, IngestReport},
};

pub use encoding::{
    depth::{BoundaryPolicy, Color, DepthScale},
    legend::{Legend, LegendRow},
    popup::PopupTemplate,
    style::MarkerStyle,
    EarthquakeOverlay, VisualEncoder,
};

pub use layers::{
    base::LayerTrait, control::LayerControl, marker::CircleMarker, tile::TileLayer,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Feed request to {url} failed with HTTP {status}")]
    Feed { url: String, status: u16 },

    #[error("Invalid feature: {0}")]
    InvalidFeature(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layer error: {0}")]
    Layer(String),
}

/// Error type alias for convenience
pub type Error = MapError;
