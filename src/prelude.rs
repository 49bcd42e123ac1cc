//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

pub use crate::core::{
    builder::MapBuilder,
    config::QuakeMapConfig,
    geo::{LatLng, LatLngBounds},
    map::{LegendPosition, QuakeMap},
};

pub use crate::data::{
    feed::{FeedMagnitude, FeedPeriod, FeedSource, HttpFeed, StaticFeed},
    geojson::{FeatureCollection, GeoJsonFeature, GeoJsonGeometry},
    ingest::{ingest, EarthquakeFeature, IngestReport},
};

pub use crate::encoding::{
    depth::{BoundaryPolicy, Color, DepthScale},
    legend::{Legend, LegendRow},
    popup::{PopupTemplate, TimeFormat},
    style::MarkerStyle,
    EarthquakeOverlay, VisualEncoder,
};

pub use crate::layers::{
    base::{LayerProperties, LayerTrait},
    control::LayerControl,
    marker::CircleMarker,
    tile::{MapboxStyleSource, OpenStreetMapSource, TileLayer, TileSource},
};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
