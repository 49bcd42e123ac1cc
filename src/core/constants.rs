//! Core constants for the earthquake map: feed location, initial view and encoding scales.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

use crate::encoding::depth::Color;

/// USGS summary feed of every event in the past seven days.
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// Root of the USGS summary feeds; see `FeedPeriod` / `FeedMagnitude`.
pub const USGS_SUMMARY_BASE: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// Initial map center (contiguous United States).
pub const DEFAULT_CENTER: (f64, f64) = (37.09, -95.71);

/// Initial map zoom.
pub const DEFAULT_ZOOM: f64 = 3.0;

/// Marker radius in pixels per unit of magnitude.
pub const RADIUS_PER_MAGNITUDE: f64 = 4.0;

/// Depth thresholds in km separating the six depth bands.
pub const DEPTH_THRESHOLDS_KM: [f64; 5] = [20.0, 50.0, 100.0, 200.0, 500.0];

/// Band colors from shallowest to deepest: `#FEB24C` through `#800026`.
pub const DEPTH_COLORS: [Color; 6] = [
    Color::rgb(0xFE, 0xB2, 0x4C),
    Color::rgb(0xFD, 0x8D, 0x3C),
    Color::rgb(0xFC, 0x4E, 0x2A),
    Color::rgb(0xE3, 0x1A, 0x1C),
    Color::rgb(0xBD, 0x00, 0x26),
    Color::rgb(0x80, 0x00, 0x26),
];

/// Lower bounds used for legend rows.
pub const LEGEND_GRADES_KM: [f64; 6] = [0.0, 20.0, 50.0, 100.0, 200.0, 500.0];

/// Offset added to a legend row's lower bound before sampling its color.
pub const LEGEND_SAMPLE_OFFSET_KM: f64 = 1.0;

/// Default strftime pattern for popup timestamps (rendered in UTC).
pub const DEFAULT_TIME_FORMAT: &str = "%a %b %d %Y %H:%M:%S UTC";

/// Upper zoom limit of the Mapbox style tiles.
pub const MAX_TILE_ZOOM: u8 = 18;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

pub const MAPBOX_ATTRIBUTION: &str = "© <a href='https://www.mapbox.com/about/maps/'>Mapbox</a> © <a href='http://www.openstreetmap.org/copyright'>OpenStreetMap</a> <strong><a href='https://www.mapbox.com/map-feedback/' target='_blank'>Improve this map</a></strong>";

pub const OSM_ATTRIBUTION: &str =
    "© <a href='http://www.openstreetmap.org/copyright'>OpenStreetMap</a> contributors";
