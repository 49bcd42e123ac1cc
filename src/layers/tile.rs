//! Base-map tile layers.
//!
//! Tiles are drawn by the map widget; these types only describe where the
//! tiles come from. Access tokens are passed in explicitly.

use crate::{
    core::constants::{MAPBOX_ATTRIBUTION, MAX_TILE_ZOOM, OSM_ATTRIBUTION, TILE_SIZE},
    layers::base::{LayerProperties, LayerTrait},
};
use serde::Serialize;

/// Anything that can tell the map widget where its tiles live.
pub trait TileSource: Send + Sync + std::fmt::Debug {
    /// URL template with `{z}`, `{x}`, `{y}` placeholders, as web map widgets expect it
    fn url_template(&self) -> String;
}

/// Default OpenStreetMap tile server; needs no token.
#[derive(Debug, Clone, Default)]
pub struct OpenStreetMapSource;

impl TileSource for OpenStreetMapSource {
    fn url_template(&self) -> String {
        "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
    }
}

/// Raster tiles of a Mapbox style, e.g. `mapbox/streets-v11`
#[derive(Clone)]
pub struct MapboxStyleSource {
    style_id: String,
    access_token: String,
}

impl MapboxStyleSource {
    pub fn new(style_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            style_id: style_id.into(),
            access_token: access_token.into(),
        }
    }

    pub fn style_id(&self) -> &str {
        &self.style_id
    }
}

impl std::fmt::Debug for MapboxStyleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxStyleSource")
            .field("style_id", &self.style_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl TileSource for MapboxStyleSource {
    fn url_template(&self) -> String {
        format!(
            "https://api.mapbox.com/styles/v1/{}/tiles/{{z}}/{{x}}/{{y}}?access_token={}",
            self.style_id, self.access_token
        )
    }
}

/// Widget-facing options of a tile layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    pub tile_size: u32,
    pub max_zoom: u8,
    /// Shifts the requested zoom level; -1 pairs with 512px tiles
    pub zoom_offset: i8,
    pub attribution: String,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            max_zoom: MAX_TILE_ZOOM,
            zoom_offset: 0,
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

/// A base layer the user can switch to
#[derive(Debug, Clone, Serialize)]
pub struct TileLayer {
    #[serde(skip)]
    properties: LayerProperties,
    pub name: String,
    pub url: String,
    pub options: TileLayerOptions,
}

impl TileLayer {
    pub fn new(
        id: String,
        name: String,
        source: &dyn TileSource,
        options: TileLayerOptions,
    ) -> Self {
        let properties = LayerProperties::new(id, name.clone());
        let url = source.url_template();
        Self {
            properties,
            name,
            url,
            options,
        }
    }

    /// Create a tile layer for OpenStreetMap
    pub fn openstreetmap(id: String, name: String) -> Self {
        Self::new(
            id,
            name,
            &OpenStreetMapSource,
            TileLayerOptions::default(),
        )
    }

    /// Street map: 512px tiles with a -1 zoom offset
    pub fn mapbox_streets(access_token: &str) -> Self {
        Self::new(
            "street".to_string(),
            "Street".to_string(),
            &MapboxStyleSource::new("mapbox/streets-v11", access_token),
            TileLayerOptions {
                tile_size: 512,
                zoom_offset: -1,
                attribution: MAPBOX_ATTRIBUTION.to_string(),
                ..TileLayerOptions::default()
            },
        )
    }

    pub fn mapbox_outdoors(access_token: &str) -> Self {
        Self::mapbox_style("outdoors", "Outdoors", "mapbox/outdoors-v11", access_token)
    }

    pub fn mapbox_satellite(access_token: &str) -> Self {
        Self::mapbox_style("satellite", "Satellite", "mapbox/satellite-v9", access_token)
    }

    fn mapbox_style(id: &str, name: &str, style_id: &str, access_token: &str) -> Self {
        Self::new(
            id.to_string(),
            name.to_string(),
            &MapboxStyleSource::new(style_id, access_token),
            TileLayerOptions {
                attribution: MAPBOX_ATTRIBUTION.to_string(),
                ..TileLayerOptions::default()
            },
        )
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(TileLayer, properties);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osm_url() {
        let layer = TileLayer::openstreetmap("osm".to_string(), "OpenStreetMap".to_string());
        assert_eq!(layer.url, "https://tile.openstreetmap.org/{z}/{x}/{y}.png");
        assert_eq!(layer.id(), "osm");
        assert_eq!(layer.options.attribution, OSM_ATTRIBUTION);
    }

    #[test]
    fn test_mapbox_token_is_explicit() {
        let layer = TileLayer::mapbox_streets("pk.test");
        assert_eq!(
            layer.url,
            "https://api.mapbox.com/styles/v1/mapbox/streets-v11/tiles/{z}/{x}/{y}?access_token=pk.test"
        );
        assert_eq!(layer.options.tile_size, 512);
        assert_eq!(layer.options.zoom_offset, -1);
        assert_eq!(layer.name(), "Street");
    }

    #[test]
    fn test_debug_hides_token() {
        let source = MapboxStyleSource::new("mapbox/satellite-v9", "sk.secret");
        assert!(!format!("{:?}", source).contains("sk.secret"));
    }

    #[test]
    fn test_layer_options_serialize_for_leaflet() {
        let layer = TileLayer::mapbox_satellite("t");
        let json = serde_json::to_value(&layer).unwrap();
        assert_eq!(json["name"], "Satellite");
        assert_eq!(json["options"]["tileSize"], 256);
        assert_eq!(json["options"]["maxZoom"], 18);
        assert_eq!(json["options"]["zoomOffset"], 0);
        assert!(json.get("properties").is_none());
    }
}
