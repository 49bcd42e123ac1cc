//! Map builder for fluent configuration of a map document

use crate::{
    core::{
        config::QuakeMapConfig,
        geo::LatLng,
        map::{LegendPosition, QuakeMap},
    },
    data::ingest::EarthquakeFeature,
    encoding::VisualEncoder,
    layers::{control::LayerControl, tile::TileLayer},
    Result,
};
use log::{info, warn};

/// Builder for a `QuakeMap`
pub struct MapBuilder {
    config: QuakeMapConfig,
    encoder: VisualEncoder,
    base_layers: Option<Vec<TileLayer>>,
    legend_position: LegendPosition,
    collapsed_control: bool,
}

impl MapBuilder {
    /// Create a new MapBuilder with default settings
    pub fn new() -> Self {
        Self::from_config(QuakeMapConfig::default())
    }

    pub fn from_config(config: QuakeMapConfig) -> Self {
        let encoder = VisualEncoder::from_config(&config);
        Self {
            config,
            encoder,
            base_layers: None,
            legend_position: LegendPosition::default(),
            collapsed_control: false,
        }
    }

    /// Set the initial center and zoom level
    pub fn with_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.config.center = center;
        self.config.zoom = zoom;
        self
    }

    /// Replace the encoder derived from the config
    pub fn with_encoder(mut self, encoder: VisualEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Use these base layers instead of the token-dependent defaults
    pub fn with_base_layers(mut self, layers: Vec<TileLayer>) -> Self {
        self.base_layers = Some(layers);
        self
    }

    pub fn with_legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = position;
        self
    }

    pub fn with_collapsed_control(mut self, collapsed: bool) -> Self {
        self.collapsed_control = collapsed;
        self
    }

    pub fn encoder(&self) -> &VisualEncoder {
        &self.encoder
    }

    /// Street, Outdoors and Satellite with a token; OpenStreetMap otherwise
    pub fn default_base_layers(access_token: Option<&str>) -> Vec<TileLayer> {
        match access_token {
            Some(token) => vec![
                TileLayer::mapbox_streets(token),
                TileLayer::mapbox_outdoors(token),
                TileLayer::mapbox_satellite(token),
            ],
            None => {
                warn!("no access token configured, falling back to OpenStreetMap tiles");
                vec![TileLayer::openstreetmap(
                    "osm".to_string(),
                    "OpenStreetMap".to_string(),
                )]
            }
        }
    }

    /// Encodes the features and assembles the document
    pub fn build(self, features: &[EarthquakeFeature]) -> Result<QuakeMap> {
        self.config.validate()?;

        let base_layers = match self.base_layers {
            Some(layers) => layers,
            None => Self::default_base_layers(self.config.access_token.as_deref()),
        };
        let mut layers = LayerControl::new(base_layers)?.with_collapsed(self.collapsed_control);
        match &self.config.initial_base {
            Some(name) => layers.select_base(name)?,
            None => {
                let last = layers.base_layers.len() - 1;
                let name = layers.base_layers[last].name.clone();
                layers.select_base(&name)?;
            }
        }

        let overlay = self.encoder.encode(features);
        info!(
            "built map with {} markers over {} base layers",
            overlay.len(),
            layers.base_layers.len()
        );
        layers.add_overlay(overlay);

        let legend = self.encoder.build_legend();
        let legend_html = legend.to_html(&self.config.legend_unit);

        Ok(QuakeMap {
            center: self.config.center,
            zoom: self.config.zoom,
            layers,
            legend,
            legend_position: self.legend_position,
            legend_html,
        })
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::EarthquakeOverlay;
    use crate::layers::base::LayerTrait;

    fn quakes() -> Vec<EarthquakeFeature> {
        vec![
            EarthquakeFeature::new("a", 1.0, 0, LatLng::new(10.0, 20.0), 5.0),
            EarthquakeFeature::new("b", 2.0, 0, LatLng::new(11.0, 21.0), 60.0),
        ]
    }

    #[test]
    fn test_without_token_falls_back_to_osm() {
        let map = MapBuilder::new().build(&quakes()).unwrap();
        assert_eq!(map.layers.base_layers.len(), 1);
        assert_eq!(map.layers.active_base().name, "OpenStreetMap");
        assert_eq!(map.marker_count(), 2);
        assert_eq!(map.legend.len(), 6);
        assert_eq!(map.initial_layers(), vec!["osm", "earthquakes"]);
    }

    #[test]
    fn test_token_enables_mapbox_layers_with_satellite_first() {
        let config = QuakeMapConfig::default().with_access_token("pk.test");
        let map = MapBuilder::from_config(config).build(&quakes()).unwrap();

        let names: Vec<_> = map.layers.base_layers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Street", "Outdoors", "Satellite"]);
        assert_eq!(map.layers.active_base().name, "Satellite");
        assert!(!map.layers.collapsed);
        assert_eq!(map.overlay().unwrap().name(), EarthquakeOverlay::NAME);
    }

    #[test]
    fn test_initial_base_and_unknown_name() {
        let mut config = QuakeMapConfig::default().with_access_token("pk.test");
        config.initial_base = Some("Outdoors".to_string());
        let map = MapBuilder::from_config(config.clone()).build(&[]).unwrap();
        assert_eq!(map.layers.active_base().name, "Outdoors");

        config.initial_base = Some("Terrain".to_string());
        assert!(MapBuilder::from_config(config).build(&[]).is_err());
    }

    #[test]
    fn test_legend_html_uses_unit() {
        let map = MapBuilder::new().build(&[]).unwrap();
        assert!(map.legend_html.contains("0&ndash;20km<br>"));
    }
}
