use crate::{
    encoding::EarthquakeOverlay,
    layers::{base::LayerTrait, tile::TileLayer},
    Error, Result,
};
use log::debug;
use serde::Serialize;

/// Switchable base layers (exactly one active) plus independently
/// toggled overlays.
#[derive(Debug, Clone, Serialize)]
pub struct LayerControl {
    pub base_layers: Vec<TileLayer>,
    pub overlays: Vec<EarthquakeOverlay>,
    /// Index into `base_layers`
    pub active_base: usize,
    pub collapsed: bool,
}

impl LayerControl {
    pub fn new(base_layers: Vec<TileLayer>) -> Result<Self> {
        if base_layers.is_empty() {
            return Err(Error::Layer("at least one base layer is required".to_string()));
        }
        let mut control = Self {
            base_layers,
            overlays: Vec::new(),
            active_base: 0,
            collapsed: false,
        };
        control.sync_base_visibility();
        Ok(control)
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn add_overlay(&mut self, overlay: EarthquakeOverlay) {
        self.overlays.push(overlay);
    }

    pub fn active_base(&self) -> &TileLayer {
        &self.base_layers[self.active_base]
    }

    /// Makes the named base layer the only visible one
    pub fn select_base(&mut self, name: &str) -> Result<()> {
        let index = self
            .base_layers
            .iter()
            .position(|layer| layer.name() == name)
            .ok_or_else(|| Error::Layer(format!("unknown base layer: {}", name)))?;
        self.active_base = index;
        self.sync_base_visibility();
        debug!("base layer switched to {}", name);
        Ok(())
    }

    /// Flips an overlay's visibility and returns the new state
    pub fn toggle_overlay(&mut self, name: &str) -> Result<bool> {
        let overlay = self
            .overlays
            .iter_mut()
            .find(|overlay| overlay.name() == name)
            .ok_or_else(|| Error::Layer(format!("unknown overlay: {}", name)))?;
        let visible = !overlay.is_visible();
        overlay.set_visible(visible);
        Ok(visible)
    }

    /// Names of the overlays that are currently shown
    pub fn visible_overlays(&self) -> Vec<&str> {
        self.overlays
            .iter()
            .filter(|overlay| overlay.is_visible())
            .map(|overlay| overlay.name())
            .collect()
    }

    fn sync_base_visibility(&mut self) {
        let active = self.active_base;
        for (i, layer) in self.base_layers.iter_mut().enumerate() {
            layer.set_visible(i == active);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control() -> LayerControl {
        LayerControl::new(vec![
            TileLayer::mapbox_streets("t"),
            TileLayer::mapbox_outdoors("t"),
            TileLayer::mapbox_satellite("t"),
        ])
        .unwrap()
    }

    #[test]
    fn test_select_base() {
        let mut control = control();
        assert_eq!(control.active_base().name(), "Street");

        control.select_base("Satellite").unwrap();
        assert_eq!(control.active_base().name(), "Satellite");
        let visible: Vec<_> = control
            .base_layers
            .iter()
            .filter(|l| l.is_visible())
            .map(|l| l.name())
            .collect();
        assert_eq!(visible, vec!["Satellite"]);

        assert!(matches!(control.select_base("Moon"), Err(Error::Layer(_))));
        assert_eq!(control.active_base().name(), "Satellite");
    }

    #[test]
    fn test_toggle_overlay() {
        let mut control = control();
        control.add_overlay(EarthquakeOverlay::new(Vec::new()));
        assert_eq!(control.visible_overlays(), vec![EarthquakeOverlay::NAME]);

        assert!(!control.toggle_overlay(EarthquakeOverlay::NAME).unwrap());
        assert!(control.visible_overlays().is_empty());
        assert!(control.toggle_overlay(EarthquakeOverlay::NAME).unwrap());
        assert!(control.toggle_overlay("Faults").is_err());
    }

    #[test]
    fn test_requires_a_base_layer() {
        assert!(LayerControl::new(Vec::new()).is_err());
    }
}
