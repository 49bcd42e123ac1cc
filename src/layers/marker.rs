use crate::{core::geo::LatLng, encoding::style::MarkerStyle};
use serde::Serialize;

/// A circle marker with a popup, the rendered form of one earthquake
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    pub id: String,
    pub position: LatLng,
    pub style: MarkerStyle,
    pub popup: Option<String>,
}

impl CircleMarker {
    pub fn new(id: String, position: LatLng, style: MarkerStyle) -> Self {
        Self {
            id,
            position,
            style,
            popup: None,
        }
    }

    pub fn with_popup(mut self, text: String) -> Self {
        self.popup = Some(text);
        self
    }
}
