use crate::prelude::HashMap;
use serde::{Deserialize, Deserializer, Serialize};

/// GeoJSON geometry. Earthquake feeds only carry points; any other geometry
/// type is kept as `Unsupported` so a single odd record does not fail the
/// whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    /// `[longitude, latitude, depth_km]` for seismic events. Entries are kept
    /// as raw JSON so a `null` or missing position only rejects its own
    /// record during ingest.
    Point {
        #[serde(default, deserialize_with = "lenient_coordinates")]
        coordinates: Vec<serde_json::Value>,
    },
    #[serde(other)]
    Unsupported,
}

/// Anything other than an array reads as an empty position
fn lenient_coordinates<'de, D>(deserializer: D) -> Result<Vec<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(values) => Ok(values),
        _ => Ok(Vec::new()),
    }
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient_geometry")]
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default, deserialize_with = "lenient_properties")]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Untyped or malformed geometry objects read as `Unsupported`
fn lenient_geometry<'de, D>(deserializer: D) -> Result<Option<GeoJsonGeometry>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value => Ok(Some(serde_json::from_value(value).unwrap_or(GeoJsonGeometry::Unsupported))),
    }
}

/// Properties that are not a JSON object read as absent
fn lenient_properties<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, serde_json::Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Object(map) => Ok(Some(map.into_iter().collect())),
        _ => Ok(None),
    }
}

impl GeoJsonFeature {
    /// Point feature with the given properties, mostly useful for fixtures.
    pub fn point(coordinates: Vec<f64>, properties: serde_json::Value) -> Self {
        let properties = match properties {
            serde_json::Value::Object(map) => Some(map.into_iter().collect()),
            _ => None,
        };
        let coordinates = coordinates.into_iter().map(serde_json::Value::from).collect();
        Self {
            id: None,
            geometry: Some(GeoJsonGeometry::Point { coordinates }),
            properties,
        }
    }

    pub fn property(&self, name: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref()?.get(name)
    }

    pub fn property_str(&self, name: &str) -> Option<&str> {
        self.property(name)?.as_str()
    }

    pub fn property_f64(&self, name: &str) -> Option<f64> {
        self.property(name)?.as_f64()
    }

    pub fn property_i64(&self, name: &str) -> Option<i64> {
        let value = self.property(name)?;
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|v| v as i64))
    }

    /// Feed-assigned id rendered as text, if any
    pub fn id_string(&self) -> Option<String> {
        match self.id.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Raw point coordinates, or `None` for missing or non-point geometry
    pub fn point_coordinates(&self) -> Option<&[serde_json::Value]> {
        match self.geometry.as_ref()? {
            GeoJsonGeometry::Point { coordinates } => Some(coordinates),
            GeoJsonGeometry::Unsupported => None,
        }
    }
}

/// Header block USGS attaches to every summary feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedMetadata {
    pub generated: Option<i64>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub count: Option<u64>,
}

/// Root GeoJSON document of an earthquake feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FeedMetadata>,
    #[serde(default)]
    pub features: Vec<GeoJsonFeature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<GeoJsonFeature>) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            metadata: None,
            features,
        }
    }

    /// Parses a GeoJSON FeatureCollection from raw JSON text
    pub fn from_str(geojson_str: &str) -> crate::Result<Self> {
        let collection: FeatureCollection = serde_json::from_str(geojson_str)?;
        collection.validated()
    }

    /// Parses a GeoJSON FeatureCollection from raw bytes
    pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
        let collection: FeatureCollection = serde_json::from_slice(bytes)?;
        collection.validated()
    }

    fn validated(self) -> crate::Result<Self> {
        if self.kind != "FeatureCollection" {
            return Err(crate::Error::InvalidFeature(format!(
                "expected a FeatureCollection, got {}",
                self.kind
            )));
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"
    {
        "type": "FeatureCollection",
        "metadata": {"generated": 1700000100000, "title": "USGS All Earthquakes, Past Week", "count": 2},
        "features": [
            {
                "type": "Feature",
                "id": "nc73912345",
                "properties": {"place": "10km N of Testville", "mag": 4.5, "time": 1700000000000},
                "geometry": {"type": "Point", "coordinates": [-120.0, 37.0, 15]}
            },
            {
                "type": "Feature",
                "id": "odd1",
                "properties": {"place": "Somewhere"},
                "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
            }
        ]
    }
    "#;

    #[test]
    fn test_feed_parsing() {
        let collection = FeatureCollection::from_str(FEED).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.metadata.as_ref().unwrap().count, Some(2));

        let quake = &collection.features[0];
        assert_eq!(quake.id_string().as_deref(), Some("nc73912345"));
        assert_eq!(quake.property_str("place"), Some("10km N of Testville"));
        assert_eq!(quake.property_f64("mag"), Some(4.5));
        assert_eq!(quake.property_i64("time"), Some(1_700_000_000_000));
        let position: Vec<_> = quake
            .point_coordinates()
            .unwrap()
            .iter()
            .map(|v| v.as_f64())
            .collect();
        assert_eq!(position, vec![Some(-120.0), Some(37.0), Some(15.0)]);
    }

    #[test]
    fn test_non_point_geometry_is_kept_as_unsupported() {
        let collection = FeatureCollection::from_str(FEED).unwrap();
        let odd = &collection.features[1];
        assert_eq!(odd.geometry, Some(GeoJsonGeometry::Unsupported));
        assert!(odd.point_coordinates().is_none());
    }

    #[test]
    fn test_bad_positions_do_not_fail_the_document() {
        let collection = FeatureCollection::from_str(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2, null]}},
                {"type": "Feature", "geometry": {"type": "Point"}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": null}},
                {"type": "Feature", "geometry": {"coordinates": [1, 2, 3]}, "properties": 7}
            ]}"#,
        )
        .unwrap();

        assert_eq!(collection.len(), 4);
        assert_eq!(collection.features[0].point_coordinates().unwrap().len(), 3);
        assert!(collection.features[1].point_coordinates().unwrap().is_empty());
        assert!(collection.features[2].point_coordinates().unwrap().is_empty());
        assert_eq!(
            collection.features[3].geometry,
            Some(GeoJsonGeometry::Unsupported)
        );
        assert!(collection.features[3].properties.is_none());
    }

    #[test]
    fn test_rejects_other_root_types() {
        let err = FeatureCollection::from_str(r#"{"type": "Feature", "features": []}"#);
        assert!(matches!(err, Err(crate::Error::InvalidFeature(_))));
        assert!(FeatureCollection::from_str("not json").is_err());
    }
}
