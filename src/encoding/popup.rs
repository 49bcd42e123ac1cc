//! Popup text for earthquake markers.
//!
//! Templates use `{name}` placeholders: `{place}`, `{time}`, `{mag}`,
//! `{depth}`, `{lat}`, `{lng}` and `{id}`. Unknown placeholders are left as
//! written. Text coming from the feed (`place`, `id`) is HTML-escaped.

use crate::{
    core::constants::DEFAULT_TIME_FORMAT, data::ingest::EarthquakeFeature, Error, Result,
};
use chrono::{
    format::{Item, StrftimeItems},
    TimeZone, Utc,
};
use serde::{Deserialize, Serialize};

const MINIMAL_TEMPLATE: &str = "<h3>{place}</h3><hr><p>{time}</p>";
const EXTENDED_TEMPLATE: &str =
    "<h3>Magnitude: {mag}<br>Depth: {depth}km</h3><hr><p>{place}</p><p>{time}</p>";

/// Which label a marker popup shows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopupTemplate {
    /// Place and time
    Minimal,
    /// Magnitude, depth, place and time
    #[default]
    Extended,
    Custom(String),
}

impl PopupTemplate {
    pub fn as_str(&self) -> &str {
        match self {
            PopupTemplate::Minimal => MINIMAL_TEMPLATE,
            PopupTemplate::Extended => EXTENDED_TEMPLATE,
            PopupTemplate::Custom(template) => template,
        }
    }
}

impl std::str::FromStr for PopupTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "minimal" => Ok(PopupTemplate::Minimal),
            "extended" => Ok(PopupTemplate::Extended),
            other => Err(Error::Config(format!("unknown popup template: {}", other))),
        }
    }
}

/// Validated strftime pattern; timestamps are rendered in UTC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeFormat(String);

impl TimeFormat {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(Error::Config(format!("invalid time format: {}", pattern)));
        }
        Ok(Self(pattern))
    }

    /// Renders epoch milliseconds; values chrono cannot represent fall back to the raw number
    pub fn format_millis(&self, millis: i64) -> String {
        match Utc.timestamp_millis_opt(millis).single() {
            Some(time) => time.format(&self.0).to_string(),
            None => millis.to_string(),
        }
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self(DEFAULT_TIME_FORMAT.to_string())
    }
}

impl TryFrom<String> for TimeFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TimeFormat> for String {
    fn from(format: TimeFormat) -> Self {
        format.0
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn placeholder(key: &str, feature: &EarthquakeFeature, time_format: &TimeFormat) -> Option<String> {
    let value = match key {
        "place" => escape_html(&feature.place),
        "time" => time_format.format_millis(feature.time),
        "mag" => feature.magnitude.to_string(),
        "depth" => feature.depth_km.to_string(),
        "lat" => feature.position.lat.to_string(),
        "lng" => feature.position.lng.to_string(),
        "id" => escape_html(feature.id.as_deref().unwrap_or_default()),
        _ => return None,
    };
    Some(value)
}

/// Builds the popup label of a feature in a single pass over the template,
/// so substituted values are never re-expanded.
pub fn describe(
    feature: &EarthquakeFeature,
    template: &PopupTemplate,
    time_format: &TimeFormat,
) -> String {
    let template = template.as_str();
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match placeholder(key, feature, time_format) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
