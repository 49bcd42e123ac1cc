use crate::{core::map::QuakeMap, Result};

/// Pretty-printed JSON form of the document
pub fn to_json(map: &QuakeMap) -> Result<String> {
    Ok(serde_json::to_string_pretty(map)?)
}
