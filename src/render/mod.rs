//! Output of the finished map document for the external map widget

#[cfg(feature = "html")]
pub mod html;
pub mod json;

use serde::{Deserialize, Serialize};

/// Output flavour of a rendered map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            other => Err(crate::Error::Config(format!("unknown output format: {}", other))),
        }
    }
}

/// Renders the document in the requested format
pub fn render(map: &crate::QuakeMap, format: OutputFormat) -> crate::Result<String> {
    match format {
        OutputFormat::Json => json::to_json(map),
        #[cfg(feature = "html")]
        OutputFormat::Html => html::render_page(map),
        #[cfg(not(feature = "html"))]
        OutputFormat::Html => Err(crate::Error::Config(
            "html output requires the `html` feature".to_string(),
        )),
    }
}
