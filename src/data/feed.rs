//! Feed acquisition: one request, one FeatureCollection.
//!
//! There is no retry and no timeout beyond what the HTTP client applies; a
//! failed fetch is returned to the caller and nothing gets rendered.

use crate::{
    core::constants::{DEFAULT_FEED_URL, USGS_SUMMARY_BASE},
    data::geojson::FeatureCollection,
    Error, Result,
};
use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Anything that can produce the earthquake feature collection.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable origin of the data, used in logs
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<FeatureCollection>;
}

/// Time window of a USGS summary feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedPeriod {
    Hour,
    Day,
    Week,
    Month,
}

/// Magnitude cut of a USGS summary feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedMagnitude {
    All,
    M1_0,
    M2_5,
    M4_5,
    Significant,
}

impl FeedMagnitude {
    fn slug(&self) -> &'static str {
        match self {
            FeedMagnitude::All => "all",
            FeedMagnitude::M1_0 => "1.0",
            FeedMagnitude::M2_5 => "2.5",
            FeedMagnitude::M4_5 => "4.5",
            FeedMagnitude::Significant => "significant",
        }
    }
}

impl FeedPeriod {
    fn slug(&self) -> &'static str {
        match self {
            FeedPeriod::Hour => "hour",
            FeedPeriod::Day => "day",
            FeedPeriod::Week => "week",
            FeedPeriod::Month => "month",
        }
    }
}

/// Canonical URL of a USGS summary feed
pub fn usgs_feed_url(magnitude: FeedMagnitude, period: FeedPeriod) -> String {
    format!(
        "{}/{}_{}.geojson",
        USGS_SUMMARY_BASE,
        magnitude.slug(),
        period.slug()
    )
}

/// Fetches the feed over HTTP
pub struct HttpFeed {
    url: String,
    client: reqwest::Client,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn usgs(magnitude: FeedMagnitude, period: FeedPeriod) -> Result<Self> {
        Self::new(usgs_feed_url(magnitude, period))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<FeatureCollection> {
        debug!("requesting feed {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Feed {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let collection = FeatureCollection::from_slice(&bytes)?;
        info!(
            "fetched {} features ({} bytes) from {}",
            collection.len(),
            bytes.len(),
            self.url
        );
        Ok(collection)
    }
}

impl Default for HttpFeed {
    /// Client construction only fails when the TLS backend cannot start,
    /// in which case reqwest's plain default client is used.
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL).unwrap_or_else(|_| Self {
            url: DEFAULT_FEED_URL.to_string(),
            client: reqwest::Client::new(),
        })
    }
}

/// Serves a GeoJSON document that is already in memory
pub struct StaticFeed {
    label: String,
    body: String,
}

impl StaticFeed {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }

    /// Reads the whole document from disk up front
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)?;
        Ok(Self::new(path.display().to_string(), body))
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    fn describe(&self) -> String {
        self.label.clone()
    }

    async fn fetch(&self) -> Result<FeatureCollection> {
        let collection = FeatureCollection::from_str(&self.body)?;
        info!("loaded {} features from {}", collection.len(), self.label);
        Ok(collection)
    }
}
