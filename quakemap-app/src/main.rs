use anyhow::Context;
use clap::Parser;
use quakemap::{
    data::feed::{FeedSource, HttpFeed, StaticFeed},
    encoding::{depth::BoundaryPolicy, popup::PopupTemplate},
    ingest,
    render::{self, OutputFormat},
    MapBuilder, QuakeMapConfig,
};
use std::path::PathBuf;

/// Fetches the earthquake feed once and writes a map document
#[derive(Parser)]
#[command(name = "quakemap-app", version)]
struct Cli {
    /// JSON config file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GeoJSON feed URL.
    #[arg(long)]
    feed_url: Option<String>,

    /// Read the feed from a local GeoJSON file instead of the network.
    #[arg(long, conflicts_with = "feed_url")]
    input: Option<PathBuf>,

    /// Mapbox access token for the Street/Outdoors/Satellite layers.
    #[arg(long, env = "MAPBOX_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Depth threshold policy (strict, inclusive).
    #[arg(long)]
    policy: Option<BoundaryPolicy>,

    /// Popup content (minimal, extended).
    #[arg(long, conflicts_with = "template")]
    popup: Option<PopupTemplate>,

    /// Custom popup template, e.g. "{place} M{mag}".
    #[arg(long)]
    template: Option<String>,

    /// Output format (html, json).
    #[arg(long, default_value = "html")]
    format: OutputFormat,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<QuakeMapConfig> {
        let mut config = match &self.config {
            Some(path) => QuakeMapConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => QuakeMapConfig::default(),
        };

        if let Some(url) = &self.feed_url {
            config.feed_url = url.clone();
        }
        if let Some(token) = &self.access_token {
            config.access_token = Some(token.clone());
        }
        if let Some(policy) = self.policy {
            config.boundary_policy = policy;
        }
        if let Some(popup) = &self.popup {
            config.popup = popup.clone();
        }
        if let Some(template) = &self.template {
            config.popup = PopupTemplate::Custom(template.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let feed: Box<dyn FeedSource> = match &cli.input {
        Some(path) => Box::new(
            StaticFeed::from_file(path).with_context(|| format!("reading {}", path.display()))?,
        ),
        None => Box::new(HttpFeed::new(config.feed_url.clone())?),
    };

    // One fetch; on failure nothing is rendered.
    let collection = feed
        .fetch()
        .await
        .with_context(|| format!("fetching {}", feed.describe()))?;

    let report = ingest(&collection);
    if !report.is_complete() {
        log::warn!(
            "{} of {} features skipped as malformed",
            report.skipped.len(),
            collection.len()
        );
    }

    let map = MapBuilder::from_config(config).build(&report.features)?;
    let rendered = render::render(&map, cli.format)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {} markers to {}", map.marker_count(), path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
