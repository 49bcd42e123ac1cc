use quakemap::{
    encoding::depth::BoundaryPolicy, ingest, render::json::to_json, FeatureCollection,
    MapBuilder, QuakeMapConfig,
};

const FEED: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "id": "demo1",
         "properties": {"place": "10km N of Testville", "mag": 4.5, "time": 1700000000000},
         "geometry": {"type": "Point", "coordinates": [-120.0, 37.0, 15]}},
        {"type": "Feature", "id": "demo2",
         "properties": {"place": "Exactly on a boundary", "mag": 3.1, "time": 1700003600000},
         "geometry": {"type": "Point", "coordinates": [-118.2, 34.0, 20]}}
    ]
}"#;

/// Encodes an inline feed under both boundary policies without touching the network
fn main() -> quakemap::Result<()> {
    env_logger::init();

    let collection = FeatureCollection::from_str(FEED)?;
    let report = ingest(&collection);

    for policy in [BoundaryPolicy::GreaterOrEqual, BoundaryPolicy::StrictGreater] {
        let config = QuakeMapConfig {
            boundary_policy: policy,
            ..QuakeMapConfig::default()
        };
        let map = MapBuilder::from_config(config).build(&report.features)?;

        println!("== {:?}", policy);
        if let Some(overlay) = map.overlay() {
            for marker in &overlay.markers {
                println!(
                    "{:<6} radius {:>5.1}  fill {}",
                    marker.id, marker.style.radius, marker.style.fill_color
                );
            }
        }
    }

    let map = MapBuilder::new().build(&report.features)?;
    println!("{}", to_json(&map)?);
    Ok(())
}
