//! Builds a small sample map, routes its supply chains and prints every
//! report.
//!
//! Usage:
//! ```text
//! cargo run --example netgen
//! RUST_LOG=netgen=trace cargo run --example netgen
//! ```

use std::error::Error;
use std::io::{self, Write};

use netgen::cargo::CargoType;
use netgen::map::{GameMap, Industry, Town};
use netgen::math::Point2;
use netgen::report;

const INDUSTRIES: [(f64, f64, CargoType); 16] = [
    (12.0, 8.0, CargoType::Stone),
    (88.0, 14.0, CargoType::CrudeOil),
    (7.0, 61.0, CargoType::IronOre),
    (23.0, 93.0, CargoType::Coal),
    (64.0, 95.0, CargoType::Logs),
    (95.0, 71.0, CargoType::Grain),
    (31.0, 27.0, CargoType::ConstructionMaterials),
    (73.0, 33.0, CargoType::Oil),
    (22.0, 72.0, CargoType::Steel),
    (58.0, 78.0, CargoType::Planks),
    (81.0, 58.0, CargoType::Food),
    (67.0, 18.0, CargoType::Fuel),
    (52.0, 41.0, CargoType::Plastic),
    (44.0, 86.0, CargoType::Tools),
    (36.0, 52.0, CargoType::Goods),
    (48.0, 63.0, CargoType::Machines),
];

fn sample_map() -> GameMap {
    let mut map = GameMap::new();
    for (x, y, output) in INDUSTRIES {
        map.add_industry(Industry::new(Point2::new(x, y), output));
    }
    map.add_town(Town::new(
        Point2::new(18.0, 42.0),
        "Ironbridge",
        [CargoType::Goods, CargoType::ConstructionMaterials],
    ));
    map.add_town(Town::new(
        Point2::new(62.0, 52.0),
        "Lowmarsh",
        [CargoType::Food, CargoType::Fuel],
    ));
    map.add_town(Town::new(
        Point2::new(83.0, 88.0),
        "Kettering Cross",
        [CargoType::Machines, CargoType::Tools],
    ));
    map.add_town(Town::new(
        Point2::new(46.0, 9.0),
        "Southwick",
        [CargoType::Food, CargoType::Goods],
    ));
    // A river running in from the east edge.
    map.add_impassable_line(vec![
        Point2::new(101.0, 45.0),
        Point2::new(88.0, 44.0),
        Point2::new(77.0, 47.0),
    ]);
    map.set_uniform_town_cargo_requirement(40.0);
    map
}

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for netgen.
    // Override with RUST_LOG env var (e.g. RUST_LOG=netgen=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("netgen=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut map = sample_map();
    map.triangulate_all_locations()?;
    map.build_network_graph()?;
    let outcome = map.make_all_connections()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(network) = map.network() {
        report::write_edges(&mut out, network)?;
    }
    writeln!(out)?;
    report::write_industries(&mut out, map.industries(), map.rules())?;
    writeln!(out)?;
    report::write_towns(&mut out, map.towns(), map.industries().len())?;
    writeln!(out)?;
    report::write_paths(&mut out, map.paths())?;
    writeln!(out)?;
    if let Some(stats) = map.efficiency() {
        report::write_efficiency(&mut out, &stats)?;
    }
    writeln!(out, "status: {:?} after {} steps", outcome.status, outcome.steps)?;
    Ok(())
}
