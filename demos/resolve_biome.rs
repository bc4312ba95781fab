//! Resolve a biome color the way a host event handler would.
//!
//! Run: RUST_LOG=biome_tint=trace cargo run --example resolve_biome

#![allow(clippy::print_stdout)]

use std::collections::HashMap;

use biome_tint::prelude::*;
use tracing_subscriber::EnvFilter;

/// A host-side tile as a world query would return it.
struct Tile {
    name: &'static str,
    hidden: Option<&'static str>,
    removed: bool,
}

fn main() -> biome_tint::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let map_colors: HashMap<&str, Rgba> = HashMap::from([
        ("grass-1", Rgba::rgb(55.0, 83.0, 14.0)),
        ("dirt-3", Rgba::rgb(117.0, 88.0, 48.0)),
        ("sand-1", Rgba::rgb(139.0, 104.0, 59.0)),
        ("concrete", Rgba::rgb(63.0, 61.0, 59.0)),
        ("water", Rgba::rgb(51.0, 83.0, 95.0)),
    ]);

    // Tiles around the placed entity; concrete covers dirt in two places
    let tiles = [
        Tile {
            name: "grass-1",
            hidden: None,
            removed: false,
        },
        Tile {
            name: "concrete",
            hidden: Some("dirt-3"),
            removed: false,
        },
        Tile {
            name: "concrete",
            hidden: Some("dirt-3"),
            removed: false,
        },
        Tile {
            name: "sand-1",
            hidden: None,
            removed: false,
        },
        Tile {
            name: "grass-1",
            hidden: None,
            removed: true,
        },
    ];

    let samples: Vec<_> = tiles
        .iter()
        .map(|tile| CategorySample {
            hidden: tile.hidden,
            valid: !tile.removed,
            ..CategorySample::new(tile.name)
        })
        .collect();

    let resolver = ResolverConfig::load_or_default("biome-tint.yaml").into_resolver()?;
    let color = resolver.resolve(&samples, &map_colors, || "water")?;

    let [r, g, b] = color.to_signals();
    println!("signal-R = {r}");
    println!("signal-G = {g}");
    println!("signal-B = {b}");

    // Nothing valid nearby: the tile under the entity decides
    let color = resolver.resolve(Vec::<CategorySample<&str>>::new(), &map_colors, || "water")?;
    println!("fallback = {:?}", color.to_signals());

    Ok(())
}
