//! Decode a random genome end to end and print the surviving mechanism.
//!
//! Usage: `cargo run --example decode_random [genome_length] [seed]`

use gearworks::config::{DecoderConfig, GenomeConfig};
use gearworks::engines::derivation::{GearPivotSpecies, GenomeSource};
use gearworks::engines::normalization::normalize;
use gearworks::engines::placement::{place, Placement};
use gearworks::types::Point;
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let length = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(500);
    let seed = args.get(2).and_then(|s| s.parse().ok());

    let decoder_config = DecoderConfig::default();
    let genome_config = GenomeConfig { length, seed };

    let species = GearPivotSpecies::new(decoder_config.clone());
    let mut source = GenomeSource::new(&genome_config, decoder_config.max_value);
    let genome = source.next_genome();

    let mut mechanism = species.decode(&genome);
    println!(
        "decoded: {} gears, {} pivots, {} linkages",
        mechanism.gears().len(),
        mechanism.pivots().len(),
        mechanism.linkages().len()
    );

    let removed = normalize(&mut mechanism);
    println!("normalized: removed {} disconnected nodes", removed.len());

    for id in mechanism.graph().nodes() {
        let neighbors: Vec<&str> = mechanism
            .graph()
            .neighbors(id)
            .iter()
            .map(|(n, _)| mechanism.name(*n))
            .collect();
        println!("  {} -> {}", mechanism.name(id), neighbors.join(", "));
    }

    match place(&mechanism, Point::ZERO) {
        Ok(layout) => {
            for (id, placement) in layout.iter() {
                match placement {
                    Placement::Gear(gear) => {
                        println!("  {} at {:.3}", mechanism.name(id), gear.center)
                    }
                    Placement::Pivot(pivot) => {
                        println!("  {} at {:.3}", mechanism.name(id), pivot.position)
                    }
                    Placement::Linkage(linkage) => println!(
                        "  {} from {:.3} to {:.3}",
                        mechanism.name(id),
                        linkage.position_a,
                        linkage.position_b
                    ),
                }
            }
        }
        Err(err) => println!("mechanism cannot be realized: {err}"),
    }
}
