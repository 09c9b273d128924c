//! # gearworks
//!
//! Compiles integer genomes into planar gear-and-linkage mechanisms.
//!
//! A genome is a flat `Vec<u32>` with no structure of its own; a
//! grammar-driven decoder consumes it left to right, turning genes into
//! build commands (add a gear, mount a pivot, mesh two gears, link two
//! pivots through a bar). The commands accumulate into a bidirected graph
//! of typed parts, normalization prunes everything the motor gear cannot
//! drive, and the placement pass assigns planar coordinates — gear-train
//! propagation plus circle-circle coupler solving.
//!
//! Downstream consumers (a physics embedder, a graph visualizer) only need
//! the finished [`mechanism::Mechanism`] and
//! [`engines::placement::MechanismLayout`]: every node has a stable name,
//! the graph is iterable, and edges expose their mesh/mount/attachment
//! payloads.
//!
//! ```
//! use gearworks::config::{DecoderConfig, GenomeConfig};
//! use gearworks::engines::derivation::{GearPivotSpecies, GenomeSource};
//! use gearworks::engines::normalization::normalize;
//! use gearworks::engines::placement::place;
//! use gearworks::types::Point;
//!
//! let species = GearPivotSpecies::new(DecoderConfig::default());
//! let genome_config = GenomeConfig { length: 200, seed: Some(42) };
//! let genome = GenomeSource::new(&genome_config, species.config().max_value).next_genome();
//!
//! let mut mechanism = species.decode(&genome);
//! normalize(&mut mechanism);
//! match place(&mechanism, Point::ZERO) {
//!     Ok(layout) => assert_eq!(layout.len(), mechanism.len()),
//!     Err(err) => println!("discarding genome: {err}"),
//! }
//! ```

pub mod config;
pub mod engines;
pub mod error;
pub mod graph;
pub mod mechanism;
pub mod types;

pub use error::{GearworksError, Result};
