//! Genome-to-mechanism derivation: gene cursor, choice grammar, and the
//! concrete species that turns decoded commands into graph mutations.

pub mod gene_consumer;
pub mod genome;
pub mod grammar;
pub mod species;

pub use gene_consumer::{GeneConsumer, Interrupt};
pub use genome::{Genome, GenomeSource};
pub use grammar::Grammar;
pub use species::GearPivotSpecies;
