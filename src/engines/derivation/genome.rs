use crate::config::GenomeConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A genome is a flat sequence of bounded integers that deterministically
/// maps to a mechanism. The sequence carries no structure of its own; every
/// structural and parametric decision comes from the decoder consuming it
/// left to right.
///
/// Linear genomes keep evolutionary operators trivial (slicing for
/// crossover, per-gene mutation) and every genome decodes to *some*
/// mechanism — there are no invalid genomes, only uninteresting ones.
pub type Genome = Vec<u32>;

/// Uniform genome generator. Seeded sources reproduce the same population
/// gene for gene; unseeded sources draw from entropy.
pub struct GenomeSource {
    rng: StdRng,
    length: usize,
    max_value: u32,
}

impl GenomeSource {
    pub fn new(config: &GenomeConfig, max_value: u32) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            length: config.length,
            max_value,
        }
    }

    pub fn next_genome(&mut self) -> Genome {
        (0..self.length)
            .map(|_| self.rng.gen_range(0..=self.max_value))
            .collect()
    }

    pub fn population(&mut self, count: usize) -> Vec<Genome> {
        (0..count).map(|_| self.next_genome()).collect()
    }
}
