//! The gear-and-linkage species: concrete grammar plus build handlers.

use super::gene_consumer::{GeneConsumer, Interrupt};
use super::genome::Genome;
use super::grammar::Grammar;
use crate::config::DecoderConfig;
use crate::mechanism::Mechanism;
use crate::types::Point;
use rayon::prelude::*;
use std::f64::consts::TAU;

/// Grammar expanding `command` into one of five build commands.
const GRAMMAR: Grammar = Grammar::new(&[
    ("command", &["add", "link"]),
    ("command_add", &["gear", "pivot", "pivot_on_gear"]),
    ("command_link", &["gear", "pivot"]),
    ("command_link_gear", &["to_gear"]),
    ("command_link_pivot", &["to_pivot"]),
]);

/// Closed set of terminal build commands the grammar can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BuildCommand {
    AddGear,
    AddPivot,
    AddPivotOnGear,
    LinkGearToGear,
    LinkPivotToPivot,
}

impl BuildCommand {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "command_add_gear" => Some(Self::AddGear),
            "command_add_pivot" => Some(Self::AddPivot),
            "command_add_pivot_on_gear" => Some(Self::AddPivotOnGear),
            "command_link_gear_to_gear" => Some(Self::LinkGearToGear),
            "command_link_pivot_to_pivot" => Some(Self::LinkPivotToPivot),
            _ => None,
        }
    }
}

/// Decodes genomes into gear-and-linkage mechanisms.
///
/// Stateless apart from its configuration: every call to
/// [`decode`](Self::decode) builds a fresh [`Mechanism`], so one species can
/// decode a whole population, sequentially or in parallel.
pub struct GearPivotSpecies {
    config: DecoderConfig,
}

impl GearPivotSpecies {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one genome. Runs commands until the cursor is exhausted;
    /// commands that select from an empty pool are abandoned without any
    /// partial mutation. Deterministic: the same genome and configuration
    /// always produce an identical mechanism.
    pub fn decode(&self, genome: &[u32]) -> Mechanism {
        let mut genes = GeneConsumer::new(genome, self.config.max_value);
        let mut mechanism = Mechanism::new();
        let mut commands = 0usize;
        let mut abandoned = 0usize;

        loop {
            match self.execute(&mut mechanism, &mut genes) {
                Ok(()) => commands += 1,
                Err(Interrupt::NoChoices) => {
                    abandoned += 1;
                    log::debug!(
                        "abandoned command at gene {}: selection over an empty pool",
                        genes.position()
                    );
                }
                Err(Interrupt::Exhausted) => break,
            }
        }

        log::debug!(
            "decoded {} genes into {} nodes ({} commands, {} abandoned)",
            genome.len(),
            mechanism.len(),
            commands,
            abandoned
        );
        mechanism
    }

    /// Decode a batch of genomes, one independent mechanism per genome,
    /// preserving input order. Decodes fan out across the rayon pool; each
    /// individual decode stays sequential and deterministic.
    pub fn decode_population(&self, genomes: &[Genome]) -> Vec<Mechanism> {
        genomes.par_iter().map(|genome| self.decode(genome)).collect()
    }

    /// Derive one command from the gene stream and run its handler.
    fn execute(&self, mechanism: &mut Mechanism, genes: &mut GeneConsumer) -> Result<(), Interrupt> {
        let terminal = GRAMMAR.derive("command", genes)?;
        let command = match BuildCommand::from_symbol(&terminal) {
            Some(command) => command,
            None => unreachable!("grammar produced terminal {terminal} with no handler"),
        };
        match command {
            BuildCommand::AddGear => self.add_gear(mechanism, genes),
            BuildCommand::AddPivot => self.add_pivot(mechanism, genes),
            BuildCommand::AddPivotOnGear => self.add_pivot_on_gear(mechanism, genes),
            BuildCommand::LinkGearToGear => self.link_gear_to_gear(mechanism, genes),
            BuildCommand::LinkPivotToPivot => self.link_pivot_to_pivot(mechanism, genes),
        }
    }

    fn add_gear(&self, mechanism: &mut Mechanism, genes: &mut GeneConsumer) -> Result<(), Interrupt> {
        let teeth = genes.int_range(self.config.min_gear_teeth, self.config.max_gear_teeth)?;
        mechanism.add_gear(teeth, self.config.gear_module);
        Ok(())
    }

    fn add_pivot(&self, mechanism: &mut Mechanism, genes: &mut GeneConsumer) -> Result<(), Interrupt> {
        let x = genes.float_range(0.0, 1.0)?;
        let y = genes.float_range(0.0, 1.0)?;
        mechanism.add_free_pivot(Point::new(x, y));
        Ok(())
    }

    fn add_pivot_on_gear(
        &self,
        mechanism: &mut Mechanism,
        genes: &mut GeneConsumer,
    ) -> Result<(), Interrupt> {
        let gear = *genes.select(mechanism.gears())?;
        let angle = genes.float_range(0.0, TAU)?;
        let radius = genes.float_range(0.0, 1.0)?;
        mechanism.add_gear_pivot(gear, angle, radius);
        Ok(())
    }

    fn link_gear_to_gear(
        &self,
        mechanism: &mut Mechanism,
        genes: &mut GeneConsumer,
    ) -> Result<(), Interrupt> {
        let gear_a = *genes.select(mechanism.gears())?;
        let gear_b = *genes.select(mechanism.gears())?;
        let angle = genes.float_range(0.0, TAU)?;
        mechanism.link_gears(gear_a, gear_b, angle);
        Ok(())
    }

    fn link_pivot_to_pivot(
        &self,
        mechanism: &mut Mechanism,
        genes: &mut GeneConsumer,
    ) -> Result<(), Interrupt> {
        let pivot_a = *genes.select(mechanism.pivots())?;
        let pivot_b = *genes.select(mechanism.pivots())?;
        if pivot_a == pivot_b {
            return Ok(());
        }
        let length = genes.int_range(
            self.config.min_linkage_length,
            self.config.max_linkage_length,
        )? as f64;
        mechanism.link_pivots(pivot_a, pivot_b, length);
        Ok(())
    }
}
