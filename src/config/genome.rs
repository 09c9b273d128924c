use super::traits::ConfigSection;
use crate::error::GearworksError;
use serde::{Deserialize, Serialize};

/// Genome sourcing parameters. Decoding itself never reads these; they only
/// shape the uniform generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeConfig {
    pub length: usize,
    /// Fixed seed for reproducible populations; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GenomeConfig {
    fn default() -> Self {
        Self {
            length: 100,
            seed: None,
        }
    }
}

impl ConfigSection for GenomeConfig {
    fn section_name() -> &'static str {
        "genome"
    }

    fn validate(&self) -> Result<(), GearworksError> {
        if self.length == 0 {
            return Err(GearworksError::Configuration(
                "Genome length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
