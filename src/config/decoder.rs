use super::traits::ConfigSection;
use crate::error::GearworksError;
use serde::{Deserialize, Serialize};

/// Numeric-extraction bounds for the genome decoder. Each key affects only
/// the corresponding handler: tooth counts, linkage lengths, mount geometry
/// scaling, and the gene value range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoderConfig {
    pub max_gear_teeth: u32,
    pub min_gear_teeth: u32,
    pub max_linkage_length: u32,
    pub min_linkage_length: u32,
    /// Largest gene value; continuous rescaling divides by this.
    pub max_value: u32,
    /// Gear module (tooth size), shared by every gear in a run.
    pub gear_module: f64,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_gear_teeth: 60,
            min_gear_teeth: 10,
            max_linkage_length: 10,
            min_linkage_length: 5,
            max_value: 0xFFFF_FFFF,
            gear_module: 2.0,
        }
    }
}

impl ConfigSection for DecoderConfig {
    fn section_name() -> &'static str {
        "decoder"
    }

    fn validate(&self) -> Result<(), GearworksError> {
        if self.min_gear_teeth == 0 {
            return Err(GearworksError::Configuration(
                "Minimum gear teeth must be positive".to_string(),
            ));
        }
        if self.min_gear_teeth >= self.max_gear_teeth {
            return Err(GearworksError::Configuration(
                "Gear teeth bounds must satisfy min < max".to_string(),
            ));
        }
        if self.min_linkage_length >= self.max_linkage_length {
            return Err(GearworksError::Configuration(
                "Linkage length bounds must satisfy min < max".to_string(),
            ));
        }
        if self.max_value == 0 {
            return Err(GearworksError::Configuration(
                "Maximum gene value must be positive".to_string(),
            ));
        }
        if self.gear_module <= 0.0 {
            return Err(GearworksError::Configuration(
                "Gear module must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DecoderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = DecoderConfig {
            min_gear_teeth: 60,
            max_gear_teeth: 10,
            ..DecoderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_max_value_rejected() {
        let config = DecoderConfig {
            max_value: 0,
            ..DecoderConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
