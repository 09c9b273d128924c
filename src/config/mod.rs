pub mod decoder;
pub mod genome;
pub mod manager;
pub mod traits;

pub use decoder::DecoderConfig;
pub use genome::GenomeConfig;
pub use manager::{AppConfig, ConfigManager};
pub use traits::ConfigSection;
