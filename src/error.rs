use thiserror::Error;

#[derive(Error, Debug)]
pub enum GearworksError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Infeasible linkage {linkage}: endpoint pivots are {distance:.4} apart but the combined reach is {reach:.4}")]
    InfeasibleLinkage {
        linkage: String,
        distance: f64,
        reach: f64,
    },

    #[error("Unanchored pivot {pivot}: its carrier gear did not survive normalization")]
    UnanchoredPivot { pivot: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GearworksError>;
