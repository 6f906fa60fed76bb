use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixingError {
    #[error("beaker index {index} out of range for {num_beakers} beakers")]
    InvalidBeakerIndex { index: usize, num_beakers: usize },
    #[error("transfer ratio {ratio} outside [0, 100)")]
    InvalidTransferRatio { ratio: usize },
    #[error("action must have 3 components, got {len}")]
    MalformedAction { len: usize },
    #[error("simulation needs at least one beaker")]
    NoBeakers,
    #[error("paint amount must be finite and non-negative, got {amount}")]
    InvalidAmount { amount: f64 },
}
