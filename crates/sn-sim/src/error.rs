use sn_core::SnError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("model error: {0}")]
    Model(#[from] SnError),

    #[error("could not build thread pool: {0}")]
    ThreadPool(String),
}

pub type SimResult<T> = Result<T, SimError>;
