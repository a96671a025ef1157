use thiserror::Error;
use wn_core::CoreError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("network core configuration error: {0}")]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
