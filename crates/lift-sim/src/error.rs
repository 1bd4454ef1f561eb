use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Lift(#[from] LiftError),

    #[error("request script parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("realtime driver has stopped")]
    DriverStopped,

    #[error("realtime driver thread panicked")]
    DriverPanicked,
}

pub type SimResult<T> = Result<T, SimError>;
