use line_core::{CoreError, StopName, VehicleName};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LineError {
    #[error("vehicle {0} has not started its route")]
    NotStarted(VehicleName),

    #[error("vehicle {0} has already finished its route")]
    RouteFinished(VehicleName),

    #[error("vehicle {0} has an empty route")]
    EmptyRoute(VehicleName),

    #[error("stop {0} not found")]
    UnknownStop(StopName),

    #[error("vehicle {0} not found")]
    UnknownVehicle(VehicleName),

    #[error("rider error: {0}")]
    Rider(#[from] CoreError),

    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LineResult<T> = Result<T, LineError>;
