use crate::transport::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] ApiError),

    #[error("Device clock is unavailable")]
    ClockUnavailable,

    #[error("No catalog offset selected")]
    NoZoneSelected,

    #[error("Cycle table is full")]
    CycleLimit,
}
