use serde::{Deserialize, Serialize};

use crate::models::{Cycle, RelayMode};

/// Full controller configuration, from `GET /config`.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPayload {
    /// Stored cycles, at most [`crate::models::MAX_CYCLES`].
    pub cycles: Vec<Cycle>,
    /// Active relay mode.
    pub mode: RelayMode,
}

/// Relay mode change, request and response body of `POST /mode`.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModePayload {
    pub mode: RelayMode,
}
