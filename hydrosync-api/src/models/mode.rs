use serde::{Deserialize, Serialize};

/// Relay drive mode for the irrigation output.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RelayMode {
    /// Output forced on (normally open contact held closed).
    NormallyOpen,
    /// Output forced off.
    NormallyClosed,
    /// Output driven by the cycle schedule.
    Automatic,
}

impl RelayMode {
    /// One-button advance order used by the dashboard:
    /// NO -> AUTO -> NC -> NO.
    pub fn next(self) -> Self {
        match self {
            RelayMode::NormallyOpen => RelayMode::Automatic,
            RelayMode::Automatic => RelayMode::NormallyClosed,
            RelayMode::NormallyClosed => RelayMode::NormallyOpen,
        }
    }
}

impl Default for RelayMode {
    fn default() -> Self {
        RelayMode::Automatic
    }
}

impl From<RelayMode> for u8 {
    fn from(mode: RelayMode) -> u8 {
        match mode {
            RelayMode::NormallyOpen => 0,
            RelayMode::NormallyClosed => 1,
            RelayMode::Automatic => 2,
        }
    }
}

impl TryFrom<u8> for RelayMode {
    type Error = InvalidMode;

    fn try_from(value: u8) -> Result<Self, InvalidMode> {
        match value {
            0 => Ok(RelayMode::NormallyOpen),
            1 => Ok(RelayMode::NormallyClosed),
            2 => Ok(RelayMode::Automatic),
            other => Err(InvalidMode(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMode(pub u8);

impl core::fmt::Display for InvalidMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Relay mode out of range: {}", self.0)
    }
}

impl std::error::Error for InvalidMode {}
