use serde::{Deserialize, Serialize};

/// Current device clock, as reported by `GET /time` and echoed by
/// `POST /time`.
///
/// The timestamp stays a string here: a device with a dead RTC answers
/// with garbage rather than an HTTP error, and that is a soft condition
/// the session resolves, not a deserialization failure.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePayload {
    /// RFC 3339 timestamp in UTC.
    pub time: String,
    /// Signed UTC offset in minutes.
    #[serde(rename = "timeZone")]
    pub time_zone: i32,
}

/// New clock value for `POST /time`, components in UTC.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTimeRequest {
    pub year: i32,
    /// Month number, January = 1.
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Signed UTC offset in minutes to store alongside the clock.
    #[serde(rename = "timeZone")]
    pub time_zone: i32,
}
