use serde::{Deserialize, Serialize};
use time::Time;
use time::macros::time;

use super::flags::{flag, flag_array};

/// Hard bound on the controller's cycle table.
pub const MAX_CYCLES: usize = 5;

/// Shortest selectable fan delay in minutes.
pub const FAN_DELAY_MIN: u8 = 5;

/// Longest selectable fan delay in minutes.
pub const FAN_DELAY_MAX: u8 = 60;

time::serde::format_description!(clock_time, Time, "[hour]:[minute]");

/// A watering window with day-of-week repetition and an optional
/// delayed fan follow-up.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Whether the window is armed.
    #[serde(with = "flag")]
    pub status: bool,
    /// Window start, device-local wall clock.
    #[serde(with = "clock_time")]
    pub start: Time,
    /// Window end.
    #[serde(with = "clock_time")]
    pub end: Time,
    /// Repetition flags, Sunday = index 0.
    #[serde(with = "flag_array")]
    pub day: [bool; 7],
    /// Whether the fan follow-up is armed.
    #[serde(with = "flag")]
    pub fan_enable: bool,
    /// Fan start delay in minutes.
    pub fan_delay: u8,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            status: true,
            start: time!(0:00),
            end: time!(0:30),
            day: [true; 7],
            fan_enable: true,
            fan_delay: 30,
        }
    }
}

/// A stored cycle, identified by its backend-assigned id.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Backend-assigned identifier.
    pub id: String,
    /// Cycle contents.
    #[serde(flatten)]
    pub config: CycleConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_creation_dialog_seed() {
        let draft = CycleConfig::default();
        assert!(draft.status);
        assert_eq!(draft.start, time!(0:00));
        assert_eq!(draft.end, time!(0:30));
        assert_eq!(draft.day, [true; 7]);
        assert!(draft.fan_enable);
        assert_eq!(draft.fan_delay, 30);
    }

    #[test]
    fn serializes_with_integer_flags_and_hhmm_times() {
        let cycle = Cycle {
            id: String::from("a1"),
            config: CycleConfig {
                status: true,
                start: time!(6:15),
                end: time!(7:00),
                day: [false, true, true, true, true, true, false],
                fan_enable: false,
                fan_delay: 10,
            },
        };

        let value = serde_json::to_value(&cycle).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "a1",
                "status": 1,
                "start": "06:15",
                "end": "07:00",
                "day": [0, 1, 1, 1, 1, 1, 0],
                "fan_enable": 0,
                "fan_delay": 10,
            })
        );
    }

    #[test]
    fn deserializes_integer_and_boolean_flags() {
        let from_ints: CycleConfig = serde_json::from_value(serde_json::json!({
            "status": 0,
            "start": "23:45",
            "end": "00:15",
            "day": [1, 0, 0, 0, 0, 0, 1],
            "fan_enable": 1,
            "fan_delay": 5,
        }))
        .unwrap();
        assert!(!from_ints.status);
        assert_eq!(from_ints.day, [true, false, false, false, false, false, true]);

        let from_bools: CycleConfig = serde_json::from_value(serde_json::json!({
            "status": true,
            "start": "08:00",
            "end": "08:30",
            "day": [true, true, true, true, true, true, true],
            "fan_enable": false,
            "fan_delay": 60,
        }))
        .unwrap();
        assert!(from_bools.status);
        assert!(!from_bools.fan_enable);
    }

    #[test]
    fn rejects_out_of_range_flags_and_short_day_arrays() {
        let bad_flag = serde_json::from_value::<CycleConfig>(serde_json::json!({
            "status": 2,
            "start": "00:00",
            "end": "00:30",
            "day": [1, 1, 1, 1, 1, 1, 1],
            "fan_enable": 1,
            "fan_delay": 30,
        }));
        assert!(bad_flag.is_err());

        let short_days = serde_json::from_value::<CycleConfig>(serde_json::json!({
            "status": 1,
            "start": "00:00",
            "end": "00:30",
            "day": [1, 1, 1],
            "fan_enable": 1,
            "fan_delay": 30,
        }));
        assert!(short_days.is_err());
    }

    #[test]
    fn round_trips_through_the_wire_encoding() {
        let cycle = Cycle {
            id: String::from("b2"),
            config: CycleConfig::default(),
        };
        let json = serde_json::to_string(&cycle).unwrap();
        let back: Cycle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cycle);
    }
}
