use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

use hydrosync_api::models::{
    Cycle, CycleConfig, FAN_DELAY_MAX, FAN_DELAY_MIN, MAX_CYCLES, RelayMode,
};
use hydrosync_api::restful::TimePayload;

#[derive(Debug, thiserror::Error)]
pub enum CycleRejection {
    #[error("Cycle table is full")]
    TableFull,

    #[error("No cycle with the given id")]
    UnknownId,

    #[error("Fan delay must be between {FAN_DELAY_MIN} and {FAN_DELAY_MAX} minutes")]
    BadFanDelay,
}

/// Simulated controller hardware: a battery-backed clock held as a
/// shift against the host clock, plus the bounded cycle table.
pub struct DeviceState {
    clock_shift: Duration,
    time_zone: i32,
    cycles: Vec<Cycle>,
    mode: RelayMode,
}

impl DeviceState {
    pub fn new(time_zone: i32) -> Self {
        Self {
            clock_shift: Duration::ZERO,
            time_zone,
            cycles: Vec::new(),
            mode: RelayMode::default(),
        }
    }

    /// Device clock in UTC, truncated to whole seconds like an RTC.
    pub fn now_utc(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc() + self.clock_shift;
        now.replace_nanosecond(0).unwrap_or(now)
    }

    pub fn time_zone(&self) -> i32 {
        self.time_zone
    }

    /// Moves the device clock to `target_utc` and stores the offset.
    pub fn set_clock(&mut self, target_utc: PrimitiveDateTime, time_zone: i32) {
        self.clock_shift = target_utc.assume_utc() - OffsetDateTime::now_utc();
        self.time_zone = time_zone;
    }

    /// Wire body for the `/time` endpoints.
    pub fn time_payload(&self) -> Result<TimePayload, time::error::Format> {
        let format = time::macros::format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        );

        Ok(TimePayload {
            time: self.now_utc().format(&format)?,
            time_zone: self.time_zone,
        })
    }

    pub fn mode(&self) -> RelayMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RelayMode) {
        self.mode = mode;
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn insert_cycle(&mut self, config: CycleConfig) -> Result<Cycle, CycleRejection> {
        if self.cycles.len() >= MAX_CYCLES {
            return Err(CycleRejection::TableFull);
        }
        Self::check_delay(&config)?;

        let cycle = Cycle {
            id: Uuid::new_v4().to_string(),
            config,
        };
        self.cycles.push(cycle.clone());

        Ok(cycle)
    }

    pub fn replace_cycle(&mut self, cycle: Cycle) -> Result<Cycle, CycleRejection> {
        Self::check_delay(&cycle.config)?;

        let slot = self
            .cycles
            .iter_mut()
            .find(|stored| stored.id == cycle.id)
            .ok_or(CycleRejection::UnknownId)?;
        *slot = cycle.clone();

        Ok(cycle)
    }

    pub fn remove_cycle(&mut self, id: &str) -> Result<(), CycleRejection> {
        let before = self.cycles.len();
        self.cycles.retain(|stored| stored.id != id);

        if self.cycles.len() == before {
            Err(CycleRejection::UnknownId)
        } else {
            Ok(())
        }
    }

    fn check_delay(config: &CycleConfig) -> Result<(), CycleRejection> {
        if config.fan_enable && !(FAN_DELAY_MIN..=FAN_DELAY_MAX).contains(&config.fan_delay) {
            return Err(CycleRejection::BadFanDelay);
        }
        Ok(())
    }
}
