use std::sync::{Arc, Mutex};
use std::time::Duration;

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};
use tokio::task::JoinHandle;

use hydrosync_api::restful::{SetTimeRequest, TimePayload};
use hydrosync_api::time::{
    ClockField, ClockFields, UTC_OFFSET_CATALOG, catalog_index, catalog_minutes,
};

use crate::error::ClientError;
use crate::transport::DeviceApi;

/// Clock-editing progress, a closed set of states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    /// No load attempted yet.
    NotLoaded,
    /// The last round-trip failed to produce a usable instant.
    Unavailable,
    /// Editable wall-clock tuple in the selected offset's frame.
    Ready(ClockFields),
}

/// Display-only clock advanced once a second by an owned background
/// task. Never sent to the device, never touched by field edits.
#[derive(Debug, Clone)]
pub struct LivePreview {
    shared: Arc<Mutex<ClockFields>>,
}

impl LivePreview {
    pub fn now(&self) -> ClockFields {
        *self.shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

struct TickerGuard {
    task: JoinHandle<()>,
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Stateful editor for the device's real-time clock.
///
/// Field edits act on the wall-clock tuple displayed in the selected
/// offset's frame; conversion to UTC happens once, on save. Changing
/// the selected offset reinterprets the tuple without recomputing it.
pub struct ClockSession<A> {
    api: A,
    state: ClockState,
    zone_index: Option<usize>,
    live: Option<LivePreview>,
    ticker: Option<TickerGuard>,
    loading: bool,
}

impl<A: DeviceApi> ClockSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ClockState::NotLoaded,
            zone_index: host_zone_index(),
            live: None,
            ticker: None,
            loading: false,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Selected catalog row, `None` when the offset is unknown.
    pub fn zone_index(&self) -> Option<usize> {
        self.zone_index
    }

    /// Whether a load or save round-trip is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The editable tuple, when one is loaded.
    pub fn fields(&self) -> Option<ClockFields> {
        match self.state {
            ClockState::Ready(fields) => Some(fields),
            _ => None,
        }
    }

    /// Current value of the ticking display clock.
    pub fn live_preview(&self) -> Option<ClockFields> {
        self.live.as_ref().map(LivePreview::now)
    }

    /// Fetches the device clock and seeds the editable tuple and the
    /// live preview from it.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.loading = true;
        let result = self.api.fetch_time().await;
        self.loading = false;

        match result {
            Ok(payload) => {
                self.apply_payload(payload);
                Ok(())
            }
            Err(err) if err.is_decode() => {
                self.enter_unavailable();
                Ok(())
            }
            Err(err) => {
                self.enter_unavailable();
                Err(err.into())
            }
        }
    }

    /// Replaces one field of the editable tuple. Negative values and
    /// edits without a loaded tuple are ignored.
    pub fn edit_field(&mut self, field: ClockField, value: i64) {
        if let ClockState::Ready(fields) = self.state {
            self.state = ClockState::Ready(fields.with_field(field, value));
        }
    }

    /// Selects a catalog row. The displayed fields are kept as-is and
    /// reinterpreted as being in the new offset.
    pub fn select_zone(&mut self, index: usize) {
        if index < UTC_OFFSET_CATALOG.len() {
            self.zone_index = Some(index);
        }
    }

    /// Re-resolves the selected row from the host's own UTC offset.
    pub fn select_zone_auto(&mut self) {
        self.zone_index = host_zone_index();
    }

    /// Converts the edited tuple to UTC with the selected offset and
    /// stores it on the device. The session re-seeds itself from the
    /// device's canonical answer, never from the submitted draft.
    pub async fn save(&mut self) -> Result<(), ClientError> {
        let ClockState::Ready(fields) = self.state else {
            return Err(ClientError::ClockUnavailable);
        };
        let Some(index) = self.zone_index else {
            return Err(ClientError::NoZoneSelected);
        };
        let offset = catalog_minutes(index).ok_or(ClientError::NoZoneSelected)?;
        let utc = fields.to_utc(offset).ok_or(ClientError::ClockUnavailable)?;

        let request = SetTimeRequest {
            year: utc.year(),
            month: u8::from(utc.month()),
            day: utc.day(),
            hour: utc.hour(),
            minute: utc.minute(),
            second: utc.second(),
            time_zone: offset,
        };

        self.loading = true;
        let result = self.api.store_time(&request).await;
        self.loading = false;

        match result {
            Ok(payload) => {
                self.apply_payload(payload);
                Ok(())
            }
            Err(err) if err.is_decode() => {
                self.enter_unavailable();
                Ok(())
            }
            // The edited tuple survives a failed transmission.
            Err(err) => Err(err.into()),
        }
    }

    fn apply_payload(&mut self, payload: TimePayload) {
        let fields = OffsetDateTime::parse(&payload.time, &Rfc3339)
            .ok()
            .and_then(|instant| {
                let utc = instant.to_offset(UtcOffset::UTC);
                let utc = PrimitiveDateTime::new(utc.date(), utc.time());
                ClockFields::from_utc(utc, payload.time_zone)
            });

        match fields {
            Some(fields) => {
                self.zone_index = catalog_index(payload.time_zone);
                self.state = ClockState::Ready(fields);
                self.start_ticker(fields);
            }
            None => self.enter_unavailable(),
        }
    }

    fn enter_unavailable(&mut self) {
        self.state = ClockState::Unavailable;
        self.zone_index = None;
        self.stop_ticker();
    }

    fn start_ticker(&mut self, fields: ClockFields) {
        self.stop_ticker();

        let shared = Arc::new(Mutex::new(fields));
        let preview = LivePreview {
            shared: shared.clone(),
        };

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut clock = shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                *clock = clock.plus_seconds(1);
            }
        });

        self.live = Some(preview);
        self.ticker = Some(TickerGuard { task });
    }

    fn stop_ticker(&mut self) {
        self.ticker = None;
        self.live = None;
    }
}

/// Catalog row matching the host's current UTC offset, when resolvable.
pub fn host_zone_index() -> Option<usize> {
    UtcOffset::current_local_offset()
        .ok()
        .and_then(|offset| catalog_index(offset.whole_seconds() / 60))
}
