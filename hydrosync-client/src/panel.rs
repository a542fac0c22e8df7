use hydrosync_api::models::{Cycle, CycleConfig, MAX_CYCLES, RelayMode};
use hydrosync_api::restful::ModePayload;

use crate::error::ClientError;
use crate::transport::DeviceApi;

/// The cycle table and relay mode, mirrored from the device.
///
/// Local state only ever changes from a confirmed response, never from
/// the submitted draft, so device-side normalization cannot drift out
/// of view.
pub struct CyclePanel<A> {
    api: A,
    cycles: Vec<Cycle>,
    mode: RelayMode,
    loading: bool,
}

impl<A: DeviceApi> CyclePanel<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            cycles: Vec::new(),
            mode: RelayMode::default(),
            loading: false,
        }
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn mode(&self) -> RelayMode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_full(&self) -> bool {
        self.cycles.len() >= MAX_CYCLES
    }

    /// Replaces the whole table and mode from `GET /config`.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.loading = true;
        let result = self.api.fetch_config().await;
        self.loading = false;

        match result {
            Ok(payload) => {
                self.cycles = payload.cycles;
                self.mode = payload.mode;
                Ok(())
            }
            Err(err) if err.is_decode() => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Stores a new cycle. Refused locally once the table is full; the
    /// confirmed cycle (with its assigned id) is appended on success.
    pub async fn create(&mut self, config: CycleConfig) -> Result<(), ClientError> {
        if self.is_full() {
            return Err(ClientError::CycleLimit);
        }

        self.loading = true;
        let result = self.api.create_cycle(&config).await;
        self.loading = false;

        match result {
            Ok(cycle) => {
                self.cycles.push(cycle);
                Ok(())
            }
            Err(err) if err.is_decode() => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Rewrites an existing cycle; the confirmed copy replaces the
    /// entry with the same id, or nothing when the id is unknown.
    pub async fn update(&mut self, cycle: Cycle) -> Result<(), ClientError> {
        self.loading = true;
        let result = self.api.update_cycle(&cycle).await;
        self.loading = false;

        match result {
            Ok(confirmed) => {
                if let Some(slot) = self.cycles.iter_mut().find(|c| c.id == confirmed.id) {
                    *slot = confirmed;
                }
                Ok(())
            }
            Err(err) if err.is_decode() => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a cycle by id; removal applies to whatever id the
    /// device acknowledges.
    pub async fn remove(&mut self, id: &str) -> Result<(), ClientError> {
        self.loading = true;
        let result = self.api.delete_cycle(id).await;
        self.loading = false;

        match result {
            Ok(deleted) => {
                self.cycles.retain(|c| c.id != deleted.id);
                Ok(())
            }
            Err(err) if err.is_decode() => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Stores a relay mode and adopts whatever the device reports back.
    pub async fn set_mode(&mut self, mode: RelayMode) -> Result<(), ClientError> {
        self.loading = true;
        let result = self.api.store_mode(&ModePayload { mode }).await;
        self.loading = false;

        match result {
            Ok(payload) => {
                self.mode = payload.mode;
                Ok(())
            }
            Err(err) if err.is_decode() => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Steps the mode along the dashboard's toggle order.
    pub async fn advance_mode(&mut self) -> Result<(), ClientError> {
        self.set_mode(self.mode.next()).await
    }
}
