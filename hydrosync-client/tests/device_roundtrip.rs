use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::RwLock;

use hydrosync_api::models::{CycleConfig, RelayMode};
use hydrosync_api::time::{ClockField, catalog_index};
use hydrosync_client::{ClientError, ClockSession, ClockState, CyclePanel, HttpDevice};
use hydrosync_mock::handles::AppState;
use hydrosync_mock::state::DeviceState;

async fn spawn_device(time_zone: i32) -> String {
    let app = hydrosync_mock::app_with_state(AppState {
        device: Arc::new(RwLock::new(DeviceState::new(time_zone))),
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(hydrosync_mock::serve(listener, app));

    format!("http://{address}")
}

#[tokio::test]
async fn clock_edit_and_save_round_trip() {
    let base_url = spawn_device(330).await;

    let mut session = ClockSession::new(HttpDevice::new(base_url.as_str()));
    session.refresh().await.unwrap();

    assert!(matches!(session.state(), ClockState::Ready(_)));
    assert_eq!(session.zone_index(), catalog_index(330));

    session.edit_field(ClockField::Year, 2031);
    session.edit_field(ClockField::Hour, 6);
    session.edit_field(ClockField::Minute, 30);
    session.select_zone(catalog_index(0).unwrap());
    session.save().await.unwrap();

    // The session re-seeds from the device's canonical answer: same
    // instant, now confirmed under the +00:00 row.
    assert_eq!(session.zone_index(), catalog_index(0));
    let fields = session.fields().unwrap();
    assert_eq!(fields.year(), 2031);
    assert_eq!(fields.hour(), 6);
    assert_eq!(fields.minute(), 30);

    // A fresh session observes the stored clock.
    let mut verify = ClockSession::new(HttpDevice::new(base_url.as_str()));
    verify.refresh().await.unwrap();
    assert_eq!(verify.zone_index(), catalog_index(0));
    assert_eq!(verify.fields().unwrap().year(), 2031);
}

#[tokio::test]
async fn cycle_panel_against_the_device() {
    let base_url = spawn_device(0).await;

    let mut panel = CyclePanel::new(HttpDevice::new(base_url.as_str()));
    panel.refresh().await.unwrap();
    assert!(panel.cycles().is_empty());
    assert_eq!(panel.mode(), RelayMode::Automatic);

    for _ in 0..5 {
        panel.create(CycleConfig::default()).await.unwrap();
    }
    assert!(panel.is_full());
    assert!(matches!(
        panel.create(CycleConfig::default()).await,
        Err(ClientError::CycleLimit)
    ));

    let mut edited = panel.cycles()[0].clone();
    edited.config.fan_enable = false;
    let id = edited.id.clone();
    panel.update(edited).await.unwrap();
    assert!(!panel.cycles()[0].config.fan_enable);

    panel.remove(&id).await.unwrap();
    assert_eq!(panel.cycles().len(), 4);
    assert!(panel.cycles().iter().all(|cycle| cycle.id != id));

    panel.set_mode(RelayMode::NormallyOpen).await.unwrap();
    assert_eq!(panel.mode(), RelayMode::NormallyOpen);

    // The device is the source of truth after every call.
    let mut fresh = CyclePanel::new(HttpDevice::new(base_url.as_str()));
    fresh.refresh().await.unwrap();
    assert_eq!(fresh.cycles().len(), 4);
    assert_eq!(fresh.mode(), RelayMode::NormallyOpen);
}
