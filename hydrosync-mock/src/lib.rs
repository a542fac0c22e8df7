use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use crate::handles::*;
use crate::settings::Settings;
use crate::state::DeviceState;

pub mod handles;
pub mod settings;
pub mod state;

pub fn create_app(settings: &Settings) -> Router {
    let device = Arc::new(RwLock::new(DeviceState::new(settings.device.time_zone)));

    app_with_state(AppState { device })
}

pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/time", get(get_time).post(post_time))
        .route("/config", get(get_config))
        .route("/mode", post(post_mode))
        .route(
            "/cycles",
            post(create_cycle).put(update_cycle).delete(delete_cycle),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(settings: &Arc<Settings>) {
    let app = create_app(settings);

    let ip_addr = settings.server.host.parse::<IpAddr>().unwrap();

    let address = SocketAddr::from((ip_addr, settings.server.port));

    let listener = TcpListener::bind(&address).await.unwrap();

    tracing::info!("listening on {:?}", address);

    axum::serve(listener, app).await.unwrap();
}

/// Serves an already-built app on an existing listener. Integration
/// tests use this to run against an ephemeral port.
pub async fn serve(listener: TcpListener, app: Router) {
    axum::serve(listener, app).await.unwrap();
}
