use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;

use hydrosync_api::models::{Cycle, CycleConfig};
use hydrosync_api::restful::{ConfigPayload, DeletedCycle, ModePayload, SetTimeRequest};
use hydrosync_api::time::ClockFields;

use crate::state::{CycleRejection, DeviceState};

#[derive(Clone)]
pub struct AppState {
    pub device: Arc<RwLock<DeviceState>>,
}

impl IntoResponse for CycleRejection {
    fn into_response(self) -> Response {
        let status = match self {
            CycleRejection::TableFull => StatusCode::CONFLICT,
            CycleRejection::UnknownId => StatusCode::NOT_FOUND,
            CycleRejection::BadFanDelay => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

pub async fn get_time(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let device = state.device.read().await;
    let payload = device
        .time_payload()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(payload))
}

pub async fn post_time(
    State(state): State<AppState>,
    Json(body): Json<SetTimeRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let target = ClockFields::from_components(
        body.year.into(),
        body.month.into(),
        body.day.into(),
        body.hour.into(),
        body.minute.into(),
        body.second.into(),
    )
    .ok_or(StatusCode::BAD_REQUEST)?;

    let mut device = state.device.write().await;
    device.set_clock(target.as_datetime(), body.time_zone);
    tracing::info!("clock set to {} (offset {} min)", target, body.time_zone);

    let payload = device
        .time_payload()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(payload))
}

pub async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    let device = state.device.read().await;

    Json(ConfigPayload {
        cycles: device.cycles().to_vec(),
        mode: device.mode(),
    })
}

pub async fn post_mode(
    State(state): State<AppState>,
    Json(body): Json<ModePayload>,
) -> impl IntoResponse {
    let mut device = state.device.write().await;
    device.set_mode(body.mode);
    tracing::info!("relay mode set to {:?}", body.mode);

    Json(ModePayload {
        mode: device.mode(),
    })
}

pub async fn create_cycle(
    State(state): State<AppState>,
    Json(body): Json<CycleConfig>,
) -> Result<impl IntoResponse, CycleRejection> {
    let mut device = state.device.write().await;
    let cycle = device.insert_cycle(body)?;
    tracing::info!("cycle {} created", cycle.id);

    Ok(Json(cycle))
}

pub async fn update_cycle(
    State(state): State<AppState>,
    Json(body): Json<Cycle>,
) -> Result<impl IntoResponse, CycleRejection> {
    let mut device = state.device.write().await;
    let cycle = device.replace_cycle(body)?;
    tracing::info!("cycle {} updated", cycle.id);

    Ok(Json(cycle))
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: String,
}

pub async fn delete_cycle(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<impl IntoResponse, CycleRejection> {
    let mut device = state.device.write().await;
    device.remove_cycle(&params.id)?;
    tracing::info!("cycle {} deleted", params.id);

    Ok(Json(DeletedCycle { id: params.id }))
}
