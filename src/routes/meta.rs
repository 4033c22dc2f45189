use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info};

use crate::{
    error::{ApiError, GatewayError},
    models::meta::{AddressCityQuery, CatalogKey, DataResponse},
    AppState,
};

use super::cache::CacheControl;

const SENSOR_CACHE: CacheControl = CacheControl::public(60);
const CROP_CACHE: CacheControl = CacheControl::public(60);
const ADDRESS_CACHE: CacheControl = CacheControl::public(1800);
const UPDATE_CYCLE_CACHE: CacheControl = CacheControl::public(1800);

fn cached<T: Serialize>(cache: CacheControl, data: T) -> Response {
    (cache.header(), Json(DataResponse { data })).into_response()
}

/// Logs the store failure and hides it behind a fixed message.
fn load_failed(what: &'static str) -> impl FnOnce(GatewayError) -> ApiError {
    move |e| {
        error!(error = %e, what, "meta lookup failed");
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to load {what} data."),
        )
    }
}

/// GET /meta/sensors
pub async fn list_sensors(State(state): State<AppState>) -> Result<Response, ApiError> {
    let sensors = state.meta.list_sensors().await.map_err(load_failed("sensor"))?;
    Ok(cached(SENSOR_CACHE, sensors))
}

/// GET /meta/sensor/{id}
pub async fn get_sensor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    match state.meta.get_sensor(CatalogKey::Id(id)).await {
        Ok(sensor) => Ok(cached(SENSOR_CACHE, sensor)),
        Err(GatewayError::NotFound(_)) => {
            info!(id, "unknown sensor id requested");
            Err(ApiError::bad_request("Sensor id does not exist."))
        }
        Err(e) => Err(load_failed("sensor")(e)),
    }
}

/// GET /meta/crops
pub async fn list_crops(State(state): State<AppState>) -> Result<Response, ApiError> {
    let crops = state.meta.list_crops().await.map_err(load_failed("crop"))?;
    Ok(cached(CROP_CACHE, crops))
}

/// GET /meta/crop/{title}
pub async fn get_crop(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Response, ApiError> {
    match state.meta.get_crop(CatalogKey::Title(title)).await {
        Ok(crop) => Ok(cached(CROP_CACHE, crop)),
        Err(e @ GatewayError::NotFound(_)) => Err(e.into()),
        Err(e) => Err(load_failed("crop")(e)),
    }
}

/// GET /meta/update-cycle
pub async fn list_update_cycles(State(state): State<AppState>) -> Result<Response, ApiError> {
    let cycles = state
        .meta
        .list_update_cycles()
        .await
        .map_err(load_failed("update cycle"))?;
    Ok(cached(UPDATE_CYCLE_CACHE, cycles))
}

/// GET /meta/address/state
pub async fn list_address_states(State(state): State<AppState>) -> Result<Response, ApiError> {
    let states = state
        .meta
        .list_address_states()
        .await
        .map_err(load_failed("address"))?;
    Ok(cached(ADDRESS_CACHE, states))
}

/// GET /meta/address/city?state=
pub async fn list_address_cities(
    State(state): State<AppState>,
    Query(params): Query<AddressCityQuery>,
) -> Result<Response, ApiError> {
    match state.meta.list_address_cities(&params.state).await {
        Ok(cities) => Ok(cached(ADDRESS_CACHE, cities)),
        Err(GatewayError::NotFound(_)) => {
            info!(state = %params.state, "no cities for requested state");
            Err(ApiError::bad_request("No data exists for the requested state."))
        }
        Err(e) => Err(load_failed("address")(e)),
    }
}
