//! HTTP gateway for device, meta and user operations.
//!
//! Identity and user records are delegated to a remote authentication
//! authority over gRPC; reference data and devices live in PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod rpc;
pub mod services;
pub mod use_cases;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use config::Config;
use db::{device::DeviceRepository, meta::MetaRepository};
use rpc::{AuthClient, UserClient};
use services::{auth::AuthService, device::DeviceService, meta::MetaService, user::UserService};
use use_cases::{auth::AuthUseCase, device::DeviceUseCase, meta::MetaUseCase, user::UserUseCase};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
    pub auth: Arc<AuthUseCase>,
    pub users: Arc<UserUseCase>,
    pub meta: Arc<MetaUseCase>,
    pub devices: Arc<DeviceUseCase>,
}

impl AppState {
    /// Wires every layer on top of the shared pool and authority clients.
    pub fn new(
        config: Arc<Config>,
        pool: PgPool,
        auth_client: Arc<dyn AuthClient>,
        user_client: Arc<dyn UserClient>,
    ) -> Self {
        let auth = AuthUseCase::new(AuthService::new(auth_client));
        let users = UserUseCase::new(UserService::new(user_client));
        let meta = MetaUseCase::new(MetaService::new(MetaRepository::new(pool.clone())));
        let devices = DeviceUseCase::new(DeviceService::new(DeviceRepository::new(pool.clone())));

        Self {
            db: pool,
            config,
            auth: Arc::new(auth),
            users: Arc::new(users),
            meta: Arc::new(meta),
            devices: Arc::new(devices),
        }
    }
}

/// Builds the router with every route, the auth guard and the shared layers.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/auth/sign-up", post(routes::auth::sign_up))
        .route("/auth/sign-in", post(routes::auth::sign_in))
        .route("/auth/refresh", post(routes::auth::refresh_token))
        .route("/meta/sensors", get(routes::meta::list_sensors))
        .route("/meta/sensor/{id}", get(routes::meta::get_sensor))
        .route("/meta/crops", get(routes::meta::list_crops))
        .route("/meta/crop/{title}", get(routes::meta::get_crop))
        .route("/meta/update-cycle", get(routes::meta::list_update_cycles))
        .route("/meta/address/state", get(routes::meta::list_address_states))
        .route("/meta/address/city", get(routes::meta::list_address_cities));

    let protected = Router::new()
        .route("/auth/sign-out", post(routes::auth::sign_out))
        .route(
            "/user",
            get(routes::user::get_user).put(routes::user::update_user),
        )
        .route("/user/delete", post(routes::user::delete_user))
        .route("/device", post(routes::device::register_device))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api/v1", public.merge(protected))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors_hosts))
        .with_state(state)
}

fn cors_layer(hosts: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = hosts
        .iter()
        .filter_map(|h| match HeaderValue::from_str(h) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %h, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(AllowOrigin::list(origins))
}
