//! Meta endpoints against a seeded PostgreSQL catalog.
//!
//! Run with `DATABASE_URL` set and `--ignored`.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use gdh_api::{
    config::Config,
    error::GatewayError,
    models::{
        auth::Token,
        user::{AuthIdentity, NewUser, UserRecord, UserUpdate},
    },
    rpc::{AuthClient, CallContext, UserClient},
    AppState,
};

/// Meta routes never reach the authority.
struct Unreachable;

#[async_trait]
impl AuthClient for Unreachable {
    async fn login(&self, _: &CallContext, _: &str, _: &str) -> Result<Token, GatewayError> {
        Err(GatewayError::RemoteProtocol)
    }

    async fn refresh_token(&self, _: &CallContext, _: &str) -> Result<Token, GatewayError> {
        Err(GatewayError::RemoteProtocol)
    }

    async fn logout(&self, _: &CallContext, _: &str) -> Result<(), GatewayError> {
        Err(GatewayError::RemoteProtocol)
    }

    async fn validate(&self, _: &CallContext, _: &str) -> Result<AuthIdentity, GatewayError> {
        Err(GatewayError::RemoteProtocol)
    }
}

#[async_trait]
impl UserClient for Unreachable {
    async fn check_create_user(&self, _: &CallContext, _: &str, _: &str) -> Result<(), GatewayError> {
        Err(GatewayError::RemoteProtocol)
    }

    async fn get_user_by_email(&self, _: &CallContext, _: &str) -> Result<UserRecord, GatewayError> {
        Err(GatewayError::RemoteProtocol)
    }

    async fn get_user_by_id(&self, _: &CallContext, _: &str) -> Result<UserRecord, GatewayError> {
        Err(GatewayError::RemoteProtocol)
    }

    async fn create_user(&self, _: &CallContext, _: &NewUser) -> Result<(), GatewayError> {
        Err(GatewayError::RemoteProtocol)
    }

    async fn update_user(&self, _: &CallContext, _: &UserUpdate) -> Result<UserRecord, GatewayError> {
        Err(GatewayError::RemoteProtocol)
    }

    async fn delete_user(&self, _: &CallContext, _: &str, _: &str) -> Result<(), GatewayError> {
        Err(GatewayError::RemoteProtocol)
    }
}

fn app(pool: PgPool) -> Router {
    let config = Config {
        database_url: String::new(),
        auth_grpc_server: "http://127.0.0.1:1".into(),
        host: "127.0.0.1".into(),
        port: 0,
        cors_hosts: Vec::new(),
        rpc_timeout: Duration::from_secs(1),
        request_timeout: Duration::from_secs(5),
        shutdown_grace: Duration::from_secs(1),
    };
    let state = AppState::new(Arc::new(config), pool, Arc::new(Unreachable), Arc::new(Unreachable));
    gdh_api::router(state)
}

async fn seed_catalog(pool: &PgPool) -> i32 {
    let sensor_id: i32 = sqlx::query_scalar(
        "INSERT INTO device.sensor (title, eng_title, description, unit)
         VALUES ('온도', 'Temperature', 'air temperature', 'C')
         RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO device.crop (title, description) VALUES ('tomato', 'red fruit')")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO device.update_cycle (interval, description) VALUES (10, 'ten minutes')")
        .execute(pool)
        .await
        .unwrap();
    let state_id: i32 =
        sqlx::query_scalar("INSERT INTO device.address_state (title) VALUES ('Gyeonggi') RETURNING id")
            .fetch_one(pool)
            .await
            .unwrap();
    sqlx::query("INSERT INTO device.address_city (address_state_id, title) VALUES ($1, 'Suwon')")
        .bind(state_id)
        .execute(pool)
        .await
        .unwrap();

    sensor_id
}

async fn get(app: Router, uri: &str) -> Response {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(req).await.unwrap()
}

fn cache_control(resp: &Response) -> &str {
    resp.headers()
        .get(header::CACHE_CONTROL)
        .expect("Cache-Control header")
        .to_str()
        .unwrap()
}

async fn json_body(resp: Response) -> Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("parse JSON")
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn sensors_are_listed_and_fetched_by_id(pool: PgPool) {
    let sensor_id = seed_catalog(&pool).await;
    let expected = json!({
        "id": sensor_id,
        "title": "온도",
        "eng_title": "Temperature",
        "desc": "air temperature",
        "unit": "C"
    });

    let list = get(app(pool.clone()), "/api/v1/meta/sensors").await;
    assert_eq!(list.status(), StatusCode::OK);
    assert_eq!(cache_control(&list), "public, max-age=60");
    assert_eq!(json_body(list).await, json!({ "data": [expected.clone()] }));

    let one = get(app(pool), &format!("/api/v1/meta/sensor/{sensor_id}")).await;
    assert_eq!(one.status(), StatusCode::OK);
    assert_eq!(cache_control(&one), "public, max-age=60");
    assert_eq!(json_body(one).await, json!({ "data": expected }));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn unknown_sensor_id_is_a_bad_request(pool: PgPool) {
    let sensor_id = seed_catalog(&pool).await;

    let resp = get(app(pool), &format!("/api/v1/meta/sensor/{}", sensor_id + 100)).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await, json!({ "error": "Sensor id does not exist." }));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn crops_hide_ids_and_unknown_title_is_not_found(pool: PgPool) {
    seed_catalog(&pool).await;

    let list = get(app(pool.clone()), "/api/v1/meta/crops").await;
    assert_eq!(list.status(), StatusCode::OK);
    assert_eq!(cache_control(&list), "public, max-age=60");
    assert_eq!(
        json_body(list).await,
        json!({ "data": [{ "title": "tomato", "desc": "red fruit" }] })
    );

    let one = get(app(pool.clone()), "/api/v1/meta/crop/tomato").await;
    assert_eq!(one.status(), StatusCode::OK);
    assert_eq!(
        json_body(one).await,
        json!({ "data": { "title": "tomato", "desc": "red fruit" } })
    );

    let missing = get(app(pool), "/api/v1/meta/crop/durian").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(missing).await, json!({ "error": "crop not found." }));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn update_cycles_and_states_cache_for_half_an_hour(pool: PgPool) {
    seed_catalog(&pool).await;

    let cycles = get(app(pool.clone()), "/api/v1/meta/update-cycle").await;
    assert_eq!(cycles.status(), StatusCode::OK);
    assert_eq!(cache_control(&cycles), "public, max-age=1800");
    assert_eq!(
        json_body(cycles).await,
        json!({ "data": [{ "interval": 10, "desc": "ten minutes" }] })
    );

    let states = get(app(pool), "/api/v1/meta/address/state").await;
    assert_eq!(states.status(), StatusCode::OK);
    assert_eq!(cache_control(&states), "public, max-age=1800");
    assert_eq!(json_body(states).await, json!({ "data": [{ "title": "Gyeonggi" }] }));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn cities_by_state_and_empty_state_is_a_bad_request(pool: PgPool) {
    seed_catalog(&pool).await;

    let cities = get(app(pool.clone()), "/api/v1/meta/address/city?state=Gyeonggi").await;
    assert_eq!(cities.status(), StatusCode::OK);
    assert_eq!(cache_control(&cities), "public, max-age=1800");
    assert_eq!(
        json_body(cities).await,
        json!({ "data": [{ "state_title": "Gyeonggi", "title": "Suwon" }] })
    );

    let empty = get(app(pool), "/api/v1/meta/address/city?state=Nowhere").await;
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(empty).await,
        json!({ "error": "No data exists for the requested state." })
    );
}
