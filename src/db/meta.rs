use sqlx::PgPool;

use crate::models::meta::{AddressCity, AddressState, CatalogKey, Crop, Sensor, UpdateCycle};

/// Read-only access to the reference catalogs in the `device` schema.
#[derive(Clone)]
pub struct MetaRepository {
    pool: PgPool,
}

impl MetaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_sensors(&self) -> Result<Vec<Sensor>, sqlx::Error> {
        sqlx::query_as::<_, Sensor>(
            "SELECT id, title, eng_title, description, unit, unit_description
             FROM device.sensor ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_sensor(&self, key: &CatalogKey) -> Result<Option<Sensor>, sqlx::Error> {
        let (id, title) = split_key(key);
        sqlx::query_as::<_, Sensor>(
            "SELECT id, title, eng_title, description, unit, unit_description
             FROM device.sensor
             WHERE id = $1 OR title = $2
             LIMIT 1",
        )
        .bind(id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_crops(&self) -> Result<Vec<Crop>, sqlx::Error> {
        sqlx::query_as::<_, Crop>("SELECT id, title, description FROM device.crop ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_crop(&self, key: &CatalogKey) -> Result<Option<Crop>, sqlx::Error> {
        let (id, title) = split_key(key);
        sqlx::query_as::<_, Crop>(
            "SELECT id, title, description FROM device.crop
             WHERE id = $1 OR title = $2
             LIMIT 1",
        )
        .bind(id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_update_cycles(&self) -> Result<Vec<UpdateCycle>, sqlx::Error> {
        sqlx::query_as::<_, UpdateCycle>(
            "SELECT id, interval, description FROM device.update_cycle ORDER BY interval",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_address_states(&self) -> Result<Vec<AddressState>, sqlx::Error> {
        sqlx::query_as::<_, AddressState>("SELECT id, title FROM device.address_state ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn list_address_cities(&self, state: &str) -> Result<Vec<AddressCity>, sqlx::Error> {
        sqlx::query_as::<_, AddressCity>(
            "SELECT c.id, s.title AS state_title, c.title
             FROM device.address_city c
             JOIN device.address_state s ON c.address_state_id = s.id
             WHERE s.title = $1
             ORDER BY c.id",
        )
        .bind(state)
        .fetch_all(&self.pool)
        .await
    }
}

/// NULL never matches, so only the populated half of the key filters rows.
fn split_key(key: &CatalogKey) -> (Option<i32>, Option<&str>) {
    match key {
        CatalogKey::Id(id) => (Some(*id), None),
        CatalogKey::Title(title) => (None, Some(title.as_str())),
    }
}
