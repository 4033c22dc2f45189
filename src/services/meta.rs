use crate::{
    db::meta::MetaRepository,
    models::meta::{AddressCity, AddressState, CatalogKey, Crop, Sensor, UpdateCycle},
};

#[derive(Clone)]
pub struct MetaService {
    repo: MetaRepository,
}

impl MetaService {
    pub fn new(repo: MetaRepository) -> Self {
        Self { repo }
    }

    pub async fn list_sensors(&self) -> Result<Vec<Sensor>, sqlx::Error> {
        self.repo.list_sensors().await
    }

    pub async fn find_sensor(&self, key: &CatalogKey) -> Result<Option<Sensor>, sqlx::Error> {
        self.repo.find_sensor(key).await
    }

    pub async fn list_crops(&self) -> Result<Vec<Crop>, sqlx::Error> {
        self.repo.list_crops().await
    }

    pub async fn find_crop(&self, key: &CatalogKey) -> Result<Option<Crop>, sqlx::Error> {
        self.repo.find_crop(key).await
    }

    pub async fn list_update_cycles(&self) -> Result<Vec<UpdateCycle>, sqlx::Error> {
        self.repo.list_update_cycles().await
    }

    pub async fn list_address_states(&self) -> Result<Vec<AddressState>, sqlx::Error> {
        self.repo.list_address_states().await
    }

    pub async fn list_address_cities(&self, state: &str) -> Result<Vec<AddressCity>, sqlx::Error> {
        self.repo.list_address_cities(state).await
    }
}
