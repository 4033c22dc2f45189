use crate::{
    error::GatewayError,
    models::meta::{AddressCity, AddressState, CatalogKey, Crop, Sensor, UpdateCycle},
    services::meta::MetaService,
};

#[derive(Clone)]
pub struct MetaUseCase {
    service: MetaService,
}

impl MetaUseCase {
    pub fn new(service: MetaService) -> Self {
        Self { service }
    }

    pub async fn list_sensors(&self) -> Result<Vec<Sensor>, GatewayError> {
        Ok(self.service.list_sensors().await?)
    }

    pub async fn get_sensor(&self, key: CatalogKey) -> Result<Sensor, GatewayError> {
        self.service
            .find_sensor(&key)
            .await?
            .ok_or(GatewayError::NotFound("sensor"))
    }

    pub async fn list_crops(&self) -> Result<Vec<Crop>, GatewayError> {
        Ok(self.service.list_crops().await?)
    }

    pub async fn get_crop(&self, key: CatalogKey) -> Result<Crop, GatewayError> {
        self.service
            .find_crop(&key)
            .await?
            .ok_or(GatewayError::NotFound("crop"))
    }

    pub async fn list_update_cycles(&self) -> Result<Vec<UpdateCycle>, GatewayError> {
        Ok(self.service.list_update_cycles().await?)
    }

    pub async fn list_address_states(&self) -> Result<Vec<AddressState>, GatewayError> {
        Ok(self.service.list_address_states().await?)
    }

    /// An unknown state yields `NotFound` rather than an empty list.
    pub async fn list_address_cities(&self, state: &str) -> Result<Vec<AddressCity>, GatewayError> {
        let cities = self.service.list_address_cities(state).await?;
        if cities.is_empty() {
            return Err(GatewayError::NotFound("address state"));
        }
        Ok(cities)
    }
}
