use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row to insert into `device.device_info`.
#[derive(Debug, Clone)]
pub struct CreateDeviceInfo {
    /// Authority user id (UUID text) of the owner.
    pub user_id: String,
    pub title: String,
    pub name: Option<String>,
    pub crop_id: i32,
    pub update_cycle_id: i32,
    pub address_state_id: i32,
    pub address_city_id: i32,
}

/// Body for POST /device.
#[derive(Debug, Deserialize)]
pub struct RegisterDeviceRequest {
    pub title: String,
    pub name: Option<String>,
    pub crop_id: i32,
    pub update_cycle_id: i32,
    pub address_state_id: i32,
    pub address_city_id: i32,
}

#[derive(Debug, Serialize)]
pub struct RegisterDeviceResponse {
    pub id: Uuid,
}
