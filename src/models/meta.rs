use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sensor kind collected by devices.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Sensor {
    pub id: i32,
    pub title: String,
    pub eng_title: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "unit_desc", skip_serializing_if = "Option::is_none")]
    pub unit_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Crop {
    #[serde(skip)]
    pub id: i32,
    pub title: String,
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Device reporting interval, in minutes.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UpdateCycle {
    #[serde(skip)]
    pub id: i32,
    pub interval: i32,
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AddressState {
    #[serde(skip)]
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AddressCity {
    #[serde(skip)]
    pub id: i32,
    pub state_title: String,
    pub title: String,
}

/// Query params for GET /meta/address/city.
#[derive(Debug, Deserialize)]
pub struct AddressCityQuery {
    pub state: String,
}

/// Lookup key for a single catalog row.
#[derive(Debug, Clone)]
pub enum CatalogKey {
    Id(i32),
    Title(String),
}

/// Envelope used by every meta endpoint.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}
