use uuid::Uuid;

use crate::{db::device::DeviceRepository, models::device::CreateDeviceInfo};

#[derive(Clone)]
pub struct DeviceService {
    repo: DeviceRepository,
}

impl DeviceService {
    pub fn new(repo: DeviceRepository) -> Self {
        Self { repo }
    }

    /// Inserts the device atomically; the transaction never outlives this call.
    pub async fn create_device(&self, info: CreateDeviceInfo) -> Result<Uuid, sqlx::Error> {
        self.repo
            .with_transaction(move |tx| {
                Box::pin(async move { DeviceRepository::create_device_info_tx(tx, &info).await })
            })
            .await
    }
}
