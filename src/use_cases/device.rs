use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    error::GatewayError,
    models::{
        device::{CreateDeviceInfo, RegisterDeviceRequest},
        user::AuthIdentity,
    },
    services::device::DeviceService,
};

#[derive(Clone)]
pub struct DeviceUseCase {
    service: DeviceService,
}

impl DeviceUseCase {
    pub fn new(service: DeviceService) -> Self {
        Self { service }
    }

    /// Registers a device owned by the caller.
    ///
    /// Any store failure, including a foreign-key violation on an unknown
    /// catalog id, is reported as `TransactionFailure` after rollback.
    pub async fn register_device(
        &self,
        identity: &AuthIdentity,
        req: RegisterDeviceRequest,
    ) -> Result<Uuid, GatewayError> {
        let info = CreateDeviceInfo {
            user_id: identity.user_id.clone(),
            title: req.title,
            name: req.name,
            crop_id: req.crop_id,
            update_cycle_id: req.update_cycle_id,
            address_state_id: req.address_state_id,
            address_city_id: req.address_city_id,
        };

        match self.service.create_device(info).await {
            Ok(id) => {
                info!(%id, user_id = %identity.user_id, "device registered");
                Ok(id)
            }
            Err(e) => {
                if let Some(constraint) = e.as_database_error().and_then(|d| d.constraint()) {
                    warn!(constraint, user_id = %identity.user_id, "device insert violated a constraint");
                }
                Err(GatewayError::TransactionFailure(e))
            }
        }
    }
}
