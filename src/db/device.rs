use futures_util::future::BoxFuture;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::error;
use uuid::Uuid;

use crate::models::device::CreateDeviceInfo;

use super::transaction::run_in_transaction;

pub type PgTransaction = Transaction<'static, Postgres>;

#[derive(Clone)]
pub struct DeviceRepository {
    pool: PgPool,
}

impl DeviceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begins a transaction on the shared pool and runs `work` inside it.
    /// See [`run_in_transaction`] for the commit / rollback rules.
    pub async fn with_transaction<T, E, F>(&self, work: F) -> Result<T, E>
    where
        E: From<sqlx::Error>,
        F: for<'t> FnOnce(&'t mut PgTransaction) -> BoxFuture<'t, Result<T, E>>,
    {
        let tx = self.pool.begin().await?;
        run_in_transaction(tx, work).await
    }

    /// Inserts one device row inside the caller's transaction.
    ///
    /// Catalog ids are not checked here; the table's foreign keys reject
    /// unknown ones and the violation surfaces as a plain `sqlx::Error`.
    pub async fn create_device_info_tx(
        tx: &mut PgTransaction,
        info: &CreateDeviceInfo,
    ) -> Result<Uuid, sqlx::Error> {
        sqlx::query_scalar::<_, Uuid>(
            r#"INSERT INTO device.device_info (
                   title, device_name, user_id, crop_id,
                   update_cycle_id, address_state_id, address_city_id
               ) VALUES ($1, NULLIF($2, ''), $3::uuid, $4, $5, $6, $7)
               RETURNING id"#,
        )
        .bind(&info.title)
        .bind(info.name.as_deref().unwrap_or_default())
        .bind(&info.user_id)
        .bind(info.crop_id)
        .bind(info.update_cycle_id)
        .bind(info.address_state_id)
        .bind(info.address_city_id)
        .fetch_one(&mut **tx)
        .await
        .inspect_err(|e| error!(error = %e, user_id = %info.user_id, "device_info insert failed"))
    }
}
