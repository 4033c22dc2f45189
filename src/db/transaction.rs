use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use futures_util::{future::BoxFuture, FutureExt};
use sqlx::{Postgres, Transaction};
use tracing::{error, warn};

/// An open transaction that can be finished exactly once.
#[async_trait]
pub trait TxHandle: Send + Sized {
    async fn commit(self) -> Result<(), sqlx::Error>;
    async fn rollback(self) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl TxHandle for Transaction<'static, Postgres> {
    async fn commit(self) -> Result<(), sqlx::Error> {
        Transaction::commit(self).await
    }

    async fn rollback(self) -> Result<(), sqlx::Error> {
        Transaction::rollback(self).await
    }
}

/// Runs `work` inside `tx` and finishes the transaction on every exit path.
///
/// * `Ok` commits; a commit failure is returned.
/// * `Err` rolls back and returns the work's error unchanged.
/// * A panic rolls back, then resumes unwinding with the original payload.
pub async fn run_in_transaction<H, T, E, F>(mut tx: H, work: F) -> Result<T, E>
where
    H: TxHandle,
    E: From<sqlx::Error>,
    F: for<'t> FnOnce(&'t mut H) -> BoxFuture<'t, Result<T, E>>,
{
    // `work` may panic while building its future as well as while running it.
    let tx_ref = &mut tx;
    let outcome = match std::panic::catch_unwind(AssertUnwindSafe(move || work(tx_ref))) {
        Ok(fut) => AssertUnwindSafe(fut).catch_unwind().await,
        Err(panic) => Err(panic),
    };

    match outcome {
        Ok(Ok(value)) => {
            tx.commit().await?;
            Ok(value)
        }
        Ok(Err(err)) => {
            if let Err(e) = tx.rollback().await {
                warn!(error = %e, "Rollback after failed work did not complete");
            }
            Err(err)
        }
        Err(panic) => {
            if let Err(e) = tx.rollback().await {
                error!(error = %e, "Rollback after panic did not complete");
            }
            std::panic::resume_unwind(panic)
        }
    }
}
