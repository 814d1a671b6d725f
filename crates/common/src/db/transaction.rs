//! Scoped transactions
//!
//! `run_in_transaction` checks out one connection, runs a unit of work on it
//! and then either commits (work returned `Ok`) or rolls back (work returned
//! `Err`). A failed rollback is logged and the work's own error is returned.
//! If the future is dropped mid-way, dropping the `DatabaseTransaction` rolls
//! back as well.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::{debug, error};

use crate::errors::{AppError, Result};

/// Boxed unit of work borrowing the open transaction
pub type UnitOfWork<'c, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'c>>;

/// Run `work` inside a single database transaction.
pub async fn run_in_transaction<T, F>(db: &DatabaseConnection, work: F) -> Result<T>
where
    T: Send,
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> UnitOfWork<'c, T> + Send,
{
    let txn = db.begin().await.map_err(|e| {
        error!(error = %e, "Failed to start transaction");
        AppError::DatabaseConnection {
            message: format!("Failed to start transaction: {}", e),
        }
    })?;

    match work(&txn).await {
        Ok(value) => {
            txn.commit().await.map_err(|e| {
                error!(error = %e, "Failed to commit transaction");
                AppError::Transaction {
                    message: format!("Commit failed: {}", e),
                }
            })?;
            debug!("Transaction committed");
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                error!(
                    error = %rollback_err,
                    cause = %err,
                    "Rollback failed"
                );
            } else {
                debug!(cause = %err, "Transaction rolled back");
            }
            Err(err)
        }
    }
}
