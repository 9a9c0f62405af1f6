//! The §7 "retry at most once on transient SQLite busy conditions"
//! policy, applied uniformly at every query entry point.

use std::future::Future;

use sqlx::Error as SqlxError;

fn is_busy(err: &SqlxError) -> bool {
    match err {
        SqlxError::Database(db_err) => {
            db_err.message().contains("database is locked") || db_err.code().as_deref() == Some("5")
        }
        _ => false,
    }
}

pub(crate) async fn retry_once_on_busy<F, Fut, T>(mut f: F) -> Result<T, SqlxError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SqlxError>>,
{
    match f().await {
        Err(err) if is_busy(&err) => f().await,
        other => other,
    }
}
