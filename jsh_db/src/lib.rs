//! Read-only index access layer over the bundled SQLite artifact
//! (spec.md §4.4).

mod catalog;
mod error;
mod fetch;
mod forward;
mod retry;
mod reverse;
mod rows;
mod schema;

pub use catalog::Catalog;
pub use error::Error;
pub use schema::SCHEMA_VERSION;

/// The bundled schema's migration set, exposed so test fixtures can
/// build an in-memory database with the same shape as the real
/// artifact. Production callers never run this against the bundled,
/// pre-populated file.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("migrations");
