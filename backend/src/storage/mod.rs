//! # Storage Module
//!
//! Data persistence for calendario records.
//!
//! The domain layer depends on the [`CalendarioStorage`] trait only. Reads are
//! long-lived [`Subscription`]s that re-emit whenever the underlying data
//! changes; writes are plain async calls whose failures are reported by the
//! storage implementation itself.
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite database through SQLx ([`SqliteCalendarioRepository`])
//! - **Tests**: a recording double that captures every write

pub mod connection;
pub mod sqlite;
pub mod subscription;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use connection::DbConnection;
pub use sqlite::SqliteCalendarioRepository;
pub use subscription::Subscription;
pub use traits::CalendarioStorage;
