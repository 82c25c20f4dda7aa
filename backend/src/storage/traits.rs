//! # Storage Traits
//!
//! The storage abstraction the domain layer is written against, so the
//! controllers work with any backend (SQLite, in-memory doubles, ...).

use anyhow::Result;
use async_trait::async_trait;
use shared::Calendario;

use super::Subscription;

/// Trait defining the interface for calendario storage operations
///
/// Stream methods must be called from within a Tokio runtime: implementations
/// spawn a producer task that lives as long as the returned [`Subscription`].
#[async_trait]
pub trait CalendarioStorage: Send + Sync {
    /// Stream every stored calendario, re-emitting the full list on each change
    fn all_calendarios_stream(&self) -> Subscription<Vec<Calendario>>;

    /// Stream the calendario with the given id, or `None` while it does not exist
    fn calendario_stream(&self, id: i32) -> Subscription<Option<Calendario>>;

    /// Insert a calendario; an `id` of 0 lets storage assign one
    async fn insert_calendario(&self, calendario: &Calendario) -> Result<()>;

    /// Delete the calendario matching `calendario.id`
    async fn delete_calendario(&self, calendario: &Calendario) -> Result<()>;

    /// Update the calendario matching `calendario.id`
    async fn update_calendario(&self, calendario: &Calendario) -> Result<()>;
}
