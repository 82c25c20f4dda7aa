//! # SQLite Calendario Repository
//!
//! [`CalendarioStorage`] backed by the `calendarios` table.
//!
//! Every write that touches at least one row bumps a change counter. Each
//! open stream waits on that counter and re-queries when it moves, so
//! subscribers always see the current contents of the table.

use anyhow::Result;
use async_trait::async_trait;
use shared::Calendario;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info};

use super::connection::DbConnection;
use super::subscription::{Subscription, STREAM_BUFFER};
use super::traits::CalendarioStorage;

/// Repository for calendario operations
#[derive(Clone)]
pub struct SqliteCalendarioRepository {
    db: DbConnection,
    changes: Arc<watch::Sender<u64>>,
}

impl SqliteCalendarioRepository {
    pub fn new(db: DbConnection) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            db,
            changes: Arc::new(changes),
        }
    }

    /// Get a calendario by ID
    pub async fn get_calendario(&self, id: i32) -> Result<Option<Calendario>> {
        Self::fetch_calendario(&self.db, id).await
    }

    /// List all calendarios ordered by id
    pub async fn list_calendarios(&self) -> Result<Vec<Calendario>> {
        Self::fetch_all(&self.db).await
    }

    async fn fetch_calendario(db: &DbConnection, id: i32) -> Result<Option<Calendario>> {
        let row = sqlx::query(
            r#"
            SELECT id, mes, dias, semanas, festividad
            FROM calendarios
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db.pool())
        .await?;

        Ok(row.as_ref().map(Self::row_to_calendario))
    }

    async fn fetch_all(db: &DbConnection) -> Result<Vec<Calendario>> {
        let rows = sqlx::query(
            r#"
            SELECT id, mes, dias, semanas, festividad
            FROM calendarios
            ORDER BY id ASC
            "#,
        )
        .fetch_all(db.pool())
        .await?;

        Ok(rows.iter().map(Self::row_to_calendario).collect())
    }

    fn row_to_calendario(row: &SqliteRow) -> Calendario {
        Calendario {
            id: row.get("id"),
            mes: row.get("mes"),
            dias: row.get("dias"),
            semanas: row.get("semanas"),
            festividad: row.get("festividad"),
        }
    }

    fn notify_changed(&self, rows_affected: u64) {
        if rows_affected > 0 {
            self.changes.send_modify(|version| *version = version.wrapping_add(1));
        }
    }

    /// Spawn a producer that runs `query` now and again after every change
    fn query_stream<T, F, Fut>(&self, label: &'static str, query: F) -> Subscription<T>
    where
        T: Send + 'static,
        F: Fn(DbConnection) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        // Subscribe before the first query so no write can slip in between
        let mut changes = self.changes.subscribe();
        let db = self.db.clone();

        let producer = tokio::spawn(async move {
            loop {
                match query(db.clone()).await {
                    Ok(value) => {
                        if tx.send(value).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!(stream = label, error = %e, "Calendario stream query failed");
                        break;
                    }
                }

                tokio::select! {
                    changed = changes.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    _ = tx.closed() => break,
                }
            }
            debug!(stream = label, "Calendario stream finished");
        });

        Subscription::new(rx, producer)
    }
}

#[async_trait]
impl CalendarioStorage for SqliteCalendarioRepository {
    fn all_calendarios_stream(&self) -> Subscription<Vec<Calendario>> {
        self.query_stream("all", |db| async move { Self::fetch_all(&db).await })
    }

    fn calendario_stream(&self, id: i32) -> Subscription<Option<Calendario>> {
        self.query_stream("by_id", move |db| async move {
            Self::fetch_calendario(&db, id).await
        })
    }

    async fn insert_calendario(&self, calendario: &Calendario) -> Result<()> {
        let result = if calendario.id == 0 {
            sqlx::query(
                r#"
                INSERT INTO calendarios (mes, dias, semanas, festividad)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(&calendario.mes)
            .bind(calendario.dias)
            .bind(calendario.semanas)
            .bind(&calendario.festividad)
            .execute(self.db.pool())
            .await?
        } else {
            // An existing id is left untouched
            sqlx::query(
                r#"
                INSERT OR IGNORE INTO calendarios (id, mes, dias, semanas, festividad)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(calendario.id)
            .bind(&calendario.mes)
            .bind(calendario.dias)
            .bind(calendario.semanas)
            .bind(&calendario.festividad)
            .execute(self.db.pool())
            .await?
        };

        info!(
            id = result.last_insert_rowid(),
            rows = result.rows_affected(),
            "Inserted calendario"
        );
        self.notify_changed(result.rows_affected());
        Ok(())
    }

    async fn delete_calendario(&self, calendario: &Calendario) -> Result<()> {
        let result = sqlx::query("DELETE FROM calendarios WHERE id = ?")
            .bind(calendario.id)
            .execute(self.db.pool())
            .await?;

        info!(id = calendario.id, rows = result.rows_affected(), "Deleted calendario");
        self.notify_changed(result.rows_affected());
        Ok(())
    }

    async fn update_calendario(&self, calendario: &Calendario) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE calendarios
            SET mes = ?, dias = ?, semanas = ?, festividad = ?
            WHERE id = ?
            "#,
        )
        .bind(&calendario.mes)
        .bind(calendario.dias)
        .bind(calendario.semanas)
        .bind(&calendario.festividad)
        .bind(calendario.id)
        .execute(self.db.pool())
        .await?;

        info!(id = calendario.id, rows = result.rows_affected(), "Updated calendario");
        self.notify_changed(result.rows_affected());
        Ok(())
    }
}
