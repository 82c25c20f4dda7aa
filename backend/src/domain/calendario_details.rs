//! Details screen logic for a single calendario.
//!
//! The controller follows one record through storage, projects it into a
//! [`CalendarioDetailsUiState`] and offers the two mutations available on
//! that screen: taking one day off the countdown and deleting the record.

use anyhow::Result;
use shared::{Calendario, CalendarioDetailsUiState};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::{CalendarioMapper, UiStateHolder};
use crate::storage::CalendarioStorage;

/// Retrieves, updates and deletes one calendario.
///
/// The storage subscription lives as long as the controller; dropping the
/// controller releases it.
pub struct CalendarioDetailsController<S> {
    calendario_id: i32,
    storage: Arc<S>,
    ui_state: UiStateHolder<CalendarioDetailsUiState>,
    collector: JoinHandle<()>,
}

impl<S: CalendarioStorage + 'static> CalendarioDetailsController<S> {
    /// Start following the calendario with `calendario_id`
    pub fn new(storage: Arc<S>, calendario_id: i32) -> Self {
        info!(calendario_id, "Opening calendario details");

        let ui_state = UiStateHolder::new(CalendarioDetailsUiState::default());
        let publisher = ui_state.clone();
        let mut subscription = storage.calendario_stream(calendario_id);

        let collector = tokio::spawn(async move {
            while let Some(emission) = subscription.next().await {
                // Absent records leave the last projection in place
                let Some(calendario) = emission else {
                    continue;
                };
                publisher.set(Self::project(&calendario));
            }
            debug!(calendario_id, "Calendario details stream ended");
        });

        Self {
            calendario_id,
            storage,
            ui_state,
            collector,
        }
    }

    fn project(calendario: &Calendario) -> CalendarioDetailsUiState {
        CalendarioDetailsUiState {
            out_of_stock: calendario.dias <= 0,
            calendario_details: CalendarioMapper::to_details(calendario),
        }
    }

    pub fn calendario_id(&self) -> i32 {
        self.calendario_id
    }

    /// Snapshot of the current details state
    pub fn ui_state(&self) -> CalendarioDetailsUiState {
        self.ui_state.value()
    }

    /// Follow details state changes
    pub fn subscribe(&self) -> watch::Receiver<CalendarioDetailsUiState> {
        self.ui_state.subscribe()
    }

    /// Take one day off the current calendario.
    ///
    /// Returns `None` without touching storage when no days are left.
    /// Otherwise the update runs in the background; the returned handle
    /// resolves to the storage result and may be ignored.
    pub fn reduce_quantity_by_one(&self) -> Option<JoinHandle<Result<()>>> {
        let current = CalendarioMapper::to_domain(&self.ui_state.value().calendario_details);
        if current.dias <= 0 {
            debug!(id = current.id, "No days left, skipping reduce");
            return None;
        }

        let updated = Calendario {
            dias: current.dias - 1,
            ..current
        };
        info!(id = updated.id, dias = updated.dias, "Reducing calendario days");

        let storage = Arc::clone(&self.storage);
        Some(tokio::spawn(async move {
            let result = storage.update_calendario(&updated).await;
            if let Err(e) = &result {
                error!(id = updated.id, error = %e, "Failed to reduce calendario days");
            }
            result
        }))
    }

    /// Delete the calendario currently shown
    pub async fn delete_item(&self) -> Result<()> {
        let current = CalendarioMapper::to_domain(&self.ui_state.value().calendario_details);
        info!(id = current.id, "Deleting calendario");
        self.storage.delete_calendario(&current).await
    }
}

impl<S> Drop for CalendarioDetailsController<S> {
    fn drop(&mut self) {
        self.collector.abort();
    }
}
