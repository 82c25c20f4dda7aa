//! Entry form logic for new calendarios.
//!
//! The form holds raw strings exactly as typed. Validation only checks that
//! every field has content; numeric fields that do not parse are stored as 0
//! by [`CalendarioMapper::to_domain`].

use anyhow::Result;
use shared::{CalendarioDetails, CalendarioUiState};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

use super::{CalendarioMapper, UiStateHolder};
use crate::storage::CalendarioStorage;

/// True when every field of the form has non-whitespace content
pub fn validate_input(details: &CalendarioDetails) -> bool {
    [
        &details.mes,
        &details.dias,
        &details.semanas,
        &details.festividad,
    ]
    .iter()
    .all(|field| !field.trim().is_empty())
}

/// Validates and inserts calendarios
pub struct CalendarioEntryController<S> {
    storage: Arc<S>,
    ui_state: UiStateHolder<CalendarioUiState>,
}

impl<S: CalendarioStorage> CalendarioEntryController<S> {
    /// Start an entry session with an empty form
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            ui_state: UiStateHolder::new(CalendarioUiState::default()),
        }
    }

    /// Snapshot of the current form state
    pub fn ui_state(&self) -> CalendarioUiState {
        self.ui_state.value()
    }

    /// Follow form state changes
    pub fn subscribe(&self) -> watch::Receiver<CalendarioUiState> {
        self.ui_state.subscribe()
    }

    /// Replace the form contents and revalidate them
    pub fn update_ui_state(&self, calendario_details: CalendarioDetails) {
        let is_entry_valid = validate_input(&calendario_details);
        self.ui_state.set(CalendarioUiState {
            calendario_details,
            is_entry_valid,
        });
    }

    /// Insert the current form as a new calendario.
    ///
    /// An incomplete form is silently skipped.
    pub async fn save_item(&self) -> Result<()> {
        let details = self.ui_state.value().calendario_details;
        if !validate_input(&details) {
            debug!("Entry form incomplete, nothing saved");
            return Ok(());
        }

        let calendario = CalendarioMapper::to_domain(&details);
        info!(mes = %calendario.mes, festividad = %calendario.festividad, "Saving calendario");
        self.storage.insert_calendario(&calendario).await
    }
}
