use shared::HomeUiState;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::UiStateHolder;
use crate::storage::CalendarioStorage;

/// Keeps the list of all stored calendarios up to date.
pub struct CalendarioHomeController {
    ui_state: UiStateHolder<HomeUiState>,
    collector: JoinHandle<()>,
}

impl CalendarioHomeController {
    pub fn new<S: CalendarioStorage + ?Sized>(storage: Arc<S>) -> Self {
        info!("Opening calendario list");

        let ui_state = UiStateHolder::new(HomeUiState::default());
        let publisher = ui_state.clone();
        let mut subscription = storage.all_calendarios_stream();

        let collector = tokio::spawn(async move {
            while let Some(calendario_list) = subscription.next().await {
                debug!(count = calendario_list.len(), "Calendario list changed");
                publisher.set(HomeUiState { calendario_list });
            }
        });

        Self {
            ui_state,
            collector,
        }
    }

    pub fn ui_state(&self) -> HomeUiState {
        self.ui_state.value()
    }

    pub fn subscribe(&self) -> watch::Receiver<HomeUiState> {
        self.ui_state.subscribe()
    }
}

impl Drop for CalendarioHomeController {
    fn drop(&mut self) {
        self.collector.abort();
    }
}
