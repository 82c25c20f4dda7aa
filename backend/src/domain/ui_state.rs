use std::sync::Arc;
use tokio::sync::watch;

/// Observable holder for a piece of UI state.
///
/// Readers take snapshots with [`value`](Self::value) or follow changes
/// through [`subscribe`](Self::subscribe). Setting a value equal to the
/// current one does not notify anyone.
#[derive(Debug)]
pub struct UiStateHolder<T> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> Clone for UiStateHolder<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T: Clone + PartialEq> UiStateHolder<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Snapshot of the current value
    pub fn value(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Replace the value, returning whether listeners were notified
    pub fn set(&self, value: T) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Follow future changes; the current value is already marked as seen
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}
