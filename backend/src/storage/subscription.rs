use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Buffered emissions per subscription before the producer waits on the consumer
pub const STREAM_BUFFER: usize = 16;

/// A cancellable, push-based sequence of values produced by storage.
///
/// The producer task (if any) is aborted when the subscription is dropped, so
/// a subscription held for the lifetime of a controller is released together
/// with it.
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: mpsc::Receiver<T>,
    producer: Option<JoinHandle<()>>,
}

impl<T> Subscription<T> {
    /// Wrap a receiver fed by `producer`; the task is aborted on drop
    pub fn new(receiver: mpsc::Receiver<T>, producer: JoinHandle<()>) -> Self {
        Self {
            receiver,
            producer: Some(producer),
        }
    }

    /// Wrap a receiver whose senders are owned elsewhere
    pub fn from_receiver(receiver: mpsc::Receiver<T>) -> Self {
        Self {
            receiver,
            producer: None,
        }
    }

    /// Wait for the next emission; `None` once the producer has finished
    pub async fn next(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// Stop receiving and release the producer
    pub fn unsubscribe(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.receiver.close();
        if let Some(producer) = self.producer.take() {
            producer.abort();
        }
    }
}
