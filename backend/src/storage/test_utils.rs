//! Test double for the storage port.
//!
//! Captures every write so tests can assert exactly which calls the domain
//! layer issued, and lets tests push emissions into open streams by hand.

use anyhow::Result;
use async_trait::async_trait;
use shared::Calendario;
use std::sync::Mutex;
use tokio::sync::mpsc;

use super::subscription::STREAM_BUFFER;
use super::{CalendarioStorage, Subscription};

#[derive(Default)]
pub struct RecordingStorage {
    inserted: Mutex<Vec<Calendario>>,
    updated: Mutex<Vec<Calendario>>,
    deleted: Mutex<Vec<Calendario>>,
    calendario_feeds: Mutex<Vec<(i32, mpsc::Sender<Option<Calendario>>)>>,
    list_feeds: Mutex<Vec<mpsc::Sender<Vec<Calendario>>>>,
    fail_writes: bool,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A storage whose writes all fail after being recorded
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn inserted(&self) -> Vec<Calendario> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<Calendario> {
        self.updated.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<Calendario> {
        self.deleted.lock().unwrap().clone()
    }

    /// Total number of insert, update and delete calls seen
    pub fn write_count(&self) -> usize {
        self.inserted().len() + self.updated().len() + self.deleted().len()
    }

    /// Push an emission to every open stream for `id`
    pub async fn emit_calendario(&self, id: i32, calendario: Option<Calendario>) {
        let feeds: Vec<_> = self
            .calendario_feeds
            .lock()
            .unwrap()
            .iter()
            .filter(|(feed_id, _)| *feed_id == id)
            .map(|(_, tx)| tx.clone())
            .collect();
        for tx in feeds {
            let _ = tx.send(calendario.clone()).await;
        }
    }

    /// Push a list emission to every open list stream
    pub async fn emit_list(&self, calendarios: Vec<Calendario>) {
        let feeds: Vec<_> = self.list_feeds.lock().unwrap().clone();
        for tx in feeds {
            let _ = tx.send(calendarios.clone()).await;
        }
    }

    /// Close every open stream, as storage would on shutdown
    pub fn close_streams(&self) {
        self.calendario_feeds.lock().unwrap().clear();
        self.list_feeds.lock().unwrap().clear();
    }

    /// Whether any subscriber still holds the stream for `id`
    pub fn has_open_calendario_stream(&self, id: i32) -> bool {
        self.calendario_feeds
            .lock()
            .unwrap()
            .iter()
            .any(|(feed_id, tx)| *feed_id == id && !tx.is_closed())
    }

    fn record(&self, log: &Mutex<Vec<Calendario>>, calendario: &Calendario) -> Result<()> {
        log.lock().unwrap().push(calendario.clone());
        if self.fail_writes {
            anyhow::bail!("storage unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl CalendarioStorage for RecordingStorage {
    fn all_calendarios_stream(&self) -> Subscription<Vec<Calendario>> {
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        self.list_feeds.lock().unwrap().push(tx);
        Subscription::from_receiver(rx)
    }

    fn calendario_stream(&self, id: i32) -> Subscription<Option<Calendario>> {
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        self.calendario_feeds.lock().unwrap().push((id, tx));
        Subscription::from_receiver(rx)
    }

    async fn insert_calendario(&self, calendario: &Calendario) -> Result<()> {
        self.record(&self.inserted, calendario)
    }

    async fn delete_calendario(&self, calendario: &Calendario) -> Result<()> {
        self.record(&self.deleted, calendario)
    }

    async fn update_calendario(&self, calendario: &Calendario) -> Result<()> {
        self.record(&self.updated, calendario)
    }
}
