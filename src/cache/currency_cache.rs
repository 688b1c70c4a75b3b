use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::api::rates::{PriceSnapshot, RatesClient};

/// Background-refreshed cache of the fiat/gold rates snapshot.
///
/// A single poll task replaces the stored snapshot wholesale after each
/// successful fetch; readers get the latest published `Arc` without ever
/// waiting on the network. Failed polls keep the previous snapshot.
pub struct CurrencyCache {
    inner: Arc<Inner>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

struct Inner {
    client: RatesClient,
    update_interval: Duration,
    snapshot: RwLock<Option<Arc<PriceSnapshot>>>,
    last_update: RwLock<Option<DateTime<Utc>>>,
    running: AtomicBool,
    shutdown: Notify,
}

impl CurrencyCache {
    pub fn new(client: RatesClient, update_interval: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                update_interval,
                snapshot: RwLock::new(None),
                last_update: RwLock::new(None),
                running: AtomicBool::new(false),
                shutdown: Notify::new(),
            }),
            handle: Mutex::new(None),
        }
    }

    /// Start the background update task. Calling this twice is a caller
    /// error and spawns a second task.
    pub fn start(&self) {
        self.inner.running.store(true, Ordering::SeqCst);
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            Self::update_loop(inner).await;
        });
        if let Ok(mut slot) = self.handle.lock() {
            *slot = Some(handle);
        }
        info!("Currency cache update task started");
    }

    /// Signal the update task to exit and wait for it to terminate
    pub async fn stop(&self) {
        self.inner.running.store(false, Ordering::SeqCst);
        // notify_one stores a permit, so the task wakes even if it is
        // mid-poll rather than parked in the sleep
        self.inner.shutdown.notify_one();
        let handle = self.handle.lock().ok().and_then(|mut slot| slot.take());
        if let Some(handle) = handle {
            let _ = handle.await;
        }
        info!("Currency cache update task stopped");
    }

    /// Latest published snapshot, or None before the first successful
    /// poll. Never triggers a fetch and never blocks on the poller.
    pub fn get_data(&self) -> Option<Arc<PriceSnapshot>> {
        self.inner
            .snapshot
            .read()
            .ok()
            .and_then(|guard| guard.clone())
    }

    /// Wall-clock time of the last successful poll
    pub fn last_update_time(&self) -> Option<DateTime<Utc>> {
        self.inner.last_update.read().ok().and_then(|guard| *guard)
    }

    async fn update_loop(inner: Arc<Inner>) {
        while inner.running.load(Ordering::SeqCst) {
            Self::update_once(&inner).await;
            tokio::select! {
                _ = inner.shutdown.notified() => break,
                _ = tokio::time::sleep(inner.update_interval) => {}
            }
        }
    }

    async fn update_once(inner: &Inner) {
        // The lock is only taken for the swap, never across the fetch
        match inner.client.fetch_snapshot().await {
            Ok(snapshot) => {
                Self::install_snapshot(inner, snapshot);
                info!("Currency cache updated successfully");
            }
            Err(e) => {
                warn!("Currency rates poll failed: {}", e);
            }
        }
    }

    fn install_snapshot(inner: &Inner, snapshot: PriceSnapshot) {
        if let Ok(mut guard) = inner.snapshot.write() {
            *guard = Some(Arc::new(snapshot));
        }
        if let Ok(mut guard) = inner.last_update.write() {
            *guard = Some(Utc::now());
        }
    }
}
