use crate::core::loader::LoadCoordinator;
use crate::domain::model::Registrar;
use crate::domain::ports::{NotificationPresenter, RegistrarFetcher};
use crate::utils::error::Result;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::broadcast;

const LOAD_TIMEOUT_MESSAGE: &str = "Timeout loading registrars";
const SNACK_BAR_DURATION: Duration = Duration::from_millis(1500);

// Capacity for the selection-change channel; slow subscribers lag rather
// than block the sender.
const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// Session-scoped store of the registrar list and the active selection.
///
/// Owned and injected explicitly: callers construct it with its
/// collaborators and drop it when the session ends, there is no ambient
/// global instance. Reloads replace the collection wholesale; concurrent
/// reloads are not deduplicated, so the last response to resolve wins.
pub struct RegistrarDirectory<F: RegistrarFetcher> {
    fetcher: F,
    coordinator: LoadCoordinator,
    presenter: Arc<dyn NotificationPresenter>,
    registrars: RwLock<Vec<Registrar>>,
    active_registrar_id: RwLock<String>,
    change_tx: broadcast::Sender<String>,
}

impl<F: RegistrarFetcher> RegistrarDirectory<F> {
    pub fn new(
        fetcher: F,
        coordinator: LoadCoordinator,
        presenter: Arc<dyn NotificationPresenter>,
    ) -> Arc<Self> {
        let (change_tx, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Arc::new(Self {
            fetcher,
            coordinator,
            presenter,
            registrars: RwLock::new(Vec::new()),
            active_registrar_id: RwLock::new(String::new()),
            change_tx,
        })
    }

    /// One-time startup load: arms the load stopwatch, runs a reload and
    /// disarms the stopwatch whatever the outcome. A failed load is logged
    /// and leaves the collection as-is; it is never fatal.
    pub async fn init_load(self: &Arc<Self>)
    where
        F: 'static,
    {
        let directory = Arc::clone(self);
        let handle = self
            .coordinator
            .start_load(move || directory.on_load_timeout());

        match self.reload().await {
            Ok(registrars) => {
                tracing::info!("Loaded {} registrars", registrars.len());
            }
            Err(e) => {
                tracing::warn!("Initial registrar load failed: {}", e);
            }
        }

        handle.stop_load();
    }

    /// Refetch the registrar list and replace the stored collection on
    /// success. May be called repeatedly; calls are not deduplicated.
    pub async fn reload(&self) -> Result<Vec<Registrar>> {
        let registrars = self.fetcher.fetch_registrars().await?;
        *self.registrars.write().unwrap() = registrars.clone();
        Ok(registrars)
    }

    /// Set the active registrar id and broadcast it to subscribers. The id
    /// is not validated against the collection, and repeated selections of
    /// the same id emit repeated events.
    pub fn select_active(&self, registrar_id: &str) {
        *self.active_registrar_id.write().unwrap() = registrar_id.to_string();
        // No receivers is fine; the session may have no listeners yet.
        let _ = self.change_tx.send(registrar_id.to_string());
        tracing::debug!("Active registrar set to '{}'", registrar_id);
    }

    pub fn active_registrar_id(&self) -> String {
        self.active_registrar_id.read().unwrap().clone()
    }

    /// Snapshot of the loaded collection, in server response order.
    pub fn registrars(&self) -> Vec<Registrar> {
        self.registrars.read().unwrap().clone()
    }

    /// First entry matching the active id, if any. None while the directory
    /// has not loaded, nothing is selected, or the selected id is stale.
    pub fn current_registrar(&self) -> Option<Registrar> {
        let active_id = self.active_registrar_id.read().unwrap();
        self.registrars
            .read()
            .unwrap()
            .iter()
            .find(|r| r.registrar_id == *active_id)
            .cloned()
    }

    /// Receiver on the selection-change channel. Only selections made after
    /// subscribing are observed.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.change_tx.subscribe()
    }

    /// Invoked by the load coordinator when the initial load exceeds its
    /// budget. Warns the user; the load itself keeps going.
    pub fn on_load_timeout(&self) {
        self.presenter.show(LOAD_TIMEOUT_MESSAGE, SNACK_BAR_DURATION);
    }
}
