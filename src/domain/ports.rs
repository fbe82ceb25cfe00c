use crate::domain::model::Registrar;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Source the directory loads its registrar list through. Implemented by
/// the HTTP gateway; test doubles stand in for it without a server.
#[async_trait]
pub trait RegistrarFetcher: Send + Sync {
    async fn fetch_registrars(&self) -> Result<Vec<Registrar>>;
}

/// Transient user-facing notification surface (snack-bar style): the
/// message is shown and auto-dismissed after `duration`.
pub trait NotificationPresenter: Send + Sync {
    fn show(&self, message: &str, duration: Duration);
}
