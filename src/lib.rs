pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::ClientConfig;
pub use crate::core::directory::RegistrarDirectory;
pub use crate::core::gateway::BackendGateway;
pub use crate::core::loader::{LoadCoordinator, LoadHandle};
pub use crate::domain::model::{Address, Contact, Registrar, SecuritySettings, UserData};
pub use crate::domain::ports::{NotificationPresenter, RegistrarFetcher};
pub use crate::utils::error::{ConsoleError, Result};
