pub mod directory;
pub mod gateway;
pub mod loader;

pub use crate::domain::model::{Address, Contact, Registrar, SecuritySettings, UserData};
pub use crate::domain::ports::{NotificationPresenter, RegistrarFetcher};
pub use crate::utils::error::Result;
