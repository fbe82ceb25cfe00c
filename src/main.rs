use clap::Parser;
use registrar_console::utils::{logger, validation::Validate};
use registrar_console::{
    BackendGateway, ClientConfig, LoadCoordinator, NotificationPresenter, RegistrarDirectory,
};
use std::sync::Arc;
use std::time::Duration;

/// Snack-bar stand-in for the terminal: warnings go to the log.
struct LogPresenter;

impl NotificationPresenter for LogPresenter {
    fn show(&self, message: &str, duration: Duration) {
        tracing::warn!("{} (auto-dismiss after {:?})", message, duration);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting registrar-console");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let gateway = BackendGateway::new(config.base_url.clone());
    let coordinator = LoadCoordinator::new(Duration::from_secs(config.load_timeout_seconds));
    let directory = RegistrarDirectory::new(gateway, coordinator, Arc::new(LogPresenter));

    directory.init_load().await;

    let registrars = directory.registrars();
    if registrars.is_empty() {
        println!("No registrars available from {}", config.base_url);
        return Ok(());
    }

    println!("Registrars ({}):", registrars.len());
    for registrar in &registrars {
        let iana = registrar
            .iana_identifier
            .map(|id| format!(" (IANA {})", id))
            .unwrap_or_default();
        println!("  {} - {}{}", registrar.registrar_id, registrar.registrar_name, iana);
    }

    if let Some(registrar_id) = &config.registrar_id {
        directory.select_active(registrar_id);
        match directory.current_registrar() {
            Some(registrar) => {
                println!("Active registrar: {}", registrar.registrar_name);
                if let Some(tlds) = &registrar.allowed_tlds {
                    println!("  Allowed TLDs: {}", tlds.join(", "));
                }
                if let Some(email) = &registrar.email_address {
                    println!("  Contact email: {}", email);
                }
            }
            None => {
                println!("No registrar matches id '{}'", registrar_id);
            }
        }
    }

    Ok(())
}
