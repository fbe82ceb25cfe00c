use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "registrar-console")]
#[command(about = "Console client for the registrar backend API")]
pub struct ClientConfig {
    #[arg(long, default_value = "http://localhost:8080")]
    pub base_url: String,

    #[arg(long, default_value = "10", help = "Budget for the initial load before warning the user")]
    pub load_timeout_seconds: u64,

    #[arg(long, help = "Registrar id to select after loading")]
    pub registrar_id: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ClientConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_positive_number("load_timeout_seconds", self.load_timeout_seconds, 1)?;
        if let Some(registrar_id) = &self.registrar_id {
            validation::validate_non_empty_string("registrar_id", registrar_id)?;
        }
        Ok(())
    }
}
