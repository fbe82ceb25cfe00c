use crate::domain::model::{Contact, Registrar, SecuritySettings, UserData};
use crate::domain::ports::RegistrarFetcher;
use crate::utils::error::{ConsoleError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

const REGISTRARS_PATH: &str = "/console-api/registrars";
const CONTACTS_PATH: &str = "/console-api/settings/contacts";
const SECURITY_PATH: &str = "/console-api/settings/security";
const USER_DATA_PATH: &str = "/console-api/userdata";

/// Typed JSON gateway to the console backend. Every operation returns an
/// explicit `Result` so callers can tell "empty" from "failed"; the old
/// swallow-into-fallback behavior is available as `fetch_with_fallback`.
pub struct BackendGateway {
    client: Client,
    base_url: String,
}

impl BackendGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a resource and decode its JSON payload.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .inspect_err(|e| tracing::error!("An error occurred: {}", e))?;

        Self::decode(response).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn submit<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .query(query)
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::error!("An error occurred: {}", e))?;

        Self::decode(response).await
    }

    /// GET with the original error-swallowing semantics: any failure is
    /// logged and the caller-supplied fallback is returned instead.
    pub async fn fetch_with_fallback<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        fallback: T,
    ) -> T {
        match self.fetch(path, query).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Substituting fallback for failed request to {}: {}", path, e);
                fallback
            }
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let payload = response.json().await?;
            return Ok(payload);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("Backend returned code {}, body was: {}", status.as_u16(), body);
        Err(ConsoleError::Status {
            status: status.as_u16(),
            body,
        })
    }

    pub async fn get_registrars(&self) -> Result<Vec<Registrar>> {
        self.fetch(REGISTRARS_PATH, &[]).await
    }

    pub async fn get_contacts(&self, registrar_id: &str) -> Result<Vec<Contact>> {
        self.fetch(CONTACTS_PATH, &[("registrarId", registrar_id)])
            .await
    }

    pub async fn post_contacts(
        &self,
        registrar_id: &str,
        contacts: &[Contact],
    ) -> Result<Vec<Contact>> {
        self.submit(CONTACTS_PATH, &[("registrarId", registrar_id)], contacts)
            .await
    }

    pub async fn get_security_settings(&self, registrar_id: &str) -> Result<SecuritySettings> {
        self.fetch(SECURITY_PATH, &[("registrarId", registrar_id)])
            .await
    }

    pub async fn post_security_settings(
        &self,
        registrar_id: &str,
        settings: &SecuritySettings,
    ) -> Result<SecuritySettings> {
        self.submit(SECURITY_PATH, &[("registrarId", registrar_id)], settings)
            .await
    }

    pub async fn get_user_data(&self) -> Result<UserData> {
        self.fetch(USER_DATA_PATH, &[]).await
    }
}

#[async_trait]
impl RegistrarFetcher for BackendGateway {
    async fn fetch_registrars(&self) -> Result<Vec<Registrar>> {
        self.get_registrars().await
    }
}
