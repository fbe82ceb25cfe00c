use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Postal address attached to a registrar record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// A registrar account as returned by the console backend. Mirrors
/// server-held truth; the client never patches individual fields locally,
/// it only replaces whole records on reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registrar {
    pub registrar_id: String,
    pub registrar_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_tlds: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_allow_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_account_map: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_folder_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iana_identifier: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icann_referral_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_lock_allowed: Option<bool>,
}

impl Registrar {
    pub fn new(registrar_id: impl Into<String>, registrar_name: impl Into<String>) -> Self {
        Self {
            registrar_id: registrar_id.into(),
            registrar_name: registrar_name.into(),
            allowed_tlds: None,
            ip_address_allow_list: None,
            email_address: None,
            billing_account_map: None,
            drive_folder_id: None,
            iana_identifier: None,
            icann_referral_email: None,
            localized_address: None,
            registry_lock_allowed: None,
        }
    }
}

/// A registrar point of contact, with its WHOIS visibility flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrar_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax_number: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_in_whois_as_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_in_whois_as_tech: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_in_domain_whois_as_abuse: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_allow_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_client_certificate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_docs_url: Option<String>,
}
