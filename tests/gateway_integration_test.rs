use httpmock::prelude::*;
use registrar_console::{BackendGateway, ConsoleError, Contact, SecuritySettings};

#[tokio::test]
async fn test_full_settings_round_trip_against_mock_backend() {
    let server = MockServer::start();

    let contacts_get = server.mock(|when, then| {
        when.method(GET)
            .path("/console-api/settings/contacts")
            .query_param("registrarId", "acme");
        then.status(200).json_body(serde_json::json!([{
            "name": "Jane Ops",
            "emailAddress": "jane@acme.example",
            "phoneNumber": "+1.5551234",
            "types": ["ADMIN", "TECH"],
            "visibleInWhoisAsAdmin": true
        }]));
    });

    let gateway = BackendGateway::new(server.base_url());

    let contacts = gateway.get_contacts("acme").await.unwrap();
    contacts_get.assert();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Jane Ops");
    assert_eq!(contacts[0].types, vec!["ADMIN", "TECH"]);
    assert_eq!(contacts[0].visible_in_whois_as_admin, Some(true));

    let updated: Vec<Contact> = contacts
        .into_iter()
        .map(|mut c| {
            c.visible_in_whois_as_tech = Some(true);
            c
        })
        .collect();

    let contacts_post = server.mock(|when, then| {
        when.method(POST)
            .path("/console-api/settings/contacts")
            .query_param("registrarId", "acme")
            .json_body_obj(&updated);
        then.status(200).json_body_obj(&updated);
    });

    let saved = gateway.post_contacts("acme", &updated).await.unwrap();
    contacts_post.assert();
    assert_eq!(saved, updated);
}

#[tokio::test]
async fn test_security_settings_get_then_post() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/console-api/settings/security")
            .query_param("registrarId", "acme");
        then.status(200).json_body(serde_json::json!({
            "ipAddressAllowList": ["198.51.100.0/24"],
            "clientCertificate": "-----BEGIN CERTIFICATE-----"
        }));
    });

    let gateway = BackendGateway::new(server.base_url());
    let mut settings = gateway.get_security_settings("acme").await.unwrap();
    assert!(settings.client_certificate.is_some());

    settings.ip_address_allow_list = Some(vec![
        "198.51.100.0/24".to_string(),
        "203.0.113.0/24".to_string(),
    ]);

    let post_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/console-api/settings/security")
            .query_param("registrarId", "acme");
        then.status(200).json_body_obj(&settings);
    });

    let saved: SecuritySettings = gateway
        .post_security_settings("acme", &settings)
        .await
        .unwrap();
    post_mock.assert();
    assert_eq!(saved, settings);
}

#[tokio::test]
async fn test_write_failures_are_not_swallowed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/console-api/settings/security");
        then.status(403).body("forbidden");
    });

    let gateway = BackendGateway::new(server.base_url());
    let err = gateway
        .post_security_settings("acme", &SecuritySettings::default())
        .await
        .unwrap_err();

    match err {
        ConsoleError::Status { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "forbidden");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_user_data_endpoint_has_no_query_parameters() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/console-api/userdata");
        then.status(200).json_body(serde_json::json!({
            "productName": "Registry Console",
            "supportEmail": "support@registry.example",
            "technicalDocsUrl": "https://registry.example/docs"
        }));
    });

    let gateway = BackendGateway::new(server.base_url());
    let user_data = gateway.get_user_data().await.unwrap();

    api_mock.assert();
    assert_eq!(user_data.product_name.as_deref(), Some("Registry Console"));
    assert_eq!(
        user_data.technical_docs_url.as_deref(),
        Some("https://registry.example/docs")
    );
}
