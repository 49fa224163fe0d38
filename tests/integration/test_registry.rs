use regfix::models::registry::RegistryConfig;
use regfix::services::registry_manager::{registry_is_up, start_registry, RegistryError};

#[tokio::test]
async fn probe_accepts_an_answering_registry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body("verdaccio")
        .create_async()
        .await;

    let client = reqwest::Client::new();
    assert!(registry_is_up(&client, &server.url()).await);
    mock.assert_async().await;
}

#[tokio::test]
async fn probe_rejects_server_errors() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .with_status(503)
        .create_async()
        .await;

    let client = reqwest::Client::new();
    assert!(!registry_is_up(&client, &server.url()).await);
}

#[tokio::test]
async fn probe_rejects_an_unreachable_url() {
    let client = reqwest::Client::new();
    // Port 9 (discard) is about as reliably closed as it gets locally
    assert!(!registry_is_up(&client, "http://localhost:9").await);
}

#[tokio::test]
async fn start_registry_rejects_a_non_registry_target_before_spawning() {
    let config = RegistryConfig {
        target: "@scope/project:serve".to_string(),
        ..RegistryConfig::default()
    };

    let result = start_registry(&config).await;
    assert!(matches!(result, Err(RegistryError::InvalidTarget(_))));
}
