//! Shared helpers for integration tests.

use factcheck_service::config::{FactCheckConfig, GeminiSettings};
use factcheck_service::startup::Application;
use std::time::Duration;

/// Build a config pointing the provider at `api_base`.
///
/// Constructed directly rather than through environment variables so tests
/// stay safe under the parallel test runner.
pub fn test_config(api_key: &str, api_base: &str) -> FactCheckConfig {
    FactCheckConfig {
        common: service_core::config::Config {
            port: 0,
            log_level: "info".to_string(),
        },
        gemini: GeminiSettings {
            api_key: api_key.to_string(),
            model: "gemini-2.0-flash-exp".to_string(),
            api_base: api_base.to_string(),
        },
    }
}

/// Spawn the application on a random port and return the port number.
pub async fn spawn_app(config: FactCheckConfig) -> u16 {
    let app = Application::build(config)
        .await
        .expect("Failed to build application");
    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}
