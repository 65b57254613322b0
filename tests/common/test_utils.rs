use vitallens::{
    config::{Config, EndpointConfig, LogsConfig, ServerConfig},
    prediction::HttpPredictionClient,
};

/// Create a test configuration pointing at the given endpoint
pub fn create_test_config(url: &str) -> Config {
    Config {
        endpoint: EndpointConfig {
            url: url.to_string(),
            timeout_secs: 5,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

/// Client for a wiremock server, posting to `/predict`
pub fn create_client(base_uri: &str) -> HttpPredictionClient {
    let config = create_test_config(&format!("{}/predict", base_uri));
    HttpPredictionClient::new(&config.endpoint).expect("Failed to build client")
}

/// URL on a local port with nothing listening
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/predict", port)
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
endpoint:
  url: "http://localhost:9000/predict"
  timeout_secs: 10

server:
  host: "127.0.0.1"
  port: 3000
  logs:
    level: "debug"
"#;
