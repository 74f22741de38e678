//! Test helpers for integration tests
//!
//! Spawns the full application on an ephemeral port and gives each simulated
//! user a client with its own cookie jar.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use futures_util::StreamExt;
use postboard_api::{create_app, create_app_state};
use postboard_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpStream;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

use crate::fixtures::Credentials;

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A fresh browser-like client with an empty cookie jar
    pub fn client(&self) -> Result<TestClient> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(TestClient {
            base_url: self.base_url(),
            http,
        })
    }

    /// A client that has signed up and signed in as a new unique user
    pub async fn signed_in(&self, prefix: &str) -> Result<(TestClient, Credentials)> {
        let client = self.client()?;
        let credentials = Credentials::unique(prefix);

        assert_status(client.post("/signup", &credentials).await?, StatusCode::CREATED).await?;
        assert_status(client.post("/signin", &credentials).await?, StatusCode::OK).await?;

        Ok((client, credentials))
    }

    /// Open a realtime channel
    pub async fn connect_ws(&self) -> Result<WsStream> {
        let (stream, _) = connect_async(format!("ws://{}/ws", self.addr)).await?;
        // Give the server a moment to register the connection
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok(stream)
    }
}

/// HTTP client bound to one test server, carrying its own session cookie
pub struct TestClient {
    base_url: String,
    http: Client,
}

impl TestClient {
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.http.get(format!("{}{}", self.base_url, path)).send().await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?)
    }

    /// POST with no body at all
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        Ok(self.http.post(format!("{}{}", self.base_url, path)).send().await?)
    }

    /// POST with a raw body and a JSON content type
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        Ok(self
            .http
            .post(format!("{}{}", self.base_url, path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?)
    }
}

/// Configuration from the environment with the seeder switched off
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
    config.seeder.enabled = false;

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Read realtime frames until one with the wanted event name arrives
pub async fn next_event(ws: &mut WsStream, event: &str) -> Result<serde_json::Value> {
    tokio::time::timeout(Duration::from_secs(5), read_until(ws, event))
        .await
        .map_err(|_| anyhow::anyhow!("Timed out waiting for {event}"))?
}

async fn read_until(ws: &mut WsStream, event: &str) -> Result<serde_json::Value> {
    while let Some(message) = ws.next().await {
        if let Message::Text(text) = message? {
            let frame: serde_json::Value = serde_json::from_str(&text)?;
            if frame["event"] == event {
                return Ok(frame["data"].clone());
            }
        }
    }
    anyhow::bail!("Realtime channel closed before {event} arrived")
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
