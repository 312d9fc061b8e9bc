//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and seeding accounts.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use campus_api::{create_app, create_app_state, AppState};
use campus_common::{AppConfig, JwtService};
use campus_core::Role;
use campus_db::PgPool;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::fixtures::unique_suffix;

/// A seeded account and a bearer token for it
#[derive(Debug, Clone)]
pub struct TestAccount {
    pub id: Uuid,
    pub token: String,
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pool: PgPool,
    jwt: JwtService,
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
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);
        let state: AppState = create_app_state(config).await?;
        let pool = state.pool().clone();
        let app = create_app(state);

        // Port 0 lets the OS pick, so parallel tests never collide
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            pool,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Direct database access for seeding
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert a campus and return its id
    pub async fn seed_campus(&self) -> Result<Uuid> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO colleges (id, name) VALUES ($1, $2)")
            .bind(id)
            .bind(format!("Campus {}", unique_suffix()))
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    /// Insert a profile with the given role and mint a token for it
    pub async fn seed_account(&self, role: Role, campus_id: Option<Uuid>) -> Result<TestAccount> {
        let id = Uuid::new_v4();
        let suffix = unique_suffix();
        sqlx::query("INSERT INTO profiles (id, full_name, email, role, campus_id) VALUES ($1, $2, $3, $4, $5)")
            .bind(id)
            .bind(format!("Test User {suffix}"))
            .bind(format!("user{suffix}@example.com"))
            .bind(role.to_string())
            .bind(campus_id)
            .execute(&self.pool)
            .await?;

        let token = self.jwt.issue_token(id, None)?;
        Ok(TestAccount { id, token })
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).bearer_auth(token).json(body).send().await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.patch(&url).bearer_auth(token).json(body).send().await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.put(&url).bearer_auth(token).json(body).send().await?)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    for key in ["DATABASE_URL", "JWT_SECRET", "API_PORT"] {
        if std::env::var(key).is_err() {
            eprintln!("Skipping test: {key} not set");
            return false;
        }
    }
    true
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
