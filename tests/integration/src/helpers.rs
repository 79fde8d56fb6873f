//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use forum_api::{create_app, create_app_state};
use forum_common::{
    AdminSeedConfig, AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, ServerConfig,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{unique_suffix, AuthResponse, LoginRequest, RegisterRequest, UserResponse};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Credentials of the admin account seeded for this server
    pub admin: LoginRequest,
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
        let admin = config
            .admin
            .as_ref()
            .map(|seed| LoginRequest {
                email: seed.email.clone(),
                password: seed.password.clone(),
            })
            .ok_or_else(|| anyhow::anyhow!("test config must seed an admin"))?;

        let state = create_app_state(&config).await?;
        let app = create_app(state, &config)?;

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            admin,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn authed(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {token}"))
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::authed(self.client.get(self.url(path)), token)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(Self::authed(self.client.post(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(Self::authed(self.client.patch(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::authed(self.client.delete(self.url(path)), token)
            .send()
            .await?)
    }

    /// Register a fresh account and log it in
    pub async fn new_user(&self) -> Result<Session> {
        let register = RegisterRequest::unique();
        let response = self.post("/api/auth/register", &register).await?;
        assert_status(response, StatusCode::CREATED).await?;
        self.login(&LoginRequest::from_register(&register)).await
    }

    /// Log in the seeded admin
    pub async fn admin_session(&self) -> Result<Session> {
        self.login(&self.admin).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Session> {
        let response = self.post("/api/auth/login", request).await?;
        let auth: AuthResponse = assert_json(response, StatusCode::OK).await?;
        Ok(Session {
            token: auth.access_token,
            refresh_token: auth.refresh_token,
            user: auth.user,
        })
    }
}

/// A logged-in account
#[derive(Debug)]
pub struct Session {
    pub token: String,
    pub refresh_token: String,
    pub user: UserResponse,
}

/// Build a test configuration from `DATABASE_URL`
///
/// Each server seeds its own admin so tests never depend on each other's
/// accounts.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set for integration tests"))?;

    Ok(AppConfig {
        app: AppSettings {
            name: "forum-integration".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry: 3600,
            refresh_token_expiry: 7200,
        },
        // Generous burst so the limiter never interferes with a test
        rate_limit: RateLimitConfig {
            requests_per_second: 1,
            burst: 10_000,
        },
        cors: CorsConfig::default(),
        admin: Some(AdminSeedConfig {
            email: format!("admin-{}@example.com", unique_suffix()),
            password: "admin-password".to_string(),
            name: "Test Admin".to_string(),
        }),
    })
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
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

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("error body without code: {body}"))
}
