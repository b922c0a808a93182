use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tokio::sync::OnceCell;

use navdash_api::config::{
    AppConfig, DatabaseConfig, SecurityConfig, ServerConfig, WeatherConfig,
    DEFAULT_WEATHER_API_URL,
};
use navdash_api::state::AppState;

static SERVER: OnceCell<TestServer> = OnceCell::const_new();

/// Signing secret shared between the test server and token assertions.
pub const JWT_SECRET: &str = "navdash-test-secret";

/// Password used by the registration helper.
pub const PASSWORD: &str = "password123";

pub struct TestServer {
    pub base_url: String,
    // Keeps the database file alive for the duration of the test run
    _db_dir: tempfile::TempDir,
}

impl TestServer {
    /// Boot the real router in-process against a throwaway database file.
    /// Each test binary gets its own server and database.
    async fn start() -> Result<Self> {
        let db_dir = tempfile::tempdir().context("failed to create temp dir")?;
        let db_path = db_dir.path().join("nav-test.db");

        let config = AppConfig {
            server: ServerConfig { port: 0 },
            database: DatabaseConfig {
                path: db_path.to_string_lossy().into_owned(),
                max_connections: 5,
            },
            security: SecurityConfig {
                jwt_secret: JWT_SECRET.to_string(),
                token_expiry_days: 7,
                // Minimum cost keeps the hashing-heavy suites fast
                bcrypt_cost: 4,
            },
            weather: WeatherConfig {
                api_url: DEFAULT_WEATHER_API_URL.to_string(),
            },
        };

        let state = AppState::new(config)
            .await
            .context("failed to initialize app state")?;
        let app = navdash_api::app(state);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
            .await
            .context("failed to bind test listener")?;
        let port = listener.local_addr().context("missing local addr")?.port();
        let base_url = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server");
        });

        let server = Self {
            base_url,
            _db_dir: db_dir,
        };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> &'static TestServer {
    SERVER
        .get_or_init(|| async {
            TestServer::start()
                .await
                .expect("failed to start test server")
        })
        .await
}

/// Register a user and return (token, user id).
pub async fn register_user(server: &TestServer, username: &str) -> Result<(String, i64)> {
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": PASSWORD }))
        .send()
        .await?;

    anyhow::ensure!(
        res.status() == StatusCode::OK,
        "registration of {} failed: {}",
        username,
        res.status()
    );

    let body: serde_json::Value = res.json().await?;
    let token = body["data"]["token"]
        .as_str()
        .context("missing token")?
        .to_string();
    let id = body["data"]["user"]["id"]
        .as_i64()
        .context("missing user id")?;
    Ok((token, id))
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
