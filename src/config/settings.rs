use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub scylla: ScyllaConfig,
    pub store_backend: StoreBackend,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ScyllaConfig {
    pub nodes: Vec<String>,
    pub keyspace: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Which storage implementation backs the stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Scylla,
    Memory,
}

impl Settings {
    pub fn from_env() -> Result<Self, String> {
        Ok(Settings {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .map_err(|e| format!("Invalid SERVER_PORT: {}", e))?,
            },
            scylla: ScyllaConfig {
                nodes: env::var("SCYLLA_NODES")
                    .unwrap_or_else(|_| "localhost:9042".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
                keyspace: env::var("SCYLLA_KEYSPACE").unwrap_or_else(|_| "trivia".to_string()),
                username: env::var("SCYLLA_USERNAME").ok(),
                password: env::var("SCYLLA_PASSWORD").ok(),
            },
            store_backend: match env::var("STORE_BACKEND")
                .unwrap_or_else(|_| "scylla".to_string())
                .to_lowercase()
                .as_str()
            {
                "scylla" => StoreBackend::Scylla,
                "memory" => StoreBackend::Memory,
                other => return Err(format!("Invalid STORE_BACKEND: {}", other)),
            },
        })
    }
}
