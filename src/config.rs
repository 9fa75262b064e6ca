use std::time::Duration;

fn host() -> String {
    std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into())
}

fn port(default: u16) -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone)]
pub struct UsersConfig {
    pub host: String,
    pub port: u16,
}

impl UsersConfig {
    pub fn from_env() -> Self {
        Self {
            host: host(),
            port: port(5000),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TodosConfig {
    pub host: String,
    pub port: u16,
    pub users_service_url: String,
    pub user_lookup_timeout: Duration,
}

impl TodosConfig {
    pub fn from_env() -> Self {
        Self {
            host: host(),
            port: port(5001),
            users_service_url: std::env::var("USERS_SERVICE_URL")
                .unwrap_or_else(|_| "http://users-service:80".into()),
            user_lookup_timeout: Duration::from_secs(
                std::env::var("USER_LOOKUP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(5),
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            host: host(),
            port: port(8000),
        }
    }
}
