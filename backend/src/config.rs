use std::env;
use std::time::Duration;
use url::Url;

const DEFAULT_PORT: &str = "8081";
const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("Invalid UPSTREAM_URL: {0}")]
    UpstreamUrl(#[from] url::ParseError),
    #[error("UPSTREAM_URL must be http or https, got {0}")]
    UpstreamScheme(String),
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind_address: String,
    pub upstream_url: Url,
    pub frontend_dir: String,
    pub max_body_bytes: usize,
    pub upstream_timeout: Duration,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        port.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
            key: "PORT",
            value: port.clone(),
        })?;

        let upstream_url = Url::parse(
            &lookup("UPSTREAM_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
        )?;
        if !matches!(upstream_url.scheme(), "http" | "https") {
            return Err(ConfigError::UpstreamScheme(upstream_url.scheme().to_string()));
        }

        let frontend_dir = lookup("FRONTEND_DIR").unwrap_or_else(|| {
            match lookup("CARGO_MANIFEST_DIR") {
                Some(manifest_dir) => format!("{}/../frontend/dist", manifest_dir),
                None => "/usr/src/app/frontend/dist".to_string(),
            }
        });

        let max_body_bytes = parse_or("MAX_BODY_BYTES", &lookup, DEFAULT_MAX_BODY_BYTES)?;
        let timeout_secs =
            parse_or("UPSTREAM_TIMEOUT_SECS", &lookup, DEFAULT_UPSTREAM_TIMEOUT_SECS)?;

        Ok(Self {
            bind_address: format!("0.0.0.0:{}", port),
            upstream_url,
            frontend_dir,
            max_body_bytes,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
