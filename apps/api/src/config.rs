use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Longest resume text accepted, in characters.
    pub max_resume_chars: usize,
    pub max_batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            max_resume_chars: 100_000,
            max_batch_size: 25,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_resume_chars: parse_env("MAX_RESUME_CHARS", defaults.max_resume_chars)?,
            max_batch_size: parse_env("MAX_BATCH_SIZE", defaults.max_batch_size)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
