use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_CERTIFICATES_FILE: &str = "data/certificates.json";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// When set, certificates are read from PostgreSQL instead of the JSON file.
    pub database_url: Option<String>,
    pub certificates_file: PathBuf,
    /// Replaces the built-in job role catalog when set.
    pub job_roles_file: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            certificates_file: optional_env("CERTIFICATES_FILE")
                .unwrap_or_else(|| DEFAULT_CERTIFICATES_FILE.to_string())
                .into(),
            job_roles_file: optional_env("JOB_ROLES_FILE").map(PathBuf::from),
            port: parse_port(std::env::var("PORT").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    raw.unwrap_or_else(|| "8080".to_string())
        .parse::<u16>()
        .context("PORT must be a valid port number")
}
