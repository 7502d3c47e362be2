//! Environment-backed configuration.

use std::path::PathBuf;

use anyhow::Context;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the back-office API.
    pub api_url: String,
    /// Where the bearer token is stored between runs.
    pub token_file: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = std::env::var("BAYDESK_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let token_file = match std::env::var("BAYDESK_TOKEN_FILE") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_token_path()?,
        };

        Ok(Self {
            api_url,
            token_file,
        })
    }
}

fn default_token_path() -> anyhow::Result<PathBuf> {
    let home =
        std::env::var("HOME").context("HOME is not set; set BAYDESK_TOKEN_FILE explicitly")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("baydesk")
        .join("token.json"))
}
