use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a working default so a bare `cargo run` serves
/// with the bundled data files.
#[derive(Debug, Clone)]
pub struct Config {
    pub skills_db_path: String,
    pub synonyms_db_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            skills_db_path: std::env::var("SKILLS_DB_PATH")
                .unwrap_or_else(|_| "data/skills_db.json".to_string()),
            synonyms_db_path: std::env::var("SYNONYMS_DB_PATH")
                .unwrap_or_else(|_| "data/synonyms_db.json".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
