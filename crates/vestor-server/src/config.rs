//! Server Configuration
//!
//! All configuration comes from environment variables; a `.env` file is
//! picked up by `main` for local development. Every setting has a default
//! so the server runs with no configuration at all.

use std::path::PathBuf;

/// Settings loaded from the environment at startup
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address to bind, e.g. `0.0.0.0:5000`
    pub bind_addr: String,

    /// Path of the JSON store document
    pub data_file: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into()),
            data_file: std::env::var("VESTOR_DATA_FILE")
                .unwrap_or_else(|_| "data/smartvestor.json".into())
                .into(),
        }
    }
}
