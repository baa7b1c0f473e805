use anyhow::{Context, Result};
use std::net::SocketAddr;

pub const ADDR_ENV: &str = "TIMESHEETS_ADDR";
pub const LOG_ENV: &str = "TIMESHEETS_LOG";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub log_filter: String,
}

impl AppConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_addr = lookup(ADDR_ENV).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid socket addr for {ADDR_ENV}: {raw_addr}"))?;
        let log_filter = lookup(LOG_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Ok(Self { addr, log_filter })
    }
}
