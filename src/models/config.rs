//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings read once at startup.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Location of the SQLite database file.
    pub database_url: String,
}
