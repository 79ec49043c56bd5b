//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works out of the box; an
//! empty endpoint simply surfaces as a fetch error in the UI.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// The hosted table the rows are fetched from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the hosted project (e.g. `https://xyz.supabase.co`).
    #[serde(default)]
    pub endpoint: String,
    /// API key sent as both `apikey` and bearer token. Optional for
    /// unauthenticated endpoints.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    /// Column holding the message text.
    #[serde(default = "default_column")]
    pub column: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            table: default_table(),
            column: default_column(),
        }
    }
}

/// UI behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval driving the loading spinner, in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_table() -> String {
    "message".to_string()
}
fn default_column() -> String {
    "message".to_string()
}
fn default_tick_ms() -> u64 {
    100
}
