use serde::{Deserialize, Serialize};

/// Configuration for the passport subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassportConfig {
    /// Endpoint of the document store node.
    pub ceramic_endpoint: String,
    /// Well-known alias the passport record is stored under.
    pub record_alias: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for PassportConfig {
    fn default() -> Self {
        Self {
            ceramic_endpoint: "http://localhost:7007".into(),
            record_alias: "passport".into(),
            log_level: "info".into(),
        }
    }
}
