use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,

    pub web_port: u16,

    /// Directory served as the static frontend fallback.
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            web_port: 5000,
            static_dir: "./html".to_string(),
        }
    }
}
