//! Chat widget configuration from TOML (`[widget]` section)

use serde::{Deserialize, Serialize};

/// Identifiers of the embedded third-party chat widget
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWidgetConfig {
    pub integration_id: String,
    pub region: String,
    pub service_instance_id: String,
}

impl Default for FileWidgetConfig {
    fn default() -> Self {
        Self {
            integration_id: "56e4d9e6-aa05-43a4-89c0-f642d91961f0".to_string(),
            region: "au-syd".to_string(),
            service_instance_id: "2633d9e6-87e6-4d43-9765-028742da70fe".to_string(),
        }
    }
}
