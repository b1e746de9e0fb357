use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_DIR: &str = ".cocode";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3030";
pub const DEFAULT_AI_ASSIST_ENDPOINT: &str = "/ai-assist";
pub const DEFAULT_AI_ASSIST_KEY: &str = "ctrl-m";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Base URL that relative endpoints are resolved against.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    #[serde(default = "default_ai_assist_endpoint")]
    pub ai_assist_endpoint: String,

    /// Extra fields merged into every AI assist request body.
    #[serde(default)]
    pub ai_assist_options: serde_json::Map<String, serde_json::Value>,

    #[serde(default = "default_ai_assist_timeout_secs")]
    pub ai_assist_timeout_secs: u64,

    #[serde(default = "default_ai_assist_key")]
    pub ai_assist_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Globs (relative to the workspace root) skipped when loading files.
    #[serde(default)]
    pub ignore: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_feed: Option<PathBuf>,
}

fn default_version() -> u32 {
    1
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_ai_assist_endpoint() -> String {
    DEFAULT_AI_ASSIST_ENDPOINT.to_string()
}

fn default_ai_assist_timeout_secs() -> u64 {
    30
}

fn default_ai_assist_key() -> String {
    DEFAULT_AI_ASSIST_KEY.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            server_url: default_server_url(),
            ai_assist_endpoint: default_ai_assist_endpoint(),
            ai_assist_options: serde_json::Map::new(),
            ai_assist_timeout_secs: default_ai_assist_timeout_secs(),
            ai_assist_key: default_ai_assist_key(),
            username: None,
            ignore: Vec::new(),
            presence_feed: None,
        }
    }
}

impl AppConfig {
    pub fn default_path(workspace_root: &Path) -> PathBuf {
        workspace_root.join(CONFIG_DIR).join("config.json")
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: AppConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", path.display()))?;
        Ok(cfg)
    }

    /// Full URL for the AI assist endpoint. Absolute endpoints are used as-is.
    pub fn ai_assist_url(&self) -> String {
        let ep = self.ai_assist_endpoint.as_str();
        if ep.starts_with("http://") || ep.starts_with("https://") {
            return ep.to_string();
        }
        let base = self.server_url.trim_end_matches('/');
        if ep.starts_with('/') {
            format!("{}{}", base, ep)
        } else {
            format!("{}/{}", base, ep)
        }
    }
}
