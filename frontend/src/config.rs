use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

pub const DEFAULT_APP_TITLE: &str = "ZenX Connect";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "APP_TITLE")]
    pub app_title: Option<String>,
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to fetch runtime config: {0}")]
    Fetch(String),
    #[error("runtime config request returned status {0}")]
    Status(u16),
    #[error("invalid runtime config: {0}")]
    Parse(String),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

impl RuntimeConfig {
    /// Fields set on `other` win over fields set on `self`.
    pub fn overlay(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            app_title: other.app_title.or(self.app_title),
            log_level: other.log_level.or(self.log_level),
        }
    }

    pub fn title(&self) -> String {
        self.app_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_APP_TITLE)
            .to_string()
    }

    pub fn level(&self) -> Result<log::Level, ConfigError> {
        match self.log_level.as_deref().map(str::trim) {
            None | Some("") => Ok(DEFAULT_LOG_LEVEL),
            Some(raw) => log::Level::from_str(raw).map_err(|_| ConfigError::LogLevel(raw.into())),
        }
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn parse_runtime_config(raw: &str) -> Result<RuntimeConfig, ConfigError> {
    serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))
}

pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

/// Stores `cfg` unless another load got there first; returns the value that won.
fn cache_in(slot: &OnceLock<RuntimeConfig>, cfg: RuntimeConfig) -> RuntimeConfig {
    if let Err(lost) = slot.set(cfg) {
        log::debug!("runtime config already cached; dropping {lost:?}");
    }
    slot.get().cloned().unwrap_or_default()
}

fn cache(cfg: RuntimeConfig) -> RuntimeConfig {
    cache_in(&RUNTIME_CONFIG, cfg)
}

/// Log level known before the async load finishes: globals only.
pub fn initial_log_level() -> log::Level {
    let snapshot = snapshot_from_globals().unwrap_or_default();
    snapshot.level().unwrap_or_else(|err| {
        log::warn!("{err}; falling back to {DEFAULT_LOG_LEVEL}");
        DEFAULT_LOG_LEVEL
    })
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{parse_runtime_config, ConfigError, RuntimeConfig};

    const ENV_GLOBAL: &str = "__LEAVE_PORTAL_ENV";

    fn read_key(obj: &js_sys::Object, upper: &str, lower: &str) -> Option<String> {
        js_sys::Reflect::get(obj, &upper.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(obj, &lower.into()).ok())
            .and_then(|v| v.as_string())
    }

    // window.__LEAVE_PORTAL_ENV = { APP_TITLE: "...", LOG_LEVEL: "debug" }
    pub fn snapshot_from_globals() -> Option<RuntimeConfig> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &ENV_GLOBAL.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        Some(RuntimeConfig {
            app_title: read_key(&obj, "APP_TITLE", "app_title"),
            log_level: read_key(&obj, "LOG_LEVEL", "log_level"),
        })
    }

    fn config_url() -> Result<String, ConfigError> {
        let origin = web_sys::window()
            .ok_or_else(|| ConfigError::Fetch("no global `window`".into()))?
            .location()
            .origin()
            .map_err(|_| ConfigError::Fetch("window origin unavailable".into()))?;
        Ok(format!("{}/config.json", origin.trim_end_matches('/')))
    }

    pub async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
        let resp = reqwest::get(config_url()?)
            .await
            .map_err(|err| ConfigError::Fetch(err.to_string()))?;
        if !resp.status().is_success() {
            return Err(ConfigError::Status(resp.status().as_u16()));
        }
        let body = resp
            .text()
            .await
            .map_err(|err| ConfigError::Fetch(err.to_string()))?;
        parse_runtime_config(&body)
    }
}

#[cfg(target_arch = "wasm32")]
use browser::{fetch_runtime_config, snapshot_from_globals};

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    Err(ConfigError::Fetch("config.json is only served to the browser".into()))
}

/// Loads the runtime config once. Globals win over `config.json`; any
/// failure leaves the defaults in place.
pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let from_file = match fetch_runtime_config().await {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("{err}; using default runtime config");
            RuntimeConfig::default()
        }
    };
    let merged = match snapshot_from_globals() {
        Some(globals) => from_file.overlay(globals),
        None => from_file,
    };
    if let Err(err) = merged.level() {
        log::warn!("{err}");
    }
    log::info!("runtime config loaded (title: {})", merged.title());
    cache(merged)
}
