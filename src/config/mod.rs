use dashmap::DashMap;
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use strum_macros::{Display, EnumString};

/// Environment variable selecting the runtime mode
pub const ENV_MODE: &str = "PLINTH_ENV";
/// Environment variable overriding the bind host
pub const ENV_HOST: &str = "HOST";
/// Environment variable overriding the bind port
pub const ENV_PORT: &str = "PORT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";

/// Runtime mode of the process, read from `PLINTH_ENV`
///
/// Parsing is case-insensitive; unset or unrecognized values mean production.
/// Development mode gates the doc-UI attachment during mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum RuntimeMode {
    Development,
    #[default]
    Production,
}

impl RuntimeMode {
    pub fn is_development(self) -> bool {
        matches!(self, RuntimeMode::Development)
    }
}

/// Configuration service
///
/// Snapshot of the process environment, taken once at construction.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    /// Runtime mode from `PLINTH_ENV`
    pub fn runtime_mode(&self) -> RuntimeMode {
        self.get(ENV_MODE)
            .and_then(|value| RuntimeMode::from_str(&value).ok())
            .unwrap_or_default()
    }

    /// Bind address from `HOST`/`PORT`, defaulting to 127.0.0.1:3000
    pub fn server_addr(&self) -> String {
        let host = self.get(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = self.get(ENV_PORT).unwrap_or_else(|| DEFAULT_PORT.to_string());
        format!("{host}:{port}")
    }
}
