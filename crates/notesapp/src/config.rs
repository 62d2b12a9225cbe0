//! # Configuration
//!
//! Server configuration is a [`confique`] struct, loaded by the binary through
//! `clapfig`, which layers TOML files, environment variables and command-line
//! overrides.
//!
//! ## Resolution Order
//!
//! 1. **Command-line flags**: `--host`, `--port`, `--data-file`.
//! 2. **Environment variables**: `NOTES__PORT`, `NOTES__DATA_FILE`, etc.
//! 3. **Local Config**: `./notes.toml`.
//! 4. **User Config**: OS-appropriate config directory (via `directories` crate).
//! 5. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `app_name` | `Notes API` | Name reported by `/` and `/info` |
//! | `description` | see below | Description reported by `/info` |
//! | `host` | `0.0.0.0` | Bind address |
//! | `port` | `8000` | Bind port |
//! | `data_file` | unset | JSON file mirror. Unset means in-memory only |
//! | `default_per_page` | `10` | Page size when a request omits `per_page` |
//! | `max_per_page` | `100` | Upper bound for `per_page` |
//! | `cors_origins` | `["*"]` | Allowed CORS origins |
//! | `log_format` | `text` | `text` or `json` |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{NotesError, Result};
use crate::pagination::{DEFAULT_MAX_PER_PAGE, DEFAULT_PER_PAGE};

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

/// `*`, or an `http(s)://host[:port]` origin made of visible ASCII.
fn is_valid_origin(origin: &str) -> bool {
    if origin == "*" {
        return true;
    }
    let host = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"));
    match host {
        Some(host) => {
            !host.is_empty()
                && !host.contains('/')
                && host.bytes().all(|b| b.is_ascii_graphic())
        }
        None => false,
    }
}

/// Configuration for the notes server, stored in `notes.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Name reported by the health and info endpoints
    #[config(default = "Notes API")]
    pub app_name: String,

    /// Description reported by the info endpoint
    #[config(default = "A REST API for managing notes with full CRUD operations")]
    pub description: String,

    /// Address to bind
    #[config(default = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[config(default = 8000)]
    pub port: u16,

    /// Path of the JSON file mirroring the store.
    /// When absent, notes live in memory only and are lost on exit.
    pub data_file: Option<PathBuf>,

    /// Page size used when a list request does not specify one
    #[config(default = 10)]
    pub default_per_page: usize,

    /// Largest page size a client may request; larger values are clamped
    #[config(default = 100)]
    pub max_per_page: usize,

    /// Allowed CORS origins. "*" allows any origin.
    /// When absent, defaults to ["*"].
    pub cors_origins: Option<Vec<String>>,

    /// Log output format: "text" or "json"
    #[config(default = "text")]
    pub log_format: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            app_name: "Notes API".to_string(),
            description: "A REST API for managing notes with full CRUD operations".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            data_file: None,
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: DEFAULT_MAX_PER_PAGE,
            cors_origins: None,
            log_format: "text".to_string(),
        }
    }
}

impl NotesConfig {
    /// Get CORS origins, using the permissive default if not configured.
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_origins
            .clone()
            .unwrap_or_else(default_cors_origins)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins().iter().any(|o| o == "*")
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(NotesError::Config("port must be non-zero".to_string()));
        }
        if self.max_per_page == 0 {
            return Err(NotesError::Config(
                "max_per_page must be at least 1".to_string(),
            ));
        }
        if self.default_per_page == 0 || self.default_per_page > self.max_per_page {
            return Err(NotesError::Config(format!(
                "default_per_page must be between 1 and max_per_page ({})",
                self.max_per_page
            )));
        }
        match self.log_format.to_ascii_lowercase().as_str() {
            "text" | "json" => {}
            other => {
                return Err(NotesError::Config(format!(
                    "log_format must be \"text\" or \"json\" (got \"{}\")",
                    other
                )))
            }
        }
        if let Some(bad) = self.cors_origins().iter().find(|o| !is_valid_origin(o)) {
            return Err(NotesError::Config(format!(
                "cors_origins entries must be \"*\" or an http(s) origin (got {:?})",
                bad
            )));
        }
        if self
            .data_file
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(NotesError::Config("data_file must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NotesConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.data_file, None);
        assert_eq!(config.cors_origins(), vec!["*"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        let config = NotesConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..Default::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_cors_origins_custom() {
        let config = NotesConfig {
            cors_origins: Some(vec!["http://localhost:3000".to_string()]),
            ..Default::default()
        };
        assert!(!config.allows_any_origin());
        assert_eq!(config.cors_origins(), vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_malformed_cors_origin_is_invalid() {
        for bad in ["http://bad\norigin", "localhost:3000", "https://", "http://a.example/"] {
            let config = NotesConfig {
                cors_origins: Some(vec!["http://ok.example".to_string(), bad.to_string()]),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(NotesError::Config(_))),
                "{:?} should be rejected",
                bad
            );
        }

        let config = NotesConfig {
            cors_origins: Some(vec![
                "*".to_string(),
                "https://notes.example:8443".to_string(),
            ]),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_per_page_above_max_is_invalid() {
        let config = NotesConfig {
            default_per_page: 50,
            max_per_page: 20,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(NotesError::Config(_))));
    }

    #[test]
    fn test_zero_port_is_invalid() {
        let config = NotesConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_log_format_is_invalid() {
        let config = NotesConfig {
            log_format: "yaml".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let json = NotesConfig {
            log_format: "JSON".to_string(),
            ..Default::default()
        };
        assert!(json.validate().is_ok());
        assert!(json.json_logs());
    }
}
