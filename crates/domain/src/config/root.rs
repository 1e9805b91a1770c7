use serde::{Deserialize, Serialize};

use super::{
    ConfigError, DatabaseConfig, EnumerationConfig, LoggingConfig, ServerConfig, ToolsConfig,
};

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Overrides collected from the command line, applied on top of the loaded
/// (or default) configuration file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub tools: ToolsConfig,
    pub enumeration: EnumerationConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads configuration from a TOML file, falling back to defaults when
    /// no path is given, then applies CLI overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let content =
                    std::fs::read_to_string(p).map_err(|source| ConfigError::FileRead {
                        path: p.to_string(),
                        source,
                    })?;
                toml::from_str(&content)?
            }
            None => Config::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db_path) = overrides.database_path {
            self.database.path = db_path;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }
        if self.enumeration.max_concurrent_scans == 0 {
            return Err(ConfigError::Validation(
                "enumeration.max_concurrent_scans must be at least 1".to_string(),
            ));
        }
        if self.tools.subfinder_bin.is_empty() {
            return Err(ConfigError::Validation(
                "tools.subfinder_bin cannot be empty".to_string(),
            ));
        }
        if self.tools.sublist3r_python.is_empty() || self.tools.sublist3r_dir.is_empty() {
            return Err(ConfigError::Validation(
                "tools.sublist3r_python and tools.sublist3r_dir cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
