// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};
use url::Url;

use crate::error::{ConfigError, ConfigResult};
use crate::types::LanguageCode;

/// How the wire codec treats contract violations before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    Off,
    #[default]
    Warn,
    Strict,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Off => "off",
            ValidationMode::Warn => "warn",
            ValidationMode::Strict => "strict",
        }
    }
}

impl FromStr for ValidationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(ValidationMode::Off),
            "warn" => Ok(ValidationMode::Warn),
            "strict" => Ok(ValidationMode::Strict),
            other => Err(ConfigError::InvalidValue {
                field: "validation".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_region")]
    pub region: String,
    /// Overrides the regional endpoint derived from `region`.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub validation: ValidationMode,
    #[serde(default)]
    pub pretty_json: bool,
    /// Filled into requests that leave `LanguageCode` unset.
    #[serde(default)]
    pub default_language_code: Option<LanguageCode>,
    #[serde(default)]
    pub user_agent_suffix: Option<String>,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint: None,
            validation: ValidationMode::default(),
            pretty_json: false,
            default_language_code: None,
            user_agent_suffix: None,
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let config: ClientConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a `.toml`, `.yaml` or `.yml` file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let path_display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::File {
            path: path_display.clone(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);
        let config = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat { path: path_display }),
        };
        info!("Loaded client configuration from {}", path_display);
        Ok(config)
    }

    /// Defaults overlaid with `COMPREHEND_*` variables, reading `.env` first.
    pub fn from_env() -> ConfigResult<Self> {
        dotenv().ok();
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup; unset keys leave fields alone.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(region) = lookup("COMPREHEND_REGION") {
            debug!("region overridden from environment: {}", region);
            self.region = region;
        }
        if let Some(endpoint) = lookup("COMPREHEND_ENDPOINT") {
            debug!("endpoint overridden from environment: {}", endpoint);
            self.endpoint = Some(endpoint);
        }
        if let Some(mode) = lookup("COMPREHEND_VALIDATION") {
            self.validation = mode.parse()?;
        }
        if let Some(pretty) = lookup("COMPREHEND_PRETTY_JSON") {
            self.pretty_json = match pretty.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => {
                    return Err(ConfigError::InvalidValue {
                        field: "pretty_json".to_string(),
                        value: other.to_string(),
                    })
                }
            };
        }
        if let Some(code) = lookup("COMPREHEND_LANGUAGE_CODE") {
            self.default_language_code = Some(LanguageCode::from(code.trim()));
        }
        self.validate()
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "region".to_string(),
            });
        }
        if let Some(endpoint) = &self.endpoint {
            let invalid = || ConfigError::InvalidValue {
                field: "endpoint".to_string(),
                value: endpoint.clone(),
            };
            let url = Url::parse(endpoint).map_err(|_| invalid())?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(invalid());
            }
        }
        if let Some(code) = &self.default_language_code {
            if !code.is_known() {
                return Err(ConfigError::InvalidValue {
                    field: "default_language_code".to_string(),
                    value: code.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The explicit endpoint, or the regional default.
    pub fn resolved_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://comprehend.{}.amazonaws.com", self.region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.validation, ValidationMode::Warn);
        assert_eq!(
            config.resolved_endpoint(),
            "https://comprehend.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ClientConfig::from_toml_str(
            r#"
            region = "eu-west-1"
            validation = "strict"
            default_language_code = "de"
            "#,
        )
        .unwrap();
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.validation, ValidationMode::Strict);
        assert_eq!(config.default_language_code, Some(LanguageCode::De));
        assert!(!config.pretty_json);
    }

    #[test]
    fn test_from_yaml() {
        let config = ClientConfig::from_yaml_str(
            "region: ap-south-1\nendpoint: http://localhost:4566\npretty_json: true\n",
        )
        .unwrap();
        assert_eq!(config.resolved_endpoint(), "http://localhost:4566");
        assert!(config.pretty_json);
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let err = ClientConfig::from_toml_str(r#"endpoint = "ftp://example.com""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "endpoint"));
    }

    #[test]
    fn test_rejects_unknown_validation_mode() {
        assert!(ClientConfig::from_toml_str(r#"validation = "loud""#).is_err());
        assert!("LOUD".parse::<ValidationMode>().is_err());
        assert_eq!("Strict".parse::<ValidationMode>().unwrap(), ValidationMode::Strict);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("COMPREHEND_REGION", "us-west-2"),
            ("COMPREHEND_VALIDATION", "off"),
            ("COMPREHEND_PRETTY_JSON", "yes"),
        ]
        .into_iter()
        .collect();
        let mut config = ClientConfig::default();
        config
            .apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.region, "us-west-2");
        assert_eq!(config.validation, ValidationMode::Off);
        assert!(config.pretty_json);
        assert_eq!(config.endpoint, None);
    }

    #[test]
    fn test_override_rejects_bad_bool() {
        let mut config = ClientConfig::default();
        let err = config
            .apply_overrides_from(|key| (key == "COMPREHEND_PRETTY_JSON").then(|| "maybe".into()))
            .unwrap_err();
        assert!(err.to_string().contains("pretty_json"));
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.ini");
        std::fs::write(&path, "region = x").unwrap();
        assert!(matches!(
            ClientConfig::from_file(&path),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ClientConfig::from_file(dir.path().join("absent.toml")),
            Err(ConfigError::File { .. })
        ));
    }
}
