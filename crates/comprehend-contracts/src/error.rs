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

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] SerialisationError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {source}")]
    TomlParse {
        #[from]
        source: toml::de::Error,
    },
    #[error("Failed to parse YAML configuration: {source}")]
    YamlParse {
        #[from]
        source: serde_yaml::Error,
    },
    #[error("Failed to read configuration file '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: String },
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
    #[error("Missing required configuration: {field}")]
    MissingRequired { field: String },
}

#[derive(Error, Debug)]
pub enum SerialisationError {
    #[error("JSON serialisation failed: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("Failed to decode {operation} response: {source}")]
    Response {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The contract a single field broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationRule {
    Required,
    Length { min: usize, max: usize, actual: usize },
    Count { min: usize, max: usize, actual: usize },
    Pattern(&'static str),
    Range { min: i64, max: i64, actual: i64 },
    UnknownValue(String),
    MutuallyExclusive(&'static str),
    Conditional(String),
}

impl fmt::Display for ViolationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::Length { min, max, actual } => {
                write!(f, "length {actual} is outside {min}..={max}")
            }
            Self::Count { min, max, actual } => {
                write!(f, "has {actual} items, expected {min}..={max}")
            }
            Self::Pattern(pattern) => write!(f, "does not match pattern {pattern}"),
            Self::Range { min, max, actual } => {
                write!(f, "value {actual} is outside {min}..={max}")
            }
            Self::UnknownValue(value) => write!(f, "'{value}' is not a known value"),
            Self::MutuallyExclusive(other) => write!(f, "cannot be combined with {other}"),
            Self::Conditional(reason) => f.write_str(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted wire path, e.g. `InputDataConfig.AugmentedManifests[0].S3Uri`.
    pub field: String,
    pub rule: ViolationRule,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.rule)
    }
}

/// Every contract violation found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violations.as_slice() {
            [] => f.write_str("no violations"),
            [single] => write!(f, "{single}"),
            many => {
                write!(f, "{} violations: ", many.len())?;
                for (i, violation) in many.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    /// True when any violation was recorded against exactly this path.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl From<serde_json::Error> for ContractError {
    fn from(err: serde_json::Error) -> Self {
        ContractError::Serialisation(SerialisationError::Json { source: err })
    }
}

impl ContractError {
    pub fn category(&self) -> &'static str {
        match self {
            ContractError::Validation(_) => "Validation",
            ContractError::Config(_) => "Configuration",
            ContractError::Serialisation(_) => "Serialisation",
            ContractError::Io(_) => "I/O",
            ContractError::UnknownOperation(_) => "Operation",
        }
    }

    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            ContractError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type ContractResult<T> = std::result::Result<T, ContractError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display() {
        let errors = ValidationErrors {
            violations: vec![
                Violation {
                    field: "S3Uri".to_string(),
                    rule: ViolationRule::Required,
                },
                Violation {
                    field: "NumberOfTopics".to_string(),
                    rule: ViolationRule::Range {
                        min: 1,
                        max: 100,
                        actual: 0,
                    },
                },
            ],
        };

        assert_eq!(
            errors.to_string(),
            "2 violations: S3Uri is required; NumberOfTopics value 0 is outside 1..=100"
        );
        assert!(errors.has_field("S3Uri"));
        assert!(!errors.has_field("TestS3Uri"));
    }

    #[test]
    fn test_category() {
        let err = ContractError::from(ValidationErrors::default());
        assert_eq!(err.category(), "Validation");
        assert!(err.violations().is_some());

        let err = ContractError::UnknownOperation("Nope".to_string());
        assert_eq!(err.category(), "Operation");
        assert!(err.violations().is_none());
    }
}
