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

//! JSON 1.1 envelopes for the service. Building the HTTP call is left to the caller.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, warn};

use crate::config::{ClientConfig, ValidationMode};
use crate::error::{ContractResult, SerialisationError};
use crate::operations::{Operation, ServiceRequest};
use crate::validation::Validate;

pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Everything needed to issue one call, minus signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRequest {
    pub operation: Operation,
    pub target: String,
    pub content_type: String,
    pub endpoint: String,
    pub user_agent: String,
    pub body: String,
}

impl WireRequest {
    pub fn headers(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("X-Amz-Target", self.target.as_str()),
            ("Content-Type", self.content_type.as_str()),
            ("User-Agent", self.user_agent.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct WireCodec {
    config: ClientConfig,
}

impl WireCodec {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn user_agent(&self) -> String {
        let base = format!("comprehend-contracts/{}", env!("CARGO_PKG_VERSION"));
        match &self.config.user_agent_suffix {
            Some(suffix) if !suffix.is_empty() => format!("{base} {suffix}"),
            _ => base,
        }
    }

    /// Applies configured defaults, validates per the configured mode, then serialises.
    pub fn encode_request<R: ServiceRequest>(&self, request: &R) -> ContractResult<WireRequest> {
        let request: Cow<'_, R> = match &self.config.default_language_code {
            Some(code) => {
                let mut owned = request.clone();
                owned.apply_default_language(code);
                Cow::Owned(owned)
            }
            None => Cow::Borrowed(request),
        };
        let operation = R::OPERATION;

        match self.config.validation {
            ValidationMode::Off => {}
            ValidationMode::Warn => {
                if let Err(errors) = request.validate() {
                    warn!("{} request violates service contract: {}", operation, errors);
                }
            }
            ValidationMode::Strict => request.validate()?,
        }

        let body = if self.config.pretty_json {
            serde_json::to_string_pretty(&*request)?
        } else {
            serde_json::to_string(&*request)?
        };
        debug!("encoded {} request ({} bytes)", operation, body.len());

        Ok(WireRequest {
            operation,
            target: operation.target(),
            content_type: CONTENT_TYPE.to_string(),
            endpoint: self.config.resolved_endpoint(),
            user_agent: self.user_agent(),
            body,
        })
    }

    /// An empty body decodes as `{}`.
    pub fn decode_response<R: ServiceRequest>(&self, body: &str) -> ContractResult<R::Output> {
        let body = if body.trim().is_empty() { "{}" } else { body };
        let output = serde_json::from_str(body).map_err(|source| SerialisationError::Response {
            operation: R::OPERATION.name().to_string(),
            source,
        })?;
        debug!("decoded {} response", R::OPERATION);
        Ok(output)
    }
}

pub fn to_json<T: Serialize>(value: &T) -> ContractResult<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn from_json<T: DeserializeOwned>(body: &str) -> ContractResult<T> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContractError;
    use crate::requests::{DescribeTopicsDetectionJobRequest, DetectEntitiesRequest};
    use crate::responses::DetectEntitiesResult;
    use crate::types::{EntityType, JobStatus, LanguageCode};

    #[test]
    fn test_encode_envelope() {
        let codec = WireCodec::new(ClientConfig {
            region: "eu-central-1".to_string(),
            ..ClientConfig::default()
        });
        let request = DetectEntitiesRequest::default()
            .with_text("Jane works at Example Corp")
            .with_language_code(LanguageCode::En);
        let wire = codec.encode_request(&request).unwrap();
        assert_eq!(wire.target, "Comprehend_20171127.DetectEntities");
        assert_eq!(wire.content_type, CONTENT_TYPE);
        assert_eq!(wire.endpoint, "https://comprehend.eu-central-1.amazonaws.com");
        assert_eq!(
            wire.body,
            r#"{"Text":"Jane works at Example Corp","LanguageCode":"en"}"#
        );
        assert!(wire.headers().contains(&("X-Amz-Target", wire.target.as_str())));
    }

    #[test]
    fn test_strict_mode_refuses_invalid() {
        let codec = WireCodec::new(ClientConfig {
            validation: ValidationMode::Strict,
            ..ClientConfig::default()
        });
        let err = codec
            .encode_request(&DescribeTopicsDetectionJobRequest::default())
            .unwrap_err();
        assert!(matches!(err, ContractError::Validation(ref v) if v.has_field("JobId")));
    }

    #[test]
    fn test_warn_and_off_modes_still_encode() {
        for validation in [ValidationMode::Warn, ValidationMode::Off] {
            let codec = WireCodec::new(ClientConfig {
                validation,
                ..ClientConfig::default()
            });
            let wire = codec
                .encode_request(&DescribeTopicsDetectionJobRequest::default())
                .unwrap();
            assert_eq!(wire.body, "{}");
        }
    }

    #[test]
    fn test_default_language_filled() {
        let codec = WireCodec::new(ClientConfig {
            default_language_code: Some(LanguageCode::Ja),
            validation: ValidationMode::Strict,
            ..ClientConfig::default()
        });
        let request = DetectEntitiesRequest::default().with_text("東京");
        let wire = codec.encode_request(&request).unwrap();
        assert!(wire.body.contains(r#""LanguageCode":"ja""#));
        assert_eq!(request.language_code, None);
    }

    #[test]
    fn test_user_agent_suffix() {
        let codec = WireCodec::new(ClientConfig {
            user_agent_suffix: Some("batch-loader".to_string()),
            ..ClientConfig::default()
        });
        assert!(codec.user_agent().ends_with(" batch-loader"));
    }

    #[test]
    fn test_decode_response() {
        let codec = WireCodec::default();
        let result = codec
            .decode_response::<DetectEntitiesRequest>(
                r#"{"Entities":[{"Score":0.98,"Type":"PERSON","Text":"Jane","BeginOffset":0,"EndOffset":4}]}"#,
            )
            .unwrap();
        let entities = result.entities.unwrap();
        assert_eq!(entities[0].entity_type, Some(EntityType::Person));

        let empty: DetectEntitiesResult = codec
            .decode_response::<DetectEntitiesRequest>("  ")
            .unwrap();
        assert_eq!(empty, DetectEntitiesResult::default());
    }

    #[test]
    fn test_decode_error_names_operation() {
        let err = WireCodec::default()
            .decode_response::<DescribeTopicsDetectionJobRequest>("{not json")
            .unwrap_err();
        assert!(err.to_string().contains("DescribeTopicsDetectionJob"));
    }

    #[test]
    fn test_decode_unknown_status_is_preserved() {
        let output = WireCodec::default()
            .decode_response::<DescribeTopicsDetectionJobRequest>(
                r#"{"TopicsDetectionJobProperties":{"JobId":"j1","JobStatus":"PAUSED"}}"#,
            )
            .unwrap();
        let status = output
            .topics_detection_job_properties
            .and_then(|p| p.job_status)
            .unwrap();
        assert_eq!(status, JobStatus::Unknown("PAUSED".to_string()));
    }

    #[test]
    fn test_wire_request_serialises_operation_name() {
        let wire = WireCodec::default()
            .encode_request(&DescribeTopicsDetectionJobRequest::default().with_job_id("j1"))
            .unwrap();
        let json = to_json(&wire).unwrap();
        assert!(json.contains(r#""operation":"DescribeTopicsDetectionJob""#));
        let back: WireRequest = from_json(&json).unwrap();
        assert_eq!(back, wire);
    }
}
