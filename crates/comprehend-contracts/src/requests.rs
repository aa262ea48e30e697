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

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data_config::{
    DocumentClassifierInputDataConfig, DocumentClassifierOutputDataConfig, DocumentReaderConfig,
    EntityRecognizerInputDataConfig, InputDataConfig, OutputDataConfig, RedactionConfig, Tag,
    VpcConfig,
};
use crate::display::render;
use crate::types::{DocumentClassifierMode, LanguageCode, PiiEntitiesDetectionMode};

/// Trains a custom document classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateDocumentClassifierRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_classifier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    /// Role that grants the service read access to the training data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<DocumentClassifierInputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<DocumentClassifierOutputDataConfig>,
    /// Idempotency token. Resending a request with the same token is a no-op.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<DocumentClassifierMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_kms_key_id: Option<String>,
    /// Resource-based policy document (JSON) attached to the trained model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_policy: Option<String>,
}

with_fields!(CreateDocumentClassifierRequest {
    value with_document_classifier_name => document_classifier_name: String,
    value with_version_name => version_name: String,
    value with_data_access_role_arn => data_access_role_arn: String,
    list with_tags => tags: Tag,
    value with_input_data_config => input_data_config: DocumentClassifierInputDataConfig,
    value with_output_data_config => output_data_config: DocumentClassifierOutputDataConfig,
    value with_client_request_token => client_request_token: String,
    value with_language_code => language_code: LanguageCode,
    value with_volume_kms_key_id => volume_kms_key_id: String,
    value with_vpc_config => vpc_config: VpcConfig,
    value with_mode => mode: DocumentClassifierMode,
    value with_model_kms_key_id => model_kms_key_id: String,
    value with_model_policy => model_policy: String,
});

impl fmt::Display for CreateDocumentClassifierRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("DocumentClassifierName", &self.document_classifier_name)
            .field("VersionName", &self.version_name)
            .field("DataAccessRoleArn", &self.data_access_role_arn)
            .list("Tags", &self.tags)
            .field("InputDataConfig", &self.input_data_config)
            .field("OutputDataConfig", &self.output_data_config)
            .field("ClientRequestToken", &self.client_request_token)
            .field("LanguageCode", &self.language_code)
            .field("VolumeKmsKeyId", &self.volume_kms_key_id)
            .field("VpcConfig", &self.vpc_config)
            .field("Mode", &self.mode)
            .field("ModelKmsKeyId", &self.model_kms_key_id)
            .field("ModelPolicy", &self.model_policy)
            .finish()
    }
}

/// Trains a custom entity recognizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateEntityRecognizerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognizer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<EntityRecognizerInputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_policy: Option<String>,
}

with_fields!(CreateEntityRecognizerRequest {
    value with_recognizer_name => recognizer_name: String,
    value with_version_name => version_name: String,
    value with_data_access_role_arn => data_access_role_arn: String,
    list with_tags => tags: Tag,
    value with_input_data_config => input_data_config: EntityRecognizerInputDataConfig,
    value with_client_request_token => client_request_token: String,
    value with_language_code => language_code: LanguageCode,
    value with_volume_kms_key_id => volume_kms_key_id: String,
    value with_vpc_config => vpc_config: VpcConfig,
    value with_model_kms_key_id => model_kms_key_id: String,
    value with_model_policy => model_policy: String,
});

impl fmt::Display for CreateEntityRecognizerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("RecognizerName", &self.recognizer_name)
            .field("VersionName", &self.version_name)
            .field("DataAccessRoleArn", &self.data_access_role_arn)
            .list("Tags", &self.tags)
            .field("InputDataConfig", &self.input_data_config)
            .field("ClientRequestToken", &self.client_request_token)
            .field("LanguageCode", &self.language_code)
            .field("VolumeKmsKeyId", &self.volume_kms_key_id)
            .field("VpcConfig", &self.vpc_config)
            .field("ModelKmsKeyId", &self.model_kms_key_id)
            .field("ModelPolicy", &self.model_policy)
            .finish()
    }
}

/// Synchronous named-entity detection on a single document.
///
/// Supply either `text` or `bytes`, never both. Raw bytes (PDF, Word,
/// images) are only accepted by custom recognizer endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetectEntitiesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Ignored by the service when `endpoint_arn` is set; the custom model's
    /// own language is used instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_arn: Option<String>,
    #[serde(
        with = "crate::serde_ext::blob",
        skip_serializing_if = "Option::is_none"
    )]
    pub bytes: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_reader_config: Option<DocumentReaderConfig>,
}

with_fields!(DetectEntitiesRequest {
    value with_text => text: String,
    value with_language_code => language_code: LanguageCode,
    value with_endpoint_arn => endpoint_arn: String,
    value with_bytes => bytes: Vec<u8>,
    value with_document_reader_config => document_reader_config: DocumentReaderConfig,
});

impl fmt::Display for DetectEntitiesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("Text", &self.text)
            .field("LanguageCode", &self.language_code)
            .field("EndpointArn", &self.endpoint_arn)
            .bytes("Bytes", &self.bytes)
            .field("DocumentReaderConfig", &self.document_reader_config)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeDocumentClassifierRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_classifier_arn: Option<String>,
}

with_fields!(DescribeDocumentClassifierRequest {
    value with_document_classifier_arn => document_classifier_arn: String,
});

impl fmt::Display for DescribeDocumentClassifierRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("DocumentClassifierArn", &self.document_classifier_arn)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeEntityRecognizerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_recognizer_arn: Option<String>,
}

with_fields!(DescribeEntityRecognizerRequest {
    value with_entity_recognizer_arn => entity_recognizer_arn: String,
});

impl fmt::Display for DescribeEntityRecognizerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("EntityRecognizerArn", &self.entity_recognizer_arn)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartEventsDetectionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<InputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_event_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

with_fields!(StartEventsDetectionJobRequest {
    value with_input_data_config => input_data_config: InputDataConfig,
    value with_output_data_config => output_data_config: OutputDataConfig,
    value with_data_access_role_arn => data_access_role_arn: String,
    value with_job_name => job_name: String,
    value with_language_code => language_code: LanguageCode,
    value with_client_request_token => client_request_token: String,
    list with_target_event_types => target_event_types: String,
    list with_tags => tags: Tag,
});

impl fmt::Display for StartEventsDetectionJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("InputDataConfig", &self.input_data_config)
            .field("OutputDataConfig", &self.output_data_config)
            .field("DataAccessRoleArn", &self.data_access_role_arn)
            .field("JobName", &self.job_name)
            .field("LanguageCode", &self.language_code)
            .field("ClientRequestToken", &self.client_request_token)
            .list("TargetEventTypes", &self.target_event_types)
            .list("Tags", &self.tags)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartPiiEntitiesDetectionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<InputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<PiiEntitiesDetectionMode>,
    /// Required when `mode` is `ONLY_REDACTION`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redaction_config: Option<RedactionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

with_fields!(StartPiiEntitiesDetectionJobRequest {
    value with_input_data_config => input_data_config: InputDataConfig,
    value with_output_data_config => output_data_config: OutputDataConfig,
    value with_mode => mode: PiiEntitiesDetectionMode,
    value with_redaction_config => redaction_config: RedactionConfig,
    value with_data_access_role_arn => data_access_role_arn: String,
    value with_job_name => job_name: String,
    value with_language_code => language_code: LanguageCode,
    value with_client_request_token => client_request_token: String,
    list with_tags => tags: Tag,
});

impl fmt::Display for StartPiiEntitiesDetectionJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("InputDataConfig", &self.input_data_config)
            .field("OutputDataConfig", &self.output_data_config)
            .field("Mode", &self.mode)
            .field("RedactionConfig", &self.redaction_config)
            .field("DataAccessRoleArn", &self.data_access_role_arn)
            .field("JobName", &self.job_name)
            .field("LanguageCode", &self.language_code)
            .field("ClientRequestToken", &self.client_request_token)
            .list("Tags", &self.tags)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartTopicsDetectionJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<InputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    /// Number of topics to extract. The service defaults to 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_topics: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

with_fields!(StartTopicsDetectionJobRequest {
    value with_input_data_config => input_data_config: InputDataConfig,
    value with_output_data_config => output_data_config: OutputDataConfig,
    value with_data_access_role_arn => data_access_role_arn: String,
    value with_job_name => job_name: String,
    value with_number_of_topics => number_of_topics: i32,
    value with_client_request_token => client_request_token: String,
    value with_volume_kms_key_id => volume_kms_key_id: String,
    value with_vpc_config => vpc_config: VpcConfig,
    list with_tags => tags: Tag,
});

impl fmt::Display for StartTopicsDetectionJobRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("InputDataConfig", &self.input_data_config)
            .field("OutputDataConfig", &self.output_data_config)
            .field("DataAccessRoleArn", &self.data_access_role_arn)
            .field("JobName", &self.job_name)
            .field("NumberOfTopics", &self.number_of_topics)
            .field("ClientRequestToken", &self.client_request_token)
            .field("VolumeKmsKeyId", &self.volume_kms_key_id)
            .field("VpcConfig", &self.vpc_config)
            .list("Tags", &self.tags)
            .finish()
    }
}

/// Looks up one asynchronous job by id. Shared by the events, PII and topics
/// describe operations, which take the same body.
macro_rules! describe_job_request {
    ($($name:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(rename_all = "PascalCase", default)]
            pub struct $name {
                #[serde(skip_serializing_if = "Option::is_none")]
                pub job_id: Option<String>,
            }

            with_fields!($name {
                value with_job_id => job_id: String,
            });

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    render(f).field("JobId", &self.job_id).finish()
                }
            }
        )+
    };
}

describe_job_request!(
    DescribeEventsDetectionJobRequest,
    DescribePiiEntitiesDetectionJobRequest,
    DescribeTopicsDetectionJobRequest,
);
