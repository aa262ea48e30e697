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

//! Opt-in checking of the service's declared field contracts.
//!
//! Nothing here runs when a value is built. Callers (or the wire codec,
//! depending on its `ValidationMode`) ask for a pass explicitly and get every
//! violation at once, each tagged with its wire path.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::data_config::{
    AugmentedManifestsListItem, DocumentClassifierInputDataConfig,
    DocumentClassifierOutputDataConfig, DocumentReaderConfig, EntityRecognizerAnnotations,
    EntityRecognizerDocuments, EntityRecognizerEntityList, EntityRecognizerInputDataConfig,
    EntityTypesListItem, InputDataConfig, OutputDataConfig, RedactionConfig, Tag, VpcConfig,
};
use crate::error::{ValidationErrors, Violation, ViolationRule};
use crate::requests::{
    CreateDocumentClassifierRequest, CreateEntityRecognizerRequest,
    DescribeDocumentClassifierRequest, DescribeEntityRecognizerRequest,
    DescribeEventsDetectionJobRequest, DescribePiiEntitiesDetectionJobRequest,
    DescribeTopicsDetectionJobRequest, DetectEntitiesRequest, StartEventsDetectionJobRequest,
    StartPiiEntitiesDetectionJobRequest, StartTopicsDetectionJobRequest,
};
use crate::types::{
    DocumentClassifierDataFormat, DocumentReadAction, EntityRecognizerDataFormat,
    PiiEntitiesDetectionMode, WireEnum,
};

static S3_URI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^s3://[a-z0-9][\.\-a-z0-9]{1,61}[a-z0-9](/.*)?$").unwrap());
static IAM_ROLE_ARN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^arn:aws(-[^:]+)?:iam::[0-9]{12}:role/.+$").unwrap());
static ARN_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9](-*[a-zA-Z0-9])*$").unwrap());
static JOB_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\p{L}\p{Z}\p{N}_.:/=+\-%@]*)$").unwrap());
static CLIENT_REQUEST_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").unwrap());
static LABEL_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ ~!@#$%^*\-_+=|\\:;\t>?/]$").unwrap());
static KMS_KEY_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\x00-\x7F]+$").unwrap());
static ENDPOINT_ARN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^arn:aws(-[^:]+)?:comprehend:[a-zA-Z0-9-]*:[0-9]{12}:entity-recognizer-endpoint/[a-zA-Z0-9](-*[a-zA-Z0-9])*$",
    )
    .unwrap()
});
static CLASSIFIER_ARN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^arn:aws(-[^:]+)?:comprehend:[a-zA-Z0-9-]*:[0-9]{12}:document-classifier/[a-zA-Z0-9](-*[a-zA-Z0-9])*(/version/[a-zA-Z0-9](-*[a-zA-Z0-9])*)?$",
    )
    .unwrap()
});
static RECOGNIZER_ARN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^arn:aws(-[^:]+)?:comprehend:[a-zA-Z0-9-]*:[0-9]{12}:entity-recognizer/[a-zA-Z0-9](-*[a-zA-Z0-9])*(/version/[a-zA-Z0-9](-*[a-zA-Z0-9])*)?$",
    )
    .unwrap()
});
static VPC_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-0-9a-zA-Z]+$").unwrap());
static ENTITY_TYPE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\n\r\t,]+$").unwrap());
static EVENT_TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z_]*$").unwrap());
static MASK_CHARACTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[!@#$%&*]$").unwrap());
static MODEL_POLICY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\t\n\r\x20-\xFF]+$").unwrap());

/// Largest synchronous text payload, in UTF-8 bytes.
pub const MAX_TEXT_BYTES: usize = 100_000;

pub trait Validate {
    fn validate_into(&self, validator: &mut Validator);

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut validator = Validator::new();
        self.validate_into(&mut validator);
        validator.finish()
    }
}

/// Collects violations while walking a value tree.
#[derive(Debug, Default)]
pub struct Validator {
    path: Vec<String>,
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn path_for(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.path.join("."), field)
        }
    }

    pub fn violation(&mut self, field: &str, rule: ViolationRule) {
        let field = self.path_for(field);
        debug!("contract violation: {} {}", field, rule);
        self.violations.push(Violation { field, rule });
    }

    /// Records `Required` when absent; returns whether the value is present.
    pub fn required<T>(&mut self, field: &str, value: &Option<T>) -> bool {
        if value.is_none() {
            self.violation(field, ViolationRule::Required);
            return false;
        }
        true
    }

    /// Character-count bounds on an optional string; returns whether they hold.
    pub fn length(&mut self, field: &str, value: &Option<String>, min: usize, max: usize) -> bool {
        if let Some(value) = value {
            let actual = value.chars().count();
            if actual < min || actual > max {
                self.violation(field, ViolationRule::Length { min, max, actual });
                return false;
            }
        }
        true
    }

    pub fn pattern(&mut self, field: &str, value: &Option<String>, regex: &'static Lazy<Regex>) {
        if let Some(value) = value {
            let regex: &'static Regex = Lazy::force(regex);
            if !regex.is_match(value) {
                self.violation(field, ViolationRule::Pattern(regex.as_str()));
            }
        }
    }

    pub fn range(&mut self, field: &str, value: Option<i32>, min: i32, max: i32) {
        if let Some(actual) = value {
            if actual < min || actual > max {
                self.violation(
                    field,
                    ViolationRule::Range {
                        min: min.into(),
                        max: max.into(),
                        actual: actual.into(),
                    },
                );
            }
        }
    }

    pub fn count<T>(&mut self, field: &str, value: &Option<Vec<T>>, min: usize, max: usize) {
        if let Some(items) = value {
            let actual = items.len();
            if actual < min || actual > max {
                self.violation(field, ViolationRule::Count { min, max, actual });
            }
        }
    }

    pub fn known<E: WireEnum>(&mut self, field: &str, value: &Option<E>) {
        if let Some(value) = value {
            if !value.is_known() {
                self.violation(field, ViolationRule::UnknownValue(value.as_str().to_string()));
            }
        }
    }

    pub fn known_each<E: WireEnum>(&mut self, field: &str, values: &Option<Vec<E>>) {
        for (i, value) in values.iter().flatten().enumerate() {
            if !value.is_known() {
                self.violation(
                    &format!("{field}[{i}]"),
                    ViolationRule::UnknownValue(value.as_str().to_string()),
                );
            }
        }
    }

    /// Applies `check` to every string of a list, addressing each by index.
    pub fn each_string<F>(&mut self, field: &str, values: &Option<Vec<String>>, mut check: F)
    where
        F: FnMut(&mut Self, &str, &Option<String>),
    {
        for (i, value) in values.iter().flatten().enumerate() {
            check(self, &format!("{field}[{i}]"), &Some(value.clone()));
        }
    }

    pub fn nested<T: Validate>(&mut self, field: &str, value: &Option<T>) {
        if let Some(value) = value {
            self.path.push(field.to_string());
            value.validate_into(self);
            self.path.pop();
        }
    }

    pub fn nested_each<T: Validate>(&mut self, field: &str, values: &Option<Vec<T>>) {
        for (i, value) in values.iter().flatten().enumerate() {
            self.path.push(format!("{field}[{i}]"));
            value.validate_into(self);
            self.path.pop();
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                violations: self.violations,
            })
        }
    }

    fn s3_uri(&mut self, field: &str, value: &Option<String>) {
        if self.length(field, value, 0, 1024) {
            self.pattern(field, value, &S3_URI);
        }
    }

    fn role_arn(&mut self, field: &str, value: &Option<String>) {
        if self.length(field, value, 20, 2048) {
            self.pattern(field, value, &IAM_ROLE_ARN);
        }
    }

    fn arn_name(&mut self, field: &str, value: &Option<String>) {
        if self.length(field, value, 0, 63) {
            self.pattern(field, value, &ARN_NAME);
        }
    }

    fn job_name(&mut self, field: &str, value: &Option<String>) {
        if self.length(field, value, 1, 256) {
            self.pattern(field, value, &JOB_NAME);
        }
    }

    fn job_id(&mut self, field: &str, value: &Option<String>) {
        if self.length(field, value, 1, 32) {
            self.pattern(field, value, &JOB_NAME);
        }
    }

    fn client_request_token(&mut self, field: &str, value: &Option<String>) {
        if self.length(field, value, 1, 64) {
            self.pattern(field, value, &CLIENT_REQUEST_TOKEN);
        }
    }

    fn kms_key_id(&mut self, field: &str, value: &Option<String>) {
        if self.length(field, value, 0, 2048) {
            self.pattern(field, value, &KMS_KEY_ID);
        }
    }

    fn model_policy(&mut self, field: &str, value: &Option<String>) {
        if self.length(field, value, 1, 20_000) {
            self.pattern(field, value, &MODEL_POLICY);
        }
    }
}

impl Validate for AugmentedManifestsListItem {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("S3Uri", &self.s3_uri) {
            v.s3_uri("S3Uri", &self.s3_uri);
        }
        v.known("Split", &self.split);
        if v.required("AttributeNames", &self.attribute_names) {
            v.each_string("AttributeNames", &self.attribute_names, |v, field, value| {
                v.arn_name(field, value);
            });
        }
        v.s3_uri("AnnotationDataS3Uri", &self.annotation_data_s3_uri);
        v.s3_uri("SourceDocumentsS3Uri", &self.source_documents_s3_uri);
        v.known("DocumentType", &self.document_type);
    }
}

impl Validate for DocumentClassifierInputDataConfig {
    fn validate_into(&self, v: &mut Validator) {
        v.known("DataFormat", &self.data_format);
        match self.data_format {
            None | Some(DocumentClassifierDataFormat::ComprehendCsv) => {
                if self.s3_uri.is_none() {
                    v.violation(
                        "S3Uri",
                        ViolationRule::Conditional(
                            "is required when DataFormat is COMPREHEND_CSV".to_string(),
                        ),
                    );
                }
            }
            Some(DocumentClassifierDataFormat::AugmentedManifest) => {
                if self.augmented_manifests.as_ref().map_or(true, Vec::is_empty) {
                    v.violation(
                        "AugmentedManifests",
                        ViolationRule::Conditional(
                            "is required when DataFormat is AUGMENTED_MANIFEST".to_string(),
                        ),
                    );
                }
            }
            Some(DocumentClassifierDataFormat::Unknown(_)) => {}
        }
        v.s3_uri("S3Uri", &self.s3_uri);
        v.s3_uri("TestS3Uri", &self.test_s3_uri);
        v.pattern("LabelDelimiter", &self.label_delimiter, &LABEL_DELIMITER);
        v.nested_each("AugmentedManifests", &self.augmented_manifests);
    }
}

impl Validate for DocumentClassifierOutputDataConfig {
    fn validate_into(&self, v: &mut Validator) {
        v.s3_uri("S3Uri", &self.s3_uri);
        v.kms_key_id("KmsKeyId", &self.kms_key_id);
    }
}

impl Validate for EntityTypesListItem {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("Type", &self.entity_type) && v.length("Type", &self.entity_type, 1, 64) {
            v.pattern("Type", &self.entity_type, &ENTITY_TYPE_NAME);
        }
    }
}

impl Validate for EntityRecognizerDocuments {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("S3Uri", &self.s3_uri) {
            v.s3_uri("S3Uri", &self.s3_uri);
        }
        v.s3_uri("TestS3Uri", &self.test_s3_uri);
        v.known("InputFormat", &self.input_format);
    }
}

impl Validate for EntityRecognizerAnnotations {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("S3Uri", &self.s3_uri) {
            v.s3_uri("S3Uri", &self.s3_uri);
        }
        v.s3_uri("TestS3Uri", &self.test_s3_uri);
    }
}

impl Validate for EntityRecognizerEntityList {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("S3Uri", &self.s3_uri) {
            v.s3_uri("S3Uri", &self.s3_uri);
        }
    }
}

impl Validate for EntityRecognizerInputDataConfig {
    fn validate_into(&self, v: &mut Validator) {
        v.known("DataFormat", &self.data_format);
        v.required("EntityTypes", &self.entity_types);
        match self.data_format {
            None | Some(EntityRecognizerDataFormat::ComprehendCsv) => {
                if self.documents.is_none() {
                    v.violation(
                        "Documents",
                        ViolationRule::Conditional(
                            "is required when DataFormat is COMPREHEND_CSV".to_string(),
                        ),
                    );
                }
                if self.annotations.is_some() && self.entity_list.is_some() {
                    v.violation("EntityList", ViolationRule::MutuallyExclusive("Annotations"));
                }
            }
            Some(EntityRecognizerDataFormat::AugmentedManifest) => {
                if self.augmented_manifests.as_ref().map_or(true, Vec::is_empty) {
                    v.violation(
                        "AugmentedManifests",
                        ViolationRule::Conditional(
                            "is required when DataFormat is AUGMENTED_MANIFEST".to_string(),
                        ),
                    );
                }
            }
            Some(EntityRecognizerDataFormat::Unknown(_)) => {}
        }
        v.nested_each("EntityTypes", &self.entity_types);
        v.nested("Documents", &self.documents);
        v.nested("Annotations", &self.annotations);
        v.nested("EntityList", &self.entity_list);
        v.nested_each("AugmentedManifests", &self.augmented_manifests);
    }
}

impl Validate for DocumentReaderConfig {
    fn validate_into(&self, v: &mut Validator) {
        v.required("DocumentReadAction", &self.document_read_action);
        v.known("DocumentReadAction", &self.document_read_action);
        v.known("DocumentReadMode", &self.document_read_mode);
        v.count("FeatureTypes", &self.feature_types, 1, 2);
        v.known_each("FeatureTypes", &self.feature_types);
        if self.feature_types.is_some()
            && self.document_read_action != Some(DocumentReadAction::TextractAnalyzeDocument)
        {
            v.violation(
                "FeatureTypes",
                ViolationRule::Conditional(
                    "is only allowed with TEXTRACT_ANALYZE_DOCUMENT".to_string(),
                ),
            );
        }
    }
}

impl Validate for InputDataConfig {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("S3Uri", &self.s3_uri) {
            v.s3_uri("S3Uri", &self.s3_uri);
        }
        v.known("InputFormat", &self.input_format);
        v.nested("DocumentReaderConfig", &self.document_reader_config);
    }
}

impl Validate for OutputDataConfig {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("S3Uri", &self.s3_uri) {
            v.s3_uri("S3Uri", &self.s3_uri);
        }
        v.kms_key_id("KmsKeyId", &self.kms_key_id);
    }
}

impl Validate for RedactionConfig {
    fn validate_into(&self, v: &mut Validator) {
        v.known_each("PiiEntityTypes", &self.pii_entity_types);
        v.known("MaskMode", &self.mask_mode);
        v.pattern("MaskCharacter", &self.mask_character, &MASK_CHARACTER);
    }
}

impl Validate for VpcConfig {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("SecurityGroupIds", &self.security_group_ids) {
            v.count("SecurityGroupIds", &self.security_group_ids, 1, 5);
            v.each_string("SecurityGroupIds", &self.security_group_ids, |v, field, value| {
                if v.length(field, value, 1, 32) {
                    v.pattern(field, value, &VPC_ID);
                }
            });
        }
        if v.required("Subnets", &self.subnets) {
            v.count("Subnets", &self.subnets, 1, 16);
            v.each_string("Subnets", &self.subnets, |v, field, value| {
                if v.length(field, value, 1, 32) {
                    v.pattern(field, value, &VPC_ID);
                }
            });
        }
    }
}

impl Validate for Tag {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("Key", &self.key) {
            v.length("Key", &self.key, 1, 128);
        }
        v.length("Value", &self.value, 0, 256);
    }
}

impl Validate for CreateDocumentClassifierRequest {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("DocumentClassifierName", &self.document_classifier_name) {
            v.arn_name("DocumentClassifierName", &self.document_classifier_name);
        }
        v.arn_name("VersionName", &self.version_name);
        if v.required("DataAccessRoleArn", &self.data_access_role_arn) {
            v.role_arn("DataAccessRoleArn", &self.data_access_role_arn);
        }
        v.nested_each("Tags", &self.tags);
        if v.required("InputDataConfig", &self.input_data_config) {
            v.nested("InputDataConfig", &self.input_data_config);
        }
        v.nested("OutputDataConfig", &self.output_data_config);
        v.client_request_token("ClientRequestToken", &self.client_request_token);
        if v.required("LanguageCode", &self.language_code) {
            v.known("LanguageCode", &self.language_code);
        }
        v.kms_key_id("VolumeKmsKeyId", &self.volume_kms_key_id);
        v.nested("VpcConfig", &self.vpc_config);
        v.known("Mode", &self.mode);
        v.kms_key_id("ModelKmsKeyId", &self.model_kms_key_id);
        v.model_policy("ModelPolicy", &self.model_policy);
    }
}

impl Validate for CreateEntityRecognizerRequest {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("RecognizerName", &self.recognizer_name) {
            v.arn_name("RecognizerName", &self.recognizer_name);
        }
        v.arn_name("VersionName", &self.version_name);
        if v.required("DataAccessRoleArn", &self.data_access_role_arn) {
            v.role_arn("DataAccessRoleArn", &self.data_access_role_arn);
        }
        v.nested_each("Tags", &self.tags);
        if v.required("InputDataConfig", &self.input_data_config) {
            v.nested("InputDataConfig", &self.input_data_config);
        }
        v.client_request_token("ClientRequestToken", &self.client_request_token);
        if v.required("LanguageCode", &self.language_code) {
            v.known("LanguageCode", &self.language_code);
        }
        v.kms_key_id("VolumeKmsKeyId", &self.volume_kms_key_id);
        v.nested("VpcConfig", &self.vpc_config);
        v.kms_key_id("ModelKmsKeyId", &self.model_kms_key_id);
        v.model_policy("ModelPolicy", &self.model_policy);
    }
}

impl Validate for DetectEntitiesRequest {
    fn validate_into(&self, v: &mut Validator) {
        match (&self.text, &self.bytes) {
            (Some(_), Some(_)) => v.violation("Bytes", ViolationRule::MutuallyExclusive("Text")),
            (None, None) => v.violation(
                "Text",
                ViolationRule::Conditional("or Bytes must be provided".to_string()),
            ),
            _ => {}
        }
        if let Some(text) = &self.text {
            let actual = text.len();
            if actual == 0 || actual > MAX_TEXT_BYTES {
                v.violation(
                    "Text",
                    ViolationRule::Length {
                        min: 1,
                        max: MAX_TEXT_BYTES,
                        actual,
                    },
                );
            }
        }
        if let Some(bytes) = &self.bytes {
            if bytes.is_empty() {
                v.violation(
                    "Bytes",
                    ViolationRule::Length {
                        min: 1,
                        max: usize::MAX,
                        actual: 0,
                    },
                );
            }
            if self.endpoint_arn.is_none() {
                v.violation(
                    "EndpointArn",
                    ViolationRule::Conditional("is required when Bytes is provided".to_string()),
                );
            }
        }
        if self.endpoint_arn.is_none() && self.language_code.is_none() {
            v.violation(
                "LanguageCode",
                ViolationRule::Conditional("is required when EndpointArn is absent".to_string()),
            );
        }
        v.known("LanguageCode", &self.language_code);
        if v.length("EndpointArn", &self.endpoint_arn, 0, 256) {
            v.pattern("EndpointArn", &self.endpoint_arn, &ENDPOINT_ARN);
        }
        v.nested("DocumentReaderConfig", &self.document_reader_config);
    }
}

impl Validate for DescribeDocumentClassifierRequest {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("DocumentClassifierArn", &self.document_classifier_arn)
            && v.length("DocumentClassifierArn", &self.document_classifier_arn, 0, 256)
        {
            v.pattern("DocumentClassifierArn", &self.document_classifier_arn, &CLASSIFIER_ARN);
        }
    }
}

impl Validate for DescribeEntityRecognizerRequest {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("EntityRecognizerArn", &self.entity_recognizer_arn)
            && v.length("EntityRecognizerArn", &self.entity_recognizer_arn, 0, 256)
        {
            v.pattern("EntityRecognizerArn", &self.entity_recognizer_arn, &RECOGNIZER_ARN);
        }
    }
}

impl Validate for StartEventsDetectionJobRequest {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("InputDataConfig", &self.input_data_config) {
            v.nested("InputDataConfig", &self.input_data_config);
        }
        if v.required("OutputDataConfig", &self.output_data_config) {
            v.nested("OutputDataConfig", &self.output_data_config);
        }
        if v.required("DataAccessRoleArn", &self.data_access_role_arn) {
            v.role_arn("DataAccessRoleArn", &self.data_access_role_arn);
        }
        v.job_name("JobName", &self.job_name);
        if v.required("LanguageCode", &self.language_code) {
            v.known("LanguageCode", &self.language_code);
        }
        v.client_request_token("ClientRequestToken", &self.client_request_token);
        if v.required("TargetEventTypes", &self.target_event_types) {
            v.count("TargetEventTypes", &self.target_event_types, 1, usize::MAX);
            v.each_string("TargetEventTypes", &self.target_event_types, |v, field, value| {
                if v.length(field, value, 1, 40) {
                    v.pattern(field, value, &EVENT_TYPE);
                }
            });
        }
        v.nested_each("Tags", &self.tags);
    }
}

impl Validate for StartPiiEntitiesDetectionJobRequest {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("InputDataConfig", &self.input_data_config) {
            v.nested("InputDataConfig", &self.input_data_config);
        }
        if v.required("OutputDataConfig", &self.output_data_config) {
            v.nested("OutputDataConfig", &self.output_data_config);
        }
        if v.required("Mode", &self.mode) {
            v.known("Mode", &self.mode);
        }
        if self.mode == Some(PiiEntitiesDetectionMode::OnlyRedaction)
            && self.redaction_config.is_none()
        {
            v.violation(
                "RedactionConfig",
                ViolationRule::Conditional("is required when Mode is ONLY_REDACTION".to_string()),
            );
        }
        v.nested("RedactionConfig", &self.redaction_config);
        if v.required("DataAccessRoleArn", &self.data_access_role_arn) {
            v.role_arn("DataAccessRoleArn", &self.data_access_role_arn);
        }
        v.job_name("JobName", &self.job_name);
        if v.required("LanguageCode", &self.language_code) {
            v.known("LanguageCode", &self.language_code);
        }
        v.client_request_token("ClientRequestToken", &self.client_request_token);
        v.nested_each("Tags", &self.tags);
    }
}

impl Validate for StartTopicsDetectionJobRequest {
    fn validate_into(&self, v: &mut Validator) {
        if v.required("InputDataConfig", &self.input_data_config) {
            v.nested("InputDataConfig", &self.input_data_config);
        }
        if v.required("OutputDataConfig", &self.output_data_config) {
            v.nested("OutputDataConfig", &self.output_data_config);
        }
        if v.required("DataAccessRoleArn", &self.data_access_role_arn) {
            v.role_arn("DataAccessRoleArn", &self.data_access_role_arn);
        }
        v.job_name("JobName", &self.job_name);
        v.range("NumberOfTopics", self.number_of_topics, 1, 100);
        v.client_request_token("ClientRequestToken", &self.client_request_token);
        v.kms_key_id("VolumeKmsKeyId", &self.volume_kms_key_id);
        v.nested("VpcConfig", &self.vpc_config);
        v.nested_each("Tags", &self.tags);
    }
}

macro_rules! validate_job_id {
    ($($name:ident),+ $(,)?) => {
        $(
            impl Validate for $name {
                fn validate_into(&self, v: &mut Validator) {
                    if v.required("JobId", &self.job_id) {
                        v.job_id("JobId", &self.job_id);
                    }
                }
            }
        )+
    };
}

validate_job_id!(
    DescribeEventsDetectionJobRequest,
    DescribePiiEntitiesDetectionJobRequest,
    DescribeTopicsDetectionJobRequest,
);
