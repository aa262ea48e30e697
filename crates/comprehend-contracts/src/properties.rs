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

//! Server-reported snapshots of trained models and analysis jobs.
//!
//! These arrive from `Describe*` responses. The client records whatever
//! status the service last reported and never drives transitions itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::data_config::{
    DocumentClassifierInputDataConfig, DocumentClassifierOutputDataConfig,
    EntityRecognizerInputDataConfig, InputDataConfig, OutputDataConfig, PiiOutputDataConfig,
    RedactionConfig, VpcConfig,
};
use crate::display::render;
use crate::types::{
    DocumentClassifierMode, JobStatus, LanguageCode, ModelStatus, PiiEntitiesDetectionMode,
};

/// Metrics compare by bit pattern so that equality stays reflexive for NaN
/// and agrees with hashing.
fn metric_bits(value: Option<f64>) -> Option<u64> {
    value.map(f64::to_bits)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClassifierEvaluationMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f1_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub micro_precision: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub micro_recall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub micro_f1_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hamming_loss: Option<f64>,
}

impl ClassifierEvaluationMetrics {
    fn key(&self) -> [Option<u64>; 8] {
        [
            metric_bits(self.accuracy),
            metric_bits(self.precision),
            metric_bits(self.recall),
            metric_bits(self.f1_score),
            metric_bits(self.micro_precision),
            metric_bits(self.micro_recall),
            metric_bits(self.micro_f1_score),
            metric_bits(self.hamming_loss),
        ]
    }
}

impl PartialEq for ClassifierEvaluationMetrics {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ClassifierEvaluationMetrics {}

impl Hash for ClassifierEvaluationMetrics {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

with_fields!(ClassifierEvaluationMetrics {
    value with_accuracy => accuracy: f64,
    value with_precision => precision: f64,
    value with_recall => recall: f64,
    value with_f1_score => f1_score: f64,
    value with_micro_precision => micro_precision: f64,
    value with_micro_recall => micro_recall: f64,
    value with_micro_f1_score => micro_f1_score: f64,
    value with_hamming_loss => hamming_loss: f64,
});

impl fmt::Display for ClassifierEvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("Accuracy", &self.accuracy)
            .field("Precision", &self.precision)
            .field("Recall", &self.recall)
            .field("F1Score", &self.f1_score)
            .field("MicroPrecision", &self.micro_precision)
            .field("MicroRecall", &self.micro_recall)
            .field("MicroF1Score", &self.micro_f1_score)
            .field("HammingLoss", &self.hamming_loss)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClassifierMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_labels: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_trained_documents: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_test_documents: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_metrics: Option<ClassifierEvaluationMetrics>,
}

with_fields!(ClassifierMetadata {
    value with_number_of_labels => number_of_labels: i32,
    value with_number_of_trained_documents => number_of_trained_documents: i32,
    value with_number_of_test_documents => number_of_test_documents: i32,
    value with_evaluation_metrics => evaluation_metrics: ClassifierEvaluationMetrics,
});

impl fmt::Display for ClassifierMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("NumberOfLabels", &self.number_of_labels)
            .field("NumberOfTrainedDocuments", &self.number_of_trained_documents)
            .field("NumberOfTestDocuments", &self.number_of_test_documents)
            .field("EvaluationMetrics", &self.evaluation_metrics)
            .finish()
    }
}

/// Everything the service reports about a custom document classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentClassifierProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_classifier_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ModelStatus>,
    /// Additional detail on the status, e.g. why training failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub submit_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_start_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<DocumentClassifierInputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<DocumentClassifierOutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier_metadata: Option<ClassifierMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<DocumentClassifierMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_model_arn: Option<String>,
}

with_fields!(DocumentClassifierProperties {
    value with_document_classifier_arn => document_classifier_arn: String,
    value with_language_code => language_code: LanguageCode,
    value with_status => status: ModelStatus,
    value with_message => message: String,
    value with_submit_time => submit_time: DateTime<Utc>,
    value with_end_time => end_time: DateTime<Utc>,
    value with_training_start_time => training_start_time: DateTime<Utc>,
    value with_training_end_time => training_end_time: DateTime<Utc>,
    value with_input_data_config => input_data_config: DocumentClassifierInputDataConfig,
    value with_output_data_config => output_data_config: DocumentClassifierOutputDataConfig,
    value with_classifier_metadata => classifier_metadata: ClassifierMetadata,
    value with_data_access_role_arn => data_access_role_arn: String,
    value with_volume_kms_key_id => volume_kms_key_id: String,
    value with_vpc_config => vpc_config: VpcConfig,
    value with_mode => mode: DocumentClassifierMode,
    value with_model_kms_key_id => model_kms_key_id: String,
    value with_version_name => version_name: String,
    value with_source_model_arn => source_model_arn: String,
});

impl fmt::Display for DocumentClassifierProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("DocumentClassifierArn", &self.document_classifier_arn)
            .field("LanguageCode", &self.language_code)
            .field("Status", &self.status)
            .field("Message", &self.message)
            .timestamp("SubmitTime", &self.submit_time)
            .timestamp("EndTime", &self.end_time)
            .timestamp("TrainingStartTime", &self.training_start_time)
            .timestamp("TrainingEndTime", &self.training_end_time)
            .field("InputDataConfig", &self.input_data_config)
            .field("OutputDataConfig", &self.output_data_config)
            .field("ClassifierMetadata", &self.classifier_metadata)
            .field("DataAccessRoleArn", &self.data_access_role_arn)
            .field("VolumeKmsKeyId", &self.volume_kms_key_id)
            .field("VpcConfig", &self.vpc_config)
            .field("Mode", &self.mode)
            .field("ModelKmsKeyId", &self.model_kms_key_id)
            .field("VersionName", &self.version_name)
            .field("SourceModelArn", &self.source_model_arn)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntityRecognizerEvaluationMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f1_score: Option<f64>,
}

impl EntityRecognizerEvaluationMetrics {
    fn key(&self) -> [Option<u64>; 3] {
        [
            metric_bits(self.precision),
            metric_bits(self.recall),
            metric_bits(self.f1_score),
        ]
    }
}

impl PartialEq for EntityRecognizerEvaluationMetrics {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for EntityRecognizerEvaluationMetrics {}

impl Hash for EntityRecognizerEvaluationMetrics {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

with_fields!(EntityRecognizerEvaluationMetrics {
    value with_precision => precision: f64,
    value with_recall => recall: f64,
    value with_f1_score => f1_score: f64,
});

impl fmt::Display for EntityRecognizerEvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("Precision", &self.precision)
            .field("Recall", &self.recall)
            .field("F1Score", &self.f1_score)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntityTypesEvaluationMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f1_score: Option<f64>,
}

impl EntityTypesEvaluationMetrics {
    fn key(&self) -> [Option<u64>; 3] {
        [
            metric_bits(self.precision),
            metric_bits(self.recall),
            metric_bits(self.f1_score),
        ]
    }
}

impl PartialEq for EntityTypesEvaluationMetrics {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for EntityTypesEvaluationMetrics {}

impl Hash for EntityTypesEvaluationMetrics {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

with_fields!(EntityTypesEvaluationMetrics {
    value with_precision => precision: f64,
    value with_recall => recall: f64,
    value with_f1_score => f1_score: f64,
});

impl fmt::Display for EntityTypesEvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("Precision", &self.precision)
            .field("Recall", &self.recall)
            .field("F1Score", &self.f1_score)
            .finish()
    }
}

/// Per-entity-type training results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntityRecognizerMetadataEntityTypesListItem {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_metrics: Option<EntityTypesEvaluationMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_train_mentions: Option<i32>,
}

with_fields!(EntityRecognizerMetadataEntityTypesListItem {
    value with_type => entity_type: String,
    value with_evaluation_metrics => evaluation_metrics: EntityTypesEvaluationMetrics,
    value with_number_of_train_mentions => number_of_train_mentions: i32,
});

impl fmt::Display for EntityRecognizerMetadataEntityTypesListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("Type", &self.entity_type)
            .field("EvaluationMetrics", &self.evaluation_metrics)
            .field("NumberOfTrainMentions", &self.number_of_train_mentions)
            .finish()
    }
}

/// Training results of a custom entity recognizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntityRecognizerMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_trained_documents: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_test_documents: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_metrics: Option<EntityRecognizerEvaluationMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_types: Option<Vec<EntityRecognizerMetadataEntityTypesListItem>>,
}

with_fields!(EntityRecognizerMetadata {
    value with_number_of_trained_documents => number_of_trained_documents: i32,
    value with_number_of_test_documents => number_of_test_documents: i32,
    value with_evaluation_metrics => evaluation_metrics: EntityRecognizerEvaluationMetrics,
    list with_entity_types => entity_types: EntityRecognizerMetadataEntityTypesListItem,
});

impl fmt::Display for EntityRecognizerMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("NumberOfTrainedDocuments", &self.number_of_trained_documents)
            .field("NumberOfTestDocuments", &self.number_of_test_documents)
            .field("EvaluationMetrics", &self.evaluation_metrics)
            .list("EntityTypes", &self.entity_types)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntityRecognizerProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_recognizer_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ModelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub submit_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_start_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<EntityRecognizerInputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognizer_metadata: Option<EntityRecognizerMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
}

with_fields!(EntityRecognizerProperties {
    value with_entity_recognizer_arn => entity_recognizer_arn: String,
    value with_language_code => language_code: LanguageCode,
    value with_status => status: ModelStatus,
    value with_message => message: String,
    value with_submit_time => submit_time: DateTime<Utc>,
    value with_end_time => end_time: DateTime<Utc>,
    value with_training_start_time => training_start_time: DateTime<Utc>,
    value with_training_end_time => training_end_time: DateTime<Utc>,
    value with_input_data_config => input_data_config: EntityRecognizerInputDataConfig,
    value with_recognizer_metadata => recognizer_metadata: EntityRecognizerMetadata,
    value with_data_access_role_arn => data_access_role_arn: String,
    value with_volume_kms_key_id => volume_kms_key_id: String,
    value with_vpc_config => vpc_config: VpcConfig,
    value with_model_kms_key_id => model_kms_key_id: String,
    value with_version_name => version_name: String,
});

impl fmt::Display for EntityRecognizerProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("EntityRecognizerArn", &self.entity_recognizer_arn)
            .field("LanguageCode", &self.language_code)
            .field("Status", &self.status)
            .field("Message", &self.message)
            .timestamp("SubmitTime", &self.submit_time)
            .timestamp("EndTime", &self.end_time)
            .timestamp("TrainingStartTime", &self.training_start_time)
            .timestamp("TrainingEndTime", &self.training_end_time)
            .field("InputDataConfig", &self.input_data_config)
            .field("RecognizerMetadata", &self.recognizer_metadata)
            .field("DataAccessRoleArn", &self.data_access_role_arn)
            .field("VolumeKmsKeyId", &self.volume_kms_key_id)
            .field("VpcConfig", &self.vpc_config)
            .field("ModelKmsKeyId", &self.model_kms_key_id)
            .field("VersionName", &self.version_name)
            .finish()
    }
}

/// Snapshot of an events detection job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EventsDetectionJobProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub submit_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<InputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_event_types: Option<Vec<String>>,
}

with_fields!(EventsDetectionJobProperties {
    value with_job_id => job_id: String,
    value with_job_arn => job_arn: String,
    value with_job_name => job_name: String,
    value with_job_status => job_status: JobStatus,
    value with_message => message: String,
    value with_submit_time => submit_time: DateTime<Utc>,
    value with_end_time => end_time: DateTime<Utc>,
    value with_input_data_config => input_data_config: InputDataConfig,
    value with_output_data_config => output_data_config: OutputDataConfig,
    value with_language_code => language_code: LanguageCode,
    value with_data_access_role_arn => data_access_role_arn: String,
    list with_target_event_types => target_event_types: String,
});

impl fmt::Display for EventsDetectionJobProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("JobId", &self.job_id)
            .field("JobArn", &self.job_arn)
            .field("JobName", &self.job_name)
            .field("JobStatus", &self.job_status)
            .field("Message", &self.message)
            .timestamp("SubmitTime", &self.submit_time)
            .timestamp("EndTime", &self.end_time)
            .field("InputDataConfig", &self.input_data_config)
            .field("OutputDataConfig", &self.output_data_config)
            .field("LanguageCode", &self.language_code)
            .field("DataAccessRoleArn", &self.data_access_role_arn)
            .list("TargetEventTypes", &self.target_event_types)
            .finish()
    }
}

/// Snapshot of a PII entities detection job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PiiEntitiesDetectionJobProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub submit_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<InputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<PiiOutputDataConfig>,
    /// Only present when `mode` is `ONLY_REDACTION`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redaction_config: Option<RedactionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<PiiEntitiesDetectionMode>,
}

with_fields!(PiiEntitiesDetectionJobProperties {
    value with_job_id => job_id: String,
    value with_job_arn => job_arn: String,
    value with_job_name => job_name: String,
    value with_job_status => job_status: JobStatus,
    value with_message => message: String,
    value with_submit_time => submit_time: DateTime<Utc>,
    value with_end_time => end_time: DateTime<Utc>,
    value with_input_data_config => input_data_config: InputDataConfig,
    value with_output_data_config => output_data_config: PiiOutputDataConfig,
    value with_redaction_config => redaction_config: RedactionConfig,
    value with_language_code => language_code: LanguageCode,
    value with_data_access_role_arn => data_access_role_arn: String,
    value with_mode => mode: PiiEntitiesDetectionMode,
});

impl fmt::Display for PiiEntitiesDetectionJobProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("JobId", &self.job_id)
            .field("JobArn", &self.job_arn)
            .field("JobName", &self.job_name)
            .field("JobStatus", &self.job_status)
            .field("Message", &self.message)
            .timestamp("SubmitTime", &self.submit_time)
            .timestamp("EndTime", &self.end_time)
            .field("InputDataConfig", &self.input_data_config)
            .field("OutputDataConfig", &self.output_data_config)
            .field("RedactionConfig", &self.redaction_config)
            .field("LanguageCode", &self.language_code)
            .field("DataAccessRoleArn", &self.data_access_role_arn)
            .field("Mode", &self.mode)
            .finish()
    }
}

/// Snapshot of a topic modeling job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TopicsDetectionJobProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub submit_time: Option<DateTime<Utc>>,
    #[serde(
        with = "crate::serde_ext::epoch_seconds",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<InputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_topics: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_access_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
}

with_fields!(TopicsDetectionJobProperties {
    value with_job_id => job_id: String,
    value with_job_arn => job_arn: String,
    value with_job_name => job_name: String,
    value with_job_status => job_status: JobStatus,
    value with_message => message: String,
    value with_submit_time => submit_time: DateTime<Utc>,
    value with_end_time => end_time: DateTime<Utc>,
    value with_input_data_config => input_data_config: InputDataConfig,
    value with_output_data_config => output_data_config: OutputDataConfig,
    value with_number_of_topics => number_of_topics: i32,
    value with_data_access_role_arn => data_access_role_arn: String,
    value with_volume_kms_key_id => volume_kms_key_id: String,
    value with_vpc_config => vpc_config: VpcConfig,
});

impl fmt::Display for TopicsDetectionJobProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("JobId", &self.job_id)
            .field("JobArn", &self.job_arn)
            .field("JobName", &self.job_name)
            .field("JobStatus", &self.job_status)
            .field("Message", &self.message)
            .timestamp("SubmitTime", &self.submit_time)
            .timestamp("EndTime", &self.end_time)
            .field("InputDataConfig", &self.input_data_config)
            .field("OutputDataConfig", &self.output_data_config)
            .field("NumberOfTopics", &self.number_of_topics)
            .field("DataAccessRoleArn", &self.data_access_role_arn)
            .field("VolumeKmsKeyId", &self.volume_kms_key_id)
            .field("VpcConfig", &self.vpc_config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_nan_metrics_are_reflexive() {
        let metrics = ClassifierEvaluationMetrics::default().with_accuracy(f64::NAN);
        assert_eq!(metrics, metrics.clone());
    }

    #[test]
    fn test_metrics_differ_by_value() {
        let a = EntityTypesEvaluationMetrics::default().with_f1_score(0.91);
        let b = EntityTypesEvaluationMetrics::default().with_f1_score(0.92);
        assert_ne!(a, b);
    }

    #[test]
    fn test_timestamp_rendering() {
        let submitted = Utc.with_ymd_and_hms(2020, 6, 1, 12, 30, 0).unwrap();
        let job = TopicsDetectionJobProperties::default()
            .with_job_id("abc123")
            .with_job_status(JobStatus::InProgress)
            .with_submit_time(submitted)
            .with_number_of_topics(10);

        assert_eq!(
            job.to_string(),
            "{JobId: abc123,JobStatus: IN_PROGRESS,SubmitTime: 2020-06-01T12:30:00Z,NumberOfTopics: 10}"
        );
    }

    #[test]
    fn test_describe_payload_parses() {
        let json = r#"{
            "DocumentClassifierArn": "arn:aws:comprehend:us-east-1:123456789012:document-classifier/news",
            "LanguageCode": "en",
            "Status": "TRAINED",
            "SubmitTime": 1590000000.5,
            "InputDataConfig": {"DataFormat": "COMPREHEND_CSV", "S3Uri": "s3://bucket/train.csv"},
            "ClassifierMetadata": {
                "NumberOfLabels": 4,
                "EvaluationMetrics": {"Accuracy": 0.93, "F1Score": 0.9}
            },
            "Mode": "MULTI_CLASS",
            "SomeFutureField": true
        }"#;

        let props: DocumentClassifierProperties = serde_json::from_str(json).unwrap();
        assert_eq!(props.status, Some(ModelStatus::Trained));
        assert_eq!(props.language_code, Some(LanguageCode::En));
        assert_eq!(props.submit_time.unwrap().timestamp_millis(), 1_590_000_000_500);
        let metadata = props.classifier_metadata.unwrap();
        assert_eq!(metadata.number_of_labels, Some(4));
        assert_eq!(metadata.evaluation_metrics.unwrap().accuracy, Some(0.93));
        assert_eq!(props.mode, Some(DocumentClassifierMode::MultiClass));
    }

    #[test]
    fn test_entity_type_metadata_wire_name() {
        let json = r#"{"EntityTypes": [{"Type": "ENGINEER", "NumberOfTrainMentions": 120}]}"#;
        let metadata: EntityRecognizerMetadata = serde_json::from_str(json).unwrap();
        let types = metadata.entity_types.unwrap();
        assert_eq!(types[0].entity_type.as_deref(), Some("ENGINEER"));
        assert_eq!(types[0].number_of_train_mentions, Some(120));
    }
}
