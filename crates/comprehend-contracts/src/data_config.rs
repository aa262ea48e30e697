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

//! Configuration value objects embedded in requests and job properties.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::display::render;
use crate::types::{
    AugmentedManifestsDocumentTypeFormat, DocumentClassifierDataFormat, DocumentReadAction,
    DocumentReadFeatureTypes, DocumentReadMode, EntityRecognizerDataFormat, InputFormat,
    PiiEntitiesDetectionMaskMode, PiiEntityType, Split,
};

/// One labeled dataset produced by a data-labeling job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AugmentedManifestsListItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Split>,
    /// Label attribute names, in the order the labeling jobs were chained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_data_s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_documents_s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<AugmentedManifestsDocumentTypeFormat>,
}

with_fields!(AugmentedManifestsListItem {
    value with_s3_uri => s3_uri: String,
    value with_split => split: Split,
    list with_attribute_names => attribute_names: String,
    value with_annotation_data_s3_uri => annotation_data_s3_uri: String,
    value with_source_documents_s3_uri => source_documents_s3_uri: String,
    value with_document_type => document_type: AugmentedManifestsDocumentTypeFormat,
});

impl fmt::Display for AugmentedManifestsListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("S3Uri", &self.s3_uri)
            .field("Split", &self.split)
            .list("AttributeNames", &self.attribute_names)
            .field("AnnotationDataS3Uri", &self.annotation_data_s3_uri)
            .field("SourceDocumentsS3Uri", &self.source_documents_s3_uri)
            .field("DocumentType", &self.document_type)
            .finish()
    }
}

/// Training data for a custom document classifier.
///
/// With `COMPREHEND_CSV` (the service default) `s3_uri` names the training
/// file; with `AUGMENTED_MANIFEST` the `augmented_manifests` list is used
/// instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentClassifierInputDataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_format: Option<DocumentClassifierDataFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_s3_uri: Option<String>,
    /// Separator between labels of a multi-label row. Defaults to `|` on the
    /// server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_delimiter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub augmented_manifests: Option<Vec<AugmentedManifestsListItem>>,
}

with_fields!(DocumentClassifierInputDataConfig {
    value with_data_format => data_format: DocumentClassifierDataFormat,
    value with_s3_uri => s3_uri: String,
    value with_test_s3_uri => test_s3_uri: String,
    value with_label_delimiter => label_delimiter: String,
    list with_augmented_manifests => augmented_manifests: AugmentedManifestsListItem,
});

impl fmt::Display for DocumentClassifierInputDataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("DataFormat", &self.data_format)
            .field("S3Uri", &self.s3_uri)
            .field("TestS3Uri", &self.test_s3_uri)
            .field("LabelDelimiter", &self.label_delimiter)
            .list("AugmentedManifests", &self.augmented_manifests)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentClassifierOutputDataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

with_fields!(DocumentClassifierOutputDataConfig {
    value with_s3_uri => s3_uri: String,
    value with_kms_key_id => kms_key_id: String,
});

impl fmt::Display for DocumentClassifierOutputDataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("S3Uri", &self.s3_uri)
            .field("KmsKeyId", &self.kms_key_id)
            .finish()
    }
}

/// An entity type a custom recognizer is trained to find.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityTypesListItem {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

with_fields!(EntityTypesListItem {
    value with_type => entity_type: String,
});

impl From<&str> for EntityTypesListItem {
    fn from(entity_type: &str) -> Self {
        Self::default().with_type(entity_type)
    }
}

impl fmt::Display for EntityTypesListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f).field("Type", &self.entity_type).finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntityRecognizerDocuments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_format: Option<InputFormat>,
}

with_fields!(EntityRecognizerDocuments {
    value with_s3_uri => s3_uri: String,
    value with_test_s3_uri => test_s3_uri: String,
    value with_input_format => input_format: InputFormat,
});

impl fmt::Display for EntityRecognizerDocuments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("S3Uri", &self.s3_uri)
            .field("TestS3Uri", &self.test_s3_uri)
            .field("InputFormat", &self.input_format)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntityRecognizerAnnotations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_s3_uri: Option<String>,
}

with_fields!(EntityRecognizerAnnotations {
    value with_s3_uri => s3_uri: String,
    value with_test_s3_uri => test_s3_uri: String,
});

impl fmt::Display for EntityRecognizerAnnotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("S3Uri", &self.s3_uri)
            .field("TestS3Uri", &self.test_s3_uri)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntityRecognizerEntityList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
}

with_fields!(EntityRecognizerEntityList {
    value with_s3_uri => s3_uri: String,
});

impl fmt::Display for EntityRecognizerEntityList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f).field("S3Uri", &self.s3_uri).finish()
    }
}

/// Training data for a custom entity recognizer.
///
/// Annotations and an entity list are alternatives; the recognizer needs
/// one of them alongside `documents` when the format is `COMPREHEND_CSV`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntityRecognizerInputDataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_format: Option<EntityRecognizerDataFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_types: Option<Vec<EntityTypesListItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<EntityRecognizerDocuments>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<EntityRecognizerAnnotations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_list: Option<EntityRecognizerEntityList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub augmented_manifests: Option<Vec<AugmentedManifestsListItem>>,
}

with_fields!(EntityRecognizerInputDataConfig {
    value with_data_format => data_format: EntityRecognizerDataFormat,
    list with_entity_types => entity_types: EntityTypesListItem,
    value with_documents => documents: EntityRecognizerDocuments,
    value with_annotations => annotations: EntityRecognizerAnnotations,
    value with_entity_list => entity_list: EntityRecognizerEntityList,
    list with_augmented_manifests => augmented_manifests: AugmentedManifestsListItem,
});

impl fmt::Display for EntityRecognizerInputDataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("DataFormat", &self.data_format)
            .list("EntityTypes", &self.entity_types)
            .field("Documents", &self.documents)
            .field("Annotations", &self.annotations)
            .field("EntityList", &self.entity_list)
            .list("AugmentedManifests", &self.augmented_manifests)
            .finish()
    }
}

/// How image and PDF input is turned into text before analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentReaderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_read_action: Option<DocumentReadAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_read_mode: Option<DocumentReadMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_types: Option<Vec<DocumentReadFeatureTypes>>,
}

with_fields!(DocumentReaderConfig {
    value with_document_read_action => document_read_action: DocumentReadAction,
    value with_document_read_mode => document_read_mode: DocumentReadMode,
    list with_feature_types => feature_types: DocumentReadFeatureTypes,
});

impl fmt::Display for DocumentReaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("DocumentReadAction", &self.document_read_action)
            .field("DocumentReadMode", &self.document_read_mode)
            .list("FeatureTypes", &self.feature_types)
            .finish()
    }
}

/// Input location of an asynchronous analysis job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InputDataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_format: Option<InputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_reader_config: Option<DocumentReaderConfig>,
}

with_fields!(InputDataConfig {
    value with_s3_uri => s3_uri: String,
    value with_input_format => input_format: InputFormat,
    value with_document_reader_config => document_reader_config: DocumentReaderConfig,
});

impl fmt::Display for InputDataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("S3Uri", &self.s3_uri)
            .field("InputFormat", &self.input_format)
            .field("DocumentReaderConfig", &self.document_reader_config)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutputDataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

with_fields!(OutputDataConfig {
    value with_s3_uri => s3_uri: String,
    value with_kms_key_id => kms_key_id: String,
});

impl fmt::Display for OutputDataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("S3Uri", &self.s3_uri)
            .field("KmsKeyId", &self.kms_key_id)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PiiOutputDataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

with_fields!(PiiOutputDataConfig {
    value with_s3_uri => s3_uri: String,
    value with_kms_key_id => kms_key_id: String,
});

impl fmt::Display for PiiOutputDataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("S3Uri", &self.s3_uri)
            .field("KmsKeyId", &self.kms_key_id)
            .finish()
    }
}

/// Which PII types are redacted and how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RedactionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pii_entity_types: Option<Vec<PiiEntityType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_mode: Option<PiiEntitiesDetectionMaskMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_character: Option<String>,
}

with_fields!(RedactionConfig {
    list with_pii_entity_types => pii_entity_types: PiiEntityType,
    value with_mask_mode => mask_mode: PiiEntitiesDetectionMaskMode,
    value with_mask_character => mask_character: String,
});

impl fmt::Display for RedactionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .list("PiiEntityTypes", &self.pii_entity_types)
            .field("MaskMode", &self.mask_mode)
            .field("MaskCharacter", &self.mask_character)
            .finish()
    }
}

/// Network isolation for the compute that runs a training or analysis job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<String>>,
}

with_fields!(VpcConfig {
    list with_security_group_ids => security_group_ids: String,
    list with_subnets => subnets: String,
});

impl fmt::Display for VpcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .list("SecurityGroupIds", &self.security_group_ids)
            .list("Subnets", &self.subnets)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

with_fields!(Tag {
    value with_key => key: String,
    value with_value => value: String,
});

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().with_key(key).with_value(value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("Key", &self.key)
            .field("Value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_classifier_input_rendering() {
        let config = DocumentClassifierInputDataConfig::default()
            .with_data_format("COMPREHEND_CSV")
            .with_s3_uri("s3://bucket/prefix");

        assert!(config.augmented_manifests.is_none());
        let rendered = config.to_string();
        assert_eq!(
            rendered,
            "{DataFormat: COMPREHEND_CSV,S3Uri: s3://bucket/prefix}"
        );
        assert!(!rendered.contains("AugmentedManifests"));
    }

    #[test]
    fn test_default_renders_empty() {
        assert_eq!(VpcConfig::default().to_string(), "{}");
    }

    #[test]
    fn test_list_setter_appends() {
        let vpc = VpcConfig::default()
            .with_subnets(["subnet-a"])
            .with_subnets(vec!["subnet-b".to_string()]);
        assert_eq!(
            vpc.subnets,
            Some(vec!["subnet-a".to_string(), "subnet-b".to_string()])
        );
        assert_eq!(vpc.to_string(), "{Subnets: [subnet-a, subnet-b]}");
    }

    #[test]
    fn test_nested_rendering() {
        let item = AugmentedManifestsListItem::default()
            .with_s3_uri("s3://bucket/manifest.jsonl")
            .with_split(Split::Train)
            .with_attribute_names(["labels", "labels-meta"]);
        let config = DocumentClassifierInputDataConfig::default()
            .with_data_format(DocumentClassifierDataFormat::AugmentedManifest)
            .with_augmented_manifests([item]);

        assert_eq!(
            config.to_string(),
            "{DataFormat: AUGMENTED_MANIFEST,AugmentedManifests: [{S3Uri: s3://bucket/manifest.jsonl,Split: TRAIN,AttributeNames: [labels, labels-meta]}]}"
        );
    }

    #[test]
    fn test_wire_names() {
        let item = AugmentedManifestsListItem::default()
            .with_annotation_data_s3_uri("s3://bucket/annotations")
            .with_document_type(AugmentedManifestsDocumentTypeFormat::SemiStructuredDocument);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["AnnotationDataS3Uri"], "s3://bucket/annotations");
        assert_eq!(json["DocumentType"], "SEMI_STRUCTURED_DOCUMENT");
        assert!(json.get("S3Uri").is_none());

        let entity_type = EntityTypesListItem::from("ENGINEER");
        assert_eq!(
            serde_json::to_string(&entity_type).unwrap(),
            r#"{"Type":"ENGINEER"}"#
        );
    }

    #[test]
    fn test_tag_constructor() {
        let tag = Tag::new("team", "nlp");
        assert_eq!(tag.to_string(), "{Key: team,Value: nlp}");
    }
}
