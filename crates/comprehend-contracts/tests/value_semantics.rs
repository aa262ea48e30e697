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

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use comprehend_contracts::{
    AugmentedManifestsDocumentTypeFormat, AugmentedManifestsListItem,
    ClassifierEvaluationMetrics, CreateDocumentClassifierRequest, DocumentClassifierDataFormat,
    DocumentClassifierInputDataConfig, Entity, EntityType, LanguageCode, Split,
    StartPiiEntitiesDetectionJobRequest, Tag,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn manifest_by_assignment() -> AugmentedManifestsListItem {
    let mut item = AugmentedManifestsListItem::default();
    item.s3_uri = Some("s3://bucket/manifest.jsonl".to_string());
    item.split = Some(Split::Train);
    item.attribute_names = Some(vec!["labels".to_string(), "topics".to_string()]);
    item.document_type = Some(AugmentedManifestsDocumentTypeFormat::PlainTextDocument);
    item
}

fn manifest_by_chain() -> AugmentedManifestsListItem {
    AugmentedManifestsListItem::default()
        .with_s3_uri("s3://bucket/manifest.jsonl")
        .with_split(Split::Train)
        .with_attribute_names(["labels", "topics"])
        .with_document_type(AugmentedManifestsDocumentTypeFormat::PlainTextDocument)
}

#[test]
fn assignment_and_chaining_agree() {
    let assigned = manifest_by_assignment();
    let chained = manifest_by_chain();
    assert_eq!(assigned, chained);
    assert_eq!(assigned.to_string(), chained.to_string());
    assert_eq!(hash_of(&assigned), hash_of(&chained));
}

#[test]
fn equality_is_reflexive_and_symmetric() {
    let a = manifest_by_chain();
    let b = manifest_by_assignment();
    assert_eq!(a, a);
    assert_eq!(a == b, b == a);

    let metrics = ClassifierEvaluationMetrics::default().with_accuracy(f64::NAN);
    assert_eq!(metrics, metrics.clone());
    assert_eq!(hash_of(&metrics), hash_of(&metrics.clone()));
}

#[test]
fn defaults_are_equal_until_a_field_is_set() {
    assert_eq!(
        DocumentClassifierInputDataConfig::default(),
        DocumentClassifierInputDataConfig::default()
    );
    let base = CreateDocumentClassifierRequest::default();
    let variants = [
        base.clone().with_document_classifier_name("n"),
        base.clone().with_version_name("v1"),
        base.clone().with_language_code(LanguageCode::En),
        base.clone().with_tags([Tag::new("k", "v")]),
        base.clone().with_model_policy(""),
    ];
    for variant in &variants {
        assert_ne!(&base, variant);
    }
}

#[test]
fn empty_string_is_not_absent() {
    let empty = DocumentClassifierInputDataConfig::default().with_s3_uri("");
    assert_ne!(empty, DocumentClassifierInputDataConfig::default());
    assert_eq!(empty.s3_uri.as_deref(), Some(""));
}

#[test]
fn equal_values_hash_equal_across_a_set() {
    let mut set = HashSet::new();
    set.insert(manifest_by_chain());
    set.insert(manifest_by_assignment());
    assert_eq!(set.len(), 1);

    let entity = Entity::default()
        .with_score(0.75)
        .with_type(EntityType::Person)
        .with_text("Ana");
    let mut entities = HashSet::new();
    entities.insert(entity.clone());
    entities.insert(entity);
    assert_eq!(entities.len(), 1);
}

#[test]
fn list_order_matters() {
    let xy = AugmentedManifestsListItem::default().with_attribute_names(["x", "y"]);
    let yx = AugmentedManifestsListItem::default().with_attribute_names(["y", "x"]);
    assert_ne!(xy, yx);
    assert_eq!(xy.to_string(), "{AttributeNames: [x, y]}");
}

#[test]
fn list_fields_append_and_keep_duplicates() {
    let item = AugmentedManifestsListItem::default()
        .with_attribute_names(["a"])
        .with_attribute_names(["b", "a"]);
    assert_eq!(
        item.attribute_names,
        Some(vec!["a".to_string(), "b".to_string(), "a".to_string()])
    );

    let mut replaced = item.clone();
    replaced.attribute_names = Some(vec!["z".to_string()]);
    assert_eq!(replaced.attribute_names.map(|v| v.len()), Some(1));
}

#[test]
fn typed_and_raw_enum_values_are_equal() {
    let typed = DocumentClassifierInputDataConfig::default()
        .with_data_format(DocumentClassifierDataFormat::AugmentedManifest);
    let raw = DocumentClassifierInputDataConfig::default().with_data_format("AUGMENTED_MANIFEST");
    assert_eq!(typed, raw);

    let pii_typed =
        StartPiiEntitiesDetectionJobRequest::default().with_language_code(LanguageCode::ZhTw);
    let pii_raw = StartPiiEntitiesDetectionJobRequest::default().with_language_code("zh-TW");
    assert_eq!(pii_typed, pii_raw);
}

#[test]
fn unknown_enum_values_are_kept_verbatim() {
    let config = DocumentClassifierInputDataConfig::default().with_data_format("PARQUET");
    assert_eq!(
        config.data_format,
        Some(DocumentClassifierDataFormat::Unknown("PARQUET".to_string()))
    );
    assert_eq!(config.to_string(), "{DataFormat: PARQUET}");
}

#[test]
fn csv_classifier_input_scenario() {
    let config = DocumentClassifierInputDataConfig::default()
        .with_data_format(DocumentClassifierDataFormat::ComprehendCsv)
        .with_s3_uri("s3://bucket/prefix");
    assert!(config.augmented_manifests.is_none());

    let rendered = config.to_string();
    assert!(rendered.contains("DataFormat"));
    assert!(rendered.contains("S3Uri"));
    assert!(!rendered.contains("AugmentedManifests"));
}

#[test]
fn nested_values_render_recursively() {
    let config = DocumentClassifierInputDataConfig::default()
        .with_data_format(DocumentClassifierDataFormat::AugmentedManifest)
        .with_augmented_manifests([AugmentedManifestsListItem::default()
            .with_s3_uri("s3://bucket/m")
            .with_split(Split::Test)]);
    assert_eq!(
        config.to_string(),
        "{DataFormat: AUGMENTED_MANIFEST,AugmentedManifests: [{S3Uri: s3://bucket/m,Split: TEST}]}"
    );
}
