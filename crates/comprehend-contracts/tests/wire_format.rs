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

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use comprehend_contracts::{
    from_json, to_json, ClientConfig, CreateEntityRecognizerRequest,
    DescribeDocumentClassifierRequest, DescribeEntityRecognizerRequest,
    DescribePiiEntitiesDetectionJobRequest, DetectEntitiesRequest, DocumentClassifierMode,
    EntityRecognizerDocuments, EntityRecognizerInputDataConfig, JobStatus, LanguageCode,
    ModelStatus, PiiEntitiesDetectionMode, ServiceRequest, StartEventsDetectionJobRequest,
    ValidationMode, WireCodec,
};

fn strict_codec() -> WireCodec {
    WireCodec::new(ClientConfig {
        validation: ValidationMode::Strict,
        ..ClientConfig::default()
    })
}

#[test]
fn recognizer_request_uses_wire_names() {
    let request = CreateEntityRecognizerRequest::default()
        .with_recognizer_name("people")
        .with_data_access_role_arn("arn:aws:iam::123456789012:role/Comprehend")
        .with_language_code(LanguageCode::En)
        .with_input_data_config(
            EntityRecognizerInputDataConfig::default()
                .with_data_format("COMPREHEND_CSV")
                .with_entity_types(["ENGINEER", "MANAGER"])
                .with_documents(
                    EntityRecognizerDocuments::default()
                        .with_s3_uri("s3://bucket/docs")
                        .with_input_format("ONE_DOC_PER_LINE"),
                ),
        );
    let wire = strict_codec().encode_request(&request).unwrap();
    let body: Value = serde_json::from_str(&wire.body).unwrap();
    assert_eq!(
        body,
        json!({
            "RecognizerName": "people",
            "DataAccessRoleArn": "arn:aws:iam::123456789012:role/Comprehend",
            "InputDataConfig": {
                "DataFormat": "COMPREHEND_CSV",
                "EntityTypes": [{"Type": "ENGINEER"}, {"Type": "MANAGER"}],
                "Documents": {"S3Uri": "s3://bucket/docs", "InputFormat": "ONE_DOC_PER_LINE"}
            },
            "LanguageCode": "en"
        })
    );
    assert_eq!(wire.target, "Comprehend_20171127.CreateEntityRecognizer");
}

#[test]
fn bytes_travel_as_base64() {
    let request = DetectEntitiesRequest::default()
        .with_bytes(b"%PDF-1.7".to_vec())
        .with_endpoint_arn(
            "arn:aws:comprehend:us-east-1:123456789012:entity-recognizer-endpoint/docs",
        );
    let body: Value = serde_json::from_str(&to_json(&request).unwrap()).unwrap();
    assert_eq!(body["Bytes"], json!("JVBERi0xLjc="));

    let back: DetectEntitiesRequest = from_json(&body.to_string()).unwrap();
    assert_eq!(back, request);
    assert!(back.to_string().contains("Bytes: <8 bytes>"));
}

#[test]
fn classifier_description_fixture() {
    let codec = WireCodec::default();
    let output = codec
        .decode_response::<DescribeDocumentClassifierRequest>(
            r#"{
              "DocumentClassifierProperties": {
                "DocumentClassifierArn": "arn:aws:comprehend:us-east-1:123456789012:document-classifier/news",
                "LanguageCode": "en",
                "Status": "TRAINED",
                "SubmitTime": 1700000000.5,
                "EndTime": 1700003600,
                "InputDataConfig": {"DataFormat": "COMPREHEND_CSV", "S3Uri": "s3://bucket/train.csv"},
                "ClassifierMetadata": {
                  "NumberOfLabels": 4,
                  "EvaluationMetrics": {"Accuracy": 0.91, "F1Score": 0.88}
                },
                "Mode": "MULTI_LABEL",
                "FlywheelArn": "arn:aws:comprehend:us-east-1:123456789012:flywheel/f"
              }
            }"#,
        )
        .unwrap();
    let properties = output.document_classifier_properties.unwrap();
    assert_eq!(properties.status, Some(ModelStatus::Trained));
    assert!(properties.status.as_ref().is_some_and(ModelStatus::is_terminal));
    assert_eq!(properties.mode, Some(DocumentClassifierMode::MultiLabel));
    assert_eq!(
        properties.submit_time,
        Some(Utc.timestamp_millis_opt(1_700_000_000_500).unwrap())
    );
    assert_eq!(
        properties.end_time,
        Some(Utc.with_ymd_and_hms(2023, 11, 14, 23, 13, 20).unwrap())
    );
    let metrics = properties
        .classifier_metadata
        .and_then(|m| m.evaluation_metrics)
        .unwrap();
    assert_eq!(metrics.accuracy, Some(0.91));
    assert_eq!(metrics.recall, None);
}

#[test]
fn recognizer_description_reencodes_timestamps_as_seconds() {
    let codec = WireCodec::default();
    let output = codec
        .decode_response::<DescribeEntityRecognizerRequest>(
            r#"{"EntityRecognizerProperties":{"Status":"TRAINING","SubmitTime":1700000000.25}}"#,
        )
        .unwrap();
    let json: Value = serde_json::from_str(&to_json(&output).unwrap()).unwrap();
    assert_eq!(
        json,
        json!({"EntityRecognizerProperties": {"Status": "TRAINING", "SubmitTime": 1700000000.25}})
    );
}

#[test]
fn pii_job_description_fixture() {
    let output = WireCodec::default()
        .decode_response::<DescribePiiEntitiesDetectionJobRequest>(
            r#"{"PiiEntitiesDetectionJobProperties":{
                "JobId":"abc123","JobStatus":"IN_PROGRESS","Mode":"ONLY_OFFSETS",
                "OutputDataConfig":{"S3Uri":"s3://bucket/out"}}}"#,
        )
        .unwrap();
    let properties = output.pii_entities_detection_job_properties.unwrap();
    assert_eq!(properties.job_status, Some(JobStatus::InProgress));
    assert!(!JobStatus::InProgress.is_terminal());
    assert_eq!(properties.mode, Some(PiiEntitiesDetectionMode::OnlyOffsets));
}

#[test]
fn start_job_result_decodes() {
    let output = WireCodec::default()
        .decode_response::<StartEventsDetectionJobRequest>(
            r#"{"JobId":"j-1","JobArn":"arn:aws:comprehend:us-east-1:123456789012:events-detection-job/j-1","JobStatus":"SUBMITTED"}"#,
        )
        .unwrap();
    assert_eq!(output.job_id.as_deref(), Some("j-1"));
    assert_eq!(output.job_status, Some(JobStatus::Submitted));
    assert_eq!(
        StartEventsDetectionJobRequest::OPERATION.target(),
        "Comprehend_20171127.StartEventsDetectionJob"
    );
}

#[test]
fn pretty_json_is_equivalent() {
    let request = DescribeDocumentClassifierRequest::default().with_document_classifier_arn(
        "arn:aws:comprehend:us-east-1:123456789012:document-classifier/news",
    );
    let compact = WireCodec::default().encode_request(&request).unwrap();
    let pretty = WireCodec::new(ClientConfig {
        pretty_json: true,
        ..ClientConfig::default()
    })
    .encode_request(&request)
    .unwrap();
    assert_ne!(compact.body, pretty.body);
    let a: Value = serde_json::from_str(&compact.body).unwrap();
    let b: Value = serde_json::from_str(&pretty.body).unwrap();
    assert_eq!(a, b);
}
