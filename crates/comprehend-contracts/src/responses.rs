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
use std::hash::{Hash, Hasher};

use crate::display::render;
use crate::properties::{
    DocumentClassifierProperties, EntityRecognizerProperties, EventsDetectionJobProperties,
    PiiEntitiesDetectionJobProperties, TopicsDetectionJobProperties,
};
use crate::types::{EntityType, JobStatus};

/// A named entity found in a document. Offsets count Unicode code points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Entity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<i32>,
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.score.map(f32::to_bits) == other.score.map(f32::to_bits)
            && self.entity_type == other.entity_type
            && self.text == other.text
            && self.begin_offset == other.begin_offset
            && self.end_offset == other.end_offset
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.score.map(f32::to_bits).hash(state);
        self.entity_type.hash(state);
        self.text.hash(state);
        self.begin_offset.hash(state);
        self.end_offset.hash(state);
    }
}

with_fields!(Entity {
    value with_score => score: f32,
    value with_type => entity_type: EntityType,
    value with_text => text: String,
    value with_begin_offset => begin_offset: i32,
    value with_end_offset => end_offset: i32,
});

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("Score", &self.score)
            .field("Type", &self.entity_type)
            .field("Text", &self.text)
            .field("BeginOffset", &self.begin_offset)
            .field("EndOffset", &self.end_offset)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetectEntitiesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
}

with_fields!(DetectEntitiesResult {
    list with_entities => entities: Entity,
});

impl DetectEntitiesResult {
    /// Entities at or above `min_score`, in the order the service returned them.
    pub fn entities_above(&self, min_score: f32) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .flatten()
            .filter(move |e| e.score.is_some_and(|s| s >= min_score))
    }
}

impl fmt::Display for DetectEntitiesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f).list("Entities", &self.entities).finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateDocumentClassifierResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_classifier_arn: Option<String>,
}

with_fields!(CreateDocumentClassifierResult {
    value with_document_classifier_arn => document_classifier_arn: String,
});

impl fmt::Display for CreateDocumentClassifierResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("DocumentClassifierArn", &self.document_classifier_arn)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateEntityRecognizerResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_recognizer_arn: Option<String>,
}

with_fields!(CreateEntityRecognizerResult {
    value with_entity_recognizer_arn => entity_recognizer_arn: String,
});

impl fmt::Display for CreateEntityRecognizerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field("EntityRecognizerArn", &self.entity_recognizer_arn)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeDocumentClassifierResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_classifier_properties: Option<DocumentClassifierProperties>,
}

with_fields!(DescribeDocumentClassifierResult {
    value with_document_classifier_properties => document_classifier_properties: DocumentClassifierProperties,
});

impl fmt::Display for DescribeDocumentClassifierResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field(
                "DocumentClassifierProperties",
                &self.document_classifier_properties,
            )
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeEntityRecognizerResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_recognizer_properties: Option<EntityRecognizerProperties>,
}

with_fields!(DescribeEntityRecognizerResult {
    value with_entity_recognizer_properties => entity_recognizer_properties: EntityRecognizerProperties,
});

impl fmt::Display for DescribeEntityRecognizerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field(
                "EntityRecognizerProperties",
                &self.entity_recognizer_properties,
            )
            .finish()
    }
}

/// Acknowledgement returned by every `Start*Job` operation.
macro_rules! start_job_result {
    ($($name:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(rename_all = "PascalCase", default)]
            pub struct $name {
                #[serde(skip_serializing_if = "Option::is_none")]
                pub job_id: Option<String>,
                #[serde(skip_serializing_if = "Option::is_none")]
                pub job_arn: Option<String>,
                #[serde(skip_serializing_if = "Option::is_none")]
                pub job_status: Option<JobStatus>,
            }

            with_fields!($name {
                value with_job_id => job_id: String,
                value with_job_arn => job_arn: String,
                value with_job_status => job_status: JobStatus,
            });

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    render(f)
                        .field("JobId", &self.job_id)
                        .field("JobArn", &self.job_arn)
                        .field("JobStatus", &self.job_status)
                        .finish()
                }
            }
        )+
    };
}

start_job_result!(
    StartEventsDetectionJobResult,
    StartPiiEntitiesDetectionJobResult,
    StartTopicsDetectionJobResult,
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeEventsDetectionJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_detection_job_properties: Option<EventsDetectionJobProperties>,
}

with_fields!(DescribeEventsDetectionJobResult {
    value with_events_detection_job_properties => events_detection_job_properties: EventsDetectionJobProperties,
});

impl fmt::Display for DescribeEventsDetectionJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field(
                "EventsDetectionJobProperties",
                &self.events_detection_job_properties,
            )
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribePiiEntitiesDetectionJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pii_entities_detection_job_properties: Option<PiiEntitiesDetectionJobProperties>,
}

with_fields!(DescribePiiEntitiesDetectionJobResult {
    value with_pii_entities_detection_job_properties => pii_entities_detection_job_properties: PiiEntitiesDetectionJobProperties,
});

impl fmt::Display for DescribePiiEntitiesDetectionJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field(
                "PiiEntitiesDetectionJobProperties",
                &self.pii_entities_detection_job_properties,
            )
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeTopicsDetectionJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics_detection_job_properties: Option<TopicsDetectionJobProperties>,
}

with_fields!(DescribeTopicsDetectionJobResult {
    value with_topics_detection_job_properties => topics_detection_job_properties: TopicsDetectionJobProperties,
});

impl fmt::Display for DescribeTopicsDetectionJobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f)
            .field(
                "TopicsDetectionJobProperties",
                &self.topics_detection_job_properties,
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_entities_response() {
        let json = r#"{
            "Entities": [
                {"Score": 0.99, "Type": "PERSON", "Text": "Jeff", "BeginOffset": 0, "EndOffset": 4},
                {"Score": 0.42, "Type": "LOCATION", "Text": "Seattle", "BeginOffset": 14, "EndOffset": 21},
                {"Score": 0.97, "Type": "ENGINEER", "Text": "Ana", "BeginOffset": 30, "EndOffset": 33}
            ]
        }"#;

        let result: DetectEntitiesResult = serde_json::from_str(json).unwrap();
        let confident: Vec<_> = result
            .entities_above(0.9)
            .filter_map(|e| e.text.as_deref())
            .collect();
        assert_eq!(confident, vec!["Jeff", "Ana"]);

        let entities = result.entities.unwrap();
        assert_eq!(entities[0].entity_type, Some(EntityType::Person));
        assert_eq!(
            entities[2].entity_type,
            Some(EntityType::Unknown("ENGINEER".to_string()))
        );
    }

    #[test]
    fn test_start_job_result() {
        let json = r#"{"JobId": "123", "JobStatus": "SUBMITTED"}"#;
        let result: StartPiiEntitiesDetectionJobResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.job_status, Some(JobStatus::Submitted));
        assert_eq!(result.to_string(), "{JobId: 123,JobStatus: SUBMITTED}");
    }

    #[test]
    fn test_entity_rendering() {
        let entity = Entity::default()
            .with_type(EntityType::Organization)
            .with_text("Amazon")
            .with_begin_offset(3)
            .with_end_offset(9);
        assert_eq!(
            entity.to_string(),
            "{Type: ORGANIZATION,Text: Amazon,BeginOffset: 3,EndOffset: 9}"
        );
    }
}
