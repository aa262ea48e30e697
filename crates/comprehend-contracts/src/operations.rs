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

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ContractError;
use crate::requests::{
    CreateDocumentClassifierRequest, CreateEntityRecognizerRequest,
    DescribeDocumentClassifierRequest, DescribeEntityRecognizerRequest,
    DescribeEventsDetectionJobRequest, DescribePiiEntitiesDetectionJobRequest,
    DescribeTopicsDetectionJobRequest, DetectEntitiesRequest, StartEventsDetectionJobRequest,
    StartPiiEntitiesDetectionJobRequest, StartTopicsDetectionJobRequest,
};
use crate::responses::{
    CreateDocumentClassifierResult, CreateEntityRecognizerResult,
    DescribeDocumentClassifierResult, DescribeEntityRecognizerResult,
    DescribeEventsDetectionJobResult, DescribePiiEntitiesDetectionJobResult,
    DescribeTopicsDetectionJobResult, DetectEntitiesResult, StartEventsDetectionJobResult,
    StartPiiEntitiesDetectionJobResult, StartTopicsDetectionJobResult,
};
use crate::types::LanguageCode;
use crate::validation::Validate;

/// Prefix of the `X-Amz-Target` header for this API version.
pub const TARGET_PREFIX: &str = "Comprehend_20171127";

macro_rules! operations {
    ($($variant:ident),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Operation {
            $($variant,)+
        }

        impl Operation {
            const ALL: &'static [Operation] = &[$(Operation::$variant,)+];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Operation::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

operations!(
    BatchDetectDominantLanguage,
    BatchDetectEntities,
    BatchDetectKeyPhrases,
    BatchDetectSentiment,
    BatchDetectSyntax,
    BatchDetectTargetedSentiment,
    ClassifyDocument,
    ContainsPiiEntities,
    CreateDataset,
    CreateDocumentClassifier,
    CreateEndpoint,
    CreateEntityRecognizer,
    CreateFlywheel,
    DeleteDocumentClassifier,
    DeleteEndpoint,
    DeleteEntityRecognizer,
    DeleteFlywheel,
    DeleteResourcePolicy,
    DescribeDataset,
    DescribeDocumentClassificationJob,
    DescribeDocumentClassifier,
    DescribeDominantLanguageDetectionJob,
    DescribeEndpoint,
    DescribeEntitiesDetectionJob,
    DescribeEntityRecognizer,
    DescribeEventsDetectionJob,
    DescribeFlywheel,
    DescribeFlywheelIteration,
    DescribeKeyPhrasesDetectionJob,
    DescribePiiEntitiesDetectionJob,
    DescribeResourcePolicy,
    DescribeSentimentDetectionJob,
    DescribeTargetedSentimentDetectionJob,
    DescribeTopicsDetectionJob,
    DetectDominantLanguage,
    DetectEntities,
    DetectKeyPhrases,
    DetectPiiEntities,
    DetectSentiment,
    DetectSyntax,
    DetectTargetedSentiment,
    DetectToxicContent,
    ImportModel,
    ListDatasets,
    ListDocumentClassificationJobs,
    ListDocumentClassifierSummaries,
    ListDocumentClassifiers,
    ListDominantLanguageDetectionJobs,
    ListEndpoints,
    ListEntitiesDetectionJobs,
    ListEntityRecognizerSummaries,
    ListEntityRecognizers,
    ListEventsDetectionJobs,
    ListFlywheelIterationHistory,
    ListFlywheels,
    ListKeyPhrasesDetectionJobs,
    ListPiiEntitiesDetectionJobs,
    ListSentimentDetectionJobs,
    ListTagsForResource,
    ListTargetedSentimentDetectionJobs,
    ListTopicsDetectionJobs,
    PutResourcePolicy,
    StartDocumentClassificationJob,
    StartDominantLanguageDetectionJob,
    StartEntitiesDetectionJob,
    StartEventsDetectionJob,
    StartFlywheelIteration,
    StartKeyPhrasesDetectionJob,
    StartPiiEntitiesDetectionJob,
    StartSentimentDetectionJob,
    StartTargetedSentimentDetectionJob,
    StartTopicsDetectionJob,
    StopDominantLanguageDetectionJob,
    StopEntitiesDetectionJob,
    StopEventsDetectionJob,
    StopKeyPhrasesDetectionJob,
    StopPiiEntitiesDetectionJob,
    StopSentimentDetectionJob,
    StopTargetedSentimentDetectionJob,
    StopTrainingDocumentClassifier,
    StopTrainingEntityRecognizer,
    TagResource,
    UntagResource,
    UpdateEndpoint,
    UpdateFlywheel,
);

impl Operation {
    pub fn all() -> &'static [Operation] {
        Self::ALL
    }

    /// Value of the `X-Amz-Target` header.
    pub fn target(&self) -> String {
        format!("{}.{}", TARGET_PREFIX, self.name())
    }

    /// Whether this crate carries request and response types for the operation.
    pub fn is_modeled(&self) -> bool {
        matches!(
            self,
            Operation::CreateDocumentClassifier
                | Operation::CreateEntityRecognizer
                | Operation::DetectEntities
                | Operation::DescribeDocumentClassifier
                | Operation::DescribeEntityRecognizer
                | Operation::StartEventsDetectionJob
                | Operation::StartPiiEntitiesDetectionJob
                | Operation::StartTopicsDetectionJob
                | Operation::DescribeEventsDetectionJob
                | Operation::DescribePiiEntitiesDetectionJob
                | Operation::DescribeTopicsDetectionJob
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ContractError;

    /// Accepts the bare name or the full target string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s
            .trim()
            .strip_prefix(TARGET_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or_else(|| s.trim());
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == name)
            .ok_or_else(|| ContractError::UnknownOperation(s.to_string()))
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// A request body bound to its operation and response shape.
pub trait ServiceRequest: Validate + Serialize + DeserializeOwned + Clone + fmt::Display {
    type Output: DeserializeOwned + fmt::Display;

    const OPERATION: Operation;

    /// Fills an unset `LanguageCode`; requests without one ignore it.
    fn apply_default_language(&mut self, _code: &LanguageCode) {}
}

macro_rules! service_request {
    ($request:ident => $output:ident, $op:ident) => {
        impl ServiceRequest for $request {
            type Output = $output;
            const OPERATION: Operation = Operation::$op;
        }
    };
    ($request:ident => $output:ident, $op:ident, language_code) => {
        impl ServiceRequest for $request {
            type Output = $output;
            const OPERATION: Operation = Operation::$op;

            fn apply_default_language(&mut self, code: &LanguageCode) {
                if self.language_code.is_none() {
                    self.language_code = Some(code.clone());
                }
            }
        }
    };
}

service_request!(CreateDocumentClassifierRequest => CreateDocumentClassifierResult, CreateDocumentClassifier, language_code);
service_request!(CreateEntityRecognizerRequest => CreateEntityRecognizerResult, CreateEntityRecognizer, language_code);
service_request!(StartEventsDetectionJobRequest => StartEventsDetectionJobResult, StartEventsDetectionJob, language_code);
service_request!(StartPiiEntitiesDetectionJobRequest => StartPiiEntitiesDetectionJobResult, StartPiiEntitiesDetectionJob, language_code);
service_request!(StartTopicsDetectionJobRequest => StartTopicsDetectionJobResult, StartTopicsDetectionJob);
service_request!(DescribeDocumentClassifierRequest => DescribeDocumentClassifierResult, DescribeDocumentClassifier);
service_request!(DescribeEntityRecognizerRequest => DescribeEntityRecognizerResult, DescribeEntityRecognizer);
service_request!(DescribeEventsDetectionJobRequest => DescribeEventsDetectionJobResult, DescribeEventsDetectionJob);
service_request!(DescribePiiEntitiesDetectionJobRequest => DescribePiiEntitiesDetectionJobResult, DescribePiiEntitiesDetectionJob);
service_request!(DescribeTopicsDetectionJobRequest => DescribeTopicsDetectionJobResult, DescribeTopicsDetectionJob);

impl ServiceRequest for DetectEntitiesRequest {
    type Output = DetectEntitiesResult;
    const OPERATION: Operation = Operation::DetectEntities;

    /// Custom endpoints infer the language from the model.
    fn apply_default_language(&mut self, code: &LanguageCode) {
        if self.language_code.is_none() && self.endpoint_arn.is_none() {
            self.language_code = Some(code.clone());
        }
    }
}
