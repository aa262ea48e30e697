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

//! String-backed enumerations of the service API.
//!
//! Every enum keeps an `Unknown(String)` variant so values added on the server
//! after this crate was built still round-trip unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Common surface of the string-backed enums, for code generic over them.
pub trait WireEnum {
    fn as_str(&self) -> &str;
    fn is_known(&self) -> bool;
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A value this client does not know about.
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(s) => s.as_str(),
                }
            }

            /// Wire strings of every known variant, in declaration order.
            pub fn values() -> &'static [&'static str] {
                &[$($wire),+]
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl WireEnum for $name {
            fn as_str(&self) -> &str {
                $name::as_str(self)
            }

            fn is_known(&self) -> bool {
                $name::is_known(self)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($wire => Self::$variant,)+
                    _ => Self::Unknown(s.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Unknown(s),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

wire_enum! {
    /// Languages supported for custom model training and entity detection.
    LanguageCode {
        En => "en",
        Es => "es",
        Fr => "fr",
        De => "de",
        It => "it",
        Pt => "pt",
        Ar => "ar",
        Hi => "hi",
        Ja => "ja",
        Ko => "ko",
        Zh => "zh",
        ZhTw => "zh-TW",
    }
}

wire_enum! {
    /// Training status of a custom classifier or entity recognizer.
    ModelStatus {
        Submitted => "SUBMITTED",
        Training => "TRAINING",
        Deleting => "DELETING",
        StopRequested => "STOP_REQUESTED",
        Stopped => "STOPPED",
        InError => "IN_ERROR",
        Trained => "TRAINED",
    }
}

impl ModelStatus {
    /// Whether the service has finished moving this model between states.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Trained | Self::InError | Self::Stopped)
    }
}

wire_enum! {
    /// Status of an asynchronous analysis job.
    JobStatus {
        Submitted => "SUBMITTED",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Failed => "FAILED",
        StopRequested => "STOP_REQUESTED",
        Stopped => "STOPPED",
    }
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Stopped)
    }
}

wire_enum! {
    DocumentClassifierDataFormat {
        ComprehendCsv => "COMPREHEND_CSV",
        AugmentedManifest => "AUGMENTED_MANIFEST",
    }
}

wire_enum! {
    EntityRecognizerDataFormat {
        ComprehendCsv => "COMPREHEND_CSV",
        AugmentedManifest => "AUGMENTED_MANIFEST",
    }
}

wire_enum! {
    /// Whether a classifier assigns one label or several per document.
    DocumentClassifierMode {
        MultiClass => "MULTI_CLASS",
        MultiLabel => "MULTI_LABEL",
    }
}

wire_enum! {
    /// Which dataset an augmented manifest contributes to.
    Split {
        Train => "TRAIN",
        Test => "TEST",
    }
}

wire_enum! {
    AugmentedManifestsDocumentTypeFormat {
        PlainTextDocument => "PLAIN_TEXT_DOCUMENT",
        SemiStructuredDocument => "SEMI_STRUCTURED_DOCUMENT",
    }
}

wire_enum! {
    /// How documents are laid out in the input files of a job.
    InputFormat {
        OneDocPerFile => "ONE_DOC_PER_FILE",
        OneDocPerLine => "ONE_DOC_PER_LINE",
    }
}

wire_enum! {
    PiiEntitiesDetectionMode {
        OnlyRedaction => "ONLY_REDACTION",
        OnlyOffsets => "ONLY_OFFSETS",
    }
}

wire_enum! {
    PiiEntitiesDetectionMaskMode {
        Mask => "MASK",
        ReplaceWithPiiEntityType => "REPLACE_WITH_PII_ENTITY_TYPE",
    }
}

wire_enum! {
    PiiEntityType {
        BankAccountNumber => "BANK_ACCOUNT_NUMBER",
        BankRouting => "BANK_ROUTING",
        CreditDebitNumber => "CREDIT_DEBIT_NUMBER",
        CreditDebitCvv => "CREDIT_DEBIT_CVV",
        CreditDebitExpiry => "CREDIT_DEBIT_EXPIRY",
        Pin => "PIN",
        Email => "EMAIL",
        Address => "ADDRESS",
        Name => "NAME",
        Phone => "PHONE",
        Ssn => "SSN",
        DateTime => "DATE_TIME",
        PassportNumber => "PASSPORT_NUMBER",
        DriverId => "DRIVER_ID",
        Url => "URL",
        Age => "AGE",
        Username => "USERNAME",
        Password => "PASSWORD",
        AwsAccessKey => "AWS_ACCESS_KEY",
        AwsSecretKey => "AWS_SECRET_KEY",
        IpAddress => "IP_ADDRESS",
        MacAddress => "MAC_ADDRESS",
        All => "ALL",
    }
}

wire_enum! {
    /// Built-in entity types. Custom recognizers report their own type names,
    /// which arrive as `Unknown`.
    EntityType {
        Person => "PERSON",
        Location => "LOCATION",
        Organization => "ORGANIZATION",
        CommercialItem => "COMMERCIAL_ITEM",
        Event => "EVENT",
        Date => "DATE",
        Quantity => "QUANTITY",
        Title => "TITLE",
        Other => "OTHER",
    }
}

wire_enum! {
    /// Text extraction API used for image and PDF input.
    DocumentReadAction {
        TextractDetectDocumentText => "TEXTRACT_DETECT_DOCUMENT_TEXT",
        TextractAnalyzeDocument => "TEXTRACT_ANALYZE_DOCUMENT",
    }
}

wire_enum! {
    DocumentReadMode {
        ServiceDefault => "SERVICE_DEFAULT",
        ForceDocumentReadAction => "FORCE_DOCUMENT_READ_ACTION",
    }
}

wire_enum! {
    DocumentReadFeatureTypes {
        Tables => "TABLES",
        Forms => "FORMS",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_and_raw_values_match() {
        assert_eq!(LanguageCode::from("en"), LanguageCode::En);
        assert_eq!(LanguageCode::from("zh-TW".to_string()), LanguageCode::ZhTw);
        assert_eq!(LanguageCode::ZhTw.as_str(), "zh-TW");
    }

    #[test]
    fn test_unknown_values_are_preserved() {
        let status = JobStatus::from("PAUSED");
        assert_eq!(status, JobStatus::Unknown("PAUSED".to_string()));
        assert_eq!(status.as_str(), "PAUSED");
        assert!(!status.is_known());
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_wire_mapping_is_case_sensitive() {
        assert!(!LanguageCode::from("EN").is_known());
        assert!(!Split::from("train").is_known());
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&PiiEntitiesDetectionMaskMode::ReplaceWithPiiEntityType)
            .unwrap();
        assert_eq!(json, "\"REPLACE_WITH_PII_ENTITY_TYPE\"");

        let parsed: ModelStatus = serde_json::from_str("\"STOP_REQUESTED\"").unwrap();
        assert_eq!(parsed, ModelStatus::StopRequested);

        let custom: EntityType = serde_json::from_str("\"PRODUCT_CODE\"").unwrap();
        assert_eq!(serde_json::to_string(&custom).unwrap(), "\"PRODUCT_CODE\"");
    }

    #[test]
    fn test_values_lists_every_known_variant() {
        assert_eq!(LanguageCode::values().len(), 12);
        for value in DocumentReadAction::values() {
            assert!(DocumentReadAction::from(*value).is_known());
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(ModelStatus::Trained.is_terminal());
        assert!(ModelStatus::InError.is_terminal());
        assert!(!ModelStatus::Training.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(!JobStatus::StopRequested.is_terminal());
    }
}
