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

use std::fs;

use comprehend_contracts::{
    ClientConfig, ConfigError, ContractError, DetectEntitiesRequest, LanguageCode,
    ValidationMode, WireCodec,
};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn toml_file_drives_the_codec() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "comprehend.toml",
        r#"
region = "ca-central-1"
validation = "strict"
default_language_code = "fr"
user_agent_suffix = "ingest/2"
"#,
    );
    let config = ClientConfig::from_file(&path).unwrap();
    let codec = WireCodec::new(config);

    let wire = codec
        .encode_request(&DetectEntitiesRequest::default().with_text("Bonjour Paris"))
        .unwrap();
    assert_eq!(wire.endpoint, "https://comprehend.ca-central-1.amazonaws.com");
    assert!(wire.body.contains(r#""LanguageCode":"fr""#));
    assert!(wire.user_agent.ends_with("ingest/2"));
}

#[test]
fn yaml_and_yml_extensions_load() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["client.yaml", "client.YML"] {
        let path = write(&dir, name, "region: sa-east-1\nvalidation: \"off\"\n");
        let config = ClientConfig::from_file(&path).unwrap();
        assert_eq!(config.region, "sa-east-1");
        assert_eq!(config.validation, ValidationMode::Off);
    }
}

#[test]
fn empty_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "empty.toml", "");
    assert_eq!(ClientConfig::from_file(&path).unwrap(), ClientConfig::default());
}

#[test]
fn malformed_files_report_their_format() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = write(&dir, "bad.toml", "region = ");
    assert!(matches!(
        ClientConfig::from_file(&toml_path),
        Err(ConfigError::TomlParse { .. })
    ));

    let yaml_path = write(&dir, "bad.yaml", "region: [unterminated");
    assert!(matches!(
        ClientConfig::from_file(&yaml_path),
        Err(ConfigError::YamlParse { .. })
    ));
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let blank_region = write(&dir, "blank.toml", r#"region = "  ""#);
    assert!(matches!(
        ClientConfig::from_file(&blank_region),
        Err(ConfigError::MissingRequired { ref field }) if field == "region"
    ));

    let bad_language = write(&dir, "lang.toml", r#"default_language_code = "tlh""#);
    let err: ContractError = ClientConfig::from_file(&bad_language).unwrap_err().into();
    assert_eq!(err.category(), "Configuration");
}

#[test]
fn env_style_overrides_layer_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "base.toml", r#"region = "us-east-2""#);
    let mut config = ClientConfig::from_file(&path).unwrap();
    config
        .apply_overrides_from(|key| match key {
            "COMPREHEND_ENDPOINT" => Some("http://localhost:4566".to_string()),
            "COMPREHEND_LANGUAGE_CODE" => Some("ko".to_string()),
            _ => None,
        })
        .unwrap();
    assert_eq!(config.region, "us-east-2");
    assert_eq!(config.resolved_endpoint(), "http://localhost:4566");
    assert_eq!(config.default_language_code, Some(LanguageCode::Ko));
}
