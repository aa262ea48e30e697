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

//! Typed request, response and configuration shapes for the Comprehend
//! 2017-11-27 JSON API.

#[macro_use]
mod macros;

mod display;

pub mod config;
pub mod data_config;
pub mod error;
pub mod operations;
pub mod properties;
pub mod requests;
pub mod responses;
pub mod serde_ext;
pub mod types;
pub mod validation;
pub mod wire;

pub use config::{ClientConfig, ValidationMode};
pub use data_config::*;
pub use error::{
    ConfigError, ConfigResult, ContractError, ContractResult, SerialisationError,
    ValidationErrors, Violation, ViolationRule,
};
pub use operations::{Operation, ServiceRequest};
pub use properties::*;
pub use requests::*;
pub use responses::*;
pub use types::*;
pub use validation::{Validate, Validator};
pub use wire::{from_json, to_json, WireCodec, WireRequest};
