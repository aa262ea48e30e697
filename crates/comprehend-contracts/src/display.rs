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

//! Diagnostic rendering shared by every model type.
//!
//! Output has the shape `{Name: value,Name: value}` and lists only the fields
//! that are set. It is meant for logs, never for the wire.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

pub(crate) struct FieldRenderer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

pub(crate) fn render<'a, 'b>(f: &'a mut fmt::Formatter<'b>) -> FieldRenderer<'a, 'b> {
    let result = f.write_str("{");
    FieldRenderer {
        f,
        result,
        has_fields: false,
    }
}

impl FieldRenderer<'_, '_> {
    fn name(&mut self, name: &str) {
        self.result = self.result.and_then(|()| {
            if self.has_fields {
                self.f.write_str(",")?;
            }
            write!(self.f, "{name}: ")
        });
        self.has_fields = true;
    }

    pub(crate) fn field<T: fmt::Display>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.name(name);
            self.result = self.result.and_then(|()| write!(self.f, "{value}"));
        }
        self
    }

    pub(crate) fn list<T: fmt::Display>(&mut self, name: &str, value: &Option<Vec<T>>) -> &mut Self {
        if let Some(items) = value {
            self.name(name);
            self.result = self.result.and_then(|()| {
                self.f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.f.write_str(", ")?;
                    }
                    write!(self.f, "{item}")?;
                }
                self.f.write_str("]")
            });
        }
        self
    }

    pub(crate) fn timestamp(&mut self, name: &str, value: &Option<DateTime<Utc>>) -> &mut Self {
        if let Some(ts) = value {
            self.name(name);
            let rendered = ts.to_rfc3339_opts(SecondsFormat::AutoSi, true);
            self.result = self.result.and_then(|()| self.f.write_str(&rendered));
        }
        self
    }

    pub(crate) fn bytes(&mut self, name: &str, value: &Option<Vec<u8>>) -> &mut Self {
        if let Some(bytes) = value {
            self.name(name);
            self.result = self
                .result
                .and_then(|()| write!(self.f, "<{} bytes>", bytes.len()));
        }
        self
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|()| self.f.write_str("}"))
    }
}
