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

/// Generates the chained `with_*` mutators of a model type.
///
/// `value` entries overwrite the field; `list` entries append to it, creating
/// the list when it was absent.
macro_rules! with_fields {
    ($ty:ident { $($kind:ident $method:ident => $field:ident: $arg:ty),* $(,)? }) => {
        impl $ty {
            $(with_fields!(@method $kind $method $field $arg);)*
        }
    };
    (@method value $method:ident $field:ident $arg:ty) => {
        #[doc = concat!("Sets `", stringify!($field), "` and returns the updated value.")]
        pub fn $method(mut self, value: impl Into<$arg>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
    (@method list $method:ident $field:ident $arg:ty) => {
        #[doc = concat!("Appends to `", stringify!($field), "` and returns the updated value.")]
        pub fn $method<I>(mut self, items: I) -> Self
        where
            I: IntoIterator,
            I::Item: Into<$arg>,
        {
            self.$field
                .get_or_insert_with(Vec::new)
                .extend(items.into_iter().map(Into::into));
            self
        }
    };
}
