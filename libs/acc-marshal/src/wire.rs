// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Enum-to-wire-string resolution
//!
//! Every enumerated type sent over the wire implements [`WireEnum`]. The
//! mapping from member to wire string is a static table owned by the enum
//! type itself (in practice a strum `IntoStaticStr` derive with an explicit
//! `serialize = "..."` per member), so strings such as `"name asc"` never
//! have to be derived from the member's identifier.

use std::fmt;

use crate::error::MarshalError;

/// An enumerated type with a closed set of members, each carrying one
/// canonical external string.
pub trait WireEnum: Copy + fmt::Debug + 'static {
    /// Type name reported in [`MarshalError::UnmappedEnum`].
    const TYPE_NAME: &'static str;

    /// The member's wire string, or `None` if the table has no entry.
    fn wire_name(self) -> Option<&'static str>;
}

/// Implements [`WireEnum`] for enums deriving `strum::IntoStaticStr`.
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, strum::IntoStaticStr)]
/// enum SortBy {
///     #[strum(serialize = "name asc")]
///     NameAsc,
/// }
/// acc_marshal::wire_enum!(SortBy);
/// ```
#[macro_export]
macro_rules! wire_enum {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::WireEnum for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn wire_name(self) -> Option<&'static str> {
                    Some(<&'static str>::from(self))
                }
            }
        )+
    };
}

/// A type-erased enum member, carried inside [`crate::QueryValue`] and
/// [`crate::HeaderValue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    type_name: &'static str,
    member: String,
    wire: Option<&'static str>,
}

impl EnumValue {
    /// Capture an enum member together with its table entry.
    pub fn of<E: WireEnum>(value: E) -> Self {
        Self {
            type_name: E::TYPE_NAME,
            member: format!("{value:?}"),
            wire: value.wire_name(),
        }
    }

    /// Name of the enumerated type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Debug name of the member
    pub fn member(&self) -> &str {
        &self.member
    }

    /// Resolve the member's wire string.
    ///
    /// A missing or empty entry is a configuration error; the parameter is
    /// never silently dropped.
    pub fn wire(&self) -> Result<&'static str, MarshalError> {
        match self.wire {
            Some(s) if !s.is_empty() => Ok(s),
            _ => Err(MarshalError::UnmappedEnum {
                type_name: self.type_name,
                member: self.member.clone(),
            }),
        }
    }
}

impl<E: WireEnum> From<E> for EnumValue {
    fn from(value: E) -> Self {
        EnumValue::of(value)
    }
}

/// Resolve a single member directly.
pub fn wire_name<E: WireEnum>(value: E) -> Result<&'static str, MarshalError> {
    EnumValue::of(value).wire()
}
