// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Header encoding

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::MarshalError;
use crate::request::OutgoingRequest;
use crate::wire::{EnumValue, WireEnum};

/// The one header routed to the body's header collection. Matched
/// literally; other content headers go with the general headers.
pub const CONTENT_RANGE: &str = "Content-Range";

/// A header argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    Str(String),
    Int(i64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    Enum(EnumValue),
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::Str(value.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::Str(value)
    }
}

impl From<&String> for HeaderValue {
    fn from(value: &String) -> Self {
        HeaderValue::Str(value.clone())
    }
}

impl From<bool> for HeaderValue {
    fn from(value: bool) -> Self {
        HeaderValue::Bool(value)
    }
}

impl From<i32> for HeaderValue {
    fn from(value: i32) -> Self {
        HeaderValue::Int(i64::from(value))
    }
}

impl From<i64> for HeaderValue {
    fn from(value: i64) -> Self {
        HeaderValue::Int(value)
    }
}

impl From<u32> for HeaderValue {
    fn from(value: u32) -> Self {
        HeaderValue::Int(i64::from(value))
    }
}

impl From<DateTime<Utc>> for HeaderValue {
    fn from(value: DateTime<Utc>) -> Self {
        HeaderValue::DateTime(value)
    }
}

impl<E: WireEnum> From<E> for HeaderValue {
    fn from(value: E) -> Self {
        HeaderValue::Enum(EnumValue::of(value))
    }
}

/// Encode one header argument.
///
/// Date-times equal to [`DateTime::<Utc>::MIN_UTC`] are treated as unset
/// and omitted; others are rendered as RFC 3339. Integers are sent as given,
/// zero included.
pub fn encode_header(
    name: &str,
    value: &HeaderValue,
) -> Result<Option<(String, String)>, MarshalError> {
    let wire = match value {
        HeaderValue::DateTime(dt) => {
            if *dt == DateTime::<Utc>::MIN_UTC {
                tracing::trace!(name, "omitting unset date-time header");
                return Ok(None);
            }
            dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
        }
        HeaderValue::Enum(e) => e.wire()?.to_string(),
        HeaderValue::Str(s) => s.clone(),
        HeaderValue::Int(n) => n.to_string(),
        HeaderValue::Bool(b) => b.to_string(),
    };
    Ok(Some((name.to_string(), wire)))
}

/// Attach `value` under `name` when present.
///
/// `Content-Range` lands on the body's headers; everything else on the
/// request's general headers.
pub fn add_header<V: Into<HeaderValue>>(
    name: &str,
    value: Option<V>,
    into: &mut OutgoingRequest,
) -> Result<(), MarshalError> {
    let Some(value) = value else {
        return Ok(());
    };
    if let Some((k, v)) = encode_header(name, &value.into())? {
        if k == CONTENT_RANGE {
            into.body.headers.insert(k, v);
        } else {
            into.headers.insert(k, v);
        }
    }
    Ok(())
}
