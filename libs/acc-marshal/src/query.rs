// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Query parameter encoding
//!
//! Encoding policy, first match wins:
//!
//! | Shape            | Included when            | Wire form                         |
//! |------------------|--------------------------|-----------------------------------|
//! | enum             | always                   | member's wire string              |
//! | integer          | `value > 0`              | decimal                           |
//! | list of strings  | always (empty gives `""`)| comma-joined, verbatim            |
//! | list of enums    | always                   | wire strings comma-joined in order|
//! | string / boolean | always                   | natural string form               |
//!
//! Absent arguments never reach the encoder. Note that an explicit `0`
//! cannot be told apart from "not provided"; existing callers rely on
//! zero meaning "server default".

use std::collections::BTreeMap;

use crate::error::MarshalError;
use crate::wire::{EnumValue, WireEnum};

/// A query argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Enum(EnumValue),
    StrList(Vec<String>),
    EnumList(Vec<EnumValue>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        QueryValue::StrList(value)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(value: Vec<&str>) -> Self {
        QueryValue::StrList(value.into_iter().map(str::to_string).collect())
    }
}

impl<E: WireEnum> From<E> for QueryValue {
    fn from(value: E) -> Self {
        QueryValue::Enum(EnumValue::of(value))
    }
}

impl<E: WireEnum> From<Vec<E>> for QueryValue {
    fn from(value: Vec<E>) -> Self {
        QueryValue::EnumList(value.into_iter().map(EnumValue::of).collect())
    }
}

/// Encode one query argument.
///
/// Returns `Ok(None)` when the policy omits the parameter.
pub fn encode_query_parameter(
    name: &str,
    value: &QueryValue,
) -> Result<Option<(String, String)>, MarshalError> {
    let wire = match value {
        QueryValue::Enum(e) => e.wire()?.to_string(),
        QueryValue::Int(n) => {
            if *n <= 0 {
                tracing::trace!(name, value = n, "omitting non-positive integer query parameter");
                return Ok(None);
            }
            n.to_string()
        }
        QueryValue::StrList(items) => items.join(","),
        QueryValue::EnumList(items) => items
            .iter()
            .map(EnumValue::wire)
            .collect::<Result<Vec<_>, _>>()?
            .join(","),
        QueryValue::Str(s) => s.clone(),
        QueryValue::Bool(b) => b.to_string(),
    };
    Ok(Some((name.to_string(), wire)))
}

/// Query parameters accumulated for one outgoing call.
///
/// Keys are kept sorted so that marshalling the same arguments twice
/// yields byte-identical query strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an optional argument; see [`add_query_parameter`].
    pub fn add<V: Into<QueryValue>>(
        &mut self,
        name: &str,
        value: Option<V>,
    ) -> Result<&mut Self, MarshalError> {
        add_query_parameter(name, value, self)?;
        Ok(self)
    }

    /// Insert an already-encoded pair, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `k=v&k=v` with keys and values percent-encoded.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Add `value` under `name` when present and included by the policy.
pub fn add_query_parameter<V: Into<QueryValue>>(
    name: &str,
    value: Option<V>,
    into: &mut QueryParams,
) -> Result<(), MarshalError> {
    let Some(value) = value else {
        return Ok(());
    };
    if let Some((k, v)) = encode_query_parameter(name, &value.into())? {
        into.insert(k, v);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[derive(Clone, Copy, Debug, strum::IntoStaticStr)]
    enum Status {
        #[strum(serialize = "active")]
        Active,
        #[strum(serialize = "not_invited")]
        NotInvited,
    }
    crate::wire_enum!(Status);

    fn encode(value: impl Into<QueryValue>) -> Option<(String, String)> {
        encode_query_parameter("x", &value.into()).unwrap()
    }

    #[test_case(5, Some("5") ; "positive")]
    #[test_case(1, Some("1") ; "one")]
    #[test_case(0, None ; "zero")]
    #[test_case(-1, None ; "negative")]
    fn test_integer_rule(n: i64, expected: Option<&str>) {
        assert_eq!(encode(n).map(|(_, v)| v), expected.map(str::to_string));
    }

    #[test]
    fn test_enum_uses_wire_string() {
        assert_eq!(
            encode(Status::NotInvited),
            Some(("x".to_string(), "not_invited".to_string()))
        );
    }

    #[test]
    fn test_string_list_joined_verbatim() {
        assert_eq!(encode(vec!["a", "b"]).unwrap().1, "a,b");
        assert_eq!(encode(vec!["name asc", "id"]).unwrap().1, "name asc,id");
    }

    #[test]
    fn test_empty_string_list_is_included() {
        assert_eq!(encode(Vec::<String>::new()), Some(("x".to_string(), String::new())));
    }

    #[test]
    fn test_enum_list_in_input_order() {
        assert_eq!(
            encode(vec![Status::NotInvited, Status::Active]).unwrap().1,
            "not_invited,active"
        );
    }

    #[test]
    fn test_scalars_use_natural_form() {
        assert_eq!(encode("hello").unwrap().1, "hello");
        assert_eq!(encode(true).unwrap().1, "true");
        assert_eq!(encode(false).unwrap().1, "false");
        assert_eq!(encode("").unwrap().1, "");
    }

    #[test]
    fn test_absent_value_is_skipped() {
        let mut q = QueryParams::new();
        add_query_parameter("limit", None::<i64>, &mut q).unwrap();
        add_query_parameter("limit", Some(0), &mut q).unwrap();
        assert!(q.is_empty());
        add_query_parameter("limit", Some(10), &mut q).unwrap();
        assert_eq!(q.get("limit"), Some("10"));
    }

    #[test]
    fn test_query_string_is_percent_encoded() {
        let mut q = QueryParams::new();
        q.add("sort", Some("name asc")).unwrap();
        q.add("filter[status]", Some(vec![Status::Active])).unwrap();
        assert_eq!(
            q.to_query_string(),
            "filter%5Bstatus%5D=active&sort=name%20asc"
        );
    }
}
