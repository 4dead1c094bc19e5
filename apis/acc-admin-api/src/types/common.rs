// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across the Account Admin API

use serde::{Deserialize, Serialize};

/// UUID type
pub type Uuid = uuid::Uuid;

/// RFC3339 timestamp
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Pagination block returned with `/construction/admin/v1` listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Page size used by the server
    pub limit: u32,
    /// Index of the first result in this page
    pub offset: u32,
    /// Total matching results
    pub total_results: u32,
    /// URL of the next page, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    /// URL of the previous page, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_url: Option<String>,
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub pagination: Pagination,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// True when the server reports more results past this page
    pub fn has_more(&self) -> bool {
        let p = &self.pagination;
        p.next_url.is_some() || p.offset as u64 + (self.results.len() as u64) < p.total_results as u64
    }
}

/// Error detail as returned by the API
///
/// The two route families disagree on shape: `/construction/admin/v1`
/// returns `{code, message, detail}` while `/hq/v1` returns
/// `{code, message}` or an `errors` array, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorBody>,
}

impl ErrorBody {
    /// Best human-readable summary available
    pub fn summary(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.detail.as_deref())
            .or_else(|| self.errors.iter().find_map(|e| e.summary()))
    }
}

/// Phone number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// "mobile", "office", ...
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub phone_type: Option<String>,
}

/// Outcome of an `/hq/v1` bulk import
///
/// `T` is the created entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ImportResult<T> {
    /// Number of items created
    pub success: u32,
    /// Number of items rejected
    pub failure: u32,
    #[serde(default)]
    pub success_items: Vec<T>,
    #[serde(default)]
    pub failure_items: Vec<ImportFailure>,
}

/// A rejected item from a bulk import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportFailure {
    /// The item as submitted
    pub item: serde_json::Value,
    #[serde(default)]
    pub errors: Vec<ErrorBody>,
}
