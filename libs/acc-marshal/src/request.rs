// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! The request being assembled for one call

use std::collections::BTreeMap;

use http::Method;

use crate::error::MarshalError;
use crate::query::QueryParams;
use crate::route::build_request_uri;

/// Header collection.
///
/// Names compare case-insensitively but keep the spelling they were first
/// given with; setting an existing name replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    // lowercased name -> (name as given, value)
    entries: BTreeMap<String, (String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.get_mut(&name.to_ascii_lowercase()) {
            Some(entry) => entry.1 = value,
            None => {
                self.entries.insert(name.to_ascii_lowercase(), (name, value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate as `(name as given, value)`
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Request body plus its content headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    pub payload: Option<Vec<u8>>,
    pub headers: Headers,
}

/// Everything needed to issue one HTTP call, before it is handed to the
/// transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub method: Method,
    /// Route template, e.g. `/projects/{projectId}/users`
    pub route: String,
    /// Values for the template's placeholders
    pub route_params: Vec<(String, String)>,
    pub query: QueryParams,
    pub headers: Headers,
    pub body: Body,
}

impl OutgoingRequest {
    pub fn new(method: Method, route: impl Into<String>) -> Self {
        Self {
            method,
            route: route.into(),
            route_params: Vec::new(),
            query: QueryParams::new(),
            headers: Headers::new(),
            body: Body::default(),
        }
    }

    /// Set the value for the `{name}` placeholder, replacing any earlier one.
    pub fn route_param(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.route_params.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.route_params.push((name, value)),
        }
        self
    }

    /// Substituted path and query string, ready to be resolved against a
    /// base URL. See [`build_request_uri`].
    pub fn uri(&self) -> Result<String, MarshalError> {
        let params: Vec<(&str, &str)> = self
            .route_params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        build_request_uri(&self.route, &params, &self.query)
    }
}
