// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Route template substitution

use crate::error::MarshalError;
use crate::query::QueryParams;

/// Replace every `{name}` in `template` with its value from `params`.
///
/// Values are inserted verbatim; escaping is left to the HTTP layer. A
/// `{` with no closing `}` is kept as literal text and unused params are
/// ignored. A placeholder without a value is a caller bug and is reported
/// as [`MarshalError::MissingRouteParameter`].
pub fn substitute_route(template: &str, params: &[(&str, &str)]) -> Result<String, MarshalError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let name = &after[..close];
        let value = params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
            .ok_or_else(|| MarshalError::MissingRouteParameter {
                name: name.to_string(),
                template: template.to_string(),
            })?;
        out.push_str(&rest[..open]);
        out.push_str(value);
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Substitute route params into `template` and append the query string.
pub fn build_request_uri(
    template: &str,
    route_params: &[(&str, &str)],
    query: &QueryParams,
) -> Result<String, MarshalError> {
    let path = substitute_route(template, route_params)?;
    if query.is_empty() {
        Ok(path)
    } else {
        Ok(format!("{}?{}", path, query.to_query_string()))
    }
}
