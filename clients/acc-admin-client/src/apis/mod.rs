// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Endpoint groups
//!
//! Each group is a borrowed handle obtained from [`crate::AdminClient`].

mod account_users;
mod business_units;
mod companies;
mod project_users;
mod projects;

pub use account_users::{AccountUsersApi, SearchUsersOptions};
pub use business_units::BusinessUnitsApi;
pub use companies::{CompaniesApi, SearchCompaniesOptions};
pub use project_users::{GetProjectUsersOptions, ProjectUsersApi};
pub use projects::{GetProjectsOptions, ProjectsApi};

use std::fmt::Display;

use acc_marshal::{OutgoingRequest, add_header};
use http::Method;
use serde::Serialize;

use crate::AdminClient;
use crate::error::Result;

/// Paging and projection for the `/hq/v1` list endpoints
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Page size (the service caps it at 100)
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    /// Field names, each optionally suffixed with ` asc` or ` desc`
    pub sort: Option<Vec<String>>,
    /// Field names to return
    pub field: Option<Vec<String>>,
}

impl ListOptions {
    fn apply(&self, request: &mut OutgoingRequest) -> Result<()> {
        request
            .query
            .add("limit", self.limit)?
            .add("offset", self.offset)?
            .add("sort", self.sort.clone())?
            .add("field", self.field.clone())?;
        Ok(())
    }
}

/// Start a request for the `route` template with its placeholder values and
/// the client's `Region` and `User-Id` headers attached.
fn start(
    client: &AdminClient,
    method: Method,
    route: &str,
    params: &[(&str, &dyn Display)],
) -> Result<OutgoingRequest> {
    let mut request = OutgoingRequest::new(method, route);
    for (name, value) in params {
        request.route_param(*name, value.to_string());
    }
    add_header("Region", client.region(), &mut request)?;
    add_header("User-Id", client.user_id(), &mut request)?;
    Ok(request)
}

fn set_json_body<T: Serialize + ?Sized>(request: &mut OutgoingRequest, body: &T) -> Result<()> {
    request.body.payload = Some(serde_json::to_vec(body)?);
    request.body.headers.insert("Content-Type", "application/json");
    Ok(())
}
