// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Construction Cloud Account Admin Client Library
//!
//! Typed access to the Account Admin endpoints: projects, project members,
//! account members, companies and business units. Requests are assembled by
//! `acc-marshal` and sent with a bearer token from a [`TokenProvider`].
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use acc_admin_client::{AdminClient, ClientConfig, GetProjectsOptions, StaticToken};
//! use acc_admin_client::types::{ProjectStatus, Region};
//!
//! let config = ClientConfig::from_env().with_region(Region::Us);
//! let client = AdminClient::new(&config, Arc::new(StaticToken::new(token)))?;
//!
//! let options = GetProjectsOptions {
//!     status: Some(vec![ProjectStatus::Active]),
//!     limit: Some(50),
//!     ..Default::default()
//! };
//! let page = client.projects().get_projects(account_id, &options).await?;
//! ```
//!
//! ### Acting on behalf of a user
//!
//! Some write endpoints require a `User-Id` when called with a two-legged
//! token:
//!
//! ```ignore
//! let admin = client.as_user("PER8KQPK2JRT");
//! admin.project_users().assign_project_user(project_id, &payload).await?;
//! ```

pub mod apis;
pub mod auth;
pub mod config;
pub mod error;
pub mod transport;

use std::sync::Arc;

pub use apis::{
    AccountUsersApi, BusinessUnitsApi, CompaniesApi, GetProjectUsersOptions, GetProjectsOptions,
    ListOptions, ProjectUsersApi, ProjectsApi, SearchCompaniesOptions, SearchUsersOptions,
};
pub use auth::{StaticToken, TokenProvider};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use transport::ApiClient;

/// Model and enum types, re-exported from `acc-admin-api`
pub mod types {
    pub use acc_admin_api::*;
}

use acc_admin_api::Region;

/// Entry point for the Account Admin API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct AdminClient {
    transport: ApiClient,
    region: Option<Region>,
    user_id: Option<String>,
}

impl AdminClient {
    /// Create a client from `config`.
    ///
    /// # Errors
    /// Fails if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        Ok(Self {
            transport: ApiClient::new(config, tokens)?,
            region: config.region,
            user_id: None,
        })
    }

    /// A copy of this client that sends `User-Id: user_id` on every request.
    ///
    /// `user_id` is an ACC user id or an Autodesk id.
    pub fn as_user(&self, user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..self.clone()
        }
    }

    /// A copy of this client that sends `Region: region` on every request.
    pub fn in_region(&self, region: Region) -> Self {
        Self {
            region: Some(region),
            ..self.clone()
        }
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn transport(&self) -> &ApiClient {
        &self.transport
    }

    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi { client: self }
    }

    pub fn project_users(&self) -> ProjectUsersApi<'_> {
        ProjectUsersApi { client: self }
    }

    pub fn account_users(&self) -> AccountUsersApi<'_> {
        AccountUsersApi { client: self }
    }

    pub fn companies(&self) -> CompaniesApi<'_> {
        CompaniesApi { client: self }
    }

    pub fn business_units(&self) -> BusinessUnitsApi<'_> {
        BusinessUnitsApi { client: self }
    }
}
