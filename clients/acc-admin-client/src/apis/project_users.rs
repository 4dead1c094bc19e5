// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use acc_admin_api::{
    FilterTextMatch, Page, Product, ProjectUser, ProjectUserFields, ProjectUserPatch,
    ProjectUserPayload, ProjectUserSortBy, ProjectUserStatus, ProjectUsersImportJob,
    ProjectUsersImportPayload, Uuid,
};
use http::Method;

use super::{set_json_body, start};
use crate::AdminClient;
use crate::error::Result;

const PROJECT_USERS: &str = "/construction/admin/v1/projects/{projectId}/users";
const PROJECT_USER: &str = "/construction/admin/v1/projects/{projectId}/users/{userId}";
const PROJECT_USERS_IMPORT: &str = "/construction/admin/v1/projects/{projectId}/users:import";

/// Filters and paging for [`ProjectUsersApi::get_project_users`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetProjectUsersOptions {
    pub fields: Option<Vec<ProjectUserFields>>,
    pub products: Option<Vec<Product>>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<Vec<ProjectUserStatus>>,
    pub company_id: Option<Uuid>,
    pub company_name: Option<String>,
    pub autodesk_id: Option<String>,
    pub role_id: Option<Uuid>,
    pub filter_text_match: Option<FilterTextMatch>,
    pub sort: Option<Vec<ProjectUserSortBy>>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

/// Project membership endpoints
pub struct ProjectUsersApi<'a> {
    pub(crate) client: &'a AdminClient,
}

impl ProjectUsersApi<'_> {
    /// List the members of a project
    pub async fn get_project_users(
        &self,
        project_id: Uuid,
        options: &GetProjectUsersOptions,
    ) -> Result<Page<ProjectUser>> {
        let mut request = start(
            self.client,
            Method::GET,
            PROJECT_USERS,
            &[("projectId", &project_id)],
        )?;
        request
            .query
            .add("fields", options.fields.clone())?
            .add("filter[products]", options.products.clone())?
            .add("filter[name]", options.name.as_deref())?
            .add("filter[email]", options.email.as_deref())?
            .add("filter[status]", options.status.clone())?
            .add("filter[companyId]", options.company_id.map(|id| id.to_string()))?
            .add("filter[companyName]", options.company_name.as_deref())?
            .add("filter[autodeskId]", options.autodesk_id.as_deref())?
            .add("filter[roleId]", options.role_id.map(|id| id.to_string()))?
            .add("filterTextMatch", options.filter_text_match)?
            .add("sort", options.sort.clone())?
            .add("limit", options.limit)?
            .add("offset", options.offset)?;
        self.client.transport().execute(request).await
    }

    /// Fetch one project member
    ///
    /// # Arguments
    /// * `project_id` - Project id without the `b.` prefix
    /// * `user_id` - ACC user id or Autodesk id
    /// * `fields` - Optional fields to include
    pub async fn get_project_user(
        &self,
        project_id: Uuid,
        user_id: &str,
        fields: Option<Vec<ProjectUserFields>>,
    ) -> Result<ProjectUser> {
        let mut request = start(
            self.client,
            Method::GET,
            PROJECT_USER,
            &[("projectId", &project_id), ("userId", &user_id)],
        )?;
        request.query.add("fields", fields)?;
        self.client.transport().execute(request).await
    }

    /// Add a member to a project
    pub async fn assign_project_user(
        &self,
        project_id: Uuid,
        user: &ProjectUserPayload,
    ) -> Result<ProjectUser> {
        let mut request = start(
            self.client,
            Method::POST,
            PROJECT_USERS,
            &[("projectId", &project_id)],
        )?;
        set_json_body(&mut request, user)?;
        self.client.transport().execute(request).await
    }

    /// Change a member's company, roles or product access
    pub async fn update_project_user(
        &self,
        project_id: Uuid,
        user_id: &str,
        patch: &ProjectUserPatch,
    ) -> Result<ProjectUser> {
        let mut request = start(
            self.client,
            Method::PATCH,
            PROJECT_USER,
            &[("projectId", &project_id), ("userId", &user_id)],
        )?;
        set_json_body(&mut request, patch)?;
        self.client.transport().execute(request).await
    }

    /// Remove a member from a project
    pub async fn remove_project_user(&self, project_id: Uuid, user_id: &str) -> Result<()> {
        let request = start(
            self.client,
            Method::DELETE,
            PROJECT_USER,
            &[("projectId", &project_id), ("userId", &user_id)],
        )?;
        self.client.transport().execute_empty(request).await
    }

    /// Queue several members to be added to a project
    ///
    /// The service processes the import asynchronously and returns a job
    /// handle right away.
    pub async fn import_project_users(
        &self,
        project_id: Uuid,
        users: &ProjectUsersImportPayload,
    ) -> Result<ProjectUsersImportJob> {
        let mut request = start(
            self.client,
            Method::POST,
            PROJECT_USERS_IMPORT,
            &[("projectId", &project_id)],
        )?;
        set_json_body(&mut request, users)?;
        self.client.transport().execute(request).await
    }
}
