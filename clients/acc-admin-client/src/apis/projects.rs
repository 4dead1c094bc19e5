// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use acc_admin_api::{
    Classification, FilterTextMatch, Page, Platform, Product, Project, ProjectFields,
    ProjectPayload, ProjectSortBy, ProjectStatus, Uuid,
};
use http::Method;

use super::{set_json_body, start};
use crate::AdminClient;
use crate::error::Result;

const ACCOUNT_PROJECTS: &str = "/construction/admin/v1/accounts/{accountId}/projects";
const PROJECT: &str = "/construction/admin/v1/projects/{projectId}";

/// Filters and paging for [`ProjectsApi::get_projects`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetProjectsOptions {
    pub fields: Option<Vec<ProjectFields>>,
    pub classification: Option<Vec<Classification>>,
    pub platform: Option<Vec<Platform>>,
    pub products: Option<Vec<Product>>,
    /// Matched according to `filter_text_match`
    pub name: Option<String>,
    pub project_type: Option<Vec<String>>,
    pub status: Option<Vec<ProjectStatus>>,
    pub business_unit_id: Option<Uuid>,
    pub job_number: Option<String>,
    /// `start..end` date range, either side may be empty
    pub updated_at: Option<String>,
    pub filter_text_match: Option<FilterTextMatch>,
    pub sort: Option<Vec<ProjectSortBy>>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}

/// Project endpoints
pub struct ProjectsApi<'a> {
    pub(crate) client: &'a AdminClient,
}

impl ProjectsApi<'_> {
    /// List the projects of an account
    ///
    /// # Arguments
    /// * `account_id` - Account (hub) id without the `b.` prefix
    /// * `options` - Filters, sort order and paging
    pub async fn get_projects(
        &self,
        account_id: Uuid,
        options: &GetProjectsOptions,
    ) -> Result<Page<Project>> {
        let mut request = start(
            self.client,
            Method::GET,
            ACCOUNT_PROJECTS,
            &[("accountId", &account_id)],
        )?;
        request
            .query
            .add("fields", options.fields.clone())?
            .add("filter[classification]", options.classification.clone())?
            .add("filter[platform]", options.platform.clone())?
            .add("filter[products]", options.products.clone())?
            .add("filter[name]", options.name.as_deref())?
            .add("filter[type]", options.project_type.clone())?
            .add("filter[status]", options.status.clone())?
            .add(
                "filter[businessUnitId]",
                options.business_unit_id.map(|id| id.to_string()),
            )?
            .add("filter[jobNumber]", options.job_number.as_deref())?
            .add("filter[updatedAt]", options.updated_at.as_deref())?
            .add("filterTextMatch", options.filter_text_match)?
            .add("sort", options.sort.clone())?
            .add("limit", options.limit)?
            .add("offset", options.offset)?;
        self.client.transport().execute(request).await
    }

    /// Fetch one project
    ///
    /// # Arguments
    /// * `project_id` - Project id without the `b.` prefix
    /// * `fields` - Optional fields to include; the service returns a
    ///   default set when `None`
    pub async fn get_project(
        &self,
        project_id: Uuid,
        fields: Option<Vec<ProjectFields>>,
    ) -> Result<Project> {
        let mut request = start(self.client, Method::GET, PROJECT, &[("projectId", &project_id)])?;
        request.query.add("fields", fields)?;
        self.client.transport().execute(request).await
    }

    /// Create a project in an account
    ///
    /// # Arguments
    /// * `account_id` - Account (hub) id without the `b.` prefix
    /// * `project` - The new project; `name` and `type` are required
    pub async fn create_project(
        &self,
        account_id: Uuid,
        project: &ProjectPayload,
    ) -> Result<Project> {
        let mut request = start(
            self.client,
            Method::POST,
            ACCOUNT_PROJECTS,
            &[("accountId", &account_id)],
        )?;
        set_json_body(&mut request, project)?;
        self.client.transport().execute(request).await
    }
}
