// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use acc_admin_api::{
    CompaniesImportResult, Company, CompanyPatch, CompanyPayload, SearchOperator, Trade, Uuid,
};
use http::Method;

use super::{ListOptions, set_json_body, start};
use crate::AdminClient;
use crate::error::Result;

const COMPANIES: &str = "/hq/v1/accounts/{account_id}/companies";
const COMPANY: &str = "/hq/v1/accounts/{account_id}/companies/{company_id}";
const COMPANIES_IMPORT: &str = "/hq/v1/accounts/{account_id}/companies/import";
const COMPANIES_SEARCH: &str = "/hq/v1/accounts/{account_id}/companies/search";
const PROJECT_COMPANIES: &str = "/hq/v1/accounts/{account_id}/projects/{project_id}/companies";

/// Criteria for [`CompaniesApi::search_companies`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCompaniesOptions {
    pub name: Option<String>,
    pub trade: Option<Trade>,
    pub operator: Option<SearchOperator>,
    pub partial: Option<bool>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    pub sort: Option<Vec<String>>,
    pub field: Option<Vec<String>>,
}

/// Company directory endpoints
pub struct CompaniesApi<'a> {
    pub(crate) client: &'a AdminClient,
}

impl CompaniesApi<'_> {
    pub async fn get_companies(
        &self,
        account_id: Uuid,
        options: &ListOptions,
    ) -> Result<Vec<Company>> {
        let mut request = start(
            self.client,
            Method::GET,
            COMPANIES,
            &[("account_id", &account_id)],
        )?;
        options.apply(&mut request)?;
        self.client.transport().execute(request).await
    }

    pub async fn get_company(&self, account_id: Uuid, company_id: Uuid) -> Result<Company> {
        let request = start(
            self.client,
            Method::GET,
            COMPANY,
            &[("account_id", &account_id), ("company_id", &company_id)],
        )?;
        self.client.transport().execute(request).await
    }

    pub async fn create_company(
        &self,
        account_id: Uuid,
        company: &CompanyPayload,
    ) -> Result<Company> {
        let mut request = start(
            self.client,
            Method::POST,
            COMPANIES,
            &[("account_id", &account_id)],
        )?;
        set_json_body(&mut request, company)?;
        self.client.transport().execute(request).await
    }

    /// Add up to 50 companies in one call
    pub async fn import_companies(
        &self,
        account_id: Uuid,
        companies: &[CompanyPayload],
    ) -> Result<CompaniesImportResult> {
        let mut request = start(
            self.client,
            Method::POST,
            COMPANIES_IMPORT,
            &[("account_id", &account_id)],
        )?;
        set_json_body(&mut request, companies)?;
        self.client.transport().execute(request).await
    }

    pub async fn update_company(
        &self,
        account_id: Uuid,
        company_id: Uuid,
        patch: &CompanyPatch,
    ) -> Result<Company> {
        let mut request = start(
            self.client,
            Method::PATCH,
            COMPANY,
            &[("account_id", &account_id), ("company_id", &company_id)],
        )?;
        set_json_body(&mut request, patch)?;
        self.client.transport().execute(request).await
    }

    pub async fn search_companies(
        &self,
        account_id: Uuid,
        options: &SearchCompaniesOptions,
    ) -> Result<Vec<Company>> {
        let mut request = start(
            self.client,
            Method::GET,
            COMPANIES_SEARCH,
            &[("account_id", &account_id)],
        )?;
        request
            .query
            .add("name", options.name.as_deref())?
            .add("trade", options.trade)?
            .add("operator", options.operator)?
            .add("partial", options.partial)?
            .add("limit", options.limit)?
            .add("offset", options.offset)?
            .add("sort", options.sort.clone())?
            .add("field", options.field.clone())?;
        self.client.transport().execute(request).await
    }

    /// Companies assigned to one project
    pub async fn get_project_companies(
        &self,
        account_id: Uuid,
        project_id: Uuid,
        options: &ListOptions,
    ) -> Result<Vec<Company>> {
        let mut request = start(
            self.client,
            Method::GET,
            PROJECT_COMPANIES,
            &[("account_id", &account_id), ("project_id", &project_id)],
        )?;
        options.apply(&mut request)?;
        self.client.transport().execute(request).await
    }
}
