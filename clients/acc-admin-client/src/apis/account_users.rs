// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use acc_admin_api::{
    AccountUser, AccountUserPatch, AccountUserPayload, SearchOperator, UsersImportResult, Uuid,
};
use http::Method;

use super::{ListOptions, set_json_body, start};
use crate::AdminClient;
use crate::error::Result;

const USERS: &str = "/hq/v1/accounts/{account_id}/users";
const USER: &str = "/hq/v1/accounts/{account_id}/users/{user_id}";
const USERS_IMPORT: &str = "/hq/v1/accounts/{account_id}/users/import";
const USERS_SEARCH: &str = "/hq/v1/accounts/{account_id}/users/search";

/// Criteria for [`AccountUsersApi::search_users`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchUsersOptions {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
    /// How the criteria combine; the service defaults to `OR`
    pub operator: Option<SearchOperator>,
    /// Match substrings instead of whole values
    pub partial: Option<bool>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    pub sort: Option<Vec<String>>,
    pub field: Option<Vec<String>>,
}

/// Account membership endpoints
pub struct AccountUsersApi<'a> {
    pub(crate) client: &'a AdminClient,
}

impl AccountUsersApi<'_> {
    /// List the members of an account
    pub async fn get_users(
        &self,
        account_id: Uuid,
        options: &ListOptions,
    ) -> Result<Vec<AccountUser>> {
        let mut request = start(self.client, Method::GET, USERS, &[("account_id", &account_id)])?;
        options.apply(&mut request)?;
        self.client.transport().execute(request).await
    }

    pub async fn get_user(&self, account_id: Uuid, user_id: Uuid) -> Result<AccountUser> {
        let request = start(
            self.client,
            Method::GET,
            USER,
            &[("account_id", &account_id), ("user_id", &user_id)],
        )?;
        self.client.transport().execute(request).await
    }

    /// Add a member to an account
    ///
    /// # Arguments
    /// * `account_id` - Account id without the `b.` prefix
    /// * `user` - The new member; `email` and `company_id` are required
    pub async fn create_user(
        &self,
        account_id: Uuid,
        user: &AccountUserPayload,
    ) -> Result<AccountUser> {
        let mut request = start(self.client, Method::POST, USERS, &[("account_id", &account_id)])?;
        set_json_body(&mut request, user)?;
        self.client.transport().execute(request).await
    }

    /// Add up to 50 members in one call
    ///
    /// Per-item failures are reported in the result rather than as an
    /// error.
    pub async fn import_users(
        &self,
        account_id: Uuid,
        users: &[AccountUserPayload],
    ) -> Result<UsersImportResult> {
        let mut request = start(
            self.client,
            Method::POST,
            USERS_IMPORT,
            &[("account_id", &account_id)],
        )?;
        set_json_body(&mut request, users)?;
        self.client.transport().execute(request).await
    }

    /// Change a member's status or default company
    pub async fn update_user(
        &self,
        account_id: Uuid,
        user_id: Uuid,
        patch: &AccountUserPatch,
    ) -> Result<AccountUser> {
        let mut request = start(
            self.client,
            Method::PATCH,
            USER,
            &[("account_id", &account_id), ("user_id", &user_id)],
        )?;
        set_json_body(&mut request, patch)?;
        self.client.transport().execute(request).await
    }

    /// Find members by name, email or company
    pub async fn search_users(
        &self,
        account_id: Uuid,
        options: &SearchUsersOptions,
    ) -> Result<Vec<AccountUser>> {
        let mut request = start(
            self.client,
            Method::GET,
            USERS_SEARCH,
            &[("account_id", &account_id)],
        )?;
        request
            .query
            .add("name", options.name.as_deref())?
            .add("email", options.email.as_deref())?
            .add("company_name", options.company_name.as_deref())?
            .add("operator", options.operator)?
            .add("partial", options.partial)?
            .add("limit", options.limit)?
            .add("offset", options.offset)?
            .add("sort", options.sort.clone())?
            .add("field", options.field.clone())?;
        self.client.transport().execute(request).await
    }
}
