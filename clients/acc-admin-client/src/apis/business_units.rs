// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use acc_admin_api::{BusinessUnitsPayload, BusinessUnitsStructure, Uuid};
use http::Method;

use super::{set_json_body, start};
use crate::AdminClient;
use crate::error::Result;

const BUSINESS_UNITS: &str = "/hq/v1/accounts/{account_id}/business_units_structure";

/// Business unit tree endpoints
pub struct BusinessUnitsApi<'a> {
    pub(crate) client: &'a AdminClient,
}

impl BusinessUnitsApi<'_> {
    pub async fn get_business_units(&self, account_id: Uuid) -> Result<BusinessUnitsStructure> {
        let request = start(
            self.client,
            Method::GET,
            BUSINESS_UNITS,
            &[("account_id", &account_id)],
        )?;
        self.client.transport().execute(request).await
    }

    /// Replace the whole business unit tree
    ///
    /// Units missing from `units` are deleted. Returns the tree as stored.
    pub async fn create_business_units(
        &self,
        account_id: Uuid,
        units: &BusinessUnitsPayload,
    ) -> Result<BusinessUnitsStructure> {
        let mut request = start(
            self.client,
            Method::PUT,
            BUSINESS_UNITS,
            &[("account_id", &account_id)],
        )?;
        set_json_body(&mut request, units)?;
        self.client.transport().execute(request).await
    }
}
