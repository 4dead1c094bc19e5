// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Business unit types (`/hq/v1/accounts/{account_id}/business_units_structure`)

use super::common::{Timestamp, Uuid};
use serde::{Deserialize, Serialize};

/// One node of the business unit tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessUnit {
    pub id: Uuid,
    /// `None` for the root units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Names from the root down to this unit, `>` separated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// The whole business unit tree of an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessUnitsStructure {
    #[serde(default)]
    pub business_units: Vec<BusinessUnit>,
}

impl BusinessUnitsStructure {
    /// Direct children of `parent` (roots when `None`)
    pub fn children(&self, parent: Option<Uuid>) -> impl Iterator<Item = &BusinessUnit> {
        self.business_units
            .iter()
            .filter(move |bu| bu.parent_id == parent)
    }
}

/// A unit in a replacement tree
///
/// Units without an `id` are created; existing units omitted from the
/// payload are deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessUnitPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request to replace the business unit tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessUnitsPayload {
    pub business_units: Vec<BusinessUnitPayload>,
}
