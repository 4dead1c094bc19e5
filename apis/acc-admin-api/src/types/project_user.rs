// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Project member types (`/construction/admin/v1/projects/{projectId}/users`)

use super::common::{Phone, Timestamp, Uuid};
use crate::enums::{Product, ProductAccessLevel, ProjectUserStatus};
use serde::{Deserialize, Serialize};

/// A member of a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUser {
    /// ACC user id (also the account user id)
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Autodesk identity (oxygen) id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autodesk_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub role_ids: Vec<Uuid>,
    #[serde(default)]
    pub roles: Vec<ProjectUserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectUserStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_levels: Option<AccessLevels>,
    #[serde(default)]
    pub products: Vec<ProjectUserProduct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_on: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Administrative levels held by a project member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLevels {
    #[serde(default)]
    pub account_admin: bool,
    #[serde(default)]
    pub project_admin: bool,
    #[serde(default)]
    pub executive: bool,
}

/// A project role assigned to a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUserRole {
    pub id: Uuid,
    pub name: String,
}

/// Access to one product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUserProduct {
    pub key: Product,
    pub access: ProductAccessLevel,
}

/// Request to add a member to a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUserPayload {
    /// Required unless `user_id` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role_ids: Vec<Uuid>,
    pub products: Vec<ProjectUserProduct>,
}

/// Fields that can be changed on an existing member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<Uuid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProjectUserProduct>>,
}

/// Request to add several members at once
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUsersImportPayload {
    pub users: Vec<ProjectUserPayload>,
}

/// Handle for an asynchronous member import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUsersImportJob {
    pub job_id: Uuid,
}
