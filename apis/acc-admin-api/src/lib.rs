// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Autodesk Construction Cloud Account Admin models
//!
//! Request and response bodies for the two route families the Account
//! Admin API exposes:
//!
//! - `/construction/admin/v1/...`: projects and project members
//!   (camelCase JSON, paginated with [`Page`])
//! - `/hq/v1/accounts/{account_id}/...`: account members, companies and
//!   business units (snake_case JSON)
//!
//! The fixed vocabularies in [`enums`] implement [`acc_marshal::WireEnum`]
//! and serialize to the same strings in bodies and query parameters.

pub mod enums;
pub mod types;

pub use enums::*;
pub use types::*;
