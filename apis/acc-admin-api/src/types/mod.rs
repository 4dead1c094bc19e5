// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account Admin type definitions

pub mod account_user;
pub mod business_unit;
pub mod common;
pub mod company;
pub mod project;
pub mod project_user;

pub use account_user::*;
pub use business_unit::*;
pub use common::*;
pub use company::*;
pub use project::*;
pub use project_user::*;
