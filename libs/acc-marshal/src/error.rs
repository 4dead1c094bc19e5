// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for acc-marshal

use thiserror::Error;

/// Errors raised while marshalling call arguments.
///
/// Both variants are programming errors at the call site rather than
/// runtime data errors; they are never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarshalError {
    /// An enumerated value has no registered wire string
    #[error("no wire string registered for {type_name}::{member}")]
    UnmappedEnum {
        type_name: &'static str,
        member: String,
    },

    /// A route template placeholder has no substitution value
    #[error("route template {template:?} has no value for placeholder {{{name}}}")]
    MissingRouteParameter { name: String, template: String },
}
