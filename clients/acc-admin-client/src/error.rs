// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client error type

use acc_admin_api::ErrorBody;
use acc_marshal::MarshalError;
use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to build request: {0}")]
    Marshal(#[from] MarshalError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid header {name}")]
    InvalidHeader { name: String },

    #[error("authentication failed: {0}")]
    Auth(String),

    /// Non-2xx response. `body` is set when the payload parsed as an
    /// [`ErrorBody`]; `raw` always holds the text as received.
    #[error("API error {status}: {raw}")]
    Api {
        status: StatusCode,
        body: Option<ErrorBody>,
        raw: String,
    },
}

impl Error {
    /// HTTP status of an [`Error::Api`] response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Human-readable message from the server's error payload, if any
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } => body.as_ref().and_then(ErrorBody::summary),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
