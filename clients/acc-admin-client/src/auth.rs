// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Authentication support for Account Admin requests
//!
//! Requests carry an OAuth bearer token. Obtaining and refreshing the token
//! is left to a [`TokenProvider`]; this module only attaches it.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::error::{Error, Result};

/// Source of bearer tokens
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return a token valid for the next request.
    async fn access_token(&self) -> Result<String>;
}

/// A fixed token, e.g. a two-legged token fetched out of band
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String> {
        if self.token.is_empty() {
            return Err(Error::Auth("no access token configured".to_string()));
        }
        Ok(self.token.clone())
    }
}

/// Add authentication headers to a request
///
/// Runs after the request is fully built and before it is sent.
///
/// # Arguments
/// * `tokens` - Where to get the bearer token from
/// * `request` - The mutable request to add headers to
///
/// # Errors
/// Returns an error if the provider fails or the token is not a valid
/// header value.
pub async fn add_auth_headers(
    tokens: &dyn TokenProvider,
    request: &mut reqwest::Request,
) -> Result<()> {
    let token = tokens.access_token().await?;
    let mut value =
        HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| Error::InvalidHeader {
            name: AUTHORIZATION.to_string(),
        })?;
    value.set_sensitive(true);
    request.headers_mut().insert(AUTHORIZATION, value);
    Ok(())
}
