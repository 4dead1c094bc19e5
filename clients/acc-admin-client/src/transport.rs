// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Sends marshalled requests and decodes the responses

use std::sync::Arc;
use std::time::Duration;

use acc_admin_api::ErrorBody;
use acc_marshal::OutgoingRequest;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{self, TokenProvider};
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// HTTP transport shared by every endpoint group.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build the transport from `config`.
    ///
    /// # Errors
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        // reqwest is built without a default crypto provider. Another crate
        // may have installed one already, which is fine.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve the request's route and query against the base URL.
    ///
    /// Any path prefix on the base URL is kept. Fails if a route placeholder
    /// has no value.
    pub fn request_url(&self, request: &OutgoingRequest) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, request.uri()?))?)
    }

    /// Send `request` and decode a JSON response body into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: OutgoingRequest) -> Result<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send `request` and discard any response body.
    pub async fn execute_empty(&self, request: OutgoingRequest) -> Result<()> {
        self.send(request).await?;
        Ok(())
    }

    async fn send(&self, request: OutgoingRequest) -> Result<reqwest::Response> {
        let url = self.request_url(&request)?;
        let headers = header_map(&request)?;

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .headers(headers);
        if let Some(payload) = request.body.payload {
            builder = builder.body(payload);
        }
        let mut http_request = builder.build()?;
        auth::add_auth_headers(self.tokens.as_ref(), &mut http_request).await?;

        tracing::debug!(method = %request.method, route = %request.route, "sending request");
        let response = self.http.execute(http_request).await?;
        let status = response.status();
        tracing::debug!(
            method = %request.method,
            route = %request.route,
            status = status.as_u16(),
            "received response"
        );

        if status.is_success() {
            return Ok(response);
        }

        let raw = response.text().await?;
        let body = serde_json::from_str::<ErrorBody>(&raw).ok();
        tracing::warn!(
            method = %request.method,
            route = %request.route,
            status = status.as_u16(),
            message = body.as_ref().and_then(ErrorBody::summary).unwrap_or(""),
            "request failed"
        );
        Err(Error::Api { status, body, raw })
    }
}

/// General headers followed by body headers.
fn header_map(request: &OutgoingRequest) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in request.headers.iter().chain(request.body.headers.iter()) {
        let invalid = || Error::InvalidHeader {
            name: name.to_string(),
        };
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        map.insert(name, value);
    }
    Ok(map)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::auth::StaticToken;
    use acc_marshal::{CONTENT_RANGE, MarshalError};
    use http::Method;

    fn client(base: &str) -> ApiClient {
        let config = ClientConfig::default().with_base_url(base);
        ApiClient::new(&config, Arc::new(StaticToken::new("t"))).unwrap()
    }

    #[test]
    fn test_request_url_keeps_base_prefix() {
        let c = client("http://localhost:9000/proxy/");
        let mut req = OutgoingRequest::new(Method::GET, "/hq/v1/accounts/A1/users");
        req.query.insert("limit", "10");
        assert_eq!(
            c.request_url(&req).unwrap().as_str(),
            "http://localhost:9000/proxy/hq/v1/accounts/A1/users?limit=10"
        );
    }

    #[test]
    fn test_request_url_substitutes_route_params() {
        let c = client("http://localhost:9000");
        let mut req = OutgoingRequest::new(Method::GET, "/hq/v1/accounts/{account_id}/users");
        req.route_param("account_id", "A1");
        req.query.insert("limit", "10");
        assert_eq!(
            c.request_url(&req).unwrap().as_str(),
            "http://localhost:9000/hq/v1/accounts/A1/users?limit=10"
        );
    }

    #[test]
    fn test_request_url_missing_route_param() {
        let c = client("http://localhost:9000");
        let req = OutgoingRequest::new(Method::GET, "/hq/v1/accounts/{account_id}/users");
        let err = c.request_url(&req).unwrap_err();
        assert!(matches!(
            err,
            Error::Marshal(MarshalError::MissingRouteParameter { ref name, .. }) if name == "account_id"
        ));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::default().with_base_url("::nope");
        let err = ApiClient::new(&config, Arc::new(StaticToken::new("t"))).unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }

    #[test]
    fn test_header_map_includes_body_headers() {
        let mut req = OutgoingRequest::new(Method::PUT, "/x");
        req.headers.insert("Region", "EMEA");
        req.body.headers.insert(CONTENT_RANGE, "bytes 0-9/10");
        let map = header_map(&req).unwrap();
        assert_eq!(map.get("region").unwrap(), "EMEA");
        assert_eq!(map.get("content-range").unwrap(), "bytes 0-9/10");
    }

    #[test]
    fn test_header_map_rejects_bad_value() {
        let mut req = OutgoingRequest::new(Method::GET, "/x");
        req.headers.insert("User-Id", "a\r\nb");
        let err = header_map(&req).unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { name } if name == "User-Id"));
    }
}
