// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration

use std::str::FromStr;

use acc_admin_api::Region;

/// Default API host
const DEFAULT_BASE_URL: &str = "https://developer.api.autodesk.com";

/// Default per-request timeout (seconds)
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host, optionally with a path prefix
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Sent as the `Region` header when set
    pub region: Option<Region>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            region: None,
        }
    }
}

fn default_user_agent() -> String {
    format!("acc-admin-rust/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `ACC_ADMIN_BASE_URL`, `ACC_ADMIN_TIMEOUT_SECS` and
    /// `ACC_ADMIN_REGION`. Unset or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("ACC_ADMIN_BASE_URL") {
            match url::Url::parse(&url) {
                Ok(_) => config.base_url = url,
                Err(e) => {
                    tracing::warn!(value = %url, error = %e, "ignoring invalid ACC_ADMIN_BASE_URL")
                }
            }
        }

        if let Some(raw) = lookup("ACC_ADMIN_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "ignoring invalid ACC_ADMIN_TIMEOUT_SECS"),
            }
        }

        if let Some(raw) = lookup("ACC_ADMIN_REGION") {
            match Region::from_str(&raw) {
                Ok(region) => config.region = Some(region),
                Err(_) => tracing::warn!(value = %raw, "ignoring unknown ACC_ADMIN_REGION"),
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://developer.api.autodesk.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("acc-admin-rust/"));
        assert_eq!(config.region, None);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("ACC_ADMIN_BASE_URL", "http://127.0.0.1:8080"),
            ("ACC_ADMIN_TIMEOUT_SECS", "5"),
            ("ACC_ADMIN_REGION", "EMEA"),
        ]));
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.region, Some(Region::Emea));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("ACC_ADMIN_BASE_URL", "not a url"),
            ("ACC_ADMIN_TIMEOUT_SECS", "0"),
            ("ACC_ADMIN_REGION", "MARS"),
        ]));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost")
            .with_timeout_secs(2)
            .with_user_agent("ops-sync/1.0")
            .with_region(Region::Aus);
        assert_eq!(config.base_url, "http://localhost");
        assert_eq!(config.timeout_secs, 2);
        assert_eq!(config.user_agent, "ops-sync/1.0");
        assert_eq!(config.region, Some(Region::Aus));
    }
}
