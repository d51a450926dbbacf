/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */
use std::fmt;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::driver::DriverType;
use crate::errors::{Result, UnipoolError};

/// Pool configuration. Immutable once handed to the pool; built with the
/// chained setters or deserialized from an external configuration source.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    pool_name: Option<String>,
    /// Connections established when the pool starts.
    initial_size: u32,
    /// Floor maintained by the pool at runtime.
    min_size: u32,
    /// Ceiling on total connections, borrowed plus idle.
    max_size: u32,
    /// How long a checkout may wait before failing.
    connection_timeout: Duration,
    /// Granularity of the pool's idle sweep. The delegate pool enforces its
    /// timeouts on its own cadence; this value is surfaced to it opaquely.
    timeout_check_interval: Duration,
    /// Idle time after which a pooled connection may be reclaimed. `None`
    /// keeps idle connections indefinitely.
    inactive_timeout: Option<Duration>,
    /// Validate connections on checkout.
    test_on_check_out: bool,
    /// Backend-specific key/value tuning flags, passed through without
    /// interpretation. Insertion order is preserved.
    driver_properties: IndexMap<String, String>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            url: None,
            username: None,
            password: None,
            pool_name: None,
            initial_size: 0,
            min_size: 0,
            max_size: 16,
            connection_timeout: Duration::from_secs(6),
            timeout_check_interval: Duration::from_secs(30),
            inactive_timeout: None,
            test_on_check_out: false,
            driver_properties: IndexMap::new(),
        }
    }
}

impl PoolConfig {
    pub fn new(url: &str) -> Self {
        PoolConfig::default().set_url(url.to_string())
    }

    pub fn set_url(mut self, url: String) -> Self {
        self.url = url.into();
        self
    }

    pub fn url(&self) -> Option<&String> {
        self.url.as_ref()
    }

    pub fn set_username(mut self, username: String) -> Self {
        self.username = username.into();
        self
    }

    pub fn username(&self) -> Option<&String> {
        self.username.as_ref()
    }

    pub fn set_password(mut self, password: String) -> Self {
        self.password = password.into();
        self
    }

    pub fn password(&self) -> Option<&String> {
        self.password.as_ref()
    }

    pub fn set_pool_name(mut self, pool_name: String) -> Self {
        self.pool_name = pool_name.into();
        self
    }

    pub fn pool_name(&self) -> Option<&String> {
        self.pool_name.as_ref()
    }

    pub fn set_initial_size(mut self, initial_size: u32) -> Self {
        self.initial_size = initial_size;
        self
    }

    pub fn initial_size(&self) -> u32 {
        self.initial_size
    }

    pub fn set_min_size(mut self, min_size: u32) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    pub fn set_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    pub fn set_connection_timeout(mut self, connection_timeout: Duration) -> Self {
        self.connection_timeout = connection_timeout;
        self
    }

    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }

    pub fn set_timeout_check_interval(mut self, interval: Duration) -> Self {
        self.timeout_check_interval = interval;
        self
    }

    pub fn timeout_check_interval(&self) -> Duration {
        self.timeout_check_interval
    }

    pub fn set_inactive_timeout(mut self, inactive_timeout: Option<Duration>) -> Self {
        self.inactive_timeout = inactive_timeout;
        self
    }

    pub fn inactive_timeout(&self) -> Option<Duration> {
        self.inactive_timeout
    }

    pub fn set_test_on_check_out(mut self, test_on_check_out: bool) -> Self {
        self.test_on_check_out = test_on_check_out;
        self
    }

    pub fn test_on_check_out(&self) -> bool {
        self.test_on_check_out
    }

    pub fn set_driver_property(mut self, key: &str, value: &str) -> Self {
        self.driver_properties
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_driver_properties(mut self, properties: IndexMap<String, String>) -> Self {
        self.driver_properties = properties;
        self
    }

    pub fn driver_properties(&self) -> &IndexMap<String, String> {
        &self.driver_properties
    }

    /// The database platform selected by the URL scheme.
    pub fn platform(&self) -> DriverType {
        match self.parsed_url() {
            Some(url) => match url.scheme() {
                "oracle" => DriverType::Oracle,
                "sqlite" => DriverType::Sqlite,
                _ => DriverType::Unsupported,
            },
            None => DriverType::Unsupported,
        }
    }

    pub fn scheme(&self) -> Option<String> {
        self.parsed_url().map(|u| u.scheme().to_string())
    }

    pub fn hostname(&self) -> Option<String> {
        self.parsed_url()
            .and_then(|u| u.host_str().map(ToString::to_string))
    }

    pub fn port(&self) -> Option<u16> {
        self.parsed_url().and_then(|u| u.port())
    }

    /// Database or service name: the first path segment of the URL.
    pub fn database(&self) -> Option<String> {
        self.parsed_url().and_then(|u| {
            u.path_segments()
                .and_then(|mut segments| segments.next().map(ToString::to_string))
                .filter(|s| !s.is_empty())
        })
    }

    /// The SQLite file behind a `sqlite:` URL, or `:memory:`.
    pub fn sqlite_file(&self) -> Option<String> {
        let url = self.url.as_deref()?;
        let rest = url.strip_prefix("sqlite:")?;
        let rest = rest.strip_prefix("//").unwrap_or(rest);
        Some(rest.to_string())
    }

    /// Checks the construction invariants. Called by the pool builder; a
    /// violation is fatal and never silently defaulted.
    pub fn validate(&self) -> Result<()> {
        if self.url.as_deref().unwrap_or("").is_empty() {
            return Err(UnipoolError::ConfigError(
                "connection URL is required".to_string(),
            ));
        }
        if self.max_size == 0 {
            return Err(UnipoolError::ConfigError(
                "max_size must be at least 1".to_string(),
            ));
        }
        if self.min_size > self.max_size {
            return Err(UnipoolError::ConfigError(format!(
                "min_size ({}) must not exceed max_size ({})",
                self.min_size, self.max_size
            )));
        }
        if self.initial_size > self.max_size {
            return Err(UnipoolError::ConfigError(format!(
                "initial_size ({}) must not exceed max_size ({})",
                self.initial_size, self.max_size
            )));
        }
        if self.platform() == DriverType::Oracle {
            if self.effective_username().is_none() {
                return Err(UnipoolError::ConfigError(
                    "username is required".to_string(),
                ));
            }
            if self.effective_password().is_none() {
                return Err(UnipoolError::ConfigError(
                    "password is required".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Username from the explicit field, falling back to the URL userinfo.
    pub(crate) fn effective_username(&self) -> Option<String> {
        if let Some(username) = self.username.as_deref().filter(|u| !u.is_empty()) {
            return Some(username.to_string());
        }
        self.parsed_url()
            .map(|u| u.username().to_string())
            .filter(|u| !u.is_empty())
    }

    /// Password from the explicit field, falling back to the URL userinfo.
    pub(crate) fn effective_password(&self) -> Option<String> {
        if let Some(password) = self.password.as_deref().filter(|p| !p.is_empty()) {
            return Some(password.to_string());
        }
        self.parsed_url()
            .and_then(|u| u.password().map(ToString::to_string))
            .filter(|p| !p.is_empty())
    }

    /// The floor of connections the pool keeps established.
    pub(crate) fn effective_min_idle(&self) -> u32 {
        self.min_size.max(self.initial_size)
    }

    fn parsed_url(&self) -> Option<Url> {
        self.url.as_deref().and_then(|u| Url::parse(u).ok())
    }
}

/// Debug must never leak credentials into logs.
impl fmt::Debug for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PoolConfig")
            .field("url", &self.url.as_deref().map(redact_url))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "******"))
            .field("pool_name", &self.pool_name)
            .field("initial_size", &self.initial_size)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .field("connection_timeout", &self.connection_timeout)
            .field("timeout_check_interval", &self.timeout_check_interval)
            .field("inactive_timeout", &self.inactive_timeout)
            .field("test_on_check_out", &self.test_on_check_out)
            .field("driver_properties", &self.driver_properties)
            .finish()
    }
}

fn redact_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) if parsed.password().is_some() => {
            let _ = parsed.set_password(Some("******"));
            parsed.to_string()
        }
        _ => url.to_string(),
    }
}
