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
use oracle::Connector;

use crate::config::PoolConfig;
use crate::driver::DriverType;
use crate::errors::UnipoolError;

pub type OraclePool = r2d2::Pool<OracleConnectionManager>;
pub type OracleConnection = r2d2::PooledConnection<OracleConnectionManager>;

/// Oracle Connection Manager
pub struct OracleConnectionManager {
    connector: Connector,
}

impl OracleConnectionManager {
    pub fn new(cfg: &PoolConfig) -> Result<Self, UnipoolError> {
        let connector = connector_from_config(cfg)?;
        // The bare driver exposes no surface for arbitrary connection
        // properties; unapplied ones are surfaced instead of silently dropped.
        for (name, value) in cfg.driver_properties() {
            tracing::warn!(
                "driver property {}={} is not supported by the Oracle driver, skipping",
                name,
                value
            );
        }
        Ok(Self { connector })
    }

    /// Create a manager from a TNS name or Easy Connect string directly.
    pub fn with_connect_string(username: &str, password: &str, connect_string: &str) -> Self {
        Self {
            connector: Connector::new(username, password, connect_string),
        }
    }
}

impl r2d2::ManageConnection for OracleConnectionManager {
    type Connection = oracle::Connection;
    type Error = oracle::Error;

    fn connect(&self) -> std::result::Result<Self::Connection, Self::Error> {
        self.connector.connect()
    }

    fn is_valid(&self, conn: &mut Self::Connection) -> std::result::Result<(), Self::Error> {
        conn.query("SELECT 1 FROM DUAL", &[]).map(|_| ())
    }

    fn has_broken(&self, conn: &mut Self::Connection) -> bool {
        conn.ping().is_err()
    }
}

/// Initialize the Oracle connection pool
pub fn init_oracle_pool(cfg: &PoolConfig) -> Result<OraclePool, UnipoolError> {
    let manager = OracleConnectionManager::new(cfg)?;

    let pool = r2d2::Pool::builder()
        .connection_timeout(cfg.connection_timeout())
        .min_idle(Some(cfg.effective_min_idle()))
        .max_size(cfg.max_size())
        .idle_timeout(cfg.inactive_timeout())
        .test_on_check_out(cfg.test_on_check_out())
        .build(manager)
        .map_err(|e| {
            UnipoolError::AcquireError(format!("failed to create Oracle connection pool: {}", e))
        })?;

    Ok(pool)
}

fn connector_from_config(cfg: &PoolConfig) -> Result<Connector, UnipoolError> {
    if cfg.platform() != DriverType::Oracle {
        return Err(UnipoolError::ConfigError(
            "Database type mismatch: expected Oracle".to_string(),
        ));
    }

    let username = cfg.effective_username().ok_or_else(|| {
        UnipoolError::ConfigError("Oracle username is required".to_string())
    })?;
    let password = cfg.effective_password().ok_or_else(|| {
        UnipoolError::ConfigError("Oracle password is required".to_string())
    })?;

    // Building connection strings
    let mut connect_string = String::new();
    if let Some(host) = cfg.hostname() {
        connect_string.push_str(&host);
        if let Some(port) = cfg.port() {
            connect_string.push_str(&format!(":{}", port));
        }
        if let Some(service) = cfg.database() {
            connect_string.push_str(&format!("/{}", service));
        }
    } else {
        // If the host is empty, it may be the full Easy Connect format
        match cfg
            .url()
            .and_then(|url| url.find('@').map(|at| url[at + 1..].to_string()))
        {
            Some(descriptor) => connect_string = descriptor,
            None => {
                return Err(UnipoolError::ConfigError(
                    "Oracle connection string is required".to_string(),
                ))
            }
        }
    }

    Ok(Connector::new(username, password, connect_string))
}
