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
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use crate::cfg_if;
use crate::comm::ExecuteResult;
use crate::config::PoolConfig;
use crate::data::{Row, Rows};
use crate::driver::blocking::{DbConn, DbExecutor};
use crate::driver::DriverType;
use crate::errors::{Result, UnipoolError};
use crate::param::Params;
use crate::pool::blocking::{DbPool, SyncPool};
use crate::pool::PoolStatus;

cfg_if! {if #[cfg(feature = "oracle-sync")]{
    use crate::driver::blocking::oracle::init_oracle_pool;
}}

cfg_if! {if #[cfg(feature = "sqlite-sync")]{
    use crate::driver::blocking::sqlite::init_sqlite_pool;
}}

/// The connection pool manager: owns one pool for the process lifetime,
/// hands out scoped connections and exposes occupancy counters.
pub struct Unipool {
    /// the connection pool
    pool: OnceCell<DbPool>,
    cfg: PoolConfig,
    closed: AtomicBool,
}

impl std::fmt::Debug for Unipool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unipool")
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl Unipool {
    /// Build the pool from a validated configuration. Invalid configuration
    /// is fatal here; connections themselves are established according to
    /// the pool's own growth policy.
    pub fn new(cfg: PoolConfig) -> Result<Self> {
        cfg.validate()?;
        let pool = Self::init_pool(&cfg)?;
        tracing::debug!(
            "connection pool {} initialized: {:?}",
            cfg.pool_name().map(String::as_str).unwrap_or("UNIPOOL"),
            cfg
        );
        Ok(Self {
            pool: OnceCell::from(pool),
            cfg,
            closed: AtomicBool::new(false),
        })
    }

    /// get a database pool instance, ready to hand out connections
    fn init_pool(cfg: &PoolConfig) -> Result<DbPool> {
        match cfg.platform() {
            #[cfg(feature = "oracle-sync")]
            DriverType::Oracle => {
                let pool = init_oracle_pool(cfg)?;
                Ok(DbPool::Oracle(pool))
            }
            #[cfg(feature = "sqlite-sync")]
            DriverType::Sqlite => {
                let pool = init_sqlite_pool(cfg)?;
                Ok(DbPool::Sqlite(pool))
            }
            _ => Err(UnipoolError::UnsupportedPlatform(
                cfg.scheme().unwrap_or_default(),
            )),
        }
    }

    /// Check out a scoped connection.
    ///
    /// Blocks while the pool waits for a free slot or grows toward its
    /// maximum, at most the configured connection timeout. The connection
    /// returns to the pool when the handle is dropped, on every exit path.
    pub fn acquire(&self) -> Result<DbConn> {
        if self.is_closed() {
            return Err(UnipoolError::PoolClosed);
        }
        self.get_pool()?.acquire()
    }

    /// get conn pool
    pub fn get_pool(&self) -> Result<&DbPool> {
        self.pool
            .get()
            .ok_or_else(|| UnipoolError::AcquireError("pool not initialized".to_string()))
    }

    pub fn status(&self) -> PoolStatus {
        match self.pool.get() {
            Some(pool) => pool.status(),
            None => PoolStatus {
                available: 0,
                borrowed: 0,
            },
        }
    }

    pub fn available_count(&self) -> usize {
        self.status().available
    }

    pub fn borrowed_count(&self) -> usize {
        self.status().borrowed
    }

    /// Query with original sql on a connection checked out just for this call.
    pub fn exec_iter<S: Into<String>, P: Into<Params>>(&self, sql: S, params: P) -> Result<Rows> {
        let sql = sql.into();
        let conn = self.acquire()?;
        // conn drops at the end of this call, returning the checkout even
        // when the query failed
        conn.query(&sql, params.into())
    }

    /// First matching row, or `Ok(None)` when the query matches nothing.
    /// The rest of the result set is discarded by contract.
    pub fn exec_first<S: Into<String>, P: Into<Params>>(
        &self,
        sql: S,
        params: P,
    ) -> Result<Option<Row>> {
        let rows = self.exec_iter(sql, params)?;
        Ok(rows.into_inner().into_iter().next())
    }

    /// Run a non-query statement on a connection checked out for this call.
    pub fn execute<S: Into<String>, P: Into<Params>>(
        &self,
        sql: S,
        params: P,
    ) -> Result<ExecuteResult> {
        let sql = sql.into();
        let conn = self.acquire()?;
        conn.execute(&sql, params.into())
    }

    pub fn config(&self) -> &PoolConfig {
        &self.cfg
    }

    /// Stop handing out connections. Outstanding borrows stay valid and are
    /// returned on drop; pooled connections close when the pool itself is
    /// dropped.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            tracing::info!(
                "connection pool {} closed",
                self.cfg.pool_name().map(String::as_str).unwrap_or("UNIPOOL")
            );
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
