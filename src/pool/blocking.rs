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
use crate::cfg_if;
use crate::driver::blocking::DbConn;
use crate::errors::{Result, UnipoolError};
use crate::pool::PoolStatus;

cfg_if! {if #[cfg(feature = "oracle-sync")]{
    use crate::driver::blocking::oracle::{OracleAdapter, OraclePool};
}}

cfg_if! {if #[cfg(feature = "sqlite-sync")]{
    use crate::driver::blocking::sqlite::{SqliteAdapter, SqlitePool};
}}

pub trait SyncPool {
    /// Get a scoped connection from the connection pool
    fn acquire(&self) -> Result<DbConn>;

    /// Get the connection pool status
    fn status(&self) -> PoolStatus;
}

#[derive(Clone)]
pub enum DbPool {
    #[cfg(feature = "oracle-sync")]
    Oracle(OraclePool),
    #[cfg(feature = "sqlite-sync")]
    Sqlite(SqlitePool),
}

impl SyncPool for DbPool {
    /// get a usable database connection from the pool
    fn acquire(&self) -> Result<DbConn> {
        match self {
            #[cfg(feature = "oracle-sync")]
            DbPool::Oracle(ref pool) => {
                let pooled_conn = pool
                    .get()
                    .map_err(|e| UnipoolError::AcquireError(e.to_string()))?;
                Ok(DbConn::Oracle(Box::new(OracleAdapter::new(pooled_conn))))
            }
            #[cfg(feature = "sqlite-sync")]
            DbPool::Sqlite(ref pool) => {
                let pooled_conn = pool
                    .get()
                    .map_err(|e| UnipoolError::AcquireError(e.to_string()))?;
                Ok(DbConn::Sqlite(Box::new(SqliteAdapter::new(pooled_conn))))
            }
        }
    }

    fn status(&self) -> PoolStatus {
        match self {
            #[cfg(feature = "oracle-sync")]
            DbPool::Oracle(pool) => {
                let state = pool.state();
                PoolStatus {
                    available: state.idle_connections as usize,
                    borrowed: (state.connections - state.idle_connections) as usize,
                }
            }
            #[cfg(feature = "sqlite-sync")]
            DbPool::Sqlite(pool) => {
                let state = pool.state();
                PoolStatus {
                    available: state.idle_connections as usize,
                    borrowed: (state.connections - state.idle_connections) as usize,
                }
            }
        }
    }
}
