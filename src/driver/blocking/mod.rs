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
use crate::comm::ExecuteResult;
use crate::data::Rows;
use crate::errors::Result;
use crate::param::Params;

cfg_if! {
    if #[cfg(feature = "oracle-sync")] {
        pub mod oracle;
        use crate::driver::blocking::oracle::OracleAdapter;
    }
}

cfg_if! {
    if #[cfg(feature = "sqlite-sync")] {
        pub mod sqlite;
        use crate::driver::blocking::sqlite::SqliteAdapter;
    }
}

/// Statement execution over one borrowed connection.
pub trait DbExecutor {
    /// Run a query and materialize the full, ordered result set.
    fn query(&self, sql: &str, params: Params) -> Result<Rows>;

    /// Run a statement. SELECTs are routed through the query path; everything
    /// else commits immediately.
    fn execute(&self, sql: &str, params: Params) -> Result<ExecuteResult>;
}

/// A scoped connection checked out of the pool.
///
/// Exclusively owned by the borrower. Dropping the handle returns the
/// connection to the pool on every exit path; a released handle cannot be
/// revived, a fresh one comes from another `acquire`.
pub enum DbConn {
    #[cfg(feature = "oracle-sync")]
    Oracle(Box<OracleAdapter>),
    #[cfg(feature = "sqlite-sync")]
    Sqlite(Box<SqliteAdapter>),
}

impl std::fmt::Debug for DbConn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "oracle-sync")]
            DbConn::Oracle(_) => f.write_str("DbConn::Oracle"),
            #[cfg(feature = "sqlite-sync")]
            DbConn::Sqlite(_) => f.write_str("DbConn::Sqlite"),
        }
    }
}

impl DbExecutor for DbConn {
    fn query(&self, sql: &str, params: Params) -> Result<Rows> {
        match self {
            #[cfg(feature = "oracle-sync")]
            DbConn::Oracle(adapter) => adapter.query(sql, params),
            #[cfg(feature = "sqlite-sync")]
            DbConn::Sqlite(adapter) => adapter.query(sql, params),
        }
    }

    fn execute(&self, sql: &str, params: Params) -> Result<ExecuteResult> {
        match self {
            #[cfg(feature = "oracle-sync")]
            DbConn::Oracle(adapter) => adapter.execute(sql, params),
            #[cfg(feature = "sqlite-sync")]
            DbConn::Sqlite(adapter) => adapter.execute(sql, params),
        }
    }
}
