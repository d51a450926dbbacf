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

//! This crate offers:
//!
//! *   A managed client side connection pool with bounded size, idle
//!     reclamation and occupancy counters;
//! *   Scoped connections: a checkout is released back to the pool on every
//!     exit path, including errors;
//! *   Plain query execution returning ordered, typed rows.
//!
//! Features:
//!
//! * ```oracle-sync``` - to use Oracle
//! * ```sqlite-sync``` - to use SQLite
//!
//! ## Installation
//!
//! Put the desired version of the crate into the `dependencies` section of your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! unipool = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use unipool::prelude::*;
//!
//! fn main() -> unipool::Result<()> {
//!     let cfg = PoolConfig::new("sqlite://data/app.db")
//!         .set_pool_name("APP_POOL".to_string())
//!         .set_initial_size(5)
//!         .set_min_size(5)
//!         .set_max_size(20)
//!         .set_timeout_check_interval(Duration::from_secs(5))
//!         .set_inactive_timeout(Some(Duration::from_secs(10)));
//!     let pool = Unipool::new(cfg)?;
//!
//!     println!("available before checkout: {}", pool.available_count());
//!     println!("borrowed  before checkout: {}", pool.borrowed_count());
//!
//!     let conn = pool.acquire()?;
//!     let rows = conn.query("SELECT EMPLOYEEID, EMPLOYEENAME FROM EMP", Params::None)?;
//!     for row in rows.iter() {
//!         let id: Option<i64> = row.get(0);
//!         let name: Option<String> = row.get(1);
//!         println!("{:?} {:?}", id, name);
//!     }
//!     drop(conn);
//!
//!     pool.close();
//!     Ok(())
//! }
//! ```
//!
mod macros;

mod comm;
mod config;
mod data;
mod driver;
mod errors;
mod param;
mod pool;
mod value;

pub mod prelude;

#[doc(inline)]
pub use comm::{ExecuteResult, OperationType};
#[doc(inline)]
pub use config::PoolConfig;
#[doc(inline)]
pub use data::{ColumnIndex, Row, Rows};
#[doc(inline)]
pub use driver::DriverType;
#[doc(inline)]
pub use errors::{Result, UnipoolError};
#[doc(inline)]
pub use param::Params;
#[doc(inline)]
pub use pool::PoolStatus;
#[doc(inline)]
pub use value::{FromValue, Value};

crate::cfg_if! {if #[cfg(any(
    feature = "oracle-sync",
    feature = "sqlite-sync"
))] {
    mod manager;

    #[doc(inline)]
    pub use driver::blocking::{DbConn, DbExecutor};
    #[doc(inline)]
    pub use manager::Unipool;
    #[doc(inline)]
    pub use pool::blocking::{DbPool, SyncPool};
}}

#[doc(inline)]
pub use chrono::{Local, NaiveDate, NaiveDateTime};
