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

//!
//! The sample demonstrates the managed pool as a client side connection pool
//! against an Oracle database:
//! (a) the platform driver is selected by the connection URL scheme;
//! (b) pool properties (initial/min/max size, timeouts) come from config;
//! (c) a connection is checked out, used and returned around the counters.
//!
//! Connection settings come from the environment:
//! `UNIPOOL_URL`, `UNIPOOL_USER`, `UNIPOOL_PASSWORD`.
//!
use std::time::Duration;

use unipool::prelude::*;

fn main() -> anyhow::Result<()> {
    let url = std::env::var("UNIPOOL_URL")
        .map_err(|_| anyhow::anyhow!("UNIPOOL_URL is required, e.g. oracle://host:1522/service"))?;
    let username = std::env::var("UNIPOOL_USER").unwrap_or_default();
    let password = std::env::var("UNIPOOL_PASSWORD").unwrap_or_default();

    let cfg = PoolConfig::new(&url)
        .set_username(username)
        .set_password(password)
        .set_pool_name("UNIPOOL_ORACLE".to_string())
        .set_initial_size(5)
        .set_min_size(5)
        .set_max_size(20)
        .set_timeout_check_interval(Duration::from_secs(5))
        .set_inactive_timeout(Some(Duration::from_secs(10)));

    let pool = Unipool::new(cfg)?;

    println!("Available connections before checkout: {}", pool.available_count());
    println!("Borrowed connections before checkout: {}", pool.borrowed_count());

    let conn = pool.acquire()?;
    println!("Available connections after checkout: {}", pool.available_count());
    println!("Borrowed connections after checkout: {}", pool.borrowed_count());

    let rows = conn.query("SELECT * FROM EMP", Params::None)?;
    println!("EMPLOYEEID EMPLOYEENAME");
    println!("--------------------------");
    for row in rows.iter() {
        let id: Option<i64> = row.get(0);
        let name: Option<String> = row.get(1);
        println!("{} {}", id.unwrap_or_default(), name.unwrap_or_default());
    }
    drop(conn);

    println!("Available connections after checkin: {}", pool.available_count());
    println!("Borrowed connections after checkin: {}", pool.borrowed_count());

    pool.close();
    Ok(())
}
