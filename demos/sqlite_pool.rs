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
//! The sample demonstrates the managed pool against an embedded SQLite
//! database: build the pool, watch the occupancy counters around a checkout,
//! run a query on the scoped connection, tear the pool down.
//!
use std::time::Duration;

use unipool::prelude::*;

fn main() -> anyhow::Result<()> {
    let url = std::env::var("UNIPOOL_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

    let cfg = PoolConfig::new(&url)
        .set_pool_name("UNIPOOL_DEMO".to_string())
        .set_initial_size(5)
        .set_min_size(5)
        .set_max_size(20)
        .set_timeout_check_interval(Duration::from_secs(5))
        .set_inactive_timeout(Some(Duration::from_secs(10)))
        .set_driver_property("foreign_keys", "on");

    let pool = Unipool::new(cfg)?;

    println!("Available connections before checkout: {}", pool.available_count());
    println!("Borrowed connections before checkout: {}", pool.borrowed_count());

    let conn = pool.acquire()?;
    println!("Available connections after checkout: {}", pool.available_count());
    println!("Borrowed connections after checkout: {}", pool.borrowed_count());

    conn.execute(
        "CREATE TABLE EMP (EMPLOYEEID INTEGER, EMPLOYEENAME VARCHAR(20))",
        Params::None,
    )?;
    conn.execute(
        "INSERT INTO EMP (EMPLOYEEID, EMPLOYEENAME) VALUES (?, ?)",
        Params::from(vec![Value::from(1i64), Value::from("Grace Hopper")]),
    )?;
    conn.execute(
        "INSERT INTO EMP (EMPLOYEEID, EMPLOYEENAME) VALUES (?, ?)",
        Params::from(vec![Value::from(2i64), Value::from("Ada Lovelace")]),
    )?;

    let rows = conn.query("SELECT * FROM EMP ORDER BY EMPLOYEEID", Params::None)?;
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
