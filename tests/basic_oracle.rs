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
//! Tests. These run against a reachable Oracle database; connection settings
//! come from the environment: `UNIPOOL_ORACLE_URL`, `UNIPOOL_ORACLE_USER`,
//! `UNIPOOL_ORACLE_PASSWORD`.
//!
use std::time::Duration;

use unipool::prelude::*;

fn oracle_config() -> PoolConfig {
    let url = std::env::var("UNIPOOL_ORACLE_URL").expect("UNIPOOL_ORACLE_URL is required");
    let username = std::env::var("UNIPOOL_ORACLE_USER").unwrap_or_default();
    let password = std::env::var("UNIPOOL_ORACLE_PASSWORD").unwrap_or_default();
    PoolConfig::new(&url)
        .set_username(username)
        .set_password(password)
        .set_pool_name("UNIPOOL_TEST".to_string())
        .set_initial_size(5)
        .set_min_size(5)
        .set_max_size(20)
        .set_timeout_check_interval(Duration::from_secs(5))
        .set_inactive_timeout(Some(Duration::from_secs(10)))
}

#[test]
fn test_connection_creation() {
    let pool = Unipool::new(oracle_config());
    assert!(
        pool.is_ok(),
        "the pool creation should be successful: {}",
        pool.err().unwrap()
    );
}

#[test]
fn test_counters_around_checkout() {
    let pool = Unipool::new(oracle_config()).unwrap();
    let status = pool.status();
    assert_eq!(status.available + status.borrowed, 5);

    let conn = pool.acquire().unwrap();
    assert_eq!(pool.borrowed_count(), 1);

    drop(conn);
    assert_eq!(pool.borrowed_count(), 0);
}

#[test]
fn test_emp_roundtrip() {
    let pool = Unipool::new(oracle_config()).unwrap();
    let conn = pool.acquire().unwrap();

    conn.execute(
        "CREATE TABLE EMP (EMPLOYEEID NUMBER, EMPLOYEENAME VARCHAR2(20))",
        Params::None,
    )
    .unwrap();
    conn.execute(
        "INSERT INTO EMP VALUES (:1, :2)",
        Params::from(vec![Value::from(1i64), Value::from("Grace Hopper")]),
    )
    .unwrap();
    conn.execute(
        "INSERT INTO EMP VALUES (:1, :2)",
        Params::from(vec![Value::from(2i64), Value::from("Ada Lovelace")]),
    )
    .unwrap();

    let rows = conn
        .query("SELECT * FROM EMP ORDER BY EMPLOYEEID", Params::None)
        .unwrap();
    assert_eq!(rows.len(), 2);
    let first = rows.first().unwrap();
    assert_eq!(first.get::<i64, _>("EMPLOYEEID"), Some(1));
    assert_eq!(
        first.get::<String, _>("EMPLOYEENAME"),
        Some("Grace Hopper".to_string())
    );

    conn.execute("DROP TABLE EMP", Params::None).unwrap();
    drop(conn);
    assert_eq!(pool.borrowed_count(), 0);
}

#[test]
fn test_query_failure_is_recoverable() {
    let pool = Unipool::new(oracle_config()).unwrap();
    let conn = pool.acquire().unwrap();

    let err = conn
        .query("SELECT * FROM NO_SUCH_TABLE_42", Params::None)
        .unwrap_err();
    assert!(matches!(err, UnipoolError::QueryError(_)));

    // the same connection keeps working after a rejected statement
    let rows = conn.query("SELECT 1 FROM DUAL", Params::None).unwrap();
    assert_eq!(rows.len(), 1);

    drop(conn);
    assert_eq!(pool.borrowed_count(), 0);
}
