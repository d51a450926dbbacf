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
//! Tests.
//!
use std::time::{Duration, Instant};

use tempfile::TempDir;
use unipool::prelude::*;

mod common;
use common::*;

fn file_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("unipool.db").display())
}

#[test]
fn test_pool_reaches_initial_size() {
    let pool = Unipool::new(memory_config()).unwrap();
    let status = pool.status();
    assert_eq!(status.borrowed, 0);
    assert_eq!(status.available + status.borrowed, 5);
}

#[test]
fn test_mismatched_sizes_fail_construction() {
    let cfg = memory_config().set_min_size(30).set_max_size(20);
    let err = Unipool::new(cfg).unwrap_err();
    assert!(matches!(err, UnipoolError::ConfigError(_)));
}

#[test]
fn test_acquire_then_release_restores_counters() {
    let pool = Unipool::new(memory_config()).unwrap();
    let before = pool.borrowed_count();

    let conn = pool.acquire().unwrap();
    assert_eq!(pool.borrowed_count(), before + 1);

    drop(conn);
    assert_eq!(pool.borrowed_count(), before);
}

#[test]
fn test_emp_scenario_on_one_connection() {
    let pool = Unipool::new(memory_config()).unwrap();
    let borrowed_before = pool.borrowed_count();

    let conn = pool.acquire().unwrap();
    conn.execute(
        "CREATE TABLE EMP (EMPLOYEEID INTEGER, EMPLOYEENAME VARCHAR(20))",
        Params::None,
    )
    .unwrap();
    conn.execute(
        "INSERT INTO EMP (EMPLOYEEID, EMPLOYEENAME) VALUES (?, ?)",
        Params::from(vec![Value::from(1i64), Value::from("Grace Hopper")]),
    )
    .unwrap();
    conn.execute(
        "INSERT INTO EMP (EMPLOYEEID, EMPLOYEENAME) VALUES (?, ?)",
        Params::from(vec![Value::from(2i64), Value::from("Ada Lovelace")]),
    )
    .unwrap();

    let rows = conn
        .query("SELECT * FROM EMP ORDER BY EMPLOYEEID", Params::None)
        .unwrap();
    assert_eq!(rows.len(), 2);
    for row in rows.iter() {
        assert!(row.get::<i64, _>(0).is_some());
        assert!(row.get::<String, _>(1).is_some());
    }
    let first = rows.first().unwrap();
    assert_eq!(first.get::<i64, _>("EMPLOYEEID"), Some(1));
    assert_eq!(
        first.get::<String, _>("EMPLOYEENAME"),
        Some("Grace Hopper".to_string())
    );

    drop(conn);
    assert_eq!(pool.borrowed_count(), borrowed_before);
}

#[test]
fn test_query_failure_still_releases() {
    let cfg = memory_config()
        .set_initial_size(1)
        .set_min_size(1)
        .set_max_size(1)
        .set_connection_timeout(Duration::from_millis(300));
    let pool = Unipool::new(cfg).unwrap();

    let conn = pool.acquire().unwrap();
    let err = conn
        .query("SELECT * FROM NO_SUCH_TABLE", Params::None)
        .unwrap_err();
    assert!(matches!(err, UnipoolError::QueryError(_)));
    // a failed query neither invalidates the borrow nor returns it early
    assert_eq!(pool.borrowed_count(), 1);

    drop(conn);
    assert_eq!(pool.borrowed_count(), 0);

    // the only slot must be usable again: no leak on the error path
    let conn = pool.acquire().unwrap();
    drop(conn);
}

#[test]
fn test_exhausted_pool_fails_after_timeout() {
    let cfg = memory_config()
        .set_initial_size(1)
        .set_min_size(1)
        .set_max_size(1)
        .set_connection_timeout(Duration::from_millis(200));
    let pool = Unipool::new(cfg).unwrap();

    let _held = pool.acquire().unwrap();

    // the second checkout blocks until the connection timeout, then fails
    let start = Instant::now();
    let err = pool.acquire().unwrap_err();
    assert!(matches!(err, UnipoolError::AcquireError(_)));
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[test]
fn test_close_rejects_new_checkouts() {
    let pool = Unipool::new(memory_config()).unwrap();
    assert!(!pool.is_closed());

    pool.close();
    assert!(pool.is_closed());
    let err = pool.acquire().unwrap_err();
    assert!(matches!(err, UnipoolError::PoolClosed));
}

#[test]
fn test_exec_first_takes_first_match() {
    let dir = TempDir::new().unwrap();
    let pool = Unipool::new(memory_config().set_url(file_url(&dir))).unwrap();

    pool.execute(
        "CREATE TABLE EMP (EMPLOYEEID INTEGER, EMPLOYEENAME VARCHAR(20))",
        Params::None,
    )
    .unwrap();
    pool.execute(
        "INSERT INTO EMP (EMPLOYEEID, EMPLOYEENAME) VALUES (?, ?)",
        Params::from(vec![Value::from(1i64), Value::from("Grace Hopper")]),
    )
    .unwrap();
    pool.execute(
        "INSERT INTO EMP (EMPLOYEEID, EMPLOYEENAME) VALUES (?, ?)",
        Params::from(vec![Value::from(2i64), Value::from("Ada Lovelace")]),
    )
    .unwrap();

    let row = pool
        .exec_first("SELECT EMPLOYEENAME FROM EMP ORDER BY EMPLOYEEID", Params::None)
        .unwrap()
        .unwrap();
    assert_eq!(row.get::<String, _>(0), Some("Grace Hopper".to_string()));

    let none = pool
        .exec_first(
            "SELECT EMPLOYEENAME FROM EMP WHERE EMPLOYEEID = ?",
            Params::from(vec![Value::from(99i64)]),
        )
        .unwrap();
    assert!(none.is_none());
}

#[test]
fn test_driver_properties_applied_as_pragmas() {
    let dir = TempDir::new().unwrap();
    let cfg = memory_config()
        .set_url(file_url(&dir))
        .set_driver_property("foreign_keys", "on");
    let pool = Unipool::new(cfg).unwrap();

    let row = pool
        .exec_first("PRAGMA foreign_keys", Params::None)
        .unwrap()
        .unwrap();
    assert_eq!(row.get::<i64, _>(0), Some(1));
}
