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
use crate::data::Rows;

/// Query result type
pub enum ExecuteResult {
    Rows(Rows),
    AffectedRows(u64),
    None,
}

impl ExecuteResult {
    pub fn len(&self) -> u64 {
        match self {
            ExecuteResult::Rows(rows) => rows.len() as u64,
            _ => 0,
        }
    }

    pub fn affected_rows(&self) -> u64 {
        match self {
            ExecuteResult::Rows(rows) => rows.len() as u64,
            ExecuteResult::AffectedRows(af) => *af,
            _ => 0,
        }
    }

    pub fn rows(self) -> Rows {
        match self {
            ExecuteResult::Rows(rows) => rows,
            _ => Rows::new(),
        }
    }
}

/// Coarse statement classification, used to route between the query and
/// execute paths of a driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperationType {
    Select,
    Other,
}

impl OperationType {
    pub fn detect_operation_type(sql: &str) -> Self {
        let head = sql
            .trim_start()
            .split_whitespace()
            .next()
            .unwrap_or_default();
        if head.eq_ignore_ascii_case("select") || head.eq_ignore_ascii_case("with") {
            OperationType::Select
        } else {
            OperationType::Other
        }
    }
}

#[test]
fn test_detect_operation_type() {
    assert_eq!(
        OperationType::detect_operation_type("  SELECT * FROM EMP"),
        OperationType::Select
    );
    assert_eq!(
        OperationType::detect_operation_type("insert into EMP values (1, 'x')"),
        OperationType::Other
    );
}
