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
use rusqlite::params_from_iter;
use rusqlite::types::ValueRef;

use crate::comm::{ExecuteResult, OperationType};
use crate::data::{Row, Rows};
use crate::driver::blocking::sqlite::SqliteConnection;
use crate::driver::blocking::DbExecutor;
use crate::errors::{Result, UnipoolError};
use crate::param::Params;
use crate::value::Value;

pub struct SqliteAdapter {
    conn: SqliteConnection,
}

impl SqliteAdapter {
    pub fn new(conn: SqliteConnection) -> Self {
        Self { conn }
    }
}

impl DbExecutor for SqliteAdapter {
    fn query(&self, sql: &str, params: Params) -> Result<Rows> {
        // Prepare the statement
        let mut stmt = self.conn.prepare(sql).map_err(|e| {
            UnipoolError::QueryError(format!("failed to prepare statement: {}", e))
        })?;
        // Getting column information
        let column_names: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|c| c.to_string())
            .collect();
        let column_count = column_names.len();

        let args = to_sqlite_values(&params);
        let mut rows = stmt.query(params_from_iter(args)).map_err(|e| {
            UnipoolError::QueryError(format!("failed to execute query: {}", e))
        })?;

        // Conversion result
        let mut records = Rows::new();
        loop {
            let row = rows.next().map_err(|e| {
                UnipoolError::QueryError(format!("failed to fetch row: {}", e))
            })?;
            let row = match row {
                Some(row) => row,
                None => break,
            };
            let mut record = Vec::with_capacity(column_count);
            for i in 0..column_count {
                record.push(column_value(row, i)?);
            }
            records.push(Row::new(column_names.clone(), record));
        }
        Ok(records)
    }

    fn execute(&self, sql: &str, params: Params) -> Result<ExecuteResult> {
        match OperationType::detect_operation_type(sql) {
            OperationType::Select => Ok(ExecuteResult::Rows(self.query(sql, params)?)),
            OperationType::Other => {
                let args = to_sqlite_values(&params);
                // SQLite commits each statement on its own outside an
                // explicit transaction, which is the only mode offered here.
                let affected = self.conn.execute(sql, params_from_iter(args)).map_err(|e| {
                    UnipoolError::QueryError(format!("failed to execute statement: {}", e))
                })?;
                Ok(ExecuteResult::AffectedRows(affected as u64))
            }
        }
    }
}

fn to_sqlite_values(params: &Params) -> Vec<rusqlite::types::Value> {
    match params {
        Params::None => Vec::new(),
        Params::Positional(values) => values.iter().map(to_sqlite_value).collect(),
    }
}

fn to_sqlite_value(value: &Value) -> rusqlite::types::Value {
    use rusqlite::types::Value as SqlValue;
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(v) => SqlValue::Integer(*v as i64),
        Value::Int(v) => SqlValue::Integer(*v as i64),
        Value::Bigint(v) => SqlValue::Integer(*v),
        Value::Double(v) => SqlValue::Real(*v),
        Value::Text(v) => SqlValue::Text(v.clone()),
        Value::Blob(v) => SqlValue::Blob(v.clone()),
        Value::DateTime(v) => SqlValue::Text(v.format("%Y-%m-%d %H:%M:%S").to_string()),
        Value::Timestamp(v) => SqlValue::Text(v.to_rfc3339()),
    }
}

/// Get the value from the SQLite row
fn column_value(row: &rusqlite::Row, index: usize) -> Result<Value> {
    let value = row.get_ref(index).map_err(|e| {
        UnipoolError::QueryError(format!("failed to get value: {}", e))
    })?;
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Bigint(v),
        ValueRef::Real(v) => Value::Double(v),
        ValueRef::Text(v) => Value::Text(String::from_utf8_lossy(v).into_owned()),
        ValueRef::Blob(v) => Value::Blob(v.to_vec()),
    })
}
