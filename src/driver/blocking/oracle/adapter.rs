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
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use oracle::sql_type::{OracleType, Timestamp};

use crate::comm::{ExecuteResult, OperationType};
use crate::data::{Row, Rows};
use crate::driver::blocking::oracle::OracleConnection;
use crate::driver::blocking::DbExecutor;
use crate::errors::{Result, UnipoolError};
use crate::param::Params;
use crate::value::Value;

pub struct OracleAdapter {
    conn: OracleConnection,
}

impl OracleAdapter {
    pub fn new(conn: OracleConnection) -> Self {
        Self { conn }
    }
}

impl DbExecutor for OracleAdapter {
    fn query(&self, sql: &str, params: Params) -> Result<Rows> {
        // Prepare the statement
        let mut stmt = self.conn.statement(sql).build().map_err(|e| {
            UnipoolError::QueryError(format!("failed to prepare statement: {}", e))
        })?;
        // Binding parameters
        bind_oracle_params(&mut stmt, &params)?;

        // Executing queries
        let result = stmt.query(&[]).map_err(|e| {
            UnipoolError::QueryError(format!("failed to execute query: {}", e))
        })?;

        // Getting column information
        let column_names: Vec<String> = result
            .column_info()
            .iter()
            .map(|col| col.name().to_string())
            .collect();
        let column_count = column_names.len();

        // Conversion result
        let mut records = Rows::new();
        for row_result in result {
            let row = row_result.map_err(|e| {
                UnipoolError::QueryError(format!("failed to fetch row: {}", e))
            })?;
            let mut record = Vec::with_capacity(column_count);
            for i in 0..column_count {
                record.push(column_value(&row, i)?);
            }
            records.push(Row::new(column_names.clone(), record));
        }
        Ok(records)
    }

    fn execute(&self, sql: &str, params: Params) -> Result<ExecuteResult> {
        match OperationType::detect_operation_type(sql) {
            OperationType::Select => Ok(ExecuteResult::Rows(self.query(sql, params)?)),
            OperationType::Other => {
                let mut stmt = self.conn.statement(sql).build().map_err(|e| {
                    UnipoolError::QueryError(format!("failed to prepare statement: {}", e))
                })?;
                bind_oracle_params(&mut stmt, &params)?;
                stmt.execute(&[]).map_err(|e| {
                    UnipoolError::QueryError(format!("failed to execute statement: {}", e))
                })?;
                let affected = stmt.row_count().map_err(UnipoolError::OracleError)?;
                // Every statement commits immediately; no transaction surface.
                self.conn.commit().map_err(UnipoolError::OracleError)?;
                Ok(ExecuteResult::AffectedRows(affected))
            }
        }
    }
}

/// Binding Oracle parameters
fn bind_oracle_params(stmt: &mut oracle::Statement, params: &Params) -> Result<()> {
    match params {
        Params::None => Ok(()),
        Params::Positional(values) => {
            for (i, value) in values.iter().enumerate() {
                bind_oracle_value(stmt, i, value)?;
            }
            Ok(())
        }
    }
}

/// Bind Oracle values by position
fn bind_oracle_value(stmt: &mut oracle::Statement, index: usize, value: &Value) -> Result<()> {
    let pos = index + 1; // Oracle parameters start at 1
    let bound = match value {
        Value::Null => stmt.bind(pos, &None::<String>),
        Value::Bool(v) => stmt.bind(pos, &(*v as i32)),
        Value::Int(v) => stmt.bind(pos, v),
        Value::Bigint(v) => stmt.bind(pos, v),
        Value::Double(v) => stmt.bind(pos, v),
        Value::Text(v) => stmt.bind(pos, v),
        Value::Blob(v) => stmt.bind(pos, v),
        Value::DateTime(v) => stmt.bind(pos, v),
        Value::Timestamp(v) => stmt.bind(pos, v),
    };
    bound.map_err(|e| {
        UnipoolError::QueryError(format!("failed to bind parameter {}: {}", pos, e))
    })
}

/// Get the value from the Oracle row
fn column_value(row: &oracle::Row, index: usize) -> Result<Value> {
    let col_type = row.column_info()[index].oracle_type();
    match col_type {
        OracleType::Number(_, _) => {
            // NUMBER covers integers and decimals; try the narrower reading
            // first and keep the textual form when neither fits.
            if let Ok(Some(val)) = row.get::<usize, Option<i64>>(index) {
                return Ok(Value::Bigint(val));
            }
            if let Ok(Some(val)) = row.get::<usize, Option<f64>>(index) {
                return Ok(Value::Double(val));
            }
            match row.get::<usize, Option<String>>(index).map_err(|e| {
                UnipoolError::QueryError(format!("failed to get number value: {}", e))
            })? {
                Some(val) => Ok(Value::Text(val)),
                None => Ok(Value::Null),
            }
        }
        OracleType::Varchar2(_)
        | OracleType::Char(_)
        | OracleType::NChar(_)
        | OracleType::NVarchar2(_) => {
            match row.get::<usize, Option<String>>(index).map_err(|e| {
                UnipoolError::QueryError(format!("failed to get string value: {}", e))
            })? {
                Some(val) => Ok(Value::Text(val)),
                None => Ok(Value::Null),
            }
        }
        OracleType::Date => {
            match row.get::<usize, Option<NaiveDateTime>>(index).map_err(|e| {
                UnipoolError::QueryError(format!("failed to get date value: {}", e))
            })? {
                Some(val) => Ok(Value::DateTime(val)),
                None => Ok(Value::Null),
            }
        }
        OracleType::Timestamp(_) | OracleType::TimestampTZ(_) => {
            if let Ok(Some(ts)) = row.get::<usize, Option<Timestamp>>(index) {
                if let Some(val) = timestamp_to_utc(&ts) {
                    return Ok(Value::Timestamp(val));
                }
            }
            // Backend returns a string in some cases (TIMESTAMPTZ is common)
            match row.get::<usize, Option<String>>(index).map_err(|e| {
                UnipoolError::QueryError(format!("failed to get timestamp value: {}", e))
            })? {
                Some(val) => parse_timestamptz_str(&val)
                    .map(Value::Timestamp)
                    .ok_or_else(|| {
                        UnipoolError::ConvertError(format!("invalid timestamp: {}", val))
                    }),
                None => Ok(Value::Null),
            }
        }
        OracleType::BLOB | OracleType::Raw(_) => {
            match row.get::<usize, Option<Vec<u8>>>(index).map_err(|e| {
                UnipoolError::QueryError(format!("failed to get blob value: {}", e))
            })? {
                Some(val) => Ok(Value::Blob(val)),
                None => Ok(Value::Null),
            }
        }
        OracleType::CLOB | OracleType::NCLOB => {
            match row.get::<usize, Option<String>>(index).map_err(|e| {
                UnipoolError::QueryError(format!("failed to get clob value: {}", e))
            })? {
                Some(val) => Ok(Value::Text(val)),
                None => Ok(Value::Null),
            }
        }
        _ => {
            // For an unknown type, try to get a string
            match row.get::<usize, Option<String>>(index).map_err(|e| {
                UnipoolError::QueryError(format!("failed to get value: {}", e))
            })? {
                Some(val) => Ok(Value::Text(val)),
                None => Ok(Value::Null),
            }
        }
    }
}

fn timestamp_to_utc(ts: &Timestamp) -> Option<DateTime<Utc>> {
    let ndt = NaiveDate::from_ymd_opt(ts.year(), ts.month(), ts.day())?
        .and_hms_nano_opt(ts.hour(), ts.minute(), ts.second(), ts.nanosecond())?;
    Some(DateTime::<Utc>::from_naive_utc_and_offset(ndt, Utc))
}

fn parse_timestamptz_str(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S %:z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
