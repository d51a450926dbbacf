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
use std::fmt;
use chrono::{DateTime, NaiveDateTime, Utc};

use crate::errors::UnipoolError;

/// A single typed column value as produced by a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Bigint(i64),
    Double(f64),
    Text(String),
    Blob(Vec<u8>),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<Utc>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Bigint(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
            Value::Blob(v) => write!(f, "<binary {} bytes>", v.len()),
            Value::DateTime(v) => write!(f, "{}", v),
            Value::Timestamp(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Bigint(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Bigint(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Conversion out of a [`Value`] into a concrete Rust type.
pub trait FromValue: Sized {
    fn from_value_opt(v: &Value) -> Result<Self, UnipoolError>;
}

fn convert_err(v: &Value, target: &str) -> UnipoolError {
    UnipoolError::ConvertError(format!("cannot convert {:?} to {}", v, target))
}

impl FromValue for Value {
    fn from_value_opt(v: &Value) -> Result<Self, UnipoolError> {
        Ok(v.clone())
    }
}

impl FromValue for bool {
    fn from_value_opt(v: &Value) -> Result<Self, UnipoolError> {
        match v {
            Value::Bool(v) => Ok(*v),
            Value::Int(v) => Ok(*v != 0),
            Value::Bigint(v) => Ok(*v != 0),
            Value::Text(s) => match s.as_str() {
                "true" | "TRUE" | "1" => Ok(true),
                "false" | "FALSE" | "0" => Ok(false),
                _ => Err(convert_err(v, "bool")),
            },
            _ => Err(convert_err(v, "bool")),
        }
    }
}

impl FromValue for i64 {
    fn from_value_opt(v: &Value) -> Result<Self, UnipoolError> {
        match v {
            Value::Int(n) => Ok(*n as i64),
            Value::Bigint(n) => Ok(*n),
            Value::Bool(b) => Ok(*b as i64),
            Value::Text(s) => s.parse().map_err(|_| convert_err(v, "i64")),
            _ => Err(convert_err(v, "i64")),
        }
    }
}

impl FromValue for i32 {
    fn from_value_opt(v: &Value) -> Result<Self, UnipoolError> {
        let n = i64::from_value_opt(v)?;
        i32::try_from(n).map_err(|_| convert_err(v, "i32"))
    }
}

impl FromValue for u32 {
    fn from_value_opt(v: &Value) -> Result<Self, UnipoolError> {
        let n = i64::from_value_opt(v)?;
        u32::try_from(n).map_err(|_| convert_err(v, "u32"))
    }
}

impl FromValue for u64 {
    fn from_value_opt(v: &Value) -> Result<Self, UnipoolError> {
        let n = i64::from_value_opt(v)?;
        u64::try_from(n).map_err(|_| convert_err(v, "u64"))
    }
}

impl FromValue for f64 {
    fn from_value_opt(v: &Value) -> Result<Self, UnipoolError> {
        match v {
            Value::Double(n) => Ok(*n),
            Value::Int(n) => Ok(*n as f64),
            Value::Bigint(n) => Ok(*n as f64),
            Value::Text(s) => s.parse().map_err(|_| convert_err(v, "f64")),
            _ => Err(convert_err(v, "f64")),
        }
    }
}

impl FromValue for String {
    fn from_value_opt(v: &Value) -> Result<Self, UnipoolError> {
        match v {
            Value::Text(s) => Ok(s.clone()),
            Value::Null => Err(convert_err(v, "String")),
            other => Ok(other.to_string()),
        }
    }
}

impl FromValue for NaiveDateTime {
    fn from_value_opt(v: &Value) -> Result<Self, UnipoolError> {
        match v {
            Value::DateTime(dt) => Ok(*dt),
            Value::Timestamp(ts) => Ok(ts.naive_utc()),
            Value::Text(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .map_err(|_| convert_err(v, "NaiveDateTime")),
            _ => Err(convert_err(v, "NaiveDateTime")),
        }
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value_opt(v: &Value) -> Result<Self, UnipoolError> {
        match v {
            Value::Timestamp(ts) => Ok(*ts),
            Value::DateTime(dt) => Ok(DateTime::<Utc>::from_naive_utc_and_offset(*dt, Utc)),
            Value::Text(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| convert_err(v, "DateTime<Utc>")),
            _ => Err(convert_err(v, "DateTime<Utc>")),
        }
    }
}

impl<T> FromValue for Option<T>
where
    T: FromValue,
{
    fn from_value_opt(v: &Value) -> Result<Self, UnipoolError> {
        match v {
            Value::Null => Ok(None),
            other => T::from_value_opt(other).map(Some),
        }
    }
}

#[test]
fn test_numeric_conversions() {
    assert_eq!(i64::from_value_opt(&Value::Bigint(42)).unwrap(), 42);
    assert_eq!(i32::from_value_opt(&Value::Bigint(42)).unwrap(), 42);
    assert_eq!(i64::from_value_opt(&Value::Text("7".to_string())).unwrap(), 7);
    assert!(i32::from_value_opt(&Value::Bigint(i64::MAX)).is_err());
    assert!(u32::from_value_opt(&Value::Bigint(-1)).is_err());
}

#[test]
fn test_null_handling() {
    assert!(i64::from_value_opt(&Value::Null).is_err());
    assert_eq!(Option::<i64>::from_value_opt(&Value::Null).unwrap(), None);
    assert_eq!(
        Option::<String>::from_value_opt(&Value::Text("x".to_string())).unwrap(),
        Some("x".to_string())
    );
}
