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
//! Common Errors.
//!
use std::fmt;

pub type Result<T> = std::result::Result<T, UnipoolError>;

#[derive(Debug)]
pub enum UnipoolError {
    /// Invalid or incomplete pool configuration. Fatal to pool construction.
    ConfigError(String),
    /// The URL scheme names a database this build has no driver for.
    UnsupportedPlatform(String),
    /// The pool could not produce a connection within the configured wait.
    AcquireError(String),
    /// Malformed SQL or backend rejection. Recoverable per call.
    QueryError(String),
    /// A column value could not be converted to the requested type.
    ConvertError(String),
    /// The pool has been closed; no further checkouts are allowed.
    PoolClosed,
    #[cfg(feature = "oracle-sync")]
    OracleError(oracle::Error),
    #[cfg(feature = "sqlite-sync")]
    SqliteError(rusqlite::Error),
}

impl fmt::Display for UnipoolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            UnipoolError::ConfigError(ref err) => write!(f, "configuration error: {}", err),
            UnipoolError::UnsupportedPlatform(ref scheme) => {
                write!(f, "unsupported database platform: {}", scheme)
            }
            UnipoolError::AcquireError(ref err) => write!(f, "connection acquire error: {}", err),
            UnipoolError::QueryError(ref err) => write!(f, "query error: {}", err),
            UnipoolError::ConvertError(ref err) => write!(f, "value conversion error: {}", err),
            UnipoolError::PoolClosed => write!(f, "connection pool is closed"),
            #[cfg(feature = "oracle-sync")]
            UnipoolError::OracleError(ref err) => err.fmt(f),
            #[cfg(feature = "sqlite-sync")]
            UnipoolError::SqliteError(ref err) => err.fmt(f),
        }
    }
}

impl std::error::Error for UnipoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            #[cfg(feature = "oracle-sync")]
            UnipoolError::OracleError(ref err) => Some(err),
            #[cfg(feature = "sqlite-sync")]
            UnipoolError::SqliteError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<r2d2::Error> for UnipoolError {
    fn from(err: r2d2::Error) -> Self {
        UnipoolError::AcquireError(err.to_string())
    }
}

#[cfg(feature = "oracle-sync")]
impl From<oracle::Error> for UnipoolError {
    fn from(err: oracle::Error) -> Self {
        UnipoolError::OracleError(err)
    }
}

#[cfg(feature = "sqlite-sync")]
impl From<rusqlite::Error> for UnipoolError {
    fn from(err: rusqlite::Error) -> Self {
        UnipoolError::SqliteError(err)
    }
}
