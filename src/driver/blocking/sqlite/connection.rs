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
use std::path::{Path, PathBuf};

use r2d2::Pool;
use rusqlite::{Connection, Error, OpenFlags};

use crate::config::PoolConfig;
use crate::driver::DriverType;
use crate::errors::UnipoolError;

pub type SqlitePool = Pool<SqliteConnectionManager>;
pub type SqliteConnection = r2d2::PooledConnection<SqliteConnectionManager>;

#[derive(Debug)]
enum Source {
    File(PathBuf),
    Memory,
}

type InitFn = dyn Fn(&mut Connection) -> std::result::Result<(), rusqlite::Error> + Send + Sync + 'static;

pub struct SqliteConnectionManager {
    source: Source,
    flags: OpenFlags,
    init: Option<Box<InitFn>>,
}

impl fmt::Debug for SqliteConnectionManager {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut builder = f.debug_struct("SqliteConnectionManager");
        let _ = builder.field("source", &self.source);
        let _ = builder.field("flags", &self.flags);
        let _ = builder.field("init", &self.init.as_ref().map(|_| "InitFn"));
        builder.finish()
    }
}

impl SqliteConnectionManager {
    pub fn new(cfg: &PoolConfig) -> Result<Self, UnipoolError> {
        if cfg.platform() != DriverType::Sqlite {
            return Err(UnipoolError::ConfigError(
                "Database type mismatch: expected SQLite".to_string(),
            ));
        }

        let file_path = cfg.sqlite_file().ok_or_else(|| {
            UnipoolError::ConfigError("SQLite file path is required".to_string())
        })?;

        let mut manager = if file_path == ":memory:" {
            Self::memory()
        } else {
            Self::file(file_path)
        };

        // Driver properties map onto PRAGMAs, applied to every new connection.
        if !cfg.driver_properties().is_empty() {
            let pragmas: Vec<(String, String)> = cfg
                .driver_properties()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            manager = manager.with_init(move |conn| {
                for (name, value) in &pragmas {
                    conn.execute_batch(&format!("PRAGMA {} = {};", name, value))?;
                }
                Ok(())
            });
        }

        Ok(manager)
    }

    /// Creates a new `SqliteConnectionManager` from file.
    ///
    /// See `rusqlite::Connection::open`
    pub fn file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            source: Source::File(path.as_ref().to_path_buf()),
            flags: OpenFlags::default(),
            init: None,
        }
    }

    /// Creates a new `SqliteConnectionManager` from memory.
    pub fn memory() -> Self {
        Self {
            source: Source::Memory,
            flags: OpenFlags::default(),
            init: None,
        }
    }

    /// Converts `SqliteConnectionManager` into one that sets OpenFlags upon
    /// connection creation.
    ///
    /// See `rusqlite::OpenFlags` for a list of available flags.
    pub fn with_flags(self, flags: OpenFlags) -> Self {
        Self { flags, ..self }
    }

    /// Converts `SqliteConnectionManager` into one that calls an initialization
    /// function upon connection creation. Could be used to set PRAGMAs, for
    /// example.
    pub fn with_init<F>(self, init: F) -> Self
    where
        F: Fn(&mut Connection) -> std::result::Result<(), rusqlite::Error> + Send + Sync + 'static,
    {
        let init: Option<Box<InitFn>> = Some(Box::new(init));
        Self { init, ..self }
    }
}

impl r2d2::ManageConnection for SqliteConnectionManager {
    type Connection = Connection;
    type Error = rusqlite::Error;

    fn connect(&self) -> std::result::Result<Connection, Error> {
        match self.source {
            Source::File(ref path) => Connection::open_with_flags(path, self.flags),
            Source::Memory => Connection::open_in_memory_with_flags(self.flags),
        }
        .and_then(|mut c| match self.init {
            None => Ok(c),
            Some(ref init) => init(&mut c).map(|_| c),
        })
    }

    fn is_valid(&self, conn: &mut Connection) -> std::result::Result<(), Error> {
        conn.execute_batch("")
    }

    fn has_broken(&self, conn: &mut Connection) -> bool {
        self.is_valid(conn).is_err()
    }
}

///
/// Create a connection pool
/// cfg Configuration information
///
pub fn init_sqlite_pool(cfg: &PoolConfig) -> Result<SqlitePool, UnipoolError> {
    let manager = SqliteConnectionManager::new(cfg)?;

    let pool = r2d2::Pool::builder()
        .connection_timeout(cfg.connection_timeout())
        .min_idle(Some(cfg.effective_min_idle()))
        .max_size(cfg.max_size())
        .idle_timeout(cfg.inactive_timeout())
        .test_on_check_out(cfg.test_on_check_out())
        .build(manager)
        .map_err(|e| {
            UnipoolError::AcquireError(format!("failed to create SQLite connection pool: {}", e))
        })?;

    Ok(pool)
}
