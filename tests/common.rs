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
#![allow(dead_code)]

use std::time::Duration;

use unipool::prelude::*;

/// Pool configuration matching the canonical sample: five connections up
/// front, room to grow to twenty.
pub fn memory_config() -> PoolConfig {
    PoolConfig::new("sqlite::memory:")
        .set_pool_name("UNIPOOL_TEST".to_string())
        .set_initial_size(5)
        .set_min_size(5)
        .set_max_size(20)
        .set_connection_timeout(Duration::from_millis(500))
}
