// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

pub mod keys {
    pub const MYSQL: &str = "mysql";

    pub const OPTIONS: &str = "options";
    pub const TIMEOUT: &str = "timeout";
    pub const KEEP_ALIVE: &str = "keep_alive";
    pub const CALL_TIMEOUT: &str = "call_timeout";

    pub const CUSTOM_QUERIES: &str = "custom_queries";
    pub const ENABLED: &str = "enabled";
    pub const PATH: &str = "path";

    pub const DEFAULT: &str = "default";
    pub const SESSIONS: &str = "sessions";
    pub const NAME: &str = "name";
    pub const URI: &str = "uri";
    pub const USER: &str = "user";
    pub const PASSWORD: &str = "password";
    pub const TLS_CONNECT: &str = "tls_connect";
    pub const TLS_CA_FILE: &str = "tls_ca_file";
    pub const TLS_CERT_FILE: &str = "tls_cert_file";
    pub const TLS_KEY_FILE: &str = "tls_key_file";
}

pub mod defaults {
    pub const TIMEOUT: u32 = 3;
    pub const KEEP_ALIVE: u32 = 300;
    pub const CUSTOM_QUERIES_ENABLED: bool = false;
    pub const SESSION_NAME: &str = "default";
}

pub mod limits {
    use std::ops::RangeInclusive;
    pub const TIMEOUT: RangeInclusive<u32> = 1..=30;
    pub const KEEP_ALIVE: RangeInclusive<u32> = 60..=900;
}
