// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub mod log {
    use flexi_logger::Naming;
    pub const FILE_MAX_SIZE: u64 = 500_000;
    pub const FILE_NAMING: Naming = Naming::NumbersDirect;
    pub const FILE_MAX_COUNT: usize = 5;
    pub const FILE_BASENAME: &str = "mk-mysql";
}

/// Name of the plugin as used in the path of custom queries
pub const PLUGIN_NAME: &str = "Mysql";

pub const SQL_QUERY_EXTENSION: &str = "sql";

pub mod custom_queries {
    pub const AGENT_PRODUCT_NAME: &str = "Zabbix Agent 2";
    pub const SUB_DIR: &str = "Custom Queries";
    pub const POSIX_BASE_DIR: &str = "/usr/local/share/zabbix/custom-queries";
}

pub mod environment {
    pub const CONFIG_NAME: &str = "mysql.yml";
    pub const CONFIG_DIR_ENV_VAR: &str = "MK_CONFDIR";
    pub const LOG_DIR_ENV_VAR: &str = "MK_LOGDIR";
    /// Windows installation root, e.g. `C:\Program Files`
    pub const PROGRAM_FILES_ENV_VAR: &str = "ProgramFiles";
}

pub static DEFAULT_CONFIG_FILE: LazyLock<PathBuf> = LazyLock::new(|| {
    Path::new(&get_env_value(environment::CONFIG_DIR_ENV_VAR, ".")).join(environment::CONFIG_NAME)
});
pub static ENV_LOG_DIR: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    std::env::var(environment::LOG_DIR_ENV_VAR)
        .ok()
        .map(PathBuf::from)
});

pub fn get_env_value(var: &str, on_lack: &str) -> String {
    std::env::var(var).unwrap_or(on_lack.to_string())
}
