// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::constants::{custom_queries, environment};

/// Convention used to build the default location of custom queries
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum PathStyle {
    /// `<ProgramFiles>\<product>\Custom Queries\<plugin>`
    Windows,
    /// fixed system directory, root is ignored
    Posix,
}

impl PathStyle {
    pub const fn native() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }
}

/// Computes default custom queries path.
/// The installation root is injected, `from_env` is the only place where environment is read.
#[derive(PartialEq, Debug, Clone)]
pub struct CustomQueriesLocator {
    style: PathStyle,
    program_root: Option<String>,
}

impl CustomQueriesLocator {
    pub fn new(style: PathStyle, program_root: Option<String>) -> Self {
        Self {
            style,
            program_root,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            PathStyle::native(),
            std::env::var(environment::PROGRAM_FILES_ENV_VAR).ok(),
        )
    }

    pub fn style(&self) -> PathStyle {
        self.style
    }

    pub fn program_root(&self) -> Option<&str> {
        self.program_root.as_deref()
    }

    /// Never fails: absent root produces a path with empty first segment
    pub fn default_path(&self, plugin_name: &str) -> String {
        match self.style {
            PathStyle::Windows => {
                let root = self.program_root.as_deref().unwrap_or_else(|| {
                    log::warn!(
                        "{} is not set, custom queries path will be incomplete",
                        environment::PROGRAM_FILES_ENV_VAR
                    );
                    ""
                });
                format!(
                    "{}\\{}\\{}\\{}",
                    root,
                    custom_queries::AGENT_PRODUCT_NAME,
                    custom_queries::SUB_DIR,
                    plugin_name
                )
            }
            PathStyle::Posix => format!(
                "{}/{}",
                custom_queries::POSIX_BASE_DIR,
                plugin_name.to_lowercase()
            ),
        }
    }
}
