// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use super::yaml::{self, Get, Yaml};
use anyhow::Result;
use std::path::Path;
use std::str::FromStr;

mod keys {
    pub const SYSTEM: &str = "system";
    pub const LOGGING: &str = "logging";

    pub const LEVEL: &str = "level";
    pub const MAX_SIZE: &str = "max_size";
    pub const MAX_COUNT: &str = "max_count";
}

mod defaults {
    use crate::constants;
    pub const LOG_LEVEL: log::Level = log::Level::Info;
    pub const LOG_MAX_SIZE: u64 = constants::log::FILE_MAX_SIZE;
    pub const LOG_MAX_COUNT: usize = constants::log::FILE_MAX_COUNT;
}

/// `system` section of the config file
#[derive(PartialEq, Debug, Default)]
pub struct SystemConfig {
    logging: Logging,
}

#[derive(PartialEq, Debug, Default, Clone)]
pub struct Logging {
    level: Option<log::Level>,
    max_size: Option<u64>,
    max_count: Option<usize>,
}

impl Logging {
    fn from_yaml(system: &Yaml) -> Self {
        let logging = system.get(keys::LOGGING);
        if logging.is_badvalue() {
            return Self::default();
        }

        let level = logging.get_string(keys::LEVEL).and_then(|s| {
            log::Level::from_str(&s)
                .inspect_err(|_| log::warn!("Unknown log level '{s}', using default"))
                .ok()
        });
        Self {
            level,
            max_size: logging.get_int(keys::MAX_SIZE),
            max_count: logging.get_int(keys::MAX_COUNT),
        }
    }

    pub fn level(&self) -> log::Level {
        self.level.unwrap_or(defaults::LOG_LEVEL)
    }
    pub fn max_size(&self) -> u64 {
        self.max_size.unwrap_or(defaults::LOG_MAX_SIZE)
    }
    pub fn max_count(&self) -> usize {
        self.max_count.unwrap_or(defaults::LOG_MAX_COUNT)
    }
}

impl SystemConfig {
    pub fn load_file(file: &Path) -> Result<Self> {
        Self::from_documents(yaml::load_from_file(file)?)
    }

    pub fn from_string(source: &str) -> Result<Self> {
        Self::from_documents(yaml::load_from_str(source)?)
    }

    fn from_documents(data: Vec<Yaml>) -> Result<Self> {
        Ok(data.first().map(Self::from_yaml).unwrap_or_default())
    }

    pub fn from_yaml(yaml: &Yaml) -> Self {
        let system = yaml.get(keys::SYSTEM);
        if system.is_badvalue() {
            return Self::default();
        }

        Self {
            logging: Logging::from_yaml(system),
        }
    }

    pub fn logging(&self) -> &Logging {
        &self.logging
    }
}
