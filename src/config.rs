// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

pub mod defines;
pub mod options;
pub mod session;
pub mod system;
pub mod yaml;

use crate::platform::CustomQueriesLocator;
use anyhow::{bail, Result};
use options::PluginOptions;
use std::path::Path;

/// Contains options of the MySQL plugin
#[derive(Default, Debug, PartialEq)]
pub struct MysqlConfig {
    options: Option<PluginOptions>,
}

impl MysqlConfig {
    pub fn load_file(file: &Path) -> Result<Self> {
        MysqlConfig::load_vec_yaml(yaml::load_from_file(file)?)
    }
    pub fn load_str(content: &str) -> Result<Self> {
        MysqlConfig::load_vec_yaml(yaml::load_from_str(content)?)
    }

    fn load_vec_yaml(data: Vec<yaml::Yaml>) -> Result<Self> {
        if data.is_empty() {
            bail!("Not yaml document");
        }
        Ok(MysqlConfig {
            options: PluginOptions::from_yaml(&data[0])?,
        })
    }

    pub fn options(&self) -> Option<&PluginOptions> {
        self.options.as_ref()
    }

    /// Must be called once after loading
    pub fn normalize(&mut self, locator: &CustomQueriesLocator) {
        if let Some(options) = self.options.as_mut() {
            options.normalize_custom_queries_path(locator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PathStyle;

    static YML_MINI_FILE: &str = include_str!("../tests/files/test-mini.yml");
    static YML_CONFIG_FILE: &str = include_str!("../tests/files/test-config.yml");
    static NOT_YAML_FILE: &str = include_str!("../tests/files/not-yaml.yml");
    static NOT_MYSQL_FILE: &str = include_str!("../tests/files/not-mysql.yml");

    #[test]
    fn test_check_config() {
        assert!(MysqlConfig::load_str(NOT_YAML_FILE).is_err());
        assert!(MysqlConfig::load_str("").is_err());
        assert!(MysqlConfig::load_str(NOT_MYSQL_FILE)
            .unwrap()
            .options()
            .is_none());
        assert!(MysqlConfig::load_str(YML_MINI_FILE)
            .unwrap()
            .options()
            .is_some());
    }

    #[test]
    fn test_full_config() {
        let config = MysqlConfig::load_str(YML_CONFIG_FILE).unwrap();
        let options = config.options().unwrap();
        assert_eq!(options.timeout().value(), 5);
        assert_eq!(options.keep_alive().value(), 300);
        assert_eq!(options.call_timeout().value(), 10);
        assert!(options.custom_queries_enabled());
        assert!(options.custom_queries_path().is_empty());
        assert_eq!(options.sessions().len(), 2);
        assert!(options.default_session().is_some());
    }

    #[test]
    fn test_normalize_config() {
        let locator = CustomQueriesLocator::new(PathStyle::Windows, Some("R:".to_string()));
        let mut config = MysqlConfig::load_str(YML_CONFIG_FILE).unwrap();
        config.normalize(&locator);
        assert_eq!(
            config.options().unwrap().custom_queries_path(),
            "R:\\Zabbix Agent 2\\Custom Queries\\Mysql"
        );

        let mut config = MysqlConfig::load_str(YML_MINI_FILE).unwrap();
        config.normalize(&locator);
        assert!(config.options().unwrap().custom_queries_path().is_empty());

        let mut config = MysqlConfig::load_str(NOT_MYSQL_FILE).unwrap();
        config.normalize(&locator);
        assert_eq!(config, MysqlConfig::default());
    }
}
