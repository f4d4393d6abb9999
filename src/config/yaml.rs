// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::utils::{path_to_string, read_file};
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use yaml_rust2::YamlLoader;
pub type Yaml = yaml_rust2::yaml::Yaml;

pub trait Get {
    fn get(&self, key: &str) -> &Self
    where
        Self: Sized;
    fn get_string(&self, key: &str) -> Option<String>
    where
        Self: Sized;
    fn get_int<T>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
        T: std::convert::TryFrom<i64>;
    fn get_pathbuf(&self, key: &str) -> Option<PathBuf>;

    fn get_yaml_vector(&self, key: &str) -> Vec<Yaml>;

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_optional_bool(key).unwrap_or(default)
    }

    fn get_optional_bool(&self, key: &str) -> Option<bool>;
}

impl Get for Yaml {
    fn get(&self, key: &str) -> &Self {
        &self[key]
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self[key].as_str().map(str::to_string)
    }

    fn get_pathbuf(&self, key: &str) -> Option<PathBuf> {
        self[key].as_str().filter(|s| !s.is_empty()).map(PathBuf::from)
    }

    fn get_int<T>(&self, key: &str) -> Option<T>
    where
        T: std::convert::TryFrom<i64>,
    {
        if let Some(value) = self[key].as_i64() {
            TryInto::try_into(value).ok()
        } else {
            log::debug!("{key} not found");
            None
        }
    }

    fn get_yaml_vector(&self, key: &str) -> Vec<Yaml> {
        self[key].as_vec().cloned().unwrap_or_default()
    }

    fn get_optional_bool(&self, key: &str) -> Option<bool> {
        let result = &self[key];
        if result.is_badvalue() {
            return None;
        }

        let ret = result.as_bool();
        if ret.is_some() {
            return ret;
        }

        // yes/no are strings for yaml_rust2
        let ret = result.as_str().map(to_bool).transpose().ok().flatten();
        if ret.is_none() {
            log::warn!("{key} is not bool like");
        }
        ret
    }
}

pub fn load_from_file(file_name: &Path) -> Result<Vec<Yaml>> {
    match read_file(file_name) {
        Ok(content) => load_from_str(&content),
        // "{file_name:?}" doubles backslashes on Windows
        Err(e) => anyhow::bail!(
            "Can't read config file: {}, {e} ",
            path_to_string(file_name)
        ),
    }
}

pub fn load_from_str(content: &str) -> Result<Vec<Yaml>> {
    Ok(YamlLoader::load_from_str(content)?)
}

fn to_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_ref() {
        "yes" | "true" => Ok(true),
        "no" | "false" => Ok(false),
        _ => Err(anyhow!("Invalid boolean value: {}", value)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    static TEST_CONFIG: &str = include_str!("../../tests/files/test-config.yml");
    const YAML_SESSIONS: &str = r#"
sessions:
  - name: a
    uri: tcp://a:3306
  - name: b
"#;

    #[test]
    fn test_yaml_file() {
        assert!(load_from_str(TEST_CONFIG).is_ok());
        assert!(load_from_file(Path::new("weird-dir/mysql.yml")).is_err());
    }

    #[test]
    fn test_to_bool() {
        assert!(to_bool("yEs").unwrap());
        assert!(!to_bool("nO").unwrap());
        assert!(to_bool("truE").unwrap());
        assert!(!to_bool("faLse").unwrap());
        assert!(to_bool("").is_err());
        assert!(to_bool("1").is_err());
    }

    #[test]
    fn test_get_optional_bool() {
        let yaml = test_tools::create_yaml("a: yes\nb: false\nc: 12\n");
        assert_eq!(yaml.get_optional_bool("a"), Some(true));
        assert_eq!(yaml.get_optional_bool("b"), Some(false));
        assert_eq!(yaml.get_optional_bool("c"), None);
        assert_eq!(yaml.get_optional_bool("d"), None);
        assert!(yaml.get_bool("d", true));
    }

    #[test]
    fn test_yaml_vector() {
        let yaml = &load_from_str(YAML_SESSIONS).unwrap()[0];
        assert!(yaml.get_yaml_vector("bad").is_empty());
        assert_eq!(yaml.get_yaml_vector("sessions").len(), 2);
    }

    #[test]
    fn test_get_pathbuf() {
        let yaml = test_tools::create_yaml("a: 'c:\\dir'\nb: ''\n");
        assert_eq!(yaml.get_pathbuf("a"), Some(PathBuf::from("c:\\dir")));
        assert_eq!(yaml.get_pathbuf("b"), None);
        assert_eq!(yaml.get_pathbuf("c"), None);
    }
}
