// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use crate::config::options::PluginOptions;
use crate::constants::SQL_QUERY_EXTENSION;
use std::path::{Path, PathBuf};

/// Query definition found in the custom queries directory
#[derive(PartialEq, Debug, Clone)]
pub struct CustomQuery {
    name: String,
    path: PathBuf,
}

impl CustomQuery {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Returns queries available for the plugin, sorted by name.
/// Nothing is returned if the feature is disabled or directory is not usable.
pub fn find_queries(options: &PluginOptions) -> Vec<CustomQuery> {
    if !options.custom_queries_enabled() {
        log::debug!("Custom queries are disabled");
        return vec![];
    }
    if options.custom_queries_path().is_empty() {
        log::warn!("Custom queries are enabled, but path is empty");
        return vec![];
    }
    get_sql_dir(Path::new(options.custom_queries_path()))
        .map(|dir| scan_dir(&dir))
        .unwrap_or_default()
}

fn get_sql_dir(path: &Path) -> Option<PathBuf> {
    if path.is_dir() {
        Some(path.to_owned())
    } else {
        log::warn!("Custom queries dir {:?} is absent", path);
        None
    }
}

fn scan_dir(dir: &Path) -> Vec<CustomQuery> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("Can't read custom queries dir {:?}: {e}", dir);
            return vec![];
        }
    };
    let mut queries = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_query_file(p))
        .filter_map(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                .map(|name| CustomQuery {
                    name: name.to_string(),
                    path: p.clone(),
                })
        })
        .collect::<Vec<CustomQuery>>();
    queries.sort_by(|a, b| a.name.cmp(&b.name));
    log::info!("Found {} custom queries in {:?}", queries.len(), dir);
    queries
}

fn is_query_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SQL_QUERY_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::path_to_string;
    use tempfile::TempDir;

    fn make_queries_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.sql", "a.SQL", "readme.txt", "noext"] {
            std::fs::write(dir.path().join(name), "SELECT 1;").unwrap();
        }
        std::fs::create_dir(dir.path().join("c.sql")).unwrap();
        dir
    }

    #[test]
    fn test_find_queries() {
        let dir = make_queries_dir();
        let options = PluginOptions::new(path_to_string(dir.path()), true);
        let queries = find_queries(&options);
        assert_eq!(
            queries.iter().map(|q| q.name()).collect::<Vec<&str>>(),
            ["a", "b"]
        );
        assert_eq!(queries[1].path(), dir.path().join("b.sql"));
    }

    #[test]
    fn test_find_queries_disabled() {
        let dir = make_queries_dir();
        let options = PluginOptions::new(path_to_string(dir.path()), false);
        assert!(find_queries(&options).is_empty());
        assert!(find_queries(&PluginOptions::new("", true)).is_empty());
    }

    #[test]
    fn test_find_queries_absent_dir() {
        let options = PluginOptions::new("weird-dir/queries", true);
        assert!(find_queries(&options).is_empty());
    }
}
