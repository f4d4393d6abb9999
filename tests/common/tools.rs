// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn run_bin() -> Command {
    Command::cargo_bin("mk-mysql").unwrap()
}

pub fn create_temp_process_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix(&format!("mk-mysql-{}", std::process::id()))
        .tempdir()
        .unwrap()
}

pub fn create_file_with_content(dir: &Path, file_name: &str, content: &str) {
    std::fs::write(dir.join(file_name), content).unwrap();
}

/// yaml single quoted strings keep backslashes of Windows paths
pub fn make_config(enabled: bool, path: Option<&Path>) -> String {
    let path_line = path
        .map(|p| format!("    path: '{}'\n", p.display()))
        .unwrap_or_default();
    format!(
        "---\nmysql:\n  custom_queries:\n    enabled: {}\n{}",
        if enabled { "yes" } else { "no" },
        path_line
    )
}
