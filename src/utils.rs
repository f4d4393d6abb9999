// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use anyhow::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn read_file(file_name: &Path) -> Result<String> {
    let mut file = File::open(file_name)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Converts path to string without escaping of backslashes
pub fn path_to_string(path: &Path) -> String {
    path.as_os_str().to_str().unwrap_or("").to_string()
}
