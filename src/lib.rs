// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

pub mod args;
pub mod config;
pub mod constants;
pub mod custom;
pub mod emit;
pub mod platform;
pub mod setup;
pub mod types;
pub mod utils;
mod version;
