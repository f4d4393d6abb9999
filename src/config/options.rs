// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use super::defines::{defaults, keys, limits};
use super::session::Session;
use super::yaml::{Get, Yaml};
use crate::constants::PLUGIN_NAME;
use crate::platform::CustomQueriesLocator;
use crate::types::{KeepAlive, SessionName, Timeout};
use anyhow::{anyhow, bail, Result};
use std::collections::HashSet;
use std::ops::RangeInclusive;

#[derive(PartialEq, Debug, Clone)]
pub struct PluginOptions {
    timeout: Timeout,
    keep_alive: KeepAlive,
    call_timeout: Timeout,
    custom_queries_enabled: bool,
    custom_queries_path: String,
    default_session: Option<Session>,
    sessions: Vec<Session>,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            timeout: defaults::TIMEOUT.into(),
            keep_alive: defaults::KEEP_ALIVE.into(),
            call_timeout: defaults::TIMEOUT.into(),
            custom_queries_enabled: defaults::CUSTOM_QUERIES_ENABLED,
            custom_queries_path: String::new(),
            default_session: None,
            sessions: vec![],
        }
    }
}

impl PluginOptions {
    pub fn new(custom_queries_path: impl Into<String>, custom_queries_enabled: bool) -> Self {
        Self {
            custom_queries_path: custom_queries_path.into(),
            custom_queries_enabled,
            ..Default::default()
        }
    }

    pub fn from_yaml(yaml: &Yaml) -> Result<Option<Self>> {
        let root = yaml.get(keys::MYSQL);
        if root.is_badvalue() {
            return Ok(None);
        }

        let options = root.get(keys::OPTIONS);
        let timeout = get_ranged(options, keys::TIMEOUT, limits::TIMEOUT, defaults::TIMEOUT)?;
        let keep_alive = get_ranged(
            options,
            keys::KEEP_ALIVE,
            limits::KEEP_ALIVE,
            defaults::KEEP_ALIVE,
        )?;
        let call_timeout = get_ranged(options, keys::CALL_TIMEOUT, limits::TIMEOUT, timeout)?;

        let custom_queries = root.get(keys::CUSTOM_QUERIES);
        let custom_queries_enabled =
            custom_queries.get_bool(keys::ENABLED, defaults::CUSTOM_QUERIES_ENABLED);
        let custom_queries_path = custom_queries.get_string(keys::PATH).unwrap_or_default();

        let default_session = Session::default_from_yaml(root)?;
        let sessions = root
            .get_yaml_vector(keys::SESSIONS)
            .iter()
            .map(Session::from_yaml)
            .collect::<Result<Vec<Session>>>()?;
        ensure_unique_names(&sessions)?;

        Ok(Some(Self {
            timeout: timeout.into(),
            keep_alive: keep_alive.into(),
            call_timeout: call_timeout.into(),
            custom_queries_enabled,
            custom_queries_path,
            default_session,
            sessions,
        }))
    }

    /// Fills empty custom queries path with the platform default if the feature is enabled.
    /// Explicit path is never touched.
    pub fn normalize_custom_queries_path(&mut self, locator: &CustomQueriesLocator) {
        if !self.custom_queries_path.is_empty() {
            return;
        }
        if !self.custom_queries_enabled {
            return;
        }
        self.custom_queries_path = locator.default_path(PLUGIN_NAME);
        log::info!(
            "Custom queries path is not set, using default {}",
            self.custom_queries_path
        );
    }

    pub fn timeout(&self) -> Timeout {
        self.timeout
    }
    pub fn keep_alive(&self) -> KeepAlive {
        self.keep_alive
    }
    pub fn call_timeout(&self) -> Timeout {
        self.call_timeout
    }
    pub fn custom_queries_enabled(&self) -> bool {
        self.custom_queries_enabled
    }
    pub fn custom_queries_path(&self) -> &str {
        &self.custom_queries_path
    }
    pub fn default_session(&self) -> Option<&Session> {
        self.default_session.as_ref()
    }
    pub fn sessions(&self) -> &Vec<Session> {
        &self.sessions
    }
}

fn get_ranged(yaml: &Yaml, key: &str, range: RangeInclusive<u32>, default: u32) -> Result<u32> {
    match yaml.get_int::<i64>(key) {
        None => Ok(default),
        Some(value) => u32::try_from(value)
            .ok()
            .filter(|v| range.contains(v))
            .ok_or_else(|| {
                anyhow!(
                    "{key} value {value} is out of range {}..{}",
                    range.start(),
                    range.end()
                )
            }),
    }
}

fn ensure_unique_names(sessions: &[Session]) -> Result<()> {
    let mut names = HashSet::new();
    for s in sessions {
        if !names.insert(s.name()) {
            bail!("session '{}' is defined more than once", s.name());
        }
    }
    Ok(())
}
