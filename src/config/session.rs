// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use super::defines::{defaults, keys};
use super::yaml::{Get, Yaml};
use crate::types::{SessionName, TlsConnect};
use anyhow::{anyhow, bail, Context, Result};
use std::path::{Path, PathBuf};

/// Connection parameters of the plugin, only stored and validated
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Session {
    name: SessionName,
    uri: Option<String>,
    user: Option<String>,
    password: Option<String>,
    tls: Tls,
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct Tls {
    connect: Option<TlsConnect>,
    ca_file: Option<PathBuf>,
    cert_file: Option<PathBuf>,
    key_file: Option<PathBuf>,
}

impl Session {
    /// named entry of `sessions` list
    pub fn from_yaml(yaml: &Yaml) -> Result<Self> {
        let name = yaml
            .get_string(keys::NAME)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| anyhow!("session without {}", keys::NAME))?;
        Self::parse(yaml, name.into())
    }

    /// the `default` entry, may be absent
    pub fn default_from_yaml(yaml: &Yaml) -> Result<Option<Self>> {
        let default = yaml.get(keys::DEFAULT);
        if default.is_badvalue() {
            return Ok(None);
        }
        Self::parse(default, defaults::SESSION_NAME.into()).map(Some)
    }

    fn parse(yaml: &Yaml, name: SessionName) -> Result<Self> {
        let tls = Tls::from_yaml(yaml).with_context(|| format!("session '{name}'"))?;
        Ok(Self {
            uri: yaml.get_string(keys::URI),
            user: yaml.get_string(keys::USER),
            password: yaml.get_string(keys::PASSWORD),
            name,
            tls,
        })
    }

    pub fn name(&self) -> &SessionName {
        &self.name
    }
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
    pub fn tls(&self) -> &Tls {
        &self.tls
    }
}

impl Tls {
    fn from_yaml(yaml: &Yaml) -> Result<Self> {
        let connect = yaml
            .get_string(keys::TLS_CONNECT)
            .map(|s| TlsConnect::try_from(s.as_str()))
            .transpose()?;
        let tls = Self {
            connect,
            ca_file: yaml.get_pathbuf(keys::TLS_CA_FILE),
            cert_file: yaml.get_pathbuf(keys::TLS_CERT_FILE),
            key_file: yaml.get_pathbuf(keys::TLS_KEY_FILE),
        };
        tls.validate()?;
        Ok(tls)
    }

    fn validate(&self) -> Result<()> {
        match self.connect {
            Some(TlsConnect::VerifyCa) | Some(TlsConnect::VerifyFull) if self.ca_file.is_none() => {
                bail!(
                    "{} is required for tls_connect {}",
                    keys::TLS_CA_FILE,
                    self.connect.map(|c| c.to_string()).unwrap_or_default()
                )
            }
            None if self.ca_file.is_some() || self.cert_file.is_some() => {
                bail!("TLS files are set but {} is absent", keys::TLS_CONNECT)
            }
            _ => {}
        }
        if self.cert_file.is_some() != self.key_file.is_some() {
            bail!(
                "{} and {} must be set together",
                keys::TLS_CERT_FILE,
                keys::TLS_KEY_FILE
            );
        }
        Ok(())
    }

    pub fn connect(&self) -> Option<TlsConnect> {
        self.connect
    }
    pub fn ca_file(&self) -> Option<&Path> {
        self.ca_file.as_deref()
    }
    pub fn cert_file(&self) -> Option<&Path> {
        self.cert_file.as_deref()
    }
    pub fn key_file(&self) -> Option<&Path> {
        self.key_file.as_deref()
    }
}
