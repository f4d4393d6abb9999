// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use anyhow::anyhow;
use derive_more::{Display, From, Into};

/// Seconds
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy, From, Into, Display)]
pub struct Timeout(pub u32);

impl Timeout {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Seconds
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy, From, Into, Display)]
pub struct KeepAlive(pub u32);

impl KeepAlive {
    pub fn value(&self) -> u32 {
        self.0
    }
}

#[derive(PartialEq, Debug, Display, Clone, Default, Into, Hash, Eq)]
pub struct SessionName(String);

impl From<&str> for SessionName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SessionName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(PartialEq, Debug, Clone, Copy, Display)]
pub enum TlsConnect {
    #[display("required")]
    Required,
    #[display("verify_ca")]
    VerifyCa,
    #[display("verify_full")]
    VerifyFull,
}

impl TryFrom<&str> for TlsConnect {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "required" => Ok(TlsConnect::Required),
            "verify_ca" => Ok(TlsConnect::VerifyCa),
            "verify_full" => Ok(TlsConnect::VerifyFull),
            _ => Err(anyhow!("unsupported tls_connect value '{value}'")),
        }
    }
}
