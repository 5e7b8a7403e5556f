//! Staged configuration types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How an interface obtains its address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "dhcp", alias = "DHCP", alias = "Dhcp")]
    Dhcp,
    #[serde(rename = "static", alias = "Static", alias = "STATIC")]
    Static,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dhcp => "DHCP",
            Self::Static => "Static",
        })
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dhcp" => Ok(Self::Dhcp),
            "static" => Ok(Self::Static),
            _ => Err(format!("unknown mode: {} (expected dhcp or static)", s)),
        }
    }
}

/// An operator's proposed configuration for one interface, not yet applied.
///
/// `ip`, `mask`, `gw` and `dns` only mean something in [`Mode::Static`].
/// In [`Mode::Dhcp`] they are ignored entirely, whatever they contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedChange {
    /// Target interface name.
    pub name: String,
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gw: Option<String>,
    /// DNS servers in priority order; empty means no static DNS.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns: Vec<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl StagedChange {
    /// Switch `name` to DHCP for both address and DNS.
    pub fn dhcp(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: Mode::Dhcp,
            ip: None,
            mask: None,
            gw: None,
            dns: Vec::new(),
        }
    }

    /// Give `name` a static address and mask.
    pub fn static_ipv4(name: impl Into<String>, ip: impl Into<String>, mask: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: Mode::Static,
            ip: Some(ip.into()),
            mask: Some(mask.into()),
            gw: None,
            dns: Vec::new(),
        }
    }

    /// Set the default gateway.
    pub fn gateway(mut self, gw: impl Into<String>) -> Self {
        self.gw = Some(gw.into());
        self
    }

    /// Set the DNS servers, first one primary.
    pub fn dns<I, S>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dns = servers.into_iter().map(Into::into).collect();
        self
    }

    /// Trimmed interface name.
    pub fn name(&self) -> &str {
        self.name.trim()
    }

    /// Whether this change leases everything from DHCP.
    pub fn is_dhcp(&self) -> bool {
        self.mode == Mode::Dhcp
    }

    /// Trimmed address, `None` when absent or blank.
    pub fn ip_addr(&self) -> Option<&str> {
        non_blank(self.ip.as_ref())
    }

    /// Trimmed netmask, `None` when absent or blank.
    pub fn netmask(&self) -> Option<&str> {
        non_blank(self.mask.as_ref())
    }

    /// Trimmed gateway; a blank gateway is no gateway.
    pub fn gateway_addr(&self) -> Option<&str> {
        non_blank(self.gw.as_ref())
    }

    /// Trimmed DNS servers with blank entries dropped.
    pub fn dns_servers(&self) -> Vec<&str> {
        self.dns
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
