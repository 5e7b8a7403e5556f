//! Live IP configuration of one interface.
//!
//! The source is the free-form report of `netsh interface ip show config`.
//! Every field is extracted on its own; a field that cannot be found stays
//! unset and the others are unaffected.

use std::fmt;

use serde::Serialize;

use super::command::CommandRunner;
use super::error::Result;
use super::netsh;
use super::parse::{
    after_label, find_caseless, ipv4_tokens, labeled_block, labeled_value, leading_ipv4, yes_no,
};
use super::validation::validate_name;

const DHCP_LABEL: &str = "DHCP enabled";
const IP_LABELS: [&str; 2] = ["IPv4 Address", "IP Address"];
const PREFIX_LABEL: &str = "Subnet Prefix";
const MASK_LABEL: &str = "Subnet Mask";
const GATEWAY_LABEL: &str = "Default Gateway";
const STATIC_DNS_LABEL: &str = "Statically Configured DNS Servers:";
const DHCP_DNS_LABEL: &str = "DNS servers configured through DHCP:";

/// Where the active DNS server list came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DnsSource {
    Static,
    Dhcp,
    /// No DNS section was found.
    #[default]
    Unknown,
}

impl fmt::Display for DnsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Static => "static",
            Self::Dhcp => "dhcp",
            Self::Unknown => "unknown",
        })
    }
}

/// The live IP configuration of one interface at read time.
///
/// `None` means the field was absent from the tool output, not that it is
/// empty on the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeConfig {
    /// DHCP enabled; `None` when the flag was not reported.
    pub dhcp: Option<bool>,
    pub ip: Option<String>,
    pub mask: Option<String>,
    pub gw: Option<String>,
    /// DNS servers in the order reported.
    pub dns: Vec<String>,
    pub dns_source: DnsSource,
}

impl RuntimeConfig {
    /// Whether the interface leases its address.
    ///
    /// An unknown flag is treated as static, matching how the host shows
    /// a manually configured adapter.
    pub fn is_dhcp(&self) -> bool {
        self.dhcp.unwrap_or(false)
    }
}

/// Outcome of reading one interface's live configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeRead {
    Config(RuntimeConfig),
    /// The read failed; holds the error message.
    Error(String),
}

impl RuntimeRead {
    pub fn config(&self) -> Option<&RuntimeConfig> {
        match self {
            Self::Config(config) => Some(config),
            Self::Error(_) => None,
        }
    }
}

impl From<Result<RuntimeConfig>> for RuntimeRead {
    fn from(result: Result<RuntimeConfig>) -> Self {
        match result {
            Ok(config) => Self::Config(config),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

/// Parse the configuration report of one interface.
pub fn parse_runtime_config(text: &str) -> RuntimeConfig {
    let (dns, dns_source) = parse_dns(text);
    RuntimeConfig {
        dhcp: labeled_value(text, DHCP_LABEL).and_then(yes_no),
        ip: parse_ip(text),
        mask: parse_mask(text),
        gw: labeled_value(text, GATEWAY_LABEL)
            .and_then(leading_ipv4)
            .map(str::to_string),
        dns,
        dns_source,
    }
}

fn parse_ip(text: &str) -> Option<String> {
    IP_LABELS
        .iter()
        .find_map(|label| labeled_value(text, label).and_then(leading_ipv4))
        .map(str::to_string)
}

/// `Subnet Prefix: 10.0.0.0/24 (mask 255.255.255.0)` first, then
/// `Subnet Mask: 255.255.255.0`.
fn parse_mask(text: &str) -> Option<String> {
    let from_prefix = after_label(text, PREFIX_LABEL).and_then(|line| {
        let at = find_caseless(line, "mask")? + "mask".len();
        let tail = line[at..].trim_start();
        let mask = leading_ipv4(tail)?;
        tail[mask.len()..].starts_with(')').then_some(mask)
    });

    from_prefix
        .or_else(|| labeled_value(text, MASK_LABEL).and_then(leading_ipv4))
        .map(str::to_string)
}

/// The static section wins when both sections are present.
fn parse_dns(text: &str) -> (Vec<String>, DnsSource) {
    let sections = [
        (STATIC_DNS_LABEL, DnsSource::Static),
        (DHCP_DNS_LABEL, DnsSource::Dhcp),
    ];

    for (label, source) in sections {
        if let Some(block) = labeled_block(text, label) {
            let servers = block
                .into_iter()
                .flat_map(ipv4_tokens)
                .map(str::to_string)
                .collect();
            return (servers, source);
        }
    }
    (Vec::new(), DnsSource::Unknown)
}

/// Read and parse the live configuration of interface `name`.
///
/// A name that cannot be quoted safely is rejected before anything runs.
pub async fn read_config<R: CommandRunner>(runner: &R, name: &str) -> Result<RuntimeConfig> {
    validate_name(name)?;
    let report = runner
        .run(&netsh::show_config(name))
        .await?
        .check(format!("read configuration of {}", name))?;
    let config = parse_runtime_config(&report);
    tracing::debug!("{}: {:?}", name, config);
    Ok(config)
}
