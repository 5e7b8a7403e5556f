//! Interface discovery.
//!
//! Discovery joins two tool outputs: the interface listing (admin state,
//! link state, name) and the adapter metadata table (description, MAC).
//! The listing is authoritative; metadata is best effort.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::command::CommandRunner;
use super::error::Result;
use super::netsh;
use super::parse::{csv_record, interface_row};

/// Link state reported by the interface listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LinkStatus {
    Connected,
    Disconnected,
}

impl LinkStatus {
    /// Whether the link has carrier.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity and link-layer facts for one network adapter.
///
/// Rebuilt from scratch on every discovery. The name is the only identity;
/// a renamed adapter is a different interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    /// Connection name, unique on the host.
    pub name: String,
    /// Administratively enabled.
    pub enabled: bool,
    pub link_status: LinkStatus,
    /// Hardware description, empty when metadata had no row for this name.
    pub description: String,
    /// Physical address as printed by the host, empty when unknown.
    pub mac: String,
}

/// Adapter metadata keyed by connection name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterMeta {
    pub description: String,
    pub mac: String,
}

/// Parse the interface listing.
///
/// Lines that are not interface rows (headers, separators, banners, blank
/// lines) are skipped. Order follows the listing.
pub fn parse_interface_list(text: &str) -> Vec<Interface> {
    text.lines()
        .filter_map(|line| {
            let mut input = line;
            let (admin, link, name) = interface_row(&mut input).ok()?;
            Some(Interface {
                name: name.to_string(),
                enabled: admin == "Enabled",
                link_status: if link == "Connected" {
                    LinkStatus::Connected
                } else {
                    LinkStatus::Disconnected
                },
                description: String::new(),
                mac: String::new(),
            })
        })
        .collect()
}

/// Parse the adapter metadata CSV table.
///
/// Columns are located by header name. Rows without a connection name or
/// that do not parse are dropped; a table without the expected header
/// yields an empty map.
pub fn parse_adapter_metadata(text: &str) -> HashMap<String, AdapterMeta> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let Some(header) = lines.next().and_then(csv_record) else {
        return HashMap::new();
    };

    let column = |title: &str| header.iter().position(|h| h.trim() == title);
    let (Some(name_col), Some(desc_col), Some(mac_col)) = (
        column("Connection Name"),
        column("Network Adapter"),
        column("Physical Address"),
    ) else {
        return HashMap::new();
    };

    let mut meta = HashMap::new();
    for record in lines.filter_map(csv_record) {
        let field = |idx: usize| record.get(idx).map(|s| s.trim()).unwrap_or_default();
        let name = field(name_col);
        if name.is_empty() {
            continue;
        }
        meta.insert(
            name.to_string(),
            AdapterMeta {
                description: field(desc_col).to_string(),
                mac: field(mac_col).to_string(),
            },
        );
    }
    meta
}

/// Attach metadata to interfaces by exact name match.
pub fn join_metadata(interfaces: &mut [Interface], meta: &HashMap<String, AdapterMeta>) {
    for iface in interfaces {
        if let Some(m) = meta.get(&iface.name) {
            iface.description = m.description.clone();
            iface.mac = m.mac.clone();
        }
    }
}

/// Enumerate interfaces, enriched with description and MAC.
///
/// Fails only when the listing command itself fails. A failing metadata
/// command leaves description and MAC empty.
pub async fn list_interfaces<R: CommandRunner>(runner: &R) -> Result<Vec<Interface>> {
    let listing = runner
        .run(&netsh::show_interfaces())
        .await?
        .check("list interfaces")?;
    let mut interfaces = parse_interface_list(&listing);
    tracing::debug!("discovered {} interfaces", interfaces.len());

    let meta = match runner.run(&netsh::adapter_metadata()).await {
        Ok(output) if output.is_success() => parse_adapter_metadata(&output.stdout),
        Ok(output) => {
            tracing::warn!(
                "adapter metadata unavailable (exit {:?}): {}",
                output.code,
                output.stderr.trim()
            );
            HashMap::new()
        }
        Err(e) => {
            tracing::warn!("adapter metadata unavailable: {}", e);
            HashMap::new()
        }
    };

    join_metadata(&mut interfaces, &meta);
    Ok(interfaces)
}
