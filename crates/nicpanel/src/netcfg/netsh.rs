//! Argument syntax of the host tools.
//!
//! Each function returns the [`HostCommand`] for one semantic operation.
//! Nothing here runs a command.

use std::time::Duration;

use super::command::HostCommand;

const NETSH: &str = "netsh";

fn name_arg(name: &str) -> String {
    format!("name=\"{}\"", name)
}

fn netsh_ip(verb: &str, object: &str, name: &str) -> HostCommand {
    HostCommand::new(NETSH)
        .args(["interface", "ip", verb, object])
        .arg(name_arg(name))
}

/// List interfaces with admin state, link state, type and name.
pub fn show_interfaces() -> HostCommand {
    HostCommand::new(NETSH).args(["interface", "show", "interface"])
}

/// Adapter metadata table (connection name, adapter, MAC) as CSV.
pub fn adapter_metadata() -> HostCommand {
    HostCommand::new("getmac").args(["/v", "/fo", "csv"])
}

/// Live IPv4 configuration of one interface.
pub fn show_config(name: &str) -> HostCommand {
    netsh_ip("show", "config", name)
}

/// Static address and mask, plus a default gateway with `metric` if given.
pub fn set_static_address(
    name: &str,
    ip: &str,
    mask: &str,
    gateway: Option<&str>,
    metric: u32,
) -> HostCommand {
    let cmd = netsh_ip("set", "address", name).args(["static", ip, mask]);
    match gateway {
        Some(gw) => cmd.arg(gw).arg(metric.to_string()),
        None => cmd,
    }
}

/// Lease the address from DHCP.
pub fn set_dhcp_address(name: &str) -> HostCommand {
    netsh_ip("set", "address", name).arg("dhcp")
}

/// Replace the DNS list with a single primary server.
pub fn set_primary_dns(name: &str, server: &str) -> HostCommand {
    netsh_ip("set", "dns", name).args(["static", server, "primary"])
}

/// Add a DNS server at `index` (1 is the primary).
pub fn add_dns(name: &str, server: &str, index: usize) -> HostCommand {
    netsh_ip("add", "dns", name)
        .arg(server)
        .arg(format!("index={}", index))
}

/// Take DNS servers from the DHCP lease.
pub fn set_dhcp_dns(name: &str) -> HostCommand {
    netsh_ip("set", "dns", name).arg("dhcp")
}

/// Query whether the process runs elevated.
///
/// `net session` only succeeds for administrators.
pub fn elevation_check() -> HostCommand {
    HostCommand::new("net").arg("session")
}

/// One ICMP echo to `host`, waiting at most `timeout`.
#[cfg(windows)]
pub fn ping(host: &str, timeout: Duration) -> HostCommand {
    HostCommand::new("ping")
        .args(["-n", "1", "-w"])
        .arg(timeout.as_millis().to_string())
        .arg(host)
}

/// One ICMP echo to `host`, waiting at most `timeout`.
///
/// POSIX ping takes whole seconds, so the timeout is rounded up.
#[cfg(not(windows))]
pub fn ping(host: &str, timeout: Duration) -> HostCommand {
    let secs = timeout.as_millis().div_ceil(1000).max(1);
    HostCommand::new("ping")
        .args(["-c", "1", "-W"])
        .arg(secs.to_string())
        .arg(host)
}
