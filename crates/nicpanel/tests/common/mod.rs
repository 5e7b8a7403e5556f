//! Common test utilities for integration tests.
//!
//! Provides `FakeHost`, a scripted [`CommandRunner`] that records every
//! command it is asked to run, plus captured tool output fixtures.

#![allow(dead_code)]

use std::io;
use std::sync::Mutex;

use nicpanel::netcfg::{CommandOutput, CommandRunner, Error, HostCommand, Result};

/// How a scripted command behaves.
#[derive(Debug, Clone)]
pub enum Reply {
    /// The command ran and produced this output.
    Output(CommandOutput),
    /// The program could not be started.
    SpawnError,
    /// The command never finishes.
    Hang,
}

#[derive(Debug, Clone)]
enum Matcher {
    /// Rendered command line starts with this text.
    Prefix(String),
    /// A ping whose target host is this.
    Ping(String),
}

impl Matcher {
    fn matches(&self, cmd: &HostCommand) -> bool {
        match self {
            Self::Prefix(prefix) => cmd.to_string().starts_with(prefix.as_str()),
            Self::Ping(host) => {
                cmd.program() == "ping"
                    && cmd.arguments().last().map(String::as_str) == Some(host.as_str())
            }
        }
    }
}

/// A scripted host.
///
/// Rules are checked in the order they were added; the first match
/// answers. Unmatched commands succeed with empty output.
///
/// # Example
///
/// ```ignore
/// let host = FakeHost::new()
///     .on("netsh interface show interface", CommandOutput::success(LISTING))
///     .ping("1.1.1.1", false);
/// ```
#[derive(Debug, Default)]
pub struct FakeHost {
    rules: Vec<(Matcher, Reply)>,
    calls: Mutex<Vec<HostCommand>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer commands whose rendered line starts with `prefix`.
    pub fn on(mut self, prefix: &str, output: CommandOutput) -> Self {
        self.rules
            .push((Matcher::Prefix(prefix.to_string()), Reply::Output(output)));
        self
    }

    /// Answer commands starting with `prefix` with an arbitrary reply.
    pub fn reply(mut self, prefix: &str, reply: Reply) -> Self {
        self.rules.push((Matcher::Prefix(prefix.to_string()), reply));
        self
    }

    /// Make pings to `host` succeed or fail.
    pub fn ping(mut self, host: &str, answers: bool) -> Self {
        let output = if answers {
            CommandOutput::success("Reply from host")
        } else {
            CommandOutput::failure(1, "Request timed out.")
        };
        self.rules
            .push((Matcher::Ping(host.to_string()), Reply::Output(output)));
        self
    }

    /// Make pings to `host` hang forever.
    pub fn ping_hangs(mut self, host: &str) -> Self {
        self.rules.push((Matcher::Ping(host.to_string()), Reply::Hang));
        self
    }

    /// Every command run so far, rendered, in order.
    pub fn calls(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    /// Rendered commands run so far whose program is `program`.
    pub fn calls_to(&self, program: &str) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|cmd| cmd.program() == program)
            .map(ToString::to_string)
            .collect()
    }

    /// Rendered commands run so far that change configuration.
    pub fn writes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.contains(" set ") || c.contains(" add "))
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<HostCommand>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn answer(&self, cmd: &HostCommand) -> Reply {
        self.rules
            .iter()
            .find(|(matcher, _)| matcher.matches(cmd))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| Reply::Output(CommandOutput::success("")))
    }
}

impl CommandRunner for FakeHost {
    async fn run(&self, cmd: &HostCommand) -> Result<CommandOutput> {
        self.lock().push(cmd.clone());
        match self.answer(cmd) {
            Reply::Output(output) => Ok(output),
            Reply::SpawnError => Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: program not found", cmd.program()),
            ))),
            Reply::Hang => std::future::pending().await,
        }
    }
}

// ============================================================================
// Captured tool output
// ============================================================================

pub const LISTING: &str = "\r\n\
Admin State    State          Type             Interface Name\r\n\
-------------------------------------------------------------------------\r\n\
Enabled        Connected      Dedicated        Ethernet\r\n\
Enabled        Disconnected   Dedicated        Wi-Fi\r\n\
\r\n";

pub const METADATA: &str = "\"Connection Name\",\"Network Adapter\",\"Physical Address\",\"Transport Name\"\r\n\
\"Ethernet\",\"Intel(R) Ethernet Connection I219-V\",\"AA-BB-CC-DD-EE-FF\",\"\\Device\\Tcpip_{1}\"\r\n\
\"Wi-Fi\",\"Intel(R) Wi-Fi 6 AX201 160MHz\",\"11-22-33-44-55-66\",\"Media disconnected\"\r\n";

pub const ETHERNET_CONFIG: &str = "\r\n\
Configuration for interface \"Ethernet\"\r\n\
    DHCP enabled:                         Yes\r\n\
    IP Address:                           192.168.1.23\r\n\
    Subnet Prefix:                        192.168.1.0/24 (mask 255.255.255.0)\r\n\
    Default Gateway:                      192.168.1.1\r\n\
    Gateway Metric:                       0\r\n\
    InterfaceMetric:                      25\r\n\
    DNS servers configured through DHCP:  192.168.1.1\r\n\
    Register with which suffix:           Primary only\r\n\
    WINS servers configured through DHCP: None\r\n\
\r\n";

pub const WIFI_CONFIG: &str = "\r\n\
Configuration for interface \"Wi-Fi\"\r\n\
    DHCP enabled:                         No\r\n\
    IP Address:                           10.20.0.7\r\n\
    Subnet Prefix:                        10.20.0.0/16 (mask 255.255.0.0)\r\n\
    InterfaceMetric:                      35\r\n\
    Statically Configured DNS Servers:    1.1.1.1\r\n\
                                          9.9.9.9\r\n\
    Register with which suffix:           Primary only\r\n\
\r\n";

/// A host with both interfaces listed, metadata available, and every
/// configuration readable.
pub fn standard_host() -> FakeHost {
    FakeHost::new()
        .on("netsh interface show interface", CommandOutput::success(LISTING))
        .on("getmac", CommandOutput::success(METADATA))
        .on(
            "netsh interface ip show config name=\"Ethernet\"",
            CommandOutput::success(ETHERNET_CONFIG),
        )
        .on(
            "netsh interface ip show config name=\"Wi-Fi\"",
            CommandOutput::success(WIFI_CONFIG),
        )
}
