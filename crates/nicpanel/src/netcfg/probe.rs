//! Reachability probes and link classification.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use super::command::CommandRunner;
use super::interface::LinkStatus;
use super::netsh;

/// Extra time granted to the probe tool beyond its own timeout.
const PROBE_GUARD: Duration = Duration::from_secs(2);

/// Where and how long to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    /// Probed first.
    pub primary: String,
    /// Probed only when the primary does not answer.
    pub fallback: String,
    /// Wait per probe.
    pub timeout: Duration,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            primary: "1.1.1.1".to_string(),
            fallback: "8.8.8.8".to_string(),
            timeout: Duration::from_millis(250),
        }
    }
}

impl ProbeOptions {
    pub fn primary(mut self, host: impl Into<String>) -> Self {
        self.primary = host.into();
        self
    }

    pub fn fallback(mut self, host: impl Into<String>) -> Self {
        self.fallback = host.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Three-level connectivity of one interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Link connected and an external host answers.
    Up,
    /// Link connected but neither probe host answers.
    Degraded,
    /// Link not connected.
    Down,
}

impl Connectivity {
    /// Indicator colour for a presentation layer.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Up => "green",
            Self::Degraded => "amber",
            Self::Down => "red",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Degraded => "degraded",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Send one echo to `host`. Any failure, including a hung tool, is "no answer".
pub async fn probe<R: CommandRunner>(runner: &R, host: &str, timeout: Duration) -> bool {
    let cmd = netsh::ping(host, timeout);
    match tokio::time::timeout(timeout + PROBE_GUARD, runner.run(&cmd)).await {
        Ok(Ok(output)) => {
            tracing::debug!("probe {}: exit {:?}", host, output.code);
            output.is_success()
        }
        Ok(Err(e)) => {
            tracing::warn!("probe {} could not run: {}", host, e);
            false
        }
        Err(_) => {
            tracing::warn!("probe {} did not finish in time", host);
            false
        }
    }
}

/// Classify connectivity from link status plus at most two probes.
///
/// A disconnected link is [`Connectivity::Down`] without probing. The
/// fallback host is only tried when the primary does not answer.
pub async fn classify<R: CommandRunner>(
    runner: &R,
    link: LinkStatus,
    options: &ProbeOptions,
) -> Connectivity {
    if !link.is_connected() {
        return Connectivity::Down;
    }
    if probe(runner, &options.primary, options.timeout).await
        || probe(runner, &options.fallback, options.timeout).await
    {
        Connectivity::Up
    } else {
        Connectivity::Degraded
    }
}
