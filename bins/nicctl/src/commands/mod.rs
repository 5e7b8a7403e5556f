//! nicctl command implementations.

pub mod apply;
pub mod list;
pub mod set;
pub mod show;
pub mod status;

use std::time::Duration;

use clap::Args;
use nicpanel::netcfg::{ApplyOptions, ProbeOptions};

/// Connectivity probe settings.
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Host probed first.
    #[arg(long, global = true, default_value = "1.1.1.1")]
    pub probe_host: String,

    /// Host probed when the first one does not answer.
    #[arg(long, global = true, default_value = "8.8.8.8")]
    pub fallback_host: String,

    /// Probe timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 250)]
    pub probe_timeout_ms: u64,
}

impl ProbeArgs {
    pub fn options(&self) -> ProbeOptions {
        ProbeOptions::default()
            .primary(&self.probe_host)
            .fallback(&self.fallback_host)
            .timeout(Duration::from_millis(self.probe_timeout_ms))
    }
}

/// Settings shared by every command that changes configuration.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Print the commands that would run without running them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Metric of the default gateway route.
    #[arg(long, global = true, default_value_t = 1)]
    pub metric: u32,
}

impl ApplyArgs {
    pub fn options(&self) -> ApplyOptions {
        ApplyOptions::default()
            .dry_run(self.dry_run)
            .gateway_metric(self.metric)
    }
}
