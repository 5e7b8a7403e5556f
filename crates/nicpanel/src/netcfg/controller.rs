//! Single entry point for a presentation layer.
//!
//! The controller owns the command runner and the options, and delegates
//! every call to the component that implements it. It holds no state
//! about the host between calls.
//!
//! # Example
//!
//! ```ignore
//! use nicpanel::netcfg::{Controller, ProbeOptions};
//! use std::time::Duration;
//!
//! let ctl = Controller::system()
//!     .with_probe_options(ProbeOptions::default().timeout(Duration::from_millis(500)));
//!
//! for row in ctl.snapshot().await? {
//!     println!("{}: {}", row.interface.name, row.connectivity);
//! }
//! ```

use serde::Serialize;

use super::command::{CommandRunner, SystemRunner};
use super::config::{self, ApplyOptions, ApplyReport, BatchResult, StagedChange};
use super::error::Result;
use super::interface::{self, Interface, LinkStatus};
use super::probe::{self, Connectivity, ProbeOptions};
use super::runtime::{self, RuntimeConfig, RuntimeRead};

/// One row of the status view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceSnapshot {
    pub interface: Interface,
    pub runtime: RuntimeRead,
    pub connectivity: Connectivity,
}

/// Network configuration controller.
#[derive(Debug, Clone, Default)]
pub struct Controller<R = SystemRunner> {
    runner: R,
    probe: ProbeOptions,
    apply: ApplyOptions,
}

impl Controller<SystemRunner> {
    /// A controller that runs the real host tools.
    pub fn system() -> Self {
        Self::new(SystemRunner::new())
    }
}

impl<R: CommandRunner> Controller<R> {
    /// Create a controller on top of `runner` with default options.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            probe: ProbeOptions::default(),
            apply: ApplyOptions::default(),
        }
    }

    pub fn with_probe_options(mut self, options: ProbeOptions) -> Self {
        self.probe = options;
        self
    }

    pub fn with_apply_options(mut self, options: ApplyOptions) -> Self {
        self.apply = options;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn probe_options(&self) -> &ProbeOptions {
        &self.probe
    }

    pub fn apply_options(&self) -> &ApplyOptions {
        &self.apply
    }

    /// Enumerate the host's interfaces.
    pub async fn list_interfaces(&self) -> Result<Vec<Interface>> {
        interface::list_interfaces(&self.runner).await
    }

    /// Read the live configuration of interface `name`.
    pub async fn read_runtime(&self, name: &str) -> Result<RuntimeConfig> {
        runtime::read_config(&self.runner, name).await
    }

    /// Read the live configuration of `name`, keeping a failure as a value.
    pub async fn read_back(&self, name: &str) -> RuntimeRead {
        let read = RuntimeRead::from(self.read_runtime(name).await);
        if let RuntimeRead::Error(msg) = &read {
            tracing::warn!("could not read {}: {}", name, msg);
        }
        read
    }

    /// Classify connectivity for a link in state `link`.
    pub async fn classify(&self, link: LinkStatus) -> Connectivity {
        probe::classify(&self.runner, link, &self.probe).await
    }

    /// Apply one staged change with the controller's options.
    pub async fn apply_one(&self, staged: &StagedChange) -> Result<ApplyReport> {
        config::apply(&self.runner, staged, &self.apply).await
    }

    /// Apply several staged changes, isolating failures per interface.
    pub async fn apply_batch(&self, staged: &[StagedChange]) -> BatchResult {
        config::apply_batch(&self.runner, staged, &self.apply).await
    }

    /// Apply several staged changes, then read each touched interface back.
    ///
    /// Every interface whose change reached the host is read again, failed
    /// ones included, so the outcome shows what the host is left with. A
    /// dry run or a change rejected by validation touches nothing and is
    /// not read back.
    pub async fn apply_and_refresh(&self, staged: &[StagedChange]) -> BatchResult {
        let mut batch = self.apply_batch(staged).await;
        if self.apply.dry_run {
            return batch;
        }
        for outcome in &mut batch.outcomes {
            if matches!(&outcome.result, Err(e) if e.is_validation()) {
                continue;
            }
            outcome.current = Some(self.read_back(&outcome.name).await);
        }
        batch
    }

    /// Validate and plan a change without touching the host.
    pub async fn plan(&self, staged: &StagedChange) -> Result<ApplyReport> {
        config::apply(&self.runner, staged, &self.apply.dry_run(true)).await
    }

    /// Discover interfaces, then read and classify each one.
    ///
    /// Fails only when discovery fails. A failed read is recorded in that
    /// interface's row and the other rows are still produced.
    pub async fn snapshot(&self) -> Result<Vec<InterfaceSnapshot>> {
        let interfaces = self.list_interfaces().await?;
        let mut rows = Vec::with_capacity(interfaces.len());

        for iface in interfaces {
            let runtime = self.read_back(&iface.name).await;
            let connectivity = self.classify(iface.link_status).await;
            rows.push(InterfaceSnapshot {
                interface: iface,
                runtime,
                connectivity,
            });
        }

        Ok(rows)
    }
}
