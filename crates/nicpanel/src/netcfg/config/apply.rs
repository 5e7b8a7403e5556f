//! Configuration application logic.
//!
//! Turns a staged change into the ordered tool commands that realise it
//! and runs them against a [`CommandRunner`].

use std::fmt;

use super::types::{Mode, StagedChange};
use crate::netcfg::command::{CommandRunner, HostCommand};
use crate::netcfg::error::{Error, Result};
use crate::netcfg::netsh;
use crate::netcfg::runtime::RuntimeRead;
use crate::netcfg::validation::{ValidationError, validate_name, validate_static};

/// Metric given to a static default gateway.
pub const DEFAULT_GATEWAY_METRIC: u32 = 1;

/// Options for applying configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions {
    /// Don't actually make changes, just compute what would be done.
    pub dry_run: bool,
    /// Metric of the default gateway route on static addresses.
    pub gateway_metric: u32,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            gateway_metric: DEFAULT_GATEWAY_METRIC,
        }
    }
}

impl ApplyOptions {
    /// Only plan, never run commands.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the metric used with a static gateway.
    pub fn gateway_metric(mut self, metric: u32) -> Self {
        self.gateway_metric = metric;
        self
    }
}

/// One planned tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyStep {
    /// What this step does, e.g. "set dns on Ethernet".
    pub operation: String,
    pub command: HostCommand,
}

impl ApplyStep {
    fn new(operation: String, command: HostCommand) -> Self {
        Self { operation, command }
    }
}

impl fmt::Display for ApplyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation, self.command)
    }
}

/// Result of applying one staged change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    /// Interface the change targeted.
    pub name: String,
    pub mode: Mode,
    /// Steps executed (or that would be executed in dry-run mode).
    pub steps: Vec<ApplyStep>,
    /// Whether the steps were only planned.
    pub dry_run: bool,
}

impl ApplyReport {
    /// Number of commands run (or that would be run in dry-run mode).
    pub fn changes_made(&self) -> usize {
        self.steps.len()
    }
}

/// Compute the ordered commands for `staged`.
///
/// The interface name is checked in both modes, since it is embedded in
/// every command. Beyond that, DHCP changes ignore every static field.
/// Static changes are validated first, so a plan is only ever returned
/// for a change that passes validation.
pub fn plan(
    staged: &StagedChange,
    options: &ApplyOptions,
) -> std::result::Result<Vec<ApplyStep>, ValidationError> {
    let name = staged.name();
    validate_name(name)?;

    if staged.mode == Mode::Dhcp {
        return Ok(vec![
            ApplyStep::new(
                format!("set dhcp address on {}", name),
                netsh::set_dhcp_address(name),
            ),
            ApplyStep::new(format!("set dhcp dns on {}", name), netsh::set_dhcp_dns(name)),
        ]);
    }

    validate_static(staged)?;

    // Validation guarantees both are present.
    let ip = staged.ip_addr().unwrap_or_default();
    let mask = staged.netmask().unwrap_or_default();

    let mut steps = vec![ApplyStep::new(
        format!("set address on {}", name),
        netsh::set_static_address(name, ip, mask, staged.gateway_addr(), options.gateway_metric),
    )];

    let dns = staged.dns_servers();
    match dns.split_first() {
        None => steps.push(ApplyStep::new(
            format!("set dhcp dns on {}", name),
            netsh::set_dhcp_dns(name),
        )),
        Some((primary, rest)) => {
            steps.push(ApplyStep::new(
                format!("set dns on {}", name),
                netsh::set_primary_dns(name, primary),
            ));
            for (i, server) in rest.iter().enumerate() {
                steps.push(ApplyStep::new(
                    format!("add dns {} on {}", server, name),
                    netsh::add_dns(name, server, i + 2),
                ));
            }
        }
    }

    Ok(steps)
}

/// Apply `staged` to the host.
///
/// Fails with [`Error::Validation`] before any command runs, or with
/// [`Error::Command`] at the first failing step; later steps are not
/// issued and earlier ones stay applied.
pub async fn apply<R: CommandRunner>(
    runner: &R,
    staged: &StagedChange,
    options: &ApplyOptions,
) -> Result<ApplyReport> {
    let steps = plan(staged, options).inspect_err(|e| {
        tracing::warn!("rejected change for {}: {}", staged.name(), e);
    })?;

    if options.dry_run {
        tracing::info!("dry run for {}: {} steps planned", staged.name(), steps.len());
    } else {
        for step in &steps {
            tracing::info!("{}", step.operation);
            runner
                .run(&step.command)
                .await?
                .check(step.operation.as_str())?;
        }
    }

    Ok(ApplyReport {
        name: staged.name().to_string(),
        mode: staged.mode,
        steps,
        dry_run: options.dry_run,
    })
}

/// Outcome of one interface within a batch.
#[derive(Debug)]
pub struct ApplyOutcome {
    /// Interface the change targeted.
    pub name: String,
    pub result: Result<ApplyReport>,
    /// Live configuration read back after the attempt, if one was made.
    pub current: Option<RuntimeRead>,
}

/// Result of applying several staged changes.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// One outcome per staged change, in input order.
    pub outcomes: Vec<ApplyOutcome>,
}

impl BatchResult {
    /// Check if every change was applied.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Reports of the changes that were applied.
    pub fn succeeded(&self) -> impl Iterator<Item = &ApplyReport> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Interfaces that failed, with their errors.
    pub fn failed(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.name.as_str(), e)))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Apply each staged change in order.
///
/// A failure only affects its own interface; the remaining changes still
/// run. The batch itself never fails.
pub async fn apply_batch<R: CommandRunner>(
    runner: &R,
    staged: &[StagedChange],
    options: &ApplyOptions,
) -> BatchResult {
    let mut outcomes = Vec::with_capacity(staged.len());
    for change in staged {
        let result = apply(runner, change, options).await;
        if let Err(e) = &result {
            tracing::warn!("apply failed for {}: {}", change.name(), e);
        }
        outcomes.push(ApplyOutcome {
            name: change.name().to_string(),
            result,
            current: None,
        });
    }
    BatchResult { outcomes }
}
