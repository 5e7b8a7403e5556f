//! Staged configuration and its application.
//!
//! A [`StagedChange`] is what the operator wants one interface to look
//! like. Applying it is a two-step process:
//!
//! 1. **Plan**: validate the change and compute the ordered tool commands
//! 2. **Apply**: run the commands one at a time, stopping at the first failure
//!
//! # Example
//!
//! ```ignore
//! use nicpanel::netcfg::{ApplyOptions, StagedChange, SystemRunner};
//! use nicpanel::netcfg::config::{apply, plan};
//!
//! let change = StagedChange::static_ipv4("Ethernet", "10.0.0.2", "255.255.255.0")
//!     .gateway("10.0.0.1")
//!     .dns(["10.0.0.1"]);
//!
//! // Preview the commands without running them
//! for step in plan(&change, &ApplyOptions::default())? {
//!     println!("{}", step.command);
//! }
//!
//! let report = apply(&SystemRunner::new(), &change, &ApplyOptions::default()).await?;
//! println!("{}: {} commands run", report.name, report.changes_made());
//! ```
//!
//! There is no rollback. When a step fails, the steps before it stay
//! applied on the host.

mod apply;
mod types;

pub use apply::{ApplyOptions, ApplyOutcome, ApplyReport, ApplyStep, BatchResult, apply, apply_batch, plan};
pub use types::{Mode, StagedChange};
