//! Network-state model driven through the host configuration tool.
//!
//! The layers, leaf first:
//!
//! - [`command`]: what a tool invocation is and how it is run
//! - [`netsh`]: the tool's argument syntax for every operation
//! - [`interface`]: interface discovery
//! - [`runtime`]: the live IP configuration of one interface
//! - [`validation`]: static-configuration rules
//! - [`config`]: staged changes and the apply engine
//! - [`probe`]: reachability probes and link classification
//! - [`controller`]: the single entry point for a presentation layer
//!
//! # Quick Start
//!
//! ```ignore
//! use nicpanel::netcfg::Controller;
//!
//! let ctl = Controller::system();
//! let snapshot = ctl.snapshot().await?;
//! for row in &snapshot {
//!     println!("{} {:?}", row.interface.name, row.connectivity);
//! }
//! ```

pub mod command;
pub mod config;
pub mod controller;
mod error;
pub mod interface;
pub mod netsh;
mod parse;
pub mod probe;
pub mod runtime;
pub mod validation;

pub use command::{CommandOutput, CommandRunner, HostCommand, SystemRunner};
pub use config::{ApplyOptions, ApplyOutcome, ApplyReport, ApplyStep, BatchResult, Mode, StagedChange};
pub use controller::{Controller, InterfaceSnapshot};
pub use error::{Error, Result};
pub use interface::{Interface, LinkStatus};
pub use probe::{Connectivity, ProbeOptions};
pub use runtime::{DnsSource, RuntimeConfig, RuntimeRead};
pub use validation::ValidationError;
