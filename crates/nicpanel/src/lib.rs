//! Inspect and reconfigure the IPv4 settings of a host's network interfaces.
//!
//! All changes go through the host's own configuration tool (`netsh`): the
//! crate builds the command lines, runs them through a [`CommandRunner`],
//! and parses the textual output back into typed snapshots.
//!
//! # Features
//!
//! - `output` - JSON/text output formatting
//! - `full` - All features enabled
//!
//! # Example
//!
//! ```ignore
//! use nicpanel::netcfg::{Controller, StagedChange};
//!
//! #[tokio::main]
//! async fn main() -> nicpanel::Result<()> {
//!     let ctl = Controller::system();
//!
//!     for iface in ctl.list_interfaces().await? {
//!         let rt = ctl.read_runtime(&iface.name).await?;
//!         println!("{}: {:?}", iface.name, rt.ip);
//!     }
//!
//!     let change = StagedChange::static_ipv4("Ethernet", "192.168.1.20", "255.255.255.0")
//!         .gateway("192.168.1.1")
//!         .dns(["192.168.1.1", "9.9.9.9"]);
//!     ctl.apply_one(&change).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Partial application
//!
//! An apply is a sequence of independent tool invocations. When one fails
//! the earlier ones stay applied; read the interface again to learn what
//! the host ended up with.

// Core modules (always available)
pub mod netcfg;
pub mod util;

// Feature-gated modules
#[cfg(feature = "output")]
pub mod output;

// Re-export common types at crate root for convenience
pub use netcfg::{CommandRunner, Controller, Error, Result};
