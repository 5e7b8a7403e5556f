//! nicctl set command implementation.

use std::io;

use clap::{Args, Subcommand};
use nicpanel::Controller;
use nicpanel::netcfg::StagedChange;
use nicpanel::output::{OutputFormat, OutputOptions, Printable};

use super::ApplyArgs;
use crate::privilege;

#[derive(Args)]
pub struct SetCmd {
    /// Interface name, as shown by `nicctl list`.
    name: String,

    #[command(subcommand)]
    mode: SetMode,

    #[command(flatten)]
    apply: ApplyArgs,
}

#[derive(Subcommand)]
enum SetMode {
    /// Lease address and DNS servers from DHCP.
    Dhcp,

    /// Use a static address.
    Static {
        /// IPv4 address (e.g., 192.168.1.20).
        #[arg(long)]
        ip: String,

        /// Subnet mask (e.g., 255.255.255.0).
        #[arg(long)]
        mask: String,

        /// Default gateway, inside the address's subnet.
        #[arg(long)]
        gw: Option<String>,

        /// DNS server; repeat for more, first is primary.
        #[arg(long)]
        dns: Vec<String>,
    },
}

impl SetCmd {
    pub async fn run(
        self,
        ctl: Controller,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        let change = match self.mode {
            SetMode::Dhcp => StagedChange::dhcp(self.name),
            SetMode::Static { ip, mask, gw, dns } => {
                let change = StagedChange::static_ipv4(self.name, ip, mask).dns(dns);
                match gw {
                    Some(gw) => change.gateway(gw),
                    None => change,
                }
            }
        };

        let ctl = ctl.with_apply_options(self.apply.options());
        if !self.apply.dry_run {
            privilege::warn_if_not_elevated(ctl.runner()).await;
        }

        let batch = ctl.apply_and_refresh(std::slice::from_ref(&change)).await;
        let mut stdout = io::stdout().lock();
        batch.print(&mut stdout, format, opts)?;

        if let Some((_, e)) = batch.failed().next() {
            anyhow::bail!("{}", e);
        }
        Ok(())
    }
}
