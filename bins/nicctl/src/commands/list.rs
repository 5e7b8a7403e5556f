//! nicctl list command implementation.

use std::io;

use clap::Args;
use nicpanel::Controller;
use nicpanel::output::{OutputFormat, OutputOptions, Printable};

#[derive(Args)]
pub struct ListCmd {
    /// Only show interfaces with a connected link.
    #[arg(long)]
    connected: bool,
}

impl ListCmd {
    pub async fn run(
        self,
        ctl: &Controller,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        let mut interfaces = ctl.list_interfaces().await?;
        if self.connected {
            interfaces.retain(|i| i.link_status.is_connected());
        }

        let mut stdout = io::stdout().lock();
        interfaces.print(&mut stdout, format, opts)?;
        Ok(())
    }
}
