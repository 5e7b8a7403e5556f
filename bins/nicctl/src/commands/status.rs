//! nicctl status command implementation.

use std::io;

use clap::Args;
use nicpanel::Controller;
use nicpanel::output::{OutputFormat, OutputOptions, Printable};

#[derive(Args)]
pub struct StatusCmd {}

impl StatusCmd {
    pub async fn run(
        self,
        ctl: &Controller,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        let rows = ctl.snapshot().await?;
        let mut stdout = io::stdout().lock();
        rows.print(&mut stdout, format, opts)?;
        Ok(())
    }
}
