//! nicctl apply command implementation.
//!
//! The file holds a JSON array of staged changes:
//!
//! ```json
//! [
//!   {"name": "Ethernet", "mode": "static", "ip": "10.0.0.2", "mask": "255.255.255.0",
//!    "gw": "10.0.0.1", "dns": ["10.0.0.1", "9.9.9.9"]},
//!   {"name": "Wi-Fi", "mode": "dhcp"}
//! ]
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use nicpanel::Controller;
use nicpanel::netcfg::StagedChange;
use nicpanel::output::{OutputFormat, OutputOptions, Printable};

use super::ApplyArgs;
use crate::privilege;

#[derive(Args)]
pub struct ApplyCmd {
    /// JSON file with the staged changes.
    file: PathBuf,

    #[command(flatten)]
    apply: ApplyArgs,
}

impl ApplyCmd {
    pub async fn run(
        self,
        ctl: Controller,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        let text = tokio::fs::read_to_string(&self.file)
            .await
            .with_context(|| format!("cannot read {}", self.file.display()))?;
        let changes: Vec<StagedChange> = serde_json::from_str(&text)
            .with_context(|| format!("invalid change file {}", self.file.display()))?;

        let ctl = ctl.with_apply_options(self.apply.options());
        if !self.apply.dry_run {
            privilege::warn_if_not_elevated(ctl.runner()).await;
        }

        let batch = ctl.apply_and_refresh(&changes).await;
        let mut stdout = io::stdout().lock();
        batch.print(&mut stdout, format, opts)?;

        let failed = batch.failed().count();
        if failed > 0 {
            anyhow::bail!("{} of {} changes failed", failed, batch.len());
        }
        Ok(())
    }
}
