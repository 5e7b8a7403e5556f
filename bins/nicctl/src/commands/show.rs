//! nicctl show command implementation.

use std::io::{self, Write};

use clap::Args;
use nicpanel::Controller;
use nicpanel::output::{OutputFormat, OutputOptions, Printable};

#[derive(Args)]
pub struct ShowCmd {
    /// Interface name, as shown by `nicctl list`.
    name: String,
}

impl ShowCmd {
    pub async fn run(
        self,
        ctl: &Controller,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> anyhow::Result<()> {
        let config = ctl.read_runtime(&self.name).await?;
        let mut stdout = io::stdout().lock();

        match format {
            OutputFormat::Text => {
                writeln!(stdout, "{}:", self.name)?;
                config.print_text(&mut stdout, opts)?;
            }
            OutputFormat::Json => {
                let mut json = config.to_json();
                json["name"] = serde_json::json!(self.name);
                if opts.pretty {
                    serde_json::to_writer_pretty(&mut stdout, &json)?;
                } else {
                    serde_json::to_writer(&mut stdout, &json)?;
                }
                writeln!(stdout)?;
            }
        }

        Ok(())
    }
}
