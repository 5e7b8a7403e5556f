//! Printable implementations for apply results.

use std::io::Write;

use crate::netcfg::{ApplyReport, BatchResult};
use crate::output::{OutputOptions, Printable, paint};

impl Printable for ApplyReport {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> std::io::Result<()> {
        let verb = if self.dry_run { "would apply" } else { "applied" };
        writeln!(w, "{}: {} {} ({} steps)", self.name, verb, self.mode, self.changes_made())?;
        for step in &self.steps {
            writeln!(w, "    {}", step.command)?;
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        let steps: Vec<_> = self
            .steps
            .iter()
            .map(|step| {
                serde_json::json!({
                    "operation": step.operation,
                    "command": step.command.to_string(),
                })
            })
            .collect();

        serde_json::json!({
            "name": self.name,
            "mode": self.mode,
            "dry_run": self.dry_run,
            "steps": steps,
        })
    }
}

impl Printable for BatchResult {
    fn print_text<W: Write>(&self, w: &mut W, opts: &OutputOptions) -> std::io::Result<()> {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(report) => report.print_text(w, opts)?,
                Err(e) => writeln!(w, "{}: {} {}", outcome.name, paint("failed", "red", opts), e)?,
            }
            if let Some(current) = &outcome.current {
                writeln!(w, "  now:")?;
                current.print_text(w, opts)?;
            }
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        let outcomes: Vec<_> = self
            .outcomes
            .iter()
            .map(|outcome| {
                let mut obj = match &outcome.result {
                    Ok(report) => {
                        let mut obj = report.to_json();
                        obj["ok"] = serde_json::json!(true);
                        obj
                    }
                    Err(e) => serde_json::json!({
                        "name": outcome.name,
                        "ok": false,
                        "error": e.to_string(),
                    }),
                };
                if let Some(current) = &outcome.current {
                    obj["current"] = current.to_json();
                }
                obj
            })
            .collect();
        serde_json::Value::Array(outcomes)
    }
}
