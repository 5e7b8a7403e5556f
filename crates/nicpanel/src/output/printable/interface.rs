//! Printable implementations for interfaces and their live state.

use std::io::Write;

use crate::netcfg::{Interface, InterfaceSnapshot, RuntimeConfig, RuntimeRead};
use crate::output::{OutputOptions, Printable, paint};

fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or("unknown")
}

impl Printable for Interface {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> std::io::Result<()> {
        write!(
            w,
            "{}: {} {}",
            self.name,
            if self.enabled { "enabled" } else { "disabled" },
            self.link_status
        )?;
        if !self.mac.is_empty() {
            write!(w, " mac {}", self.mac)?;
        }
        if !self.description.is_empty() {
            write!(w, " ({})", self.description)?;
        }
        writeln!(w)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "enabled": self.enabled,
            "link_status": self.link_status.as_str(),
            "description": self.description,
            "mac": self.mac,
        })
    }
}

impl Printable for RuntimeConfig {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> std::io::Result<()> {
        let mode = match self.dhcp {
            Some(true) => "dhcp",
            Some(false) => "static",
            None => "unknown",
        };
        writeln!(w, "    mode {}", mode)?;
        writeln!(
            w,
            "    inet {} mask {}",
            or_unknown(self.ip.as_deref()),
            or_unknown(self.mask.as_deref())
        )?;
        if let Some(ref gw) = self.gw {
            writeln!(w, "    gateway {}", gw)?;
        }
        if self.dns.is_empty() {
            writeln!(w, "    dns none ({})", self.dns_source)?;
        } else {
            writeln!(w, "    dns {} ({})", self.dns.join(" "), self.dns_source)?;
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "dhcp": self.dhcp,
            "ip": self.ip,
            "mask": self.mask,
            "gw": self.gw,
            "dns": self.dns,
            "dns_source": self.dns_source.to_string(),
        })
    }
}

impl Printable for RuntimeRead {
    fn print_text<W: Write>(&self, w: &mut W, opts: &OutputOptions) -> std::io::Result<()> {
        match self {
            Self::Config(config) => config.print_text(w, opts),
            Self::Error(msg) => writeln!(w, "    error {}", msg),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Config(config) => config.to_json(),
            Self::Error(msg) => serde_json::json!({ "error": msg }),
        }
    }
}

impl Printable for InterfaceSnapshot {
    fn print_text<W: Write>(&self, w: &mut W, opts: &OutputOptions) -> std::io::Result<()> {
        let state = paint(
            self.connectivity.as_str(),
            self.connectivity.color(),
            opts,
        );
        write!(w, "[{}] ", state)?;
        self.interface.print_text(w, opts)?;
        self.runtime.print_text(w, opts)
    }

    fn to_json(&self) -> serde_json::Value {
        let mut obj = self.interface.to_json();
        obj["connectivity"] = serde_json::json!(self.connectivity.as_str());
        obj["color"] = serde_json::json!(self.connectivity.color());
        match &self.runtime {
            RuntimeRead::Config(config) => obj["runtime"] = config.to_json(),
            RuntimeRead::Error(msg) => obj["error"] = serde_json::json!(msg),
        }
        obj
    }
}
