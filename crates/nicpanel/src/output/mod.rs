//! Output formatting (JSON/text) for interface state and apply results.

mod printable;

use std::io::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Use colored output.
    pub color: bool,
    /// Pretty print (for JSON).
    pub pretty: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// Trait for types that can be printed.
pub trait Printable {
    /// Print as plain text.
    fn print_text<W: Write>(&self, w: &mut W, opts: &OutputOptions) -> std::io::Result<()>;

    /// Convert to JSON value.
    fn to_json(&self) -> serde_json::Value;

    /// Print in the specified format.
    fn print<W: Write>(
        &self,
        w: &mut W,
        format: OutputFormat,
        opts: &OutputOptions,
    ) -> std::io::Result<()> {
        match format {
            OutputFormat::Text => self.print_text(w, opts),
            OutputFormat::Json => {
                let json = self.to_json();
                if opts.pretty {
                    serde_json::to_writer_pretty(&mut *w, &json)?;
                } else {
                    serde_json::to_writer(&mut *w, &json)?;
                }
                writeln!(w)?;
                Ok(())
            }
        }
    }
}

impl<T: Printable> Printable for [T] {
    fn print_text<W: Write>(&self, w: &mut W, opts: &OutputOptions) -> std::io::Result<()> {
        for item in self {
            item.print_text(w, opts)?;
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.iter().map(Printable::to_json).collect())
    }
}

const RESET: &str = "\x1b[0m";

/// Wrap `text` in the ANSI colour for `color` when colour is enabled.
///
/// Known colours are `green`, `amber` and `red`; anything else is
/// returned unchanged.
pub fn paint(text: &str, color: &str, opts: &OutputOptions) -> String {
    let code = match color {
        "green" => "\x1b[32m",
        "amber" => "\x1b[33m",
        "red" => "\x1b[31m",
        _ => return text.to_string(),
    };
    if opts.color {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}
