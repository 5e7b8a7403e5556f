//! nicctl - inspect and change network interface IPv4 settings.

mod commands;
mod privilege;

use clap::{Parser, Subcommand};
use nicpanel::Controller;
use nicpanel::output::{OutputFormat, OutputOptions};

#[derive(Parser)]
#[command(name = "nicctl", version, about = "Network interface control panel")]
struct Cli {
    /// Output JSON.
    #[arg(short = 'j', long, global = true)]
    json: bool,

    /// Pretty print JSON.
    #[arg(short = 'p', long, global = true)]
    pretty: bool,

    /// Log every tool invocation.
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(flatten)]
    probe: commands::ProbeArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List network interfaces.
    #[command(visible_alias = "ls")]
    List(commands::list::ListCmd),

    /// Show the live IPv4 configuration of one interface.
    Show(commands::show::ShowCmd),

    /// Show every interface with its configuration and connectivity.
    #[command(visible_alias = "st")]
    Status(commands::status::StatusCmd),

    /// Change the configuration of one interface.
    Set(commands::set::SetCmd),

    /// Apply a JSON file of staged changes.
    Apply(commands::apply::ApplyCmd),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    // Determine output format
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let opts = OutputOptions {
        color: atty::is(atty::Stream::Stdout),
        pretty: cli.pretty,
    };

    let ctl = Controller::system().with_probe_options(cli.probe.options());

    let result = match cli.command {
        Command::List(cmd) => cmd.run(&ctl, format, &opts).await,
        Command::Show(cmd) => cmd.run(&ctl, format, &opts).await,
        Command::Status(cmd) => cmd.run(&ctl, format, &opts).await,
        Command::Set(cmd) => cmd.run(ctl, format, &opts).await,
        Command::Apply(cmd) => cmd.run(ctl, format, &opts).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
