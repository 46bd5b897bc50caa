use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use powerplan::io::export::OutputFormat;

#[derive(Parser)]
#[command(author, version, about = "Merit-order production planner", propagate_version = true)]
pub struct Args {
    /// TOML service configuration.
    #[arg(long, env = "POWERPLAN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute a production plan for one payload and print it.
    Plan(PlanArgs),

    /// Serve the production plan API.
    #[cfg(feature = "api")]
    Serve(ServeArgs),
}

#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Payload JSON file.
    #[arg(long, conflicts_with = "preset")]
    pub payload: Option<PathBuf>,

    /// Built-in payload (baseline, high_load, calm). Defaults to baseline.
    #[arg(long)]
    pub preset: Option<String>,

    /// Output format, overrides `[output] format` from the configuration.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the plan to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[cfg(feature = "api")]
#[derive(ClapArgs)]
pub struct ServeArgs {
    /// Bind address, overrides `[server] host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port, overrides `[server] port`.
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}
