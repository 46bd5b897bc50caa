//! Production planner entry point: CLI wiring, config loading, and plan output.

mod cli;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{error, info};

use powerplan::config::ServiceConfig;
use powerplan::io::export::{export_plan, write_plan};
use powerplan::logging;
use powerplan::payload::Payload;
use powerplan::plan::error::MANUAL_INTERVENTION_ADVICE;
use powerplan::plan::{DispatchError, PlanSummary, compute_plan};

use crate::cli::{Args, Command, PlanArgs};

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.logging);

    let outcome = match args.command {
        Command::Plan(plan_args) => run_plan(&plan_args, &config),
        #[cfg(feature = "api")]
        Command::Serve(serve_args) => run_serve(serve_args, &config),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            if e
                .downcast_ref::<DispatchError>()
                .is_some_and(DispatchError::is_infeasible)
            {
                eprintln!("{MANUAL_INTERVENTION_ADVICE}");
            }
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Loads and validates the configuration, falling back to defaults without a path.
fn load_config(path: Option<&Path>) -> Result<ServiceConfig> {
    let Some(path) = path else {
        return Ok(ServiceConfig::default());
    };

    let config = ServiceConfig::from_toml_file(path)?;
    let errors = config.validate();
    if !errors.is_empty() {
        let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("{}", lines.join("\n"));
    }
    Ok(config)
}

fn load_payload(args: &PlanArgs) -> Result<Payload> {
    let payload = if let Some(ref path) = args.payload {
        Payload::from_json_file(path)?
    } else if let Some(ref name) = args.preset {
        Payload::from_preset(name)?
    } else {
        Payload::baseline()
    };

    let errors = payload.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        bail!("payload has {} invalid field(s)", errors.len());
    }
    Ok(payload)
}

fn run_plan(args: &PlanArgs, config: &ServiceConfig) -> Result<()> {
    let payload = load_payload(args)?;
    let load = payload.load;
    let request = payload.into_request()?;
    let plan = compute_plan(&request)?;

    let format = args.format.unwrap_or(config.output.format);
    if let Some(ref path) = args.out {
        export_plan(&plan, format, path)
            .with_context(|| format!("failed to write plan to \"{}\"", path.display()))?;
        info!(path = %path.display(), "plan written");
    } else {
        write_plan(&plan, format, io::stdout().lock()).context("failed to print plan")?;
    }

    eprintln!("{}", PlanSummary::from_plan(&plan, load));
    Ok(())
}

#[cfg(feature = "api")]
fn run_serve(args: cli::ServeArgs, config: &ServiceConfig) -> Result<()> {
    use std::net::{IpAddr, SocketAddr};

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let ip: IpAddr = host
        .parse()
        .with_context(|| format!("invalid bind address \"{host}\""))?;

    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(powerplan::api::serve(SocketAddr::new(ip, port)))
        .context("API server failed")
}
