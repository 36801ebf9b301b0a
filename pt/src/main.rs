//! PlanTrack - linear plan-execution tracker
//!
//! CLI entry point for building and walking agent plans.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use plantrack::cli::{Cli, Command, OutputFormat, PlanArgs};
use plantrack::config::Config;
use plantrack::{Advance, AgentGoal, AgentStep, Plan};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default (WARN)
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") | None => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", other);
            tracing::Level::WARN
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!(e))?;

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Run { plan, results, format } => cmd_run(&config, &plan, &results, format),
        Command::Describe { plan } => {
            println!("{}", plan.build());
            Ok(())
        }
    }
}

/// Snapshot of a finished run for JSON output
#[derive(Serialize)]
struct RunSummary<'a> {
    goal: &'a AgentGoal,
    steps: &'a [AgentStep],
    current_step_index: usize,
}

fn cmd_run(config: &Config, args: &PlanArgs, results: &[String], format: OutputFormat) -> Result<()> {
    debug!(steps = args.steps.len(), results = results.len(), %format, "cmd_run: called");
    let mut plan = args.build();
    let text = format == OutputFormat::Text;

    for position in 0..plan.len() {
        let result = results.get(position).or(config.default_result.as_ref()).map(String::as_str);
        let outcome = plan.advance(result).context("Failed to advance plan")?;
        if text {
            print_transition(position, result, &outcome);
        }
        if outcome.is_end_of_plan() {
            break;
        }
        if text && config.show_plan {
            println!("\n{}\n", plan);
        }
    }

    match format {
        OutputFormat::Text => println!("\n{}", plan),
        OutputFormat::Json => print_summary(&plan)?,
    }
    Ok(())
}

fn print_transition(position: usize, result: Option<&str>, outcome: &Advance<'_, AgentStep>) {
    let completed = format!("Step {}", position + 1);
    match result {
        Some(r) => println!("{} {} {}", "✓".green(), completed, r.dimmed()),
        None => println!("{} {}", "✓".green(), completed),
    }
    match outcome {
        Advance::Next(step) => println!("  {} Step {}: {}", "→".cyan(), position + 2, step.description),
        Advance::EndOfPlan => println!("{}", "End of plan".bold()),
    }
}

fn print_summary(plan: &Plan<AgentGoal, AgentStep>) -> Result<()> {
    let summary = RunSummary {
        goal: plan.goal(),
        steps: plan.steps(),
        current_step_index: plan.current_step_index(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
