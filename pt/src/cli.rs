//! CLI command definitions and subcommands

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::agent::{AgentGoal, AgentStep};
use crate::plan::Plan;

/// PlanTrack - linear plan-execution tracker
#[derive(Parser, Debug)]
#[command(name = "pt", author, version, about = "Walk an agent plan one step at a time", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Advance through every step of a plan, completing each one
    Run {
        #[command(flatten)]
        plan: PlanArgs,

        /// Result for each step, in order (repeatable)
        #[arg(short, long = "result", value_name = "TEXT")]
        results: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a plan without running it
    Describe {
        #[command(flatten)]
        plan: PlanArgs,
    },
}

/// Goal and steps that make up a plan
#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    /// What the plan is trying to achieve
    #[arg(short, long)]
    pub goal: String,

    /// Step description, in order (repeatable)
    #[arg(short, long = "step", value_name = "TEXT", required = true)]
    pub steps: Vec<String>,
}

impl PlanArgs {
    /// Build a plan positioned on its first step
    pub fn build(&self) -> Plan<AgentGoal, AgentStep> {
        debug!(goal = %self.goal, steps = self.steps.len(), "PlanArgs::build: called");
        let steps = self.steps.iter().map(AgentStep::new).collect();
        Plan::new(AgentGoal::new(self.goal.clone()), steps)
    }
}

/// Output format for run results
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "text" | "plain" => {
                debug!("OutputFormat::from_str: matched Text");
                Ok(Self::Text)
            }
            "json" => {
                debug!("OutputFormat::from_str: matched Json");
                Ok(Self::Json)
            }
            _ => {
                debug!(%s, "OutputFormat::from_str: unknown format");
                Err(format!("Unknown format: {}. Use: text or json", s))
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from([
            "pt", "run", "--goal", "ship", "--step", "build", "--step", "tag", "--result", "ok",
        ]);
        match cli.command {
            Command::Run { plan, results, format } => {
                assert_eq!(plan.goal, "ship");
                assert_eq!(plan.steps, vec!["build", "tag"]);
                assert_eq!(results, vec!["ok"]);
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_describe_with_globals() {
        let cli = Cli::parse_from(["pt", "describe", "-g", "ship", "-s", "build", "-l", "debug"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Command::Describe { .. }));
    }

    #[test]
    fn test_cli_requires_a_step() {
        assert!(Cli::try_parse_from(["pt", "run", "--goal", "ship"]).is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_plan_args_build() {
        let args = PlanArgs {
            goal: "ship".to_string(),
            steps: vec!["build".to_string(), "tag".to_string()],
        };
        let plan = args.build();
        assert_eq!(plan.goal().description, "ship");
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.current_step().unwrap().description, "build");
    }
}
