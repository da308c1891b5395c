//! arena-bot - offline tooling for the arena bot.
//!
//! - `arena-bot check --config bot.yaml` - validate a config and assemble both policies
//! - `arena-bot replay --config bot.yaml --snapshots ticks.json` - run recorded snapshots
//!   through a bot and print one JSON command per line

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use arena_core::{Brain, DebugSink, Team, WorldSnapshot};
use arena_tactics::{build_brain_with_debug, build_policy, BotConfig, PolicyKind};
use arena_tools::{TracingDebugSink, VecDebugSink};

#[derive(Parser)]
#[command(name = "arena-bot")]
#[command(about = "Validate bot configs and replay recorded snapshots", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a config and assemble every policy it can describe
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Feed a JSON array of snapshots through a bot
    Replay {
        #[arg(short, long)]
        config: PathBuf,

        #[arg(short, long)]
        snapshots: PathBuf,

        /// Side to play; defaults to the team of the first snapshot's vehicle
        #[arg(long, value_enum)]
        team: Option<TeamArg>,

        /// Dump recorded debug events as JSON to stderr when done
        #[arg(long)]
        trace: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TeamArg {
    Blue,
    Orange,
}

impl From<TeamArg> for Team {
    fn from(team: TeamArg) -> Self {
        match team {
            TeamArg::Blue => Team::Blue,
            TeamArg::Orange => Team::Orange,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check { config } => check(&config),
        Commands::Replay {
            config,
            snapshots,
            team,
            trace,
        } => replay(&config, &snapshots, team.map(Team::from), trace),
    }
}

fn load_config(path: &Path) -> Result<BotConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        BotConfig::from_json_str(&text)
    } else {
        BotConfig::from_yaml_str(&text)
    };
    config.with_context(|| format!("Invalid config in {}", path.display()))
}

fn check(path: &Path) -> Result<()> {
    let config = load_config(path)?;
    for policy in [PolicyKind::Utility, PolicyKind::BehaviorTree] {
        let config = BotConfig {
            policy,
            ..config.clone()
        };
        for team in [Team::Blue, Team::Orange] {
            build_policy(&config, team)
                .with_context(|| format!("Failed to assemble {policy:?} policy for {team:?}"))?;
        }
    }
    tracing::info!(config = %path.display(), policy = ?config.policy, "config ok");
    Ok(())
}

fn load_snapshots(path: &Path) -> Result<Vec<WorldSnapshot>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshots from {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse snapshots from {}", path.display()))
}

fn replay(config: &Path, snapshots: &Path, team: Option<Team>, trace: bool) -> Result<()> {
    let config = load_config(config)?;
    let snapshots = load_snapshots(snapshots)?;
    let Some(first) = snapshots.first() else {
        bail!("snapshot file is empty");
    };
    let team = team.unwrap_or_else(|| first.team());
    tracing::info!(ticks = snapshots.len(), ?team, policy = ?config.policy, "replaying");

    if trace {
        let mut brain = build_brain_with_debug(&config, team, VecDebugSink::default())?;
        run(&mut brain, &snapshots)?;
        let log = brain.debug.into_log();
        serde_json::to_writer_pretty(std::io::stderr(), &log)
            .context("Failed to write debug log")?;
    } else {
        let mut brain = build_brain_with_debug(&config, team, TracingDebugSink)?;
        run(&mut brain, &snapshots)?;
    }
    Ok(())
}

fn run<D: DebugSink>(brain: &mut Brain<D>, snapshots: &[WorldSnapshot]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for world in snapshots {
        let command = brain.tick(world);
        serde_json::to_writer(&mut out, &command).context("Failed to write command")?;
        writeln!(out)?;
    }
    out.flush()?;

    if brain.faults() > 0 {
        tracing::warn!(faults = brain.faults(), ticks = brain.ticks(), "replay finished with faults");
    }
    Ok(())
}
