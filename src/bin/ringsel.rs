use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ringsel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decide the ring for a scenario JSON and print the decision.
    Decide(DecideArgs),
}

#[derive(Parser, Debug)]
struct DecideArgs {
    /// Input scenario JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pin every decision to one ring (overrides the scenario and environment).
    #[arg(long, value_enum)]
    force_engine: Option<OverrideChoice>,

    /// Treat every ring switch as expensive.
    #[arg(long)]
    no_ring_switch: bool,

    /// Pretty-print the decision JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OverrideChoice {
    Auto,
    Blit,
    Render,
}

impl From<OverrideChoice> for ringsel::EngineOverride {
    fn from(choice: OverrideChoice) -> Self {
        match choice {
            OverrideChoice::Auto => Self::Auto,
            OverrideChoice::Blit => Self::ForceBlit,
            OverrideChoice::Render => Self::ForceRender,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Decide(args) => cmd_decide(args),
    }
}

fn cmd_decide(args: DecideArgs) -> anyhow::Result<()> {
    let mut scenario = ringsel::Scenario::from_path(&args.in_path)
        .with_context(|| format!("load scenario '{}'", args.in_path.display()))?;

    // Scenario file, then process environment, then flags.
    scenario.config = scenario
        .config
        .with_env_lookup(|key| std::env::var(key).ok())
        .with_context(|| "apply environment overrides")?;
    if let Some(choice) = args.force_engine {
        scenario.config.engine_override = choice.into();
    }
    if args.no_ring_switch {
        scenario.config.ring_switch = false;
    }

    let decision = scenario.decide()?;
    let out = if args.pretty {
        serde_json::to_string_pretty(&decision)?
    } else {
        serde_json::to_string(&decision)?
    };
    println!("{out}");
    Ok(())
}
