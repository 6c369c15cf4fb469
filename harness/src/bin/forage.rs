//! `forage`: play one maze episode and print a JSON summary.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::error;

use forage_harness::agents::{AgentV1, GreedyAgent, RandomAgent, SearchAgent};
use forage_harness::config::{load_config, ConfigError, ForageConfig};
use forage_harness::runner::{run_episode, RunError};
use forage_harness::worlds::maze::{builtin_layout, GameScore, MazeWorld};
use forage_kernel::maze::layout::LayoutError;
use forage_kernel::proof::canon::CanonError;
use forage_search::policy::{LosePolicyV1, StrategyV1};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AgentKind {
    Bfs,
    Dfs,
    BestFirst,
    Greedy,
    Random,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LoseArg {
    Expand,
    SkipState,
    PruneBranch,
}

impl From<LoseArg> for LosePolicyV1 {
    fn from(arg: LoseArg) -> Self {
        match arg {
            LoseArg::Expand => LosePolicyV1::Expand,
            LoseArg::SkipState => LosePolicyV1::SkipState,
            LoseArg::PruneBranch => LosePolicyV1::PruneBranch,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "forage")]
#[command(about = "Play a maze episode with a bounded per-turn search agent")]
struct Args {
    /// Built-in layout (corridor, tiny, small, open) or a layout file.
    #[arg(long, default_value = "tiny")]
    layout: String,

    #[arg(long, value_enum, default_value_t = AgentKind::Bfs)]
    agent: AgentKind,

    /// JSON config file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Counted successors per branch.
    #[arg(long, conflicts_with = "unbounded")]
    budget: Option<u64>,

    /// Disable the expansion budget.
    #[arg(long)]
    unbounded: bool,

    #[arg(long, value_enum)]
    lose_policy: Option<LoseArg>,

    #[arg(long)]
    max_turns: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot read layout {}: {source}", path.display())]
    LayoutIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("bad layout: {0}")]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Run(#[from] RunError),
    #[error(transparent)]
    Canon(#[from] CanonError),
}

fn resolve_config(args: &Args) -> Result<ForageConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ForageConfig::default(),
    };
    match args.agent {
        AgentKind::Bfs => config.search.strategy = StrategyV1::BreadthFirst,
        AgentKind::Dfs => config.search.strategy = StrategyV1::DepthFirst,
        AgentKind::BestFirst => config.search.strategy = StrategyV1::BestFirst,
        AgentKind::Greedy | AgentKind::Random => {}
    }
    if args.unbounded {
        config.search.max_expansions = None;
    } else if let Some(budget) = args.budget {
        config.search.max_expansions = Some(budget);
    }
    if let Some(lose) = args.lose_policy {
        config.search.lose_policy = lose.into();
    }
    if let Some(turns) = args.max_turns {
        config.max_turns = turns;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

fn load_world(name: &str) -> Result<MazeWorld, CliError> {
    let text = match builtin_layout(name) {
        Some(text) => text.to_string(),
        None => {
            let path = PathBuf::from(name);
            fs::read_to_string(&path).map_err(|source| CliError::LayoutIo { path, source })?
        }
    };
    Ok(MazeWorld::from_text(&text)?)
}

fn run(args: &Args) -> Result<serde_json::Value, CliError> {
    let config = resolve_config(args)?;
    let world = load_world(&args.layout)?;

    let mut agent: Box<dyn AgentV1<MazeWorld>> = match args.agent {
        AgentKind::Bfs | AgentKind::Dfs | AgentKind::BestFirst => {
            Box::new(SearchAgent::new(config.search.clone(), GameScore))
        }
        AgentKind::Greedy => Box::new(GreedyAgent::new(GameScore, config.seed)),
        AgentKind::Random => Box::new(RandomAgent::new(config.seed)),
    };

    let episode = run_episode(&world, agent.as_mut(), world.initial_state(), config.max_turns)?;

    let mut summary = episode.to_json_value(|d| d.as_str().to_string());
    summary["agent"] = agent.name().into();
    summary["layout_digest"] = world.layout().digest().to_string().into();
    summary["policy_digest"] = config.policy_digest()?.to_string().into();
    Ok(summary)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(summary) => {
            println!("{summary:#}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
