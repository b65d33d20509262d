mod config;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use quadra_core::{Coefficients, CounterAction, CounterReducer, CounterState};
use quadra_store::Store;

#[derive(Parser)]
#[command(
    name = "quadra",
    version,
    about = "Quadratic root classifier with a dispatch-based counter store"
)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the roots of ax² + bx + c = 0
    #[command(allow_negative_numbers = true)]
    Solve {
        /// Quadratic coefficient (must be non-zero)
        a: f64,

        /// Linear coefficient
        b: f64,

        /// Constant term
        c: f64,

        /// Emit JSON instead of the classic sentence
        #[arg(long)]
        json: bool,
    },

    /// Dispatch a sequence of actions through a counter store
    #[command(allow_negative_numbers = true)]
    Counter {
        /// Actions to dispatch, in order
        #[arg(value_enum)]
        actions: Vec<CliAction>,

        /// Initial counter value (overrides config)
        #[arg(short, long)]
        initial: Option<i64>,

        /// Emit one JSON line per transition
        #[arg(long)]
        json: bool,
    },

    /// Show current configuration
    Config,
}

#[derive(Clone, ValueEnum)]
enum CliAction {
    /// Add 1 to the counter
    Inc,
    /// Subtract 1 from the counter
    Dec,
}

impl From<CliAction> for CounterAction {
    fn from(val: CliAction) -> Self {
        match val {
            CliAction::Inc => CounterAction::Increment,
            CliAction::Dec => CounterAction::Decrement,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Solve { a, b, c, json } => cmd_solve(a, b, c, json || cfg.output.json),
        Commands::Counter {
            actions,
            initial,
            json,
        } => cmd_counter(
            actions,
            initial.unwrap_or(cfg.counter.initial),
            json || cfg.output.json,
        ),
        Commands::Config => cmd_config(cli.config.as_deref(), &cfg),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_solve(a: f64, b: f64, c: f64, json: bool) -> Result<()> {
    let coeffs = Coefficients::new(a, b, c)?;
    let roots = coeffs.roots();

    if json {
        let doc = serde_json::json!({
            "discriminant": coeffs.discriminant(),
            "roots": roots,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{roots}");
    }
    Ok(())
}

fn cmd_counter(actions: Vec<CliAction>, initial: i64, json: bool) -> Result<()> {
    let mut store = Store::new(CounterReducer, CounterState::new(initial));

    store.subscribe(move |state: &CounterState| println!("{}", state_line(state, json)));

    let dispatched = actions.len();
    for action in actions {
        store.dispatch(action.into());
    }

    if json {
        // Each transition was already printed by the subscriber; only a
        // run with no actions still owes the caller the current state.
        if dispatched == 0 {
            println!("{}", state_line(store.state(), true));
        }
    } else {
        println!("final: {}", store.state().value);
    }
    Ok(())
}

fn cmd_config(override_path: Option<&Path>, cfg: &config::Config) -> Result<()> {
    println!("Config: {}", config::show_config_path(override_path));
    println!();
    println!("[output]");
    println!("  json = {}", cfg.output.json);
    println!();
    println!("[counter]");
    println!("  initial = {}", cfg.counter.initial);
    Ok(())
}

/// One printed line per observed state. `CounterState` is a plain
/// struct; its serialization cannot fail.
fn state_line(state: &CounterState, json: bool) -> String {
    if json {
        serde_json::to_string(state).unwrap_or_default()
    } else {
        format!("value: {}", state.value)
    }
}
