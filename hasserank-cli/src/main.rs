mod config;
mod input;
mod items;
mod output;
mod store;

use clap::Parser;
use hasserank_core::{persist, EngineConfig, InteractionLoop, LoopOutcome, SessionState};
use std::path::PathBuf;

use crate::input::{StdinSource, TerminalPresenter};
use crate::store::SessionStore;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "hasserank", version, about = "Order items by pairwise judgments, skipping every question transitivity already answers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run an interactive ordering session
    Rank(RankArgs),
    /// Create a default config file at ~/.config/hasserank/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// Session name, keys the persisted state and output artifacts
    #[arg(long)]
    name: String,

    /// File with one item per line; the list stops at the first empty line
    #[arg(long, default_value = "item_list")]
    items: PathBuf,

    /// Resume from the persisted session instead of reading the item list
    #[arg(long)]
    load: bool,

    /// Discard any persisted session before starting
    #[arg(long)]
    reset: bool,

    /// Persist the session after every judgment and on quit
    #[arg(long)]
    save: bool,

    /// Max comparisons shown per prompt
    #[arg(long)]
    limit: Option<usize>,

    /// Fixed RNG seed for deterministic focus selection
    #[arg(long)]
    seed: Option<u64>,

    /// Write a Graphviz DOT rendering of the final graph to this path
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Output the final ranking as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/hasserank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default display limit and data directory.");
        }
    }
}

fn run_rank(args: RankArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let limit = args.limit.or(cfg.limit).unwrap_or(5);
    if limit == 0 {
        bail("--limit must be at least 1");
    }
    let data_dir = PathBuf::from(cfg.data_dir.unwrap_or_else(|| ".".to_string()));

    if args.load && args.reset {
        bail("--load and --reset contradict each other; pick one");
    }

    let store = SessionStore::new(&data_dir, &args.name);

    if args.reset {
        store
            .reset()
            .unwrap_or_else(|e| bail(format!("Failed to reset {}: {e}", store.path().display())));
    }

    let state = if args.load {
        let bytes = store.read().unwrap_or_else(|e| {
            bail(format!("Failed to load session from {}: {e}", store.path().display()))
        });
        persist::load(&bytes).unwrap_or_else(|e| bail(e))
    } else {
        let items = items::load_items(&args.items);
        SessionState::new(&items).unwrap_or_else(|e| bail(e))
    };

    if args.verbose {
        eprintln!(
            "Session \"{}\": {} items, {} pending, {} skipped, {} moves so far",
            args.name,
            state.graph.node_count(),
            state.pending.len(),
            state.skipped.len(),
            state.move_count,
        );
        if args.save {
            eprintln!("Persisting to {} after every judgment", store.path().display());
        }
    }

    let engine_config = EngineConfig { display_limit: limit, seed: args.seed };
    let looper = InteractionLoop::new(state, engine_config, StdinSource::new(), TerminalPresenter);

    let saving = args.save;
    let (state, outcome) = looper.run(|s| {
        if saving {
            store
                .write(&persist::save(s))
                .unwrap_or_else(|e| bail(format!("Failed to persist session: {e}")));
        }
    });

    if saving {
        // Final persist: covers quit and the post-completion reduced graph.
        store
            .write(&persist::save(&state))
            .unwrap_or_else(|e| bail(format!("Failed to persist session: {e}")));
    }

    match outcome {
        LoopOutcome::Quit => {
            println!(
                "\nStopped after {} moves; {} comparisons still pending.",
                state.move_count,
                state.pending.len(),
            );
            if saving {
                println!("Session saved to {} — resume with --load.", store.path().display());
            }
        }
        LoopOutcome::Completed => {
            if let Some(ref dot_path) = args.dot {
                std::fs::write(dot_path, output::to_dot(&state.graph, &args.name))
                    .unwrap_or_else(|e| bail(format!("Failed to write {}: {e}", dot_path.display())));
                if args.verbose {
                    eprintln!("Wrote graph to {}", dot_path.display());
                }
            }

            let ranking = if state.skipped.is_empty() {
                state.graph.linear_extension()
            } else {
                None
            };

            match ranking {
                Some(ranking) => {
                    if args.json {
                        output::print_json(&ranking, state.move_count, 0, true);
                    } else {
                        println!();
                        output::print_ranking(&ranking, state.move_count);
                    }
                }
                None => {
                    // Skipped comparisons leave a partial order; refusing to
                    // rank beats inventing an order nobody expressed.
                    if args.json {
                        output::print_json(&[], state.move_count, state.skipped.len(), false);
                    } else {
                        println!(
                            "\nPartial order only: {} comparisons were skipped, so no total ranking exists.",
                            state.skipped.len(),
                        );
                        println!("The recorded relation has {} edges across {} items.",
                            state.graph.edge_count(),
                            state.graph.node_count(),
                        );
                    }
                }
            }
        }
    }
}
