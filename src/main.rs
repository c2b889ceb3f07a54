// Labyrinth turn engine.
// `play` answers one command per turn read from stdin, `simulate` plays a
// random board on its own. Logs go to stderr, set RUST_LOG to tune them.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use labyrinth_engine::ai::{Deadline, MoveAi, PushAi};
use labyrinth_engine::config::{Config, PushRules};
use labyrinth_engine::console_interface::{parse_turn, render_pieces_to_string};
use labyrinth_engine::core::random::random_game_state;
use labyrinth_engine::core::{step, Command, GameUpdate, TurnKind};
use labyrinth_engine::error::ParseError;
use labyrinth_engine::state_graph::{get_json_data, populate_until, StateGraph};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(version, about = "Sliding-tile labyrinth turn engine")]
struct Cli {
    /// JSON config file, missing fields keep their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    push_budget_ms: Option<u64>,

    #[arg(long, global = true, value_enum)]
    rules: Option<PushRules>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Answer turns read from stdin
    Play {
        #[arg(long)]
        first_turn_budget_ms: Option<u64>,
    },
    /// Play a random board alone, alternating push and move turns
    Simulate {
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long, default_value_t = 20)]
        turns: usize,
        #[arg(long, default_value_t = 6)]
        items: usize,
        /// Write every push evaluation here as JSON
        #[arg(long)]
        export: Option<PathBuf>,
        /// Expand the state graph of the starting board and write it here as JSON
        #[arg(long)]
        export_graph: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(budget) = cli.push_budget_ms {
        config.push_budget_ms = budget;
    }
    if let Some(rules) = cli.rules {
        config.rules = rules;
    }

    match cli.mode.unwrap_or(Mode::Play { first_turn_budget_ms: None }) {
        Mode::Play { first_turn_budget_ms } => {
            if let Some(budget) = first_turn_budget_ms {
                config.first_turn_budget_ms = budget;
            }
            run_play(&config)
        }
        Mode::Simulate {
            seed,
            turns,
            items,
            export,
            export_graph,
        } => run_simulate(&config, seed, turns, items, export, export_graph),
    }
}

fn run_play(config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    let mut state_graph = StateGraph::new();
    let mut turn_number = 0;

    loop {
        let turn = match parse_turn(&mut input) {
            Ok(turn) => turn,
            Err(ParseError::EndOfInput) => break,
            Err(err) => return Err(err).with_context(|| format!("reading turn {}", turn_number + 1)),
        };
        turn_number += 1;

        // the first turn allows far more time than the others
        if turn_number == 1 && config.first_turn_budget_ms > 0 {
            state_graph.upsert_state(turn.state.clone());
            populate_until(
                &mut state_graph,
                config.rules,
                Deadline::after(config.first_turn_budget()),
                config.state_graph_node_limit,
            );
        }

        let command = match turn.kind {
            TurnKind::Push => {
                let evaluation = PushAi::new(config)
                    .with_state_graph(&state_graph)
                    .compute_command(&turn.state);
                Command::Push(evaluation.command)
            }
            TurnKind::Move => MoveAi::new(config.max_move_count).compute_command(&turn.state),
        };

        writeln!(output, "{command}")?;
        output.flush()?;
    }

    info!("input closed after {turn_number} turns");
    Ok(())
}

fn run_simulate(
    config: &Config,
    seed: u64,
    turns: usize,
    items: usize,
    export: Option<PathBuf>,
    export_graph: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = random_game_state(&mut rng, items, 1);

    if let Some(path) = export_graph {
        let mut state_graph = StateGraph::new();
        state_graph.upsert_state(state.clone());
        populate_until(
            &mut state_graph,
            config.rules,
            Deadline::after(config.first_turn_budget()),
            config.state_graph_node_limit,
        );
        let json = get_json_data(&state_graph, &config.weights)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        info!("state graph exported to {}", path.display());
    }

    let mut evaluations = Vec::new();
    for turn in 0..turns {
        if state.my_quest_items().next().is_none() {
            info!("every quest item collected after {turn} turns");
            break;
        }
        debug!("turn {turn}\n{}", render_pieces_to_string(&state));

        let command = if turn % 2 == 0 {
            let evaluation = PushAi::new(config).compute_command(&state);
            state = state.run_command(evaluation.command);
            let command = Command::Push(evaluation.command);
            evaluations.push(evaluation);
            command
        } else {
            let command = MoveAi::new(config.max_move_count).compute_command(&state);
            if let Command::Move(directions) = &command {
                state = match step(&state, directions) {
                    GameUpdate::NextState(next) => next,
                    GameUpdate::Error(err) => bail!("planned move was illegal: {err}"),
                };
            }
            command
        };
        println!("{command}");
    }

    if let Some(path) = export {
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, &evaluations)?;
        info!("{} evaluations exported to {}", evaluations.len(), path.display());
    }
    Ok(())
}
