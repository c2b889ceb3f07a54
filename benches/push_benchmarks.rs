use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use labyrinth_engine::config::PushRules;
use labyrinth_engine::core::random::random_game_state;
use labyrinth_engine::core::{BOARD, Direction, Grid, PushCommand};
use labyrinth_engine::state_graph::{populate_step, StateGraph};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

const SEEDS: &[u64] = &[1, 17, 2024];

pub fn bench_single_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_push");

    for &seed in SEEDS {
        let state = random_game_state(&mut StdRng::seed_from_u64(seed), 6, 2);
        group.bench_with_input(BenchmarkId::new("row_push", seed), &state, |b, state| {
            b.iter(|| black_box(state).run_command(PushCommand::new(3, Direction::Right)))
        });
        group.bench_with_input(BenchmarkId::new("column_push", seed), &state, |b, state| {
            b.iter(|| black_box(state).run_command(PushCommand::new(3, Direction::Down)))
        });
    }
    group.finish();
}

pub fn bench_expand_node(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_node");

    for &seed in SEEDS {
        let state = random_game_state(&mut StdRng::seed_from_u64(seed), 6, 2);
        group.bench_with_input(BenchmarkId::new("all_pushes", seed), &state, |b, state| {
            b.iter_with_setup(
                || {
                    let mut state_graph = StateGraph::new();
                    state_graph.upsert_state(state.clone());
                    state_graph
                },
                |mut state_graph| {
                    populate_step(black_box(&mut state_graph), PushRules::AllLines);
                    black_box(state_graph)
                },
            )
        });
    }
    group.finish();
}

pub fn bench_connectivity(c: &mut Criterion) {
    let mut group = c.benchmark_group("connectivity");

    for &seed in SEEDS {
        let state = random_game_state(&mut StdRng::seed_from_u64(seed), 6, 2);
        let tiles = *state.grid.tiles();
        group.bench_with_input(BenchmarkId::new("build_grid", seed), &tiles, |b, tiles| {
            b.iter(|| Grid::from_tiles(black_box(*tiles)))
        });
        group.bench_with_input(BenchmarkId::new("all_pairs", seed), &state.grid, |b, grid| {
            b.iter(|| {
                let mut connected = 0;
                for from in BOARD.positions() {
                    for to in BOARD.positions() {
                        if black_box(grid).are_positions_connected(from, to) {
                            connected += 1;
                        }
                    }
                }
                connected
            })
        });
    }
    group.finish();
}

criterion_group!(push_benches, bench_single_push, bench_expand_node, bench_connectivity);

criterion_main!(push_benches);
