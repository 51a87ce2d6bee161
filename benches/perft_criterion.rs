use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tulip_chess::game_state::game_state::GameState;
use tulip_chess::move_generation::move_generator::PseudoLegalMoveGenerator;
use tulip_chess::move_generation::perft::perft;

/// Pseudo-legal leaf counts from the start position; identical to the legal
/// counts this shallow because no king can be exposed yet.
const STARTPOS_NODES: &[u64] = &[20, 400, 8902];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    let game = GameState::new_game();
    for (depth_idx, expected_nodes) in STARTPOS_NODES.iter().enumerate() {
        let depth = (depth_idx + 1) as u8;

        // Correctness guard before benchmarking.
        let warmup = perft(&PseudoLegalMoveGenerator, &game, depth);
        assert_eq!(
            warmup.nodes as u64, *expected_nodes,
            "node mismatch in warmup for depth {depth}"
        );

        group.throughput(Throughput::Elements(*expected_nodes));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}")),
            expected_nodes,
            |b, expected| {
                b.iter(|| {
                    let count = perft(&PseudoLegalMoveGenerator, black_box(&game), black_box(depth));
                    assert_eq!(count.nodes as u64, *expected);
                    black_box(count.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
