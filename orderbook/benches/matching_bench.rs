use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use orderbook::{MatchingEngine, Side};

// Deterministic mix of resting and crossing limit orders with periodic
// cancels, approximating steady-state exchange flow.
fn simulate_order_flow(engine: &mut MatchingEngine, order_count: usize) {
    let base_price = 50000;

    for i in 0..order_count {
        let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
        let offset = (i % 10) as i64 - 5;
        // Every 7th order crosses the touch, the rest rest near it
        let price = if i % 7 == 0 {
            base_price - offset
        } else {
            base_price + offset
        };
        let qty = ((i % 5) + 1) as u64;

        engine.submit_order(side, price, qty).unwrap();

        if i % 10 == 0 {
            let id = engine.last_order_id();
            engine.cancel_order(id);
        }
    }
}

fn bench_order_flow_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_flow");

    for order_count in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*order_count as u64));

        group.bench_with_input(
            format!("{}_orders", order_count),
            order_count,
            |b, &count| {
                b.iter(|| {
                    let mut engine = MatchingEngine::new();
                    simulate_order_flow(black_box(&mut engine), black_box(count));
                });
            },
        );
    }

    group.finish();
}

fn bench_limit_order_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("limit_orders");

    group.bench_function("place_resting_order", |b| {
        let mut engine = MatchingEngine::new();

        b.iter(|| {
            engine
                .submit_order(black_box(Side::Buy), black_box(50000), black_box(1))
                .unwrap();
        });
    });

    group.finish();
}

fn bench_deep_book_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_book");

    group.bench_function("sweep_across_levels", |b| {
        b.iter_batched(
            || {
                let mut engine = MatchingEngine::new();
                for i in 0..100 {
                    engine.submit_order(Side::Sell, 50000 + i, 100).unwrap();
                }
                engine
            },
            |mut engine| {
                // Aggressive buy that clears half the book
                engine
                    .submit_order(black_box(Side::Buy), black_box(50100), black_box(5000))
                    .unwrap();
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_cancel_heavy_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("cancel_heavy");

    group.bench_function("place_and_cancel", |b| {
        b.iter(|| {
            let mut engine = MatchingEngine::new();
            for i in 0..1000 {
                let offset = (i % 10) as i64 - 5;
                engine.submit_order(Side::Buy, 50000 + offset, 1).unwrap();

                if i % 3 == 0 {
                    engine.cancel_order(engine.last_order_id());
                }
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_order_flow_throughput,
    bench_limit_order_placement,
    bench_deep_book_sweep,
    bench_cancel_heavy_flow
);

criterion_main!(benches);
