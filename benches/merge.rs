use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use weir::cache::MergeMode;
use weir::command::{Command, Id};
use weir::engine::Engine;
use weir::timeline::Timeline;

/// A long-lived session's home timeline: a thousand cached slots with a few
/// unfilled holes left by reconnects.
fn seeded_engine() -> Engine {
    let mut engine = Engine::default();
    for chunk in 0..10 {
        let newest = 10_000 - chunk * 1_000;
        let page: Vec<Id> = (0..100)
            .map(|n| Id::new((newest - n * 2).to_string()))
            .collect();
        engine.apply(Command::ExpandSuccess {
            timeline: Timeline::home(),
            mode: MergeMode::Reconcile,
            items: page,
            partial: chunk % 3 == 0,
            has_more: true,
        });
    }
    engine
}

fn reconcile_page(c: &mut Criterion) {
    let page: Vec<Id> = (0..20).map(|n| Id::new((5_501 - n * 2).to_string())).collect();

    c.bench_function("reconcile a 20-item page into a 1k-slot timeline", |b| {
        b.iter_batched(
            seeded_engine,
            |mut engine| {
                engine.apply(black_box(Command::ExpandSuccess {
                    timeline: Timeline::home(),
                    mode: MergeMode::Reconcile,
                    items: page.clone(),
                    partial: false,
                    has_more: true,
                }));
                engine
            },
            BatchSize::SmallInput,
        )
    });
}

fn route_live_update(c: &mut Criterion) {
    c.bench_function("route one live item into a 1k-slot timeline", |b| {
        b.iter_batched(
            seeded_engine,
            |mut engine| {
                engine.apply(black_box(Command::Update {
                    timeline: Timeline::home(),
                    id: Id::new("10001"),
                    filtered: false,
                }));
                engine
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, reconcile_page, route_live_update);
criterion_main!(benches);
