use criterion::{black_box, criterion_group, criterion_main, Criterion};

use matching_engine::games::concentration::ConcentrationBuilder;
use matching_engine::games::set::SetGameBuilder;
use matching_engine::IdSequence;

fn bench_find_set(c: &mut Criterion) {
    let game = SetGameBuilder::new().initial_deal(12).seed(42).build();

    c.bench_function("find_set_12_open", |b| b.iter(|| black_box(game.find_set())));
}

fn bench_concentration_solve(c: &mut Criterion) {
    c.bench_function("concentration_solve_20_pairs", |b| {
        b.iter(|| {
            let mut ids = IdSequence::new();
            let mut game = ConcentrationBuilder::new()
                .pairs(20)
                .seed(7)
                .build(&mut ids)
                .expect("positive pair count");
            for first in 0..game.len() {
                if game.cards()[first].is_matched {
                    continue;
                }
                let key = game.cards()[first].pair_key;
                let second = (first + 1..game.len())
                    .find(|&i| game.cards()[i].pair_key == key)
                    .expect("every card has a partner");
                game.choose_card(first);
                game.choose_card(second);
            }
            black_box(game.flip_count())
        })
    });
}

criterion_group!(benches, bench_find_set, bench_concentration_solve);
criterion_main!(benches);
