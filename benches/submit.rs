use criterion::{black_box, criterion_group, criterion_main, Criterion};

use listing_board::listing::{FormAction, FormState, IdGenerator};

fn submit_thousand(c: &mut Criterion) {
    c.bench_function("submit 1000 listings", |b| {
        b.iter(|| {
            let mut state = FormState::with_id_generator(IdGenerator::starting_at(0));
            for i in 0..1000 {
                state = state
                    .apply(FormAction::UpdateTitle(format!("Listing {}", i)))
                    .apply(FormAction::UpdatePrice("100000".to_string()))
                    .apply(FormAction::Submit);
            }
            black_box(state.len())
        })
    });
}

fn blank_submit(c: &mut Criterion) {
    c.bench_function("submit blank title", |b| {
        let mut state = Some(FormState::new().update_title("   "));
        b.iter(|| {
            let next = state.take().map(FormState::submit);
            state = black_box(next);
        })
    });
}

criterion_group!(benches, submit_thousand, blank_submit);
criterion_main!(benches);
