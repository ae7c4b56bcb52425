use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};

use headsup_holdem::core::{Card, Deck, evaluate};

fn sample(n: usize) -> Vec<Card> {
    let mut deck = Deck::new();
    deck.shuffle(&mut StdRng::seed_from_u64(420));
    (0..n).map(|_| deck.deal().unwrap()).collect()
}

fn eval_five(c: &mut Criterion) {
    let cards = sample(5);
    c.bench_function("evaluate 5 card hand", move |b| {
        b.iter(|| evaluate(&cards).unwrap())
    });
}

fn eval_best_of_seven(c: &mut Criterion) {
    let cards = sample(7);
    c.bench_function("evaluate best 5 of 7", move |b| {
        b.iter(|| evaluate(&cards).unwrap())
    });
}

criterion_group!(benches, eval_five, eval_best_of_seven);
criterion_main!(benches);
