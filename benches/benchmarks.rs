criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        checking_single_triple,
        finding_first_set_on_board,
        finding_all_sets_on_board,
        finding_all_sets_in_deck,
}

fn checking_single_triple(c: &mut criterion::Criterion) {
    let features = Features::default();
    c.bench_function("check one triple against the matching rule", |b| {
        b.iter(|| features.is_set(&[0, 40, 80]))
    });
}

fn finding_first_set_on_board(c: &mut criterion::Criterion) {
    let features = Features::default();
    let board = board(12);
    c.bench_function("find the first set on a 12-card board", |b| {
        b.iter(|| features.has_set(&board))
    });
}

fn finding_all_sets_on_board(c: &mut criterion::Criterion) {
    let features = Features::default();
    let board = board(12);
    c.bench_function("find every set on a 12-card board", |b| {
        b.iter(|| features.find_sets(&board, usize::MAX))
    });
}

fn finding_all_sets_in_deck(c: &mut criterion::Criterion) {
    let features = Features::default();
    let deck = (0..features.deck()).collect::<Vec<Card>>();
    c.bench_function("find every set in the 81-card deck", |b| {
        b.iter(|| features.find_sets(&deck, usize::MAX))
    });
}

fn board(n: usize) -> Vec<Card> {
    let mut deck = (0..Features::default().deck()).collect::<Vec<Card>>();
    deck.shuffle(&mut rand::rng());
    deck.truncate(n);
    deck
}

use rand::seq::SliceRandom;
use setgame::Card;
use setgame::oracle::Features;
use setgame::oracle::Oracle;
