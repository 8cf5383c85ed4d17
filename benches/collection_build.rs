//! Collection build benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use card_collections::cards::{Card, CardCollection, Note, NoteKind};
use card_collections::collection::CollectionConfig;
use card_collections::version::SemanticVersion;

/// `cards` card numbers with `versions` versions each; every third version
/// carries a pending note and the newest version names the previous one
/// as playtesting.
fn card_list(cards: u32, versions: u32) -> Vec<Card> {
    let mut list = Vec::with_capacity((cards * versions) as usize);
    for version in 0..versions {
        for number in 0..cards {
            let mut card = Card::new(number, SemanticVersion::new(1, version, 0));
            if version % 3 == 0 {
                card = card.with_note(Note::new(NoteKind::Updated));
            }
            if version > 0 {
                card = card.with_playtesting(SemanticVersion::new(1, version - 1, 0));
            }
            list.push(card);
        }
    }
    list
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &size in &[100u32, 1_000] {
        let cards = card_list(size, 5);

        group.bench_with_input(BenchmarkId::new("insertion", size), &cards, |b, cards| {
            b.iter(|| CardCollection::from_cards(black_box(cards.clone())))
        });

        group.bench_with_input(BenchmarkId::new("sorted", size), &cards, |b, cards| {
            b.iter(|| {
                CardCollection::from_cards_with(black_box(cards.clone()), CollectionConfig::new().sorted())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
