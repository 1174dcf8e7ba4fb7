use criterion::{criterion_group, criterion_main, Criterion};
use lexicon::alphabet::ALPHABET;
use lexicon::Lexicon;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_word(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let words: Vec<String> = (0..50_000)
        .map(|_| {
            let len = rng.gen_range(3..10);
            random_word(&mut rng, len)
        })
        .collect();
    let lex: Lexicon = words.iter().map(String::as_str).collect();

    c.bench_function("contains", |b| b.iter(|| lex.contains(&words[1234])));

    { let mut group = c.benchmark_group("suggest");
        group.bench_function("len 5, distance 1", |b| b.iter(|| lex.suggest("hello", 1)));
        group.bench_function("len 7, distance 2", |b| b.iter(|| lex.suggest("letters", 2)));
    }

    { let mut group = c.benchmark_group("wildcard");
        group.sample_size(10);
        group.bench_function("len 5", |b| b.iter(|| lex.match_wildcard("?????")));
        group.bench_function("a*e", |b| b.iter(|| lex.match_wildcard("a*e")));
        group.bench_function("batch", |b| b.iter(|| lex.match_batch(&["a*e", "?????", "*ing", "q_u*"])));
    }

    c.bench_function("words", |b| b.iter(|| lex.words().count()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
