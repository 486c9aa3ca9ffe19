//! Benchmarks for name normalization and stat extraction

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parlay_settle::bet::Sport;
use parlay_settle::boxscore::{extract_stat, BoxScore};
use parlay_settle::reference::NameNormalizer;

fn nba_boxscore() -> BoxScore {
    let names = [
        "Nikola Jokic",
        "Jamal Murray",
        "Michael Porter Jr.",
        "Aaron Gordon",
        "Christian Braun",
        "LeBron James",
        "Anthony Davis",
        "Austin Reaves",
        "D'Angelo Russell",
        "Rui Hachimura",
    ];
    let athletes: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                r#"{{"athlete": {{"displayName": "{name}"}}, "stats": ["34", "{}", "{}", "{}"]}}"#,
                10 + i,
                3 + i,
                i
            )
        })
        .collect();
    let json = format!(
        r#"[{{"statistics": [{{"labels": ["MIN", "PTS", "REB", "AST"], "athletes": [{}]}}]}}]"#,
        athletes.join(",")
    );
    serde_json::from_str(&json).unwrap()
}

fn benchmark_normalize(c: &mut Criterion) {
    let normalizer = NameNormalizer::default();

    c.bench_function("normalize_full_name", |b| {
        b.iter(|| normalizer.normalize(black_box("Denver Nuggets"), Sport::Nba))
    });

    c.bench_function("normalize_misspelled", |b| {
        b.iter(|| normalizer.normalize(black_box("Philly 76ers"), Sport::Nba))
    });
}

fn benchmark_extract_stat(c: &mut Criterion) {
    let boxscore = nba_boxscore();

    c.bench_function("extract_stat_exact", |b| {
        b.iter(|| extract_stat(black_box("Austin Reaves"), "", "PTS", &boxscore))
    });

    c.bench_function("extract_stat_fuzzy", |b| {
        b.iter(|| extract_stat(black_box("Micheal Porter"), "", "REB", &boxscore))
    });
}

criterion_group!(benches, benchmark_normalize, benchmark_extract_stat);
criterion_main!(benches);
