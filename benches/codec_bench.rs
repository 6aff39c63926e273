use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lemmadex::cleaning;
use lemmadex::vectors::LemmaCounts;

// bench protocol:
//
// One synthetic article-sized markup blob for the stripper, one
// thousand-lemma vector for the codec. Both are the per-record hot
// paths of the index and invert jobs.

fn markup(paragraphs: usize) -> String {
    let mut text = String::from("{{Infobox person\n| name = Ada Lovelace\n| born = 1815\n}}\n");
    for i in 0..paragraphs {
        text.push_str(&format!(
            "'''Paragraph {}''' with [[links]], a url https://example.org/{} \
             and a claim<ref>some source {}</ref> about (numbers) 1815-1852.\n",
            i, i, i
        ));
    }
    text
}

fn vector(lemmas: usize) -> LemmaCounts {
    (0..lemmas)
        .map(|i| (format!("lemma{}", i), (i % 17 + 1) as u64))
        .collect()
}

fn bench_strip(c: &mut Criterion) {
    let raw = markup(50);
    c.bench_function("strip article markup", |b| {
        b.iter(|| cleaning::strip(black_box(&raw)))
    });
}

fn bench_encode(c: &mut Criterion) {
    let v = vector(1000);
    c.bench_function("encode 1000-lemma vector", |b| {
        b.iter(|| black_box(&v).to_string())
    });
}

fn bench_decode(c: &mut Criterion) {
    let encoded = vector(1000).to_string();
    c.bench_function("decode 1000-lemma vector", |b| {
        b.iter(|| LemmaCounts::decode(black_box(&encoded)))
    });
}

criterion_group!(benches, bench_strip, bench_encode, bench_decode);
criterion_main!(benches);
