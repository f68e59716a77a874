use criterion::{criterion_group, criterion_main, Criterion};
use linkrank_core::{search, Corpus, Dictionary, Document, Index, PageRankConfig, ScoreWeights};

fn synthetic_index(num_docs: usize, words_per_doc: usize) -> Index {
    let mut dictionary = Dictionary::new();
    let mut documents = Vec::with_capacity(num_docs);
    for d in 0..num_docs {
        let text: Vec<String> = (0..words_per_doc)
            .map(|w| format!("w{}", (d * 7 + w * 13) % 5000))
            .collect();
        let tokens = dictionary.intern_text(&text.join(" "));
        let mut doc = Document::new(format!("page{d}"), "Bench", tokens);
        doc.out_links = (1..=5).map(|k| format!("/wiki/page{}", (d * k + 1) % num_docs)).collect();
        documents.push(doc);
    }
    Index::build(Corpus { dictionary, documents }, &PageRankConfig::default())
}

fn bench_search(c: &mut Criterion) {
    let index = synthetic_index(2_000, 400);
    let weights = ScoreWeights::default();
    c.bench_function("search_two_words", |b| b.iter(|| search(&index, "w13 w26", &weights)));
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
