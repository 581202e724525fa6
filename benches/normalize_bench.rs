use criterion::{black_box, criterion_group, criterion_main, Criterion};
use konorm::{Normalizer, Segmenter};

fn synthetic_corpus() -> Vec<String> {
    let patterns = [
        "오늘은 2023년 3월입니다. 주가가 3.14% 올랐다!",
        "CEO Tom은 한국(韓國)을 방문했다. 자세한 내용은 www.example.com 참조.",
        "【서울 김철수 기자】 물가: 1.5배 상승··· ㄱ) 첫째 항목",
        "大韓民國 정부(政府)는 「국어기본법」에 따라 발표했다.",
    ];
    (0..64)
        .map(|i| patterns[i % patterns.len()].to_string())
        .collect()
}

fn bench_segmenter(c: &mut Criterion) {
    let segmenter = Segmenter::new();
    let corpus = synthetic_corpus();

    c.bench_function("segment_lines", |b| {
        b.iter(|| segmenter.segment_lines(black_box(&corpus)))
    });
}

fn bench_normalizer(c: &mut Criterion) {
    let segmenter = Segmenter::new();
    let normalizer = Normalizer::with_standard_lexicon().expect("normalizer");
    let body = segmenter.segment_lines(&synthetic_corpus());

    c.bench_function("normalize_lines", |b| {
        b.iter(|| normalizer.normalize_lines(black_box(&body)).expect("normalize"))
    });
}

criterion_group!(benches, bench_segmenter, bench_normalizer);
criterion_main!(benches);
