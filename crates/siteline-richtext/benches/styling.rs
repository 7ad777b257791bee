use criterion::{Criterion, criterion_group, criterion_main};
use siteline_richtext::{SpanStyle, TextSpan, merge_span, segments};

fn sample_text(words: usize) -> String {
    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(' ');
        }
        text.push_str("word");
    }
    text
}

fn sample_spans(count: usize) -> Vec<TextSpan> {
    (0..count)
        .map(|i| {
            TextSpan::new(
                i * 5,
                4,
                SpanStyle {
                    color: Some(format!("#{:06x}", i * 7919)),
                    ..Default::default()
                },
            )
        })
        .collect()
}

fn bench_styling(c: &mut Criterion) {
    let mut group = c.benchmark_group("styling");

    for count in [8, 64, 256] {
        let text = sample_text(count + 1);
        let spans = sample_spans(count);
        let global = SpanStyle {
            font_size: Some(32.0),
            ..Default::default()
        };

        group.bench_function(format!("segments/{count}"), |b| {
            b.iter(|| {
                let segs = segments(
                    std::hint::black_box(&text),
                    std::hint::black_box(&spans),
                    &global,
                );
                std::hint::black_box(segs);
            });
        });

        let new_span = TextSpan::new(
            2,
            count * 4,
            SpanStyle {
                font_size: Some(20.0),
                ..Default::default()
            },
        );
        group.bench_function(format!("merge_span/{count}"), |b| {
            b.iter(|| {
                let merged = merge_span(
                    std::hint::black_box(&spans),
                    std::hint::black_box(&new_span),
                );
                std::hint::black_box(merged);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_styling);
criterion_main!(benches);
