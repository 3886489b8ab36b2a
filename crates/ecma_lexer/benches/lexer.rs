use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ecma_allocator::Allocator;
use ecma_lexer::{CharacterStream, Kind, LexerFlags, Scanner};

const FIXTURES: &[(&str, &str)] = &[
    ("identifiers", include_str!("fixtures/identifiers.js")),
    ("strings_and_templates", include_str!("fixtures/strings_and_templates.js")),
    ("numbers", include_str!("fixtures/numbers.js")),
];

fn bench_lexer(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lexer");
    for (name, source) in FIXTURES {
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, source| {
            b.iter_with_large_drop(|| {
                // Include the allocator drop time, so timings stay comparable
                // across runs instead of being skewed by chunk growth.
                let allocator = Allocator::default();
                let stream = CharacterStream::from_utf8(source.as_bytes());
                let mut scanner = Scanner::new(&allocator, stream, LexerFlags::all_harmony());
                while scanner.current_token().kind != Kind::Eof {
                    scanner.advance();
                }
                allocator
            });
        });
    }
    group.finish();
}

criterion_group!(lexer, bench_lexer);
criterion_main!(lexer);
