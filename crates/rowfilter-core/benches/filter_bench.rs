use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rowfilter_core::{MemoryPage, RowFilter};
use std::hint::black_box;

fn book_rows(count: usize) -> Vec<String> {
    let mut rows = vec!["Title Author Year".to_string()];
    rows.extend((0..count).map(|i| {
        format!(
            "Volume {i} of The Art of Computer Programming\tDonald Knuth\t{}",
            1968 + i % 50
        )
    }));
    rows
}

fn bench_filter_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_pass");
    let filter = RowFilter::default();
    for count in [100usize, 1_000, 10_000] {
        let rows = book_rows(count);
        for query in ["", "knuth", "VOLUME 99", "zzz"] {
            group.bench_with_input(
                BenchmarkId::new(format!("rows_{count}"), query),
                &query,
                |b, &query| {
                    let mut page = MemoryPage::with_rows(rows.iter().cloned());
                    page.set_query(query);
                    b.iter(|| black_box(filter.filter_page(&mut page)));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filter_pass);
criterion_main!(benches);
