use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lunisolar::chinese::info;
use lunisolar::{Date, chinese, korean};

fn convert_bench(c: &mut Criterion) {
    let early = Date::from_gregorian(1901, 3, 1).unwrap();
    let late = Date::from_gregorian(2049, 10, 1).unwrap();

    let mut group = c.benchmark_group("convert");
    group.bench_function("chinese_early", |b| {
        b.iter(|| chinese::from_date(black_box(early)))
    });
    group.bench_function("chinese_late", |b| {
        b.iter(|| chinese::from_date(black_box(late)))
    });
    group.bench_function("korean_early", |b| {
        b.iter(|| korean::from_date(black_box(early)))
    });
    group.bench_function("korean_late", |b| {
        b.iter(|| korean::from_date(black_box(late)))
    });
    group.finish();
}

fn decoder_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoder");
    group.bench_function("chinese_year_length", |b| {
        b.iter(|| info::year_length(black_box(2017)))
    });
    group.bench_function("korean_year_length", |b| {
        b.iter(|| korean::year_length(black_box(2017)))
    });
    group.finish();
}

criterion_group!(benches, convert_bench, decoder_bench);
criterion_main!(benches);
