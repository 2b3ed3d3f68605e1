//! Resolver throughput: country resolution and subdivision lookups per tier.
//!
//! Run with: `cargo bench --bench resolver`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use iso3166::{Atlas, CountryCodeFormat, CountryTable};

const COUNTRY_INPUTS: &[&str] = &["US", "usa", " se ", "840", "4", "Sweden", "XX"];

fn bench_country_resolution(c: &mut Criterion) {
    let table = CountryTable::builtin();
    let mut group = c.benchmark_group("country");
    group.throughput(Throughput::Elements(COUNTRY_INPUTS.len() as u64));

    group.bench_function("resolve_alpha2", |b| {
        b.iter(|| {
            for input in COUNTRY_INPUTS {
                black_box(table.resolve_alpha2(black_box(*input)));
            }
        })
    });
    group.bench_function("detect_format", |b| {
        b.iter(|| {
            for input in COUNTRY_INPUTS {
                black_box(table.detect_format(black_box(*input)));
            }
        })
    });
    group.bench_function("convert", |b| {
        b.iter(|| {
            black_box(table.convert(
                black_box(840),
                CountryCodeFormat::Numeric,
                CountryCodeFormat::Alpha3,
            ))
        })
    });
    group.finish();
}

fn bench_subdivision_tiers(c: &mut Criterion) {
    let atlas = Atlas::full();
    let subdivisions = atlas.subdivisions();
    let mut group = c.benchmark_group("where_code");

    // US-WY is last in table order, so the name tier scans the whole table.
    for (tier, code) in [("exact", "us-wy"), ("alpha3_prefix", "USA-WY"), ("name", "US-Wyoming")] {
        group.bench_function(tier, |b| b.iter(|| black_box(subdivisions.where_code(black_box(code)))));
    }
    group.finish();

    c.bench_function("subdivisions_all", |b| b.iter(|| black_box(subdivisions.all().len())));
}

criterion_group!(benches, bench_country_resolution, bench_subdivision_tiers);
criterion_main!(benches);
