use criterion::{black_box, criterion_group, criterion_main, Criterion};

use simpol_groups::{count_batch, count_groups, count_smiles, input_lines, parse_smiles, EngineConfig};

const ETHANOL: &str = "CCO";
const PAN: &str = "CC(=O)OON(=O)=O";
const NITROPHENOL: &str = "Oc1ccc(cc1)[N+](=O)[O-]";
const PINONIC_ACID: &str = "CC(=O)C1CC(CC(=O)O)C1(C)C";
const TRIGLYCERIDE: &str = "CCCCCCCC(=O)OCC(COC(=O)CCCCCCC)OC(=O)CCCCCCC";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("ethanol", |b| {
        b.iter(|| black_box(parse_smiles(black_box(ETHANOL)).unwrap()))
    });
    group.bench_function("nitrophenol", |b| {
        b.iter(|| black_box(parse_smiles(black_box(NITROPHENOL)).unwrap()))
    });
    group.bench_function("triglyceride", |b| {
        b.iter(|| black_box(parse_smiles(black_box(TRIGLYCERIDE)).unwrap()))
    });

    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let pan = parse_smiles(PAN).unwrap();
    let pinonic = parse_smiles(PINONIC_ACID).unwrap();
    let triglyceride = parse_smiles(TRIGLYCERIDE).unwrap();

    let mut group = c.benchmark_group("count");

    group.bench_function("pan", |b| b.iter(|| black_box(count_groups(black_box(&pan)))));
    group.bench_function("pinonic_acid", |b| {
        b.iter(|| black_box(count_groups(black_box(&pinonic))))
    });
    group.bench_function("triglyceride", |b| {
        b.iter(|| black_box(count_groups(black_box(&triglyceride))))
    });

    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let config = EngineConfig::default();
    let text: String = [ETHANOL, PAN, NITROPHENOL, PINONIC_ACID, TRIGLYCERIDE]
        .iter()
        .cycle()
        .take(1000)
        .map(|s| format!("{}\n", s))
        .collect();
    let lines = input_lines(&text);

    let mut group = c.benchmark_group("end_to_end");

    group.bench_function("count_smiles_pinonic_acid", |b| {
        b.iter(|| black_box(count_smiles(black_box(PINONIC_ACID), &config).unwrap()))
    });
    group.bench_function("batch_1000", |b| {
        b.iter(|| black_box(count_batch(black_box(&lines), &config)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_count, bench_end_to_end);
criterion_main!(benches);
