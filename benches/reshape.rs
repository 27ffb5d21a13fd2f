//! FILENAME: benches/reshape.rs
//! Benchmarks for the four reshaping operation families over a grid of
//! realistic spreadsheet size (10k rows x 8 columns).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reshape_engine::{CellValue, Grid};

const ROWS: u32 = 10_000;
const COLS: u32 = 8;

fn sample_grid() -> Grid<CellValue> {
    let rows = (0..ROWS)
        .map(|r| {
            (0..COLS)
                .map(|c| CellValue::Number((r * COLS + c) as f64))
                .collect()
        })
        .collect();
    Grid::from_rows(rows).unwrap()
}

fn bench_parse_all(c: &mut Criterion) {
    let grid = sample_grid();
    c.bench_function("parse_all 10000x8", |b| {
        b.iter(|| {
            let sums: Vec<(u32, f64)> = black_box(&grid)
                .parse_all(|cells, row| {
                    let sum = cells.iter().filter_map(CellValue::as_number).sum();
                    (row, sum)
                })
                .unwrap()
                .collect();
            black_box(sums)
        })
    });
}

fn bench_to_flat(c: &mut Criterion) {
    let grid = sample_grid();
    c.bench_function("to_flat 10000x8", |b| {
        b.iter(|| {
            let flat: Vec<f64> = black_box(&grid)
                .to_flat(|v| v.as_number().unwrap_or(0.0))
                .unwrap();
            black_box(flat)
        })
    });
}

fn bench_compose(c: &mut Criterion) {
    let records: Vec<(f64, f64)> = (0..ROWS).map(|i| (i as f64, i as f64 * 2.0)).collect();
    c.bench_function("compose 10000x2", |b| {
        b.iter(|| {
            let grid: Grid<CellValue> = Grid::compose(
                black_box(records.iter()),
                |r| vec![CellValue::Number(r.0), CellValue::Number(r.1)],
                2,
            )
            .unwrap();
            black_box(grid)
        })
    });
}

fn bench_from_linear(c: &mut Criterion) {
    let source: Vec<f64> = (0..ROWS).map(|i| i as f64).collect();
    c.bench_function("from_linear_rows 10000", |b| {
        b.iter(|| {
            let grid: Grid<CellValue> =
                Grid::from_linear_rows(black_box(&source), |n| CellValue::Number(*n)).unwrap();
            black_box(grid)
        })
    });
}

criterion_group!(
    benches,
    bench_parse_all,
    bench_to_flat,
    bench_compose,
    bench_from_linear
);
criterion_main!(benches);
