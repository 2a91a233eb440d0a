use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{Algorithm, Cell, PathingGrid};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_grid(n: usize, rng: &mut StdRng) -> PathingGrid {
    let mut pathing_grid = PathingGrid::new(n, n).unwrap();
    for row in 0..n {
        for col in 0..n {
            pathing_grid.set_wall(Cell::new(row, col), rng.gen_bool(0.3));
        }
    }
    pathing_grid.generate_components();
    pathing_grid
}

fn random_scenarios(grid: &PathingGrid, count: usize, rng: &mut StdRng) -> Vec<(Cell, Cell)> {
    let open = grid
        .cells()
        .filter(|&c| !grid.is_wall(c))
        .collect::<Vec<_>>();
    (0..count)
        .map(|_| {
            (
                open[rng.gen_range(0..open.len())],
                open[rng.gen_range(0..open.len())],
            )
        })
        .collect()
}

fn algorithm_comparison(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [32, 128] {
        let grid = random_grid(n, &mut rng);
        let scenarios = random_scenarios(&grid, 20, &mut rng);
        for algorithm in Algorithm::ALL {
            c.bench_function(format!("{n}x{n}, {}", algorithm.info().name).as_str(), |b| {
                b.iter(|| {
                    for (start, end) in &scenarios {
                        black_box(algorithm.compute(&grid, *start, *end).unwrap());
                    }
                })
            });
        }
    }
}

criterion_group!(benches, algorithm_comparison);
criterion_main!(benches);
