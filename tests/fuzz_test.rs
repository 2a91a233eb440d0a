//! Fuzzes the search engine on many random grids, checking that every algorithm reaches the goal
//! exactly when it is on the same connected component as the start, that the optimal algorithms
//! agree on the path length, and that results are reproducible.
use grid_search::{is_valid_path, Algorithm, Cell, PathingGrid, SearchResult};
use itertools::Itertools;
use rand::prelude::*;

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng, wall_probability: f64) -> PathingGrid {
    let mut pathing_grid = PathingGrid::new(rows, cols).unwrap();
    for row in 0..rows {
        for col in 0..cols {
            pathing_grid.set_wall(Cell::new(row, col), rng.gen_bool(wall_probability));
        }
    }
    pathing_grid.generate_components();
    pathing_grid
}

fn visualize_grid(grid: &PathingGrid, start: &Cell, end: &Cell) {
    for cell in grid.cells() {
        if *start == cell {
            print!("S");
        } else if *end == cell {
            print!("E");
        } else if grid.is_wall(cell) {
            print!("#");
        } else {
            print!(".");
        }
        if cell.col + 1 == grid.cols() {
            println!();
        }
    }
}

fn run_all(grid: &PathingGrid, start: Cell, end: Cell) -> Vec<(Algorithm, SearchResult)> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| (algorithm, algorithm.compute(grid, start, end).unwrap()))
        .collect()
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Cell::new(0, 0);
    let end = Cell::new(N - 1, N - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng, 0.4);
        grid.set_wall(start, false);
        grid.set_wall(end, false);
        let reachable = grid.reachable(start, end);
        let results = run_all(&grid, start, end);
        let bfs_len = results[0].1.path_len();
        for (algorithm, result) in &results {
            let valid = is_valid_path(start, end, &result.path);
            // Show the grid if the outcome is wrong
            if result.reached_goal != reachable || (reachable && !valid) {
                visualize_grid(&grid, &start, &end);
                println!("{algorithm}: {:?}", result.path);
            }
            assert_eq!(result.reached_goal, reachable);
            if reachable {
                assert!(valid);
                if algorithm.guarantees_shortest_path() {
                    assert_eq!(result.path_len(), bfs_len, "{algorithm} is not optimal");
                } else {
                    assert!(result.path_len() >= bfs_len);
                }
            } else {
                assert!(result.path.is_empty());
            }
            assert!(result
                .visited_in_order
                .iter()
                .map(|r| r.cell)
                .all_unique());
        }
    }
}

/// When the goal cannot be reached every algorithm expands exactly the component of the start.
#[test]
fn fuzz_unreachable_exhausts_component() {
    const N: usize = 8;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    let start = Cell::new(0, 0);
    let end = Cell::new(N - 1, N - 1);
    let mut checked = 0;
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng, 0.45);
        grid.set_wall(start, false);
        grid.set_wall(end, false);
        if grid.reachable(start, end) {
            continue;
        }
        checked += 1;
        let mut component = grid
            .cells()
            .filter(|&c| c != start && grid.reachable(start, c))
            .collect::<Vec<_>>();
        component.sort();
        for (algorithm, result) in run_all(&grid, start, end) {
            assert!(result.path.is_empty(), "{algorithm}");
            let mut visited = result
                .visited_in_order
                .iter()
                .map(|r| r.cell)
                .collect::<Vec<_>>();
            visited.sort();
            assert_eq!(visited, component, "{algorithm}");
            assert!(result
                .visited_in_order
                .iter()
                .all(|r| r.distance != grid_search::UNREACHED && r.distance > 0));
        }
    }
    assert!(checked > 0);
}

/// On grids without walls the shortest path length is the Manhattan distance.
#[test]
fn fuzz_open_grid_distance() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let rows = rng.gen_range(1..12);
        let cols = rng.gen_range(1..12);
        let grid = PathingGrid::new(rows, cols).unwrap();
        let start = Cell::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
        let end = Cell::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
        for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar] {
            let result = algorithm.compute(&grid, start, end).unwrap();
            assert_eq!(result.path_len() as u32, start.manhattan(&end));
        }
    }
}

/// Repeated runs on the same input give identical output.
#[test]
fn fuzz_determinism() {
    const N: usize = 12;
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let grid = random_grid(N, N, &mut rng, 0.3);
        let open = grid.cells().filter(|&c| !grid.is_wall(c)).collect::<Vec<_>>();
        let Some((&start, &end)) = open.choose(&mut rng).zip(open.choose(&mut rng)) else {
            continue;
        };
        let first = run_all(&grid, start, end);
        let second = run_all(&grid.clone(), start, end);
        assert_eq!(first, second);
    }
}

/// BFS, Dijkstra and A* agree on the distance of every cell they both expanded.
#[test]
fn fuzz_recorded_distances_are_shortest() {
    const N: usize = 10;
    let mut rng = StdRng::seed_from_u64(4);
    let start = Cell::new(0, 0);
    let end = Cell::new(N - 1, N - 1);
    for _ in 0..300 {
        let mut grid = random_grid(N, N, &mut rng, 0.3);
        grid.set_wall(start, false);
        grid.set_wall(end, false);
        let bfs = Algorithm::Bfs.compute(&grid, start, end).unwrap();
        let shortest = bfs
            .visited_in_order
            .iter()
            .map(|r| (r.cell, r.distance))
            .collect::<std::collections::HashMap<_, _>>();
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let result = algorithm.compute(&grid, start, end).unwrap();
            for record in &result.visited_in_order {
                if let Some(&d) = shortest.get(&record.cell) {
                    assert_eq!(record.distance, d, "{algorithm} at {}", record.cell);
                }
            }
        }
    }
}
