use grid_search::{algorithm_info, Cell, PathingGrid};
use itertools::Itertools;

// Runs every algorithm on the same maze and prints how much of it each one explored, with the
// explored cells marked by `o` and the path by `*`. Set RUST_LOG=debug to see the engine's log.

const MAZE: &str = "\
....................
.#######.#########..
.#.....#.#.......#..
.#.###.#.#.#####.#..
.#.#...#...#...#.#..
.#.#.#######.#.#.#..
.#.#.........#.#....
.#.###########.####.
.#..................
.##################.
....................";

fn main() {
    env_logger::init();
    let mut grid: PathingGrid = MAZE.parse().unwrap();
    // Add a wall segment the way a mouse drag draws one
    grid.set_walls_between(Cell::new(8, 15), Cell::new(8, 18), &[]);
    grid.update();
    let start = Cell::new(0, 0);
    let end = Cell::new(4, 4);
    let components = grid
        .cells()
        .filter(|&c| !grid.is_wall(c))
        .map(|c| grid.get_component(c))
        .unique()
        .count();
    println!("Components: {components}");
    println!("Reachable: {}", grid.reachable(start, end));

    for info in algorithm_info() {
        let result = info.algorithm.compute(&grid, start, end).unwrap();
        println!(
            "\n{}: explored {} cells, path length {}",
            info.name,
            result.visited_in_order.len(),
            result.path_len()
        );
        println!("{}", info.description);
        for row in 0..grid.rows() {
            let line = (0..grid.cols())
                .map(|col| {
                    let cell = Cell::new(row, col);
                    if cell == start {
                        'S'
                    } else if cell == end {
                        'E'
                    } else if result.path.contains(&cell) {
                        '*'
                    } else if result.visited_in_order.iter().any(|r| r.cell == cell) {
                        'o'
                    } else if grid.is_wall(cell) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            println!("{line}");
        }
    }
}
