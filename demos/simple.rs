use grid_search::{Algorithm, Cell, PathingGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Cells have a 4-neighbourhood

fn main() {
    let grid: PathingGrid = "S..\n.#.\n..E".parse().unwrap();
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    let result = Algorithm::Bfs.compute(&grid, start, end).unwrap();
    println!("Visited:");
    for record in &result.visited_in_order {
        println!("{} at distance {}", record.cell, record.distance);
    }
    println!("Path:");
    for cell in result.path {
        println!("{}", cell);
    }
}
