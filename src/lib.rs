//! # grid_search
//!
//! Uninformed and informed search on a 4-connected grid with wall cells. Five interchangeable
//! strategies are provided:
//!
//! - [Breadth-first search](solver::bfs::BfsSolver) (FIFO frontier)
//! - [Depth-first search](solver::dfs::DfsSolver) (LIFO frontier)
//! - [Dijkstra's algorithm](solver::dijkstra::DijkstraSolver) (min-distance frontier)
//! - [A*](solver::astar::AstarSolver) (min-`f` frontier, Manhattan heuristic)
//! - [Greedy best-first search](solver::greedy::GreedySolver) (min-heuristic frontier)
//!
//! All of them run through the same [expand/relax loop](engine::search) and differ only in their
//! [Frontier] and [Relaxation] rule. Besides the path, every search reports the order in which
//! cells were expanded together with the distance known at that moment, which is what a
//! visualisation needs to animate the exploration.
//!
//! Moves are orthogonal with unit cost. Neighbours are always enumerated North, East, South,
//! West, and priority ties go to the cell that entered the frontier first, so results are fully
//! deterministic.
//!
//! ```
//! use grid_search::{Algorithm, Cell, PathingGrid};
//!
//! let grid: PathingGrid = "S..\n.#.\n..E".parse().unwrap();
//! let result = Algorithm::AStar
//!     .compute(&grid, Cell::new(0, 0), Cell::new(2, 2))
//!     .unwrap();
//! assert_eq!(result.path.len(), 4);
//! ```
pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod pathing_grid;
pub mod solver;
pub mod state;

pub use cell::Cell;
pub use config::SearchConfig;
pub use engine::{is_valid_path, search, SearchResult, VisitedRecord};
pub use error::{Endpoint, EndpointFault, Result, SearchError};
pub use frontier::Frontier;
pub use pathing_grid::PathingGrid;
pub use solver::{algorithm_info, Algorithm, AlgorithmInfo, GridSolver, Relaxation};

/// Distance of a cell that has not been reached.
pub const UNREACHED: u32 = u32::MAX;

/// A cell has at most 4 orthogonal neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
