use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::config::SearchConfig;
use crate::engine::{search, SearchResult};
use crate::error::{Result, SearchError};
use crate::frontier::Frontier;
use crate::pathing_grid::PathingGrid;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod greedy;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;
use greedy::GreedySolver;

/// How a solver treats a neighbour of the cell being expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relaxation {
    /// A neighbour is taken only the first time it is discovered; its distance is never revised.
    FirstDiscovery,
    /// A neighbour is (re)pushed whenever a strictly shorter distance to it is found.
    Improve,
    /// A neighbour outside the open set is inserted; one inside it is updated only on a strict
    /// improvement of its distance.
    OpenSet,
}

/// A traversal strategy: the frontier it explores with, the rule for relaxing neighbours and
/// the priority it assigns to frontier cells.
pub trait GridSolver {
    type Frontier: Frontier;

    fn algorithm(&self) -> Algorithm;

    fn relaxation(&self) -> Relaxation;

    /// Frontier priority of `cell` reached at `distance` while searching for `goal`. Lower is
    /// popped first. Ignored by FIFO and LIFO frontiers.
    fn priority(&self, _distance: u32, _cell: &Cell, _goal: &Cell) -> u32 {
        0
    }

    /// Searches from `start` to `end` and returns the exploration order together with the path.
    fn compute(&self, grid: &PathingGrid, start: Cell, end: Cell) -> Result<SearchResult> {
        self.compute_with_config(grid, start, end, &SearchConfig::default())
    }

    /// Same as [compute](Self::compute), subject to the limits in `config`.
    fn compute_with_config(
        &self,
        grid: &PathingGrid,
        start: Cell,
        end: Cell,
        config: &SearchConfig,
    ) -> Result<SearchResult> {
        search(self, grid, start, end, config)
    }
}

/// Identifier of one of the five search algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    Greedy,
}

/// Display name and description of an algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub algorithm: Algorithm,
    pub name: &'static str,
    pub description: &'static str,
}

static ALGORITHM_INFO: [AlgorithmInfo; 5] = [
    AlgorithmInfo {
        algorithm: Algorithm::Bfs,
        name: "Breadth-First Search",
        description: "BFS is unweighted and guarantees the shortest path. It explores all neighbors at the current depth before moving deeper.",
    },
    AlgorithmInfo {
        algorithm: Algorithm::Dfs,
        name: "Depth-First Search",
        description: "DFS is unweighted and does not guarantee the shortest path. It explores as far as possible along each branch before backtracking.",
    },
    AlgorithmInfo {
        algorithm: Algorithm::Dijkstra,
        name: "Dijkstra's Algorithm",
        description: "Dijkstra's algorithm is weighted and guarantees the shortest path. It's optimal for graphs with non-negative edge weights.",
    },
    AlgorithmInfo {
        algorithm: Algorithm::AStar,
        name: "A* Search",
        description: "A* is weighted and uses heuristics to find the shortest path efficiently. It combines the benefits of Dijkstra and Greedy Best-First.",
    },
    AlgorithmInfo {
        algorithm: Algorithm::Greedy,
        name: "Greedy Best-First Search",
        description: "Greedy Best-First Search is unweighted and does not guarantee the shortest path. It uses heuristics to move toward the goal quickly.",
    },
];

/// The read-only metadata table, in [Algorithm::ALL] order.
pub fn algorithm_info() -> &'static [AlgorithmInfo] {
    &ALGORITHM_INFO
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Greedy,
    ];

    /// Short identifier, as accepted by [FromStr].
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::Greedy => "greedy",
        }
    }

    pub fn info(&self) -> &'static AlgorithmInfo {
        &ALGORITHM_INFO[*self as usize]
    }

    pub fn guarantees_shortest_path(&self) -> bool {
        matches!(
            self,
            Algorithm::Bfs | Algorithm::Dijkstra | Algorithm::AStar
        )
    }

    /// Runs the solver this identifier stands for.
    pub fn compute(&self, grid: &PathingGrid, start: Cell, end: Cell) -> Result<SearchResult> {
        self.compute_with_config(grid, start, end, &SearchConfig::default())
    }

    pub fn compute_with_config(
        &self,
        grid: &PathingGrid,
        start: Cell,
        end: Cell,
        config: &SearchConfig,
    ) -> Result<SearchResult> {
        match self {
            Algorithm::Bfs => BfsSolver.compute_with_config(grid, start, end, config),
            Algorithm::Dfs => DfsSolver.compute_with_config(grid, start, end, config),
            Algorithm::Dijkstra => DijkstraSolver.compute_with_config(grid, start, end, config),
            Algorithm::AStar => AstarSolver.compute_with_config(grid, start, end, config),
            Algorithm::Greedy => GreedySolver.compute_with_config(grid, start, end, config),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| SearchError::UnknownAlgorithm { id: s.to_owned() })
    }
}
