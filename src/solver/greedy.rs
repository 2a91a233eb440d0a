use crate::cell::Cell;
use crate::frontier::PriorityFrontier;
use crate::solver::{Algorithm, GridSolver, Relaxation};

/// Greedy best-first search: always expands the frontier cell closest to the goal by
/// [Manhattan distance](Cell::manhattan), ignoring the cost already paid. Cells are taken on
/// first discovery; the recorded distance is only informative.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl GridSolver for GreedySolver {
    type Frontier = PriorityFrontier;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Greedy
    }

    fn relaxation(&self) -> Relaxation {
        Relaxation::FirstDiscovery
    }

    fn priority(&self, _distance: u32, cell: &Cell, goal: &Cell) -> u32 {
        cell.manhattan(goal)
    }
}
