use crate::cell::Cell;
use crate::frontier::PriorityFrontier;
use crate::solver::{Algorithm, GridSolver, Relaxation};

/// A* ordered by `f = g + h`, with the [Manhattan distance](Cell::manhattan) to the goal as `h`.
/// The heuristic is consistent on a 4-connected unit-cost grid, so the path found is shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl AstarSolver {
    pub fn heuristic(&self, cell: &Cell, goal: &Cell) -> u32 {
        cell.manhattan(goal)
    }
}

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier;

    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn relaxation(&self) -> Relaxation {
        Relaxation::OpenSet
    }

    fn priority(&self, distance: u32, cell: &Cell, goal: &Cell) -> u32 {
        distance + self.heuristic(cell, goal)
    }
}
