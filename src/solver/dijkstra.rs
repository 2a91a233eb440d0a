use crate::cell::Cell;
use crate::frontier::PriorityFrontier;
use crate::solver::{Algorithm, GridSolver, Relaxation};

/// Dijkstra's algorithm with unit edge costs. The frontier only ever holds cells with a finite
/// distance, so the search ends as soon as no finite-distance candidate remains.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Frontier = PriorityFrontier;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn relaxation(&self) -> Relaxation {
        Relaxation::Improve
    }

    fn priority(&self, distance: u32, _cell: &Cell, _goal: &Cell) -> u32 {
        distance
    }
}
