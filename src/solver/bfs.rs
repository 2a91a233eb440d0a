use crate::frontier::FifoFrontier;
use crate::solver::{Algorithm, GridSolver, Relaxation};

/// Breadth-first search. Every cell at distance `d` is queued before any cell at `d + 1` is
/// expanded, so the path found has the minimal number of steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = FifoFrontier;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn relaxation(&self) -> Relaxation {
        Relaxation::FirstDiscovery
    }
}
