use crate::frontier::LifoFrontier;
use crate::solver::{Algorithm, GridSolver, Relaxation};

/// Depth-first search. Neighbours are pushed North, East, South, West and popped last in, first
/// out, so the most recently discovered branch is followed first. Distances are measured along
/// the discovery tree and are not shortest distances.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    type Frontier = LifoFrontier;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn relaxation(&self) -> Relaxation {
        Relaxation::FirstDiscovery
    }
}
