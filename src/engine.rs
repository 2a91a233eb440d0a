//! The expand/relax loop shared by every [GridSolver] and the path reconstruction that
//! follows a successful search.
use itertools::Itertools;
use log::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::config::SearchConfig;
use crate::error::{Endpoint, EndpointFault, Result, SearchError};
use crate::frontier::Frontier;
use crate::pathing_grid::PathingGrid;
use crate::solver::{GridSolver, Relaxation};
use crate::state::SearchState;

/// A cell at the moment it was expanded, with the distance known at that time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisitedRecord {
    pub cell: Cell,
    pub distance: u32,
}

/// Output of a search: the exploration order and the path found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// Expanded cells in expansion order. Excludes the start and the end cell.
    pub visited_in_order: Vec<VisitedRecord>,
    /// Cells from the neighbour of the start up to and including the end. Empty when the end is
    /// unreachable or equal to the start.
    pub path: Vec<Cell>,
    /// Whether the end cell was reached; tells the two empty-path cases apart.
    pub reached_goal: bool,
}

impl SearchResult {
    /// Number of steps taken along the path.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

/// Checks that `path` leads from `start` to `end` in orthogonal unit steps without containing
/// `start` itself. An empty path is only valid when `start == end`.
pub fn is_valid_path(start: Cell, end: Cell, path: &[Cell]) -> bool {
    match path.last() {
        None => start == end,
        Some(last) => {
            *last == end
                && !path.contains(&start)
                && std::iter::once(&start)
                    .chain(path)
                    .tuple_windows()
                    .all(|(a, b)| a.is_orthogonally_adjacent(b))
        }
    }
}

fn validate(grid: &PathingGrid, start: Cell, end: Cell) -> Result<()> {
    if grid.is_empty() {
        return Err(SearchError::invalid_grid("grid has no cells"));
    }
    for (endpoint, cell) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        let reason = if !grid.in_bounds(cell) {
            EndpointFault::OutOfBounds
        } else if grid.is_wall(cell) {
            EndpointFault::Wall
        } else {
            continue;
        };
        return Err(SearchError::InvalidEndpoint {
            endpoint,
            cell,
            reason,
        });
    }
    Ok(())
}

/// Walks the predecessor links back from `goal_ix`, stopping before the start, and returns the
/// cells in travel order.
fn reconstruct_path(
    grid: &PathingGrid,
    state: &SearchState,
    start_ix: usize,
    goal_ix: usize,
) -> Vec<Cell> {
    let mut path: Vec<Cell> = std::iter::successors(Some(goal_ix), |&ix| state.predecessor(ix))
        .take_while(|&ix| ix != start_ix)
        .map(|ix| grid.cell_at(ix))
        .collect();
    path.reverse();
    debug_assert!(
        path.first()
            .map_or(true, |c| state.predecessor(grid.index(*c)) == Some(start_ix)),
        "predecessor chain does not reach the start"
    );
    path
}

/// Runs `solver` on `grid` from `start` to `end`.
///
/// The start cell gets distance 0 and enters the frontier. Cells are then popped according to
/// the solver's frontier; a popped cell that is already closed is skipped, and popping the end
/// cell stops the search. Every other popped cell is recorded (unless it is the start), closed,
/// and its open, unclosed neighbours are relaxed according to [GridSolver::relaxation].
///
/// Exhausting the frontier without reaching the end is not an error: the result then has an
/// empty path and lists every cell that could be reached.
pub fn search<S>(
    solver: &S,
    grid: &PathingGrid,
    start: Cell,
    end: Cell,
    config: &SearchConfig,
) -> Result<SearchResult>
where
    S: GridSolver + ?Sized,
{
    validate(grid, start, end)?;
    debug!(
        "Starting {} from {} to {} on {}x{} grid",
        solver.algorithm(),
        start,
        end,
        grid.rows(),
        grid.cols()
    );
    let start_ix = grid.index(start);
    let goal_ix = grid.index(end);
    let relaxation = solver.relaxation();

    let mut state = SearchState::new(grid.len());
    let mut frontier = S::Frontier::default();
    let mut visited_in_order = Vec::new();
    let mut expanded = 0;

    state.set_start(start_ix);
    frontier.push(start_ix, solver.priority(0, &start, &end));

    while let Some(ix) = frontier.pop() {
        // A cell may sit in the frontier more than once if it was pushed again after improvement
        if state.is_visited(ix) {
            continue;
        }
        let cell = grid.cell_at(ix);
        if ix == goal_ix {
            let path = reconstruct_path(grid, &state, start_ix, goal_ix);
            debug!(
                "{} reached {} after expanding {} cells, path length {}",
                solver.algorithm(),
                end,
                expanded,
                path.len()
            );
            return Ok(SearchResult {
                visited_in_order,
                path,
                reached_goal: true,
            });
        }

        expanded += 1;
        if config.budget_exceeded(expanded) {
            let budget = config.node_budget.unwrap_or_default();
            warn!(
                "{} aborted after exceeding node budget of {}",
                solver.algorithm(),
                budget
            );
            return Err(SearchError::NodeBudgetExceeded { budget });
        }

        let distance = state.distance(ix);
        if ix != start_ix {
            visited_in_order.push(VisitedRecord { cell, distance });
        }
        state.close(ix);
        trace!("Expanded {} at distance {}", cell, distance);

        for neighbour in grid.open_neighbours(cell) {
            let n_ix = grid.index(neighbour);
            if state.is_visited(n_ix) {
                continue;
            }
            let candidate = distance + 1;
            let eligible = match relaxation {
                Relaxation::FirstDiscovery => !state.is_discovered(n_ix),
                Relaxation::Improve => candidate < state.distance(n_ix),
                Relaxation::OpenSet => {
                    !frontier.contains(n_ix) || candidate < state.distance(n_ix)
                }
            };
            if eligible {
                state.discover(n_ix, candidate, ix);
                frontier.push(n_ix, solver.priority(candidate, &neighbour, &end));
            }
        }
    }

    debug!(
        "{} exhausted the frontier after expanding {} cells, {} is unreachable from {}",
        solver.algorithm(),
        expanded,
        end,
        start
    );
    Ok(SearchResult {
        visited_in_order,
        path: Vec::new(),
        reached_goal: false,
    })
}
