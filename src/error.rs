//! Errors reported before a search starts, or when it is aborted by the node budget.
//!
//! An unreachable end cell is not an error: the search then returns an empty path
//! together with every cell it could reach.

use core::fmt;
use thiserror::Error;

use crate::cell::Cell;

/// Which endpoint of a search failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// Why an endpoint was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointFault {
    OutOfBounds,
    Wall,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EndpointFault::OutOfBounds => write!(f, "out of bounds"),
            EndpointFault::Wall => write!(f, "on a wall"),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The grid is empty, ragged, has a zero dimension or could not be parsed.
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    /// Start or end lies outside the grid or on a wall.
    #[error("invalid {endpoint} cell {cell}: {reason}")]
    InvalidEndpoint {
        endpoint: Endpoint,
        cell: Cell,
        reason: EndpointFault,
    },

    /// More cells would have been expanded than [SearchConfig::node_budget](crate::SearchConfig::node_budget) allows.
    #[error("search aborted: node budget of {budget} exceeded")]
    NodeBudgetExceeded { budget: usize },

    /// An algorithm identifier that is not one of `bfs`, `dfs`, `dijkstra`, `astar`, `greedy`.
    #[error("unknown algorithm {id:?}")]
    UnknownAlgorithm { id: String },
}

impl SearchError {
    pub(crate) fn invalid_grid(reason: impl Into<String>) -> SearchError {
        SearchError::InvalidGrid {
            reason: reason.into(),
        }
    }

    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::InvalidGrid { .. } => "INVALID_GRID",
            SearchError::InvalidEndpoint { .. } => "INVALID_ENDPOINT",
            SearchError::NodeBudgetExceeded { .. } => "NODE_BUDGET_EXCEEDED",
            SearchError::UnknownAlgorithm { .. } => "UNKNOWN_ALGORITHM",
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_error_display() {
        let err = SearchError::InvalidEndpoint {
            endpoint: Endpoint::End,
            cell: Cell::new(4, 1),
            reason: EndpointFault::Wall,
        };
        assert_eq!(err.to_string(), "invalid end cell (4, 1): on a wall");
        assert_eq!(err.code(), "INVALID_ENDPOINT");
    }

    #[test]
    fn budget_error_display() {
        let err = SearchError::NodeBudgetExceeded { budget: 12 };
        assert_eq!(err.to_string(), "search aborted: node budget of 12 exceeded");
        assert_eq!(err.code(), "NODE_BUDGET_EXCEEDED");
    }
}
