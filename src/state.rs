use crate::UNREACHED;

/// Bookkeeping for a single cell during one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeState {
    /// Best known distance from the start, [UNREACHED] until the cell is discovered.
    pub distance: u32,
    /// Flat index of the cell this one was reached from. Only used to rebuild the path.
    pub predecessor: Option<usize>,
    /// Expanded (closed).
    pub visited: bool,
}

impl Default for NodeState {
    fn default() -> NodeState {
        NodeState {
            distance: UNREACHED,
            predecessor: None,
            visited: false,
        }
    }
}

/// Per-search arena of [NodeState] entries indexed like [PathingGrid::index](crate::PathingGrid::index).
/// Predecessors are stored as indices into the same arena, so the back-pointer graph holds no
/// references and the whole state is discarded in one piece once the search returns.
#[derive(Clone, Debug)]
pub struct SearchState {
    nodes: Vec<NodeState>,
}

impl SearchState {
    pub fn new(len: usize) -> SearchState {
        SearchState {
            nodes: vec![NodeState::default(); len],
        }
    }

    pub fn node(&self, ix: usize) -> &NodeState {
        &self.nodes[ix]
    }

    pub fn distance(&self, ix: usize) -> u32 {
        self.nodes[ix].distance
    }

    pub fn is_discovered(&self, ix: usize) -> bool {
        self.nodes[ix].distance != UNREACHED
    }

    pub fn is_visited(&self, ix: usize) -> bool {
        self.nodes[ix].visited
    }

    pub fn set_start(&mut self, ix: usize) {
        self.nodes[ix].distance = 0;
    }

    /// Records that `ix` is reachable at `distance` via `predecessor`. Distances only ever go down.
    pub fn discover(&mut self, ix: usize, distance: u32, predecessor: usize) {
        let node = &mut self.nodes[ix];
        debug_assert!(distance < node.distance);
        debug_assert!(!node.visited);
        node.distance = distance;
        node.predecessor = Some(predecessor);
    }

    pub fn close(&mut self, ix: usize) {
        self.nodes[ix].visited = true;
    }

    pub fn predecessor(&self, ix: usize) -> Option<usize> {
        self.nodes[ix].predecessor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_unreached() {
        let state = SearchState::new(4);
        for ix in 0..4 {
            assert_eq!(*state.node(ix), NodeState::default());
            assert!(!state.is_discovered(ix));
        }
    }

    #[test]
    fn discover_lowers_distance() {
        let mut state = SearchState::new(3);
        state.set_start(0);
        state.discover(2, 5, 0);
        state.discover(2, 3, 1);
        assert_eq!(state.distance(2), 3);
        assert_eq!(state.predecessor(2), Some(1));
        state.close(2);
        assert!(state.is_visited(2));
        assert_eq!(state.predecessor(0), None);
    }
}
