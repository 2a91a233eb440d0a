#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-call search settings. The default places no limit on the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Upper bound on the number of cells expanded before the search gives up with
    /// [SearchError::NodeBudgetExceeded](crate::SearchError::NodeBudgetExceeded).
    #[cfg_attr(feature = "serde", serde(default))]
    pub node_budget: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        SearchConfig::default()
    }

    pub fn with_node_budget(mut self, budget: usize) -> SearchConfig {
        self.node_budget = Some(budget);
        self
    }

    /// Whether `expanded` cells already exceed the budget.
    pub(crate) fn budget_exceeded(&self, expanded: usize) -> bool {
        self.node_budget.is_some_and(|budget| expanded > budget)
    }
}
