//! Exploration-order policies. The frontier holds discovered cells that still await
//! expansion; which one it hands out next is what tells the algorithms apart.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Open set of flat cell indices.
pub trait Frontier: Default {
    /// Adds a cell with the given priority. Pushing a cell that is already present updates its
    /// priority. Priorities are ignored by the FIFO and LIFO frontiers.
    fn push(&mut self, ix: usize, priority: u32);
    /// Removes the next cell according to the removal policy.
    fn pop(&mut self) -> Option<usize>;
    fn contains(&self, ix: usize) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Clone, Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<usize>,
    members: FxHashSet<usize>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, ix: usize, _priority: u32) {
        if self.members.insert(ix) {
            self.queue.push_back(ix);
        }
    }
    fn pop(&mut self) -> Option<usize> {
        let ix = self.queue.pop_front()?;
        self.members.remove(&ix);
        Some(ix)
    }
    fn contains(&self, ix: usize) -> bool {
        self.members.contains(&ix)
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Clone, Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<usize>,
    members: FxHashSet<usize>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, ix: usize, _priority: u32) {
        if self.members.insert(ix) {
            self.stack.push(ix);
        }
    }
    fn pop(&mut self) -> Option<usize> {
        let ix = self.stack.pop()?;
        self.members.remove(&ix);
        Some(ix)
    }
    fn contains(&self, ix: usize) -> bool {
        self.members.contains(&ix)
    }
    fn len(&self) -> usize {
        self.stack.len()
    }
}

struct SmallestCostHolder {
    priority: u32,
    sequence: u64,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: smallest priority first, then the earliest inserted cell
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Min-priority frontier backed by a [BinaryHeap]. Ties go to the cell that entered the
/// frontier first; a cell keeps its first sequence number when its priority is lowered.
///
/// Priority updates push a fresh heap entry and leave the old one in place; [pop](Frontier::pop)
/// discards entries that no longer match the priority recorded in the open map.
#[derive(Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<SmallestCostHolder>,
    open: FxIndexMap<usize, (u32, u64)>,
    next_sequence: u64,
}

impl PriorityFrontier {
    /// Current priority of a cell in the frontier.
    pub fn priority(&self, ix: usize) -> Option<u32> {
        self.open.get(&ix).map(|&(priority, _)| priority)
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, ix: usize, priority: u32) {
        let sequence = match self.open.entry(ix) {
            Vacant(e) => {
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                e.insert((priority, sequence));
                sequence
            }
            Occupied(mut e) => {
                let sequence = e.get().1;
                e.insert((priority, sequence));
                sequence
            }
        };
        self.heap.push(SmallestCostHolder {
            priority,
            sequence,
            index: ix,
        });
    }

    fn pop(&mut self) -> Option<usize> {
        while let Some(SmallestCostHolder {
            priority, index, ..
        }) = self.heap.pop()
        {
            match self.open.get(&index) {
                Some(&(current, _)) if current == priority => {
                    self.open.swap_remove(&index);
                    return Some(index);
                }
                // Superseded by a later push
                _ => continue,
            }
        }
        None
    }

    fn contains(&self, ix: usize) -> bool {
        self.open.contains_key(&ix)
    }

    fn len(&self) -> usize {
        self.open.len()
    }
}
