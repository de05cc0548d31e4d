//! Frontier disciplines: LIFO stack, FIFO queue, and a cost-ordered priority
//! frontier with push-or-update semantics.
//!
//! All three hold [`NodeId`]s into the caller's arena plus a position index
//! for membership tests. Membership uses `BTreeMap` (not `HashMap`) so that
//! nothing in the frontier depends on hasher state.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, VecDeque};

use waypoint_kernel::grid::Position;

use crate::node::{FrontierKey, NodeId, SearchNode};

/// Which end(s) of the frontier nodes enter and leave by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Push and pop at the same end (depth-first).
    Lifo,
    /// Push at the back, pop at the front (breadth-first, iterative deepening).
    Fifo,
    /// Pop lowest `(f_cost, creation_order)` first (uniform-cost, A*).
    Priority,
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lifo => f.write_str("lifo"),
            Self::Fifo => f.write_str("fifo"),
            Self::Priority => f.write_str("priority"),
        }
    }
}

/// What [`Frontier::insert`] did with the offered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The node was added; the frontier grew by one.
    Inserted,
    /// A same-position entry with a higher total cost was replaced; size unchanged.
    Replaced,
    /// A same-position entry at equal or lower total cost already existed; nothing changed.
    Discarded,
}

/// The set of generated-but-not-yet-expanded nodes.
pub trait Frontier {
    fn discipline(&self) -> Discipline;

    /// Offer a node to the frontier.
    ///
    /// Stack and queue frontiers always insert; callers filter duplicates with
    /// [`Frontier::contains`] first. The priority frontier resolves duplicates
    /// itself (push-or-update).
    fn insert(&mut self, node: &SearchNode) -> Admission;

    /// Remove and return the next node per discipline.
    fn pop(&mut self) -> Option<NodeId>;

    /// The node [`Frontier::pop`] would return, without removing it.
    fn peek(&self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a node at `position` is currently waiting in the frontier.
    fn contains(&self, position: Position) -> bool;

    /// Largest `len()` observed since construction, counting every insert.
    fn high_water(&self) -> u64;

    /// `true` if [`Frontier::insert`] handles same-position entries itself,
    /// so the expansion loop must not pre-filter on frontier membership.
    fn resolves_duplicates(&self) -> bool {
        self.discipline() == Discipline::Priority
    }
}

impl<F: Frontier + ?Sized> Frontier for Box<F> {
    fn discipline(&self) -> Discipline {
        (**self).discipline()
    }

    fn insert(&mut self, node: &SearchNode) -> Admission {
        (**self).insert(node)
    }

    fn pop(&mut self) -> Option<NodeId> {
        (**self).pop()
    }

    fn peek(&self) -> Option<NodeId> {
        (**self).peek()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn contains(&self, position: Position) -> bool {
        (**self).contains(position)
    }

    fn high_water(&self) -> u64 {
        (**self).high_water()
    }

    fn resolves_duplicates(&self) -> bool {
        (**self).resolves_duplicates()
    }
}

/// Position multiset shared by the stack and queue frontiers.
#[derive(Debug, Default)]
struct Membership {
    counts: BTreeMap<Position, usize>,
}

impl Membership {
    fn add(&mut self, position: Position) {
        *self.counts.entry(position).or_insert(0) += 1;
    }

    fn remove(&mut self, position: Position) {
        if let Some(count) = self.counts.get_mut(&position) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&position);
            }
        }
    }

    fn contains(&self, position: Position) -> bool {
        self.counts.contains_key(&position)
    }
}

fn bump(high_water: &mut u64, len: usize) {
    *high_water = (*high_water).max(len as u64);
}

/// LIFO frontier for depth-first search.
#[derive(Debug, Default)]
pub struct StackFrontier {
    entries: Vec<(NodeId, Position)>,
    members: Membership,
    high_water: u64,
}

impl StackFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn discipline(&self) -> Discipline {
        Discipline::Lifo
    }

    fn insert(&mut self, node: &SearchNode) -> Admission {
        self.entries.push((node.node_id, node.position));
        self.members.add(node.position);
        bump(&mut self.high_water, self.entries.len());
        Admission::Inserted
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (id, position) = self.entries.pop()?;
        self.members.remove(position);
        Some(id)
    }

    fn peek(&self) -> Option<NodeId> {
        self.entries.last().map(|&(id, _)| id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, position: Position) -> bool {
        self.members.contains(position)
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// FIFO frontier for breadth-first and iterative-deepening search.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    entries: VecDeque<(NodeId, Position)>,
    members: Membership,
    high_water: u64,
}

impl QueueFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn discipline(&self) -> Discipline {
        Discipline::Fifo
    }

    fn insert(&mut self, node: &SearchNode) -> Admission {
        self.entries.push_back((node.node_id, node.position));
        self.members.add(node.position);
        bump(&mut self.high_water, self.entries.len());
        Admission::Inserted
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (id, position) = self.entries.pop_front()?;
        self.members.remove(position);
        Some(id)
    }

    fn peek(&self) -> Option<NodeId> {
        self.entries.front().map(|&(id, _)| id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, position: Position) -> bool {
        self.members.contains(position)
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// A heap entry. `BinaryHeap` is a max-heap, so entries are stored under
/// `Reverse` to pop the lowest key first.
#[derive(Debug, Clone, Copy)]
struct PriorityEntry {
    key: FrontierKey,
    node_id: NodeId,
    position: Position,
}

impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PriorityEntry {}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Binary-heap frontier ordered ascending by `(f_cost, creation_order)`.
///
/// Holds at most one entry per position. `best` maps each queued position to
/// the key of its entry, so membership and the "is the newcomer cheaper?"
/// check are O(log n).
///
/// Replacing an entry is **O(n)**: the heap is drained, the stale entry is
/// dropped, and the heap is rebuilt. That is the price of decrease-key on a
/// plain `BinaryHeap` and is fine for grid sizes this crate targets.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<PriorityEntry>>,
    best: BTreeMap<Position, FrontierKey>,
    high_water: u64,
}

impl PriorityFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The queued `f_cost` for `position`, if any.
    #[must_use]
    pub fn queued_cost(&self, position: Position) -> Option<i64> {
        self.best.get(&position).map(|key| key.f_cost)
    }

    /// Insert `node`, or replace the same-position entry if `node` is strictly
    /// cheaper, or discard `node`.
    pub fn push_or_update(&mut self, node: &SearchNode) -> Admission {
        let key = FrontierKey::from(node);
        let entry = PriorityEntry {
            key,
            node_id: node.node_id,
            position: node.position,
        };
        match self.best.get(&node.position) {
            Some(existing) if key.f_cost < existing.f_cost => {
                let mut entries = std::mem::take(&mut self.heap).into_vec();
                entries.retain(|Reverse(e)| e.position != node.position);
                entries.push(Reverse(entry));
                self.heap = BinaryHeap::from(entries);
                self.best.insert(node.position, key);
                Admission::Replaced
            }
            Some(_) => Admission::Discarded,
            None => {
                self.heap.push(Reverse(entry));
                self.best.insert(node.position, key);
                bump(&mut self.high_water, self.heap.len());
                Admission::Inserted
            }
        }
    }
}

impl Frontier for PriorityFrontier {
    fn discipline(&self) -> Discipline {
        Discipline::Priority
    }

    fn insert(&mut self, node: &SearchNode) -> Admission {
        self.push_or_update(node)
    }

    fn pop(&mut self) -> Option<NodeId> {
        let Reverse(entry) = self.heap.pop()?;
        self.best.remove(&entry.position);
        Some(entry.node_id)
    }

    fn peek(&self) -> Option<NodeId> {
        self.heap.peek().map(|Reverse(e)| e.node_id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains(&self, position: Position) -> bool {
        self.best.contains_key(&position)
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}
