//! Strategy and heuristic selectors.
//!
//! Selector names are parsed up front so that an unknown name fails before
//! any grid traversal begins.

use std::str::FromStr;

use crate::error::SearchError;
use crate::frontier::{Discipline, Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use crate::heuristic::{EuclideanHeuristic, Heuristic, ManhattanHeuristic, ZeroHeuristic};

/// The five search strategies. Each is a frontier discipline plus a few
/// flags over the one shared expansion loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
    IterativeDeepening,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
        Strategy::IterativeDeepening,
    ];

    /// Selector name accepted by [`Strategy::from_str`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
            Self::IterativeDeepening => "ids",
        }
    }

    #[must_use]
    pub const fn discipline(self) -> Discipline {
        match self {
            Self::DepthFirst => Discipline::Lifo,
            Self::BreadthFirst | Self::IterativeDeepening => Discipline::Fifo,
            Self::UniformCost | Self::AStar => Discipline::Priority,
        }
    }

    /// Only A* orders by a nonzero heuristic.
    #[must_use]
    pub const fn uses_heuristic(self) -> bool {
        matches!(self, Self::AStar)
    }

    #[must_use]
    pub const fn is_depth_bounded(self) -> bool {
        matches!(self, Self::IterativeDeepening)
    }

    /// A fresh, empty frontier of this strategy's discipline.
    #[must_use]
    pub fn new_frontier(self) -> Box<dyn Frontier> {
        match self.discipline() {
            Discipline::Lifo => Box::new(StackFrontier::new()),
            Discipline::Fifo => Box::new(QueueFrontier::new()),
            Discipline::Priority => Box::new(PriorityFrontier::new()),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == lowered)
            .ok_or_else(|| SearchError::UnknownStrategy { name: s.to_owned() })
    }
}

/// The built-in heuristics, by selector name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeuristicKind {
    #[default]
    Zero,
    Manhattan,
    Euclidean,
}

static ZERO: ZeroHeuristic = ZeroHeuristic;
static MANHATTAN: ManhattanHeuristic = ManhattanHeuristic;
static EUCLIDEAN: EuclideanHeuristic = EuclideanHeuristic;

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::Zero,
        HeuristicKind::Manhattan,
        HeuristicKind::Euclidean,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        }
    }

    #[must_use]
    pub fn heuristic(self) -> &'static dyn Heuristic {
        match self {
            Self::Zero => &ZERO,
            Self::Manhattan => &MANHATTAN,
            Self::Euclidean => &EUCLIDEAN,
        }
    }
}

impl std::fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lowered)
            .ok_or_else(|| SearchError::UnknownHeuristic { name: s.to_owned() })
    }
}

/// Strategy plus heuristic selection for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// The heuristic as selected. Only A* consults it; see
    /// [`SearchConfig::effective_heuristic`].
    pub heuristic: HeuristicKind,
    /// Whether `heuristic` was named explicitly rather than defaulted.
    pub heuristic_explicit: bool,
}

impl SearchConfig {
    /// A config with the strategy's default heuristic (Manhattan for A*,
    /// zero otherwise).
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        let heuristic = if strategy.uses_heuristic() {
            HeuristicKind::Manhattan
        } else {
            HeuristicKind::Zero
        };
        Self {
            strategy,
            heuristic,
            heuristic_explicit: false,
        }
    }

    #[must_use]
    pub const fn with_heuristic(strategy: Strategy, heuristic: HeuristicKind) -> Self {
        Self {
            strategy,
            heuristic,
            heuristic_explicit: true,
        }
    }

    /// Parse selector names.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownStrategy`] or
    /// [`SearchError::UnknownHeuristic`] for an unrecognized name.
    pub fn parse(strategy: &str, heuristic: Option<&str>) -> Result<Self, SearchError> {
        let strategy: Strategy = strategy.parse()?;
        match heuristic {
            Some(name) => Ok(Self::with_heuristic(strategy, name.parse()?)),
            None => Ok(Self::new(strategy)),
        }
    }

    /// The heuristic the expansion loop actually uses: the selected one for
    /// A*, zero for everything else.
    #[must_use]
    pub fn effective_heuristic(&self) -> &'static dyn Heuristic {
        if self.strategy.uses_heuristic() {
            self.heuristic.heuristic()
        } else {
            HeuristicKind::Zero.heuristic()
        }
    }

    /// `true` if a heuristic was named for a strategy that will not use it.
    #[must_use]
    pub fn ignores_heuristic(&self) -> bool {
        self.heuristic_explicit
            && !self.strategy.uses_heuristic()
            && self.heuristic != HeuristicKind::Zero
    }
}
