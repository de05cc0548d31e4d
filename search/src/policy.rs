//! Search policy: budgets and goal-test timing.

use crate::error::SearchError;
use crate::frontier::Discipline;

/// When a node is compared against the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalTestTiming {
    /// Test a node when it is popped for expansion. Required for cost-optimal
    /// strategies; the default everywhere.
    #[default]
    OnExpansion,
    /// Test each child as it is generated. Saves one frontier layer for
    /// stack and queue disciplines; never valid for a priority frontier.
    OnGeneration,
}

/// Budgets and timing knobs shared by every strategy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Hard cap on pop/expand cycles (summed across all IDS passes).
    /// `None` runs until the goal is found or the frontier empties.
    pub max_iterations: Option<u64>,
    pub goal_test: GoalTestTiming,
    /// Largest depth bound iterative deepening will try. `None` means the
    /// grid's cell count, which no simple path can exceed.
    pub max_depth_bound: Option<u32>,
}

impl SearchPolicy {
    /// Policy with an iteration cap and defaults elsewhere.
    #[must_use]
    pub fn with_max_iterations(limit: u64) -> Self {
        Self {
            max_iterations: Some(limit),
            ..Self::default()
        }
    }

    /// Reject settings that can never run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero iteration cap or a
    /// zero depth bound.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_iterations == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_iterations must be at least 1".into(),
            });
        }
        if self.max_depth_bound == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_depth_bound must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// [`SearchPolicy::validate`] plus the checks that depend on the
    /// frontier discipline.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if [`SearchPolicy::validate`]
    /// fails, or if generation-time goal testing is combined with a priority
    /// frontier (it would return the first-generated goal, not the cheapest).
    pub fn validate_for(&self, discipline: Discipline) -> Result<(), SearchError> {
        self.validate()?;
        if self.goal_test == GoalTestTiming::OnGeneration && discipline == Discipline::Priority {
            return Err(SearchError::InvalidPolicy {
                detail: "goal test on generation is not allowed with a priority frontier".into(),
            });
        }
        Ok(())
    }
}
