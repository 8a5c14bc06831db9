// store.rs — GoalStore: the ordered channel lineup.
//
// An in-memory, append-only collection of goals. Channel numbers are
// positions in this vector, so the store never deletes or reorders —
// a channel keeps its number for the life of the session.
//
// Mutation is limited to `append` and `update_progress`.

use crate::error::GoalError;
use crate::goal::{Category, Goal};

/// What a progress mutation observably did.
///
/// Callers use this to pick a sound cue: completion gets a fanfare,
/// a partial advance gets a click, an already-finished goal gets silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressUpdate {
    /// The goal was already at its target before the call; nothing changed.
    AlreadyComplete,

    /// Steps advanced. `completed` is true when this call reached the target.
    Advanced { completed: bool },
}

/// Ordered in-memory lineup of goals.
#[derive(Debug, Default)]
pub struct GoalStore {
    goals: Vec<Goal>,
}

impl GoalStore {
    /// Create an empty lineup.
    pub fn new() -> Self {
        Self { goals: Vec::new() }
    }

    /// The stock lineup every session starts from.
    pub fn seed_lineup() -> Self {
        Self {
            goals: vec![
                Goal::seeded(
                    "1",
                    "Morning Jog",
                    "The daily race against the sunrise.",
                    Category::Sports,
                    6,
                    30,
                ),
                Goal::seeded(
                    "2",
                    "Learn React",
                    "A thrilling drama of components and hooks.",
                    Category::Documentary,
                    45,
                    100,
                ),
                Goal::seeded(
                    "3",
                    "Drink Water",
                    "Hydration Station: Stay liquid, stay alive.",
                    Category::News,
                    6,
                    8,
                ),
            ],
        }
    }

    /// Add a goal to the end of the lineup.
    ///
    /// Id uniqueness is the caller's contract; the store does not index by id.
    pub fn append(&mut self, goal: Goal) {
        tracing::debug!(id = %goal.id, title = %goal.title, "goal appended to lineup");
        self.goals.push(goal);
    }

    /// Get the goal at a channel index.
    pub fn get(&self, index: usize) -> Result<&Goal, GoalError> {
        self.goals.get(index).ok_or(GoalError::OutOfRange {
            index,
            len: self.goals.len(),
        })
    }

    /// Advance the goal at `index` by `delta` steps, clamped to its target.
    ///
    /// A goal that already reached its target is left untouched and reported
    /// as [`ProgressUpdate::AlreadyComplete`].
    pub fn update_progress(
        &mut self,
        index: usize,
        delta: u32,
    ) -> Result<ProgressUpdate, GoalError> {
        let len = self.goals.len();
        let goal = self
            .goals
            .get_mut(index)
            .ok_or(GoalError::OutOfRange { index, len })?;

        if goal.is_complete() {
            return Ok(ProgressUpdate::AlreadyComplete);
        }

        goal.current_steps = goal.current_steps.saturating_add(delta).min(goal.total_steps);
        Ok(ProgressUpdate::Advanced {
            completed: goal.is_complete(),
        })
    }

    /// Position of the goal with the given id, if present.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.goals.iter().position(|g| g.id == id)
    }

    /// Number of channels in the lineup.
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Whether the lineup is empty (the "no signal" case).
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Iterate the lineup in channel order.
    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_goal_store() -> GoalStore {
        let mut store = GoalStore::new();
        store.append(Goal::seeded("a", "Goal A", "d", Category::Drama, 0, 30));
        store.append(Goal::seeded("b", "Goal B", "d", Category::Sports, 45, 100));
        store
    }

    #[test]
    fn seed_lineup_matches_stock_programming() {
        let store = GoalStore::seed_lineup();
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).unwrap().title, "Morning Jog");
        assert_eq!(store.get(1).unwrap().category, Category::Documentary);
        assert_eq!(store.get(2).unwrap().progress(), 75);
    }

    #[test]
    fn get_out_of_range_fails() {
        let store = two_goal_store();
        let err = store.get(2).unwrap_err();
        assert!(matches!(err, GoalError::OutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn progress_clamps_to_total() {
        let mut store = two_goal_store();
        let update = store.update_progress(1, 60).unwrap();
        assert_eq!(update, ProgressUpdate::Advanced { completed: true });
        assert_eq!(store.get(1).unwrap().current_steps, 100);
    }

    #[test]
    fn partial_advance_is_not_completion() {
        let mut store = two_goal_store();
        let update = store.update_progress(0, 10).unwrap();
        assert_eq!(update, ProgressUpdate::Advanced { completed: false });
        assert_eq!(store.get(0).unwrap().current_steps, 10);
    }

    #[test]
    fn completed_goal_is_left_untouched() {
        let mut store = two_goal_store();
        store.update_progress(1, 60).unwrap();
        let update = store.update_progress(1, 5).unwrap();
        assert_eq!(update, ProgressUpdate::AlreadyComplete);
        assert_eq!(store.get(1).unwrap().current_steps, 100);
    }

    #[test]
    fn huge_delta_does_not_overflow() {
        let mut store = two_goal_store();
        let update = store.update_progress(0, u32::MAX).unwrap();
        assert_eq!(update, ProgressUpdate::Advanced { completed: true });
        assert_eq!(store.get(0).unwrap().current_steps, 30);
    }

    #[test]
    fn update_out_of_range_fails() {
        let mut store = two_goal_store();
        assert!(store.update_progress(7, 1).is_err());
    }

    #[test]
    fn position_of_finds_by_id() {
        let store = two_goal_store();
        assert_eq!(store.position_of("b"), Some(1));
        assert_eq!(store.position_of("zz"), None);
    }

    #[test]
    fn append_keeps_channel_order() {
        let mut store = two_goal_store();
        store.append(Goal::new("Goal C", "d", Category::News, 5));
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(2).unwrap().title, "Goal C");
        // Existing channels keep their numbers.
        assert_eq!(store.position_of("a"), Some(0));
    }
}
