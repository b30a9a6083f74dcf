//! Core data model: goal ids, goal records, and the owned list.

use std::fmt;

use uuid::Uuid;

/// Opaque identifier for a goal.
///
/// Generated once at creation and never reused; list rows bind their
/// deletion requests to it. UUIDv4 underneath, so collisions are
/// negligible at any scale this app will see — no collision check is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalId(Uuid);

impl GoalId {
    /// Generates a fresh identifier, distinct from every existing one
    /// with overwhelming probability.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single user-entered goal.
///
/// The text is kept exactly as typed — empty strings included — and is
/// immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: GoalId,
    pub text: String,
}

/// The ordered list of goals, insertion order preserved.
///
/// Append-only except for explicit removal by id. Lives only in memory;
/// process exit destroys it.
#[derive(Debug, Default)]
pub struct GoalList {
    goals: Vec<Goal>,
}

impl GoalList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new goal with a fresh id and returns that id.
    ///
    /// Pre-existing goals keep their order; the list grows by exactly one.
    pub fn add(&mut self, text: impl Into<String>) -> GoalId {
        let goal = Goal {
            id: GoalId::fresh(),
            text: text.into(),
        };
        let id = goal.id;
        self.goals.push(goal);
        id
    }

    /// Removes every goal whose id matches — at most one, since ids are
    /// unique.
    ///
    /// Returns `false` when no goal carried the id; a miss leaves the list
    /// untouched, and survivors keep their relative order either way.
    pub fn remove(&mut self, id: GoalId) -> bool {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != id);
        self.goals.len() < before
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Goal> {
        self.goals.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_at_the_end() {
        let mut list = GoalList::new();
        list.add("Run 5k");
        list.add("Read a book");

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().text, "Run 5k");
        assert_eq!(list.get(1).unwrap().text, "Read a book");
    }

    #[test]
    fn ids_are_pairwise_distinct() {
        let mut list = GoalList::new();
        let ids: Vec<GoalId> = (0..32).map(|i| list.add(format!("goal {i}"))).collect();

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn remove_hits_exactly_one_and_keeps_order() {
        let mut list = GoalList::new();
        let first = list.add("first");
        list.add("second");
        list.add("third");

        assert!(list.remove(first));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().text, "second");
        assert_eq!(list.get(1).unwrap().text, "third");
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut list = GoalList::new();
        list.add("keep me");

        assert!(!list.remove(GoalId::fresh()));

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().text, "keep me");
    }

    #[test]
    fn removing_twice_misses_the_second_time() {
        let mut list = GoalList::new();
        let id = list.add("once");

        assert!(list.remove(id));
        assert!(!list.remove(id));
        assert!(list.is_empty());
    }

    #[test]
    fn empty_text_is_accepted() {
        let mut list = GoalList::new();
        list.add("");

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().text, "");
    }
}
