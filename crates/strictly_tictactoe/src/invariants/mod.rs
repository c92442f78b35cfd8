//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every mutation.
//! They are testable independently and serve as documentation of the
//! guarantees [`GameState`](crate::GameState) makes to its views.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod alternating_marks;
pub mod cursor_in_bounds;
pub mod monotonic_history;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    CursorInBoundsInvariant,
    MonotonicHistoryInvariant,
    AlternatingMarksInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, ListOrder, Snapshot};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let mut game = GameState::new();
        for cell in [0, 4, 1, 5] {
            game.apply_move(cell).expect("legal move");
        }
        game.jump_to(2).expect("step exists");
        game.apply_move(8).expect("legal move");
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let game = GameState {
            history: Vec::new(),
            current_index: 3,
            list_order: ListOrder::Ascending,
        };
        let violations = GameInvariants::check_all(&game).expect_err("empty history is invalid");
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, CursorInBoundsInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (CursorInBoundsInvariant, AlternatingMarksInvariant);
        let game = GameState {
            history: vec![Snapshot::start()],
            current_index: 0,
            list_order: ListOrder::Descending,
        };
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
