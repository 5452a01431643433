//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions across entity lifecycle statuses (caregiver applications
//! being the main one).

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for ApplicationStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (NotSubmitted, Pending) |
///             (Pending, Approved) |
///             // ... etc
///         )
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             NotSubmitted => vec![Pending],
///             Pending => vec![Approved, Denied],
///             // ... etc
///         }
///     }
/// }
///
/// // Usage:
/// let new_status = current_status.transition_to(ApplicationStatus::Approved)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    ///
    /// This is the preferred way to change state, as it ensures
    /// the transition is valid according to the state machine rules.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test enum for StateMachine trait
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestPhase {
        Idle,
        Running,
        Done,
        Failed,
    }

    impl StateMachine for TestPhase {
        fn can_transition_to(&self, target: &Self) -> bool {
            use TestPhase::*;
            matches!(
                (self, target),
                (Idle, Running) | (Running, Done) | (Running, Failed) | (Failed, Running)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use TestPhase::*;
            match self {
                Idle => vec![Running],
                Running => vec![Done, Failed],
                Done => vec![],
                Failed => vec![Running],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        let phase = TestPhase::Idle;
        let result = phase.transition_to(TestPhase::Running);
        assert_eq!(result, Ok(TestPhase::Running));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let phase = TestPhase::Idle;
        let result = phase.transition_to(TestPhase::Done);
        assert!(result.is_err());
    }

    #[test]
    fn is_terminal_only_for_states_without_exits() {
        assert!(TestPhase::Done.is_terminal());
        assert!(!TestPhase::Idle.is_terminal());
        assert!(!TestPhase::Failed.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for phase in [
            TestPhase::Idle,
            TestPhase::Running,
            TestPhase::Done,
            TestPhase::Failed,
        ] {
            for valid_target in phase.valid_transitions() {
                assert!(
                    phase.can_transition_to(&valid_target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    phase,
                    valid_target
                );
            }
        }
    }
}
