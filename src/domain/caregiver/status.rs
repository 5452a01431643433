//! Caregiver application status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Vetting state of a caregiver application.
///
/// `NotSubmitted` names the state of a user with no stored profile; a
/// stored profile starts at `Pending`. Every state may re-enter `Pending`
/// through re-application, which is how an approved caregiver who edits
/// their application lands back in the review queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// No application on file.
    NotSubmitted,

    /// Awaiting a staff decision. No caregiver privileges yet.
    Pending,

    /// Vetted and cleared to offer care.
    Approved,

    /// Rejected. May re-apply, which resets to Pending.
    Denied,
}

impl ApplicationStatus {
    /// Returns true once a staff decision cleared this application.
    pub fn is_approved(&self) -> bool {
        matches!(self, ApplicationStatus::Approved)
    }

    /// Returns true while the application sits in the review queue.
    pub fn is_pending(&self) -> bool {
        matches!(self, ApplicationStatus::Pending)
    }
}

impl StateMachine for ApplicationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ApplicationStatus::*;
        matches!(
            (self, target),
            // First application
            (NotSubmitted, Pending)
            // Staff decision
                | (Pending, Approved)
                | (Pending, Denied)
            // Re-application (including overwriting a pending one)
                | (Pending, Pending)
                | (Approved, Pending)
                | (Denied, Pending)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ApplicationStatus::*;
        match self {
            NotSubmitted => vec![Pending],
            Pending => vec![Approved, Denied, Pending],
            Approved => vec![Pending],
            Denied => vec![Pending],
        }
    }
}
