//! Identity Port - Interface for resolving the acting user.
//!
//! The boundary layer owns sessions, tokens, and cookies; the engine only
//! ever asks one question: who is acting right now? The answer is joined
//! against the snapshot on every operation so role changes take effect
//! immediately, mid-session.

use crate::domain::foundation::UserId;

/// Port for resolving the current actor, however the session was
/// established.
pub trait IdentityResolver: Send + Sync {
    /// Returns the acting user's id, or `None` when nobody is signed in.
    fn current_actor_id(&self) -> Option<UserId>;
}
