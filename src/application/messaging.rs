//! Direct messages between accounts.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{DomainError, EmailAddress, MessageId, UserId};
use crate::domain::messaging::{Message, MESSAGE_PAGE_SIZE};
use crate::domain::user::User;
use crate::ports::{Clock, IdentityResolver, Store};

use super::require_actor;

/// Email-addressed messaging.
///
/// Recipients are resolved by email. Writing to an address nobody owns
/// provisions a stub client account on the spot, so a message can always
/// be delivered; the stub turns into a real account the moment its owner
/// signs in with that email. Messages are never deleted or marked read.
pub struct MessagingService {
    store: Arc<dyn Store>,
    identity: Arc<dyn IdentityResolver>,
    clock: Arc<dyn Clock>,
}

impl MessagingService {
    pub fn new(
        store: Arc<dyn Store>,
        identity: Arc<dyn IdentityResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            identity,
            clock,
        }
    }

    /// Sends a message to an email address, provisioning a stub recipient
    /// when the address is unknown. The body is required after trimming.
    pub fn send(&self, to_email: &str, body: &str) -> Result<Message, DomainError> {
        // 1. Resolve the actor and the recipient address
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;
        let email = EmailAddress::new(to_email)?;

        // 2. Point at the existing account, or prepare a stub
        let now = self.clock.now();
        let (to_id, stub) = match snapshot.user_by_email(&email) {
            Some(existing) => (existing.id, None),
            None => {
                let stub = User::stub(UserId::new(), email.clone(), now);
                (stub.id, Some(stub))
            }
        };

        // 3. Validate the message, then commit it with the stub in one step
        let message = Message::new(MessageId::new(), actor.id, to_id, body, now)?;
        self.store.mutate(&mut |snapshot| {
            if let Some(stub) = &stub {
                if snapshot.user_by_email(&email).is_none() {
                    snapshot.users.push(stub.clone());
                }
            }
            snapshot.messages.push(message.clone());
        });

        info!(
            from = %actor.id,
            to = %to_id,
            provisioned_stub = stub.is_some(),
            "message sent"
        );
        Ok(message)
    }

    /// The actor's conversation history, sent and received alike, newest
    /// first and capped to one page.
    pub fn inbox(&self) -> Result<Vec<Message>, DomainError> {
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;

        let messages: Vec<Message> = snapshot
            .messages_involving(actor.id)
            .into_iter()
            .rev()
            .take(MESSAGE_PAGE_SIZE)
            .cloned()
            .collect();

        debug!(user_id = %actor.id, count = messages.len(), "listed inbox");
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedIdentity, ManualClock, MemoryStore};
    use crate::domain::foundation::{ErrorCode, Role, Timestamp};

    struct Harness {
        store: Arc<MemoryStore>,
        identity: Arc<FixedIdentity>,
        service: MessagingService,
    }

    fn harness() -> Harness {
        let store = Arc::new(MemoryStore::new());
        let identity = Arc::new(FixedIdentity::anonymous());
        let clock = Arc::new(ManualClock::starting_at(Timestamp::now()));
        let service = MessagingService::new(store.clone(), identity.clone(), clock);
        Harness {
            store,
            identity,
            service,
        }
    }

    impl Harness {
        fn seed_user(&self, email: &str) -> UserId {
            let id = UserId::new();
            let email = EmailAddress::new(email).unwrap();
            self.store.mutate(&mut |snapshot| {
                snapshot.users.push(User::provision(
                    id,
                    email.clone(),
                    "Test",
                    "User",
                    Role::Client,
                    Timestamp::now(),
                ));
            });
            id
        }

        fn acting_as(&self, id: UserId) {
            self.identity.set(Some(id));
        }
    }

    #[test]
    fn sending_requires_authentication() {
        let h = harness();

        let err = h.service.send("kay@example.com", "hi").unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }

    #[test]
    fn sends_to_an_existing_account() {
        let h = harness();
        let sender = h.seed_user("me@example.com");
        let recipient = h.seed_user("kay@example.com");
        h.acting_as(sender);

        let message = h.service.send("kay@example.com", "hi there").unwrap();

        assert_eq!(message.from_user_id, sender);
        assert_eq!(message.to_user_id, recipient);
        assert_eq!(message.body, "hi there");
        // No stub was needed
        assert_eq!(h.store.read().users.len(), 2);
    }

    #[test]
    fn recipient_lookup_folds_case() {
        let h = harness();
        let sender = h.seed_user("me@example.com");
        let recipient = h.seed_user("kay@example.com");
        h.acting_as(sender);

        let message = h.service.send("KAY@Example.COM", "hi").unwrap();

        assert_eq!(message.to_user_id, recipient);
        assert_eq!(h.store.read().users.len(), 2);
    }

    #[test]
    fn unknown_address_provisions_a_stub_recipient() {
        let h = harness();
        let sender = h.seed_user("me@example.com");
        h.acting_as(sender);

        let message = h.service.send("Unknown@X.com", "hello?").unwrap();

        let snapshot = h.store.read();
        let stub = snapshot.user(message.to_user_id).unwrap();
        assert_eq!(stub.email.as_str(), "unknown@x.com");
        assert_eq!(stub.first_name, "New");
        assert_eq!(stub.last_name, "User");
        assert_eq!(stub.role, Role::Client);
        assert_eq!(snapshot.messages.len(), 1);
    }

    #[test]
    fn second_message_reuses_the_stub() {
        let h = harness();
        let sender = h.seed_user("me@example.com");
        h.acting_as(sender);

        let first = h.service.send("unknown@x.com", "one").unwrap();
        let second = h.service.send("unknown@x.com", "two").unwrap();

        assert_eq!(first.to_user_id, second.to_user_id);
        assert_eq!(h.store.read().users.len(), 2);
    }

    #[test]
    fn blank_body_is_rejected_without_provisioning() {
        let h = harness();
        let sender = h.seed_user("me@example.com");
        h.acting_as(sender);

        let err = h.service.send("unknown@x.com", "   ").unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidInput);
        // The stub is not created when the message itself is invalid
        assert_eq!(h.store.read().users.len(), 1);
    }

    #[test]
    fn malformed_recipient_address_is_rejected() {
        let h = harness();
        let sender = h.seed_user("me@example.com");
        h.acting_as(sender);

        let err = h.service.send("not-an-address", "hi").unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn inbox_holds_sent_and_received_newest_first() {
        let h = harness();
        let alice = h.seed_user("alice@example.com");
        let bob = h.seed_user("bob@example.com");
        h.acting_as(alice);
        h.service.send("bob@example.com", "from alice").unwrap();
        h.acting_as(bob);
        h.service.send("alice@example.com", "from bob").unwrap();

        h.acting_as(alice);
        let inbox = h.service.inbox().unwrap();

        assert_eq!(inbox.len(), 2);
        assert_eq!(inbox[0].body, "from bob");
        assert_eq!(inbox[1].body, "from alice");
    }

    #[test]
    fn inbox_excludes_other_conversations() {
        let h = harness();
        let alice = h.seed_user("alice@example.com");
        let bob = h.seed_user("bob@example.com");
        h.seed_user("carol@example.com");
        h.acting_as(bob);
        h.service.send("carol@example.com", "private").unwrap();
        h.acting_as(alice);

        assert!(h.service.inbox().unwrap().is_empty());
    }

    #[test]
    fn inbox_is_capped_to_one_page() {
        let h = harness();
        let alice = h.seed_user("alice@example.com");
        h.seed_user("bob@example.com");
        h.acting_as(alice);
        for n in 0..MESSAGE_PAGE_SIZE + 4 {
            h.service
                .send("bob@example.com", &format!("msg {n}"))
                .unwrap();
        }

        let inbox = h.service.inbox().unwrap();

        assert_eq!(inbox.len(), MESSAGE_PAGE_SIZE);
        assert_eq!(inbox[0].body, format!("msg {}", MESSAGE_PAGE_SIZE + 3));
    }
}
