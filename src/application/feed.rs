//! Community photo feed.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::feed::{Post, PostComment, FEED_PAGE_SIZE};
use crate::domain::foundation::{DomainError, OwnedByUser, PostCommentId, PostId};
use crate::domain::reputation::ReactionKind;
use crate::ports::{Clock, IdentityResolver, Store};

use super::require_actor;

/// Post publishing and the shared reaction/comment rules applied to posts.
///
/// Posts are author-owned: only the author can delete one, and deletion
/// takes the comment thread with it. Reactions follow the same toggle rule
/// as review reactions.
pub struct FeedService {
    store: Arc<dyn Store>,
    identity: Arc<dyn IdentityResolver>,
    clock: Arc<dyn Clock>,
}

impl FeedService {
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

    /// Publishes a post by the actor. The image may be empty; the caption
    /// is trimmed.
    pub fn add_post(&self, image: &str, caption: &str) -> Result<Post, DomainError> {
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;

        let now = self.clock.now();
        let post = Post::new(PostId::new(), actor.id, image, caption, now);
        self.store.mutate(&mut |snapshot| {
            snapshot.posts.push(post.clone());
        });

        info!(user_id = %actor.id, post = %post.id, "post published");
        Ok(post)
    }

    /// Deletes the actor's own post along with its comment thread.
    pub fn delete_post(&self, post_id: PostId) -> Result<(), DomainError> {
        // 1. Resolve the actor and the post
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;
        let post = snapshot
            .post(post_id)
            .ok_or_else(|| DomainError::not_found("Post", post_id))?;

        // 2. Only the author may delete
        if let Err(err) = post.check_ownership(&actor.id) {
            warn!(user_id = %actor.id, post = %post_id, "post deletion by non-author refused");
            return Err(err);
        }

        // 3. Remove the post and its comments together
        self.store.mutate(&mut |snapshot| {
            snapshot.remove_post(post_id);
        });

        info!(user_id = %actor.id, post = %post_id, "post deleted");
        Ok(())
    }

    /// Toggles the actor's like/dislike on a post.
    pub fn react_to_post(&self, post_id: PostId, kind: ReactionKind) -> Result<Post, DomainError> {
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;
        if snapshot.post(post_id).is_none() {
            return Err(DomainError::not_found("Post", post_id));
        }

        let committed = self.store.mutate(&mut |snapshot| {
            if let Some(post) = snapshot.post_mut(post_id) {
                post.set_reaction(actor.id, kind);
            }
        });

        let post = committed
            .post(post_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Post", post_id))?;

        info!(user_id = %actor.id, post = %post_id, kind = ?kind, "post reaction toggled");
        Ok(post)
    }

    /// Appends a comment to a post's thread. The body is required after
    /// trimming.
    pub fn comment_on_post(
        &self,
        post_id: PostId,
        body: &str,
    ) -> Result<PostComment, DomainError> {
        // 1. Resolve the actor and the post
        let snapshot = self.store.read();
        let actor = require_actor(self.identity.as_ref(), &snapshot)?;
        if snapshot.post(post_id).is_none() {
            return Err(DomainError::not_found("Post", post_id));
        }

        // 2. Validate the comment, then append
        let now = self.clock.now();
        let comment = PostComment::new(PostCommentId::new(), post_id, actor.id, body, now)?;
        self.store.mutate(&mut |snapshot| {
            snapshot.post_comments.push(comment.clone());
        });

        info!(user_id = %actor.id, post = %post_id, "post comment added");
        Ok(comment)
    }

    /// The newest posts, most recent first, one page deep. Free read.
    pub fn feed(&self) -> Vec<Post> {
        let snapshot = self.store.read();
        let page: Vec<Post> = snapshot
            .posts
            .iter()
            .rev()
            .take(FEED_PAGE_SIZE)
            .cloned()
            .collect();
        debug!(count = page.len(), "listed feed page");
        page
    }

    /// The comment thread under one post, in creation order. Free read.
    pub fn comments_on(&self, post_id: PostId) -> Vec<PostComment> {
        let snapshot = self.store.read();
        let comments: Vec<PostComment> = snapshot
            .comments_on_post(post_id)
            .into_iter()
            .cloned()
            .collect();
        debug!(post = %post_id, count = comments.len(), "listed post comments");
        comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedIdentity, ManualClock, MemoryStore};
    use crate::domain::foundation::{EmailAddress, ErrorCode, Role, Timestamp, UserId};
    use crate::domain::user::User;

    struct Harness {
        store: Arc<MemoryStore>,
        identity: Arc<FixedIdentity>,
        service: FeedService,
    }

    fn harness() -> Harness {
        let store = Arc::new(MemoryStore::new());
        let identity = Arc::new(FixedIdentity::anonymous());
        let clock = Arc::new(ManualClock::starting_at(Timestamp::now()));
        let service = FeedService::new(store.clone(), identity.clone(), clock);
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
    fn posting_requires_authentication() {
        let h = harness();

        let err = h.service.add_post("img", "caption").unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }

    #[test]
    fn feed_lists_newest_first() {
        let h = harness();
        let author = h.seed_user("a@example.com");
        h.acting_as(author);
        h.service.add_post("img-1", "first").unwrap();
        h.service.add_post("img-2", "second").unwrap();

        let feed = h.service.feed();

        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].caption, "second");
        assert_eq!(feed[1].caption, "first");
    }

    #[test]
    fn feed_is_capped_to_one_page() {
        let h = harness();
        let author = h.seed_user("a@example.com");
        h.acting_as(author);
        for n in 0..FEED_PAGE_SIZE + 3 {
            h.service.add_post("", &format!("post {n}")).unwrap();
        }

        let feed = h.service.feed();

        assert_eq!(feed.len(), FEED_PAGE_SIZE);
        // The newest post leads the page
        assert_eq!(feed[0].caption, format!("post {}", FEED_PAGE_SIZE + 2));
    }

    #[test]
    fn image_may_be_empty() {
        let h = harness();
        let author = h.seed_user("a@example.com");
        h.acting_as(author);

        let post = h.service.add_post("", "  just words  ").unwrap();

        assert_eq!(post.image, "");
        assert_eq!(post.caption, "just words");
    }

    #[test]
    fn only_the_author_can_delete_a_post() {
        let h = harness();
        let author = h.seed_user("a@example.com");
        let other = h.seed_user("b@example.com");
        h.acting_as(author);
        let post = h.service.add_post("img", "mine").unwrap();

        h.acting_as(other);
        let err = h.service.delete_post(post.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);

        h.acting_as(author);
        h.service.delete_post(post.id).unwrap();
        assert!(h.service.feed().is_empty());
    }

    #[test]
    fn deleting_a_post_cascades_its_comments() {
        let h = harness();
        let author = h.seed_user("a@example.com");
        let fan = h.seed_user("b@example.com");
        h.acting_as(author);
        let kept = h.service.add_post("img", "kept").unwrap();
        let doomed = h.service.add_post("img", "doomed").unwrap();
        h.acting_as(fan);
        h.service.comment_on_post(kept.id, "stays").unwrap();
        h.service.comment_on_post(doomed.id, "goes").unwrap();

        h.acting_as(author);
        h.service.delete_post(doomed.id).unwrap();

        assert!(h.service.comments_on(doomed.id).is_empty());
        assert_eq!(h.service.comments_on(kept.id).len(), 1);
    }

    #[test]
    fn deleting_a_missing_post_is_not_found() {
        let h = harness();
        let author = h.seed_user("a@example.com");
        h.acting_as(author);

        let err = h.service.delete_post(PostId::new()).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn post_reactions_toggle_and_swap() {
        let h = harness();
        let author = h.seed_user("a@example.com");
        let fan = h.seed_user("b@example.com");
        h.acting_as(author);
        let post = h.service.add_post("img", "").unwrap();
        h.acting_as(fan);

        let liked = h.service.react_to_post(post.id, ReactionKind::Like).unwrap();
        assert!(liked.reactions.has_liked(&fan));

        let swapped = h
            .service
            .react_to_post(post.id, ReactionKind::Dislike)
            .unwrap();
        assert!(!swapped.reactions.has_liked(&fan));
        assert!(swapped.reactions.has_disliked(&fan));

        let cleared = h
            .service
            .react_to_post(post.id, ReactionKind::Dislike)
            .unwrap();
        assert!(!cleared.reactions.has_disliked(&fan));
    }

    #[test]
    fn blank_post_comment_is_rejected() {
        let h = harness();
        let author = h.seed_user("a@example.com");
        h.acting_as(author);
        let post = h.service.add_post("img", "").unwrap();

        let err = h.service.comment_on_post(post.id, " \n ").unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn post_comments_read_in_creation_order() {
        let h = harness();
        let author = h.seed_user("a@example.com");
        h.acting_as(author);
        let post = h.service.add_post("img", "").unwrap();
        h.service.comment_on_post(post.id, "first").unwrap();
        h.service.comment_on_post(post.id, "second").unwrap();

        let bodies: Vec<String> = h
            .service
            .comments_on(post.id)
            .into_iter()
            .map(|c| c.body)
            .collect();

        assert_eq!(bodies, vec!["first", "second"]);
    }
}
