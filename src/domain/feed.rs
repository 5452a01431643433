//! Community feed: image posts with reactions and comment threads.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    OwnedByUser, PostCommentId, PostId, Timestamp, UserId, ValidationError,
};
use crate::domain::reputation::{ReactionKind, ReactionSets};

/// Number of posts shown per feed page.
pub const FEED_PAGE_SIZE: usize = 12;

/// A community feed post. Authors may attach an image and a caption;
/// either may be empty, a post with neither is still a valid (if dull) post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier for this post
    pub id: PostId,

    /// User who created the post
    pub author_user_id: UserId,

    /// Image payload, stored as an opaque string (data URL or path). May be empty.
    pub image: String,

    /// Free-text caption, trimmed. May be empty.
    pub caption: String,

    /// When the post was created
    pub created_at: Timestamp,

    /// Like/dislike reactions, keyed by reacting user
    #[serde(flatten)]
    pub reactions: ReactionSets,
}

impl Post {
    /// Creates a new post with no reactions.
    pub fn new(
        id: PostId,
        author_user_id: UserId,
        image: impl Into<String>,
        caption: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            author_user_id,
            image: image.into(),
            caption: caption.into().trim().to_string(),
            created_at: now,
            reactions: ReactionSets::new(),
        }
    }

    /// Toggles the author's like/dislike on this post.
    ///
    /// Selecting the reaction already held removes it; selecting the opposite
    /// one moves the user across. A user is never in both sets.
    pub fn set_reaction(&mut self, actor: UserId, kind: ReactionKind) {
        self.reactions.set_reaction(actor, kind);
    }
}

impl OwnedByUser for Post {
    fn owner_id(&self) -> &UserId {
        &self.author_user_id
    }
}

/// A comment on a feed post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostComment {
    /// Unique identifier for this comment
    pub id: PostCommentId,

    /// Post this comment belongs to
    pub post_id: PostId,

    /// User who wrote the comment
    pub author_user_id: UserId,

    /// Comment text, trimmed, never empty
    pub body: String,

    /// When the comment was written
    pub created_at: Timestamp,
}

impl PostComment {
    /// Creates a thread entry. The body is required after trimming.
    pub fn new(
        id: PostCommentId,
        post_id: PostId,
        author_user_id: UserId,
        body: impl Into<String>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let body = body.into().trim().to_string();
        if body.is_empty() {
            return Err(ValidationError::empty_field("body"));
        }

        Ok(Self {
            id,
            post_id,
            author_user_id,
            body,
            created_at: now,
        })
    }
}
