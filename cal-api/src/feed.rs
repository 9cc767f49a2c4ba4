use uuid::Uuid;

use crate::Time;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserId(pub Uuid);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FeedId(pub Uuid);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentId(pub Uuid);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Author {
    pub id: UserId,
    pub username: String,
    pub fullname: String,
    /// Reference to the avatar image
    pub avatar: String,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub created_at: Time,
    pub content: String,
    pub author: Author,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ReactionKind {
    Smile,
    ThumbsUp,
    ThumbsDown,
    Clap,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 4] = [
        ReactionKind::Smile,
        ReactionKind::ThumbsUp,
        ReactionKind::ThumbsDown,
        ReactionKind::Clap,
    ];
}

/// Users having reacted to a feed item, by reaction
///
/// A user is expected to appear only in the sets of the reactions they
/// actually gave, but nothing here enforces it.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reaction {
    pub smile: Vec<UserId>,
    pub thumbsup: Vec<UserId>,
    pub thumbsdown: Vec<UserId>,
    pub clap: Vec<UserId>,
}

impl Reaction {
    pub fn users(&self, kind: ReactionKind) -> &[UserId] {
        match kind {
            ReactionKind::Smile => &self.smile,
            ReactionKind::ThumbsUp => &self.thumbsup,
            ReactionKind::ThumbsDown => &self.thumbsdown,
            ReactionKind::Clap => &self.clap,
        }
    }

    pub fn kinds_for(&self, user: &UserId) -> Vec<ReactionKind> {
        ReactionKind::ALL
            .into_iter()
            .filter(|k| self.users(*k).contains(user))
            .collect()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Feed {
    pub id: FeedId,
    pub content: String,
    pub author: Author,
    pub created_at: Time,

    /// Comments in display order
    pub comment: Vec<Comment>,

    pub reaction: Vec<Reaction>,
}

impl Feed {
    pub fn reaction_count(&self, kind: ReactionKind) -> usize {
        self.reaction.iter().map(|r| r.users(kind).len()).sum()
    }
}
