use serde::{Deserialize, Serialize};

pub type PostId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A community post. `comments` is the server-side count, the comments
/// themselves are fetched separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: PostId,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub author: Author,
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

/// Payload for `POST /api/community/posts/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub likes_count: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewCommentBody<'a> {
    pub content: &'a str,
}
