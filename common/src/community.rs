//! Community feed view-model: posts, category filter, likes and comments.
//!
//! The page runs each request itself and feeds the answer back through the
//! synchronous steps here, so the feed is never borrowed across an await.

use std::collections::HashMap;

use crate::error::ApiError;
use crate::model::community::{Comment, CommunityPost, LikeResponse, PostId};
use crate::notice::Notice;

/// Categories offered by the feed, `all` first.
pub const CATEGORIES: [&str; 6] = [
    "all",
    "announcements",
    "discussions",
    "success-stories",
    "questions",
    "events",
];

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq)]
pub struct CommunityFeed {
    posts: Vec<CommunityPost>,
    category: String,
    expanded: Option<PostId>,
    comments: HashMap<PostId, Vec<Comment>>,
    drafts: HashMap<PostId, String>,
}

impl Default for CommunityFeed {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            category: ALL_CATEGORIES.to_string(),
            expanded: None,
            comments: HashMap::new(),
            drafts: HashMap::new(),
        }
    }
}

impl CommunityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    pub fn replace_posts(&mut self, posts: Vec<CommunityPost>) {
        self.posts = posts;
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Posts in the selected category.
    pub fn visible_posts(&self) -> Vec<&CommunityPost> {
        self.posts
            .iter()
            .filter(|post| self.category == ALL_CATEGORIES || post.category == self.category)
            .collect()
    }

    pub fn apply_like(&mut self, id: PostId, response: &LikeResponse) {
        if let Some(post) = self.posts.iter_mut().find(|post| post.id == id) {
            post.likes = response.likes_count;
        }
    }

    pub fn expanded(&self) -> Option<PostId> {
        self.expanded
    }

    /// Expands `id`, or collapses it when it is already expanded. Returns the
    /// post whose comments should be fetched.
    pub fn toggle_comments(&mut self, id: PostId) -> Option<PostId> {
        if self.expanded == Some(id) {
            self.expanded = None;
            None
        } else {
            self.expanded = Some(id);
            Some(id)
        }
    }

    pub fn comments(&self, id: PostId) -> &[Comment] {
        self.comments.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn store_comments(&mut self, id: PostId, comments: Vec<Comment>) {
        self.comments.insert(id, comments);
    }

    pub fn draft(&self, id: PostId) -> &str {
        self.drafts.get(&id).map(String::as_str).unwrap_or_default()
    }

    pub fn set_draft(&mut self, id: PostId, content: impl Into<String>) {
        self.drafts.insert(id, content.into());
    }

    /// The draft to send, or `None` when it is blank.
    pub fn pending_comment(&self, id: PostId) -> Option<String> {
        let draft = self.draft(id);
        if draft.trim().is_empty() {
            None
        } else {
            Some(draft.to_string())
        }
    }

    pub fn clear_draft(&mut self, id: PostId) {
        self.drafts.remove(&id);
    }

    /// Settles a posted comment: the draft is cleared and the caller reloads
    /// the posts for the new count. Returns the post whose comments must be
    /// fetched again, if it is still expanded.
    pub fn comment_posted(&mut self, id: PostId) -> Option<PostId> {
        self.clear_draft(id);
        (self.expanded == Some(id)).then_some(id)
    }
}

/// Notice for a failed feed request, e.g. `failure_notice("like post", &err)`.
pub fn failure_notice(action: &str, err: &ApiError) -> Notice {
    log::warn!("community: {action} failed: {err}");
    Notice::error(format!("Failed to {action}: {}", err.user_message()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::community::Author;

    fn post(id: PostId, category: &str) -> CommunityPost {
        CommunityPost {
            id,
            author: Author {
                id: 1,
                name: "Sam".to_string(),
                avatar: None,
            },
            title: format!("Post {id}"),
            content: "Hello".to_string(),
            category: category.to_string(),
            likes: 0,
            comments: 0,
            created_at: String::new(),
            tags: Vec::new(),
        }
    }

    fn comment(id: u64, content: &str) -> Comment {
        Comment {
            id,
            author: Author {
                id: 2,
                name: "Kim".to_string(),
                avatar: None,
            },
            content: content.to_string(),
            created_at: String::new(),
        }
    }

    #[test]
    fn category_filter() {
        let mut feed = CommunityFeed::new();
        feed.replace_posts(vec![post(1, "events"), post(2, "questions"), post(3, "events")]);
        assert_eq!(feed.visible_posts().len(), 3);

        feed.set_category("events");
        let ids: Vec<_> = feed.visible_posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn toggling_the_expanded_post_collapses_it() {
        let mut feed = CommunityFeed::new();
        assert_eq!(feed.toggle_comments(4), Some(4));
        assert_eq!(feed.toggle_comments(5), Some(5));
        assert_eq!(feed.expanded(), Some(5));
        assert_eq!(feed.toggle_comments(5), None);
        assert_eq!(feed.expanded(), None);
    }

    #[test]
    fn like_updates_count_from_server() {
        let mut feed = CommunityFeed::new();
        feed.replace_posts(vec![post(1, "events"), post(2, "events")]);

        feed.apply_like(
            2,
            &LikeResponse {
                liked: true,
                likes_count: 12,
            },
        );
        assert_eq!(feed.posts()[1].likes, 12);
        assert_eq!(feed.posts()[0].likes, 0);
    }

    #[test]
    fn blank_draft_is_not_pending() {
        let mut feed = CommunityFeed::new();
        assert_eq!(feed.pending_comment(1), None);
        feed.set_draft(1, "   ");
        assert_eq!(feed.pending_comment(1), None);
        feed.set_draft(1, "Count me in");
        assert_eq!(feed.pending_comment(1).as_deref(), Some("Count me in"));
    }

    #[test]
    fn posted_comment_clears_draft_and_refetches_expanded_post() {
        let mut feed = CommunityFeed::new();
        feed.toggle_comments(1);
        feed.set_draft(1, "Count me in");
        feed.set_draft(2, "Later");

        assert_eq!(feed.comment_posted(1), Some(1));
        assert_eq!(feed.draft(1), "");
        assert_eq!(feed.draft(2), "Later");

        assert_eq!(feed.comment_posted(2), None);
        assert_eq!(feed.draft(2), "");
    }

    #[test]
    fn reload_after_comment_picks_up_server_count() {
        let mut feed = CommunityFeed::new();
        feed.replace_posts(vec![post(1, "events")]);
        feed.set_draft(1, "Count me in");
        feed.comment_posted(1);

        let mut updated = post(1, "events");
        updated.comments = 1;
        feed.replace_posts(vec![updated]);
        assert_eq!(feed.posts()[0].comments, 1);
        assert_eq!(feed.pending_comment(1), None);
    }

    #[test]
    fn fetched_comments_are_cached_per_post() {
        let mut feed = CommunityFeed::new();
        feed.store_comments(3, vec![comment(1, "First")]);
        assert_eq!(feed.comments(3).len(), 1);
        assert!(feed.comments(4).is_empty());
    }

    #[test]
    fn failure_notice_uses_the_user_message() {
        let notice = failure_notice(
            "post comment",
            &ApiError::Rejected {
                status: 400,
                body: "Comment too long".to_string(),
            },
        );
        assert!(notice.is_error());
        assert_eq!(notice.message, "Failed to post comment: Comment too long");

        let notice = failure_notice("load posts", &ApiError::Network("offline".to_string()));
        assert_eq!(
            notice.message,
            "Failed to load posts: Something went wrong. Please try again."
        );
    }
}
