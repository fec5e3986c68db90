//! Decoded entities. Immutable value objects owned by the caller.

use serde::Serialize;

use crate::{Fullname, Kind, Timestamp, Vote};

// ─── Post ────────────────────────────────────────────────────────────────────

/// A submitted post: either a self-post carrying body text or a link post
/// pointing at an external URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
  pub id:      String,
  pub full_id: Fullname,
  pub created: Timestamp,
  /// [`Timestamp::ZERO`] if the post was never edited.
  pub edited:  Timestamp,

  pub permalink: String,
  /// The permalink URL for self-posts, the external target for link posts.
  pub url:       String,

  pub title: String,
  /// Markdown body; empty for link posts.
  pub body:  String,

  pub likes:        Vote,
  pub score:        i64,
  pub upvote_ratio: f64,
  pub num_comments: u64,

  pub subreddit_name:          String,
  pub subreddit_name_prefixed: String,
  pub subreddit_id:            String,
  pub subreddit_subscribers:   u64,

  pub author:    String,
  pub author_id: String,

  pub spoiler:      bool,
  pub locked:       bool,
  pub nsfw:         bool,
  pub is_self_post: bool,
  pub saved:        bool,
  pub stickied:     bool,
}

impl Post {
  /// A link post points somewhere other than its own permalink.
  pub fn is_link(&self) -> bool { !self.is_self_post }
}

// ─── Comment ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
  pub id:      String,
  pub full_id: Fullname,
  pub created: Timestamp,
  pub edited:  Timestamp,

  /// The post or comment this comment replies to.
  pub parent_id: Fullname,
  pub permalink: String,

  pub body:         String,
  pub author:       String,
  pub author_id:    String,
  pub author_flair: Option<String>,

  pub subreddit_name:          String,
  pub subreddit_name_prefixed: String,
  pub subreddit_id:            String,

  pub likes:            Vote,
  pub score:            i64,
  pub controversiality: u64,

  /// The post the comment thread hangs off.
  pub post_id:           Fullname,
  pub post_title:        String,
  pub post_permalink:    String,
  pub post_author:       String,
  pub post_num_comments: u64,

  pub is_submitter: bool,
  pub score_hidden: bool,
  pub saved:        bool,
  pub stickied:     bool,
}

impl Comment {
  /// Whether this is a top-level comment (its parent is the post itself).
  pub fn is_top_level(&self) -> bool { self.parent_id == self.post_id }
}

// ─── Subreddit ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subreddit {
  pub id:          String,
  pub name:        Fullname,
  /// The API's `created` field, which is not reliably UTC.
  pub created:     Timestamp,
  pub created_utc: Timestamp,

  pub url:                   String,
  pub display_name:          String,
  pub display_name_prefixed: String,
  pub title:                 String,
  pub public_description:    String,
  pub description:           String,
  pub description_html:      String,
  pub subreddit_type:        String,
  pub submission_type:       String,
  pub lang:                  String,

  pub subscribers:       u64,
  pub active_user_count: u64,

  pub user_is_subscriber: bool,
  pub user_is_moderator:  bool,
  pub favorite:           bool,
  pub nsfw:               bool,

  pub allow_discovery:              bool,
  pub allow_galleries:              bool,
  pub allow_images:                 bool,
  pub allow_polls:                  bool,
  pub allow_videogifs:              bool,
  pub allow_videos:                 bool,
  pub can_assign_link_flair:        bool,
  pub can_assign_user_flair:        bool,
  pub free_form_reports:            bool,
  pub is_chat_post_feature_enabled: bool,
  pub is_crosspostable_subreddit:   bool,
  pub link_flair_enabled:           bool,
  pub restrict_posting:             bool,
  pub show_media:                   bool,
  pub show_media_preview:           bool,
  pub spoilers_enabled:             bool,
  pub user_sr_theme_enabled:        bool,

  pub link_flair_position: String,
  pub user_flair_position: String,
  pub user_flair_type:     String,
  /// Rich-text flair segments, passed through as raw JSON.
  pub user_flair_richtext: Vec<serde_json::Value>,
  pub notification_level:  String,
  pub whitelist_status:    String,
  pub wls:                 u64,
}

// ─── More ────────────────────────────────────────────────────────────────────

/// A placeholder standing in for comments that were not included in the
/// response. Only carried; expanding it is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct More {
  pub id:        String,
  pub full_id:   Fullname,
  pub parent_id: Fullname,
  /// Total number of hidden descendants.
  pub count:     u64,
  pub depth:     u64,
  /// Local ids of the hidden direct children.
  pub children:  Vec<String>,
}

// ─── Entity ──────────────────────────────────────────────────────────────────

/// Any decoded entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Entity {
  Post(Post),
  Comment(Comment),
  Subreddit(Subreddit),
  More(More),
}

impl Entity {
  pub fn kind(&self) -> Kind {
    match self {
      Self::Post(_) => Kind::Link,
      Self::Comment(_) => Kind::Comment,
      Self::Subreddit(_) => Kind::Subreddit,
      Self::More(_) => Kind::More,
    }
  }

  pub fn fullname(&self) -> &Fullname {
    match self {
      Self::Post(p) => &p.full_id,
      Self::Comment(c) => &c.full_id,
      Self::Subreddit(s) => &s.name,
      Self::More(m) => &m.full_id,
    }
  }

  /// The bare local id, as reported in the `id` field.
  pub fn id(&self) -> &str {
    match self {
      Self::Post(p) => &p.id,
      Self::Comment(c) => &c.id,
      Self::Subreddit(s) => &s.id,
      Self::More(m) => &m.id,
    }
  }
}
