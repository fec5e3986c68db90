//! Per-kind decoders from an envelope's `data` object to a typed entity.
//!
//! Each decoder reads its fields through [`Fields`], which applies the
//! normalizer for the field and tags any failure with the field name. A
//! decoder either returns a complete entity or the first field error.

use lurk_core::{
  Comment, Entity, FieldError, Fullname, Kind, More, Post, Subreddit,
  Timestamp, Vote, normalize,
};
use serde_json::{Map, Value};

use crate::{DecodeError, error::Result};

/// Read access to one envelope's `data` object.
pub struct Fields<'a> {
  kind: Kind,
  data: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
  pub fn new(kind: Kind, data: &'a Map<String, Value>) -> Self { Self { kind, data } }

  fn read<T>(
    &self,
    field: &'static str,
    normalizer: fn(Option<&Value>) -> Result<T, FieldError>,
  ) -> Result<T> {
    normalizer(self.data.get(field)).map_err(|reason| DecodeError::MalformedField {
      kind: self.kind,
      field,
      reason,
    })
  }

  pub fn has(&self, field: &str) -> bool {
    self.data.get(field).is_some_and(|v| !v.is_null())
  }

  pub fn string(&self, field: &'static str) -> Result<String> {
    self.read(field, normalize::string)
  }

  pub fn opt_string(&self, field: &'static str) -> Result<Option<String>> {
    self.read(field, normalize::opt_string)
  }

  pub fn flag(&self, field: &'static str) -> Result<bool> { self.read(field, normalize::flag) }

  pub fn epoch(&self, field: &'static str) -> Result<Timestamp> {
    self.read(field, normalize::epoch)
  }

  pub fn edited(&self, field: &'static str) -> Result<Timestamp> {
    self.read(field, normalize::edited)
  }

  pub fn vote(&self, field: &'static str) -> Result<Vote> { self.read(field, normalize::vote) }

  pub fn count(&self, field: &'static str) -> Result<u64> { self.read(field, normalize::count) }

  pub fn signed(&self, field: &'static str) -> Result<i64> {
    self.read(field, normalize::signed)
  }

  pub fn ratio(&self, field: &'static str) -> Result<f64> { self.read(field, normalize::ratio) }

  pub fn fullname(&self, field: &'static str) -> Result<Fullname> {
    self.read(field, normalize::fullname)
  }

  pub fn strings(&self, field: &'static str) -> Result<Vec<String>> {
    self.read(field, normalize::strings)
  }

  pub fn raw_array(&self, field: &'static str) -> Result<Vec<Value>> {
    self.read(field, normalize::raw_array)
  }
}

// ─── Decoders ────────────────────────────────────────────────────────────────

pub fn post(f: &Fields<'_>) -> Result<Entity> {
  let body = f.string("selftext")?;
  // Older payloads omit `is_self`; a post with body text is a self-post.
  let is_self_post = if f.has("is_self") {
    f.flag("is_self")?
  } else {
    !body.is_empty()
  };

  Ok(Entity::Post(Post {
    id: f.string("id")?,
    full_id: f.fullname("name")?,
    created: f.epoch("created_utc")?,
    edited: f.edited("edited")?,
    permalink: f.string("permalink")?,
    url: f.string("url")?,
    title: f.string("title")?,
    body,
    likes: f.vote("likes")?,
    score: f.signed("score")?,
    upvote_ratio: f.ratio("upvote_ratio")?,
    num_comments: f.count("num_comments")?,
    subreddit_name: f.string("subreddit")?,
    subreddit_name_prefixed: f.string("subreddit_name_prefixed")?,
    subreddit_id: f.string("subreddit_id")?,
    subreddit_subscribers: f.count("subreddit_subscribers")?,
    author: f.string("author")?,
    author_id: f.string("author_fullname")?,
    spoiler: f.flag("spoiler")?,
    locked: f.flag("locked")?,
    nsfw: f.flag("over_18")?,
    is_self_post,
    saved: f.flag("saved")?,
    stickied: f.flag("stickied")?,
  }))
}

pub fn comment(f: &Fields<'_>) -> Result<Entity> {
  Ok(Entity::Comment(Comment {
    id: f.string("id")?,
    full_id: f.fullname("name")?,
    created: f.epoch("created_utc")?,
    edited: f.edited("edited")?,
    parent_id: f.fullname("parent_id")?,
    permalink: f.string("permalink")?,
    body: f.string("body")?,
    author: f.string("author")?,
    author_id: f.string("author_fullname")?,
    author_flair: f.opt_string("author_flair_text")?,
    subreddit_name: f.string("subreddit")?,
    subreddit_name_prefixed: f.string("subreddit_name_prefixed")?,
    subreddit_id: f.string("subreddit_id")?,
    likes: f.vote("likes")?,
    score: f.signed("score")?,
    controversiality: f.count("controversiality")?,
    post_id: f.fullname("link_id")?,
    post_title: f.string("link_title")?,
    post_permalink: f.string("link_permalink")?,
    post_author: f.string("link_author")?,
    post_num_comments: f.count("num_comments")?,
    is_submitter: f.flag("is_submitter")?,
    score_hidden: f.flag("score_hidden")?,
    saved: f.flag("saved")?,
    stickied: f.flag("stickied")?,
  }))
}

pub fn subreddit(f: &Fields<'_>) -> Result<Entity> {
  Ok(Entity::Subreddit(Subreddit {
    id: f.string("id")?,
    name: f.fullname("name")?,
    created: f.epoch("created")?,
    created_utc: f.epoch("created_utc")?,
    url: f.string("url")?,
    display_name: f.string("display_name")?,
    display_name_prefixed: f.string("display_name_prefixed")?,
    title: f.string("title")?,
    public_description: f.string("public_description")?,
    description: f.string("description")?,
    description_html: f.string("description_html")?,
    subreddit_type: f.string("subreddit_type")?,
    submission_type: f.string("submission_type")?,
    lang: f.string("lang")?,
    subscribers: f.count("subscribers")?,
    active_user_count: f.count("active_user_count")?,
    user_is_subscriber: f.flag("user_is_subscriber")?,
    user_is_moderator: f.flag("user_is_moderator")?,
    favorite: f.flag("user_has_favorited")?,
    nsfw: f.flag("over18")?,
    allow_discovery: f.flag("allow_discovery")?,
    allow_galleries: f.flag("allow_galleries")?,
    allow_images: f.flag("allow_images")?,
    allow_polls: f.flag("allow_polls")?,
    allow_videogifs: f.flag("allow_videogifs")?,
    allow_videos: f.flag("allow_videos")?,
    can_assign_link_flair: f.flag("can_assign_link_flair")?,
    can_assign_user_flair: f.flag("can_assign_user_flair")?,
    free_form_reports: f.flag("free_form_reports")?,
    is_chat_post_feature_enabled: f.flag("is_chat_post_feature_enabled")?,
    is_crosspostable_subreddit: f.flag("is_crosspostable_subreddit")?,
    link_flair_enabled: f.flag("link_flair_enabled")?,
    restrict_posting: f.flag("restrict_posting")?,
    show_media: f.flag("show_media")?,
    show_media_preview: f.flag("show_media_preview")?,
    spoilers_enabled: f.flag("spoilers_enabled")?,
    user_sr_theme_enabled: f.flag("user_sr_theme_enabled")?,
    link_flair_position: f.string("link_flair_position")?,
    user_flair_position: f.string("user_flair_position")?,
    user_flair_type: f.string("user_flair_type")?,
    user_flair_richtext: f.raw_array("user_flair_richtext")?,
    notification_level: f.string("notification_level")?,
    whitelist_status: f.string("whitelist_status")?,
    wls: f.count("wls")?,
  }))
}

pub fn more(f: &Fields<'_>) -> Result<Entity> {
  Ok(Entity::More(More {
    id: f.string("id")?,
    full_id: f.fullname("name")?,
    parent_id: f.fullname("parent_id")?,
    count: f.count("count")?,
    depth: f.count("depth")?,
    children: f.strings("children")?,
  }))
}
