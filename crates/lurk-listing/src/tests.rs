//! Fixture-driven tests for the full decode → split path.

use chrono::{TimeZone, Utc};
use lurk_core::{
  Comment, FieldError, Fullname, Kind, Post, Subreddit, Timestamp, Vote,
};

use crate::{DecodeError, EntityRef, decode_listing, split};

const MIXED: &str = include_str!("../../../testdata/listings/posts-comments-subreddits.json");
const POSTS: &str = include_str!("../../../testdata/listings/posts.json");
const UNKNOWN: &str = include_str!("../../../testdata/listings/mixed-unknown.json");
const THREAD: &str = include_str!("../../../testdata/listings/comment-thread.json");

const ALL: [Kind; 4] = [Kind::Link, Kind::Comment, Kind::Subreddit, Kind::More];

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
  let dt = Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap();
  Timestamp::from_unix(dt.timestamp()).unwrap()
}

fn name(raw: &str) -> Fullname { raw.parse().unwrap() }

fn expected_post() -> Post {
  Post {
    id:      "i2gvg4".into(),
    full_id: name("t3_i2gvg4"),
    created: at(2020, 8, 2, 18, 23, 8),
    edited:  Timestamp::ZERO,

    permalink: "/r/test/comments/i2gvg4/this_is_a_title/".into(),
    url:       "https://www.reddit.com/r/test/comments/i2gvg4/this_is_a_title/".into(),

    title: "This is a title".into(),
    body:  "This is some text".into(),

    likes:        Vote::Upvoted,
    score:        1,
    upvote_ratio: 1.0,
    num_comments: 1,

    subreddit_name:          "test".into(),
    subreddit_name_prefixed: "r/test".into(),
    subreddit_id:            "t5_2qh23".into(),
    subreddit_subscribers:   8202,

    author:    "v_95".into(),
    author_id: "t2_164ab8".into(),

    spoiler:      false,
    locked:       false,
    nsfw:         false,
    is_self_post: true,
    saved:        false,
    stickied:     false,
  }
}

fn expected_comment() -> Comment {
  Comment {
    id:      "g05v931".into(),
    full_id: name("t1_g05v931"),
    created: at(2020, 8, 3, 1, 15, 40),
    edited:  Timestamp::ZERO,

    parent_id: name("t3_i2gvg4"),
    permalink: "/r/test/comments/i2gvg4/this_is_a_title/g05v931/".into(),

    body:         "Test comment".into(),
    author:       "v_95".into(),
    author_id:    "t2_164ab8".into(),
    author_flair: None,

    subreddit_name:          "test".into(),
    subreddit_name_prefixed: "r/test".into(),
    subreddit_id:            "t5_2qh23".into(),

    likes:            Vote::Upvoted,
    score:            1,
    controversiality: 0,

    post_id:           name("t3_i2gvg4"),
    post_title:        "This is a title".into(),
    post_permalink:    "https://www.reddit.com/r/test/comments/i2gvg4/this_is_a_title/".into(),
    post_author:       "v_95".into(),
    post_num_comments: 1,

    is_submitter: true,
    score_hidden: false,
    saved:        false,
    stickied:     false,
  }
}

fn expected_subreddit() -> Subreddit {
  Subreddit {
    id:          "2qh23".into(),
    name:        name("t5_2qh23"),
    created:     at(2008, 1, 25, 13, 11, 28),
    created_utc: at(2008, 1, 25, 5, 11, 28),

    url:                   "/r/test/".into(),
    display_name:          "test".into(),
    display_name_prefixed: "r/test".into(),
    title:                 "Testing".into(),
    public_description:    String::new(),
    description:           "This is a place to test things.".into(),
    description_html:      "&lt;!-- SC_OFF --&gt;&lt;div class=\"md\"&gt;&lt;p&gt;This is a place to test things.&lt;/p&gt;\n&lt;/div&gt;&lt;!-- SC_ON --&gt;".into(),
    subreddit_type:        "public".into(),
    submission_type:       "any".into(),
    lang:                  "en".into(),

    subscribers:       8202,
    active_user_count: 0,

    user_is_subscriber: true,
    user_is_moderator:  false,
    favorite:           false,
    nsfw:               false,

    allow_discovery:              true,
    allow_galleries:              true,
    allow_images:                 true,
    allow_polls:                  true,
    allow_videogifs:              true,
    allow_videos:                 true,
    can_assign_link_flair:        true,
    can_assign_user_flair:        true,
    free_form_reports:            true,
    is_chat_post_feature_enabled: true,
    is_crosspostable_subreddit:   true,
    link_flair_enabled:           true,
    restrict_posting:             true,
    show_media:                   true,
    show_media_preview:           true,
    spoilers_enabled:             true,
    user_sr_theme_enabled:        true,

    link_flair_position: "left".into(),
    user_flair_position: "right".into(),
    user_flair_type:     "text".into(),
    user_flair_richtext: vec![],
    notification_level:  "low".into(),
    whitelist_status:    "all_ads".into(),
    wls:                 6,
  }
}

// ─── Mixed listing ───────────────────────────────────────────────────────────

#[test]
fn mixed_listing_splits_into_one_of_each() {
  let listing = decode_listing(MIXED.as_bytes()).unwrap();
  let buckets = split(listing, &ALL);

  assert_eq!(buckets.posts, vec![expected_post()]);
  assert_eq!(buckets.comments, vec![expected_comment()]);
  assert_eq!(buckets.subreddits, vec![expected_subreddit()]);
  assert!(buckets.mores.is_empty());
  assert!(buckets.warnings.is_empty());
  assert!(buckets.pagination.is_exhausted());
  assert_eq!(buckets.order, [Kind::Subreddit, Kind::Link, Kind::Comment]);
}

#[test]
fn identifiers_match_source_fullnames() {
  let buckets = split(decode_listing(MIXED.as_bytes()).unwrap(), &ALL);
  for entity in buckets.interleaved() {
    let fullname = entity.fullname();
    let id = match entity {
      EntityRef::Post(p) => p.id.as_str(),
      EntityRef::Comment(c) => c.id.as_str(),
      EntityRef::Subreddit(s) => s.id.as_str(),
      EntityRef::More(m) => m.id.as_str(),
    };
    assert_eq!(fullname.id(), id);
  }
}

#[test]
fn decoding_same_bytes_twice_is_equal() {
  let first = split(decode_listing(MIXED.as_bytes()).unwrap(), &ALL);
  let second = split(decode_listing(MIXED.as_bytes()).unwrap(), &ALL);
  assert_eq!(first, second);
}

// ─── Posts listing ───────────────────────────────────────────────────────────

#[test]
fn posts_listing_keeps_order_and_distinguishes_link_posts() {
  let buckets = split(decode_listing(POSTS.as_bytes()).unwrap(), &[Kind::Link]);

  let ids: Vec<_> = buckets.posts.iter().map(|p| p.full_id.as_str()).collect();
  assert_eq!(ids, ["t3_i2gvg4", "t3_i2gwgz"]);

  let link = &buckets.posts[1];
  assert!(link.edited.is_zero());
  assert!(link.is_link());
  assert!(link.body.is_empty());
  assert_eq!(link.url, "http://example.com");
  assert_ne!(link.url, link.permalink);
  assert_eq!(link.created, at(2020, 8, 2, 18, 23, 37));
  assert_eq!(link.num_comments, 0);
  assert_eq!(link.subreddit_subscribers, 8201);

  assert!(buckets.posts[0].is_self_post);
  assert_eq!(buckets.pagination.after, "t3_i2gwgz");
  assert_eq!(buckets.pagination.before, "");
}

// ─── Unknown kinds ───────────────────────────────────────────────────────────

#[test]
fn unknown_kind_is_a_warning_not_an_error() {
  let buckets = split(decode_listing(UNKNOWN.as_bytes()).unwrap(), &ALL);

  assert_eq!(buckets.comments.len(), 1);
  assert_eq!(buckets.warnings.len(), 1);
  assert_eq!(buckets.warnings[0].position, 0);
  assert_eq!(
    buckets.warnings[0].error,
    DecodeError::UnknownKind("t2".into())
  );
  assert_eq!(buckets.pagination.modhash, "abc123");

  let comment = &buckets.comments[0];
  assert_eq!(comment.likes, Vote::Absent);
  assert_eq!(comment.score, -3);
  assert_eq!(
    comment.edited.as_datetime(),
    Some(Utc.timestamp_opt(1_596_330_920, 0).unwrap())
  );
}

// ─── Comment thread ──────────────────────────────────────────────────────────

#[test]
fn thread_listing_records_bad_children_and_keeps_the_rest() {
  let buckets = split(decode_listing(THREAD.as_bytes()).unwrap(), &ALL);

  let ids: Vec<_> = buckets.comments.iter().map(|c| c.id.as_str()).collect();
  assert_eq!(ids, ["g05v931", "g05v952"]);
  assert_eq!(buckets.comments[0].likes, Vote::Downvoted);
  assert!(buckets.comments[0].is_top_level());
  assert!(!buckets.comments[1].is_top_level());
  assert_eq!(buckets.comments[1].edited, at(2020, 8, 3, 1, 26, 40));

  assert_eq!(buckets.mores.len(), 1);
  assert_eq!(buckets.mores[0].count, 12);

  let warnings: Vec<_> = buckets
    .warnings
    .iter()
    .map(|w| (w.position, w.error.clone()))
    .collect();
  assert_eq!(warnings.len(), 2);
  assert_eq!(
    warnings[0],
    (1, DecodeError::MalformedField {
      kind:   Kind::Comment,
      field:  "score",
      reason: FieldError::WrongType {
        expected: "number",
        found:    "string",
      },
    })
  );
  assert_eq!(warnings[1].0, 4);
  assert!(matches!(warnings[1].1, DecodeError::MalformedEnvelope(_)));

  assert_eq!(buckets.children, 5);
  assert_eq!(buckets.pagination.before, "t1_g05v931");
  assert_eq!(buckets.pagination.after, "t1_g05v952");
}

#[test]
fn requesting_comments_only_drops_placeholders() {
  let buckets = split(decode_listing(THREAD.as_bytes()).unwrap(), &[Kind::Comment]);
  assert_eq!(buckets.comments.len(), 2);
  assert!(buckets.mores.is_empty());
  assert_eq!(buckets.warnings.len(), 2);
}
