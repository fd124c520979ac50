//! Client-side data and sync layer for a story-aggregation service.
//!
//! [`StoryList`] owns the authoritative story records; [`User`] holds the
//! session identity plus two id-based views (favorites and own stories) that
//! resolve through the list, so an edit applied to a story is observed by
//! every view at once. Every mutation calls the remote store first and
//! touches local state only after the store confirms.

use {
  chrono::{DateTime, Utc},
  reqwest::StatusCode,
  serde::{Deserialize, Serialize},
  tracing::{debug, warn},
};

pub use {
  auth_response::AuthResponse, client::Client, error::Error,
  session::SavedSession, story::Story, story_draft::StoryDraft,
  story_list::StoryList, user::User, user_record::UserRecord,
};

mod auth_response;
mod client;
mod error;
mod session;
mod story;
mod story_draft;
mod story_list;
mod user;
mod user_record;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
