//! Core types for the Agora forum client.
//!
//! No I/O. The only clock read is [`date::format_date_ago`]; everything else,
//! including [`date::format_relative`], takes its inputs explicitly.
//!
//! # Components
//!
//! - [`Forum`], [`Topic`], [`Reply`]: server entities, as they travel on the
//!   wire
//! - [`UserSession`], [`Profession`]: the signed-in user and the role gates
//!   derived from it
//! - [`ForumDraft`], [`TopicDraft`], [`ReplyDraft`]: form drafts with
//!   client-side validation
//! - [`date`]: localized relative-time formatting ("3 hours ago")
//! - [`search`]: case-insensitive list filters

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod date;
mod draft;
mod error;
mod locale;
mod model;
pub mod search;
mod user;

pub use draft::{Draft, ForumDraft, ReplyDraft, TopicDraft};
pub use error::{Field, ValidationError};
pub use locale::Locale;
pub use model::{
    Forum, ForumId, NewReply, NewTopic, Reply, ReplyId, ReplyPatch, Timestamp, Topic, TopicId,
    UserId,
};
pub use user::{Profession, UserSession};
