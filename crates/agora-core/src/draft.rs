//! Form drafts and client-side validation.
//!
//! Drafts never carry ids. Validation counts characters after trimming and
//! runs before any request is issued.

use serde::{Deserialize, Serialize};

use crate::{Forum, Reply, Topic, ValidationError, error::Field};

/// Editable fields of a forum. Also the body of `POST`/`PATCH forum`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumDraft {
    /// Forum name.
    pub name: String,
    /// Forum description.
    pub description: String,
    /// Forum tag.
    pub tag: String,
}

/// Editable fields of a topic. Also the body of `PATCH` on a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDraft {
    /// Topic title.
    pub title: String,
    /// Opening post.
    pub content: String,
}

/// Editable fields of a reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyDraft {
    /// Reply text.
    pub text: String,
}

impl From<&Forum> for ForumDraft {
    fn from(forum: &Forum) -> Self {
        Self {
            name: forum.name.clone(),
            description: forum.description.clone(),
            tag: forum.tag.clone(),
        }
    }
}

impl From<&Topic> for TopicDraft {
    fn from(topic: &Topic) -> Self {
        Self { title: topic.title.clone(), content: topic.content.clone() }
    }
}

impl From<&Reply> for ReplyDraft {
    fn from(reply: &Reply) -> Self {
        Self { text: reply.text.clone() }
    }
}

fn check(field: Field, value: &str) -> Result<(), ValidationError> {
    let min = field.min_len();
    if value.trim().chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(())
}

impl ForumDraft {
    /// Check minimum lengths, in field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check(Field::ForumName, &self.name)?;
        check(Field::ForumDescription, &self.description)?;
        check(Field::ForumTag, &self.tag)
    }

    /// Copy with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            tag: self.tag.trim().to_owned(),
        }
    }
}

impl TopicDraft {
    /// Check minimum lengths, in field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check(Field::TopicTitle, &self.title)?;
        check(Field::TopicContent, &self.content)
    }

    /// Copy with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self { title: self.title.trim().to_owned(), content: self.content.trim().to_owned() }
    }
}

impl ReplyDraft {
    /// Check minimum length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check(Field::ReplyText, &self.text)
    }

    /// Copy with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self { text: self.text.trim().to_owned() }
    }
}

/// Any of the three drafts, addressed field by field.
///
/// Used by form modals, which edit one focused field at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    /// Forum form.
    Forum(ForumDraft),
    /// Topic form.
    Topic(TopicDraft),
    /// Reply form.
    Reply(ReplyDraft),
}

impl Draft {
    /// Fields in display order.
    pub const fn fields(&self) -> &'static [Field] {
        match self {
            Self::Forum(_) => &[Field::ForumName, Field::ForumDescription, Field::ForumTag],
            Self::Topic(_) => &[Field::TopicTitle, Field::TopicContent],
            Self::Reply(_) => &[Field::ReplyText],
        }
    }

    /// Current value of the field at `index`.
    pub fn value(&self, index: usize) -> Option<&str> {
        let value = match (self, index) {
            (Self::Forum(d), 0) => &d.name,
            (Self::Forum(d), 1) => &d.description,
            (Self::Forum(d), 2) => &d.tag,
            (Self::Topic(d), 0) => &d.title,
            (Self::Topic(d), 1) => &d.content,
            (Self::Reply(d), 0) => &d.text,
            _ => return None,
        };
        Some(value)
    }

    /// Mutable access to the field at `index`.
    pub fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        let value = match (self, index) {
            (Self::Forum(d), 0) => &mut d.name,
            (Self::Forum(d), 1) => &mut d.description,
            (Self::Forum(d), 2) => &mut d.tag,
            (Self::Topic(d), 0) => &mut d.title,
            (Self::Topic(d), 1) => &mut d.content,
            (Self::Reply(d), 0) => &mut d.text,
            _ => return None,
        };
        Some(value)
    }

    /// Validate whichever draft this is.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Forum(d) => d.validate(),
            Self::Topic(d) => d.validate(),
            Self::Reply(d) => d.validate(),
        }
    }
}
