//! Observable application state types.
//!
//! These structures are the view model of the forum screen: which list is
//! showing, what is loading, which popup is open. Frontends read them to
//! render; only [`crate::App`] mutates them.

use agora_core::{Draft, Field, ForumId, ReplyId, TopicId};

/// The list the screen is showing. Derived from session and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Nobody signed in.
    Entry,
    /// Forum list.
    Forums,
    /// Topics of the selected forum.
    Topics,
    /// Replies of the selected topic.
    Thread,
}

/// Per-list loading flags. Each is cleared by its completion event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loading {
    /// Forum list in flight.
    pub forums: bool,
    /// Topic list in flight.
    pub topics: bool,
    /// Reply list in flight.
    pub replies: bool,
}

impl Loading {
    /// No list in flight.
    pub fn is_idle(&self) -> bool {
        !(self.forums || self.topics || self.replies)
    }
}

/// What a form modal creates or edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    /// New forum.
    NewForum,
    /// Existing forum.
    EditForum(ForumId),
    /// New topic in a forum.
    NewTopic(ForumId),
    /// Existing topic.
    EditTopic(ForumId, TopicId),
    /// New reply in a topic.
    NewReply(ForumId, TopicId),
    /// Existing reply.
    EditReply(ForumId, TopicId, ReplyId),
}

impl FormTarget {
    /// Id of the record being edited. `None` when creating.
    pub fn editing(&self) -> Option<u64> {
        match *self {
            Self::NewForum | Self::NewTopic(_) | Self::NewReply(..) => None,
            Self::EditForum(id) | Self::EditTopic(_, id) | Self::EditReply(_, _, id) => Some(id),
        }
    }
}

/// Create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModal {
    /// What submitting creates or edits.
    pub target: FormTarget,
    /// Field values.
    pub draft: Draft,
    /// Index of the focused field in [`Draft::fields`].
    pub focus: usize,
    /// Request in flight. Editing is frozen until it completes.
    pub submitting: bool,
}

impl FormModal {
    /// Form with the first field focused.
    pub fn new(target: FormTarget, draft: Draft) -> Self {
        Self { target, draft, focus: 0, submitting: false }
    }

    /// Focused field.
    pub fn focused_field(&self) -> Option<Field> {
        self.draft.fields().get(self.focus).copied()
    }

    /// Value of the focused field.
    pub fn focused_value(&self) -> &str {
        self.draft.value(self.focus).unwrap_or_default()
    }
}

/// Record a confirmation modal deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    /// A forum and everything below it.
    Forum(ForumId),
    /// A topic and its replies.
    Topic(ForumId, TopicId),
    /// A single reply.
    Reply(ForumId, TopicId, ReplyId),
}

/// Popup blocking the list underneath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Create/edit form.
    Form(FormModal),
    /// Delete confirmation.
    ConfirmDelete {
        /// Record to delete.
        target: DeleteTarget,
        /// Request in flight.
        submitting: bool,
    },
}

impl Modal {
    /// Whether a request started from this modal is in flight.
    pub fn is_submitting(&self) -> bool {
        match self {
            Self::Form(form) => form.submitting,
            Self::ConfirmDelete { submitting, .. } => *submitting,
        }
    }
}

/// Severity of an [`Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// A request failed.
    Error,
    /// The user's role does not allow the operation.
    Denied,
    /// A form failed validation.
    Invalid,
    /// Guidance, e.g. a selection is missing.
    Info,
}

/// Dismissable message shown over the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Severity.
    pub kind: AlertKind,
    /// Localized title.
    pub title: String,
    /// Localized body.
    pub message: String,
}
