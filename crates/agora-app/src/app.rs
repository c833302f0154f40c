//! Forum screen state machine.
//!
//! This module defines the [`App`] state machine, which owns every piece of
//! local view state of the forum screen completely decoupled from I/O.
//!
//! This is a pure state machine: user operations are methods and completed
//! I/O arrives as [`crate::AppEvent`]s. Both produce [`crate::AppAction`]
//! instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Tracks the three nested lists (forums, topics, replies) and the current
//!   selection, fetching each list fresh on navigation.
//! - Applies client-side search filters, role gates and form validation
//!   before any request is issued.
//! - Owns the form and confirmation modals, the alert slot and the status
//!   line.
//! - Discards list responses whose parent is no longer selected.

use agora_core::{
    Draft, Forum, ForumDraft, ForumId, Locale, NewReply, NewTopic, Reply, ReplyDraft, ReplyId,
    Topic, TopicDraft, TopicId, UserSession, search,
};

use crate::{
    Alert, AppAction, AppEvent, DeleteTarget, FormModal, FormTarget, Loading, Modal, Operation,
    View,
    notice::{self, Denial, Done, LoginProblem, Missing},
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Display locale for alerts and dates.
    locale: Locale,
    /// Signed-in user. `None` shows the entry screen.
    session: Option<UserSession>,
    /// Forums as last fetched.
    forums: Vec<Forum>,
    /// Topics of the selected forum.
    topics: Vec<Topic>,
    /// Replies of the selected topic.
    replies: Vec<Reply>,
    /// Selected forum. `None` shows the forum list.
    selected_forum: Option<ForumId>,
    /// Selected topic. Only set while a forum is selected.
    selected_topic: Option<TopicId>,
    /// Forum name filter.
    forum_search: String,
    /// Topic title filter.
    topic_search: String,
    /// Lists in flight.
    loading: Loading,
    /// Open popup.
    modal: Option<Modal>,
    /// Pending alert.
    alert: Option<Alert>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl App {
    /// Create an App, optionally with a restored session.
    pub fn new(locale: Locale, session: Option<UserSession>) -> Self {
        Self {
            locale,
            session,
            forums: Vec::new(),
            topics: Vec::new(),
            replies: Vec::new(),
            selected_forum: None,
            selected_topic: None,
            forum_search: String::new(),
            topic_search: String::new(),
            loading: Loading::default(),
            modal: None,
            alert: None,
            terminal_size: (80, 24),
            status_message: None,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::ForumsLoaded(forums) => {
                self.loading.forums = false;
                self.forums = forums;
                if let Some(forum_id) = self.selected_forum
                    && self.forum(forum_id).is_none()
                {
                    self.reset_forum_selection();
                }
                vec![AppAction::Render]
            },
            AppEvent::TopicsLoaded { forum_id, mut topics } => {
                if self.selected_forum != Some(forum_id) {
                    tracing::debug!(forum_id, "discarding stale topic list");
                    return vec![];
                }
                self.loading.topics = false;
                topics.retain(|t| t.forum_id == forum_id);
                self.topics = topics;
                if let Some(topic_id) = self.selected_topic
                    && self.topic(topic_id).is_none()
                {
                    self.reset_topic_selection();
                }
                vec![AppAction::Render]
            },
            AppEvent::RepliesLoaded { forum_id, topic_id, mut replies } => {
                if self.selected_forum != Some(forum_id) || self.selected_topic != Some(topic_id) {
                    tracing::debug!(forum_id, topic_id, "discarding stale reply list");
                    return vec![];
                }
                self.loading.replies = false;
                replies.retain(|r| r.topic_id == topic_id);
                self.replies = replies;
                vec![AppAction::Render]
            },
            AppEvent::ForumCreated(forum) => {
                self.forums.push(forum);
                self.finish_submission(Done::ForumCreated)
            },
            AppEvent::ForumUpdated(forum) => {
                replace_by_id(&mut self.forums, forum, |f| f.id);
                self.finish_submission(Done::ForumUpdated)
            },
            AppEvent::ForumDeleted { forum_id } => {
                self.forums.retain(|f| f.id != forum_id);
                if self.selected_forum == Some(forum_id) {
                    self.reset_forum_selection();
                }
                self.finish_submission(Done::ForumDeleted)
            },
            AppEvent::TopicCreated(topic) => {
                if let Some(forum) = self.forums.iter_mut().find(|f| f.id == topic.forum_id) {
                    forum.topics_count = forum.topics_count.saturating_add(1);
                }
                if self.selected_forum == Some(topic.forum_id) {
                    self.topics.push(topic);
                }
                self.finish_submission(Done::TopicCreated)
            },
            AppEvent::TopicUpdated(topic) => {
                replace_by_id(&mut self.topics, topic, |t| t.id);
                self.finish_submission(Done::TopicUpdated)
            },
            AppEvent::TopicDeleted { forum_id, topic_id } => {
                if let Some(forum) = self.forums.iter_mut().find(|f| f.id == forum_id) {
                    forum.topics_count = forum.topics_count.saturating_sub(1);
                }
                self.topics.retain(|t| t.id != topic_id);
                if self.selected_topic == Some(topic_id) {
                    self.reset_topic_selection();
                }
                self.finish_submission(Done::TopicDeleted)
            },
            AppEvent::ReplyCreated(reply) => {
                if let Some(topic) = self.topics.iter_mut().find(|t| t.id == reply.topic_id) {
                    topic.replies_count = topic.replies_count.saturating_add(1);
                }
                if self.selected_topic == Some(reply.topic_id) {
                    self.replies.push(reply);
                }
                self.finish_submission(Done::ReplyCreated)
            },
            AppEvent::ReplyUpdated(reply) => {
                replace_by_id(&mut self.replies, reply, |r| r.id);
                self.finish_submission(Done::ReplyUpdated)
            },
            AppEvent::ReplyAcceptChanged(reply) => {
                let done = if reply.accepted { Done::ReplyAccepted } else { Done::ReplyUnaccepted };
                replace_by_id(&mut self.replies, reply, |r| r.id);
                self.status_message = Some(notice::done(done, self.locale).to_owned());
                vec![AppAction::Render]
            },
            AppEvent::ReplyDeleted { topic_id, reply_id } => {
                if let Some(topic) = self.topics.iter_mut().find(|t| t.id == topic_id) {
                    topic.replies_count = topic.replies_count.saturating_sub(1);
                }
                self.replies.retain(|r| r.id != reply_id);
                self.finish_submission(Done::ReplyDeleted)
            },
            AppEvent::SessionPersisted(session) => {
                tracing::info!(user = session.id, role = session.profession.as_str(), "signed in");
                *self = Self { terminal_size: self.terminal_size, ..Self::new(self.locale, Some(session)) };
                self.status_message = Some(notice::done(Done::SignedIn, self.locale).to_owned());
                self.mount()
            },
            AppEvent::LoggedOut => {
                tracing::info!("signed out");
                *self = Self { terminal_size: self.terminal_size, ..Self::new(self.locale, None) };
                vec![AppAction::Render]
            },
            AppEvent::RequestFailed { operation, reason } => {
                tracing::warn!(%operation, %reason, "request failed");
                match operation {
                    Operation::LoadForums => self.loading.forums = false,
                    Operation::LoadTopics => self.loading.topics = false,
                    Operation::LoadReplies => self.loading.replies = false,
                    _ => {},
                }
                match &mut self.modal {
                    Some(Modal::Form(form)) => form.submitting = false,
                    Some(Modal::ConfirmDelete { submitting, .. }) => *submitting = false,
                    None => {},
                }
                self.alert = Some(notice::failure(operation, self.locale));
                vec![AppAction::Render]
            },
        }
    }

    /// Load the forum list if signed in.
    pub fn mount(&mut self) -> Vec<AppAction> {
        if self.session.is_none() {
            return vec![AppAction::Render];
        }
        self.loading.forums = true;
        vec![AppAction::LoadForums, AppAction::Render]
    }

    /// Sign in as `session` once it has been persisted.
    pub fn login(&mut self, session: UserSession) -> Vec<AppAction> {
        let problem = if session.name.trim().is_empty() {
            Some(LoginProblem::EmptyName)
        } else if !session.can_reply() {
            Some(LoginProblem::UnknownRole)
        } else {
            None
        };
        if let Some(problem) = problem {
            self.alert = Some(notice::invalid_login(problem, self.locale));
            return vec![AppAction::Render];
        }

        let session = UserSession { name: session.name.trim().to_owned(), ..session };
        vec![AppAction::PersistSession(session), AppAction::Render]
    }

    /// Open a forum and fetch its topics. Unknown ids are ignored.
    pub fn select_forum(&mut self, forum_id: ForumId) -> Vec<AppAction> {
        if self.session.is_none() || self.forum(forum_id).is_none() {
            return vec![];
        }
        self.selected_forum = Some(forum_id);
        self.selected_topic = None;
        self.topics.clear();
        self.replies.clear();
        self.topic_search.clear();
        self.loading.topics = true;
        self.loading.replies = false;
        vec![AppAction::LoadTopics { forum_id }, AppAction::Render]
    }

    /// Return to the forum list.
    pub fn clear_forum(&mut self) -> Vec<AppAction> {
        self.reset_forum_selection();
        vec![AppAction::Render]
    }

    /// Open a topic of the selected forum and fetch its replies.
    pub fn select_topic(&mut self, topic_id: TopicId) -> Vec<AppAction> {
        let Some(forum_id) = self.selected_forum else {
            return vec![];
        };
        if self.topic(topic_id).is_none() {
            return vec![];
        }
        self.selected_topic = Some(topic_id);
        self.replies.clear();
        self.loading.replies = true;
        vec![AppAction::LoadReplies { forum_id, topic_id }, AppAction::Render]
    }

    /// Return to the topic list.
    pub fn clear_topic(&mut self) -> Vec<AppAction> {
        self.reset_topic_selection();
        vec![AppAction::Render]
    }

    /// Refetch the list of the current view.
    pub fn refresh(&mut self) -> Vec<AppAction> {
        match (self.view(), self.selected_forum, self.selected_topic) {
            (View::Forums, ..) => self.mount(),
            (View::Topics, Some(forum_id), _) => {
                self.loading.topics = true;
                vec![AppAction::LoadTopics { forum_id }, AppAction::Render]
            },
            (View::Thread, Some(forum_id), Some(topic_id)) => {
                self.loading.replies = true;
                vec![AppAction::LoadReplies { forum_id, topic_id }, AppAction::Render]
            },
            _ => vec![],
        }
    }

    /// Set the forum name filter.
    pub fn set_forum_search(&mut self, text: impl Into<String>) -> Vec<AppAction> {
        self.forum_search = text.into();
        vec![AppAction::Render]
    }

    /// Set the topic title filter.
    pub fn set_topic_search(&mut self, text: impl Into<String>) -> Vec<AppAction> {
        self.topic_search = text.into();
        vec![AppAction::Render]
    }

    /// Open the form for a new forum.
    pub fn open_new_forum(&mut self) -> Vec<AppAction> {
        if let Some(actions) = self.refuse_unless(|s| s.can_manage_forums(), Denial::ManageForums) {
            return actions;
        }
        self.open_form(FormTarget::NewForum, Draft::Forum(ForumDraft::default()))
    }

    /// Open the form for editing a forum.
    pub fn open_edit_forum(&mut self, forum_id: ForumId) -> Vec<AppAction> {
        if let Some(actions) = self.refuse_unless(|s| s.can_manage_forums(), Denial::ManageForums) {
            return actions;
        }
        let Some(forum) = self.forum(forum_id) else {
            return vec![];
        };
        let draft = Draft::Forum(ForumDraft::from(forum));
        self.open_form(FormTarget::EditForum(forum_id), draft)
    }

    /// Ask for confirmation before deleting a forum.
    pub fn request_delete_forum(&mut self, forum_id: ForumId) -> Vec<AppAction> {
        if let Some(actions) = self.refuse_unless(|s| s.can_manage_forums(), Denial::ManageForums) {
            return actions;
        }
        if self.forum(forum_id).is_none() {
            return vec![];
        }
        self.open_confirm(DeleteTarget::Forum(forum_id))
    }

    /// Open the form for a new topic in the selected forum.
    pub fn open_new_topic(&mut self) -> Vec<AppAction> {
        if let Some(actions) = self.refuse_unless(|s| s.can_manage_forums(), Denial::ManageTopics) {
            return actions;
        }
        let Some(forum_id) = self.selected_forum else {
            return self.inform(Missing::Forum);
        };
        self.open_form(FormTarget::NewTopic(forum_id), Draft::Topic(TopicDraft::default()))
    }

    /// Open the form for editing a topic of the selected forum.
    pub fn open_edit_topic(&mut self, topic_id: TopicId) -> Vec<AppAction> {
        if let Some(actions) = self.refuse_unless(|s| s.can_manage_forums(), Denial::ManageTopics) {
            return actions;
        }
        let Some(forum_id) = self.selected_forum else {
            return self.inform(Missing::Forum);
        };
        let Some(topic) = self.topic(topic_id) else {
            return vec![];
        };
        let draft = Draft::Topic(TopicDraft::from(topic));
        self.open_form(FormTarget::EditTopic(forum_id, topic_id), draft)
    }

    /// Ask for confirmation before deleting a topic of the selected forum.
    pub fn request_delete_topic(&mut self, topic_id: TopicId) -> Vec<AppAction> {
        if let Some(actions) = self.refuse_unless(|s| s.can_manage_forums(), Denial::ManageTopics) {
            return actions;
        }
        let Some(forum_id) = self.selected_forum else {
            return self.inform(Missing::Forum);
        };
        if self.topic(topic_id).is_none() {
            return vec![];
        }
        self.open_confirm(DeleteTarget::Topic(forum_id, topic_id))
    }

    /// Open the form for a new reply in the selected topic.
    pub fn open_new_reply(&mut self) -> Vec<AppAction> {
        if let Some(actions) = self.refuse_unless(UserSession::can_reply, Denial::Reply) {
            return actions;
        }
        let (Some(forum_id), Some(topic_id)) = (self.selected_forum, self.selected_topic) else {
            return self.inform(Missing::Topic);
        };
        self.open_form(FormTarget::NewReply(forum_id, topic_id), Draft::Reply(ReplyDraft::default()))
    }

    /// Post `text` as a new reply without opening the form.
    ///
    /// Validation and role gates are the same as for the form.
    pub fn quick_reply(&mut self, text: impl Into<String>) -> Vec<AppAction> {
        if self.modal.is_some() {
            return vec![];
        }
        let mut actions = self.open_new_reply();
        if let Some(Modal::Form(form)) = &mut self.modal {
            form.draft = Draft::Reply(ReplyDraft { text: text.into() });
            actions = self.submit_modal();
            if matches!(&self.modal, Some(Modal::Form(form)) if !form.submitting) {
                self.modal = None;
            }
        }
        actions
    }

    /// Open the form for editing one of the user's own replies.
    pub fn open_edit_reply(&mut self, reply_id: ReplyId) -> Vec<AppAction> {
        let Some((forum_id, topic_id, reply)) = self.owned_reply(reply_id) else {
            return self.refusal(reply_id);
        };
        let draft = Draft::Reply(ReplyDraft::from(reply));
        self.open_form(FormTarget::EditReply(forum_id, topic_id, reply_id), draft)
    }

    /// Ask for confirmation before deleting one of the user's own replies.
    pub fn request_delete_reply(&mut self, reply_id: ReplyId) -> Vec<AppAction> {
        let Some((forum_id, topic_id, _)) = self.owned_reply(reply_id) else {
            return self.refusal(reply_id);
        };
        self.open_confirm(DeleteTarget::Reply(forum_id, topic_id, reply_id))
    }

    /// Flip the accepted flag of a reply in the selected topic.
    pub fn toggle_accept(&mut self, reply_id: ReplyId) -> Vec<AppAction> {
        if let Some(actions) = self.refuse_unless(UserSession::can_accept, Denial::Accept) {
            return actions;
        }
        let (Some(forum_id), Some(topic_id)) = (self.selected_forum, self.selected_topic) else {
            return vec![];
        };
        let Some(reply) = self.replies.iter().find(|r| r.id == reply_id) else {
            return vec![];
        };
        let accepted = !reply.accepted;
        vec![
            AppAction::SetReplyAccepted { forum_id, topic_id, reply_id, accepted },
            AppAction::Render,
        ]
    }

    /// Replace the value of a form field.
    pub fn set_draft_field(&mut self, index: usize, text: impl Into<String>) -> Vec<AppAction> {
        let Some(Modal::Form(form)) = &mut self.modal else {
            return vec![];
        };
        if form.submitting {
            return vec![];
        }
        match form.draft.value_mut(index) {
            Some(value) => {
                *value = text.into();
                vec![AppAction::Render]
            },
            None => vec![],
        }
    }

    /// Move form focus to the next field, wrapping around.
    pub fn focus_next_field(&mut self) -> Vec<AppAction> {
        self.move_focus(true)
    }

    /// Move form focus to the previous field, wrapping around.
    pub fn focus_previous_field(&mut self) -> Vec<AppAction> {
        self.move_focus(false)
    }

    /// Validate and submit the open form, or confirm the open deletion.
    pub fn submit_modal(&mut self) -> Vec<AppAction> {
        let Some(modal) = &self.modal else {
            return vec![];
        };
        let form = match modal {
            Modal::ConfirmDelete { .. } => return self.confirm_delete(),
            Modal::Form(form) if form.submitting => return vec![],
            Modal::Form(form) => form,
        };

        if let Err(error) = form.draft.validate() {
            self.alert = Some(notice::invalid(&error, self.locale));
            return vec![AppAction::Render];
        }

        let Some(action) = self.submission(form.target, &form.draft) else {
            return vec![];
        };
        if let Some(Modal::Form(form)) = &mut self.modal {
            form.submitting = true;
        }
        vec![action, AppAction::Render]
    }

    /// Close the open popup, discarding its draft.
    pub fn close_modal(&mut self) -> Vec<AppAction> {
        if self.modal.take().is_none() {
            return vec![];
        }
        vec![AppAction::Render]
    }

    /// Delete the target of the open confirmation.
    pub fn confirm_delete(&mut self) -> Vec<AppAction> {
        let Some(Modal::ConfirmDelete { target, submitting }) = &mut self.modal else {
            return vec![];
        };
        if *submitting {
            return vec![];
        }
        *submitting = true;

        let action = match *target {
            DeleteTarget::Forum(forum_id) => AppAction::DeleteForum { forum_id },
            DeleteTarget::Topic(forum_id, topic_id) => AppAction::DeleteTopic { forum_id, topic_id },
            DeleteTarget::Reply(forum_id, topic_id, reply_id) => {
                AppAction::DeleteReply { forum_id, topic_id, reply_id }
            },
        };
        vec![action, AppAction::Render]
    }

    /// Dismiss the pending alert.
    pub fn dismiss_alert(&mut self) -> Vec<AppAction> {
        if self.alert.take().is_none() {
            return vec![];
        }
        vec![AppAction::Render]
    }

    /// Sign out. State is reset once the session is cleared.
    pub fn logout(&self) -> Vec<AppAction> {
        if self.session.is_none() {
            return vec![];
        }
        vec![AppAction::ClearSession, AppAction::Render]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// The list the screen is showing.
    pub fn view(&self) -> View {
        match (&self.session, self.selected_forum, self.selected_topic) {
            (None, ..) => View::Entry,
            (Some(_), None, _) => View::Forums,
            (Some(_), Some(_), None) => View::Topics,
            (Some(_), Some(_), Some(_)) => View::Thread,
        }
    }

    /// Display locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Signed-in user. `None` on the entry screen.
    pub fn session(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    /// Forums as last fetched.
    pub fn forums(&self) -> &[Forum] {
        &self.forums
    }

    /// Topics of the selected forum.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Replies of the selected topic.
    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }

    /// Forums whose name contains the forum filter.
    pub fn filtered_forums(&self) -> Vec<&Forum> {
        search::filter_forums(&self.forums, &self.forum_search)
    }

    /// Topics whose title contains the topic filter.
    pub fn filtered_topics(&self) -> Vec<&Topic> {
        search::filter_topics(&self.topics, &self.topic_search)
    }

    /// Forum name filter.
    pub fn forum_search(&self) -> &str {
        &self.forum_search
    }

    /// Topic title filter.
    pub fn topic_search(&self) -> &str {
        &self.topic_search
    }

    /// Selected forum. `None` on the forum list.
    pub fn selected_forum(&self) -> Option<&Forum> {
        self.selected_forum.and_then(|id| self.forum(id))
    }

    /// Selected topic. `None` unless in the thread view.
    pub fn selected_topic(&self) -> Option<&Topic> {
        self.selected_topic.and_then(|id| self.topic(id))
    }

    /// Id of the selected forum.
    pub fn selected_forum_id(&self) -> Option<ForumId> {
        self.selected_forum
    }

    /// Id of the selected topic.
    pub fn selected_topic_id(&self) -> Option<TopicId> {
        self.selected_topic
    }

    /// Lists in flight.
    pub fn loading(&self) -> Loading {
        self.loading
    }

    /// Open popup.
    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    /// Pending alert.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    fn forum(&self, forum_id: ForumId) -> Option<&Forum> {
        self.forums.iter().find(|f| f.id == forum_id)
    }

    fn topic(&self, topic_id: TopicId) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == topic_id)
    }

    fn reset_forum_selection(&mut self) {
        self.selected_forum = None;
        self.topics.clear();
        self.loading.topics = false;
        self.reset_topic_selection();
    }

    fn reset_topic_selection(&mut self) {
        self.selected_topic = None;
        self.replies.clear();
        self.loading.replies = false;
    }

    /// `Some(actions)` when the gate refuses. A missing session refuses
    /// silently; a failed role check raises a denial alert.
    fn refuse_unless(
        &mut self,
        allowed: impl Fn(&UserSession) -> bool,
        denial: Denial,
    ) -> Option<Vec<AppAction>> {
        if self.modal.is_some() {
            return Some(vec![]);
        }
        match &self.session {
            None => Some(vec![]),
            Some(session) if allowed(session) => None,
            Some(_) => {
                self.alert = Some(notice::denied(denial, self.locale));
                Some(vec![AppAction::Render])
            },
        }
    }

    fn owned_reply(&self, reply_id: ReplyId) -> Option<(ForumId, TopicId, &Reply)> {
        if self.modal.is_some() {
            return None;
        }
        let session = self.session.as_ref()?;
        let reply = self.replies.iter().find(|r| r.id == reply_id)?;
        let forum_id = self.selected_forum?;
        let topic_id = self.selected_topic?;
        session.owns(reply).then_some((forum_id, topic_id, reply))
    }

    /// Explain why [`Self::owned_reply`] refused. Only someone else's reply
    /// raises an alert.
    fn refusal(&mut self, reply_id: ReplyId) -> Vec<AppAction> {
        let someone_elses = self.session.is_some()
            && self.modal.is_none()
            && self.replies.iter().any(|r| r.id == reply_id);
        if !someone_elses {
            return vec![];
        }
        self.alert = Some(notice::denied(Denial::NotAuthor, self.locale));
        vec![AppAction::Render]
    }

    fn inform(&mut self, missing: Missing) -> Vec<AppAction> {
        self.alert = Some(notice::missing(missing, self.locale));
        vec![AppAction::Render]
    }

    fn open_form(&mut self, target: FormTarget, draft: Draft) -> Vec<AppAction> {
        self.modal = Some(Modal::Form(FormModal::new(target, draft)));
        vec![AppAction::Render]
    }

    fn open_confirm(&mut self, target: DeleteTarget) -> Vec<AppAction> {
        self.modal = Some(Modal::ConfirmDelete { target, submitting: false });
        vec![AppAction::Render]
    }

    fn move_focus(&mut self, forward: bool) -> Vec<AppAction> {
        let Some(Modal::Form(form)) = &mut self.modal else {
            return vec![];
        };
        let count = form.draft.fields().len();
        if count == 0 {
            return vec![];
        }
        form.focus = if forward { (form.focus + 1) % count } else { (form.focus + count - 1) % count };
        vec![AppAction::Render]
    }

    /// Request for a validated form. `None` if the draft kind does not fit
    /// the target.
    fn submission(&self, target: FormTarget, draft: &Draft) -> Option<AppAction> {
        let session = self.session.as_ref()?;
        let action = match (target, draft) {
            (FormTarget::NewForum, Draft::Forum(d)) => AppAction::CreateForum { draft: d.trimmed() },
            (FormTarget::EditForum(forum_id), Draft::Forum(d)) => {
                AppAction::UpdateForum { forum_id, draft: d.trimmed() }
            },
            (FormTarget::NewTopic(forum_id), Draft::Topic(d)) => AppAction::CreateTopic {
                forum_id,
                topic: NewTopic { draft: d.trimmed(), author: session.name.clone() },
            },
            (FormTarget::EditTopic(forum_id, topic_id), Draft::Topic(d)) => {
                AppAction::UpdateTopic { forum_id, topic_id, draft: d.trimmed() }
            },
            (FormTarget::NewReply(forum_id, topic_id), Draft::Reply(d)) => AppAction::CreateReply {
                forum_id,
                topic_id,
                reply: NewReply {
                    draft: d.trimmed(),
                    author: session.name.clone(),
                    author_id: session.id,
                },
            },
            (FormTarget::EditReply(forum_id, topic_id, reply_id), Draft::Reply(d)) => {
                AppAction::UpdateReply { forum_id, topic_id, reply_id, draft: d.trimmed() }
            },
            _ => return None,
        };
        Some(action)
    }

    /// Close the popup whose request just succeeded and report it.
    fn finish_submission(&mut self, done: Done) -> Vec<AppAction> {
        if self.modal.as_ref().is_some_and(Modal::is_submitting) {
            self.modal = None;
        }
        self.status_message = Some(notice::done(done, self.locale).to_owned());
        vec![AppAction::Render]
    }
}

fn replace_by_id<T, K: PartialEq>(items: &mut [T], item: T, key: impl Fn(&T) -> K) {
    let id = key(&item);
    if let Some(slot) = items.iter_mut().find(|existing| key(existing) == id) {
        *slot = item;
    }
}
