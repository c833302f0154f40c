//! Input state and key handling for the TUI.
//!
//! This module owns the input line (buffer, cursor) and the list highlight,
//! and maps keys onto App calls. Popups take keys first: an alert, then a
//! form or confirmation modal. Otherwise the line edits the current view's
//! search filter, or the reply text in the thread. Lines starting with `/`
//! are commands, parsed on Enter.

use agora_app::{App, AppAction, KeyInput, Modal, View};
use agora_core::{ForumId, ReplyId, TopicId};

use crate::{
    commands::{self, Command},
    labels::labels,
};

/// Input state for the TUI.
///
/// The buffer mirrors the search filter of the list being shown. It is
/// reloaded from the App whenever the view changes.
#[derive(Debug, Default)]
pub struct InputState {
    /// Text buffer for user input.
    buffer: String,
    /// Cursor position within the buffer, in characters.
    cursor: usize,
    /// Highlighted row of the current list.
    highlight: usize,
    /// View the buffer was loaded for.
    view: Option<View>,
}

impl InputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Highlighted row of a list of `len` rows, clamped to the list.
    pub fn highlight(&self, len: usize) -> Option<usize> {
        len.checked_sub(1).map(|last| self.highlight.min(last))
    }

    /// Reload the buffer if the App moved to another view.
    pub fn follow(&mut self, app: &App) {
        let view = app.view();
        if self.view == Some(view) {
            return;
        }
        self.view = Some(view);
        self.highlight = 0;
        self.buffer = match view {
            View::Forums => app.forum_search().to_owned(),
            View::Topics => app.topic_search().to_owned(),
            View::Entry | View::Thread => String::new(),
        };
        self.cursor = self.buffer.chars().count();
    }

    /// Handle a key input event.
    ///
    /// Returns actions to process (may be empty for ignored keys, or contain
    /// API actions for commands and submissions).
    pub fn handle_key(&mut self, key: KeyInput, app: &mut App) -> Vec<AppAction> {
        self.follow(app);

        if app.alert().is_some() {
            return match key {
                KeyInput::Enter | KeyInput::Esc => app.dismiss_alert(),
                _ => vec![],
            };
        }
        match app.modal() {
            Some(Modal::Form(_)) => return Self::handle_form_key(key, app),
            Some(Modal::ConfirmDelete { .. }) => return Self::handle_confirm_key(key, app),
            None => {},
        }

        match key {
            KeyInput::Char(c) => {
                let at = self.byte_offset();
                self.buffer.insert(at, c);
                self.cursor += 1;
                self.sync_search(app)
            },
            KeyInput::Backspace => {
                if self.cursor == 0 {
                    return vec![];
                }
                self.cursor -= 1;
                let at = self.byte_offset();
                self.buffer.remove(at);
                self.sync_search(app)
            },
            KeyInput::Delete => {
                if self.cursor >= self.buffer.chars().count() {
                    return vec![];
                }
                let at = self.byte_offset();
                self.buffer.remove(at);
                self.sync_search(app)
            },
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Right => {
                self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
                vec![AppAction::Render]
            },
            KeyInput::Home => {
                self.cursor = 0;
                vec![AppAction::Render]
            },
            KeyInput::End => {
                self.cursor = self.buffer.chars().count();
                vec![AppAction::Render]
            },
            KeyInput::Up => {
                self.highlight = self.highlight(list_len(app)).unwrap_or(0).saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                let len = list_len(app);
                self.highlight = self.highlight(len).map_or(0, |row| (row + 1).min(len - 1));
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.handle_enter(app),
            KeyInput::Esc => self.handle_esc(app),
            KeyInput::Tab | KeyInput::BackTab => vec![],
        }
    }

    /// Forum on the highlighted row of the forum list.
    pub fn highlighted_forum(&self, app: &App) -> Option<ForumId> {
        let forums = app.filtered_forums();
        self.highlight(forums.len()).and_then(|row| forums.get(row)).map(|f| f.id)
    }

    /// Topic on the highlighted row of the topic list.
    pub fn highlighted_topic(&self, app: &App) -> Option<TopicId> {
        let topics = app.filtered_topics();
        self.highlight(topics.len()).and_then(|row| topics.get(row)).map(|t| t.id)
    }

    /// Reply on the highlighted row of the thread.
    pub fn highlighted_reply(&self, app: &App) -> Option<ReplyId> {
        let replies = app.replies();
        self.highlight(replies.len()).and_then(|row| replies.get(row)).map(|r| r.id)
    }

    fn byte_offset(&self) -> usize {
        self.buffer.char_indices().nth(self.cursor).map_or(self.buffer.len(), |(at, _)| at)
    }

    fn clear_line(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Push the buffer into the filter of the list being shown.
    fn sync_search(&mut self, app: &mut App) -> Vec<AppAction> {
        if self.buffer.starts_with('/') {
            return vec![AppAction::Render];
        }
        self.highlight = 0;
        match app.view() {
            View::Forums => app.set_forum_search(self.buffer.clone()),
            View::Topics => app.set_topic_search(self.buffer.clone()),
            View::Entry | View::Thread => vec![AppAction::Render],
        }
    }

    /// Handle Enter key - run a command, open the highlighted row, or post
    /// the line as a reply.
    fn handle_enter(&mut self, app: &mut App) -> Vec<AppAction> {
        if self.buffer.starts_with('/') {
            let text = std::mem::take(&mut self.buffer);
            self.cursor = 0;
            let actions = self.run_command(commands::parse(&text), app);
            self.follow(app);
            return actions;
        }

        match app.view() {
            View::Entry => status(app, labels(app.locale()).sign_in_first),
            View::Forums => match self.highlighted_forum(app) {
                Some(forum_id) => app.select_forum(forum_id),
                None => vec![],
            },
            View::Topics => match self.highlighted_topic(app) {
                Some(topic_id) => app.select_topic(topic_id),
                None => vec![],
            },
            View::Thread => {
                if self.buffer.trim().is_empty() {
                    return vec![];
                }
                let actions = app.quick_reply(self.buffer.clone());
                if actions.iter().any(AppAction::is_request) {
                    self.clear_line();
                }
                actions
            },
        }
    }

    /// Handle Esc key - clear the line, then step back one level.
    fn handle_esc(&mut self, app: &mut App) -> Vec<AppAction> {
        if !self.buffer.is_empty() {
            self.clear_line();
            return self.sync_search(app);
        }
        step_back(app)
    }

    fn run_command(&self, command: Command, app: &mut App) -> Vec<AppAction> {
        let text = labels(app.locale());
        if app.session().is_none()
            && !matches!(command, Command::Login(_) | Command::Quit | Command::Help)
        {
            return status(app, text.sign_in_first);
        }

        match command {
            Command::Login(session) => app.login(session),
            Command::New => match app.view() {
                View::Forums => app.open_new_forum(),
                View::Topics => app.open_new_topic(),
                View::Thread => app.open_new_reply(),
                View::Entry => vec![],
            },
            Command::Edit { id } => match app.view() {
                View::Forums => self.on_target(app, id, Self::highlighted_forum, App::open_edit_forum),
                View::Topics => self.on_target(app, id, Self::highlighted_topic, App::open_edit_topic),
                View::Thread => self.on_target(app, id, Self::highlighted_reply, App::open_edit_reply),
                View::Entry => vec![],
            },
            Command::Delete { id } => match app.view() {
                View::Forums => {
                    self.on_target(app, id, Self::highlighted_forum, App::request_delete_forum)
                },
                View::Topics => {
                    self.on_target(app, id, Self::highlighted_topic, App::request_delete_topic)
                },
                View::Thread => {
                    self.on_target(app, id, Self::highlighted_reply, App::request_delete_reply)
                },
                View::Entry => vec![],
            },
            Command::Accept { id } => match app.view() {
                View::Thread => self.on_target(app, id, Self::highlighted_reply, App::toggle_accept),
                _ => status(app, text.thread_only),
            },
            Command::Reply => app.open_new_reply(),
            Command::Refresh => app.refresh(),
            Command::Back => step_back(app),
            Command::Logout => app.logout(),
            Command::Quit => app.quit(),
            Command::Help => status(app, text.help),
            Command::Unknown { input } => {
                app.set_status(format!("{}: {input}", text.unknown_command));
                vec![AppAction::Render]
            },
            Command::InvalidArgs { usage, .. } => {
                app.set_status(format!("{}: {usage}", text.usage));
                vec![AppAction::Render]
            },
        }
    }

    /// Apply `op` to the explicit id, or else to the highlighted row.
    fn on_target(
        &self,
        app: &mut App,
        id: Option<u64>,
        highlighted: fn(&Self, &App) -> Option<u64>,
        op: fn(&mut App, u64) -> Vec<AppAction>,
    ) -> Vec<AppAction> {
        match id.or_else(|| highlighted(self, app)) {
            Some(id) => op(app, id),
            None => status(app, labels(app.locale()).nothing_selected),
        }
    }

    /// Keys while a form modal is open.
    fn handle_form_key(key: KeyInput, app: &mut App) -> Vec<AppAction> {
        let Some(Modal::Form(form)) = app.modal() else {
            return vec![];
        };
        let focus = form.focus;
        let mut value = form.focused_value().to_owned();

        match key {
            KeyInput::Char(c) => {
                value.push(c);
                app.set_draft_field(focus, value)
            },
            KeyInput::Backspace => {
                if value.pop().is_none() {
                    return vec![];
                }
                app.set_draft_field(focus, value)
            },
            KeyInput::Tab | KeyInput::Down => app.focus_next_field(),
            KeyInput::BackTab | KeyInput::Up => app.focus_previous_field(),
            KeyInput::Enter => app.submit_modal(),
            KeyInput::Esc => app.close_modal(),
            _ => vec![],
        }
    }

    /// Keys while a delete confirmation is open.
    fn handle_confirm_key(key: KeyInput, app: &mut App) -> Vec<AppAction> {
        match key {
            KeyInput::Enter | KeyInput::Char('y' | 'Y' | 's' | 'S') => app.confirm_delete(),
            KeyInput::Esc | KeyInput::Char('n' | 'N') => app.close_modal(),
            _ => vec![],
        }
    }
}

/// Rows in the list of the current view.
fn list_len(app: &App) -> usize {
    match app.view() {
        View::Entry => 0,
        View::Forums => app.filtered_forums().len(),
        View::Topics => app.filtered_topics().len(),
        View::Thread => app.replies().len(),
    }
}

fn step_back(app: &mut App) -> Vec<AppAction> {
    match app.view() {
        View::Thread => app.clear_topic(),
        View::Topics => app.clear_forum(),
        View::Entry | View::Forums => vec![],
    }
}

fn status(app: &mut App, message: &str) -> Vec<AppAction> {
    app.set_status(message);
    vec![AppAction::Render]
}

#[cfg(test)]
mod tests {
    use agora_app::{AlertKind, AppEvent};
    use agora_core::{Forum, Locale, Profession, Reply, Topic, UserSession};

    use super::*;

    fn forum(id: u64, name: &str) -> Forum {
        Forum {
            id,
            name: name.to_owned(),
            description: String::new(),
            tag: String::new(),
            topics_count: 0,
            created_at: 0,
        }
    }

    fn topic(id: u64, forum_id: u64) -> Topic {
        Topic {
            id,
            title: format!("Topic {id}"),
            author: String::new(),
            content: String::new(),
            replies_count: 0,
            created_at: 0,
            forum_id,
        }
    }

    fn reply(id: u64, author_id: u64) -> Reply {
        Reply {
            id,
            author: String::new(),
            author_id: Some(author_id),
            text: "text".to_owned(),
            accepted: false,
            created_at: 0,
            topic_id: 10,
            forum_id: 1,
        }
    }

    fn app_with(profession: Profession) -> App {
        let mut app = App::new(Locale::EnUs, Some(UserSession::new(5, "Ana", profession)));
        let _ = app.mount();
        let _ = app.handle(AppEvent::ForumsLoaded(vec![forum(1, "Math"), forum(2, "Physics")]));
        app
    }

    fn in_thread(profession: Profession) -> App {
        let mut app = app_with(profession);
        let _ = app.select_forum(1);
        let _ = app.handle(AppEvent::TopicsLoaded { forum_id: 1, topics: vec![topic(10, 1)] });
        let _ = app.select_topic(10);
        let _ = app.handle(AppEvent::RepliesLoaded {
            forum_id: 1,
            topic_id: 10,
            replies: vec![reply(100, 9), reply(101, 5)],
        });
        app
    }

    fn type_text(input: &mut InputState, app: &mut App, text: &str) -> Vec<AppAction> {
        let mut actions = Vec::new();
        for c in text.chars() {
            actions.extend(input.handle_key(KeyInput::Char(c), app));
        }
        actions
    }

    #[test]
    fn typing_filters_forums() {
        let mut input = InputState::new();
        let mut app = app_with(Profession::Student);

        type_text(&mut input, &mut app, "PHY");

        assert_eq!(app.forum_search(), "PHY");
        assert_eq!(app.filtered_forums().len(), 1);
        assert_eq!(input.highlighted_forum(&app), Some(2));
    }

    #[test]
    fn editing_handles_multibyte_text() {
        let mut input = InputState::new();
        let mut app = app_with(Profession::Student);

        type_text(&mut input, &mut app, "fís");
        input.handle_key(KeyInput::Left, &mut app);
        input.handle_key(KeyInput::Backspace, &mut app);

        assert_eq!(input.buffer(), "fs");
        assert_eq!(input.cursor(), 1);
        assert_eq!(app.forum_search(), "fs");
    }

    #[test]
    fn arrows_move_highlight_within_list() {
        let mut input = InputState::new();
        let mut app = app_with(Profession::Student);

        input.handle_key(KeyInput::Down, &mut app);
        input.handle_key(KeyInput::Down, &mut app);
        assert_eq!(input.highlighted_forum(&app), Some(2));

        input.handle_key(KeyInput::Up, &mut app);
        input.handle_key(KeyInput::Up, &mut app);
        assert_eq!(input.highlighted_forum(&app), Some(1));
    }

    #[test]
    fn enter_opens_highlighted_forum() {
        let mut input = InputState::new();
        let mut app = app_with(Profession::Student);
        input.handle_key(KeyInput::Down, &mut app);

        let actions = input.handle_key(KeyInput::Enter, &mut app);

        assert_eq!(actions[0], AppAction::LoadTopics { forum_id: 2 });
        assert_eq!(app.view(), View::Topics);
    }

    #[test]
    fn view_change_reloads_buffer() {
        let mut input = InputState::new();
        let mut app = app_with(Profession::Student);
        type_text(&mut input, &mut app, "ma");
        input.handle_key(KeyInput::Enter, &mut app);

        input.follow(&app);
        assert_eq!(input.buffer(), "");

        input.handle_key(KeyInput::Esc, &mut app);
        input.follow(&app);
        assert_eq!(app.view(), View::Forums);
        assert_eq!(input.buffer(), "ma");
    }

    #[test]
    fn enter_in_thread_posts_reply() {
        let mut input = InputState::new();
        let mut app = in_thread(Profession::Student);
        type_text(&mut input, &mut app, "Obrigado");

        let actions = input.handle_key(KeyInput::Enter, &mut app);

        assert!(matches!(actions[0], AppAction::CreateReply { topic_id: 10, .. }));
        assert!(input.buffer().is_empty());
    }

    #[test]
    fn invalid_reply_keeps_text() {
        let mut input = InputState::new();
        let mut app = in_thread(Profession::Student);
        type_text(&mut input, &mut app, "k");

        let actions = input.handle_key(KeyInput::Enter, &mut app);

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(input.buffer(), "k");
        assert_eq!(app.alert().map(|a| a.kind), Some(AlertKind::Invalid));
    }

    #[test]
    fn esc_steps_back() {
        let mut input = InputState::new();
        let mut app = in_thread(Profession::Student);

        input.handle_key(KeyInput::Esc, &mut app);
        assert_eq!(app.view(), View::Topics);

        input.handle_key(KeyInput::Esc, &mut app);
        assert_eq!(app.view(), View::Forums);
    }

    #[test]
    fn alert_swallows_keys_until_dismissed() {
        let mut input = InputState::new();
        let mut app = app_with(Profession::Student);
        type_text(&mut input, &mut app, "/new");
        input.handle_key(KeyInput::Enter, &mut app);
        assert_eq!(app.alert().map(|a| a.kind), Some(AlertKind::Denied));

        input.handle_key(KeyInput::Char('x'), &mut app);
        assert_eq!(app.forum_search(), "");

        input.handle_key(KeyInput::Enter, &mut app);
        assert!(app.alert().is_none());
    }

    #[test]
    fn form_keys_edit_focused_field() {
        let mut input = InputState::new();
        let mut app = app_with(Profession::Professor);
        type_text(&mut input, &mut app, "/new");
        input.handle_key(KeyInput::Enter, &mut app);

        type_text(&mut input, &mut app, "Quím");
        input.handle_key(KeyInput::Backspace, &mut app);
        input.handle_key(KeyInput::Tab, &mut app);
        type_text(&mut input, &mut app, "Reações");

        let Some(Modal::Form(form)) = app.modal() else {
            unreachable!("form should be open");
        };
        assert_eq!(form.draft.value(0), Some("Quí"));
        assert_eq!(form.draft.value(1), Some("Reações"));
        assert_eq!(form.focus, 1);

        input.handle_key(KeyInput::Esc, &mut app);
        assert!(app.modal().is_none());
    }

    #[test]
    fn edit_command_uses_highlighted_reply() {
        let mut input = InputState::new();
        let mut app = in_thread(Profession::Student);
        input.handle_key(KeyInput::Down, &mut app);
        type_text(&mut input, &mut app, "/edit");

        input.handle_key(KeyInput::Enter, &mut app);

        assert!(matches!(app.modal(), Some(Modal::Form(form)) if form.target.editing() == Some(101)));
    }

    #[test]
    fn delete_command_with_id_asks_confirmation() {
        let mut input = InputState::new();
        let mut app = in_thread(Profession::Student);
        type_text(&mut input, &mut app, "/delete 101");
        input.handle_key(KeyInput::Enter, &mut app);
        assert!(matches!(app.modal(), Some(Modal::ConfirmDelete { .. })));

        let actions = input.handle_key(KeyInput::Char('y'), &mut app);

        assert_eq!(actions[0], AppAction::DeleteReply { forum_id: 1, topic_id: 10, reply_id: 101 });
    }

    #[test]
    fn commands_need_a_session() {
        let mut input = InputState::new();
        let mut app = App::new(Locale::EnUs, None);
        type_text(&mut input, &mut app, "/new");

        input.handle_key(KeyInput::Enter, &mut app);

        assert_eq!(app.status_message(), Some("Sign in first with /login."));
        assert!(app.modal().is_none());
    }

    #[test]
    fn login_command_persists_session() {
        let mut input = InputState::new();
        let mut app = App::new(Locale::EnUs, None);
        type_text(&mut input, &mut app, "/login 3 Ana professor");

        let actions = input.handle_key(KeyInput::Enter, &mut app);

        assert_eq!(actions[0], AppAction::PersistSession(UserSession::new(
            3,
            "Ana",
            Profession::Professor
        )));
    }

    #[test]
    fn accept_outside_thread_hints() {
        let mut input = InputState::new();
        let mut app = app_with(Profession::Student);
        type_text(&mut input, &mut app, "/accept");

        input.handle_key(KeyInput::Enter, &mut app);

        assert_eq!(app.status_message(), Some("Only available inside a topic."));
    }
}
