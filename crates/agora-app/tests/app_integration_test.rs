//! Integration tests for App and Bridge behavior.
//!
//! # Oracle Pattern
//!
//! Tests end with oracle checks that verify:
//! - App state reflects what the backend holds
//! - Parent counters stay in step with child lists
//! - Failed calls leave the App in a usable state

use agora_app::{AlertKind, App, AppAction, Bridge, Modal, View};
use agora_client::{ForumApi, MemoryApi};
use agora_core::{ForumDraft, Locale, Profession, UserSession};

/// Process actions from App through Bridge and update App state.
///
/// Session actions are applied directly, as the runtime would after a
/// successful store call.
async fn process_actions(app: &mut App, bridge: &Bridge<MemoryApi>, actions: Vec<AppAction>) {
    let mut pending = actions;
    while !pending.is_empty() {
        for action in std::mem::take(&mut pending) {
            match action {
                AppAction::Render | AppAction::Quit => {},
                AppAction::PersistSession(session) => {
                    pending.extend(app.handle(agora_app::AppEvent::SessionPersisted(session)));
                },
                AppAction::ClearSession => {
                    pending.extend(app.handle(agora_app::AppEvent::LoggedOut));
                },
                action => {
                    for event in bridge.process_app_action(action).await {
                        pending.extend(app.handle(event));
                    }
                },
            }
        }
    }
}

async fn seeded_bridge() -> Bridge<MemoryApi> {
    let api = MemoryApi::new();
    api.create_forum(&ForumDraft {
        name: "Matemática".into(),
        description: "Cálculo e álgebra linear".into(),
        tag: "MAT".into(),
    })
    .await
    .unwrap();
    Bridge::new(api)
}

/// Sign in through the App API.
async fn signed_in(bridge: &Bridge<MemoryApi>, profession: Profession) -> App {
    let mut app = App::new(Locale::PtBr, None);
    let actions = app.login(UserSession::new(7, "Ana", profession));
    process_actions(&mut app, bridge, actions).await;
    app
}

#[tokio::test]
async fn professor_builds_a_forum_tree() {
    let bridge = seeded_bridge().await;
    let mut app = signed_in(&bridge, Profession::Professor).await;
    assert_eq!(app.view(), View::Forums);
    let forum_id = app.forums()[0].id;

    let actions = app.select_forum(forum_id);
    process_actions(&mut app, &bridge, actions).await;

    let _ = app.open_new_topic();
    let _ = app.set_draft_field(0, "Limites laterais");
    let _ = app.set_draft_field(1, "Quando o limite existe?");
    let actions = app.submit_modal();
    process_actions(&mut app, &bridge, actions).await;

    // Oracle: the topic is listed locally and counted on the forum
    assert!(app.modal().is_none());
    assert_eq!(app.topics().len(), 1);
    assert_eq!(app.topics()[0].author, "Ana");
    assert_eq!(app.selected_forum().map(|f| f.topics_count), Some(1));

    // Oracle: a fresh fetch agrees with the local bookkeeping
    let actions = app.clear_forum();
    process_actions(&mut app, &bridge, actions).await;
    let actions = app.refresh();
    process_actions(&mut app, &bridge, actions).await;
    assert_eq!(app.forums()[0].topics_count, 1);
}

#[tokio::test]
async fn student_replies_and_accepts() {
    let bridge = seeded_bridge().await;
    let forum_id = bridge.api().list_forums().await.unwrap()[0].id;
    let topic = bridge
        .api()
        .create_topic(forum_id, &agora_core::NewTopic {
            draft: agora_core::TopicDraft {
                title: "Derivadas".into(),
                content: "Regra da cadeia".into(),
            },
            author: "Prof".into(),
        })
        .await
        .unwrap();

    let mut app = signed_in(&bridge, Profession::Student).await;
    let actions = app.select_forum(forum_id);
    process_actions(&mut app, &bridge, actions).await;
    let actions = app.select_topic(topic.id);
    process_actions(&mut app, &bridge, actions).await;
    assert_eq!(app.view(), View::Thread);

    let actions = app.quick_reply("Aplique a regra duas vezes");
    process_actions(&mut app, &bridge, actions).await;
    let reply_id = app.replies()[0].id;

    let actions = app.toggle_accept(reply_id);
    process_actions(&mut app, &bridge, actions).await;

    // Oracle: local reply matches the backend
    let stored = bridge.api().replies_of(topic.id).await;
    assert_eq!(stored.len(), 1);
    assert!(stored[0].accepted);
    assert_eq!(app.replies(), stored.as_slice());
    assert_eq!(app.selected_topic().map(|t| t.replies_count), Some(1));
}

#[tokio::test]
async fn offline_backend_alerts_and_recovers() {
    let bridge = seeded_bridge().await;
    let mut app = signed_in(&bridge, Profession::Professor).await;
    bridge.api().set_offline(true);

    let _ = app.open_new_forum();
    let _ = app.set_draft_field(0, "Física");
    let _ = app.set_draft_field(1, "Mecânica clássica");
    let _ = app.set_draft_field(2, "FIS");
    let actions = app.submit_modal();
    process_actions(&mut app, &bridge, actions).await;

    // Oracle: modal kept with its draft, error alert shown
    assert!(matches!(app.modal(), Some(Modal::Form(form)) if !form.submitting));
    assert_eq!(app.alert().map(|a| a.kind), Some(AlertKind::Error));
    assert_eq!(
        app.alert().map(|a| a.message.as_str()),
        Some("Não foi possível criar o fórum.")
    );

    bridge.api().set_offline(false);
    let _ = app.dismiss_alert();
    let actions = app.submit_modal();
    process_actions(&mut app, &bridge, actions).await;

    assert!(app.modal().is_none());
    assert_eq!(app.forums().len(), 2);
}

#[tokio::test]
async fn deleting_selected_forum_returns_to_list() {
    let bridge = seeded_bridge().await;
    let mut app = signed_in(&bridge, Profession::Professor).await;
    let forum_id = app.forums()[0].id;
    let actions = app.select_forum(forum_id);
    process_actions(&mut app, &bridge, actions).await;

    let _ = app.request_delete_forum(forum_id);
    let actions = app.confirm_delete();
    process_actions(&mut app, &bridge, actions).await;

    assert_eq!(app.view(), View::Forums);
    assert!(app.forums().is_empty());
    assert!(bridge.api().list_forums().await.unwrap().is_empty());
}

#[tokio::test]
async fn professor_edits_topic_and_answers_by_form() {
    let bridge = seeded_bridge().await;
    let mut app = signed_in(&bridge, Profession::Professor).await;
    let forum_id = app.forums()[0].id;
    let actions = app.select_forum(forum_id);
    process_actions(&mut app, &bridge, actions).await;

    let _ = app.open_new_topic();
    let _ = app.set_draft_field(0, "Limites");
    let _ = app.set_draft_field(1, "Quando o limite existe?");
    let actions = app.submit_modal();
    process_actions(&mut app, &bridge, actions).await;
    let topic_id = app.topics()[0].id;

    // Cancelling an edit leaves the topic alone
    let _ = app.open_edit_topic(topic_id);
    let _ = app.set_draft_field(0, "Descartado");
    let _ = app.close_modal();
    assert!(app.modal().is_none());
    assert_eq!(app.topics()[0].title, "Limites");

    let _ = app.open_edit_topic(topic_id);
    let _ = app.focus_previous_field();
    assert!(matches!(app.modal(), Some(Modal::Form(form)) if form.focus == 1));
    let _ = app.focus_next_field();
    let _ = app.set_draft_field(0, "Limites laterais");
    let actions = app.submit_modal();
    process_actions(&mut app, &bridge, actions).await;

    // Oracle: the edit replaced the topic by id, content untouched
    assert!(app.modal().is_none());
    assert_eq!(app.topics().len(), 1);
    assert_eq!(app.topics()[0].title, "Limites laterais");
    assert_eq!(app.topics()[0].content, "Quando o limite existe?");

    let actions = app.select_topic(topic_id);
    process_actions(&mut app, &bridge, actions).await;
    let _ = app.open_new_reply();
    let _ = app.set_draft_field(0, "Veja a definição formal.");
    let actions = app.submit_modal();
    process_actions(&mut app, &bridge, actions).await;

    // Oracle: the reply is stored under the topic and counted
    assert_eq!(app.replies().len(), 1);
    assert_eq!(app.replies()[0].author_id, Some(7));
    assert_eq!(app.selected_topic().map(|t| t.replies_count), Some(1));
    assert_eq!(bridge.api().replies_of(topic_id).await.len(), 1);
}
