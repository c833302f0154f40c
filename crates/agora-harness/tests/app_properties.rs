//! Property-based tests for whole user sessions.
//!
//! Random scripts of user operations run through the production Runtime
//! against the seeded in-memory backend. The standard invariants are checked
//! on every render and before every poll; any violation panics and fails the
//! case.

use agora_app::{App, AppAction, Runtime};
use agora_client::{ForumApi, MemoryApi, MemorySessionStore};
use agora_core::{Locale, UserSession};
use agora_harness::{
    InvariantRegistry, SimDriver,
    fixtures::{other_student, professor, seeded_api, student},
};
use proptest::prelude::*;

/// One user operation.
#[derive(Debug, Clone)]
enum Op {
    SelectForum(u64),
    ClearForum,
    SelectTopic(u64),
    ClearTopic,
    Refresh,
    Search(String),
    NewForum(String),
    NewTopic(String),
    Reply(String),
    Accept(u64),
    DeleteForum(u64),
    DeleteTopic(u64),
    DeleteReply(u64),
    CloseModal,
    DismissAlert,
    Logout,
    Login(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (1u64..12).prop_map(Op::SelectForum),
        1 => Just(Op::ClearForum),
        4 => (1u64..12).prop_map(Op::SelectTopic),
        1 => Just(Op::ClearTopic),
        1 => Just(Op::Refresh),
        1 => "[a-zç ]{0,3}".prop_map(Op::Search),
        2 => "[a-zA-Z ]{0,12}".prop_map(Op::NewForum),
        2 => "[a-zA-Z ]{0,12}".prop_map(Op::NewTopic),
        2 => "[a-zA-Z ]{0,12}".prop_map(Op::Reply),
        2 => (1u64..12).prop_map(Op::Accept),
        1 => (1u64..12).prop_map(Op::DeleteForum),
        1 => (1u64..12).prop_map(Op::DeleteTopic),
        1 => (1u64..12).prop_map(Op::DeleteReply),
        1 => Just(Op::CloseModal),
        1 => Just(Op::DismissAlert),
        1 => Just(Op::Logout),
        1 => (0u8..3).prop_map(Op::Login),
    ]
}

fn user(which: u8) -> UserSession {
    match which {
        0 => professor(),
        1 => student(),
        _ => other_student(),
    }
}

/// Fill every field of the open form with `text` and submit it.
fn fill_and_submit(app: &mut App, mut actions: Vec<AppAction>, text: &str) -> Vec<AppAction> {
    for index in 0..3 {
        actions.extend(app.set_draft_field(index, format!("{text} campo {index}")));
    }
    actions.extend(app.submit_modal());
    actions
}

fn apply(app: &mut App, op: Op) -> Vec<AppAction> {
    match op {
        Op::SelectForum(id) => app.select_forum(id),
        Op::ClearForum => app.clear_forum(),
        Op::SelectTopic(id) => app.select_topic(id),
        Op::ClearTopic => app.clear_topic(),
        Op::Refresh => app.refresh(),
        Op::Search(text) => app.set_forum_search(text),
        Op::NewForum(text) => {
            let actions = app.open_new_forum();
            fill_and_submit(app, actions, &text)
        },
        Op::NewTopic(text) => {
            let actions = app.open_new_topic();
            fill_and_submit(app, actions, &text)
        },
        Op::Reply(text) => app.quick_reply(text),
        Op::Accept(id) => app.toggle_accept(id),
        Op::DeleteForum(id) => {
            let mut actions = app.request_delete_forum(id);
            actions.extend(app.confirm_delete());
            actions
        },
        Op::DeleteTopic(id) => {
            let mut actions = app.request_delete_topic(id);
            actions.extend(app.confirm_delete());
            actions
        },
        Op::DeleteReply(id) => {
            let mut actions = app.request_delete_reply(id);
            actions.extend(app.confirm_delete());
            actions
        },
        Op::CloseModal => app.close_modal(),
        Op::DismissAlert => app.dismiss_alert(),
        Op::Logout => app.logout(),
        Op::Login(which) => app.login(user(which)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: screen invariants hold through arbitrary sessions, and the
    /// local forum list never drifts from the backend.
    #[test]
    fn prop_sessions_keep_invariants(
        start in 0u8..3,
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let driver = SimDriver::new().with_invariants(InvariantRegistry::standard());
        for op in ops {
            driver.call(move |app| apply(app, op));
        }
        let store = MemorySessionStore::with_session(user(start));
        let mut runtime = Runtime::new(driver, seeded_api(), store, Locale::PtBr);

        rt.block_on(runtime.run()).unwrap();

        if runtime.app().session().is_some() {
            let api: &MemoryApi = runtime.api();
            let mut remote: Vec<u64> =
                rt.block_on(api.list_forums()).unwrap().iter().map(|f| f.id).collect();
            let mut local: Vec<u64> = runtime.app().forums().iter().map(|f| f.id).collect();
            remote.sort_unstable();
            local.sort_unstable();
            prop_assert_eq!(local, remote);
        }
    }
}
