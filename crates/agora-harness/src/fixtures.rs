//! Canned users and a seeded backend for simulation tests.

use agora_client::MemoryApi;
use agora_core::{Forum, Profession, Reply, Topic, UserSession};

/// Seed timestamp: 2024-03-01T12:00:00Z.
pub const SEEDED_AT: i64 = 1_709_294_400_000;

/// Forum holding [`CALCULUS_TOPIC`].
pub const MATH_FORUM: u64 = 1;
/// Forum with no topics.
pub const PHYSICS_FORUM: u64 = 2;
/// Topic with one reply by [`professor`].
pub const CALCULUS_TOPIC: u64 = 3;
/// The only seeded reply.
pub const PROFESSOR_REPLY: u64 = 4;

/// Professor who manages forums and topics.
pub fn professor() -> UserSession {
    UserSession::new(100, "Prof. Helena", Profession::Professor)
}

/// Student who replies and accepts answers.
pub fn student() -> UserSession {
    UserSession::new(200, "Bruno", Profession::Student)
}

/// A second student, for ownership checks.
pub fn other_student() -> UserSession {
    UserSession::new(201, "Carla", Profession::Student)
}

/// In-memory backend with two forums, one topic and one reply.
pub fn seeded_api() -> MemoryApi {
    let forums = vec![
        Forum {
            id: MATH_FORUM,
            name: "Matemática".into(),
            description: "Cálculo, álgebra e geometria".into(),
            tag: "MAT".into(),
            topics_count: 1,
            created_at: SEEDED_AT,
        },
        Forum {
            id: PHYSICS_FORUM,
            name: "Física".into(),
            description: "Mecânica e termodinâmica".into(),
            tag: "FIS".into(),
            topics_count: 0,
            created_at: SEEDED_AT,
        },
    ];
    let topics = vec![Topic {
        id: CALCULUS_TOPIC,
        title: "Limites no infinito".into(),
        author: professor().name,
        content: "Como calcular o limite de 1/x quando x tende ao infinito?".into(),
        replies_count: 1,
        created_at: SEEDED_AT,
        forum_id: MATH_FORUM,
    }];
    let replies = vec![Reply {
        id: PROFESSOR_REPLY,
        author: professor().name,
        author_id: Some(professor().id),
        text: "O limite é zero: o denominador cresce sem limite.".into(),
        accepted: false,
        created_at: SEEDED_AT,
        topic_id: CALCULUS_TOPIC,
        forum_id: MATH_FORUM,
    }];
    MemoryApi::with_records(forums, topics, replies)
}
