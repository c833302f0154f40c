//! Demo backend
//!
//! Runs the client against an in-process backend when no server is given,
//! seeded with a small classroom.

use agora_client::MemoryApi;
use agora_core::{Forum, Reply, Timestamp, Topic};
use chrono::Utc;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Author of the seeded forums and topics.
pub const DEMO_PROFESSOR: (u64, &str) = (1, "Prof. Helena");

/// Author of the seeded student reply.
pub const DEMO_STUDENT: (u64, &str) = (2, "Bruno");

/// In-memory backend with a few forums, topics and replies.
pub fn seeded_api() -> MemoryApi {
    seeded_at(Utc::now().timestamp_millis())
}

fn seeded_at(now: Timestamp) -> MemoryApi {
    let (professor_id, professor) = DEMO_PROFESSOR;
    let (student_id, student) = DEMO_STUDENT;

    let forum = |id, name: &str, description: &str, tag: &str, topics_count, age| Forum {
        id,
        name: name.to_owned(),
        description: description.to_owned(),
        tag: tag.to_owned(),
        topics_count,
        created_at: now - age,
    };
    let forums = vec![
        forum(10, "Matemática", "Cálculo, álgebra e geometria", "MAT", 2, 30 * DAY_MS),
        forum(11, "Física", "Mecânica, ondas e termodinâmica", "FIS", 1, 20 * DAY_MS),
        forum(12, "Literatura", "Leituras e redações da turma", "LIT", 0, 3 * DAY_MS),
    ];

    let topic = |id, forum_id, title: &str, content: &str, replies_count, age| Topic {
        id,
        title: title.to_owned(),
        author: professor.to_owned(),
        content: content.to_owned(),
        replies_count,
        created_at: now - age,
        forum_id,
    };
    let topics = vec![
        topic(
            20,
            10,
            "Limites no infinito",
            "Como calcular o limite de 1/x quando x tende ao infinito?",
            2,
            5 * DAY_MS,
        ),
        topic(21, 10, "Lista de derivadas", "Dúvidas sobre a lista 3 ficam aqui.", 0, 2 * HOUR_MS),
        topic(
            22,
            11,
            "Queda livre",
            "Um corpo cai de 20 m. Quanto tempo leva até o chão?",
            0,
            DAY_MS,
        ),
    ];

    let reply = |id, author: &str, author_id, text: &str, accepted, age| Reply {
        id,
        author: author.to_owned(),
        author_id: Some(author_id),
        text: text.to_owned(),
        accepted,
        created_at: now - age,
        topic_id: 20,
        forum_id: 10,
    };
    let replies = vec![
        reply(30, student, student_id, "Acho que tende a zero.", true, 4 * DAY_MS),
        reply(
            31,
            professor,
            professor_id,
            "Isso: o denominador cresce sem limite.",
            false,
            3 * DAY_MS + 20 * MINUTE_MS,
        ),
    ];

    MemoryApi::with_records(forums, topics, replies)
}

#[cfg(test)]
mod tests {
    use agora_client::ForumApi;

    use super::*;

    #[tokio::test]
    async fn counts_match_seeded_records() {
        let api = seeded_at(1_000 * DAY_MS);

        let forums = api.list_forums().await.unwrap();
        for forum in &forums {
            let topics = api.list_topics(forum.id).await.unwrap();
            assert_eq!(topics.len() as u32, forum.topics_count, "forum {}", forum.name);
            for topic in &topics {
                let replies = api.list_replies(forum.id, topic.id).await.unwrap();
                assert_eq!(replies.len() as u32, topic.replies_count, "topic {}", topic.title);
            }
        }
    }

    #[tokio::test]
    async fn seeded_forums_are_dated_in_the_recent_past() {
        let before = Utc::now().timestamp_millis();
        let forums = seeded_api().list_forums().await.unwrap();

        for forum in &forums {
            assert!(forum.created_at < before, "forum {}", forum.name);
            assert!(before - forum.created_at <= 31 * DAY_MS, "forum {}", forum.name);
        }
    }
}
