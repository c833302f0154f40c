//! The signed-in user and the role gates derived from it.

use serde::{Deserialize, Serialize};

use crate::{Reply, UserId};

/// Role reported by the server for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profession {
    /// Manages forums and topics.
    Professor,
    /// Accepts replies.
    Student,
    /// Any other value. Passes no gate.
    #[serde(other)]
    Unknown,
}

impl Profession {
    /// Parse a role name as typed by a user. Case-insensitive.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "professor" | "professora" | "teacher" => Self::Professor,
            "student" | "aluno" | "aluna" | "estudante" => Self::Student,
            _ => Self::Unknown,
        }
    }

    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Professor => "professor",
            Self::Student => "student",
            Self::Unknown => "unknown",
        }
    }
}

/// Authenticated user, persisted across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    /// Server-side user id. Matched against [`Reply::author_id`].
    pub id: UserId,
    /// Display name, used as the author of new topics and replies.
    pub name: String,
    /// Role.
    pub profession: Profession,
    /// Bearer token for the REST API, if the server issued one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserSession {
    /// Session without a token.
    pub fn new(id: UserId, name: impl Into<String>, profession: Profession) -> Self {
        Self { id, name: name.into(), profession, token: None }
    }

    /// Forums and topics may only be created, edited or deleted by professors.
    pub fn can_manage_forums(&self) -> bool {
        self.profession == Profession::Professor
    }

    /// Any student or professor may reply.
    pub fn can_reply(&self) -> bool {
        matches!(self.profession, Profession::Professor | Profession::Student)
    }

    /// Only students toggle acceptance.
    pub fn can_accept(&self) -> bool {
        self.profession == Profession::Student
    }

    /// Only the author may edit or delete a reply.
    pub fn owns(&self, reply: &Reply) -> bool {
        reply.author_id == Some(self.id)
    }
}
