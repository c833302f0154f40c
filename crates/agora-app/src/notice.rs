//! Localized alert and status texts.

use agora_core::{Locale, ValidationError};

use crate::{Alert, AlertKind, Operation};

/// Why a role gate refused an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Denial {
    ManageForums,
    ManageTopics,
    Reply,
    NotAuthor,
    Accept,
}

/// Missing selection for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Missing {
    Forum,
    Topic,
}

/// Problem with the identity typed on the entry screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoginProblem {
    EmptyName,
    UnknownRole,
}

/// Successful write, reported in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Done {
    ForumCreated,
    ForumUpdated,
    ForumDeleted,
    TopicCreated,
    TopicUpdated,
    TopicDeleted,
    ReplyCreated,
    ReplyUpdated,
    ReplyDeleted,
    ReplyAccepted,
    ReplyUnaccepted,
    SignedIn,
}

pub(crate) fn failure(operation: Operation, locale: Locale) -> Alert {
    let message = match locale {
        Locale::PtBr => match operation {
            Operation::LoadForums => "Não foi possível carregar os fóruns.",
            Operation::LoadTopics => "Não foi possível carregar os tópicos.",
            Operation::LoadReplies => "Não foi possível carregar as respostas.",
            Operation::CreateForum => "Não foi possível criar o fórum.",
            Operation::UpdateForum => "Não foi possível salvar o fórum.",
            Operation::DeleteForum => "Não foi possível excluir o fórum.",
            Operation::CreateTopic => "Não foi possível criar o tópico.",
            Operation::UpdateTopic => "Não foi possível salvar o tópico.",
            Operation::DeleteTopic => "Não foi possível excluir o tópico.",
            Operation::CreateReply => "Não foi possível enviar a resposta.",
            Operation::UpdateReply => "Não foi possível salvar a resposta.",
            Operation::DeleteReply => "Não foi possível excluir a resposta.",
            Operation::AcceptReply => "Não foi possível atualizar a resposta.",
            Operation::SaveSession => "Não foi possível entrar. Tente novamente.",
            Operation::ClearSession => "Não foi possível deslogar. Tente novamente.",
        },
        Locale::EnUs => match operation {
            Operation::LoadForums => "Could not load forums.",
            Operation::LoadTopics => "Could not load topics.",
            Operation::LoadReplies => "Could not load replies.",
            Operation::CreateForum => "Could not create the forum.",
            Operation::UpdateForum => "Could not save the forum.",
            Operation::DeleteForum => "Could not delete the forum.",
            Operation::CreateTopic => "Could not create the topic.",
            Operation::UpdateTopic => "Could not save the topic.",
            Operation::DeleteTopic => "Could not delete the topic.",
            Operation::CreateReply => "Could not send the reply.",
            Operation::UpdateReply => "Could not save the reply.",
            Operation::DeleteReply => "Could not delete the reply.",
            Operation::AcceptReply => "Could not update the reply.",
            Operation::SaveSession => "Could not sign in. Try again.",
            Operation::ClearSession => "Could not sign out. Try again.",
        },
    };
    let title = match locale {
        Locale::PtBr => "Erro",
        Locale::EnUs => "Error",
    };
    alert(AlertKind::Error, title, message)
}

pub(crate) fn denied(denial: Denial, locale: Locale) -> Alert {
    let (title, message) = match locale {
        Locale::PtBr => ("Acesso negado", match denial {
            Denial::ManageForums => "Apenas professores podem gerenciar fóruns.",
            Denial::ManageTopics => "Apenas professores podem gerenciar tópicos.",
            Denial::Reply => "Apenas alunos e professores podem responder.",
            Denial::NotAuthor => "Apenas o autor pode alterar esta resposta.",
            Denial::Accept => "Apenas alunos podem aceitar respostas.",
        }),
        Locale::EnUs => ("Not allowed", match denial {
            Denial::ManageForums => "Only professors can manage forums.",
            Denial::ManageTopics => "Only professors can manage topics.",
            Denial::Reply => "Only students and professors can reply.",
            Denial::NotAuthor => "Only the author can change this reply.",
            Denial::Accept => "Only students can accept replies.",
        }),
    };
    alert(AlertKind::Denied, title, message)
}

pub(crate) fn invalid(error: &ValidationError, locale: Locale) -> Alert {
    Alert { kind: AlertKind::Invalid, title: invalid_title(locale).to_owned(), message: error.message(locale) }
}

pub(crate) fn invalid_login(problem: LoginProblem, locale: Locale) -> Alert {
    let message = match (locale, problem) {
        (Locale::PtBr, LoginProblem::EmptyName) => "Informe seu nome.",
        (Locale::PtBr, LoginProblem::UnknownRole) => "Perfil deve ser professor ou aluno.",
        (Locale::EnUs, LoginProblem::EmptyName) => "Enter your name.",
        (Locale::EnUs, LoginProblem::UnknownRole) => "Role must be professor or student.",
    };
    alert(AlertKind::Invalid, invalid_title(locale), message)
}

pub(crate) fn missing(missing: Missing, locale: Locale) -> Alert {
    let (title, message) = match (locale, missing) {
        (Locale::PtBr, Missing::Forum) => ("Aviso", "Selecione um fórum primeiro."),
        (Locale::PtBr, Missing::Topic) => ("Aviso", "Selecione um tópico primeiro."),
        (Locale::EnUs, Missing::Forum) => ("Notice", "Select a forum first."),
        (Locale::EnUs, Missing::Topic) => ("Notice", "Select a topic first."),
    };
    alert(AlertKind::Info, title, message)
}

pub(crate) fn done(done: Done, locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => match done {
            Done::ForumCreated => "Fórum criado.",
            Done::ForumUpdated => "Fórum atualizado.",
            Done::ForumDeleted => "Fórum excluído.",
            Done::TopicCreated => "Tópico criado.",
            Done::TopicUpdated => "Tópico atualizado.",
            Done::TopicDeleted => "Tópico excluído.",
            Done::ReplyCreated => "Resposta enviada.",
            Done::ReplyUpdated => "Resposta atualizada.",
            Done::ReplyDeleted => "Resposta excluída.",
            Done::ReplyAccepted => "Resposta aceita.",
            Done::ReplyUnaccepted => "Aceite removido.",
            Done::SignedIn => "Sessão iniciada.",
        },
        Locale::EnUs => match done {
            Done::ForumCreated => "Forum created.",
            Done::ForumUpdated => "Forum updated.",
            Done::ForumDeleted => "Forum deleted.",
            Done::TopicCreated => "Topic created.",
            Done::TopicUpdated => "Topic updated.",
            Done::TopicDeleted => "Topic deleted.",
            Done::ReplyCreated => "Reply sent.",
            Done::ReplyUpdated => "Reply updated.",
            Done::ReplyDeleted => "Reply deleted.",
            Done::ReplyAccepted => "Reply accepted.",
            Done::ReplyUnaccepted => "Acceptance removed.",
            Done::SignedIn => "Signed in.",
        },
    }
}

fn invalid_title(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Dados inválidos",
        Locale::EnUs => "Invalid input",
    }
}

fn alert(kind: AlertKind, title: &str, message: &str) -> Alert {
    Alert { kind, title: title.to_owned(), message: message.to_owned() }
}
