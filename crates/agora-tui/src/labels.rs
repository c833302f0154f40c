//! Localized screen texts.

use agora_app::{DeleteTarget, FormTarget};
use agora_core::{Locale, Profession};

/// Fixed texts of the screen in one locale.
#[derive(Debug)]
pub struct Labels {
    /// Application name in the header.
    pub app_name: &'static str,
    /// Forum list title.
    pub forums: &'static str,
    /// Topic list title prefix.
    pub topics: &'static str,
    /// Thread title prefix.
    pub replies: &'static str,
    /// Placeholder of the forum filter.
    pub search_forum: &'static str,
    /// Placeholder of the topic filter.
    pub search_topic: &'static str,
    /// Placeholder of the reply line.
    pub write_reply: &'static str,
    /// Placeholder on the entry screen.
    pub type_command: &'static str,
    /// Empty forum list.
    pub no_forums: &'static str,
    /// Empty topic list.
    pub no_topics: &'static str,
    /// Empty thread.
    pub no_replies: &'static str,
    /// List in flight.
    pub loading: &'static str,
    /// Badge of an accepted reply.
    pub accepted: &'static str,
    /// Unit after a topic count.
    pub topics_unit: &'static str,
    /// Unit after a reply count.
    pub replies_unit: &'static str,
    /// Before an author name.
    pub by: &'static str,
    /// Entry screen text.
    pub entry_help: &'static [&'static str],
    /// Command list shown by `/help`.
    pub help: &'static str,
    /// Prefix of a usage hint.
    pub usage: &'static str,
    /// Prefix of an unknown command.
    pub unknown_command: &'static str,
    /// Command that only works in the thread.
    pub thread_only: &'static str,
    /// Command that needs a session.
    pub sign_in_first: &'static str,
    /// Nothing highlighted to act on.
    pub nothing_selected: &'static str,
    /// Form hint.
    pub form_keys: &'static str,
    /// Request in flight in a popup.
    pub submitting: &'static str,
    /// Confirmation popup title.
    pub confirm_title: &'static str,
    /// Confirmation popup hint.
    pub confirm_keys: &'static str,
    /// Alert popup hint.
    pub alert_keys: &'static str,
    /// Role name of a professor.
    pub professor: &'static str,
    /// Role name of a student.
    pub student: &'static str,
}

const PT_BR: Labels = Labels {
    app_name: "Ágora",
    forums: "Fóruns",
    topics: "Tópicos",
    replies: "Respostas",
    search_forum: "Buscar fórum...",
    search_topic: "Buscar tópico...",
    write_reply: "Escreva uma resposta e tecle Enter...",
    type_command: "Digite /login <id> <nome> <professor|aluno>",
    no_forums: "Nenhum fórum encontrado.",
    no_topics: "Nenhum tópico encontrado.",
    no_replies: "Nenhuma resposta ainda.",
    loading: "Carregando...",
    accepted: "Resposta aceita",
    topics_unit: "tópicos",
    replies_unit: "respostas",
    by: "por",
    entry_help: &[
        "Bem-vindo ao fórum da turma.",
        "",
        "Entre com:  /login <id> <nome> <professor|aluno>",
        "Exemplo:    /login 7 Ana Souza aluno",
        "",
        "/help lista os comandos. /quit encerra.",
    ],
    help: "/new /edit /delete /reply /accept /refresh /back /logout /quit",
    usage: "Uso",
    unknown_command: "Comando desconhecido",
    thread_only: "Disponível apenas dentro de um tópico.",
    sign_in_first: "Entre primeiro com /login.",
    nothing_selected: "Nada selecionado.",
    form_keys: "Tab: próximo campo  Enter: salvar  Esc: cancelar",
    submitting: "Enviando...",
    confirm_title: "Confirmar exclusão",
    confirm_keys: "s/Enter: excluir  n/Esc: cancelar",
    alert_keys: "Enter: fechar",
    professor: "Professor",
    student: "Aluno",
};

const EN_US: Labels = Labels {
    app_name: "Agora",
    forums: "Forums",
    topics: "Topics",
    replies: "Replies",
    search_forum: "Search forums...",
    search_topic: "Search topics...",
    write_reply: "Write a reply and press Enter...",
    type_command: "Type /login <id> <name> <professor|student>",
    no_forums: "No forums found.",
    no_topics: "No topics found.",
    no_replies: "No replies yet.",
    loading: "Loading...",
    accepted: "Accepted answer",
    topics_unit: "topics",
    replies_unit: "replies",
    by: "by",
    entry_help: &[
        "Welcome to the class forum.",
        "",
        "Sign in with:  /login <id> <name> <professor|student>",
        "Example:       /login 7 Ana Souza student",
        "",
        "/help lists the commands. /quit exits.",
    ],
    help: "/new /edit /delete /reply /accept /refresh /back /logout /quit",
    usage: "Usage",
    unknown_command: "Unknown command",
    thread_only: "Only available inside a topic.",
    sign_in_first: "Sign in first with /login.",
    nothing_selected: "Nothing selected.",
    form_keys: "Tab: next field  Enter: save  Esc: cancel",
    submitting: "Sending...",
    confirm_title: "Confirm deletion",
    confirm_keys: "y/Enter: delete  n/Esc: cancel",
    alert_keys: "Enter: close",
    professor: "Professor",
    student: "Student",
};

/// Texts for `locale`.
pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::PtBr => &PT_BR,
        Locale::EnUs => &EN_US,
    }
}

impl Labels {
    /// Display name of a role.
    pub fn role(&self, profession: Profession) -> &'static str {
        match profession {
            Profession::Professor => self.professor,
            Profession::Student => self.student,
            Profession::Unknown => "-",
        }
    }
}

/// Title of a form popup.
pub fn form_title(target: FormTarget, locale: Locale) -> &'static str {
    match (locale, target) {
        (Locale::PtBr, FormTarget::NewForum) => "Novo fórum",
        (Locale::PtBr, FormTarget::EditForum(_)) => "Editar fórum",
        (Locale::PtBr, FormTarget::NewTopic(_)) => "Novo tópico",
        (Locale::PtBr, FormTarget::EditTopic(..)) => "Editar tópico",
        (Locale::PtBr, FormTarget::NewReply(..)) => "Nova resposta",
        (Locale::PtBr, FormTarget::EditReply(..)) => "Editar resposta",
        (Locale::EnUs, FormTarget::NewForum) => "New forum",
        (Locale::EnUs, FormTarget::EditForum(_)) => "Edit forum",
        (Locale::EnUs, FormTarget::NewTopic(_)) => "New topic",
        (Locale::EnUs, FormTarget::EditTopic(..)) => "Edit topic",
        (Locale::EnUs, FormTarget::NewReply(..)) => "New reply",
        (Locale::EnUs, FormTarget::EditReply(..)) => "Edit reply",
    }
}

/// Question of a confirmation popup.
pub fn confirm_question(target: DeleteTarget, locale: Locale) -> &'static str {
    match (locale, target) {
        (Locale::PtBr, DeleteTarget::Forum(_)) => {
            "Excluir este fórum? Todos os tópicos e respostas serão removidos."
        },
        (Locale::PtBr, DeleteTarget::Topic(..)) => {
            "Excluir este tópico? Todas as respostas serão removidas."
        },
        (Locale::PtBr, DeleteTarget::Reply(..)) => "Excluir esta resposta?",
        (Locale::EnUs, DeleteTarget::Forum(_)) => {
            "Delete this forum? All its topics and replies will be removed."
        },
        (Locale::EnUs, DeleteTarget::Topic(..)) => {
            "Delete this topic? All its replies will be removed."
        },
        (Locale::EnUs, DeleteTarget::Reply(..)) => "Delete this reply?",
    }
}
