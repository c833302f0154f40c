//! Slash commands typed on the input line.
//!
//! Parsing is pure; [`crate::InputState`] maps each [`Command`] onto App
//! calls for the current view.

use agora_core::{Profession, ReplyId, UserSession};

/// Usage of `/login`.
pub const LOGIN_USAGE: &str = "/login <id> <name> <professor|student>";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sign in with a local identity.
    Login(UserSession),
    /// Create a record in the current list.
    New,
    /// Edit a record, by id or the highlighted one.
    Edit {
        /// Explicit id.
        id: Option<u64>,
    },
    /// Delete a record, by id or the highlighted one.
    Delete {
        /// Explicit id.
        id: Option<u64>,
    },
    /// Toggle acceptance of a reply, by id or the highlighted one.
    Accept {
        /// Explicit reply id.
        id: Option<ReplyId>,
    },
    /// Open the reply form.
    Reply,
    /// Refetch the current list.
    Refresh,
    /// Step back one level.
    Back,
    /// Sign out.
    Logout,
    /// Exit.
    Quit,
    /// Show the command list.
    Help,
    /// Not a known command.
    Unknown {
        /// The command word as typed.
        input: String,
    },
    /// Known command with unusable arguments.
    InvalidArgs {
        /// Command name, without the slash.
        command: String,
        /// Expected form.
        usage: &'static str,
    },
}

/// Parse a line starting with `/`.
pub fn parse(line: &str) -> Command {
    let mut words = line.trim().trim_start_matches('/').split_whitespace();
    let Some(name) = words.next() else {
        return Command::Unknown { input: line.trim().to_owned() };
    };
    let args: Vec<&str> = words.collect();

    match name.to_lowercase().as_str() {
        "login" | "entrar" => parse_login(&args),
        "new" | "novo" => Command::New,
        "edit" | "editar" => optional_id(name, &args, "/edit [id]", |id| Command::Edit { id }),
        "delete" | "excluir" => {
            optional_id(name, &args, "/delete [id]", |id| Command::Delete { id })
        },
        "accept" | "aceitar" => {
            optional_id(name, &args, "/accept [id]", |id| Command::Accept { id })
        },
        "reply" | "responder" => Command::Reply,
        "refresh" | "atualizar" => Command::Refresh,
        "back" | "voltar" => Command::Back,
        "logout" | "sair" => Command::Logout,
        "quit" | "q" => Command::Quit,
        "help" | "ajuda" | "?" => Command::Help,
        _ => Command::Unknown { input: format!("/{name}") },
    }
}

/// `/login <id> <name...> <role>`. The name may contain spaces.
fn parse_login(args: &[&str]) -> Command {
    let invalid = || Command::InvalidArgs { command: "login".to_owned(), usage: LOGIN_USAGE };

    let [id, name @ .., role] = args else {
        return invalid();
    };
    if name.is_empty() {
        return invalid();
    }
    let Ok(id) = id.parse() else {
        return invalid();
    };

    Command::Login(UserSession::new(id, name.join(" "), Profession::parse(role)))
}

fn optional_id(
    name: &str,
    args: &[&str],
    usage: &'static str,
    command: impl FnOnce(Option<u64>) -> Command,
) -> Command {
    match args {
        [] => command(None),
        [id] => match id.parse() {
            Ok(id) => command(Some(id)),
            Err(_) => Command::InvalidArgs { command: name.to_owned(), usage },
        },
        _ => Command::InvalidArgs { command: name.to_owned(), usage },
    }
}
