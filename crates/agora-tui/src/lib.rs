//! Terminal UI for Agora
//!
//! A thin shell over [`agora_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`agora_app::Runtime`].
//!
//! This crate handles rendering, the input line and its slash commands.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod commands;
pub mod demo;
pub mod input;
pub mod labels;
pub mod terminal;
pub mod ui;

pub use agora_app::{App, AppAction, AppEvent, Bridge, Driver, KeyInput, Runtime};
pub use input::InputState;
pub use terminal::{TerminalDriver, TerminalError};
