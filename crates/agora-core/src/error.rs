//! Validation errors.

use thiserror::Error;

use crate::Locale;

/// A form field subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Forum name.
    ForumName,
    /// Forum description.
    ForumDescription,
    /// Forum tag.
    ForumTag,
    /// Topic title.
    TopicTitle,
    /// Topic content.
    TopicContent,
    /// Reply text.
    ReplyText,
}

impl Field {
    /// Minimum length in characters, after trimming.
    pub const fn min_len(self) -> usize {
        match self {
            Self::ForumName => 3,
            Self::ForumDescription | Self::TopicContent => 10,
            Self::ForumTag | Self::ReplyText => 2,
            Self::TopicTitle => 5,
        }
    }

    /// Human-readable label.
    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::PtBr, Self::ForumName) => "Nome",
            (Locale::PtBr, Self::ForumDescription) => "Descrição",
            (Locale::PtBr, Self::ForumTag) => "Tag",
            (Locale::PtBr, Self::TopicTitle) => "Título",
            (Locale::PtBr, Self::TopicContent) => "Conteúdo",
            (Locale::PtBr, Self::ReplyText) => "Resposta",
            (Locale::EnUs, Self::ForumName) => "Name",
            (Locale::EnUs, Self::ForumDescription) => "Description",
            (Locale::EnUs, Self::ForumTag) => "Tag",
            (Locale::EnUs, Self::TopicTitle) => "Title",
            (Locale::EnUs, Self::TopicContent) => "Content",
            (Locale::EnUs, Self::ReplyText) => "Reply",
        }
    }
}

/// Client-side validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field shorter than its minimum.
    #[error("{field:?} must have at least {min} characters")]
    TooShort {
        /// Offending field.
        field: Field,
        /// Required minimum.
        min: usize,
    },
}

impl ValidationError {
    /// Localized message for an alert.
    pub fn message(&self, locale: Locale) -> String {
        match self {
            Self::TooShort { field, min } => match locale {
                Locale::PtBr => {
                    format!("O campo \"{}\" deve ter pelo menos {min} caracteres.", field.label(locale))
                },
                Locale::EnUs => {
                    format!("\"{}\" must have at least {min} characters.", field.label(locale))
                },
            },
        }
    }
}
