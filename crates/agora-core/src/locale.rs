//! Display locale.

use std::{fmt, str::FromStr};

/// Locale used for relative dates, labels and alerts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Brazilian Portuguese.
    #[default]
    PtBr,
    /// American English.
    EnUs,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en-us" | "en" => Ok(Self::EnUs),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PtBr => write!(f, "pt-BR"),
            Self::EnUs => write!(f, "en-US"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("pt_BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::EnUs));
        assert!("fr".parse::<Locale>().is_err());
    }
}
