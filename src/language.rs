use serde::{Deserialize, Serialize};
use std::fmt;

/// Language the generated recipe text must be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLanguage {
    #[default]
    English,
    Polish,
}

impl OutputLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLanguage::English => "english",
            OutputLanguage::Polish => "polish",
        }
    }
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's display-language preference.
///
/// Owned by whoever drives the session and handed to generation calls
/// explicitly; nothing reads it implicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguagePreference {
    is_polish: bool,
}

impl LanguagePreference {
    pub fn new(is_polish: bool) -> Self {
        Self { is_polish }
    }

    pub fn output_language(&self) -> OutputLanguage {
        if self.is_polish {
            OutputLanguage::Polish
        } else {
            OutputLanguage::English
        }
    }
}
