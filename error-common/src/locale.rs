// User-facing language selection
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of user-facing messages. Every message the engine produces
/// exists in both languages; this only selects which one is surfaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }

    /// Pick the variant of a bilingual pair for this language
    pub fn pick<'a>(self, en: &'a str, he: &'a str) -> &'a str {
        match self {
            Language::En => en,
            Language::He => he,
        }
    }

    /// Lenient parse: unknown tags fall back to English
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "he" | "hebrew" | "iw" => Ok(Language::He),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
