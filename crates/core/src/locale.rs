//! Language of user-facing form messages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Selects the text of the top-level form messages (title, artist, label).
///
/// Per-slot track messages are fixed and not affected by the locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub fn title_required(self) -> &'static str {
        match self {
            Locale::Ja => "タイトルに入力が必要です",
            Locale::En => "Title input is required",
        }
    }

    pub fn artist_required(self) -> &'static str {
        match self {
            Locale::Ja => "アーティストを選択してください",
            Locale::En => "Artist selection is required",
        }
    }

    pub fn label_required(self) -> &'static str {
        match self {
            Locale::Ja => "レーベルを選択してください",
            Locale::En => "Label selection is required",
        }
    }

    pub fn unknown_artist(self) -> &'static str {
        match self {
            Locale::Ja => "選択されたアーティストが存在しません",
            Locale::En => "Selected artist does not exist",
        }
    }

    pub fn unknown_label(self) -> &'static str {
        match self {
            Locale::Ja => "選択されたレーベルが存在しません",
            Locale::En => "Selected label does not exist",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unsupported locale '{0}' (expected 'ja' or 'en')")]
pub struct UnknownLocale(String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" => Ok(Locale::Ja),
            "en" => Ok(Locale::En),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}
