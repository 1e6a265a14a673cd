//! Supported API languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::YouVersionError;

/// Languages accepted by the `accept-language` header of the API.
///
/// Serialized as the wire language code (`en`, `zh_CN`, ...). A language can
/// be resolved from either its code or its English display name; "Filipino"
/// is accepted as an alias for Tagalog, which shares the `tl` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "af")]
    Afrikaans,
    #[serde(rename = "zh_CN")]
    ChineseSimplified,
    #[serde(rename = "zh_TW")]
    ChineseTraditional,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "el")]
    Greek,
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "km")]
    Khmer,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ro")]
    Romanian,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "sw")]
    Swahili,
    #[serde(rename = "sv")]
    Swedish,
    #[serde(rename = "tl")]
    Tagalog,
    #[serde(rename = "uk")]
    Ukrainian,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "zu")]
    Zulu,
}

impl Language {
    /// Every supported language, in display-name order.
    pub const ALL: [Language; 22] = [
        Language::Afrikaans,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Dutch,
        Language::English,
        Language::French,
        Language::German,
        Language::Greek,
        Language::Indonesian,
        Language::Italian,
        Language::Khmer,
        Language::Korean,
        Language::Portuguese,
        Language::Romanian,
        Language::Russian,
        Language::Spanish,
        Language::Swahili,
        Language::Swedish,
        Language::Tagalog,
        Language::Ukrainian,
        Language::Vietnamese,
        Language::Zulu,
    ];

    /// Wire language code sent in the `accept-language` header.
    pub fn code(self) -> &'static str {
        match self {
            Language::Afrikaans => "af",
            Language::ChineseSimplified => "zh_CN",
            Language::ChineseTraditional => "zh_TW",
            Language::Dutch => "nl",
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Greek => "el",
            Language::Indonesian => "id",
            Language::Italian => "it",
            Language::Khmer => "km",
            Language::Korean => "ko",
            Language::Portuguese => "pt",
            Language::Romanian => "ro",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Swahili => "sw",
            Language::Swedish => "sv",
            Language::Tagalog => "tl",
            Language::Ukrainian => "uk",
            Language::Vietnamese => "vi",
            Language::Zulu => "zu",
        }
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Language::Afrikaans => "Afrikaans",
            Language::ChineseSimplified => "Chinese Simplified",
            Language::ChineseTraditional => "Chinese Traditional",
            Language::Dutch => "Dutch",
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Greek => "Greek",
            Language::Indonesian => "Indonesian",
            Language::Italian => "Italian",
            Language::Khmer => "Khmer",
            Language::Korean => "Korean",
            Language::Portuguese => "Portuguese",
            Language::Romanian => "Romanian",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::Swahili => "Swahili",
            Language::Swedish => "Swedish",
            Language::Tagalog => "Tagalog",
            Language::Ukrainian => "Ukrainian",
            Language::Vietnamese => "Vietnamese",
            Language::Zulu => "Zulu",
        }
    }

    /// Resolves a wire code (`es`, `zh_TW`, ...).
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.code() == code)
    }

    /// Resolves an English display name.
    ///
    /// Underscores are treated as spaces ("Chinese_Simplified") and
    /// "Filipino" resolves to [`Language::Tagalog`].
    pub fn from_name(name: &str) -> Option<Language> {
        let name = name.replace('_', " ");
        if name == "Filipino" {
            return Some(Language::Tagalog);
        }
        Language::ALL.iter().copied().find(|l| l.name() == name)
    }
}

impl FromStr for Language {
    type Err = YouVersionError;

    /// Accepts either a wire code or a display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
            .or_else(|| Language::from_name(s))
            .ok_or_else(|| YouVersionError::UnsupportedLanguage {
                language: s.to_string(),
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
