//! Scripture verse value type.

use serde::{Deserialize, Serialize};

use crate::api::version::BibleVersion;

/// Wire shape of the `verse` object inside a verse-of-the-day response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct VerseData {
    #[serde(default)]
    pub human_reference: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub usfms: Vec<String>,
}

/// A scripture passage in a specific translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Translation the passage text was taken from.
    pub bible_version: BibleVersion,

    /// Human-readable reference (e.g. "John 3:16").
    pub reference: String,

    /// Plain passage text.
    pub text: String,

    /// Passage text as an HTML fragment.
    pub html: String,

    /// Canonical web URL for the passage.
    pub url: String,

    /// USFM identifiers covered by the passage.
    pub usfms: Vec<String>,
}

impl Verse {
    pub(crate) fn from_data(bible_version: BibleVersion, data: VerseData) -> Self {
        Verse {
            bible_version,
            reference: data.human_reference,
            text: data.text,
            html: data.html,
            url: data.url,
            usfms: data.usfms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_from_response_data() {
        let data: VerseData = serde_json::from_str(
            r#"{
                "human_reference": "John 3:16",
                "text": "For God so loved the world...",
                "html": "<p>For God so loved the world...</p>",
                "url": "https://www.bible.com/bible/1/JHN.3.16",
                "usfms": ["JHN.3.16"]
            }"#,
        )
        .unwrap();

        let verse = Verse::from_data(BibleVersion::kjv(), data);
        assert_eq!(verse.reference, "John 3:16");
        assert_eq!(verse.usfms, vec!["JHN.3.16"]);
        assert_eq!(verse.bible_version.abbreviation, "KJV");
    }

    #[test]
    fn test_verse_data_tolerates_empty_object() {
        let data: VerseData = serde_json::from_str("{}").unwrap();
        let verse = Verse::from_data(BibleVersion::kjv(), data);
        assert_eq!(verse.reference, "");
        assert!(verse.usfms.is_empty());
    }
}
