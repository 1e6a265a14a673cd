//! Bible versions and the version cache.
//!
//! The API lists supported translations under the `versions` resource. The
//! client fetches that list once, on first demand, and afterwards answers
//! abbreviation lookups from its own cache.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::error::{Result, YouVersionError};

/// A Bible translation as described by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleVersion {
    /// Numeric version id, used as the `version_id` query parameter.
    #[serde(default)]
    pub id: Option<u32>,

    #[serde(default)]
    pub title: String,

    /// Short code identifying the translation (e.g. "KJV", "ASV").
    #[serde(default)]
    pub abbreviation: String,

    #[serde(default)]
    pub local_title: String,

    #[serde(default)]
    pub local_abbreviation: String,

    #[serde(default, rename = "copyright_short")]
    pub copyright: String,
}

impl BibleVersion {
    /// The King James Version, the translation every client starts with.
    pub fn kjv() -> Self {
        BibleVersion {
            id: Some(1),
            title: "King James Version".to_string(),
            abbreviation: "KJV".to_string(),
            local_title: "King James Version".to_string(),
            local_abbreviation: "KJV".to_string(),
            copyright: "Crown Copyright in UK".to_string(),
        }
    }
}

impl Default for BibleVersion {
    fn default() -> Self {
        BibleVersion::kjv()
    }
}

/// Argument to [`Client::set_bible_version`]: either a version value or an
/// abbreviation to resolve through the version cache.
#[derive(Debug, Clone)]
pub enum BibleVersionOption {
    Version(BibleVersion),
    Abbreviation(String),
}

impl From<BibleVersion> for BibleVersionOption {
    fn from(version: BibleVersion) -> Self {
        BibleVersionOption::Version(version)
    }
}

impl From<&str> for BibleVersionOption {
    fn from(abbreviation: &str) -> Self {
        BibleVersionOption::Abbreviation(abbreviation.to_string())
    }
}

impl From<String> for BibleVersionOption {
    fn from(abbreviation: String) -> Self {
        BibleVersionOption::Abbreviation(abbreviation)
    }
}

/// Wire shape of the `versions` resource.
#[derive(Debug, Deserialize)]
struct VersionsResponse {
    #[serde(default)]
    data: Vec<BibleVersion>,
}

impl Client {
    /// Supported Bible versions, keyed by abbreviation.
    ///
    /// The first call fetches the full list from the `versions` resource and
    /// populates the cache, skipping duplicate abbreviations. Subsequent
    /// calls return the cache without touching the network.
    pub async fn bible_versions(&mut self) -> Result<&HashMap<String, BibleVersion>> {
        if self.versions.is_empty() {
            let response: VersionsResponse = self.get("versions").await?;
            log::debug!("caching {} bible versions", response.data.len());
            for version in response.data {
                self.versions
                    .entry(version.abbreviation.clone())
                    .or_insert(version);
            }
        }

        Ok(&self.versions)
    }

    /// Whether the API supports the given version abbreviation.
    ///
    /// A miss is `Ok(false)`, never an error; only a transport failure of
    /// the underlying lazy fetch surfaces as `Err`.
    pub async fn supports_bible_version(&mut self, abbreviation: &str) -> Result<bool> {
        Ok(self.bible_versions().await?.contains_key(abbreviation))
    }

    /// Resolves a version abbreviation through the cache, fetching the
    /// version list first if needed.
    ///
    /// # Errors
    /// `InvalidBibleVersion` if the abbreviation is unknown.
    pub async fn get_bible_version(&mut self, abbreviation: &str) -> Result<BibleVersion> {
        if let Some(version) = self.versions.get(abbreviation) {
            return Ok(version.clone());
        }

        self.bible_versions()
            .await?
            .get(abbreviation)
            .cloned()
            .ok_or_else(|| YouVersionError::InvalidBibleVersion {
                version: abbreviation.to_string(),
            })
    }

    /// Sets the translation used for subsequent verse requests.
    ///
    /// Accepts a [`BibleVersion`] value directly, or an abbreviation that is
    /// resolved through [`Client::get_bible_version`].
    pub async fn set_bible_version(
        &mut self,
        version: impl Into<BibleVersionOption>,
    ) -> Result<()> {
        match version.into() {
            BibleVersionOption::Version(version) => {
                self.bible_version = version;
            }
            BibleVersionOption::Abbreviation(abbreviation) => {
                self.bible_version = self.get_bible_version(&abbreviation).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kjv_constants() {
        let kjv = BibleVersion::kjv();
        assert_eq!(kjv.id, Some(1));
        assert_eq!(kjv.abbreviation, "KJV");
        assert_eq!(kjv.title, "King James Version");
    }

    #[test]
    fn test_deserialize_from_api_shape() {
        let version: BibleVersion = serde_json::from_str(
            r#"{
                "id": 12,
                "title": "American Standard Version",
                "abbreviation": "ASV",
                "local_title": "American Standard Version",
                "local_abbreviation": "ASV",
                "copyright_short": "Public Domain"
            }"#,
        )
        .unwrap();

        assert_eq!(version.id, Some(12));
        assert_eq!(version.abbreviation, "ASV");
        assert_eq!(version.copyright, "Public Domain");
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let version: BibleVersion = serde_json::from_str(r#"{"abbreviation": "WEB"}"#).unwrap();
        assert_eq!(version.id, None);
        assert_eq!(version.abbreviation, "WEB");
        assert_eq!(version.title, "");
    }

    #[test]
    fn test_versions_response_parses_data_list() {
        let response: VersionsResponse = serde_json::from_str(
            r#"{"data": [{"id": 1, "abbreviation": "KJV"}, {"id": 12, "abbreviation": "ASV"}]}"#,
        )
        .unwrap();
        assert_eq!(response.data.len(), 2);
    }

    #[test]
    fn test_version_option_conversions() {
        assert!(matches!(
            BibleVersionOption::from("ASV"),
            BibleVersionOption::Abbreviation(a) if a == "ASV"
        ));
        assert!(matches!(
            BibleVersionOption::from(BibleVersion::kjv()),
            BibleVersionOption::Version(v) if v.abbreviation == "KJV"
        ));
    }
}
