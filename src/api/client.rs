//! API client and request plumbing.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::language::Language;
use crate::api::version::BibleVersion;
use crate::error::{Result, YouVersionError};

/// Default base URL of the developer API.
pub const BASE_URL: &str = "https://developers.youversionapi.com/1.0/";

/// Header carrying the developer token.
pub const TOKEN_HEADER: &str = "x-youversion-developer-token";

/// Client configuration.
///
/// The defaults talk to the public API; the base URL is overridable for
/// testing against a local stand-in.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL requests are resolved against.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// YouVersion Developer API client.
///
/// Holds the developer token (fixed at construction), the selected language
/// (defaults to English) and Bible version (defaults to KJV), and the lazily
/// populated version cache. Methods that change client state take
/// `&mut self`; a client shared across tasks must be serialized externally.
#[derive(Debug)]
pub struct Client {
    token: HeaderValue,
    language: Language,
    pub(crate) bible_version: BibleVersion,
    pub(crate) versions: HashMap<String, BibleVersion>,
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Creates a client with the default configuration.
    pub fn new(token: impl AsRef<str>) -> Result<Self> {
        Client::with_config(token, ClientConfig::default())
    }

    /// Creates a client with an explicit configuration.
    ///
    /// # Errors
    /// `InvalidToken` if the token cannot be sent as a header value;
    /// `InvalidUrl` if the configured base URL does not parse; transport
    /// errors if the underlying HTTP client cannot be built.
    pub fn with_config(token: impl AsRef<str>, config: ClientConfig) -> Result<Self> {
        let token =
            HeaderValue::from_str(token.as_ref()).map_err(|_| YouVersionError::InvalidToken)?;

        // A trailing slash keeps resource joins inside the API prefix.
        let mut base = config.base_url;
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Client {
            token,
            language: Language::English,
            bible_version: BibleVersion::kjv(),
            versions: HashMap::new(),
            http,
            base_url,
        })
    }

    /// Currently selected language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Sets the language from a code or display name.
    ///
    /// # Errors
    /// `UnsupportedLanguage` for anything [`Language`] cannot resolve.
    pub fn set_language(&mut self, language: &str) -> Result<Language> {
        let language = language.parse::<Language>()?;
        self.language = language;
        Ok(language)
    }

    /// Sets the language directly.
    pub fn set_language_tag(&mut self, language: Language) {
        self.language = language;
    }

    /// Currently selected Bible version.
    pub fn bible_version(&self) -> &BibleVersion {
        &self.bible_version
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(TOKEN_HEADER, self.token.clone());
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(self.language.code()));
        headers
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        self.request(resource, None::<&()>).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, resource: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request(resource, Some(query)).await
    }

    /// GETs a resource and decodes its JSON body.
    ///
    /// Non-success statuses surface as [`YouVersionError::Http`] unchanged;
    /// a body that does not match the expected shape is reported with the
    /// body preserved for inspection.
    async fn request<T, Q>(&self, resource: &str, query: Option<&Q>) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.base_url.join(resource)?;
        log::debug!("GET {url}");

        let mut request = self.http.get(url).headers(self.headers());
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        log::trace!("{resource} response: {} bytes", body.len());

        serde_json::from_str(&body).map_err(|e| YouVersionError::InvalidResponse {
            message: format!("failed to decode {resource} response: {e}"),
            response_body: Some(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let client = Client::new("test-token").unwrap();
        assert_eq!(client.language(), Language::English);
        assert_eq!(client.bible_version().abbreviation, "KJV");
        assert_eq!(client.bible_version().id, Some(1));
        assert!(client.versions.is_empty());
    }

    #[test]
    fn test_set_language_by_code_and_name() {
        let mut client = Client::new("test-token").unwrap();

        assert_eq!(client.set_language("es").unwrap(), Language::Spanish);
        assert_eq!(client.language(), Language::Spanish);

        assert_eq!(client.set_language("German").unwrap(), Language::German);
        assert_eq!(client.language(), Language::German);
    }

    #[test]
    fn test_set_language_rejects_unknown() {
        let mut client = Client::new("test-token").unwrap();
        let err = client.set_language("BAD_LANG").unwrap_err();
        assert!(matches!(err, YouVersionError::UnsupportedLanguage { .. }));
        // Failed sets leave the selection untouched.
        assert_eq!(client.language(), Language::English);
    }

    #[test]
    fn test_headers_carry_token_accept_and_language() {
        let mut client = Client::new("test-token").unwrap();
        client.set_language_tag(Language::Spanish);

        let headers = client.headers();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(TOKEN_HEADER).unwrap(), "test-token");
        assert_eq!(headers.get(ACCEPT_LANGUAGE).unwrap(), "es");
    }

    #[test]
    fn test_invalid_token_rejected_at_construction() {
        let err = Client::new("bad\ntoken").unwrap_err();
        assert!(matches!(err, YouVersionError::InvalidToken));
    }

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let client = Client::with_config(
            "test-token",
            ClientConfig {
                base_url: "https://example.com/1.0".to_string(),
                ..ClientConfig::default()
            },
        )
        .unwrap();

        let url = client.base_url.join("versions").unwrap();
        assert_eq!(url.as_str(), "https://example.com/1.0/versions");
    }

    #[test]
    fn test_malformed_base_url_rejected() {
        let result = Client::with_config(
            "test-token",
            ClientConfig {
                base_url: "not a url".to_string(),
                ..ClientConfig::default()
            },
        );
        assert!(matches!(result, Err(YouVersionError::InvalidUrl(_))));
    }
}
