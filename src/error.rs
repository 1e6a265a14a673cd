//! Crate error type and result alias.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, YouVersionError>;

/// Errors produced by the YouVersion API client.
///
/// Validation failures carry the offending value so callers can report it.
/// Transport failures (`Http`) are passed through from the underlying HTTP
/// client unchanged; nothing is retried internally.
#[derive(Debug, Error)]
pub enum YouVersionError {
    /// The given language is not one of the supported language codes or names.
    #[error("unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    /// The given Bible version abbreviation is not known to the API.
    #[error("invalid Bible version: {version}")]
    InvalidBibleVersion { version: String },

    /// An image dimension exceeds the maximum allowed size.
    #[error("invalid image size: {size} (maximum {max})", max = crate::api::image::MAX_SIZE)]
    InvalidImageSize { size: u32 },

    /// A day of the year outside [1, 366].
    #[error("day out of bounds: {day} (expected 1..=366)")]
    DayOutOfBounds { day: u16 },

    /// The developer token contains characters that cannot be sent in an
    /// HTTP header.
    #[error("token is not a valid header value")]
    InvalidToken,

    /// Transport or HTTP status error from the underlying client.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API responded with a payload the client could not interpret.
    #[error("invalid API response: {message}")]
    InvalidResponse {
        message: String,
        response_body: Option<String>,
    },

    /// A date string could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// A UNIX timestamp outside the representable date range.
    #[error("invalid timestamp: {secs}")]
    InvalidTimestamp { secs: i64 },

    /// A base URL or resource path did not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// File I/O failure while saving a download.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_offending_value() {
        let err = YouVersionError::UnsupportedLanguage {
            language: "tlh".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported language: tlh");

        let err = YouVersionError::DayOutOfBounds { day: 367 };
        assert!(err.to_string().contains("367"));
    }

    #[test]
    fn test_image_size_names_the_limit() {
        let err = YouVersionError::InvalidImageSize { size: 2000 };
        assert!(err.to_string().contains("2000"));
        assert!(err.to_string().contains("1280"));
    }
}
