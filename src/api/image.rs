//! Verse imagery and sized-URL construction.

use serde::{Deserialize, Serialize};

use crate::api::verse::Verse;
use crate::error::{Result, YouVersionError};

/// Largest width or height the image service will render.
pub const MAX_SIZE: u32 = 1280;

/// Wire shape of the `image` object inside a verse-of-the-day response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ImageData {
    /// Protocol-relative URL template with `{width}`/`{height}` placeholders.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub attribution: String,
}

/// Artwork associated with a verse of the day.
///
/// The API hands back a URL template; [`Image::url`] substitutes concrete
/// pixel dimensions into it, bounded by [`MAX_SIZE`] per dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Verse this artwork illustrates.
    pub verse: Verse,

    /// Attribution line required when displaying the image.
    pub attribution: String,

    url_template: String,
}

fn check_size(size: u32) -> Result<()> {
    if size > MAX_SIZE {
        return Err(YouVersionError::InvalidImageSize { size });
    }
    Ok(())
}

impl Image {
    pub(crate) fn from_data(verse: Verse, data: ImageData) -> Self {
        // The wire template is protocol-relative ("//imageproxy...").
        Image {
            verse,
            attribution: data.attribution,
            url_template: format!("https:{}", data.url),
        }
    }

    /// URL for a rendition of the given pixel dimensions.
    ///
    /// # Errors
    /// `InvalidImageSize` if either dimension exceeds [`MAX_SIZE`].
    pub fn url(&self, width: u32, height: u32) -> Result<String> {
        check_size(width)?;
        check_size(height)?;

        Ok(self
            .url_template
            .replace("{width}", &width.to_string())
            .replace("{height}", &height.to_string()))
    }

    /// URL for a square rendition of the given size.
    pub fn square_url(&self, size: u32) -> Result<String> {
        self.url(size, size)
    }

    /// URL at the maximum size in both dimensions.
    pub fn max_url(&self) -> String {
        let max = MAX_SIZE.to_string();
        self.url_template
            .replace("{width}", &max)
            .replace("{height}", &max)
    }

    /// Square URL at the maximum size.
    pub fn max_square_url(&self) -> String {
        self.max_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::verse::VerseData;
    use crate::api::version::BibleVersion;

    fn test_image() -> Image {
        let verse = Verse::from_data(BibleVersion::kjv(), VerseData::default());
        Image::from_data(
            verse,
            ImageData {
                url: "//imageproxy.youversionapi.com/{width}x{height}/votd/1.jpg".to_string(),
                attribution: "YouVersion".to_string(),
            },
        )
    }

    #[test]
    fn test_url_substitutes_dimensions() {
        let image = test_image();
        assert_eq!(
            image.url(640, 480).unwrap(),
            "https://imageproxy.youversionapi.com/640x480/votd/1.jpg"
        );
    }

    #[test]
    fn test_url_is_https_prefixed() {
        let image = test_image();
        assert!(image.url(100, 100).unwrap().starts_with("https://"));
    }

    #[test]
    fn test_square_url_matches_url() {
        let image = test_image();
        assert_eq!(
            image.square_url(512).unwrap(),
            image.url(512, 512).unwrap()
        );
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let image = test_image();
        for (w, h) in [(MAX_SIZE + 1, 100), (100, MAX_SIZE + 1), (4096, 4096)] {
            let err = image.url(w, h).unwrap_err();
            assert!(matches!(err, YouVersionError::InvalidImageSize { .. }));
        }
        assert!(image.square_url(MAX_SIZE + 1).is_err());
    }

    #[test]
    fn test_max_size_is_allowed() {
        let image = test_image();
        assert_eq!(
            image.max_url(),
            format!("https://imageproxy.youversionapi.com/{0}x{0}/votd/1.jpg", MAX_SIZE)
        );
    }
}
