//! Client for the YouVersion Developer API.
//!
//! Authenticates with a developer token, lets a caller select a language and
//! Bible translation, and exposes typed accessors for Bible versions, the
//! verse of the day, and its artwork.
//!
//! ```rust,no_run
//! use youversion::{Client, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut client = Client::new(std::env::var("YOUVERSION_API_TOKEN").unwrap())?;
//!     client.set_language("es")?;
//!     client.set_bible_version("ASV").await?;
//!
//!     let votd = client.get_current_verse_of_the_day().await?;
//!     println!("{}: {}", votd.verse.reference, votd.verse.text);
//!     println!("image: {}", votd.image.square_url(640)?);
//!     Ok(())
//! }
//! ```

// Core modules
pub mod api;
pub mod day;
pub mod download;
pub mod error;

// Re-export commonly used types for convenience
pub use api::{
    BibleVersion, BibleVersionOption, Client, ClientConfig, Image, Language, Verse, VerseOfTheDay,
    VerseOfTheDayPage, BASE_URL, MAX_SIZE, TOKEN_HEADER,
};
pub use day::{
    current_day_of_year, day_of_year, day_of_year_from_iso_date, day_of_year_from_timestamp,
};
pub use error::{Result, YouVersionError};
