//! YouVersion Developer API surface.
//!
//! [`client`] holds the client state and request plumbing; each resource
//! module adds its endpoints as `impl Client` blocks alongside the value
//! types it produces.

pub mod client;
pub mod image;
pub mod language;
pub mod verse;
pub mod version;
pub mod votd;

// Re-export commonly used types
pub use client::{Client, ClientConfig, BASE_URL, TOKEN_HEADER};
pub use image::{Image, MAX_SIZE};
pub use language::Language;
pub use verse::Verse;
pub use version::{BibleVersion, BibleVersionOption};
pub use votd::{VerseOfTheDay, VerseOfTheDayPage};
