// youversion - YouVersion Developer API client for Rust
// Copyright (C) 2025 youversion-rs contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Verse of the day resources.

use serde::{Deserialize, Serialize};

use crate::api::client::Client;
use crate::api::image::{Image, ImageData};
use crate::api::verse::{Verse, VerseData};
use crate::api::version::BibleVersion;
use crate::day::current_day_of_year;
use crate::error::{Result, YouVersionError};

/// Wire shape of a single verse-of-the-day object.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct VerseOfTheDayData {
    #[serde(default)]
    day: Option<u16>,
    #[serde(default)]
    verse: VerseData,
    #[serde(default)]
    image: ImageData,
}

/// Wire shape of the bulk `verse_of_the_day` resource.
#[derive(Debug, Deserialize)]
struct VerseOfTheDayListData {
    data: Option<Vec<VerseOfTheDayData>>,
    #[serde(default)]
    next_page: Option<bool>,
    #[serde(default)]
    page_size: Option<usize>,
}

/// The daily-rotating scripture passage with its artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseOfTheDay {
    /// Ordinal day of the year the entry belongs to (1..=366).
    pub day: Option<u16>,

    /// Translation the passage was requested in.
    pub bible_version: BibleVersion,

    pub verse: Verse,

    pub image: Image,
}

impl VerseOfTheDay {
    pub(crate) fn from_data(bible_version: BibleVersion, data: VerseOfTheDayData) -> Self {
        let verse = Verse::from_data(bible_version.clone(), data.verse);
        let image = Image::from_data(verse.clone(), data.image);
        VerseOfTheDay {
            day: data.day,
            bible_version,
            verse,
            image,
        }
    }
}

/// One page of the bulk verse-of-the-day resource.
#[derive(Debug, Clone)]
pub struct VerseOfTheDayPage {
    /// Whether the service reports another page of results.
    pub next_page: bool,

    /// Number of entries the service reports for this page.
    pub page_size: usize,

    /// The entries, or `None` when the response carried no data.
    pub verses: Option<Vec<VerseOfTheDay>>,
}

/// Query parameters attached to verse-of-the-day requests.
#[derive(Debug, Serialize)]
struct VerseOfTheDayQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    version_id: Option<u32>,
}

fn check_day(day: u16) -> Result<()> {
    if !(1..=366).contains(&day) {
        return Err(YouVersionError::DayOutOfBounds { day });
    }
    Ok(())
}

impl Client {
    /// Verse of the day for the given ordinal day, in the current
    /// translation.
    ///
    /// # Errors
    /// `DayOutOfBounds` when `day` is outside [1, 366]; transport errors
    /// from the request otherwise.
    pub async fn get_verse_of_the_day(&self, day: u16) -> Result<VerseOfTheDay> {
        check_day(day)?;

        let query = VerseOfTheDayQuery {
            version_id: self.bible_version.id,
        };
        let data: VerseOfTheDayData = self
            .get_with_query(&format!("verse_of_the_day/{day}"), &query)
            .await?;

        Ok(VerseOfTheDay::from_data(self.bible_version.clone(), data))
    }

    /// Verse of the day for today (local date).
    pub async fn get_current_verse_of_the_day(&self) -> Result<VerseOfTheDay> {
        self.get_verse_of_the_day(current_day_of_year()).await
    }

    /// Every available verse of the day, in the current translation.
    ///
    /// `limit` and `page` are accepted for forward compatibility but are
    /// not transmitted: the service does not honor pagination parameters on
    /// this resource yet, and silently forwarding them would change
    /// behavior out from under callers once it does. In practice a single
    /// response carries the full year.
    pub async fn get_all_verse_of_the_days(
        &self,
        limit: usize,
        page: usize,
    ) -> Result<VerseOfTheDayPage> {
        let _ = (limit, page);

        let query = VerseOfTheDayQuery {
            version_id: self.bible_version.id,
        };
        let list: VerseOfTheDayListData = self.get_with_query("verse_of_the_day", &query).await?;

        let verses: Option<Vec<VerseOfTheDay>> = list.data.map(|data| {
            data.into_iter()
                .map(|d| VerseOfTheDay::from_data(self.bible_version.clone(), d))
                .collect()
        });

        match verses {
            None => Ok(VerseOfTheDayPage {
                next_page: false,
                page_size: 0,
                verses: None,
            }),
            Some(verses) => Ok(VerseOfTheDayPage {
                next_page: list.next_page.unwrap_or(false),
                page_size: list.page_size.unwrap_or(verses.len()),
                verses: Some(verses),
            }),
        }
    }
}
