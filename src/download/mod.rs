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


//! Saving verse artwork to local files.

use std::env;
use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::image::{Image, MAX_SIZE};
use crate::error::Result;

/// Reduces a verse reference to a file-name-safe slug: alphanumerics only,
/// lowercased ("John 3:16" becomes "john316").
fn slugify(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Default save path: slugified verse reference plus `.jpg`, in the current
/// working directory.
fn default_image_path(reference: &str) -> Result<PathBuf> {
    Ok(env::current_dir()?.join(format!("{}.jpg", slugify(reference))))
}

impl Image {
    /// Downloads a rendition of the given dimensions to the default path
    /// and returns that path.
    pub async fn download(&self, width: u32, height: u32) -> Result<PathBuf> {
        let path = default_image_path(&self.verse.reference)?;
        self.download_to(width, height, path).await
    }

    /// Downloads the maximum-size rendition to the default path.
    pub async fn download_max(&self) -> Result<PathBuf> {
        self.download(MAX_SIZE, MAX_SIZE).await
    }

    /// Downloads a rendition of the given dimensions to `path`, streaming
    /// the body to disk, and returns the path written.
    ///
    /// # Errors
    /// `InvalidImageSize` before any request is made if a dimension exceeds
    /// [`MAX_SIZE`]; transport errors and file I/O errors otherwise.
    pub async fn download_to(
        &self,
        width: u32,
        height: u32,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let url = self.url(width, height)?;
        let path = path.as_ref().to_path_buf();
        log::debug!("downloading {url} to {}", path.display());

        let response = reqwest::get(&url).await?.error_for_status()?;

        let mut file = File::create(&path).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        Ok(path)
    }
}
