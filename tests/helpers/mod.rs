//! Test helpers for live API integration tests.
//!
//! Live tests need a real developer token; they read it from the
//! `YOUVERSION_API_TOKEN` environment variable.

use youversion::{Client, Result};

/// Developer token for live tests.
pub fn api_token() -> String {
    std::env::var("YOUVERSION_API_TOKEN")
        .expect("set YOUVERSION_API_TOKEN to run live API tests")
}

/// Client authenticated with the environment token.
pub fn live_client() -> Result<Client> {
    Client::new(api_token())
}

/// Print a section header.
pub fn print_header(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}
