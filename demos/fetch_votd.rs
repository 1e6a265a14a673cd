//! Fetch and print the verse of the day.
//!
//! Usage:
//! ```bash
//! export YOUVERSION_API_TOKEN=...
//! cargo run --example fetch_votd
//! ```

use youversion::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let token = std::env::var("YOUVERSION_API_TOKEN")
        .expect("set YOUVERSION_API_TOKEN to your developer token");

    let client = Client::new(token)?;

    println!("📖 Fetching today's verse...");
    let votd = client.get_current_verse_of_the_day().await?;

    println!("\n{} ({})", votd.verse.reference, votd.bible_version.abbreviation);
    println!("{}", votd.verse.text);
    println!("\n🔗 {}", votd.verse.url);
    println!("🖼  {}", votd.image.square_url(640)?);
    if !votd.image.attribution.is_empty() {
        println!("   image: {}", votd.image.attribution);
    }

    Ok(())
}
