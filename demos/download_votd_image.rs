//! Download today's verse image to the current directory.
//!
//! Usage:
//! ```bash
//! export YOUVERSION_API_TOKEN=...
//! cargo run --example download_votd_image
//! ```

use youversion::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let token = std::env::var("YOUVERSION_API_TOKEN")
        .expect("set YOUVERSION_API_TOKEN to your developer token");

    let client = Client::new(token)?;

    println!("📖 Fetching today's verse...");
    let votd = client.get_current_verse_of_the_day().await?;
    println!("   {}", votd.verse.reference);

    println!("⬇️  Downloading 1280x1280 image...");
    let path = votd.image.download_max().await?;

    println!("✅ Saved to {}", path.display());
    Ok(())
}
