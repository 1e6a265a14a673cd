//! List the Bible versions the API supports.
//!
//! Usage:
//! ```bash
//! export YOUVERSION_API_TOKEN=...
//! cargo run --example list_versions
//! ```

use youversion::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let token = std::env::var("YOUVERSION_API_TOKEN")
        .expect("set YOUVERSION_API_TOKEN to your developer token");

    let mut client = Client::new(token)?;

    println!("📚 Fetching supported Bible versions...\n");
    let versions = client.bible_versions().await?;

    let mut abbreviations: Vec<_> = versions.keys().collect();
    abbreviations.sort();

    for abbreviation in abbreviations {
        let version = &versions[abbreviation];
        println!("{:12} {}", abbreviation, version.title);
        if !version.copyright.is_empty() {
            println!("{:12} {}", "", version.copyright);
        }
    }

    println!("\n{} versions supported", versions.len());
    Ok(())
}
