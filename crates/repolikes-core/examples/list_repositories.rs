// SPDX-License-Identifier: Apache-2.0

//! Load the list screen against the configured API and print its cards.
//!
//! Run with: `cargo run --example list_repositories -p repolikes-core`

use repolikes_core::{HttpRepositoryApi, ListScreen, load_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    let mut screen = ListScreen::new(HttpRepositoryApi::new(&config.api.base_url));

    if let Some(alert) = screen.mount().await {
        eprintln!("{}: {}", alert.title, alert.message);
        return Ok(());
    }

    println!("Found {} repositories:", screen.cards().len());
    for card in screen.cards() {
        println!(
            "  - {} [{}] {}",
            card.title,
            card.techs.join(", "),
            card.likes_label
        );
    }

    Ok(())
}
