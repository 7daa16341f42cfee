pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod writer;

pub use config::AppConfig;
pub use error::ScrapeError;
pub use model::{Ingredient, Recipe};
pub use pipeline::ScrapeOutcome;

/// Fetch and flatten recipes for every letter of the alphabet.
pub async fn scrape(config: &AppConfig) -> ScrapeOutcome {
    let client = fetcher::MealDbClient::new(config);
    pipeline::scrape_all(&client).await
}

/// Full run: scrape every letter, then write the aggregated recipes to the
/// configured output path. Write failures are fatal; per-letter failures are
/// reflected in the returned outcome.
pub async fn run(config: &AppConfig) -> Result<ScrapeOutcome, ScrapeError> {
    let outcome = scrape(config).await;
    writer::write_recipes(&outcome.recipes, &config.output_path).await?;
    Ok(outcome)
}
