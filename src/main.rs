use env_logger::Env;
use log::warn;

use mealdb_scraper::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("Scraping TheMealDB for recipes...");

    let config = AppConfig::load()?;
    let outcome = mealdb_scraper::run(&config).await?;

    if !outcome.failed_letters.is_empty() {
        warn!(
            "{} letter queries contributed no recipes: {:?}",
            outcome.failed_letters.len(),
            outcome.failed_letters
        );
    }
    println!(
        "{} recipes saved to {}.",
        outcome.recipes.len(),
        config.output_path
    );

    Ok(())
}
