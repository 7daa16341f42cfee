use log::{error, info};

use crate::error::ScrapeError;
use crate::fetcher::RecipeApi;
use crate::model::Recipe;
use crate::parser;

/// Result of a full a-z scrape. `failed_letters` records which queries
/// contributed nothing because of a fetch or parse failure.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub recipes: Vec<Recipe>,
    pub failed_letters: Vec<char>,
}

/// Run the 26 letter queries in alphabetical order, strictly sequentially,
/// and collect every flattened recipe in arrival order.
///
/// A failed letter is logged and skipped; it never aborts the remaining
/// letters. An empty search result is not a failure.
pub async fn scrape_all(api: &impl RecipeApi) -> ScrapeOutcome {
    let mut recipes = Vec::new();
    let mut failed_letters = Vec::new();

    for letter in 'a'..='z' {
        info!("Getting recipes with the letter {}.", letter);

        match fetch_letter(api, letter).await {
            Ok(batch) => recipes.extend(batch),
            Err(e) => {
                error!("An error occurred: {}", e);
                failed_letters.push(letter);
            }
        }
    }

    ScrapeOutcome {
        recipes,
        failed_letters,
    }
}

async fn fetch_letter(api: &impl RecipeApi, letter: char) -> Result<Vec<Recipe>, ScrapeError> {
    let body = api.search_by_letter(letter).await?;
    parser::parse_response(&body)
}
