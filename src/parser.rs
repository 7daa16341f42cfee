use std::collections::HashMap;

use log::info;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ScrapeError;
use crate::model::{Ingredient, Recipe};

/// Top-level shape of a search response. The API answers `{"meals": null}`
/// when a letter matches nothing.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    meals: Option<Vec<MealRecord>>,
}

/// One meal as returned by the API.
///
/// Every scalar is optional so a missing or null field decodes to a default
/// instead of failing the whole batch. The 20 indexed ingredient/measure
/// slots land in `extra` rather than as 40 named fields.
#[derive(Debug, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    id: Option<String>,
    #[serde(rename = "strMeal")]
    name: Option<String>,
    #[serde(rename = "strCategory")]
    category: Option<String>,
    #[serde(rename = "strArea")]
    area: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
    #[serde(rename = "strYoutube")]
    youtube: Option<String>,
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl MealRecord {
    fn indexed_field(&self, prefix: &str, index: usize) -> Option<&str> {
        self.extra
            .get(&format!("{}{}", prefix, index))
            .and_then(Value::as_str)
    }
}

/// Decode a search response body into flattened recipes.
///
/// A body of `{"meals": null}` (or an empty list) is the API's "nothing
/// matched" answer and yields an empty vec, not an error. Malformed JSON is
/// an error; the caller decides whether that aborts anything.
pub fn parse_response(body: &str) -> Result<Vec<Recipe>, ScrapeError> {
    let response: SearchResponse = serde_json::from_str(body)?;

    match response.meals {
        Some(meals) if !meals.is_empty() => Ok(meals.into_iter().map(Recipe::from).collect()),
        _ => {
            info!("No recipes found.");
            Ok(Vec::new())
        }
    }
}

/// Scan the indexed `strIngredient1`..`strIngredient20` slots in order and
/// keep each pair whose ingredient name is non-blank. Values are copied
/// verbatim; a missing measure becomes an empty string.
pub fn extract_ingredients(meal: &MealRecord) -> Vec<Ingredient> {
    let mut ingredients = Vec::new();

    for i in 1..=20 {
        if let Some(name) = meal.indexed_field("strIngredient", i) {
            if name.trim().is_empty() {
                continue;
            }
            ingredients.push(Ingredient {
                name: name.to_string(),
                measure: meal
                    .indexed_field("strMeasure", i)
                    .unwrap_or_default()
                    .to_string(),
            });
        }
    }

    ingredients
}

/// Split a raw instructions blob on CRLF line breaks, dropping blank and
/// whitespace-only segments.
fn split_instructions(raw: &str) -> Vec<String> {
    raw.split("\r\n")
        .filter(|segment| !segment.trim().is_empty())
        .map(str::to_string)
        .collect()
}

impl From<MealRecord> for Recipe {
    fn from(meal: MealRecord) -> Self {
        let ingredients = extract_ingredients(&meal);
        Recipe {
            id: meal.id.unwrap_or_default(),
            name: meal.name.unwrap_or_default(),
            category: meal.category.unwrap_or_default(),
            area: meal.area.unwrap_or_default(),
            instructions: meal
                .instructions
                .as_deref()
                .map(split_instructions)
                .unwrap_or_default(),
            ingredients,
            image_src: meal.thumbnail.unwrap_or_default(),
            youtube_link: meal.youtube.unwrap_or_default(),
        }
    }
}
