use std::path::Path;

use log::info;

use crate::error::ScrapeError;
use crate::model::Recipe;

/// Serialize the aggregated recipes as one pretty-printed JSON array,
/// overwriting `path` if it already exists. Returns the number of recipes
/// written. An unwritable path is an error; nothing is retried.
pub async fn write_recipes(
    recipes: &[Recipe],
    path: impl AsRef<Path>,
) -> Result<usize, ScrapeError> {
    let json = serde_json::to_string_pretty(recipes)?;
    tokio::fs::write(path.as_ref(), json).await?;

    info!("{} recipes saved to file.", recipes.len());
    Ok(recipes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;
    use serde_json::Value;

    fn sample_recipe(name: &str) -> Recipe {
        Recipe {
            id: "52772".to_string(),
            name: name.to_string(),
            category: "Chicken".to_string(),
            area: "Japanese".to_string(),
            instructions: vec!["Preheat oven to 350.".to_string(), "Combine.".to_string()],
            ingredients: vec![Ingredient {
                name: "soy sauce".to_string(),
                measure: "3/4 cup".to_string(),
            }],
            image_src: "https://example.com/thumb.jpg".to_string(),
            youtube_link: "https://youtube.com/watch?v=x".to_string(),
        }
    }

    #[tokio::test]
    async fn test_written_file_round_trips_with_exact_field_names() {
        let path = std::env::temp_dir().join(format!("recipes-{}.json", std::process::id()));

        let recipes = vec![sample_recipe("First"), sample_recipe("Second")];
        let count = write_recipes(&recipes, &path).await.unwrap();
        assert_eq!(count, 2);

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: Value = serde_json::from_str(&raw).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);

        let first = &array[0];
        for key in [
            "Id",
            "Name",
            "Category",
            "Area",
            "Instructions",
            "Ingredients",
            "ImageSrc",
            "YoutubeLink",
        ] {
            assert!(first.get(key).is_some(), "missing field {}", key);
        }
        assert_eq!(first["Name"], "First");
        assert_eq!(array[1]["Name"], "Second");
        assert_eq!(first["Ingredients"][0]["Name"], "soy sauce");
        assert_eq!(first["Ingredients"][0]["Measure"], "3/4 cup");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_error() {
        let path = std::env::temp_dir()
            .join("mealdb-scraper-does-not-exist")
            .join("recipes.json");

        let result = write_recipes(&[sample_recipe("Lost")], &path).await;
        assert!(matches!(result, Err(ScrapeError::Io(_))));
    }
}
