use serde::Serialize;

/// One name/measure pair pulled from a meal's indexed ingredient slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Measure")]
    pub measure: String,
}

/// The flattened recipe shape written to the output file.
///
/// Field names follow the existing export format and must not change;
/// downstream consumers match on them exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Area")]
    pub area: String,
    #[serde(rename = "Instructions")]
    pub instructions: Vec<String>,
    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<Ingredient>,
    #[serde(rename = "ImageSrc")]
    pub image_src: String,
    #[serde(rename = "YoutubeLink")]
    pub youtube_link: String,
}
