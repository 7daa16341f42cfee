use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration for a scrape run
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Search endpoint queried once per letter, without the `?f=` parameter
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Path the aggregated JSON array is written to
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            output_path: default_output_path(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_api_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1/search.php".to_string()
}

fn default_output_path() -> String {
    "recipes.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__OUTPUT_PATH
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("MEALDB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
