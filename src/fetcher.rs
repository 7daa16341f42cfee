use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::config::AppConfig;
use crate::error::ScrapeError;

/// The per-letter search call, behind a trait so the aggregation loop can be
/// exercised against an in-memory stub.
#[async_trait]
pub trait RecipeApi {
    /// Fetch the raw search response for recipes whose name starts with
    /// `letter`. Transport failures and non-success statuses are errors;
    /// "no matches" is a successful response with a null meal list.
    async fn search_by_letter(&self, letter: char) -> Result<String, ScrapeError>;
}

/// HTTP client for TheMealDB search endpoint
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent("Mozilla/5.0 (compatible; MealDbScraper/0.1)")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.api_base_url.clone(),
        }
    }
}

#[async_trait]
impl RecipeApi for MealDbClient {
    async fn search_by_letter(&self, letter: char) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("f", letter.to_string())])
            .send()
            .await?;

        let status = response.status();
        debug!("GET {}?f={} -> {}", self.base_url, letter, status);

        if !status.is_success() {
            return Err(ScrapeError::Status { letter, status });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> MealDbClient {
        let config = AppConfig {
            api_base_url: format!("{}/search.php", server.url()),
            ..AppConfig::default()
        };
        MealDbClient::new(&config)
    }

    #[tokio::test]
    async fn test_search_by_letter_returns_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::UrlEncoded("f".into(), "a".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": null}"#)
            .create_async()
            .await;

        let body = client_for(&server).search_by_letter('a').await.unwrap();
        assert_eq!(body, r#"{"meals": null}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_by_letter_non_success_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::UrlEncoded("f".into(), "q".into()))
            .with_status(503)
            .create_async()
            .await;

        let result = client_for(&server).search_by_letter('q').await;
        match result {
            Err(ScrapeError::Status { letter, status }) => {
                assert_eq!(letter, 'q');
                assert_eq!(status.as_u16(), 503);
            }
            other => panic!("expected status error, got {:?}", other),
        }
        mock.assert_async().await;
    }
}
