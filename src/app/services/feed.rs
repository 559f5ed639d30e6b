use std::thread;
use std::time::Duration;

use serde::Deserialize;

use crate::app::domain::article::{Article, Category};
use crate::app::infrastructure::error::{AppError, Result};

/// Provider of article records. The controller only ever sees this
/// trait; whether headlines come from the built-in table or the real
/// endpoint is decided once at startup.
pub trait ArticleSource: Send + Sync {
    /// Fetch articles for a category. `General` means unfiltered.
    fn fetch(&self, category: Category) -> Result<Vec<Article>>;
}

/// Static demonstration feed, standing in for the remote endpoint.
const MOCK_FEED: &str = include_str!("mock_feed.json");

/// Article source backed by the embedded demonstration table. A short
/// sleep simulates network latency so the loading indicator is
/// actually visible.
pub struct MockArticleSource {
    delay: Duration,
}

impl MockArticleSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Zero-delay source for tests
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for MockArticleSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl ArticleSource for MockArticleSource {
    fn fetch(&self, category: Category) -> Result<Vec<Article>> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let all: Vec<Article> = serde_json::from_str(MOCK_FEED)?;

        // Filter by category if not general
        if category == Category::General {
            Ok(all)
        } else {
            Ok(all.into_iter().filter(|a| a.category == category).collect())
        }
    }
}

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    status: String,
    #[serde(default)]
    articles: Vec<Article>,
}

/// Article source backed by the top-headlines endpoint.
pub struct RemoteArticleSource {
    api_key: String,
    country: String,
}

impl RemoteArticleSource {
    pub fn new(api_key: String, country: String) -> Self {
        Self { api_key, country }
    }

    fn endpoint(&self, category: Category) -> String {
        format!(
            "https://newsapi.org/v2/top-headlines?country={}&category={}&apiKey={}",
            self.country,
            category.as_str(),
            self.api_key
        )
    }
}

impl ArticleSource for RemoteArticleSource {
    fn fetch(&self, category: Category) -> Result<Vec<Article>> {
        let response = minreq::get(self.endpoint(category))
            .with_header("User-Agent", "Khabarnama")
            .with_timeout(10)
            .send()?;

        if response.status_code != 200 {
            return Err(AppError::Feed(format!(
                "news server returned {} {}",
                response.status_code, response.reason_phrase
            )));
        }

        let payload: HeadlinesResponse = response.json()?;
        if payload.status != "ok" {
            return Err(AppError::Feed(format!(
                "news server reported status {:?}",
                payload.status
            )));
        }

        // The endpoint does not echo the category; stamp the requested one
        let mut articles = payload.articles;
        for article in &mut articles {
            article.category = category;
        }
        Ok(articles)
    }
}
