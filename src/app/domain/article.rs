use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Topic tag used both to filter feed queries and to tag each article.
///
/// Serialized lowercase to match the wire format of the headlines API
/// (`"general"`, `"technology"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Technology,
    Sports,
    Health,
    Entertainment,
}

impl Category {
    /// Get the wire identifier for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Technology => "technology",
            Self::Sports => "sports",
            Self::Health => "health",
            Self::Entertainment => "entertainment",
        }
    }

    /// Get the display name for the category button row
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Technology => "Technology",
            Self::Sports => "Sports",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
        }
    }

    /// Get all categories, in button-row order
    pub fn all() -> &'static [Category] {
        &[
            Self::General,
            Self::Technology,
            Self::Sports,
            Self::Health,
            Self::Entertainment,
        ]
    }
}

/// Publisher attribution, nested the way the headlines API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceName {
    pub name: String,
}

/// A single news item. Immutable once constructed; the loaded list is
/// replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "urlToImage", default)]
    pub image_url: String,

    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,

    pub source: SourceName,

    pub url: String,

    /// The headlines endpoint does not echo the category back, so
    /// remote articles are stamped with the requested one after decode.
    #[serde(default)]
    pub category: Category,
}

impl Article {
    /// Publish date for the card meta line, date-only.
    pub fn published_date(&self) -> String {
        self.published_at.format("%x").to_string()
    }
}
