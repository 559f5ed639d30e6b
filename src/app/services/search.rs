use crate::app::domain::article::Article;

/// Filter articles by case-insensitive substring match against title
/// OR description. Input order is preserved; the input is not mutated,
/// so repeated searches always filter from the full loaded set.
pub fn filter_articles(articles: &[Article], query: &str) -> Vec<Article> {
    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|a| {
            a.title.to_lowercase().contains(&needle)
                || a.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::article::Category;
    use crate::app::services::feed::{ArticleSource, MockArticleSource};

    fn loaded() -> Vec<Article> {
        MockArticleSource::immediate()
            .fetch(Category::General)
            .unwrap()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = filter_articles(&loaded(), "PAKISTAN");
        assert!(!hits.is_empty());
        assert!(hits
            .iter()
            .all(|a| (a.title.clone() + &a.description).to_lowercase().contains("pakistan")));
    }

    #[test]
    fn test_cricket_matches_only_the_squad_announcement() {
        let hits = filter_articles(&loaded(), "cricket");
        assert_eq!(hits.len(), 1);
        assert_eq!(
            hits[0].title,
            "Pakistan Cricket Team Announces Squad for World Cup"
        );
    }

    #[test]
    fn test_description_is_searched_too() {
        // "venture capital" appears only in a description
        let hits = filter_articles(&loaded(), "venture capital");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Tech Startups Attract Record Investments");
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let hits = filter_articles(&loaded(), "zzzzz");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_order_matches_input_order() {
        let articles = loaded();
        let hits = filter_articles(&articles, "pakistan");
        let mut last_index = 0;
        for hit in &hits {
            let index = articles.iter().position(|a| a == hit).unwrap();
            assert!(index >= last_index);
            last_index = index;
        }
    }
}
