use super::article::{Article, Category};
use super::page::Page;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main
/// handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Header
    Navigate(Page),
    ToggleTheme,
    OpenMobileMenu,
    CloseMobileMenu,

    // News feed
    SelectCategory(Category),
    RetryFeed,
    SearchSubmitted,
    OpenArticle(String),

    // Background fetch result; errors are flattened to their display
    // string since nothing downstream distinguishes failure kinds.
    FeedLoaded(Result<Vec<Article>, String>),

    // Hero slider
    PrevSlide,
    NextSlide,
    SliderTick,

    // Contact
    ContactSubmitted,
}
