use std::path::PathBuf;

use crate::app::controllers::slider::HeroSlider;
use crate::app::domain::article::{Article, Category};
use crate::app::domain::page::Page;
use crate::app::domain::settings::{AppSettings, ThemeMode};
use crate::app::services::search;
use crate::app::surface::Surface;

/// News feed loader phases. Each load restarts the machine, so there
/// is no explicit idle re-entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// The view-state controller. Owns all mutable application state and
/// drives the display surface; widget callbacks translate into method
/// calls via the message dispatch loop.
pub struct AppState<S: Surface> {
    surface: S,
    settings: AppSettings,
    config_path: PathBuf,
    current_page: Page,
    current_category: Category,
    feed_phase: FeedPhase,
    loaded_articles: Vec<Article>,
    slider: HeroSlider,
    mobile_menu_open: bool,
}

impl<S: Surface> AppState<S> {
    /// `config_path` is where theme toggles persist the settings;
    /// production passes `AppSettings::get_config_path()`.
    pub fn new(surface: S, settings: AppSettings, config_path: PathBuf) -> Self {
        let slider = HeroSlider::new(surface.slide_count());
        let mut state = Self {
            surface,
            settings,
            config_path,
            current_page: Page::Home,
            current_category: Category::General,
            feed_phase: FeedPhase::Idle,
            loaded_articles: Vec::new(),
            slider,
            mobile_menu_open: false,
        };
        // Saved dark preference is applied before the first interaction;
        // absence or Light leaves the surface's default palette alone.
        if state.settings.theme_mode.is_dark() {
            state.surface.set_theme(true);
        }
        state
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn current_category(&self) -> Category {
        self.current_category
    }

    pub fn feed_phase(&self) -> FeedPhase {
        self.feed_phase
    }

    pub fn loaded_articles(&self) -> &[Article] {
        &self.loaded_articles
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.settings.theme_mode
    }

    // --- Navigation ---

    /// Activate a page. Returns the category to fetch when the jump
    /// lands on home: navigating home always reloads the feed, which
    /// also discards any active search filter.
    #[must_use]
    pub fn navigate_to_page(&mut self, page: Page) -> Option<Category> {
        self.current_page = page;
        self.surface.set_active_page(page);
        self.surface.scroll_to_top();

        // Close mobile menu if open
        if self.mobile_menu_open {
            self.close_mobile_menu();
        }

        (page == Page::Home).then(|| self.begin_feed_load())
    }

    pub fn open_mobile_menu(&mut self) {
        self.mobile_menu_open = true;
        self.surface.set_mobile_menu_open(true);
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
        self.surface.set_mobile_menu_open(false);
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    // --- Theme ---

    pub fn toggle_theme(&mut self) {
        self.settings.theme_mode = self.settings.theme_mode.toggled();
        self.surface.set_theme(self.settings.theme_mode.is_dark());
        if let Err(e) = self.settings.save_to(&self.config_path) {
            eprintln!("Failed to save settings: {}", e);
        }
    }

    // --- News feed ---

    /// Enter the loading phase: clear the grid, show the loading
    /// indicator, hide the error panel. Returns the category the
    /// caller should fetch. The prior `loaded_articles` are kept until
    /// a fetch succeeds.
    #[must_use]
    pub fn begin_feed_load(&mut self) -> Category {
        self.feed_phase = FeedPhase::Loading;
        self.surface.clear_articles();
        self.surface.show_loading(true);
        self.surface.show_feed_error(false);
        self.current_category
    }

    /// Select a category: exactly one control stays highlighted and a
    /// full reload is requested (not a client-side filter, since a
    /// real feed needs a new query per category).
    #[must_use]
    pub fn select_category(&mut self, category: Category) -> Category {
        self.current_category = category;
        self.surface.set_selected_category(category);
        self.begin_feed_load()
    }

    /// Apply a finished fetch. Results land here in arrival order;
    /// with overlapping loads the last one wins, stale or not.
    pub fn finish_feed_load(&mut self, result: Result<Vec<Article>, String>) {
        self.surface.show_loading(false);
        match result {
            Ok(articles) => {
                self.loaded_articles = articles;
                self.feed_phase = FeedPhase::Loaded;
                self.surface.render_articles(&self.loaded_articles);
            }
            Err(e) => {
                eprintln!("Error fetching news: {}", e);
                self.feed_phase = FeedPhase::Failed;
                self.surface.show_feed_error(true);
            }
        }
    }

    // --- Search ---

    /// Filter the loaded set by the query currently in the search box
    /// and render the subset. Whitespace-only queries are a no-op.
    /// `loaded_articles` is never mutated, so every search filters
    /// from the full loaded set, not a previous result.
    pub fn search(&mut self) {
        let query = self.surface.search_query();
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        let hits = search::filter_articles(&self.loaded_articles, query);
        self.surface.render_articles(&hits);
    }

    // --- Hero slider ---

    pub fn next_slide(&mut self) {
        let index = self.slider.next();
        self.surface.show_slide(index);
    }

    pub fn prev_slide(&mut self) {
        let index = self.slider.prev();
        self.surface.show_slide(index);
    }

    /// Timer tick; runs on every view and is never rescheduled by
    /// manual navigation.
    pub fn tick_slide(&mut self) {
        let index = self.slider.advance();
        self.surface.show_slide(index);
    }

    pub fn current_slide(&self) -> usize {
        self.slider.current()
    }

    // --- Contact form ---

    /// No backend exists: log the captured fields, acknowledge, clear.
    pub fn submit_contact(&mut self) {
        let message = self.surface.contact_fields();
        println!(
            "Contact form submitted: name={:?} email={:?} subject={:?} message={:?}",
            message.name, message.email, message.subject, message.message
        );
        self.surface.acknowledge_contact();
        self.surface.clear_contact_form();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::contact::ContactMessage;
    use crate::app::services::feed::{ArticleSource, MockArticleSource};

    /// Recording stand-in for the FLTK window.
    #[derive(Default)]
    struct FakeSurface {
        slide_count: usize,
        active_page: Option<Page>,
        scrolled_to_top: usize,
        mobile_menu_open: bool,
        dark: bool,
        theme_sets: usize,
        selected_category: Option<Category>,
        grid_cleared: usize,
        loading_visible: bool,
        error_visible: bool,
        rendered: Vec<Vec<Article>>,
        shown_slide: Option<usize>,
        search_box: String,
        contact: ContactMessage,
        contact_cleared: usize,
        contact_acknowledged: usize,
    }

    impl FakeSurface {
        fn with_slides(count: usize) -> Self {
            Self {
                slide_count: count,
                ..Default::default()
            }
        }

        fn last_rendered(&self) -> &[Article] {
            self.rendered.last().map(Vec::as_slice).unwrap_or(&[])
        }
    }

    impl Surface for FakeSurface {
        fn slide_count(&self) -> usize {
            self.slide_count
        }
        fn set_active_page(&mut self, page: Page) {
            self.active_page = Some(page);
        }
        fn scroll_to_top(&mut self) {
            self.scrolled_to_top += 1;
        }
        fn set_mobile_menu_open(&mut self, open: bool) {
            self.mobile_menu_open = open;
        }
        fn set_theme(&mut self, dark: bool) {
            self.dark = dark;
            self.theme_sets += 1;
        }
        fn set_selected_category(&mut self, category: Category) {
            self.selected_category = Some(category);
        }
        fn clear_articles(&mut self) {
            self.grid_cleared += 1;
        }
        fn show_loading(&mut self, visible: bool) {
            self.loading_visible = visible;
        }
        fn show_feed_error(&mut self, visible: bool) {
            self.error_visible = visible;
        }
        fn render_articles(&mut self, articles: &[Article]) {
            self.rendered.push(articles.to_vec());
        }
        fn show_slide(&mut self, index: usize) {
            self.shown_slide = Some(index);
        }
        fn search_query(&self) -> String {
            self.search_box.clone()
        }
        fn contact_fields(&self) -> ContactMessage {
            self.contact.clone()
        }
        fn clear_contact_form(&mut self) {
            self.contact_cleared += 1;
        }
        fn acknowledge_contact(&mut self) {
            self.contact_acknowledged += 1;
        }
    }

    /// Settings path for tests that never save; toggle tests pass a
    /// tempdir path of their own so nothing touches the real config.
    fn unused_config_path() -> std::path::PathBuf {
        std::env::temp_dir().join("khabarnama-unused-settings.json")
    }

    fn new_state() -> AppState<FakeSurface> {
        AppState::new(
            FakeSurface::with_slides(3),
            AppSettings::default(),
            unused_config_path(),
        )
    }

    fn mock_articles(category: Category) -> Vec<Article> {
        MockArticleSource::immediate().fetch(category).unwrap()
    }

    fn loaded_state() -> AppState<FakeSurface> {
        let mut state = new_state();
        let _ = state.begin_feed_load();
        state.finish_feed_load(Ok(mock_articles(Category::General)));
        state
    }

    #[test]
    fn test_navigate_activates_exactly_that_page() {
        let mut state = new_state();
        for &page in Page::all() {
            let _ = state.navigate_to_page(page);
            assert_eq!(state.current_page(), page);
            assert_eq!(state.surface.active_page, Some(page));
        }
    }

    #[test]
    fn test_navigate_home_requests_a_reload() {
        let mut state = new_state();
        assert_eq!(state.navigate_to_page(Page::About), None);
        assert_eq!(state.feed_phase(), FeedPhase::Idle);
        assert_eq!(
            state.navigate_to_page(Page::Home),
            Some(Category::General)
        );
        assert_eq!(state.feed_phase(), FeedPhase::Loading);
        assert!(state.surface.loading_visible);
    }

    #[test]
    fn test_navigation_scrolls_to_top_and_closes_menu() {
        let mut state = new_state();
        state.open_mobile_menu();
        assert!(state.surface.mobile_menu_open);
        let _ = state.navigate_to_page(Page::Contact);
        assert!(!state.mobile_menu_open());
        assert!(!state.surface.mobile_menu_open);
        assert_eq!(state.surface.scrolled_to_top, 1);
    }

    #[test]
    fn test_category_selection_marks_one_control() {
        let mut state = new_state();
        for &category in Category::all() {
            let requested = state.select_category(category);
            assert_eq!(requested, category);
            assert_eq!(state.current_category(), category);
            assert_eq!(state.surface.selected_category, Some(category));
        }
    }

    #[test]
    fn test_begin_load_clears_grid_and_toggles_panels() {
        let mut state = loaded_state();
        state.surface.error_visible = true;
        let category = state.begin_feed_load();
        assert_eq!(category, Category::General);
        assert!(state.surface.loading_visible);
        assert!(!state.surface.error_visible);
        assert_eq!(state.surface.grid_cleared, 2);
        // Prior articles survive until a fetch succeeds
        assert_eq!(state.loaded_articles().len(), 6);
    }

    #[test]
    fn test_successful_load_renders_in_input_order() {
        let mut state = new_state();
        let _ = state.begin_feed_load();
        let articles = mock_articles(Category::General);
        state.finish_feed_load(Ok(articles.clone()));
        assert_eq!(state.feed_phase(), FeedPhase::Loaded);
        assert!(!state.surface.loading_visible);
        assert_eq!(state.surface.last_rendered(), articles.as_slice());
    }

    #[test]
    fn test_technology_load_yields_two_articles() {
        let mut state = new_state();
        let requested = state.select_category(Category::Technology);
        state.finish_feed_load(Ok(mock_articles(requested)));
        assert_eq!(state.loaded_articles().len(), 2);
        assert!(state
            .loaded_articles()
            .iter()
            .all(|a| a.category == Category::Technology));
    }

    #[test]
    fn test_failed_load_keeps_prior_articles() {
        let mut state = loaded_state();
        let _ = state.begin_feed_load();
        state.finish_feed_load(Err("socket closed".to_string()));
        assert_eq!(state.feed_phase(), FeedPhase::Failed);
        assert!(state.surface.error_visible);
        assert!(!state.surface.loading_visible);
        assert_eq!(state.loaded_articles().len(), 6);
    }

    #[test]
    fn test_late_result_wins_over_earlier_one() {
        // Two uncoordinated loads: the second to arrive is what shows
        let mut state = new_state();
        let _ = state.select_category(Category::Technology);
        let _ = state.select_category(Category::Sports);
        state.finish_feed_load(Ok(mock_articles(Category::Sports)));
        state.finish_feed_load(Ok(mock_articles(Category::Technology)));
        assert_eq!(state.loaded_articles().len(), 2);
        assert_eq!(state.current_category(), Category::Sports);
    }

    #[test]
    fn test_search_renders_subset_without_mutating_loaded() {
        let mut state = loaded_state();
        state.surface.search_box = "cricket".to_string();
        state.search();
        assert_eq!(state.surface.last_rendered().len(), 1);
        assert_eq!(state.loaded_articles().len(), 6);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut state = loaded_state();
        state.surface.search_box = "PAKISTAN".to_string();
        state.search();
        assert!(!state.surface.last_rendered().is_empty());
    }

    #[test]
    fn test_search_refilters_from_full_set() {
        let mut state = loaded_state();
        state.surface.search_box = "economic".to_string();
        state.search();
        assert_eq!(state.surface.last_rendered().len(), 1);

        // A broader query afterwards must filter the full loaded set,
        // not the previous one-article result
        state.surface.search_box = "a".to_string();
        state.search();
        assert_eq!(state.surface.last_rendered().len(), 6);
    }

    #[test]
    fn test_blank_search_is_a_no_op() {
        let mut state = loaded_state();
        let renders = state.surface.rendered.len();
        state.surface.search_box = "   ".to_string();
        state.search();
        assert_eq!(state.surface.rendered.len(), renders);
    }

    #[test]
    fn test_search_with_no_matches_renders_placeholder_case() {
        let mut state = loaded_state();
        state.surface.search_box = "quantum".to_string();
        state.search();
        assert!(state.surface.last_rendered().is_empty());
        // No-matches is a rendering state, not a feed failure
        assert!(!state.surface.error_visible);
        assert_eq!(state.feed_phase(), FeedPhase::Loaded);
    }

    #[test]
    fn test_slider_wraps_both_directions() {
        let mut state = new_state();
        state.prev_slide();
        assert_eq!(state.current_slide(), 2);
        assert_eq!(state.surface.shown_slide, Some(2));
        state.next_slide();
        assert_eq!(state.current_slide(), 0);
        state.tick_slide();
        assert_eq!(state.current_slide(), 1);
    }

    #[test]
    fn test_dark_preference_applied_at_startup() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
            ..Default::default()
        };
        let state = AppState::new(FakeSurface::with_slides(3), settings, unused_config_path());
        assert!(state.surface.dark);
    }

    #[test]
    fn test_light_preference_leaves_default_palette() {
        let state = new_state();
        assert_eq!(state.surface.theme_sets, 0);
    }

    #[test]
    fn test_toggle_theme_twice_restores_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::new(
            FakeSurface::with_slides(3),
            AppSettings::default(),
            dir.path().join("settings.json"),
        );
        let before = state.theme_mode();
        state.toggle_theme();
        assert!(state.surface.dark);
        assert_ne!(state.theme_mode(), before);
        state.toggle_theme();
        assert!(!state.surface.dark);
        assert_eq!(state.theme_mode(), before);
    }

    #[test]
    fn test_toggle_theme_persists_to_the_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut state = AppState::new(
            FakeSurface::with_slides(3),
            AppSettings::default(),
            path.clone(),
        );

        state.toggle_theme();

        let saved = AppSettings::load_from(&path);
        assert_eq!(saved.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_contact_submit_acknowledges_and_clears() {
        let mut state = new_state();
        state.surface.contact = ContactMessage {
            name: "Ayesha".to_string(),
            email: "ayesha@example.com".to_string(),
            subject: "Feedback".to_string(),
            message: "Great reader".to_string(),
        };
        state.submit_contact();
        assert_eq!(state.surface.contact_acknowledged, 1);
        assert_eq!(state.surface.contact_cleared, 1);
    }
}
