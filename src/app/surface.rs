use crate::app::domain::article::{Article, Category};
use crate::app::domain::contact::ContactMessage;
use crate::app::domain::page::Page;

/// Everything the controller is allowed to do to the display.
///
/// The FLTK window implements this over its widget handles; tests use
/// a recording fake, so `AppState` never touches a widget directly.
pub trait Surface {
    /// Number of hero slide containers, fixed at startup.
    fn slide_count(&self) -> usize;

    /// Mark exactly one page container active, all others inactive.
    fn set_active_page(&mut self, page: Page);

    /// Reset the viewport scroll position to the origin.
    fn scroll_to_top(&mut self);

    fn set_mobile_menu_open(&mut self, open: bool);

    /// Apply the light or dark palette and flip the toggle indicator.
    fn set_theme(&mut self, dark: bool);

    /// Mark exactly one category control selected, all others cleared.
    fn set_selected_category(&mut self, category: Category);

    /// Empty the news grid without rendering a placeholder.
    fn clear_articles(&mut self);

    fn show_loading(&mut self, visible: bool);

    fn show_feed_error(&mut self, visible: bool);

    /// Render one card per article, in input order. An empty slice
    /// renders the single "no results" placeholder.
    fn render_articles(&mut self, articles: &[Article]);

    /// Activate slide `index`; the caller keeps it in range.
    fn show_slide(&mut self, index: usize);

    /// Current content of the search input.
    fn search_query(&self) -> String;

    /// Current content of the four contact fields.
    fn contact_fields(&self) -> ContactMessage;

    fn clear_contact_form(&mut self);

    /// Show the submission acknowledgment to the user.
    fn acknowledge_contact(&mut self);
}
