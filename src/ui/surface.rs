use fltk::{app, app::Sender, dialog, prelude::*};

use crate::app::domain::article::{Article, Category};
use crate::app::domain::contact::ContactMessage;
use crate::app::domain::messages::Message;
use crate::app::domain::page::Page;
use crate::app::surface::Surface;
use crate::ui::main_window::MainWidgets;
use crate::ui::{news_card, theme};

/// What the grid currently shows, kept so a theme switch can restyle
/// the cards in place.
enum GridContent {
    Cleared,
    Articles(Vec<Article>),
}

/// The real display surface: drives the FLTK widget tree.
pub struct FltkSurface {
    widgets: MainWidgets,
    sender: Sender<Message>,
    dark: bool,
    selected_category: Category,
    grid_content: GridContent,
}

impl FltkSurface {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>) -> Self {
        let mut surface = Self {
            widgets,
            sender,
            dark: false,
            selected_category: Category::General,
            grid_content: GridContent::Cleared,
        };
        theme::apply_theme(
            &mut surface.widgets,
            surface.selected_category,
            surface.dark,
        );
        surface
    }

    fn rebuild_grid(&mut self) {
        let width = self.widgets.grid.w();
        self.widgets.grid.clear();
        self.widgets.grid.begin();
        match &self.grid_content {
            GridContent::Cleared => {}
            GridContent::Articles(articles) if articles.is_empty() => {
                news_card::empty_placeholder(width, self.dark);
            }
            GridContent::Articles(articles) => {
                for article in articles {
                    news_card::article_card(article, width, self.dark, &self.sender);
                }
            }
        }
        self.widgets.grid.end();
        self.widgets.scroll.scroll_to(0, 0);
        self.widgets.scroll.redraw();
        app::redraw();
    }
}

impl Surface for FltkSurface {
    fn slide_count(&self) -> usize {
        self.widgets.slides.len()
    }

    fn set_active_page(&mut self, page: Page) {
        for (id, group) in &mut self.widgets.pages {
            if *id == page {
                group.show();
            } else {
                group.hide();
            }
        }
        self.widgets.wind.redraw();
    }

    fn scroll_to_top(&mut self) {
        self.widgets.scroll.scroll_to(0, 0);
        self.widgets.scroll.redraw();
    }

    fn set_mobile_menu_open(&mut self, open: bool) {
        if open {
            self.widgets.overlay.show();
        } else {
            self.widgets.overlay.hide();
        }
        self.widgets.wind.redraw();
    }

    fn set_theme(&mut self, dark: bool) {
        self.dark = dark;
        theme::apply_theme(&mut self.widgets, self.selected_category, dark);
        // Restyle whatever the grid is currently showing
        self.rebuild_grid();
    }

    fn set_selected_category(&mut self, category: Category) {
        self.selected_category = category;
        theme::style_category_buttons(
            &mut self.widgets.category_buttons,
            category,
            self.dark,
        );
    }

    fn clear_articles(&mut self) {
        self.grid_content = GridContent::Cleared;
        self.rebuild_grid();
    }

    fn show_loading(&mut self, visible: bool) {
        if visible {
            self.widgets.loading_frame.show();
        } else {
            self.widgets.loading_frame.hide();
        }
        self.widgets.wind.redraw();
    }

    fn show_feed_error(&mut self, visible: bool) {
        if visible {
            self.widgets.error_group.show();
        } else {
            self.widgets.error_group.hide();
        }
        self.widgets.wind.redraw();
    }

    fn render_articles(&mut self, articles: &[Article]) {
        self.grid_content = GridContent::Articles(articles.to_vec());
        self.rebuild_grid();
    }

    fn show_slide(&mut self, index: usize) {
        for (i, slide) in self.widgets.slides.iter_mut().enumerate() {
            if i == index {
                slide.show();
            } else {
                slide.hide();
            }
        }
        self.widgets.wind.redraw();
    }

    fn search_query(&self) -> String {
        self.widgets.search_input.value()
    }

    fn contact_fields(&self) -> ContactMessage {
        ContactMessage {
            name: self.widgets.name_input.value(),
            email: self.widgets.email_input.value(),
            subject: self.widgets.subject_input.value(),
            message: self.widgets.message_input.value(),
        }
    }

    fn clear_contact_form(&mut self) {
        self.widgets.name_input.set_value("");
        self.widgets.email_input.set_value("");
        self.widgets.subject_input.set_value("");
        self.widgets.message_input.set_value("");
    }

    fn acknowledge_contact(&mut self) {
        dialog::message_default("Thank you for your message! We will get back to you soon.");
    }
}
