use std::sync::Arc;

use fltk::{app, prelude::*};

use khabarnama::app::controllers::feed::FeedController;
use khabarnama::app::{
    AppSettings, AppState, ArticleSource, Message, MockArticleSource, RemoteArticleSource,
};
use khabarnama::ui::main_window::build_main_window;
use khabarnama::ui::surface::FltkSurface;

const SLIDE_INTERVAL_SECS: f64 = 5.0;

/// The slider timer runs for the whole session, on every view, and is
/// never rescheduled by manual navigation.
fn schedule_slider_ticks(sender: app::Sender<Message>) {
    app::add_timeout3(SLIDE_INTERVAL_SECS, move |handle| {
        sender.send(Message::SliderTick);
        app::repeat_timeout3(SLIDE_INTERVAL_SECS, handle);
    });
}

fn main() {
    let fltk_app = app::App::default();
    let settings = AppSettings::load();
    let (sender, receiver) = app::channel::<Message>();

    let widgets = build_main_window(&sender);
    let mut wind = widgets.wind.clone();
    let surface = FltkSurface::new(widgets, sender.clone());

    let source: Arc<dyn ArticleSource> = match settings.api_key.clone() {
        Some(key) => Arc::new(RemoteArticleSource::new(key, settings.country.clone())),
        None => Arc::new(MockArticleSource::default()),
    };
    let feed = FeedController::new(source, sender.clone());

    let mut state = AppState::new(surface, settings, AppSettings::get_config_path());

    wind.show();

    // Initial home feed load
    feed.spawn_fetch(state.begin_feed_load());
    schedule_slider_ticks(sender.clone());

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::Navigate(page) => {
                    if let Some(category) = state.navigate_to_page(page) {
                        feed.spawn_fetch(category);
                    }
                }
                Message::ToggleTheme => state.toggle_theme(),
                Message::OpenMobileMenu => state.open_mobile_menu(),
                Message::CloseMobileMenu => state.close_mobile_menu(),

                Message::SelectCategory(category) => {
                    feed.spawn_fetch(state.select_category(category));
                }
                Message::RetryFeed => feed.spawn_fetch(state.begin_feed_load()),
                Message::SearchSubmitted => state.search(),
                Message::FeedLoaded(result) => state.finish_feed_load(result),
                Message::OpenArticle(url) => {
                    // The demonstration feed uses "#" stub links
                    if url != "#" {
                        if let Err(e) = open::that(&url) {
                            eprintln!("Failed to open article link: {}", e);
                        }
                    }
                }

                Message::PrevSlide => state.prev_slide(),
                Message::NextSlide => state.next_slide(),
                Message::SliderTick => state.tick_slide(),

                Message::ContactSubmitted => state.submit_contact(),
            }
        }
    }
}
