use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, CallbackTrigger, Color, Font, FrameType},
    frame::Frame,
    group::{Group, Pack, Scroll},
    input::{Input, MultilineInput},
    prelude::*,
    window::Window,
};

use crate::app::domain::article::Category;
use crate::app::domain::messages::Message;
use crate::app::domain::page::Page;

pub const WINDOW_W: i32 = 980;
pub const WINDOW_H: i32 = 700;
pub const HEADER_H: i32 = 56;

const HERO_H: i32 = 170;
const SLIDE_COUNT: usize = 3;

const SLIDE_HEADLINES: [&str; SLIDE_COUNT] = [
    "Stay Informed with the Latest News",
    "Breaking Stories from Across Pakistan",
    "Five Categories. One Reader.",
];

pub struct MainWidgets {
    pub wind: Window,
    pub header: Frame,
    pub brand: Frame,
    pub nav_buttons: Vec<(Page, Button)>,
    pub theme_button: Button,
    pub menu_button: Button,

    pub pages: Vec<(Page, Group)>,

    // Home page
    pub slides: Vec<Frame>,
    pub prev_button: Button,
    pub next_button: Button,
    pub category_buttons: Vec<(Category, Button)>,
    pub search_input: Input,
    pub search_button: Button,
    pub loading_frame: Frame,
    pub error_group: Group,
    pub error_label: Frame,
    pub retry_button: Button,
    pub scroll: Scroll,
    pub grid: Pack,

    // About page
    pub about_title: Frame,
    pub about_body: Frame,

    // Contact page
    pub contact_title: Frame,
    pub name_input: Input,
    pub email_input: Input,
    pub subject_input: Input,
    pub message_input: MultilineInput,
    pub send_button: Button,

    // Mobile overlay, added last so it draws on top
    pub overlay: Group,
    pub overlay_backdrop: Button,
    pub overlay_panel: Frame,
    pub overlay_buttons: Vec<(Page, Button)>,
    pub close_button: Button,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_W, WINDOW_H, "Khabarnama");
    wind.set_xclass("Khabarnama");

    // --- Header ---
    let mut header = Frame::new(0, 0, WINDOW_W, HEADER_H, None);
    header.set_frame(FrameType::FlatBox);

    let mut brand = Frame::new(16, 0, 220, HEADER_H, "\u{1F4F0} Khabarnama");
    brand.set_align(Align::Inside | Align::Left);
    brand.set_label_font(Font::HelveticaBold);
    brand.set_label_size(20);

    let mut nav_buttons = Vec::new();
    for (i, &page) in Page::all().iter().enumerate() {
        let mut btn = Button::new(
            WINDOW_W - 390 + i as i32 * 90,
            13,
            80,
            30,
            page.nav_label(),
        );
        btn.set_frame(FrameType::FlatBox);
        let s = sender.clone();
        btn.set_callback(move |_| s.send(Message::Navigate(page)));
        nav_buttons.push((page, btn));
    }

    let mut theme_button = Button::new(WINDOW_W - 110, 13, 40, 30, "\u{1F319}");
    theme_button.set_frame(FrameType::FlatBox);
    theme_button.set_tooltip("Toggle dark theme");
    let s = sender.clone();
    theme_button.set_callback(move |_| s.send(Message::ToggleTheme));

    let mut menu_button = Button::new(WINDOW_W - 60, 13, 40, 30, "\u{2630}");
    menu_button.set_frame(FrameType::FlatBox);
    menu_button.set_tooltip("Menu");
    let s = sender.clone();
    menu_button.set_callback(move |_| s.send(Message::OpenMobileMenu));

    // --- Home page ---
    let mut home = Group::new(0, HEADER_H, WINDOW_W, WINDOW_H - HEADER_H, None);

    let hero = Group::new(0, HEADER_H, WINDOW_W, HERO_H, None);
    let mut slides = Vec::new();
    for (i, headline) in SLIDE_HEADLINES.iter().enumerate() {
        let mut slide = Frame::new(0, HEADER_H, WINDOW_W, HERO_H, None);
        slide.set_label(headline);
        slide.set_frame(FrameType::FlatBox);
        slide.set_label_size(26);
        slide.set_label_font(Font::HelveticaBold);
        slide.set_label_color(Color::White);
        // Distinct shade per slide so advancing is visible
        slide.set_color(match i {
            0 => Color::from_rgb(13, 71, 61),
            1 => Color::from_rgb(21, 101, 92),
            _ => Color::from_rgb(38, 50, 56),
        });
        if i != 0 {
            slide.hide();
        }
        slides.push(slide);
    }

    let mut prev_button = Button::new(10, HEADER_H + HERO_H / 2 - 16, 32, 32, "\u{276E}");
    let s = sender.clone();
    prev_button.set_callback(move |_| s.send(Message::PrevSlide));

    let mut next_button = Button::new(WINDOW_W - 42, HEADER_H + HERO_H / 2 - 16, 32, 32, "\u{276F}");
    let s = sender.clone();
    next_button.set_callback(move |_| s.send(Message::NextSlide));

    hero.end();

    let mut category_buttons = Vec::new();
    for (i, &category) in Category::all().iter().enumerate() {
        let mut btn = Button::new(16 + i as i32 * 130, 238, 120, 30, category.display_name());
        btn.set_frame(FrameType::RoundedBox);
        let s = sender.clone();
        btn.set_callback(move |_| s.send(Message::SelectCategory(category)));
        category_buttons.push((category, btn));
    }

    let mut search_input = Input::new(16, 278, 320, 28, None);
    search_input.set_tooltip("Search loaded articles");
    search_input.set_trigger(CallbackTrigger::EnterKey);
    let s = sender.clone();
    search_input.set_callback(move |_| s.send(Message::SearchSubmitted));

    let mut search_button = Button::new(342, 278, 90, 28, "Search");
    let s = sender.clone();
    search_button.set_callback(move |_| s.send(Message::SearchSubmitted));

    let mut loading_frame = Frame::new(16, 314, WINDOW_W - 32, 24, "Loading news...");
    loading_frame.set_align(Align::Inside | Align::Left);
    loading_frame.hide();

    let mut error_group = Group::new(16, 314, WINDOW_W - 32, 28, None);
    let mut error_label = Frame::new(
        16,
        314,
        WINDOW_W - 180,
        28,
        "Failed to load news. Please check your connection and try again.",
    );
    error_label.set_align(Align::Inside | Align::Left);
    let mut retry_button = Button::new(WINDOW_W - 156, 314, 140, 28, "Retry");
    let s = sender.clone();
    retry_button.set_callback(move |_| s.send(Message::RetryFeed));
    error_group.end();
    error_group.hide();

    let mut scroll = Scroll::new(16, 350, WINDOW_W - 32, WINDOW_H - 366, None);
    scroll.set_frame(FrameType::FlatBox);
    let mut grid = Pack::new(16, 350, WINDOW_W - 52, WINDOW_H - 366, None);
    grid.set_spacing(12);
    grid.end();
    scroll.end();

    home.end();

    // --- About page ---
    let mut about = Group::new(0, HEADER_H, WINDOW_W, WINDOW_H - HEADER_H, None);
    let mut about_title = Frame::new(16, HEADER_H + 24, WINDOW_W - 32, 32, "About Khabarnama");
    about_title.set_align(Align::Inside | Align::Left);
    about_title.set_label_font(Font::HelveticaBold);
    about_title.set_label_size(22);
    let mut about_body = Frame::new(
        16,
        HEADER_H + 68,
        WINDOW_W - 32,
        200,
        "Khabarnama is a small desktop news reader for Pakistani headlines.\n\
         Pick a category to reload the feed, search within the loaded\n\
         articles, and follow Read More to the full story in your browser.\n\n\
         Without an API key configured, a built-in demonstration feed is shown.",
    );
    about_body.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);
    about.end();
    about.hide();

    // --- Contact page ---
    let mut contact = Group::new(0, HEADER_H, WINDOW_W, WINDOW_H - HEADER_H, None);
    let mut contact_title = Frame::new(16, HEADER_H + 24, WINDOW_W - 32, 32, "Contact Us");
    contact_title.set_align(Align::Inside | Align::Left);
    contact_title.set_label_font(Font::HelveticaBold);
    contact_title.set_label_size(22);

    let name_input = Input::new(120, HEADER_H + 80, 420, 28, "Name:");
    let email_input = Input::new(120, HEADER_H + 120, 420, 28, "Email:");
    let subject_input = Input::new(120, HEADER_H + 160, 420, 28, "Subject:");
    let message_input = MultilineInput::new(120, HEADER_H + 200, 540, 140, "Message:");

    let mut send_button = Button::new(120, HEADER_H + 356, 140, 32, "Send Message");
    let s = sender.clone();
    send_button.set_callback(move |_| s.send(Message::ContactSubmitted));

    contact.end();
    contact.hide();

    let pages = vec![(Page::Home, home), (Page::About, about), (Page::Contact, contact)];

    // --- Mobile overlay ---
    let mut overlay = Group::new(0, 0, WINDOW_W, WINDOW_H, None);

    // Full-window backdrop; clicking outside the panel closes the menu
    let mut overlay_backdrop = Button::new(0, 0, WINDOW_W, WINDOW_H, None);
    overlay_backdrop.set_frame(FrameType::FlatBox);
    overlay_backdrop.set_color(Color::from_rgb(24, 24, 24));
    let s = sender.clone();
    overlay_backdrop.set_callback(move |_| s.send(Message::CloseMobileMenu));

    let mut overlay_panel = Frame::new(WINDOW_W - 260, 0, 260, WINDOW_H, None);
    overlay_panel.set_frame(FrameType::FlatBox);

    let mut close_button = Button::new(WINDOW_W - 52, 12, 36, 30, "\u{2715}");
    close_button.set_frame(FrameType::FlatBox);
    let s = sender.clone();
    close_button.set_callback(move |_| s.send(Message::CloseMobileMenu));

    let mut overlay_buttons = Vec::new();
    for (i, &page) in Page::all().iter().enumerate() {
        let mut btn = Button::new(
            WINDOW_W - 236,
            70 + i as i32 * 48,
            212,
            36,
            page.nav_label(),
        );
        btn.set_frame(FrameType::FlatBox);
        let s = sender.clone();
        btn.set_callback(move |_| s.send(Message::Navigate(page)));
        overlay_buttons.push((page, btn));
    }

    overlay.end();
    overlay.hide();

    wind.end();

    MainWidgets {
        wind,
        header,
        brand,
        nav_buttons,
        theme_button,
        menu_button,
        pages,
        slides,
        prev_button,
        next_button,
        category_buttons,
        search_input,
        search_button,
        loading_frame,
        error_group,
        error_label,
        retry_button,
        scroll,
        grid,
        about_title,
        about_body,
        contact_title,
        name_input,
        email_input,
        subject_input,
        message_input,
        send_button,
        overlay,
        overlay_backdrop,
        overlay_panel,
        overlay_buttons,
        close_button,
    }
}
