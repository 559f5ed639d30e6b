use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use crate::app::domain::article::Article;
use crate::app::domain::messages::Message;
use crate::ui::theme::palette;

pub const CARD_H: i32 = 150;
const IMAGE_W: i32 = 130;
const PAD: i32 = 10;

/// Build one news card. The caller is responsible for having the grid
/// container begun; the pack lays cards out top to bottom.
pub fn article_card(article: &Article, width: i32, is_dark: bool, sender: &Sender<Message>) {
    let p = palette(is_dark);

    let mut card = Group::new(0, 0, width, CARD_H, None);
    card.set_frame(FrameType::BorderBox);
    card.set_color(p.card_bg);

    // Image slot; remote images are not downloaded, the slot stands in
    let mut image_slot = Frame::new(PAD, PAD, IMAGE_W, CARD_H - 2 * PAD, "\u{1F5BC}");
    image_slot.set_frame(FrameType::FlatBox);
    image_slot.set_color(p.control_bg);
    image_slot.set_label_size(28);
    image_slot.set_label_color(p.muted_text);

    let text_x = PAD + IMAGE_W + 12;
    let text_w = width - text_x - PAD;

    let mut tag = Frame::new(text_x, PAD, 120, 18, None);
    tag.set_label(article.category.display_name());
    tag.set_align(Align::Inside | Align::Left);
    tag.set_label_size(11);
    tag.set_label_color(p.accent);
    tag.set_label_font(Font::HelveticaBold);

    let mut title = Frame::new(text_x, PAD + 22, text_w, 22, None);
    title.set_label(&article.title);
    title.set_align(Align::Inside | Align::Left);
    title.set_label_font(Font::HelveticaBold);
    title.set_label_size(15);
    title.set_label_color(p.text);

    // Truncation is left to the layout; the frame simply clips
    let mut description = Frame::new(text_x, PAD + 46, text_w, 52, None);
    description.set_label(&article.description);
    description.set_align(Align::Inside | Align::Top | Align::Left | Align::Wrap);
    description.set_label_size(12);
    description.set_label_color(p.muted_text);

    let mut read_more = Button::new(text_x, CARD_H - PAD - 24, 100, 24, "Read More");
    read_more.set_frame(FrameType::FlatBox);
    read_more.set_color(p.card_bg);
    read_more.set_label_color(p.accent);
    read_more.set_label_font(Font::HelveticaBold);
    read_more.set_label_size(12);
    let url = article.url.clone();
    let s = sender.clone();
    read_more.set_callback(move |_| s.send(Message::OpenArticle(url.clone())));

    let mut meta = Frame::new(text_x + 110, CARD_H - PAD - 24, text_w - 110, 24, None);
    meta.set_label(&format!(
        "{}   {}",
        article.source.name,
        article.published_date()
    ));
    meta.set_align(Align::Inside | Align::Right);
    meta.set_label_size(11);
    meta.set_label_color(p.muted_text);

    card.end();
}

/// The single "no results" placeholder spanning the grid.
pub fn empty_placeholder(width: i32, is_dark: bool) {
    let p = palette(is_dark);
    let mut frame = Frame::new(
        0,
        0,
        width,
        80,
        "No news articles found. Try a different search term.",
    );
    frame.set_frame(FrameType::FlatBox);
    frame.set_color(p.card_bg);
    frame.set_label_color(p.muted_text);
}
