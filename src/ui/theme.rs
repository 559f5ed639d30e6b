use fltk::{button::Button, enums::Color, prelude::*};

use crate::app::domain::article::Category;
use crate::ui::main_window::MainWidgets;

pub struct Palette {
    pub window_bg: Color,
    pub header_bg: Color,
    pub header_text: Color,
    pub text: Color,
    pub muted_text: Color,
    pub control_bg: Color,
    pub input_bg: Color,
    pub card_bg: Color,
    pub accent: Color,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            window_bg: Color::from_rgb(25, 25, 25),
            header_bg: Color::from_rgb(35, 35, 35),
            header_text: Color::from_rgb(220, 220, 220),
            text: Color::from_rgb(220, 220, 220),
            muted_text: Color::from_rgb(150, 150, 150),
            control_bg: Color::from_rgb(50, 50, 50),
            input_bg: Color::from_rgb(40, 40, 40),
            card_bg: Color::from_rgb(35, 35, 35),
            accent: Color::from_rgb(38, 166, 120),
        }
    } else {
        Palette {
            window_bg: Color::from_rgb(245, 245, 245),
            header_bg: Color::from_rgb(13, 71, 61),
            header_text: Color::White,
            text: Color::from_rgb(30, 30, 30),
            muted_text: Color::from_rgb(100, 100, 100),
            control_bg: Color::from_rgb(225, 225, 225),
            input_bg: Color::White,
            card_bg: Color::White,
            accent: Color::from_rgb(13, 105, 80),
        }
    }
}

/// Recolor the whole widget tree for the chosen mode and flip the
/// toggle glyph (moon in light mode, sun in dark).
pub fn apply_theme(widgets: &mut MainWidgets, selected_category: Category, is_dark: bool) {
    let p = palette(is_dark);

    widgets.wind.set_color(p.window_bg);

    widgets.header.set_color(p.header_bg);
    widgets.brand.set_label_color(p.header_text);

    for (_, btn) in &mut widgets.nav_buttons {
        btn.set_color(p.header_bg);
        btn.set_label_color(p.header_text);
    }

    widgets
        .theme_button
        .set_label(if is_dark { "\u{2600}" } else { "\u{1F319}" });
    widgets.theme_button.set_color(p.header_bg);
    widgets.theme_button.set_label_color(p.header_text);

    widgets.menu_button.set_color(p.header_bg);
    widgets.menu_button.set_label_color(p.header_text);

    style_category_buttons(&mut widgets.category_buttons, selected_category, is_dark);

    widgets.search_input.set_color(p.input_bg);
    widgets.search_input.set_text_color(p.text);
    widgets.search_button.set_color(p.control_bg);
    widgets.search_button.set_label_color(p.text);

    widgets.loading_frame.set_label_color(p.muted_text);
    widgets.error_label.set_label_color(p.text);
    widgets.retry_button.set_color(p.accent);
    widgets.retry_button.set_label_color(Color::White);
    widgets.scroll.set_color(p.window_bg);

    widgets.prev_button.set_color(p.control_bg);
    widgets.prev_button.set_label_color(p.text);
    widgets.next_button.set_color(p.control_bg);
    widgets.next_button.set_label_color(p.text);

    widgets.about_title.set_label_color(p.text);
    widgets.about_body.set_label_color(p.text);

    widgets.contact_title.set_label_color(p.text);
    for input in [
        &mut widgets.name_input,
        &mut widgets.email_input,
        &mut widgets.subject_input,
    ] {
        input.set_color(p.input_bg);
        input.set_text_color(p.text);
        input.set_label_color(p.text);
    }
    widgets.message_input.set_color(p.input_bg);
    widgets.message_input.set_text_color(p.text);
    widgets.message_input.set_label_color(p.text);
    widgets.send_button.set_color(p.accent);
    widgets.send_button.set_label_color(Color::White);

    widgets.overlay_panel.set_color(p.header_bg);
    widgets.close_button.set_color(p.header_bg);
    widgets.close_button.set_label_color(p.header_text);
    for (_, btn) in &mut widgets.overlay_buttons {
        btn.set_color(p.header_bg);
        btn.set_label_color(p.header_text);
    }

    widgets.wind.redraw();
}

/// Exactly one category button carries the selected treatment.
pub fn style_category_buttons(
    buttons: &mut [(Category, Button)],
    selected: Category,
    is_dark: bool,
) {
    let p = palette(is_dark);
    for (category, btn) in buttons {
        if *category == selected {
            btn.set_color(p.accent);
            btn.set_label_color(Color::White);
        } else {
            btn.set_color(p.control_bg);
            btn.set_label_color(p.text);
        }
        btn.redraw();
    }
}
