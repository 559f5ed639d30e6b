//! FLTK rendering layer - the concrete display surface.

pub mod main_window;
pub mod news_card;
pub mod surface;
pub mod theme;
