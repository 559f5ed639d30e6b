/// One of the mutually-exclusive top-level views. Exactly one page is
/// active at a time; navigation activates it and deactivates the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Contact,
}

impl Page {
    /// Label for nav links and the mobile overlay
    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    /// All pages, in nav order
    pub fn all() -> &'static [Page] {
        &[Self::Home, Self::About, Self::Contact]
    }
}
