/// The four free-text fields captured from the contact form. There is
/// no backend; submissions are logged, acknowledged and discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
