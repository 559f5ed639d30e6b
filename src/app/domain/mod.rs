//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Article, its source attribution and Category
//! - Page identifiers for the top-level views
//! - Contact form payload
//! - Application settings
//! - Message types for the event system

pub mod article;
pub mod contact;
pub mod messages;
pub mod page;
pub mod settings;

pub use article::{Article, Category, SourceName};
pub use contact::ContactMessage;
pub use messages::Message;
pub use page::Page;
pub use settings::{AppSettings, ThemeMode};
