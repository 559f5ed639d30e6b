//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Article, Page, Settings, Messages)
//! - `controllers/` - Orchestration (HeroSlider, FeedController)
//! - `services/` - Business operations (article sources, search)
//! - `infrastructure/` - External integrations (error types)
//! - `surface.rs` - Display surface abstraction the UI implements
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;
pub mod surface;

// Re-exports for convenient external access
pub use domain::{AppSettings, Article, Category, ContactMessage, Message, Page, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use services::feed::{ArticleSource, MockArticleSource, RemoteArticleSource};
pub use state::{AppState, FeedPhase};
pub use surface::Surface;
