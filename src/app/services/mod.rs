//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Article sources (mock and remote headline providers)
//! - Search filtering

pub mod feed;
pub mod search;
