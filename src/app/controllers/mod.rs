//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Hero slider index management
//! - Background feed fetching

pub mod feed;
pub mod slider;
