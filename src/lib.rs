//! SkillSwap - A terminal client for trading skills with other learners.
//!
//! This crate provides a keyboard-driven skill exchange client with clean
//! architecture: a login gate, a feed of skill offers, direct messages,
//! post creation and an editable profile, all backed by built-in sample data.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, DTOs and UI-independent services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and local adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "skillswap";
