//! Shared domain types for the Matside scoring console.

pub mod commands;
pub mod config;
pub mod corner;
pub mod events;
pub mod game;
pub mod scoring;
pub mod time_control;

mod errors;

pub use errors::{MatsideError, Result};
