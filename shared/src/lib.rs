//! Shared utilities and common types for the Turno server
//!
//! This crate provides common functionality used across all server modules:
//! - API response structures
//! - Phone number validation and formatting utilities

pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use types::response::{ApiResponse, ErrorResponse};
pub use utils::phone;
