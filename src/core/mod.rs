//! Core utilities for the Namibia Hockey Union CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `format`: date/time parsing and display formatting
//! - `session`: persisted login session
//! - `validate`: field-level input validation

pub mod format;
pub mod session;
pub mod validate;

// Re-export commonly used items for convenience
pub use format::{format_date_time, format_full_date, format_time, parse_date_time};
pub use session::{clear_session, load_session, save_session, Session};
pub use validate::{require_field, validate_email, validate_jersey_number};
