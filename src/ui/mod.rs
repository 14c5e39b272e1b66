//! # User Interface
//!
//! Colored terminal output with clickable cover links.

pub mod log;
pub mod render;

pub use log::{debug, error, header, info, success, warn, Log};
