//! # Nastenka Library
//!
//! Book recommendations from a title and a short description.
//! Pre-built TF-IDF vectorizers encode the query, an exact nearest-neighbor
//! index retrieves similar books, and a presenter resolves covers and ratings.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod recommend;
pub mod storage;
pub mod ui;

pub use error::{RecommendError, Result};
pub use recommend::{BookQuery, Recommendation, Recommender};
