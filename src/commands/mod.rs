//! # Command Implementations
//!
//! Each submodule handles one CLI command.

pub mod info;
pub mod recommend;
pub mod repl;
