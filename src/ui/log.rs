//! Unified logging system

use colored::*;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
    _   __           __             __
   / | / /___ ______/ /____  ____  / /______ _
  /  |/ / __ `/ ___/ __/ _ \/ __ \/ //_/ __ `/
 / /|  / /_/ (__  ) /_/  __/ / / / ,< / /_/ /
/_/ |_/\__,_/____/\__/\___/_/ /_/_/|_|\__,_/  "#;

const SLOGANS: &[&str] = &[
	"I read. You read.",
	"Perhaps the next story waits for you here",
	"Judging books by their covers since v0.1",
	"Half a title, three descriptions",
	"White nights, long reads",
	"Shelved by distance, not by Dewey",
	"One more chapter...",
	"No spoilers, only neighbors",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::rng().random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	eprintln!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		eprintln!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}

/// Clickable URL (OSC 8 terminal hyperlink)
pub fn url_link(url: &str, label: &str) -> String {
	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, label)
}

/// Shorten long text for one-line display, keeping the end visible
pub fn ellipsize(text: &str, max_len: usize) -> String {
	let count = text.chars().count();
	if count <= max_len || max_len < 8 {
		return text.to_string();
	}

	let head: String = text.chars().take(max_len / 2).collect();
	let tail: String = text.chars().skip(count - (max_len / 2 - 3)).collect();
	format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ellipsize_keeps_short_text() {
		assert_eq!(ellipsize("covers.jpg", 40), "covers.jpg");
	}

	#[test]
	fn ellipsize_long_text() {
		let url = "https://covers.openlibrary.org/b/isbn/0439785960-L.jpg";
		let short = ellipsize(url, 20);
		assert_eq!(short.chars().count(), 20);
		assert!(short.starts_with("https://co"));
		assert!(short.ends_with("-L.jpg"));
	}

	#[test]
	fn link_wraps_label() {
		let link = url_link("https://example.com/a.jpg", "cover");
		assert!(link.contains("https://example.com/a.jpg"));
		assert!(link.contains("cover"));
	}
}
