//! REPL mode - interactive recommendation session

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use crate::recommend::Recommender;
use crate::ui;

/// What one prompt produced
#[derive(Debug, PartialEq, Eq)]
enum Input {
	Text(String),
	Help,
	Exit,
}

pub fn run(recommender: &Recommender) -> Result<()> {
	ui::log::print_logo();
	println!();
	ui::render::page_header();
	println!();
	ui::info("Enter a title, then a short description. Type 'exit' to quit");

	let catalog = recommender.store().catalog();
	ui::success(&format!("Loaded {} books", catalog.len()));
	println!();

	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();

	loop {
		let title = match prompt("Book Title", &mut lines)? {
			Input::Text(t) => t,
			Input::Help => {
				show_help();
				continue;
			}
			Input::Exit => break,
		};

		let description = match prompt("Book Description", &mut lines)? {
			Input::Text(d) => d,
			Input::Help => {
				show_help();
				continue;
			}
			Input::Exit => break,
		};

		search_once(recommender, &title, &description);
		println!();
	}

	ui::info("Goodbye!");
	Ok(())
}

fn prompt<I>(label: &str, lines: &mut I) -> Result<Input>
where
	I: Iterator<Item = io::Result<String>>,
{
	print!("{} ", format!("{}>", label).bright_blue().bold());
	io::stdout().flush()?;

	match lines.next() {
		Some(line) => Ok(parse_input(&line?)),
		None => Ok(Input::Exit),
	}
}

fn parse_input(line: &str) -> Input {
	match line.trim() {
		"exit" | "quit" | "q" => Input::Exit,
		"help" => Input::Help,
		text => Input::Text(text.to_string()),
	}
}

fn search_once(recommender: &Recommender, title: &str, description: &str) {
	let start = std::time::Instant::now();

	match recommender.recommend(title, description) {
		Ok(recs) if recs.is_empty() => {
			ui::debug("Blank title or description, nothing searched");
		}
		Ok(recs) => {
			ui::render::recommendations(&recs);
			println!(
				"\n{} {} in {}ms",
				"✓".bright_blue().bold(),
				format!("Found {} books", recs.len()).bright_white(),
				start.elapsed().as_millis()
			);
		}
		Err(e) => {
			ui::error(&format!("Search failed: {}", e));
		}
	}
}

fn show_help() {
	println!("{}", "REPL Commands:".bright_blue().bold());
	println!("  {}  Enter a title, then a description", "<text>".dimmed());
	println!("  {}    Show this help message", "help".dimmed());
	println!("  {}    Exit REPL mode", "exit".dimmed());
}
