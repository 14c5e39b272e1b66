//! Recommend command - one query, one result list

use anyhow::{Context, Result};

use crate::recommend::Recommender;
use crate::ui;

pub fn run(recommender: &Recommender, title: &str, description: &str, json: bool, open_first: bool) -> Result<()> {
	let start = std::time::Instant::now();

	// One-shot: a failed search is the process result
	let recs = recommender.recommend(title, description).context("Search failed")?;

	if json {
		println!("{}", serde_json::to_string_pretty(&recs)?);
		return Ok(());
	}

	if recs.is_empty() {
		ui::info("Enter both a title and a description to get recommendations");
		return Ok(());
	}

	ui::render::page_header();
	ui::render::recommendations(&recs);

	ui::success(&format!(
		"Found {} books in {}ms",
		recs.len(),
		start.elapsed().as_millis()
	));

	if open_first {
		let cover = &recs[0].cover_url;
		ui::debug(&format!("Opening: {}", cover));
		if let Err(e) = open::that(cover) {
			ui::warn(&format!("Failed to open: {}", e));
		}
	}

	Ok(())
}
