//! Info command - describe the loaded artifacts

use anyhow::Result;
use colored::*;

use crate::recommend::Recommender;
use crate::ui;

pub fn run(recommender: &Recommender) -> Result<()> {
	let store = recommender.store();

	ui::header("Artifacts");
	for entry in store.manifest() {
		println!(
			"  {:<24} {} {}",
			entry.name.bright_white(),
			entry.hash.short().yellow(),
			entry.path.display().to_string().dimmed()
		);
	}

	let title = store.title_vectorizer();
	let description = store.description_vectorizer();
	let index = store.index();
	let query_dim = recommender.encoder().dim();

	ui::header("Model");
	println!("  {:<24} {} terms, {} features", "title vectorizer".bright_white(), title.vocabulary_size(), title.dim());
	println!(
		"  {:<24} {} terms, {} features",
		"description vectorizer".bright_white(),
		description.vocabulary_size(),
		description.dim()
	);
	println!("  {:<24} {} rows, {} features, {}", "neighbor index".bright_white(), index.len(), index.dim(), index.metric());
	println!("  {:<24} {} books", "catalog".bright_white(), store.catalog().len());
	println!();

	if index.dim() == query_dim {
		ui::success(&format!("Query layout matches index ({} features)", query_dim));
	} else {
		ui::warn(&format!(
			"Query layout has {} features, index expects {}",
			query_dim,
			index.dim()
		));
	}

	Ok(())
}
