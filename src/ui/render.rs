//! Terminal rendering of recommendations

use colored::*;

use crate::recommend::Recommendation;

use super::log::{ellipsize, url_link};

pub const TITLE: &str = "Nastenka's Library.";
pub const TAGLINE: &str = "I read. You read. Perhaps the next story waits for you here.";
pub const RESULTS_HEADER: &str = "Recommended for you:";

const COVER_LABEL_LEN: usize = 60;

pub fn page_header() {
	println!("{}", TITLE.bright_blue().bold());
	println!("{}", TAGLINE.dimmed().italic());
}

/// Print every recommendation as a block
pub fn recommendations(recs: &[Recommendation]) {
	super::header(RESULTS_HEADER);
	println!();

	for rec in recs {
		print!("{}", format_block(rec));
	}
}

/// Title, cover, description (when present), rating and separator
pub fn format_block(rec: &Recommendation) -> String {
	let mut out = String::new();

	out.push_str(&format!(
		"{} {}\n",
		format!("{:2}.", rec.rank).bright_blue().bold(),
		rec.title.bright_white().bold()
	));
	out.push_str(&format!(
		"    {} {}\n",
		"cover".dimmed(),
		url_link(&rec.cover_url, &ellipsize(&rec.cover_url, COVER_LABEL_LEN)).bright_blue()
	));

	if let Some(desc) = &rec.description {
		out.push_str(&format!("    {}\n", desc));
	}

	out.push_str(&format!(
		"    Average Rating: ⭐ {}\n",
		format_rating(rec.average_rating).bold()
	));
	out.push_str(&format!("    {}\n", "---".dimmed()));
	out
}

pub fn format_rating(rating: f32) -> String {
	format!("{:.2}", rating)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rec(description: Option<&str>) -> Recommendation {
		Recommendation {
			rank: 1,
			row: 7,
			title: "Pnin".into(),
			cover_url: "http://example.com/cover.jpg".into(),
			description: description.map(String::from),
			average_rating: 3.9,
			distance: 0.4,
		}
	}

	#[test]
	fn block_has_rating_and_cover() {
		colored::control::set_override(false);
		let block = format_block(&rec(Some("A professor in exile.")));
		assert!(block.contains("Pnin"));
		assert!(block.contains("http://example.com/cover.jpg"));
		assert!(block.contains("A professor in exile."));
		assert!(block.contains("Average Rating: ⭐ 3.90"));
	}

	#[test]
	fn missing_description_is_omitted() {
		colored::control::set_override(false);
		let block = format_block(&rec(None));
		assert_eq!(block.lines().count(), 4);
	}

	#[test]
	fn long_description_printed_whole() {
		colored::control::set_override(false);
		let desc = "Timofey Pnin teaches Russian at an American college. ".repeat(20);
		let block = format_block(&rec(Some(&desc)));
		assert!(block.contains(&desc));
		assert!(!block.contains("..."));
	}
}
