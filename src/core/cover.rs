//! Cover image resolution

use crate::config::{COVER_HOST, NO_PHOTO_MARKER, PLACEHOLDER_COVER};

/// Open Library cover URL for an ISBN
pub fn isbn_cover_url(isbn: &str) -> String {
	format!("https://{}/b/isbn/{}-L.jpg", COVER_HOST, isbn)
}

/// Pick a display image: ISBN cover, then the supplied `image_url`, then the placeholder.
///
/// A candidate is skipped when it is empty or contains the `nophoto` marker.
/// Validity is judged from the string alone; nothing is fetched.
pub fn resolve_cover(isbn: Option<&str>, image_url: Option<&str>) -> String {
	let from_isbn = isbn
		.map(str::trim)
		.filter(|i| !i.is_empty())
		.map(isbn_cover_url);
	let fallback = image_url.map(str::trim).map(String::from);

	[from_isbn, fallback]
		.into_iter()
		.flatten()
		.find(|url| is_usable(url))
		.unwrap_or_else(|| PLACEHOLDER_COVER.to_string())
}

fn is_usable(url: &str) -> bool {
	!url.is_empty() && !url.contains(NO_PHOTO_MARKER)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn isbn_wins() {
		let url = resolve_cover(Some("0439785960"), Some("http://example.com/cover.jpg"));
		assert!(url.contains("0439785960-L.jpg"));
		assert_eq!(url, "https://covers.openlibrary.org/b/isbn/0439785960-L.jpg");
	}

	#[test]
	fn image_url_without_isbn() {
		assert_eq!(
			resolve_cover(None, Some("http://example.com/cover.jpg")),
			"http://example.com/cover.jpg"
		);
		assert_eq!(
			resolve_cover(Some(""), Some("http://example.com/cover.jpg")),
			"http://example.com/cover.jpg"
		);
	}

	#[test]
	fn placeholder_when_nothing_usable() {
		assert_eq!(resolve_cover(None, None), PLACEHOLDER_COVER);
		assert_eq!(resolve_cover(Some("  "), Some("")), PLACEHOLDER_COVER);
		assert_eq!(
			resolve_cover(None, Some("https://s.gr-assets.com/assets/nophoto/book/111x148.png")),
			PLACEHOLDER_COVER
		);
	}

	#[test]
	fn nophoto_isbn_falls_through() {
		assert_eq!(
			resolve_cover(Some("nophoto"), Some("http://example.com/cover.jpg")),
			"http://example.com/cover.jpg"
		);
	}
}
