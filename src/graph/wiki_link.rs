use std::sync::LazyLock;

use regex::Regex;

// Non-greedy by construction: `]` cannot appear inside, so each match ends at
// the first `]]` after its `[[`.
static WIKI_LINK: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\[\[([^\]]+)\]\]").expect("wiki-link pattern is valid")
});

/// Yields the text of every `[[...]]` reference in `content`, left to right.
///
/// The captured text is returned verbatim (no trimming, no case folding).
/// Unterminated or empty brackets yield nothing.
pub fn wiki_links(content: &str) -> impl Iterator<Item = &str> {
	WIKI_LINK
		.captures_iter(content)
		.filter_map(|cap| cap.get(1).map(|m| m.as_str()))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn links(s: &str) -> Vec<&str> {
		wiki_links(s).collect()
	}

	#[test]
	fn finds_every_reference() {
		assert_eq!(
			links("see [[Alpha]], then [[Beta]] and [[Alpha]] again"),
			vec!["Alpha", "Beta", "Alpha"]
		);
	}

	#[test]
	fn keeps_captured_text_verbatim() {
		assert_eq!(links("[[ spaced ]]"), vec![" spaced "]);
		assert_eq!(links(r#"[["quoted" <b>]]"#), vec![r#""quoted" <b>"#]);
	}

	#[test]
	fn ignores_malformed_brackets() {
		assert!(links("[[]]").is_empty());
		assert!(links("[[unterminated").is_empty());
		assert!(links("[single]").is_empty());
		assert!(links("").is_empty());
	}

	#[test]
	fn stops_at_first_closing_pair() {
		assert_eq!(links("[[a]]b]]"), vec!["a"]);
		assert_eq!(links("[[[a]]"), vec!["[a"]);
	}

	#[test]
	fn handles_unicode() {
		assert_eq!(
			links("🚀 [[Résumé]] and [[日本語ノート]] 🎉"),
			vec!["Résumé", "日本語ノート"]
		);
	}
}
