//! Plain-text excerpts of Markdown post content.
//!
//! List views show a short summary of each post instead of rendering the
//! full Markdown. The transform strips block and inline syntax with a fixed
//! set of regexes, collapses newlines, and truncates to a character budget.
//! It never fails: malformed Markdown simply passes through untouched.

use std::sync::LazyLock;

use regex::Regex;

/// Fenced code blocks, including their contents.
static FENCED_CODE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("fenced code regex should compile"));

/// Images, removed entirely. Must run before [`LINK`] so the leading `!`
/// does not leave the alt text behind as a link.
static IMAGE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("image regex should compile"));

/// Links, resolved to their display text.
static LINK: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("link regex should compile"));

/// Heading markers of any level.
static HEADING: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").expect("heading regex should compile"));

/// Unordered list markers at the start of a line.
static UNORDERED_ITEM: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?m)^[-*+]\s+").expect("unordered item regex should compile"));

/// Ordered list markers at the start of a line.
static ORDERED_ITEM: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?m)^\d+\.\s+").expect("ordered item regex should compile"));

/// Blockquote markers at the start of a line.
static BLOCKQUOTE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?m)^>\s*").expect("blockquote regex should compile"));

/// Bold spans. Must run before [`ITALIC`], otherwise the italic regex eats
/// one star of each `**` pair.
static BOLD: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold regex should compile"));

/// Italic spans.
static ITALIC: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("italic regex should compile"));

/// Inline code spans.
static INLINE_CODE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code regex should compile"));

/// Runs of newlines, collapsed into a single space.
static NEWLINES: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?:\r?\n)+").expect("newline regex should compile"));

/// Reduces Markdown to plain text and truncates it to `max_len` characters.
///
/// Truncation counts characters, not words, so the cut may land mid-word.
/// A literal `...` is appended only when the stripped text actually exceeds
/// the budget, so short posts come back without a marker.
pub fn extract(markdown: &str, max_len: usize) -> String {
	let text = FENCED_CODE.replace_all(markdown, "");
	let text = IMAGE.replace_all(&text, "");
	let text = LINK.replace_all(&text, "$1");
	let text = HEADING.replace_all(&text, "");
	let text = UNORDERED_ITEM.replace_all(&text, "");
	let text = ORDERED_ITEM.replace_all(&text, "");
	let text = BLOCKQUOTE.replace_all(&text, "");
	let text = BOLD.replace_all(&text, "$1");
	let text = ITALIC.replace_all(&text, "$1");
	let text = INLINE_CODE.replace_all(&text, "$1");
	let text = NEWLINES.replace_all(&text, " ");

	let text = text.trim();

	if text.chars().count() > max_len {
		let mut excerpt: String = text.chars().take(max_len).collect();
		excerpt.push_str("...");
		excerpt
	} else {
		text.to_string()
	}
}

#[cfg(test)]
mod test {
	use super::extract;

	#[test]
	fn test_heading() {
		assert_eq!(extract("# Hello", 150), "Hello");
		assert_eq!(extract("###### Deep", 150), "Deep");
	}

	#[test]
	fn test_bold_and_italic() {
		assert_eq!(extract("**bold** and *italic*", 150), "bold and italic");
	}

	#[test]
	fn test_inline_code() {
		assert_eq!(extract("run `cargo build` now", 150), "run cargo build now");
	}

	#[test]
	fn test_link_keeps_text() {
		assert_eq!(extract("[click here](https://example.com)", 150), "click here");
	}

	#[test]
	fn test_image_removed_entirely() {
		assert_eq!(extract("![alt text](https://example.com/img.png)", 150), "");
	}

	#[test]
	fn test_image_between_text() {
		assert_eq!(
			extract("before ![pic](https://example.com/a.png) after", 150),
			"before  after"
		);
	}

	#[test]
	fn test_fenced_code_removed_with_contents() {
		assert_eq!(extract("```rust\nfn main() {}\n```", 150), "");
	}

	#[test]
	fn test_fenced_code_keeps_surrounding_text() {
		assert_eq!(
			extract("intro\n```\nsecret code\n```\noutro", 150),
			"intro outro"
		);
		assert!(!extract("x\n```\nsecret code\n```\ny", 150).contains("secret"));
	}

	#[test]
	fn test_list_markers() {
		assert_eq!(extract("- one\n- two\n+ three", 150), "one two three");
		assert_eq!(extract("1. first\n2. second", 150), "first second");
	}

	#[test]
	fn test_blockquote_marker() {
		assert_eq!(extract("> wise words", 150), "wise words");
	}

	#[test]
	fn test_newlines_collapse_to_single_space() {
		assert_eq!(extract("one\ntwo\n\n\nthree", 150), "one two three");
		assert_eq!(extract("one\r\ntwo\r\n\r\nthree", 150), "one two three");
	}

	#[test]
	fn test_truncates_at_character_count() {
		let input = "a".repeat(200);
		let excerpt = extract(&input, 150);

		assert_eq!(excerpt.chars().count(), 153);
		assert!(excerpt.ends_with("..."));
		assert!(excerpt.starts_with(&"a".repeat(150)));
	}

	#[test]
	fn test_truncation_may_split_words() {
		let excerpt = extract("hello world", 8);

		assert_eq!(excerpt, "hello wo...");
	}

	#[test]
	fn test_no_marker_when_short_enough() {
		assert_eq!(extract("short post", 150), "short post");
		assert_eq!(extract(&"a".repeat(150), 150), "a".repeat(150));
	}

	#[test]
	fn test_marker_counts_against_transformed_length() {
		// 160 characters of heading text: the marker applies because the
		// *stripped* text exceeds the budget, not the raw input.
		let input = format!("# {}", "b".repeat(160));
		let excerpt = extract(&input, 150);

		assert_eq!(excerpt.chars().count(), 153);
	}

	#[test]
	fn test_empty_input() {
		assert_eq!(extract("", 150), "");
		assert_eq!(extract("   \n\t  ", 150), "");
	}

	#[test]
	fn test_idempotent() {
		let cases = [
			"# Hello",
			"**bold** and *italic*",
			"[click here](https://example.com)",
			"- one\n- two",
			"plain text that needs no work",
		];

		for case in cases {
			let once = extract(case, 150);
			assert_eq!(extract(&once, 150), once, "not idempotent for {case:?}");
		}
	}

	#[test]
	fn test_idempotent_with_marker() {
		let input = "word ".repeat(60);
		let once = extract(&input, 150);

		assert!(once.ends_with("..."));
		assert_eq!(extract(&once, 150), once);
	}

	#[test]
	fn test_mixed_document() {
		let input = "# Title\n\nSome **bold** text with a [link](https://x.io).\n\n- item\n\n> quote";
		assert_eq!(extract(input, 150), "Title Some bold text with a link. item quote");
	}

	#[test]
	fn test_unicode_counts_characters_not_bytes() {
		let input = "é".repeat(151);
		let excerpt = extract(&input, 150);

		assert_eq!(excerpt.chars().count(), 153);
		assert!(excerpt.ends_with("..."));
	}
}
