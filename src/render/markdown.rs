//! Markdown rendering for post bodies.
//!
//! Delegates to [`pulldown_cmark`] with the GitHub-flavored extension set.
//! Raw HTML in the source is demoted to visible text rather than passed
//! through, and links open in a new tab.

use maud::{html, Markup, PreEscaped};
use pulldown_cmark::{html as md_html, Event, Options, Parser};

/// Render Markdown to HTML, wrapped in the article styling container.
pub fn render(markdown: &str) -> Markup {
	let mut options = Options::empty();
	options.insert(Options::ENABLE_TABLES);
	options.insert(Options::ENABLE_FOOTNOTES);
	options.insert(Options::ENABLE_STRIKETHROUGH);
	options.insert(Options::ENABLE_TASKLISTS);

	let parser = Parser::new_ext(markdown, options).map(|event| match event {
		// Raw HTML becomes literal text, so posts cannot inject markup.
		Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
		event => event,
	});

	let mut output = String::with_capacity(markdown.len() * 2);
	md_html::push_html(&mut output, parser);

	let output = output.replace(
		"<a href=",
		"<a target=\"_blank\" rel=\"noopener noreferrer\" href=",
	);

	html! {
		div class="article-content" { (PreEscaped(output)) }
	}
}

/// Render the editor preview pane: like [`render`], but empty content gets
/// a placeholder instead of an empty container.
pub fn preview(markdown: &str) -> Markup {
	if markdown.trim().is_empty() {
		html! {
			p class="muted" { "No content to preview. Start writing in the Write tab." }
		}
	} else {
		render(markdown)
	}
}
