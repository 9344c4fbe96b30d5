//! Shared HTML building blocks.
//!
//! Every page is rendered server side with [`maud`] and composed from the
//! shell and fragments in this module. Styling is a single inline stylesheet,
//! so pages need no asset pipeline.

pub mod markdown;

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Inline CSS for all pages.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--muted:#666;--border:#d9d9de;--surface:#fff;--blue:#2563eb;--blue-hover:#1d4ed8;--green:#16a34a;--green-hover:#15803d;--purple:#9333ea;--purple-hover:#7e22ce;--red:#dc2626;--code-bg:#f1f1f4;--mono:ui-monospace,SFMono-Regular,Menlo,Consolas,monospace}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:2rem 1rem}
main{max-width:760px;width:100%;flex:1}
a{color:var(--blue);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto}

.brand{font-family:Georgia,"Times New Roman",serif;font-weight:700;font-size:3.5rem;margin-bottom:1rem;letter-spacing:-.02em}
.page-title{font-family:Georgia,"Times New Roman",serif;font-weight:700;font-size:2.2rem;margin-bottom:1rem;letter-spacing:-.01em}
.centered{text-align:center;margin:auto;max-width:28rem;width:100%}

nav{display:flex;gap:1rem;flex-wrap:wrap;align-items:center;margin-bottom:2rem;padding-bottom:1rem;border-bottom:1px solid var(--border);font-size:.95rem}
nav a{color:var(--muted)}
nav a:hover{color:var(--blue);text-decoration:none}

.btn{display:inline-block;padding:.5rem 1rem;border-radius:6px;border:none;font-size:.95rem;font-weight:600;cursor:pointer;color:#fff;text-decoration:none}
.btn:hover{text-decoration:none}
.btn-blue{background:var(--blue)}.btn-blue:hover{background:var(--blue-hover)}
.btn-green{background:var(--green)}.btn-green:hover{background:var(--green-hover)}
.btn-purple{background:var(--purple)}.btn-purple:hover{background:var(--purple-hover)}
.btn-danger{background:transparent;border:1px solid rgba(220,38,38,.4);color:var(--red)}
.btn-link{background:transparent;border:1px solid var(--border);color:var(--fg)}

label{display:block;font-size:.9rem;font-weight:500;margin:.75rem 0 .35rem}
input[type=text],input[type=email],input[type=password],textarea{width:100%;padding:.65rem;border:1px solid var(--border);border-radius:8px;background:var(--surface);color:var(--fg);font:inherit}
textarea{min-height:16rem;font-family:var(--mono);font-size:.9rem;resize:vertical}
form .btn{margin-top:1rem}

.alert{font-size:.9rem;padding:.75rem 1rem;border-radius:8px;margin:1rem 0}
.alert-error{color:var(--red);background:rgba(239,68,68,.1)}
.alert-success{color:var(--green);background:rgba(34,197,94,.1)}

.card{display:block;padding:1.25rem;border:1px solid var(--border);border-radius:10px;background:var(--surface);margin-bottom:1rem;color:var(--fg)}
.card:hover{border-color:var(--blue);text-decoration:none}
.card h2{font-size:1.15rem;margin-bottom:.25rem}
.card .muted{font-size:.85rem}
.card-actions{display:flex;gap:.5rem;margin-top:.75rem}
.muted{color:var(--muted)}

.toolbar{display:flex;justify-content:space-between;align-items:center;gap:1rem;flex-wrap:wrap;margin-bottom:1.5rem}

.tabs{display:flex;gap:.25rem;border-bottom:1px solid var(--border);margin-bottom:.75rem}
.tabs button{background:none;border:none;padding:.5rem 1rem;font:inherit;font-weight:600;color:var(--muted);cursor:pointer;border-bottom:2px solid transparent}
.tabs button.active{color:var(--fg);border-bottom-color:var(--blue)}
.preview-pane{border:1px solid var(--border);border-radius:8px;padding:1rem;min-height:16rem;background:var(--surface)}

.upload{width:100%;border:2px dashed var(--border);border-radius:10px;padding:1rem;text-align:center;background:var(--surface);cursor:pointer}
.cover-image{width:100%;max-height:24rem;object-fit:cover;border-radius:10px;margin-bottom:1.5rem}

.article-content{font-size:1.02rem;line-height:1.75;margin:1rem 0}
.article-content h1,.article-content h2,.article-content h3,.article-content h4{font-weight:700;margin:1.5rem 0 .75rem}
.article-content h1{font-size:1.5rem}
.article-content h2{font-size:1.3rem}
.article-content h3{font-size:1.1rem}
.article-content p{margin:.75rem 0}
.article-content ul,.article-content ol{margin:.75rem 0;padding-left:1.5rem}
.article-content blockquote{border-left:3px solid var(--border);padding:.25rem 0 .25rem 1rem;margin:.75rem 0;color:var(--muted);font-style:italic}
.article-content pre{background:var(--code-bg);border:1px solid var(--border);border-radius:8px;padding:.75rem 1rem;overflow-x:auto;margin:.75rem 0;font-size:.85rem}
.article-content code{font-family:var(--mono);font-size:.88em;background:var(--code-bg);padding:.1rem .3rem;border-radius:4px}
.article-content pre code{background:none;padding:0}
.article-content table{border-collapse:collapse;margin:.75rem 0}
.article-content th,.article-content td{border:1px solid var(--border);padding:.4rem .75rem;text-align:left}

@media(prefers-color-scheme:dark){
:root{--bg:#0b0b0f;--fg:#e5e5ea;--muted:#9a9aa5;--border:#2a2a33;--surface:#15151b;--code-bg:#1d1d26}
}
"#;

/// Standalone stylesheet for error pages; they do not use [`PAGE_CSS`].
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fafafa;color:#111;padding:1rem}
.error-page{text-align:center;max-width:26rem}
.error-page h1{font-family:Georgia,"Times New Roman",serif;font-size:1.6rem;margin-bottom:.75rem}
.error-page p{color:#666;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#2563eb}
@media(prefers-color-scheme:dark){
body{background:#0b0b0f;color:#e5e5ea}
.error-page p{color:#9a9aa5}
}
"#;

/// Full HTML document shell shared by every page.
pub fn page_shell(title: &str, body: Markup) -> Markup {
	html! {
		(DOCTYPE)
		html lang="en" {
			head {
				meta charset="utf-8";
				meta name="viewport" content="width=device-width, initial-scale=1";
				title { (title) }
				style { (PreEscaped(PAGE_CSS)) }
			}
			body {
				main { (body) }
			}
		}
	}
}

/// Navigation bar shown on pages that require a signed-in user.
pub fn nav() -> Markup {
	html! {
		nav {
			a href="/" { "Home" }
			a href="/dashboard" { "Post a new Blog" }
			a href="/manage-blogs" { "Manage Blogs" }
			a href="/account" { "Account Settings" }
			a href="/signout" { "Sign Out" }
		}
	}
}

/// Inline error box rendered above a form. Empty input renders nothing.
pub fn error_block(messages: &[String]) -> Markup {
	html! {
		@if !messages.is_empty() {
			div class="alert alert-error" {
				@for message in messages {
					p { (message) }
				}
			}
		}
	}
}

/// Inline success box, the green counterpart of [`error_block`].
pub fn success_block(message: &str) -> Markup {
	html! {
		div class="alert alert-success" { p { (message) } }
	}
}

/// Formats a timestamp the way the post pages display it, e.g. `8/25/2026`.
pub fn format_date(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
	timestamp.format("%-m/%-d/%Y").to_string()
}
