use std::collections::HashMap;

use axum::{
	extract::{Multipart, Path, Query, State},
	response::{IntoResponse, Redirect, Response},
	Form,
};
use maud::{html, Markup};

use crate::{
	excerpt,
	extract::Session,
	render::{error_block, format_date, markdown, nav, page_shell},
	route::model::{display_names, fallback_name},
	supabase::{
		self,
		model::{NewPost, Post, PostPatch},
	},
};

use super::{model, Error, RouteError};

/// The feed
/// Renders every post, newest first, each with a short plain-text excerpt.
pub async fn feed(
	State(supabase): State<supabase::Client>,
	session: Session,
) -> Result<Markup, RouteError> {
	let posts = supabase.posts(&session.token).await?;

	let author_ids: Vec<String> = posts.iter().map(|post| post.author_id.clone()).collect();
	let names = display_names(&supabase, &session.token, &author_ids).await;
	let viewer_name = profile_name(&supabase, &session.token, &session.user.id).await;

	Ok(feed_page(&viewer_name, &posts, &names, &session.user.id))
}

/// Authoring form
/// Blank for a new post; `?edit=` loads one of your posts back into it.
pub async fn dashboard(
	State(supabase): State<supabase::Client>,
	session: Session,
	Query(query): Query<model::EditQuery>,
) -> Result<Markup, RouteError> {
	let Some(id) = query.edit else {
		return Ok(editor_page(&model::EditorForm::default(), &[]));
	};

	let post = supabase
		.post(&session.token, &id)
		.await?
		.filter(|post| post.author_id == session.user.id)
		.ok_or(Error::UnknownPost)?;

	let form = model::EditorForm {
		post_id: Some(post.id),
		title: post.title,
		content: post.content,
		image_url: post.image_url,
		..model::EditorForm::default()
	};

	Ok(editor_page(&form, &[]))
}

/// Publish
/// Creates or updates a post, uploading the cover image when one is attached.
pub async fn submit(
	State(supabase): State<supabase::Client>,
	session: Session,
	multipart: Multipart,
) -> Result<Response, RouteError> {
	let mut form = model::read_editor_form(multipart)
		.await
		.map_err(Error::Multipart)?;

	let problems = form.problems();

	if !problems.is_empty() {
		form.image = None;

		return Ok(editor_page(&form, &problems).into_response());
	}

	if let Some(image) = form.image.take() {
		let key = model::image_key(&session.user.id, &image.file_name);

		match supabase
			.upload_image(&session.token, &key, &image.content_type, image.data)
			.await
		{
			Ok(url) => form.image_url = Some(url),
			Err(error) => return Ok(editor_page(&form, &[error.message()]).into_response()),
		}
	}

	match &form.post_id {
		Some(id) => {
			let patch = PostPatch {
				title: form.title.trim(),
				content: &form.content,
				image_url: form.image_url.as_deref(),
			};

			supabase
				.update_post(&session.token, id, &session.user.id, &patch)
				.await?
				.ok_or(Error::UnknownPost)?;
		}
		None => {
			let post = NewPost {
				title: form.title.trim(),
				content: &form.content,
				image_url: form.image_url.as_deref(),
				author_id: &session.user.id,
			};

			supabase.create_post(&session.token, &post).await?;
		}
	}

	Ok(Redirect::to("/").into_response())
}

/// Preview
/// Re-renders the authoring form with the requested pane showing.
pub async fn preview(_session: Session, multipart: Multipart) -> Result<Markup, RouteError> {
	let mut form = model::read_editor_form(multipart)
		.await
		.map_err(Error::Multipart)?;

	// A file selection cannot survive the round trip; the hidden
	// `image_url` field keeps an already uploaded cover.
	form.image = None;

	Ok(editor_page(&form, &[]))
}

/// Manage view
/// Lists your own posts with edit and delete controls.
pub async fn manage(
	State(supabase): State<supabase::Client>,
	session: Session,
) -> Result<Markup, RouteError> {
	let posts = supabase
		.posts_by_author(&session.token, &session.user.id)
		.await?;

	Ok(manage_page(&posts))
}

/// Post page
/// The full rendered article with author and date.
pub async fn detail(
	State(supabase): State<supabase::Client>,
	session: Session,
	Path(id): Path<String>,
) -> Result<Markup, RouteError> {
	let post = supabase
		.post(&session.token, &id)
		.await?
		.ok_or(Error::UnknownPost)?;

	let author = profile_name(&supabase, &session.token, &post.author_id).await;

	Ok(detail_page(&post, &author, post.author_id == session.user.id))
}

/// Delete post
/// Removes one of your posts, then returns to the page the form was on.
pub async fn delete(
	State(supabase): State<supabase::Client>,
	session: Session,
	Path(id): Path<String>,
	Form(input): Form<model::DeleteInput>,
) -> Result<Redirect, RouteError> {
	if !supabase
		.delete_post(&session.token, &id, &session.user.id)
		.await?
	{
		return Err(Error::UnknownPost.into());
	}

	let target = match input.return_to.as_deref() {
		Some("/manage-blogs") => "/manage-blogs",
		_ => "/",
	};

	Ok(Redirect::to(target))
}

async fn profile_name(supabase: &supabase::Client, token: &str, id: &str) -> String {
	match supabase.profile(token, id).await {
		Ok(Some(profile)) => profile.display_name,
		Ok(None) => fallback_name(id),
		Err(error) => {
			tracing::warn!(error = %error, "profile lookup failed");
			fallback_name(id)
		}
	}
}

fn feed_page(
	viewer_name: &str,
	posts: &[Post],
	names: &HashMap<String, String>,
	viewer_id: &str,
) -> Markup {
	page_shell(
		"Blogger",
		html! {
			h1 class="brand" { "Blogger." }
			(nav())
			div class="toolbar" {
				p { "Welcome " strong { (viewer_name) } }
				a class="btn btn-purple" href="/dashboard" { "Post a new Blog" }
			}
			h2 style="font-size:1.1rem;margin-bottom:.75rem" { "Blogs:" }
			@if posts.is_empty() {
				p class="muted" { "No posts yet :(" }
			} @else {
				@for post in posts {
					(feed_item(post, names, viewer_id))
				}
			}
		},
	)
}

fn feed_item(post: &Post, names: &HashMap<String, String>, viewer_id: &str) -> Markup {
	let author = names
		.get(&post.author_id)
		.cloned()
		.unwrap_or_else(|| fallback_name(&post.author_id));

	html! {
		div class="card" {
			a href={ "/post/" (post.id) } style="color:inherit" {
				h2 { (post.title) }
			}
			p class="muted" { "By: " (author) }
			p class="muted" { (format_date(&post.created_at)) }
			p style="margin-top:.5rem" { (excerpt::extract(&post.content, 200)) }
			@if post.author_id == viewer_id {
				div class="card-actions" {
					a class="btn btn-link" href={ "/dashboard?edit=" (post.id) } { "Edit" }
					(delete_form(&post.id, "/"))
				}
			}
		}
	}
}

fn manage_page(posts: &[Post]) -> Markup {
	page_shell(
		"Manage Your Blogs | Blogger",
		html! {
			(nav())
			div class="toolbar" {
				h1 class="page-title" style="margin-bottom:0" { "Manage Your Blogs" }
				a class="btn btn-purple" href="/dashboard" { "Post a new Blog" }
			}
			@if posts.is_empty() {
				div class="centered" style="margin-top:3rem" {
					p class="muted" { "You haven't written any blogs yet." }
					a class="btn btn-green" style="display:inline-block;margin-top:1rem" href="/dashboard" {
						"Write Your First Blog"
					}
				}
			} @else {
				@for post in posts {
					(manage_item(post))
				}
			}
		},
	)
}

fn manage_item(post: &Post) -> Markup {
	html! {
		div class="card" {
			a href={ "/post/" (post.id) } style="color:inherit" {
				h2 { (post.title) }
			}
			p class="muted" { "Created: " (format_date(&post.created_at)) }
			p style="margin-top:.5rem" { (excerpt::extract(&post.content, 150)) }
			div class="card-actions" {
				a class="btn btn-link" href={ "/dashboard?edit=" (post.id) } { "Edit" }
				(delete_form(&post.id, "/manage-blogs"))
			}
		}
	}
}

fn detail_page(post: &Post, author: &str, own: bool) -> Markup {
	page_shell(
		&format!("{} | Blogger", post.title),
		html! {
			(nav())
			div class="toolbar" {
				h1 class="page-title" style="margin-bottom:0" { (post.title) }
				div class="card-actions" style="margin-top:0" {
					@if own {
						a class="btn btn-green" href={ "/dashboard?edit=" (post.id) } { "Edit Blog" }
					}
					a class="btn btn-blue" href="/" { "← Back to Home" }
				}
			}
			p class="muted" { "By: " (author) }
			p class="muted" { (format_date(&post.created_at)) }
			@if let Some(image_url) = &post.image_url {
				img class="cover-image" style="margin-top:1rem" src=(image_url) alt=(post.title);
			}
			(markdown::render(&post.content))
		},
	)
}

fn editor_page(form: &model::EditorForm, problems: &[String]) -> Markup {
	let editing = form.post_id.is_some();
	let heading = if editing { "Edit Post" } else { "Create a new Post" };

	page_shell(
		&format!("{heading} | Blogger"),
		html! {
			(nav())
			div class="toolbar" {
				h1 class="page-title" style="margin-bottom:0" { (heading) }
				a class="btn btn-blue" href="/" { "← Back to Home" }
			}
			(error_block(problems))
			form method="post" action="/dashboard" enctype="multipart/form-data" {
				@if let Some(post_id) = &form.post_id {
					input type="hidden" name="post_id" value=(post_id);
				}
				@if let Some(image_url) = &form.image_url {
					input type="hidden" name="image_url" value=(image_url);
				}
				label for="title" { "Post Title" }
				input type="text" id="title" name="title" placeholder="Post Title"
					value=(form.title) required;
				(markdown_help())
				div class="tabs" {
					button type="submit" name="tab" value="write"
						formaction="/dashboard/preview"
						class=(if form.tab == model::Tab::Write { "active" } else { "" }) {
						"Write"
					}
					button type="submit" name="tab" value="preview"
						formaction="/dashboard/preview"
						class=(if form.tab == model::Tab::Preview { "active" } else { "" }) {
						"Preview"
					}
				}
				@match form.tab {
					model::Tab::Write => {
						textarea id="content" name="content"
							placeholder="Write your blog post in Markdown..." {
							(form.content)
						}
					}
					model::Tab::Preview => {
						div class="preview-pane" { (markdown::preview(&form.content)) }
						textarea name="content" hidden { (form.content) }
					}
				}
				label { "Blog Image (Optional)" }
				label class="upload" {
					@if form.image_url.is_some() {
						p class="muted" { "Click to change image" }
					} @else {
						p class="muted" { "Click to upload image" }
					}
					input type="file" name="image" accept="image/*" style="display:none";
				}
				button type="submit" class="btn btn-blue" {
					(if editing { "Update Post" } else { "Post Blog" })
				}
			}
		},
	)
}

fn markdown_help() -> Markup {
	html! {
		details class="muted" style="margin:.5rem 0;font-size:.9rem" {
			summary { "Markdown Help" }
			ul style="list-style:none;margin-top:.5rem" {
				li { code { "# Heading" } " / " code { "## Subheading" } " / " code { "### Section" } }
				li { code { "**bold**" } ", " code { "*italic*" } ", " code { "`inline code`" } }
				li { code { "- item" } " or " code { "1. item" } " for lists" }
				li { code { "[Link text](url)" } " for links" }
				li { code { "```" } " on its own line fences a code block" }
			}
		}
	}
}

fn delete_form(post_id: &str, return_to: &str) -> Markup {
	html! {
		form method="post" action={ "/post/" (post_id) "/delete" }
			onsubmit="return confirm('Are you sure you want to delete this post?')" {
			input type="hidden" name="return_to" value=(return_to);
			button type="submit" class="btn btn-danger" style="margin-top:0" { "Delete" }
		}
	}
}
