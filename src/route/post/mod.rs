use axum::{
	extract::DefaultBodyLimit,
	http::StatusCode,
	routing::{get, post},
	Router,
};

use crate::{error, AppState};

pub mod model;
pub mod route;

/// Body limit for the authoring form: the cover image plus some slack for
/// the text fields.
const MAX_BODY_BYTES: usize = model::MAX_IMAGE_BYTES + 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Post not found.")]
	UnknownPost,
	#[error("{0}")]
	Multipart(#[from] axum::extract::multipart::MultipartError),
}

pub type RouteError = error::RouteError<Error>;

impl From<Error> for RouteError {
	fn from(error: Error) -> Self {
		Self::App(error)
	}
}

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route("/", get(feed))
		.route("/dashboard", get(dashboard).post(submit))
		.route("/dashboard/preview", post(preview))
		.route("/manage-blogs", get(manage))
		.route("/post/:id", get(detail))
		.route("/post/:id/delete", post(delete))
		.layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownPost => StatusCode::NOT_FOUND,
			Self::Multipart(error) => error.status(),
		}
	}

	fn message(&self) -> String {
		self.to_string()
	}
}

#[cfg(test)]
mod test {
	use crate::test::*;

	fn editor_form(title: &str, content: &str) -> MultipartForm {
		MultipartForm::new()
			.add_text("title", title)
			.add_text("content", content)
	}

	#[tokio::test]
	async fn test_feed_requires_a_session() {
		let app = app().await;

		let response = app.get("/").await;

		assert_eq!(response.status_code(), 303);
		assert_eq!(response.header("location").to_str().unwrap(), "/welcome");
	}

	#[tokio::test]
	async fn test_created_post_appears_on_the_feed() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;

		let response = app
			.post("/dashboard")
			.multipart(editor_form("My First Post", "Hello out there."))
			.await;

		assert_eq!(response.status_code(), 303);
		assert_eq!(response.header("location").to_str().unwrap(), "/");

		let page = app.get("/").await.text();

		assert!(page.contains("My First Post"));
		assert!(page.contains("By: John Doe"));
		assert!(page.contains("Hello out there."));
	}

	#[tokio::test]
	async fn test_feed_excerpt_strips_markdown() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;

		app.post("/dashboard")
			.multipart(editor_form(
				"Styling",
				"# Heading\n\nSome **bold** words and [a link](https://example.com).",
			))
			.await;

		let page = app.get("/").await.text();

		assert!(page.contains("Heading Some bold words and a link."));
		assert!(!page.contains("**bold**"));
	}

	#[tokio::test]
	async fn test_empty_feed_has_a_placeholder() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;

		let page = app.get("/").await.text();

		assert!(page.contains("No posts yet :("));
	}

	#[tokio::test]
	async fn test_submit_reports_missing_fields_inline() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;

		let response = app
			.post("/dashboard")
			.multipart(editor_form("", "  "))
			.await;

		assert_eq!(response.status_code(), 200);

		let page = response.text();

		assert!(page.contains("Title is required"));
		assert!(page.contains("Content is required"));
	}

	#[tokio::test]
	async fn test_dashboard_prefills_the_post_under_edit() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;
		app.post("/dashboard")
			.multipart(editor_form("My First Post", "Original content."))
			.await;

		let id = app.backend.latest_post_id();
		let response = app.get(&format!("/dashboard?edit={id}")).await;

		assert_eq!(response.status_code(), 200);

		let page = response.text();

		assert!(page.contains("Edit Post"));
		assert!(page.contains(r#"value="My First Post""#));
		assert!(page.contains("Original content."));
		assert!(page.contains("Update Post"));
	}

	#[tokio::test]
	async fn test_edit_updates_the_post() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;
		app.post("/dashboard")
			.multipart(editor_form("My First Post", "Original content."))
			.await;

		let id = app.backend.latest_post_id();
		let response = app
			.post("/dashboard")
			.multipart(editor_form("Revised Post", "Revised content.").add_text("post_id", &id))
			.await;

		assert_eq!(response.status_code(), 303);

		let page = app.get("/").await.text();

		assert!(page.contains("Revised Post"));
		assert!(!page.contains("My First Post"));
	}

	#[tokio::test]
	async fn test_editing_another_authors_post_is_not_found() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;
		app.post("/dashboard")
			.multipart(editor_form("John's Post", "Content."))
			.await;

		let id = app.backend.latest_post_id();

		app.get("/signout").await;
		sign_up(&app, "Jane Roe", "jane@roe.com").await;

		let response = app.get(&format!("/dashboard?edit={id}")).await;

		assert_eq!(response.status_code(), 404);

		let response = app
			.post("/dashboard")
			.multipart(editor_form("Hijacked", "Content.").add_text("post_id", &id))
			.await;

		assert_eq!(response.status_code(), 404);
		assert!(response.text().contains("Post not found."));
	}

	#[tokio::test]
	async fn test_post_page_renders_the_markdown() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;
		app.post("/dashboard")
			.multipart(editor_form("Reading", "# Big\n\nSome **bold** text."))
			.await;

		let id = app.backend.latest_post_id();
		let response = app.get(&format!("/post/{id}")).await;

		assert_eq!(response.status_code(), 200);

		let page = response.text();

		assert!(page.contains("<strong>bold</strong>"));
		assert!(page.contains("By: John Doe"));
		assert!(page.contains("Edit Blog"));
	}

	#[tokio::test]
	async fn test_unknown_post_is_not_found() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;

		let response = app.get("/post/does-not-exist").await;

		assert_eq!(response.status_code(), 404);
		assert!(response.text().contains("Post not found."));
	}

	#[tokio::test]
	async fn test_post_page_hides_edit_for_other_authors() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;
		app.post("/dashboard")
			.multipart(editor_form("John's Post", "Content."))
			.await;

		let id = app.backend.latest_post_id();

		app.get("/signout").await;
		sign_up(&app, "Jane Roe", "jane@roe.com").await;

		let page = app.get(&format!("/post/{id}")).await.text();

		assert!(page.contains("By: John Doe"));
		assert!(!page.contains("Edit Blog"));
	}

	#[tokio::test]
	async fn test_manage_lists_only_own_posts() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;
		app.post("/dashboard")
			.multipart(editor_form("Alpha Post", "Content."))
			.await;

		app.get("/signout").await;
		sign_up(&app, "Jane Roe", "jane@roe.com").await;
		app.post("/dashboard")
			.multipart(editor_form("Beta Post", "Content."))
			.await;

		let page = app.get("/manage-blogs").await.text();

		assert!(page.contains("Beta Post"));
		assert!(!page.contains("Alpha Post"));
		assert!(page.contains("Created:"));
	}

	#[tokio::test]
	async fn test_manage_empty_state() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;

		let page = app.get("/manage-blogs").await.text();

		assert!(page.contains("You haven't written any blogs yet."));
		assert!(page.contains("Write Your First Blog"));
	}

	#[tokio::test]
	async fn test_preview_renders_the_markdown_pane() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;

		let response = app
			.post("/dashboard/preview")
			.multipart(editor_form("Draft", "# Preview Me").add_text("tab", "preview"))
			.await;

		assert_eq!(response.status_code(), 200);

		let page = response.text();

		assert!(page.contains("<h1>Preview Me</h1>"));
		assert!(page.contains(r#"value="Draft""#));
	}

	#[tokio::test]
	async fn test_preview_of_nothing_explains_itself() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;

		let response = app
			.post("/dashboard/preview")
			.multipart(editor_form("Draft", "").add_text("tab", "preview"))
			.await;

		assert!(response
			.text()
			.contains("No content to preview. Start writing in the Write tab."));
	}

	#[tokio::test]
	async fn test_delete_removes_the_post() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;
		app.post("/dashboard")
			.multipart(editor_form("My First Post", "Content."))
			.await;

		let id = app.backend.latest_post_id();
		let response = app
			.post(&format!("/post/{id}/delete"))
			.form(&json!({ "return_to": "/" }))
			.await;

		assert_eq!(response.status_code(), 303);
		assert_eq!(response.header("location").to_str().unwrap(), "/");

		let page = app.get("/").await.text();

		assert!(page.contains("No posts yet :("));
	}

	#[tokio::test]
	async fn test_delete_returns_to_the_manage_view_when_asked() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;
		app.post("/dashboard")
			.multipart(editor_form("My First Post", "Content."))
			.await;

		let id = app.backend.latest_post_id();
		let response = app
			.post(&format!("/post/{id}/delete"))
			.form(&json!({ "return_to": "/manage-blogs" }))
			.await;

		assert_eq!(response.status_code(), 303);
		assert_eq!(
			response.header("location").to_str().unwrap(),
			"/manage-blogs"
		);
	}

	#[tokio::test]
	async fn test_deleting_another_authors_post_is_not_found() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;
		app.post("/dashboard")
			.multipart(editor_form("John's Post", "Content."))
			.await;

		let id = app.backend.latest_post_id();

		app.get("/signout").await;
		sign_up(&app, "Jane Roe", "jane@roe.com").await;

		let response = app
			.post(&format!("/post/{id}/delete"))
			.form(&json!({ "return_to": "/" }))
			.await;

		assert_eq!(response.status_code(), 404);
	}

	#[tokio::test]
	async fn test_cover_image_is_uploaded_and_shown() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;

		let image = Part::bytes(vec![0x89, b'P', b'N', b'G'])
			.file_name("cover.png")
			.mime_type("image/png");
		let response = app
			.post("/dashboard")
			.multipart(editor_form("Pictures", "Look at this.").add_part("image", image))
			.await;

		assert_eq!(response.status_code(), 303);

		let id = app.backend.latest_post_id();
		let page = app.get(&format!("/post/{id}")).await.text();

		assert!(page.contains("/storage/v1/object/public/blog-images/"));
		assert!(page.contains(".png"));
	}

	#[tokio::test]
	async fn test_non_image_upload_is_rejected_inline() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;

		let file = Part::bytes(vec![b'%', b'P', b'D', b'F'])
			.file_name("notes.pdf")
			.mime_type("application/pdf");
		let response = app
			.post("/dashboard")
			.multipart(editor_form("Pictures", "Content.").add_part("image", file))
			.await;

		assert_eq!(response.status_code(), 200);
		assert!(response.text().contains("Please select an image file"));
	}

	#[tokio::test]
	async fn test_oversized_image_is_rejected_inline() {
		let app = app().await;
		sign_up(&app, "John Doe", "john@smith.com").await;

		let image = Part::bytes(vec![0; super::model::MAX_IMAGE_BYTES + 1])
			.file_name("huge.png")
			.mime_type("image/png");
		let response = app
			.post("/dashboard")
			.multipart(editor_form("Pictures", "Content.").add_part("image", image))
			.await;

		assert_eq!(response.status_code(), 200);
		assert!(response.text().contains("Image size must be less than 5MB"));
	}
}
