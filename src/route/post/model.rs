use axum::extract::multipart::{Multipart, MultipartError};
use chrono::Utc;
use serde::Deserialize;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Deserialize)]
pub struct EditQuery {
	pub edit: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteInput {
	pub return_to: Option<String>,
}

/// Which pane of the authoring form is showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
	#[default]
	Write,
	Preview,
}

/// A cover image picked in the authoring form.
pub struct Upload {
	pub file_name: String,
	pub content_type: String,
	pub data: Vec<u8>,
}

/// The authoring form as submitted, editing an existing post when `post_id`
/// is set. `image_url` carries a previously uploaded cover across submits.
#[derive(Default)]
pub struct EditorForm {
	pub post_id: Option<String>,
	pub title: String,
	pub content: String,
	pub image_url: Option<String>,
	pub image: Option<Upload>,
	pub tab: Tab,
}

impl EditorForm {
	/// Problems that block publishing, checked before any network call.
	pub fn problems(&self) -> Vec<String> {
		let mut problems = Vec::new();

		if self.title.trim().is_empty() {
			problems.push("Title is required".to_string());
		}

		if self.content.trim().is_empty() {
			problems.push("Content is required".to_string());
		}

		if let Some(image) = &self.image {
			if !image.content_type.starts_with("image/") {
				problems.push("Please select an image file".to_string());
			} else if image.data.len() > MAX_IMAGE_BYTES {
				problems.push("Image size must be less than 5MB".to_string());
			}
		}

		problems
	}
}

pub async fn read_editor_form(mut multipart: Multipart) -> Result<EditorForm, MultipartError> {
	let mut form = EditorForm::default();

	while let Some(field) = multipart.next_field().await? {
		let name = field.name().unwrap_or_default().to_string();

		match name.as_str() {
			"post_id" => {
				let value = field.text().await?;

				if !value.is_empty() {
					form.post_id = Some(value);
				}
			}
			"title" => form.title = field.text().await?,
			"content" => form.content = field.text().await?,
			"image_url" => {
				let value = field.text().await?;

				if !value.is_empty() {
					form.image_url = Some(value);
				}
			}
			"tab" => {
				if field.text().await? == "preview" {
					form.tab = Tab::Preview;
				}
			}
			"image" => {
				let file_name = field.file_name().unwrap_or_default().to_string();
				let content_type = field.content_type().unwrap_or_default().to_string();
				let data = field.bytes().await?.to_vec();

				// Browsers submit an empty part when no file was picked.
				if !file_name.is_empty() && !data.is_empty() {
					form.image = Some(Upload {
						file_name,
						content_type,
						data,
					});
				}
			}
			_ => {}
		}
	}

	Ok(form)
}

/// Storage key for a cover upload: `{author}/{millis}.{extension}`.
pub fn image_key(author_id: &str, file_name: &str) -> String {
	let extension = file_name.rsplit('.').next().unwrap_or_default();

	format!(
		"{author_id}/{}.{extension}",
		Utc::now().timestamp_millis()
	)
}
