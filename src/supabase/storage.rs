//! Calls against object storage.

use reqwest::{header::CONTENT_TYPE, Method};

use super::{check, Client, Error};

impl Client {
	/// Uploads a cover image under the given key and returns the public URL
	/// the bucket serves it from.
	pub async fn upload_image(
		&self,
		token: &str,
		key: &str,
		content_type: &str,
		data: Vec<u8>,
	) -> Result<String, Error> {
		let response = self
			.request(
				Method::POST,
				format!("{}/storage/v1/object/{}/{key}", self.base_url, self.bucket),
				token,
			)
			.header(CONTENT_TYPE, content_type)
			.body(data)
			.send()
			.await?;

		check(response).await?;

		Ok(format!(
			"{}/storage/v1/object/public/{}/{key}",
			self.base_url, self.bucket
		))
	}
}
