//! HTTP client for the hosted backend.
//!
//! All persistence is delegated to a Supabase-style stack: the auth service
//! owns credentials and identities, the row store owns posts and profiles,
//! and object storage owns cover images. This module is the only place that
//! knows their wire formats; handlers work with the typed methods in
//! [`auth`], [`posts`], and [`storage`].

pub mod auth;
pub mod model;
pub mod posts;
pub mod storage;

use serde::Deserialize;

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The service rejected the request. The message comes from the service
	/// itself and is safe to show to the user.
	#[error("{0}")]
	Service(String),
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
}

impl Error {
	/// Message suitable for inline display on a form page.
	pub fn message(&self) -> String {
		match self {
			Self::Service(message) => message.clone(),
			Self::Transport(..) => {
				"The backend service could not be reached. Please try again later.".to_string()
			}
		}
	}
}

/// Shared client for all three backend services.
#[derive(Debug, Clone)]
pub struct Client {
	http: reqwest::Client,
	base_url: String,
	anon_key: String,
	bucket: String,
}

impl Client {
	pub fn new(config: &Config) -> Self {
		Self {
			http: reqwest::Client::new(),
			base_url: config.supabase_url.clone(),
			anon_key: config.supabase_anon_key.clone(),
			bucket: config.storage_bucket.clone(),
		}
	}

	/// Request builder with the project key attached and the caller's access
	/// token as the bearer. Unauthenticated calls pass the project key as
	/// the token as well, which is how the services expect it.
	fn request(&self, method: reqwest::Method, url: String, token: &str) -> reqwest::RequestBuilder {
		self.http
			.request(method, url)
			.header("apikey", &self.anon_key)
			.bearer_auth(token)
	}
}

/// Rejects non-2xx responses, extracting the service's own error message.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, Error> {
	if response.status().is_success() {
		return Ok(response);
	}

	Err(Error::Service(service_message(response).await))
}

/// The three services disagree on the error body field name; try each in
/// turn before falling back to the status code.
async fn service_message(response: reqwest::Response) -> String {
	#[derive(Deserialize)]
	struct Body {
		error_description: Option<String>,
		msg: Option<String>,
		message: Option<String>,
	}

	let status = response.status();

	response
		.json::<Body>()
		.await
		.ok()
		.and_then(|body| body.error_description.or(body.msg).or(body.message))
		.unwrap_or_else(|| format!("The backend service responded with status {status}."))
}
