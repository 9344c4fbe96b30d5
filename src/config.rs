/// Runtime configuration, sourced from the environment.
///
/// `SUPABASE_URL` and `SUPABASE_ANON_KEY` identify the hosted backend
/// project and have no sensible defaults; everything else falls back to a
/// local-development value.
#[derive(Debug, Clone)]
pub struct Config {
	/// Port the HTTP server listens on.
	pub port: u16,
	/// Base URL of the hosted backend, without a trailing slash.
	pub supabase_url: String,
	/// Public project key, sent with every backend request.
	pub supabase_anon_key: String,
	/// Storage bucket that holds uploaded cover images.
	pub storage_bucket: String,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{0} must be set")]
	Missing(&'static str),
	#[error("PORT must be a number")]
	InvalidPort(#[from] std::num::ParseIntError),
}

impl Config {
	pub fn from_env() -> Result<Self, Error> {
		let port = match std::env::var("PORT") {
			Ok(port) => port.parse()?,
			Err(_) => 3000,
		};

		let supabase_url = std::env::var("SUPABASE_URL")
			.map_err(|_| Error::Missing("SUPABASE_URL"))?
			.trim_end_matches('/')
			.to_string();

		let supabase_anon_key =
			std::env::var("SUPABASE_ANON_KEY").map_err(|_| Error::Missing("SUPABASE_ANON_KEY"))?;

		let storage_bucket =
			std::env::var("SUPABASE_BUCKET").unwrap_or_else(|_| "blog-images".to_string());

		Ok(Self {
			port,
			supabase_url,
			supabase_anon_key,
			storage_bucket,
		})
	}
}
