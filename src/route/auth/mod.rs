use axum::{
	routing::{get, post},
	Router,
};

use crate::AppState;

pub mod model;
pub mod route;

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route("/welcome", get(welcome))
		.route("/signin", get(sign_in_page))
		.route("/signup", get(sign_up_page))
		.route("/signout", get(sign_out))
}

/// The POST targets that accept credentials, split out so `main` can wrap
/// them in the tight rate limit.
pub fn credential_routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route("/signin", post(sign_in))
		.route("/signup", post(sign_up))
}
