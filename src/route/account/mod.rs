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
		.route("/account", get(page))
		.route("/account/email", post(update_email))
		.route("/account/password", post(update_password))
		.route("/account/display-name", post(update_display_name))
}
