use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::{render, supabase};

/// How a module's error appears to the user.
pub trait ErrorShape {
	fn status(&self) -> StatusCode;
	fn message(&self) -> String;
}

/// Error type for route handlers.
///
/// Each route module declares its own `Error` enum and aliases
/// `RouteError<Error>`; backend failures convert in via `?` everywhere.
#[derive(Debug, thiserror::Error)]
pub enum RouteError<E> {
	#[error(transparent)]
	App(E),
	#[error(transparent)]
	Supabase(#[from] supabase::Error),
}

impl<E: ErrorShape> IntoResponse for RouteError<E> {
	fn into_response(self) -> Response {
		let (status, message) = match &self {
			Self::App(error) => (error.status(), error.message()),
			Self::Supabase(error) => {
				tracing::error!(error = %error, "backend call failed");
				(StatusCode::BAD_GATEWAY, error.message())
			}
		};

		error_page(status, &message)
	}
}

/// Full-page error for failures that have no form to surface on.
pub fn error_page(status: StatusCode, message: &str) -> Response {
	(status, document(status, message)).into_response()
}

fn document(status: StatusCode, message: &str) -> Markup {
	let title = match status {
		StatusCode::NOT_FOUND => "Not Found",
		StatusCode::BAD_REQUEST => "Bad Request",
		StatusCode::TOO_MANY_REQUESTS => "Slow Down",
		StatusCode::BAD_GATEWAY => "Backend Unavailable",
		_ => "Something Went Wrong",
	};

	html! {
		(DOCTYPE)
		html lang="en" {
			head {
				meta charset="utf-8";
				meta name="viewport" content="width=device-width, initial-scale=1";
				title { (title) }
				style { (PreEscaped(render::ERROR_CSS)) }
			}
			body {
				div class="error-page" {
					h1 { (title) }
					p { (message) }
					a href="/" { "Back to the feed" }
				}
			}
		}
	}
}

/// Flattens validator output into the messages the form models declare.
pub fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
	errors
		.field_errors()
		.into_values()
		.flatten()
		.map(ToString::to_string)
		.collect()
}
