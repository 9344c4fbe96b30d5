use axum::{
	extract::State,
	http::header,
	response::{IntoResponse, Redirect, Response},
	Form,
};
use chrono::Utc;
use maud::{html, Markup};
use validator::Validate;

use crate::{
	error::validation_messages,
	extract::Session,
	render::{error_block, page_shell, success_block},
	route::model::fallback_name,
	session,
	supabase::{
		self,
		model::{AuthUser, NewProfile, SignUp},
	},
};

use super::model;

/// Welcome
/// Landing page for signed-out visitors.
pub async fn welcome() -> Markup {
	page_shell(
		"Blogger",
		html! {
			div class="centered" {
				h1 class="brand" { "Welcome to Blogger." }
				div class="card-actions" style="justify-content:center" {
					a class="btn btn-blue" href="/signin" { "Sign In" }
					a class="btn btn-green" href="/signup" { "Sign Up" }
				}
			}
		},
	)
}

/// Sign-in page
pub async fn sign_in_page() -> Markup {
	sign_in_form("", &[])
}

/// Sign in
/// Exchanges credentials for a session cookie and lands on the feed.
pub async fn sign_in(
	State(supabase): State<supabase::Client>,
	Form(input): Form<model::SignInInput>,
) -> Response {
	if let Err(errors) = input.validate() {
		return sign_in_form(&input.email, &validation_messages(&errors)).into_response();
	}

	let session = match supabase.sign_in(input.email.trim(), &input.password).await {
		Ok(session) => session,
		Err(error) => return sign_in_form(&input.email, &[error.message()]).into_response(),
	};

	// Accounts that predate the profile table get their row here.
	if let Err(error) = ensure_profile(&supabase, &session.access_token, &session.user).await {
		tracing::warn!(error = %error, "profile provisioning failed");
	}

	let cookie = session::create_cookie(session.access_token);

	([(header::SET_COOKIE, cookie.to_string())], Redirect::to("/")).into_response()
}

/// Sign-up page
pub async fn sign_up_page() -> Markup {
	sign_up_form("", "", &[], None)
}

/// Sign up
/// Registers an account. Lands on the feed when the project auto-confirms,
/// otherwise re-renders with the check-your-email notice.
pub async fn sign_up(
	State(supabase): State<supabase::Client>,
	Form(input): Form<model::SignUpInput>,
) -> Response {
	if let Err(errors) = input.validate() {
		return sign_up_form(
			&input.display_name,
			&input.email,
			&validation_messages(&errors),
			None,
		)
		.into_response();
	}

	let display_name = input.display_name.trim();

	let sign_up = match supabase
		.sign_up(input.email.trim(), &input.password, display_name)
		.await
	{
		Ok(sign_up) => sign_up,
		Err(error) => {
			return sign_up_form(&input.display_name, &input.email, &[error.message()], None)
				.into_response()
		}
	};

	let session = match sign_up {
		SignUp::Confirmed(session) => session,
		SignUp::Pending(..) => {
			return sign_up_form("", "", &[], Some("Check your email for the confirmation link!"))
				.into_response()
		}
	};

	let now = Utc::now();
	let profile = NewProfile {
		id: &session.user.id,
		display_name,
		email: session.user.email.as_deref(),
		created_at: now,
		updated_at: now,
	};

	if let Err(error) = supabase
		.create_profile(&session.access_token, &profile)
		.await
	{
		tracing::warn!(error = %error, "profile creation failed");
	}

	let cookie = session::create_cookie(session.access_token);

	([(header::SET_COOKIE, cookie.to_string())], Redirect::to("/")).into_response()
}

/// Sign out
/// Revokes the session when possible and clears the cookie either way.
pub async fn sign_out(
	State(supabase): State<supabase::Client>,
	session: Option<Session>,
) -> impl IntoResponse {
	if let Some(session) = session {
		if let Err(error) = supabase.sign_out(&session.token).await {
			tracing::warn!(error = %error, "session revocation failed");
		}
	}

	(
		[(header::SET_COOKIE, session::clear_cookie().to_string())],
		Redirect::to("/welcome"),
	)
}

/// Creates the profile row for identities that signed up before the profile
/// table existed, naming them from the sign-up metadata when it is there.
async fn ensure_profile(
	supabase: &supabase::Client,
	token: &str,
	user: &AuthUser,
) -> Result<(), supabase::Error> {
	if supabase.profile(token, &user.id).await?.is_some() {
		return Ok(());
	}

	let display_name = user
		.user_metadata
		.display_name
		.clone()
		.unwrap_or_else(|| fallback_name(&user.id));

	let now = Utc::now();

	supabase
		.create_profile(
			token,
			&NewProfile {
				id: &user.id,
				display_name: &display_name,
				email: None,
				created_at: now,
				updated_at: now,
			},
		)
		.await
}

fn sign_in_form(email: &str, errors: &[String]) -> Markup {
	page_shell(
		"Sign In | Blogger",
		html! {
			div class="centered" {
				h1 class="page-title" { "Sign In" }
				p class="muted" { "Welcome back to Blogger" }
				(error_block(errors))
				form method="post" action="/signin" {
					label for="email" { "Email*" }
					input type="email" id="email" name="email" value=(email) required;
					label for="password" { "Password*" }
					input type="password" id="password" name="password" required;
					button type="submit" class="btn btn-blue" style="width:100%" { "Sign In" }
				}
				p style="margin-top:1.5rem" {
					"Don't have an account? " a href="/signup" { "Sign up" }
				}
			}
		},
	)
}

fn sign_up_form(
	display_name: &str,
	email: &str,
	errors: &[String],
	message: Option<&str>,
) -> Markup {
	page_shell(
		"Sign Up | Blogger",
		html! {
			div class="centered" {
				h1 class="page-title" { "Sign Up" }
				p class="muted" { "Create your Blogger account" }
				(error_block(errors))
				@if let Some(message) = message {
					(success_block(message))
				}
				form method="post" action="/signup" {
					label for="display_name" { "Display Name*" }
					p class="muted" style="font-size:.8rem" {
						"This will be your public name on all blog posts."
					}
					input type="text" id="display_name" name="display_name"
						value=(display_name) placeholder="Enter your display name" required;
					label for="email" { "Email*" }
					input type="email" id="email" name="email" value=(email) required;
					label for="password" { "Password*" }
					input type="password" id="password" name="password" required;
					label for="confirm_password" { "Confirm Password*" }
					input type="password" id="confirm_password" name="confirm_password" required;
					button type="submit" class="btn btn-green" style="width:100%" { "Sign Up" }
				}
				p style="margin-top:1.5rem" {
					"Already have an account? " a href="/signin" { "Sign in" }
				}
			}
		},
	)
}
