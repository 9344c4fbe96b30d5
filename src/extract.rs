use axum::{
	extract::{FromRef, FromRequestParts},
	http::{header, request},
	response::{IntoResponse, Redirect, Response},
};

use crate::{
	session,
	supabase::{self, model::AuthUser},
};

/// The signed-in user behind the request.
///
/// The session cookie holds an access token issued by the auth service; the
/// extractor asks the service to resolve it, so a forged or expired token
/// never reaches a handler.
///
/// ```rust
/// async fn route(session: Session) {
///   println!("{}", session.user.id);
/// }
/// ```
#[derive(Debug)]
pub struct Session {
	pub token: String,
	pub user: AuthUser,
}

/// Requests without a usable session land on the welcome page.
#[derive(Debug)]
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
	fn into_response(self) -> Response {
		Redirect::to("/welcome").into_response()
	}
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Session
where
	supabase::Client: FromRef<S>,
	S: Sync + Send,
{
	type Rejection = AuthRedirect;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let cookies = parts
			.headers
			.get_all(header::COOKIE)
			.into_iter()
			.filter_map(|value| value.to_str().ok());

		let cookie = cookies
			.flat_map(cookie::Cookie::split_parse)
			.filter_map(Result::ok)
			.find(|cookie| cookie.name() == session::COOKIE_NAME)
			.ok_or(AuthRedirect)?;

		let token = cookie.value().to_string();
		let supabase = supabase::Client::from_ref(state);

		// A token the auth service no longer recognizes is the same as no
		// token at all.
		let user = supabase.user(&token).await.map_err(|_| AuthRedirect)?;

		Ok(Session { token, user })
	}
}
