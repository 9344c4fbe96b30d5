use cookie::SameSite;

pub const COOKIE_NAME: &str = "session";

/// Wraps the access token issued by the auth service in a session cookie.
/// The token carries its own expiry, so the cookie gets none.
pub fn create_cookie(access_token: String) -> cookie::Cookie<'static> {
	cookie::Cookie::build((COOKIE_NAME, access_token))
		.secure(!cfg!(debug_assertions))
		.http_only(true)
		.same_site(SameSite::Lax)
		.path("/")
		.into()
}

/// Creates an empty session cookie used to invalidate a previous one
pub fn clear_cookie() -> cookie::Cookie<'static> {
	cookie::Cookie::build(COOKIE_NAME)
		.http_only(true)
		.same_site(SameSite::Lax)
		.path("/")
		.max_age(cookie::time::Duration::ZERO)
		.into()
}

#[cfg(test)]
mod test {
	use super::{clear_cookie, create_cookie, COOKIE_NAME};

	#[test]
	fn test_create_cookie_wraps_token() {
		let cookie = create_cookie("token-123".to_string());

		assert_eq!(cookie.name(), COOKIE_NAME);
		assert_eq!(cookie.value(), "token-123");
		assert_eq!(cookie.http_only(), Some(true));
		assert_eq!(cookie.path(), Some("/"));
	}

	#[test]
	fn test_clear_cookie_expires_immediately() {
		let cookie = clear_cookie();

		assert_eq!(cookie.name(), COOKIE_NAME);
		assert_eq!(cookie.max_age(), Some(cookie::time::Duration::ZERO));
	}
}
