//! Calls against the auth service.

use reqwest::Method;
use serde_json::json;

use super::{
	check,
	model::{AuthSession, AuthUser, SignUp},
	Client, Error,
};

impl Client {
	/// Exchanges credentials for a session.
	pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, Error> {
		let response = self
			.request(
				Method::POST,
				format!("{}/auth/v1/token", self.base_url),
				&self.anon_key,
			)
			.query(&[("grant_type", "password")])
			.json(&json!({ "email": email, "password": password }))
			.send()
			.await?;

		Ok(check(response).await?.json().await?)
	}

	/// Registers a new identity. The display name travels in the metadata
	/// blob so it survives even when confirmation is pending.
	pub async fn sign_up(
		&self,
		email: &str,
		password: &str,
		display_name: &str,
	) -> Result<SignUp, Error> {
		let response = self
			.request(
				Method::POST,
				format!("{}/auth/v1/signup", self.base_url),
				&self.anon_key,
			)
			.json(&json!({
				"email": email,
				"password": password,
				"data": { "display_name": display_name },
			}))
			.send()
			.await?;

		Ok(check(response).await?.json().await?)
	}

	/// Resolves an access token to its user, rejecting expired or forged
	/// tokens along the way.
	pub async fn user(&self, token: &str) -> Result<AuthUser, Error> {
		let response = self
			.request(Method::GET, format!("{}/auth/v1/user", self.base_url), token)
			.send()
			.await?;

		Ok(check(response).await?.json().await?)
	}

	/// Starts an email change; the service mails a confirmation link before
	/// anything takes effect.
	pub async fn update_email(&self, token: &str, email: &str) -> Result<(), Error> {
		let response = self
			.request(Method::PUT, format!("{}/auth/v1/user", self.base_url), token)
			.json(&json!({ "email": email }))
			.send()
			.await?;

		check(response).await?;

		Ok(())
	}

	pub async fn update_password(&self, token: &str, password: &str) -> Result<(), Error> {
		let response = self
			.request(Method::PUT, format!("{}/auth/v1/user", self.base_url), token)
			.json(&json!({ "password": password }))
			.send()
			.await?;

		check(response).await?;

		Ok(())
	}

	/// Revokes the session behind the token.
	pub async fn sign_out(&self, token: &str) -> Result<(), Error> {
		let response = self
			.request(Method::POST, format!("{}/auth/v1/logout", self.base_url), token)
			.send()
			.await?;

		check(response).await?;

		Ok(())
	}
}
